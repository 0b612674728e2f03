//! Extending a chosen track to the longest run present in a sequence.
//!
//! A track chosen by an operator (or the count reported for it) may be shorter
//! than the longest run of its unit in the sequence. The extender grows the
//! count one copy at a time for as long as the longer run is still found
//! somewhere in the sequence.
//!
//! Note that the search is _not_ anchored to where the track was originally
//! found: each step looks for the longer run anywhere in the sequence. If a
//! longer run of the same unit exists elsewhere, that run's count is the one
//! returned. This behavior is relied upon by existing repeat catalogs and is
//! kept as-is; see [`Resolution::is_relocated()`](crate::Resolution::is_relocated)
//! for detecting when it occurs.

use crate::Track;

/// An error related to extending a track.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// The track does not occur anywhere within the sequence.
    TrackNotPresent(Track),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::TrackNotPresent(track) => {
                write!(f, "track ({track}) is not present in the sequence")
            }
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// Finds the offset of the first occurrence of `needle` within `haystack`.
///
/// # Examples
///
/// ```
/// use repeatspec::extender::find;
///
/// assert_eq!(find(b"CCATATAT", b"ATAT"), Some(2));
/// assert_eq!(find(b"CCATATAT", b"GG"), None);
/// ```
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }

    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Returns whether the expanded run of `track` is no longer than `sequence`.
///
/// A track that does not fit cannot occur within the sequence, so this is
/// checked before the run is ever expanded.
pub(crate) fn fits(sequence: &[u8], track: &Track) -> bool {
    track
        .unit()
        .len()
        .checked_mul(track.count())
        .is_some_and(|length| length <= sequence.len())
}

/// Extends `track` to the largest count `n` such that the unit repeated `n`
/// times occurs within `sequence`.
///
/// The returned track keeps the anchor (if any) of the original track.
///
/// # Examples
///
/// ```
/// use repeatspec::extender::extend;
/// use repeatspec::Track;
///
/// let extended = extend(b"CCGAAGAAGAAGAATT", &Track::new("GAA", 2))?;
/// assert_eq!(extended.count(), 4);
///
/// assert!(extend(b"CCGAAGAAGAAGAATT", &Track::new("GAA", 5)).is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn extend(sequence: &[u8], track: &Track) -> Result<Track> {
    if !fits(sequence, track) {
        return Err(Error::TrackNotPresent(track.clone()));
    }

    let mut run = track.expand().into_bytes();
    if find(sequence, &run).is_none() {
        return Err(Error::TrackNotPresent(track.clone()));
    }

    let unit = track.unit().as_bytes();
    let mut count = track.count();

    loop {
        run.extend_from_slice(unit);

        if find(sequence, &run).is_none() {
            break;
        }

        count += 1;
    }

    Ok(match track.start() {
        Some(start) => Track::anchored(track.unit(), count, start),
        None => Track::new(track.unit(), count),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_already_maximal() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let track = Track::anchored("GAA", 7, 3);
        let extended = extend(b"CCCGAAGAAGAAGAAGAAGAAGAATTT", &track)?;

        assert_eq!(extended, track);
        Ok(())
    }

    #[test]
    fn test_extend_matches_anywhere() -> std::result::Result<(), Box<dyn std::error::Error>> {
        // The (CAG)2 run at offset 0 is extended to the count of the (CAG)4
        // run found later in the sequence.
        let sequence = b"CAGCAGTTTTCAGCAGCAGCAGTT";
        let extended = extend(sequence, &Track::anchored("CAG", 2, 0))?;

        assert_eq!(extended.count(), 4);
        assert_eq!(extended.start(), Some(0));
        Ok(())
    }

    #[test]
    fn test_oversized_track() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let sequence = b"CCGAAGAAGAAGAATT";

        // A count this large saturates when parsed and would overflow if the
        // run were expanded.
        let track = "GAA,1e30".parse::<Track>()?;
        assert_eq!(track.count(), usize::MAX);
        assert_eq!(
            extend(sequence, &track).unwrap_err(),
            Error::TrackNotPresent(track)
        );

        let track = Track::new("GAA", 6);
        assert_eq!(
            extend(sequence, &track).unwrap_err(),
            Error::TrackNotPresent(track)
        );

        Ok(())
    }

    #[test]
    fn test_track_not_present() {
        let err = extend(b"ACGTACGT", &Track::new("CAG", 2)).unwrap_err();
        assert_eq!(err, Error::TrackNotPresent(Track::new("CAG", 2)));
        assert_eq!(
            err.to_string(),
            "track (CAG,2) is not present in the sequence"
        );
    }
}
