//! Resolving a track to absolute genomic coordinates.

use tracing::warn;

use crate::extender::find;
use crate::extender::fits;
use crate::Region;
use crate::Track;

/// The opening marker used when highlighting a resolved track.
pub const HIGHLIGHT_OPEN: &str = "***>>>";

/// The closing marker used when highlighting a resolved track.
pub const HIGHLIGHT_CLOSE: &str = "<<<***";

/// An error related to resolving a track.
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

/// A track placed at absolute (1-based, fully-closed) genomic coordinates.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Resolution {
    /// The chromosome upon which the track is located.
    chromosome: String,

    /// The first position of the track.
    start: usize,

    /// The last position of the track.
    end: usize,

    /// The track that was resolved.
    track: Track,

    /// The 0-based offset of the track within the sequence.
    offset: usize,
}

impl Resolution {
    /// Gets the chromosome upon which the track is located.
    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    /// Gets the first (1-based) position of the track.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Gets the last (1-based) position of the track.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Gets the resolved track.
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Gets the repeat unit of the resolved track.
    pub fn unit(&self) -> &str {
        self.track.unit()
    }

    /// Gets the 0-based offset of the track within the sequence.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns whether the track was resolved to a location other than the one
    /// where it was originally found by the scanner.
    ///
    /// Tracks without a known origin are never considered relocated.
    pub fn is_relocated(&self) -> bool {
        self.track
            .start()
            .is_some_and(|start| start != self.offset)
    }

    /// Renders `sequence` with the resolved track wrapped in
    /// [`HIGHLIGHT_OPEN`] and [`HIGHLIGHT_CLOSE`] markers.
    ///
    /// # Examples
    ///
    /// ```
    /// use repeatspec::resolver::resolve;
    /// use repeatspec::Region;
    /// use repeatspec::Track;
    ///
    /// let sequence = b"CCATATATGG";
    /// let region = "1:100-109".parse::<Region>()?;
    /// let resolution = resolve(&region, sequence, &Track::new("AT", 3))?;
    ///
    /// assert_eq!(resolution.highlight(sequence), "CC***>>>ATATAT<<<***GG");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn highlight(&self, sequence: &[u8]) -> String {
        let end = (self.offset + self.track.length()).min(sequence.len());
        let offset = self.offset.min(end);

        format!(
            "{}{}{}{}{}",
            String::from_utf8_lossy(&sequence[..offset]),
            HIGHLIGHT_OPEN,
            String::from_utf8_lossy(&sequence[offset..end]),
            HIGHLIGHT_CLOSE,
            String::from_utf8_lossy(&sequence[end..]),
        )
    }
}

/// Resolves `track` to absolute coordinates.
///
/// The track is located at the _first_ occurrence of its expanded run within
/// `sequence`, and `sequence` is taken to begin at the start of `region`.
///
/// # Examples
///
/// ```
/// use repeatspec::resolver::resolve;
/// use repeatspec::Region;
/// use repeatspec::Track;
///
/// let region = "8:1000-1015".parse::<Region>()?;
/// let resolution = resolve(&region, b"CCGAAGAAGAAGAATT", &Track::new("GAA", 4))?;
///
/// assert_eq!(resolution.start(), 1002);
/// assert_eq!(resolution.end(), 1013);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn resolve(region: &Region, sequence: &[u8], track: &Track) -> Result<Resolution> {
    if !fits(sequence, track) {
        return Err(Error::TrackNotPresent(track.clone()));
    }

    let run = track.expand();
    let offset = find(sequence, run.as_bytes())
        .ok_or_else(|| Error::TrackNotPresent(track.clone()))?;

    let start = region.start() + offset;
    let end = start + run.len() - 1;

    let resolution = Resolution {
        chromosome: region.chromosome().to_string(),
        start,
        end,
        track: track.clone(),
        offset,
    };

    if resolution.is_relocated() {
        warn!(
            "track ({track}) was found by the scanner at offset {} but resolves to the first \
             occurrence of its run at offset {offset}",
            track.start().unwrap_or_default()
        );
    }

    Ok(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_gaa_track() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let prefix = "TTGCATATATATATATTATTATATATAAAAATATG";
        let run = "GAAGAAGAAGAAGAAGAAGAA";
        let sequence = format!("{prefix}{run}CAATACCCAG");

        let region = "8:100651852-100652541".parse::<Region>()?;
        let resolution = resolve(&region, sequence.as_bytes(), &Track::new("GAA", 7))?;

        assert_eq!(resolution.chromosome(), "8");
        assert_eq!(resolution.offset(), prefix.len());
        assert_eq!(resolution.start(), 100651852 + prefix.len());
        assert_eq!(resolution.end() - resolution.start() + 1, run.len());
        assert!(!resolution.is_relocated());

        Ok(())
    }

    #[test]
    fn test_resolve_first_occurrence() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let sequence = b"ACAGCAGTTCAGCAGCAGTT";
        let region = "1:1-20".parse::<Region>()?;

        let resolution = resolve(&region, sequence, &Track::anchored("CAG", 2, 9))?;
        assert_eq!(resolution.offset(), 1);
        assert_eq!(resolution.start(), 2);
        assert_eq!(resolution.end(), 7);
        assert!(resolution.is_relocated());

        Ok(())
    }

    #[test]
    fn test_track_not_present() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let region = "1:1-8".parse::<Region>()?;
        let err = resolve(&region, b"ACGTACGT", &Track::new("GAA", 2)).unwrap_err();
        assert_eq!(err, Error::TrackNotPresent(Track::new("GAA", 2)));

        let track = Track::new("AC", usize::MAX);
        let err = resolve(&region, b"ACGTACGT", &track).unwrap_err();
        assert_eq!(err, Error::TrackNotPresent(track));

        Ok(())
    }
}
