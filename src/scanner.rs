//! Scanning a sequence for runs of tandem repetition.
//!
//! The scanner walks the sequence from left to right. At each position, it
//! looks for the _shortest_ unit that is immediately followed by at least one
//! more copy of itself. If one exists, the run is extended greedily over as
//! many further copies as are present, reported, and scanning resumes at the
//! end of the run. Otherwise, the scanner moves forward by one position.
//!
//! ```text
//! sequence:  A A A A C A T A T A T G
//!            \_____/ | \_________/ |
//! tracks:    (A)4    | (AT)3      |
//!                    skipped      skipped
//! ```
//!
//! Because the shortest unit is always tried first, `AAAA` is reported as
//! `(A)4` rather than `(AA)2`, and runs never overlap.

use tracing::debug;

use crate::Track;

/// Scans `sequence` and reports every run of tandem repetition.
///
/// Each reported [`Track`] is anchored to the offset where its run begins,
/// has a count of at least two, and cannot be extended by another copy of its
/// unit at that offset.
///
/// # Examples
///
/// ```
/// use repeatspec::scanner::scan;
/// use repeatspec::Track;
///
/// assert_eq!(scan(b"AAAA"), vec![Track::anchored("A", 4, 0)]);
/// assert_eq!(scan(b"ATATAT"), vec![Track::anchored("AT", 3, 0)]);
/// assert!(scan(b"A").is_empty());
/// ```
pub fn scan(sequence: &[u8]) -> Vec<Track> {
    let mut tracks = Vec::new();
    let mut i = 0;

    while i < sequence.len() {
        match shortest_period_at(sequence, i) {
            Some(period) => {
                let unit = &sequence[i..i + period];

                let mut count = 2;
                while copy_follows(sequence, unit, i + count * period) {
                    count += 1;
                }

                tracks.push(Track::anchored(
                    String::from_utf8_lossy(unit).into_owned(),
                    count,
                    i,
                ));

                i += count * period;
            }
            None => i += 1,
        }
    }

    debug!(
        "scanned {} positions and found {} tracks",
        sequence.len(),
        tracks.len()
    );

    tracks
}

/// Finds the length of the shortest unit starting at `start` that is
/// immediately followed by a second copy of itself.
fn shortest_period_at(sequence: &[u8], start: usize) -> Option<usize> {
    let remaining = sequence.len() - start;

    (1..=remaining / 2).find(|&period| {
        let unit = &sequence[start..start + period];
        copy_follows(sequence, unit, start + period)
    })
}

/// Returns whether a copy of `unit` occurs in `sequence` at `position`.
fn copy_follows(sequence: &[u8], unit: &[u8], position: usize) -> bool {
    sequence
        .get(position..position + unit.len())
        .is_some_and(|window| window == unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A sequence containing a mixture of homopolymers, dinucleotide repeats,
    /// and a `(GAA)6` track.
    const SEQUENCE: &[u8] = b"TGTTATATATATATAAGTTATTGCATAAAGAAGAAGAAGAAGAAGAACCAATCAAATT";

    #[test]
    fn test_empty_and_single() {
        assert!(scan(b"").is_empty());
        assert!(scan(b"G").is_empty());
        assert!(scan(b"ACGT").is_empty());
    }

    #[test]
    fn test_homopolymer() {
        assert_eq!(scan(b"AAAA"), vec![Track::anchored("A", 4, 0)]);
        assert_eq!(scan(b"CAAAAAAG"), vec![Track::anchored("A", 6, 1)]);
    }

    #[test]
    fn test_dinucleotide() {
        assert_eq!(scan(b"ATATAT"), vec![Track::anchored("AT", 3, 0)]);

        // The trailing `A` is not a whole copy of the unit.
        assert_eq!(scan(b"ATATATA"), vec![Track::anchored("AT", 3, 0)]);
    }

    #[test]
    fn test_shortest_unit_wins() {
        // `AAC` is never tried at offset zero, since `AA` already repeats.
        assert_eq!(
            scan(b"AACAACAAC"),
            vec![Track::anchored("A", 2, 0), Track::anchored("CAA", 2, 2)]
        );

        assert_eq!(
            scan(b"GGGGCGGGGCGGGGCAT"),
            vec![Track::anchored("G", 4, 0), Track::anchored("CGGGG", 2, 4)]
        );
    }

    #[test]
    fn test_known_sequence() {
        let tracks = scan(SEQUENCE);

        assert_eq!(tracks.len(), 11);
        assert_eq!(tracks[0], Track::anchored("T", 2, 2));
        assert_eq!(tracks[1], Track::anchored("AT", 5, 4));
        assert_eq!(tracks[5], Track::anchored("A", 3, 26));
        assert_eq!(tracks[6], Track::anchored("GAA", 6, 29));
    }

    #[test]
    fn test_tracks_are_present_and_maximal() {
        let sequences = [
            SEQUENCE,
            b"GGGGCGGGGCGGGGCAT".as_slice(),
            b"ACACACGTGTGT".as_slice(),
        ];

        for sequence in sequences {
            for track in scan(sequence) {
                let start = track.start().unwrap();
                let expanded = track.expand();

                assert!(track.count() >= 2);
                assert_eq!(
                    &sequence[start..start + track.length()],
                    expanded.as_bytes()
                );

                let longer = track.unit().repeat(track.count() + 1);
                assert_ne!(
                    sequence.get(start..start + longer.len()),
                    Some(longer.as_bytes())
                );
            }
        }
    }

    #[test]
    fn test_tracks_do_not_overlap() {
        let tracks = scan(SEQUENCE);

        for pair in tracks.windows(2) {
            let end = pair[0].start().unwrap() + pair[0].length();
            assert!(end <= pair[1].start().unwrap());
        }
    }
}
