//! Matching scanned tracks against a motif.
//!
//! Tracks are classified in two ways:
//!
//! - **Exact** matches are tracks whose unit is a member of the motif's
//!   [`EquivalenceClass`](crate::motif::EquivalenceClass).
//! - **Approximate** matches are tracks whose unit has the same length as the
//!   motif and agrees, position by position, with some member of the
//!   equivalence class in at least two thirds of its positions (rounded up).
//!
//! A track is reported as an approximate match once for _every_ member of the
//! equivalence class it is close to, so the same track may appear more than
//! once in that list.

use tracing::debug;

use crate::Motif;
use crate::Track;

/// The result of classifying tracks against a motif.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Matches {
    /// Tracks whose unit is equivalent to the motif.
    exact: Vec<Track>,

    /// Tracks whose unit is close to some unit equivalent to the motif.
    approximate: Vec<Track>,
}

impl Matches {
    /// Gets the exact matches in scan order.
    pub fn exact(&self) -> &[Track] {
        &self.exact
    }

    /// Gets the approximate matches in scan order.
    pub fn approximate(&self) -> &[Track] {
        &self.approximate
    }

    /// Returns whether there were neither exact nor approximate matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use repeatspec::matcher::Matches;
    ///
    /// assert!(Matches::default().is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.approximate.is_empty()
    }
}

/// Counts the positions at which `a` and `b` hold the same symbol.
///
/// Only the positions shared by both strings are compared.
pub fn identity(a: &str, b: &str) -> usize {
    a.bytes().zip(b.bytes()).filter(|(x, y)| x == y).count()
}

/// Returns whether `equal` agreeing positions meets the approximate match
/// threshold for a motif of length `len` (at least ⌈2/3 × `len`⌉).
pub fn meets_threshold(equal: usize, len: usize) -> bool {
    3 * equal >= 2 * len
}

/// Classifies `tracks` against `motif`.
///
/// # Examples
///
/// ```
/// use repeatspec::matcher::classify;
/// use repeatspec::Motif;
/// use repeatspec::Track;
///
/// let motif = "AAG".parse::<Motif>()?;
/// let tracks = vec![Track::new("GAA", 7), Track::new("AT", 4), Track::new("GAT", 3)];
///
/// let matches = classify(&tracks, &motif);
/// assert_eq!(matches.exact(), &[Track::new("GAA", 7)]);
/// assert!(matches.approximate().contains(&Track::new("GAT", 3)));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn classify(tracks: &[Track], motif: &Motif) -> Matches {
    let class = motif.equivalents();

    let exact = tracks
        .iter()
        .filter(|track| class.contains(track.unit()))
        .cloned()
        .collect::<Vec<_>>();

    let approximate = tracks
        .iter()
        .filter(|track| track.unit().len() == motif.len())
        .flat_map(|track| {
            class
                .iter()
                .filter(move |member| {
                    meets_threshold(identity(member, track.unit()), motif.len())
                })
                .map(move |_| track.clone())
        })
        .collect::<Vec<_>>();

    debug!(
        "motif {motif}: {} exact and {} approximate matches among {} tracks",
        exact.len(),
        approximate.len(),
        tracks.len()
    );

    Matches { exact, approximate }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        // ⌈2/3 × 3⌉ = 2
        assert!(!meets_threshold(1, 3));
        assert!(meets_threshold(2, 3));

        // ⌈2/3 × 4⌉ = 3
        assert!(!meets_threshold(2, 4));
        assert!(meets_threshold(3, 4));

        // ⌈2/3 × 1⌉ = 1
        assert!(!meets_threshold(0, 1));
        assert!(meets_threshold(1, 1));
    }

    #[test]
    fn test_exact_matches_keep_scan_order() -> Result<(), Box<dyn std::error::Error>> {
        let motif = "AAG".parse::<Motif>()?;
        let tracks = vec![
            Track::anchored("GAA", 7, 10),
            Track::anchored("A", 5, 40),
            Track::anchored("CTT", 2, 50),
            Track::anchored("GAA", 3, 80),
        ];

        let matches = classify(&tracks, &motif);
        assert_eq!(
            matches.exact(),
            &[tracks[0].clone(), tracks[2].clone(), tracks[3].clone()]
        );

        Ok(())
    }

    #[test]
    fn test_approximate_matches_repeat_per_member() -> Result<(), Box<dyn std::error::Error>> {
        let motif = "AAG".parse::<Motif>()?;

        // Class: GAA AGA AAG TTC TCT CTT. `AAA` shares two positions with each
        // of GAA, AGA, and AAG.
        let matches = classify(&[Track::new("AAA", 4)], &motif);
        assert!(matches.exact().is_empty());
        assert_eq!(matches.approximate(), &vec![Track::new("AAA", 4); 3][..]);

        // Exact matches are also approximate matches.
        let matches = classify(&[Track::new("GAA", 2)], &motif);
        assert_eq!(matches.exact().len(), 1);
        assert!(!matches.approximate().is_empty());

        Ok(())
    }

    #[test]
    fn test_lengths_must_agree_for_approximate() -> Result<(), Box<dyn std::error::Error>> {
        let motif = "AAG".parse::<Motif>()?;
        let matches = classify(&[Track::new("AA", 9), Track::new("GAAG", 2)], &motif);
        assert!(matches.is_empty());

        Ok(())
    }

    #[test]
    fn test_no_tracks() -> Result<(), Box<dyn std::error::Error>> {
        let motif = "CAG".parse::<Motif>()?;
        assert!(classify(&[], &motif).is_empty());
        Ok(())
    }
}
