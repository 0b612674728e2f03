//! Repeat tracks.
//!
//! A repeat track is a repeat unit together with the number of times it is
//! consecutively repeated, such as `(GAA)7`. Tracks are written in the form
//! `<unit>,<count>` (e.g., `GAA,7`), which is also the form an operator uses
//! to select a track by hand.

use std::num::ParseFloatError;
use std::str::FromStr;

use crate::nucleotide;
use crate::Nucleotide;

/// The delimiter between the unit and the count of a track.
pub const TRACK_DELIMITER: char = ',';

/// An error related to the parsing of a [`Track`].
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The track was not of the form `<unit>,<count>`.
    Format(String),

    /// The unit was empty.
    EmptyUnit,

    /// The unit contained an invalid nucleotide.
    InvalidUnit(nucleotide::ParseError),

    /// The count could not be parsed as a number.
    InvalidCount(ParseFloatError),

    /// The count was less than one.
    NonPositiveCount(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Format(s) => write!(
                f,
                "invalid track \"{s}\": expected the form <unit>{TRACK_DELIMITER}<count>"
            ),
            ParseError::EmptyUnit => write!(f, "invalid track: unit cannot be empty"),
            ParseError::InvalidUnit(err) => write!(f, "invalid unit: {err}"),
            ParseError::InvalidCount(err) => write!(f, "invalid count: {err}"),
            ParseError::NonPositiveCount(s) => {
                write!(f, "invalid count: {s} is not a positive number")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A repeat track.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Track {
    /// The repeat unit.
    unit: String,

    /// The number of consecutive copies of the unit.
    count: usize,

    /// The 0-based offset within the scanned sequence where the track begins,
    /// if the track came from a scan.
    start: Option<usize>,
}

impl Track {
    /// Creates a new track that is not anchored to any position.
    ///
    /// # Examples
    ///
    /// ```
    /// use repeatspec::Track;
    ///
    /// let track = Track::new("GAA", 7);
    ///
    /// assert_eq!(track.unit(), "GAA");
    /// assert_eq!(track.count(), 7);
    /// assert_eq!(track.start(), None);
    /// ```
    pub fn new(unit: impl Into<String>, count: usize) -> Self {
        Self {
            unit: unit.into(),
            count,
            start: None,
        }
    }

    /// Creates a new track that was found at `start` within a sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use repeatspec::Track;
    ///
    /// let track = Track::anchored("AT", 3, 10);
    /// assert_eq!(track.start(), Some(10));
    /// ```
    pub fn anchored(unit: impl Into<String>, count: usize, start: usize) -> Self {
        Self {
            unit: unit.into(),
            count,
            start: Some(start),
        }
    }

    /// Gets the repeat unit.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Gets the number of consecutive copies of the unit.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Gets the offset where the track was found, if it was found by a scan.
    pub fn start(&self) -> Option<usize> {
        self.start
    }

    /// Gets the total length of the track (`unit length × count`).
    ///
    /// # Examples
    ///
    /// ```
    /// use repeatspec::Track;
    ///
    /// assert_eq!(Track::new("GAA", 7).length(), 21);
    /// ```
    pub fn length(&self) -> usize {
        self.unit.len().saturating_mul(self.count)
    }

    /// Expands the track into its literal sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use repeatspec::Track;
    ///
    /// assert_eq!(Track::new("AT", 3).expand(), "ATATAT");
    /// ```
    pub fn expand(&self) -> String {
        self.unit.repeat(self.count)
    }
}

impl FromStr for Track {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (unit, count) = s
            .split_once(TRACK_DELIMITER)
            .ok_or_else(|| ParseError::Format(s.to_string()))?;

        let unit = unit.trim();
        if unit.is_empty() {
            return Err(ParseError::EmptyUnit);
        }

        for c in unit.chars() {
            Nucleotide::try_from(c).map_err(ParseError::InvalidUnit)?;
        }

        // NOTE: counts are historically printed as floats (`7.0`), so a
        // decimal count is accepted and truncated toward zero.
        let count = count.trim();
        let value = count.parse::<f64>().map_err(ParseError::InvalidCount)?;
        if !value.is_finite() || value < 1.0 {
            return Err(ParseError::NonPositiveCount(count.to_string()));
        }

        Ok(Track::new(unit, value.trunc() as usize))
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.unit, TRACK_DELIMITER, self.count)
    }
}

/// Finds the track with the greatest count.
///
/// When multiple tracks share the greatest count, the earliest one wins.
///
/// # Examples
///
/// ```
/// use repeatspec::track::max_by_count;
/// use repeatspec::Track;
///
/// let tracks = vec![Track::new("GAA", 7), Track::new("GAA", 3), Track::new("AGA", 7)];
/// assert_eq!(max_by_count(&tracks), Some(&tracks[0]));
/// assert_eq!(max_by_count(&[]), None);
/// ```
pub fn max_by_count(tracks: &[Track]) -> Option<&Track> {
    tracks.iter().fold(None, |best, track| match best {
        Some(current) if current.count() >= track.count() => Some(current),
        _ => Some(track),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_from_str() -> Result<(), Box<dyn std::error::Error>> {
        let track = "GAA,3".parse::<Track>()?;
        assert_eq!(track, Track::new("GAA", 3));

        let track = "GAA, 7.0".parse::<Track>()?;
        assert_eq!(track.count(), 7);

        let track = "CAG,2.9".parse::<Track>()?;
        assert_eq!(track.count(), 2);

        Ok(())
    }

    #[test]
    fn test_invalid_tracks() {
        let err = "GAA".parse::<Track>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid track \"GAA\": expected the form <unit>,<count>"
        );

        assert_eq!(",3".parse::<Track>().unwrap_err(), ParseError::EmptyUnit);
        assert!(matches!(
            "GNA,3".parse::<Track>().unwrap_err(),
            ParseError::InvalidUnit(_)
        ));
        assert!(matches!(
            "GAA,many".parse::<Track>().unwrap_err(),
            ParseError::InvalidCount(_)
        ));
        assert_eq!(
            "GAA,0".parse::<Track>().unwrap_err(),
            ParseError::NonPositiveCount(String::from("0"))
        );
    }

    #[test]
    fn test_track_display() {
        assert_eq!(Track::anchored("GAA", 7, 3).to_string(), "GAA,7");
    }

    #[test]
    fn test_max_by_count_prefers_earliest() {
        let tracks = vec![Track::new("GAA", 7), Track::new("GAA", 3)];
        assert_eq!(max_by_count(&tracks), Some(&Track::new("GAA", 7)));

        let tracks = vec![
            Track::anchored("GAA", 2, 0),
            Track::anchored("AGA", 5, 10),
            Track::anchored("AAG", 5, 30),
        ];
        assert_eq!(max_by_count(&tracks), Some(&tracks[1]));
    }
}
