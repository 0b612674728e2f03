//! A 1-based, fully-closed genomic region.
//!
//! Regions are written as `<chromosome>:<start>-<end>` (e.g.,
//! `8:100651852-100652541`), following the convention used by `samtools
//! faidx` and most genome browsers: the first base of a chromosome is `1` and
//! both `start` and `end` are included in the region.

use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// The pattern for a region. The chromosome is everything before the final
/// colon.
static REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+):([0-9]+)-([0-9]+)$").unwrap());

/// An error related to the parsing of a [`Region`].
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The value was not of the form `<chromosome>:<start>-<end>`.
    Format(String),

    /// A position could not be parsed.
    Position(ParseIntError),

    /// A position was zero, which is not valid for 1-based coordinates.
    ZeroPosition,

    /// The start position was greater than the end position.
    StartGreaterThanEnd(usize, usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Format(s) => write!(
                f,
                "invalid region \"{s}\": expected the form <chromosome>:<start>-<end>"
            ),
            ParseError::Position(err) => write!(f, "invalid position: {err}"),
            ParseError::ZeroPosition => {
                write!(f, "invalid position: positions are 1-based and cannot be zero")
            }
            ParseError::StartGreaterThanEnd(start, end) => write!(
                f,
                "start position ({start}) cannot be greater than the end position ({end})"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// A 1-based, fully-closed genomic region.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Region {
    /// The chromosome name.
    chromosome: String,

    /// The first position within the region.
    start: usize,

    /// The last position within the region.
    end: usize,
}

impl Region {
    /// Attempts to create a new region.
    ///
    /// # Examples
    ///
    /// ```
    /// use repeatspec::Region;
    ///
    /// let region = Region::try_new("8", 100, 200)?;
    /// assert_eq!(region.len(), 101);
    ///
    /// assert!(Region::try_new("8", 0, 200).is_err());
    /// assert!(Region::try_new("8", 300, 200).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_new(
        chromosome: impl Into<String>,
        start: usize,
        end: usize,
    ) -> Result<Self, ParseError> {
        if start == 0 || end == 0 {
            return Err(ParseError::ZeroPosition);
        }

        if start > end {
            return Err(ParseError::StartGreaterThanEnd(start, end));
        }

        Ok(Self {
            chromosome: chromosome.into(),
            start,
            end,
        })
    }

    /// Gets the chromosome name.
    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    /// Gets the first (1-based) position within the region.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Gets the last (1-based) position within the region.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Gets the number of positions within the region.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Widens the region by `padding` positions on either side.
    ///
    /// The start position never moves below `1`. The end position is not
    /// clamped, as the length of the chromosome is not known here.
    ///
    /// # Examples
    ///
    /// ```
    /// use repeatspec::Region;
    ///
    /// let region = "8:1000-2000".parse::<Region>()?;
    /// assert_eq!(region.pad(500).to_string(), "8:500-2500");
    /// assert_eq!(region.pad(5000).to_string(), "8:1-7000");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn pad(&self, padding: usize) -> Region {
        Region {
            chromosome: self.chromosome.clone(),
            start: self.start.saturating_sub(padding).max(1),
            end: self.end.saturating_add(padding),
        }
    }
}

impl FromStr for Region {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let groups = REGEX
            .captures(s)
            .ok_or_else(|| ParseError::Format(s.to_string()))?;

        // SAFETY: all three groups are required by the pattern, so they will
        // always be present when the pattern matches.
        let chromosome = groups.get(1).unwrap().as_str();
        let start = groups
            .get(2)
            .unwrap()
            .as_str()
            .parse()
            .map_err(ParseError::Position)?;
        let end = groups
            .get(3)
            .unwrap()
            .as_str()
            .parse()
            .map_err(ParseError::Position)?;

        Region::try_new(chromosome, start, end)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.chromosome, self.start, self.end)
    }
}
