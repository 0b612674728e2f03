//! Choosing a track from a survey.
//!
//! Choosing the track that becomes a repeat specification is a two-step
//! protocol:
//!
//! 1. The [`Annotator`](crate::Annotator) produces a [`Survey`] of every track
//!    found in the region along with those that match the motif.
//! 2. A [`Selector`] inspects the survey and returns a [`Selection`]: either a
//!    track to resolve or [`Selection::None`].
//!
//! Selectors are free to consult a human operator, a file, or nothing at all.
//! This crate provides the [`Automatic`] selector; interactive selection is
//! built on top of [`Choice`].

use std::convert::Infallible;
use std::str::FromStr;

use crate::track;
use crate::track::max_by_count;
use crate::Survey;
use crate::Track;

/// The outcome of selecting a track.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Selection {
    /// A track was selected.
    Track(Track),

    /// No suitable track exists.
    None,
}

/// Something that can select a track from a [`Survey`].
pub trait Selector {
    /// The error produced while selecting.
    type Error;

    /// Selects a track from `survey`.
    fn select(&mut self, survey: &Survey) -> Result<Selection, Self::Error>;
}

/// Selects the longest exactly matching track, falling back to the longest
/// approximately matching track.
///
/// # Examples
///
/// ```
/// use repeatspec::selection::Automatic;
/// use repeatspec::selection::Selection;
/// use repeatspec::selection::Selector as _;
/// use repeatspec::Motif;
/// use repeatspec::Survey;
/// use repeatspec::Track;
///
/// let motif = "AAG".parse::<Motif>()?;
/// let survey = Survey::new(b"GAAGAAGAATTTCCGAAGAAGAAGAAGAA", &motif);
///
/// let selection = Automatic.select(&survey)?;
/// assert_eq!(selection, Selection::Track(Track::anchored("GAA", 5, 14)));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Automatic;

impl Selector for Automatic {
    type Error = Infallible;

    fn select(&mut self, survey: &Survey) -> Result<Selection, Self::Error> {
        Ok(match max_by_count(survey.candidates()) {
            Some(track) => Selection::Track(track.clone()),
            None => Selection::None,
        })
    }
}

/// An error related to the parsing of a [`Choice`].
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The value was neither a keyword nor a valid track.
    InvalidTrack(track::ParseError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidTrack(err) => write!(f, "{err} (or type `max`, `more`, or `none`)"),
        }
    }
}

impl std::error::Error for ParseError {}

/// A choice made by an operator when presented with a survey.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Choice {
    /// Select the matched track with the greatest count (`max`).
    Max,

    /// Show every track found in the region (`more`).
    More,

    /// No track is suitable (`none`).
    None,

    /// Select a specific track (`<unit>,<count>`).
    Track(Track),
}

impl Choice {
    /// Resolves the choice against the `candidates` that were presented.
    ///
    /// [`Choice::More`] cannot be resolved and returns [`None`].
    ///
    /// # Examples
    ///
    /// ```
    /// use repeatspec::selection::Choice;
    /// use repeatspec::selection::Selection;
    /// use repeatspec::Track;
    ///
    /// let candidates = vec![Track::new("GAA", 7), Track::new("GAA", 3)];
    ///
    /// assert_eq!(
    ///     Choice::Max.resolve(&candidates),
    ///     Some(Selection::Track(Track::new("GAA", 7)))
    /// );
    /// assert_eq!(Choice::More.resolve(&candidates), None);
    /// ```
    pub fn resolve(&self, candidates: &[Track]) -> Option<Selection> {
        match self {
            Choice::Max => Some(
                max_by_count(candidates)
                    .cloned()
                    .map(Selection::Track)
                    .unwrap_or(Selection::None),
            ),
            Choice::More => None,
            Choice::None => Some(Selection::None),
            Choice::Track(track) => Some(Selection::Track(track.clone())),
        }
    }
}

impl FromStr for Choice {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match s.to_ascii_lowercase().as_str() {
            "max" => Ok(Choice::Max),
            "more" => Ok(Choice::More),
            "none" => Ok(Choice::None),
            _ => s
                .parse::<Track>()
                .map(Choice::Track)
                .map_err(ParseError::InvalidTrack),
        }
    }
}
