//! Annotating a region with a repeat track.

use tracing::debug;
use tracing::info;

use crate::extender;
use crate::extender::extend;
use crate::matcher::classify;
use crate::matcher::Matches;
use crate::resolver;
use crate::resolver::resolve;
use crate::scanner::scan;
use crate::selection::Selection;
use crate::Motif;
use crate::Region;
use crate::Resolution;
use crate::Track;

/// An error related to annotating a region.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// The selected track could not be extended.
    Extend(extender::Error),

    /// The selected track could not be resolved.
    Resolve(resolver::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Extend(err) => write!(f, "extend error: {err}"),
            Error::Resolve(err) => write!(f, "resolve error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// Every track found within a sequence along with those matching a motif.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Survey {
    /// Every track, in scan order.
    tracks: Vec<Track>,

    /// The tracks matching the motif.
    matches: Matches,
}

impl Survey {
    /// Scans `sequence` and classifies the tracks found against `motif`.
    ///
    /// # Examples
    ///
    /// ```
    /// use repeatspec::Motif;
    /// use repeatspec::Survey;
    ///
    /// let motif = "AAG".parse::<Motif>()?;
    /// let survey = Survey::new(b"AAGAAGAAGTTT", &motif);
    ///
    /// // (A)2, (GAA)2, and (T)3
    /// assert_eq!(survey.tracks().len(), 3);
    /// assert_eq!(survey.matches().exact().len(), 1);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(sequence: &[u8], motif: &Motif) -> Self {
        let tracks = scan(sequence);
        let matches = classify(&tracks, motif);

        Self { tracks, matches }
    }

    /// Gets every track found, in scan order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Gets the tracks matching the motif.
    pub fn matches(&self) -> &Matches {
        &self.matches
    }

    /// Gets the tracks to choose between: the exact matches or, if there are
    /// none, the approximate matches.
    pub fn candidates(&self) -> &[Track] {
        match self.matches.exact() {
            [] => self.matches.approximate(),
            exact => exact,
        }
    }
}

/// Annotates a single region with the repeat track matching a motif.
///
/// An annotator holds the sequence of the region it annotates. The sequence is
/// assumed to begin at the start of the region.
#[derive(Clone, Debug)]
pub struct Annotator {
    /// The region being annotated.
    region: Region,

    /// The sequence of the region.
    sequence: Vec<u8>,

    /// The motif of interest.
    motif: Motif,
}

impl Annotator {
    /// Creates a new annotator.
    pub fn new(region: Region, sequence: impl Into<Vec<u8>>, motif: Motif) -> Self {
        Self {
            region,
            sequence: sequence.into(),
            motif,
        }
    }

    /// Gets the region being annotated.
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Gets the sequence of the region.
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    /// Gets the motif of interest.
    pub fn motif(&self) -> &Motif {
        &self.motif
    }

    /// Surveys the region for tracks.
    pub fn survey(&self) -> Survey {
        let survey = Survey::new(&self.sequence, &self.motif);

        debug!(
            "region {}: found {} tracks ({} exact matches, {} approximate matches)",
            self.region,
            survey.tracks().len(),
            survey.matches().exact().len(),
            survey.matches().approximate().len()
        );

        survey
    }

    /// Resolves a selection to a location in the genome.
    ///
    /// The selected track is first extended to the longest run of its unit
    /// within the sequence. [`Selection::None`] yields `Ok(None)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use repeatspec::selection::Automatic;
    /// use repeatspec::selection::Selector as _;
    /// use repeatspec::Annotator;
    /// use repeatspec::Motif;
    /// use repeatspec::Region;
    ///
    /// let region = "8:101-120".parse::<Region>()?;
    /// let motif = "AAG".parse::<Motif>()?;
    /// let annotator = Annotator::new(region, "CCCTTCTTCTTCTTCTTGGG", motif);
    ///
    /// let selection = Automatic.select(&annotator.survey())?;
    /// let resolution = annotator.annotate(&selection)?.unwrap();
    ///
    /// // The scanner reports (CTT)4 at offset 5, but (CTT)5 runs from offset 2.
    /// assert_eq!(resolution.unit(), "CTT");
    /// assert_eq!(resolution.track().count(), 5);
    /// assert_eq!(resolution.start(), 103);
    /// assert_eq!(resolution.end(), 117);
    /// assert!(resolution.is_relocated());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn annotate(&self, selection: &Selection) -> Result<Option<Resolution>> {
        let track = match selection {
            Selection::Track(track) => track,
            Selection::None => {
                info!("no track selected for {} ({})", self.region, self.motif);
                return Ok(None);
            }
        };

        let extended = extend(&self.sequence, track).map_err(Error::Extend)?;
        if extended.count() != track.count() {
            info!("extended track ({track}) to ({extended})");
        }

        let resolution =
            resolve(&self.region, &self.sequence, &extended).map_err(Error::Resolve)?;

        info!(
            "resolved track ({extended}) to {}:{}-{}",
            resolution.chromosome(),
            resolution.start(),
            resolution.end()
        );

        Ok(Some(resolution))
    }
}
