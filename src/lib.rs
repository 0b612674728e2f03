//! `repeatspec` is a crate for locating short tandem repeat (STR) tracks
//! within a reference region and describing them as repeat-specification
//! records.
//!
//! Given a region of a reference genome and a repeat motif of interest (e.g.,
//! `AAG` as reported by a genome-wide expansion screen), the crate answers the
//! question: _where, exactly, is the reference repeat track for this motif?_
//!
//! ## Finding tracks
//!
//! The region's sequence is first [scanned](crate::scanner::scan) for every
//! run of tandem repetition. Each run is reported as a [`Track`]: a repeat unit
//! and the number of consecutive copies of that unit.
//!
//! Next, the tracks are [classified](crate::matcher::classify) against the
//! motif. A track matches _exactly_ when its unit is equivalent to the motif
//! under cyclic rotation and reverse complementation (see
//! [`Motif::equivalents()`]), and _approximately_ when its unit is the same
//! length as the motif and agrees with an equivalent unit in at least two
//! thirds of its positions.
//!
//! Both steps are wrapped up by [`Annotator::survey()`].
//!
//! ## Resolving a track
//!
//! One of the surveyed tracks is then chosen by a
//! [`Selector`](crate::selection::Selector). The crate provides an
//! [`Automatic`](crate::selection::Automatic) selector that takes the longest
//! exact match (falling back to the longest approximate match). Callers may
//! instead consult an operator. The chosen track is extended to the longest
//! run of its unit in the sequence and resolved to absolute, 1-based
//! coordinates via [`Annotator::annotate()`]. The result converts into a
//! [`RepeatSpecification`].
//!
//! ```
//! use repeatspec::selection::Automatic;
//! use repeatspec::selection::Selector as _;
//! use repeatspec::Annotator;
//! use repeatspec::Motif;
//! use repeatspec::Region;
//! use repeatspec::RepeatSpecification;
//!
//! let region = "8:1001-1030".parse::<Region>()?;
//! let motif = "AAG".parse::<Motif>()?;
//! let annotator = Annotator::new(region, "CCTTAGAAGAAGAAGAAGAAGAAGAACCTT", motif);
//!
//! let survey = annotator.survey();
//! let selection = Automatic.select(&survey)?;
//!
//! if let Some(resolution) = annotator.annotate(&selection)? {
//!     let record = RepeatSpecification::from(&resolution);
//!     assert_eq!(record.repeat_id(), "8_1005_1025");
//!     assert_eq!(record.repeat_unit(), "AGA");
//! }
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Reference sequence
//!
//! The [`reference`] module provides FASTA-backed
//! [`Source`](crate::reference::Source)s for retrieving the sequence of a
//! region, and the [`output`] module persists records (or notes that no track
//! was found).

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod annotator;
pub mod extender;
pub mod matcher;
pub mod motif;
pub mod nucleotide;
pub mod output;
pub mod record;
pub mod reference;
pub mod region;
pub mod resolver;
pub mod scanner;
pub mod selection;
pub mod track;

pub use annotator::Annotator;
pub use annotator::Error;
pub use annotator::Survey;
pub use motif::Motif;
pub use nucleotide::Nucleotide;
pub use record::RepeatSpecification;
pub use region::Region;
pub use resolver::Resolution;
pub use track::Track;
