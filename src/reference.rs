//! Retrieving reference sequence for a region.
//!
//! Two FASTA-backed sources are provided:
//!
//! - [`IndexedFasta`], which uses a `.fai` index to seek directly to the
//!   requested region (the equivalent of `samtools faidx <fasta> <region>`).
//! - [`StreamingFasta`], which reads through a plain or gzip-compressed FASTA
//!   until the requested contig is found. This is much slower for large
//!   references, but it does not require an index.
//!
//! [`open()`] chooses between them based on whether an index is present.

use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use flate2::read::MultiGzDecoder;
use noodles::core::Position;
use noodles::fasta;
use tracing::debug;
use tracing::warn;

use crate::Nucleotide;
use crate::Region;

/// The extension of a FASTA index.
pub const INDEX_EXTENSION: &str = "fai";

/// The extension of a gzip-compressed file.
pub const GZIP_EXTENSION: &str = "gz";

/// An error related to retrieving sequence.
#[derive(Debug)]
pub enum Error {
    /// An I/O error.
    Io(io::Error),

    /// The requested contig is not present within the reference.
    MissingContig(String),

    /// The requested region extends beyond the end of its contig.
    RegionOutOfBounds(Region),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::MissingContig(contig) => {
                write!(f, "contig \"{contig}\" is not present in the reference")
            }
            Error::RegionOutOfBounds(region) => {
                write!(f, "region {region} extends beyond the end of its contig")
            }
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A source of reference sequence.
pub trait Source {
    /// Fetches the uppercase sequence of `region`.
    fn fetch(&mut self, region: &Region) -> Result<Vec<u8>>;
}

/// A source backed by an indexed FASTA.
#[derive(Clone, Debug)]
pub struct IndexedFasta {
    /// The path to the FASTA.
    path: PathBuf,
}

impl IndexedFasta {
    /// Creates a new indexed FASTA source.
    ///
    /// The index is expected to be found alongside the FASTA (e.g.,
    /// `ref.fa.fai`).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Source for IndexedFasta {
    fn fetch(&mut self, region: &Region) -> Result<Vec<u8>> {
        let mut reader = fasta::io::indexed_reader::Builder::default()
            .build_from_path(&self.path)
            .map_err(Error::Io)?;

        let start = position(region.start())?;
        let end = position(region.end())?;
        let query = noodles::core::Region::new(region.chromosome(), start..=end);

        let record = reader.query(&query).map_err(Error::Io)?;

        let sequence = clean(record.sequence().as_ref());
        if sequence.len() != region.len() {
            return Err(Error::RegionOutOfBounds(region.clone()));
        }

        Ok(sequence)
    }
}

/// A source backed by an unindexed (and optionally gzip-compressed) FASTA.
#[derive(Clone, Debug)]
pub struct StreamingFasta {
    /// The path to the FASTA.
    path: PathBuf,
}

impl StreamingFasta {
    /// Creates a new streaming FASTA source.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens the FASTA for reading, decompressing it if needed.
    fn reader(&self) -> io::Result<fasta::io::Reader<Box<dyn BufRead>>> {
        let file = File::open(&self.path)?;

        let inner: Box<dyn BufRead> = if is_gzipped(&self.path) {
            Box::new(BufReader::new(MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };

        Ok(fasta::io::Reader::new(inner))
    }
}

impl Source for StreamingFasta {
    fn fetch(&mut self, region: &Region) -> Result<Vec<u8>> {
        let mut reader = self.reader().map_err(Error::Io)?;

        for result in reader.records() {
            let record = result.map_err(Error::Io)?;
            let name = String::from_utf8_lossy(record.name()).to_string();

            if name != region.chromosome() {
                continue;
            }

            let start = position(region.start())?;
            let end = position(region.end())?;
            let interval = noodles::core::region::Interval::from(start..=end);

            return record
                .sequence()
                .slice(interval)
                .map(|sequence| clean(sequence.as_ref()))
                .ok_or_else(|| Error::RegionOutOfBounds(region.clone()));
        }

        Err(Error::MissingContig(region.chromosome().to_string()))
    }
}

/// Opens a FASTA as a [`Source`].
///
/// If an index (`<path>.fai`) exists, an [`IndexedFasta`] is returned.
/// Otherwise, a [`StreamingFasta`] is returned.
pub fn open(path: impl AsRef<Path>) -> Box<dyn Source> {
    let path = path.as_ref();
    let index = index_path(path);

    if index.exists() {
        debug!("using FASTA index: {}", index.display());
        Box::new(IndexedFasta::new(path))
    } else {
        debug!("no FASTA index found at {}: streaming the FASTA", index.display());
        Box::new(StreamingFasta::new(path))
    }
}

/// Gets the conventional index path for a FASTA (`<path>.fai`).
///
/// # Examples
///
/// ```
/// use std::path::Path;
///
/// use repeatspec::reference::index_path;
///
/// assert_eq!(index_path(Path::new("ref/hs37d5.fa")), Path::new("ref/hs37d5.fa.fai"));
/// ```
pub fn index_path(path: &Path) -> PathBuf {
    let mut index = path.as_os_str().to_owned();
    index.push(".");
    index.push(INDEX_EXTENSION);
    PathBuf::from(index)
}

/// Returns whether the path has a gzip extension.
fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension == GZIP_EXTENSION)
}

/// Converts a 1-based position into a [`Position`].
fn position(value: usize) -> Result<Position> {
    Position::new(value).ok_or_else(|| {
        Error::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            "positions are 1-based and cannot be zero",
        ))
    })
}

/// Uppercases a sequence, warning if it contains symbols outside of the
/// `{A, C, T, G}` alphabet.
fn clean(sequence: &[u8]) -> Vec<u8> {
    let sequence = sequence.to_ascii_uppercase();

    let invalid = sequence
        .iter()
        .filter(|b| Nucleotide::try_from(**b).is_err())
        .count();

    if invalid > 0 {
        warn!("sequence contains {invalid} symbol(s) that are not A, C, T, or G");
    }

    sequence
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use flate2::write::GzEncoder;
    use flate2::Compression;
    use tempdir::TempDir;

    use super::*;

    /// A FASTA with one wrapped contig and one lowercase contig.
    const FASTA: &[u8] = b">chr1\nACGTACGTAC\nGGGGG\n>chr2\nttttcccc\n";

    /// The index for [`FASTA`].
    const INDEX: &[u8] = b"chr1\t15\t6\t10\t11\nchr2\t8\t29\t8\t9\n";

    fn write_fasta(dir: &TempDir, indexed: bool) -> io::Result<PathBuf> {
        let path = dir.path().join("ref.fa");
        std::fs::write(&path, FASTA)?;

        if indexed {
            std::fs::write(index_path(&path), INDEX)?;
        }

        Ok(path)
    }

    #[test]
    fn test_streaming_fetch() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("repeatspec")?;
        let mut source = StreamingFasta::new(write_fasta(&dir, false)?);

        // Spans a line break.
        assert_eq!(source.fetch(&"chr1:9-12".parse()?)?, b"ACGG");
        assert_eq!(source.fetch(&"chr2:1-4".parse()?)?, b"TTTT");

        let err = source.fetch(&"chr3:1-4".parse()?).unwrap_err();
        assert!(matches!(err, Error::MissingContig(contig) if contig == "chr3"));

        let err = source.fetch(&"chr2:5-20".parse()?).unwrap_err();
        assert!(matches!(err, Error::RegionOutOfBounds(_)));

        Ok(())
    }

    #[test]
    fn test_streaming_fetch_gzipped() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("repeatspec")?;
        let path = dir.path().join("ref.fa.gz");

        let mut encoder = GzEncoder::new(File::create(&path)?, Compression::default());
        encoder.write_all(FASTA)?;
        encoder.finish()?;

        let mut source = StreamingFasta::new(path);
        assert_eq!(source.fetch(&"chr2:3-6".parse()?)?, b"TTCC");

        Ok(())
    }

    #[test]
    fn test_indexed_fetch() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("repeatspec")?;
        let mut source = IndexedFasta::new(write_fasta(&dir, true)?);

        assert_eq!(source.fetch(&"chr1:9-12".parse()?)?, b"ACGG");
        assert_eq!(source.fetch(&"chr2:1-4".parse()?)?, b"TTTT");

        Ok(())
    }

    #[test]
    fn test_open_chooses_by_index() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("repeatspec")?;

        let path = write_fasta(&dir, false)?;
        assert_eq!(open(&path).fetch(&"chr1:1-4".parse()?)?, b"ACGT");

        let path = write_fasta(&dir, true)?;
        assert_eq!(open(&path).fetch(&"chr1:1-4".parse()?)?, b"ACGT");

        Ok(())
    }

    #[test]
    fn test_index_path() {
        assert_eq!(
            index_path(Path::new("hs37d5.fa.gz")),
            PathBuf::from("hs37d5.fa.gz.fai")
        );
    }

    #[test]
    fn test_is_gzipped() {
        assert!(is_gzipped(Path::new("ref.fa.gz")));
        assert!(!is_gzipped(Path::new("ref.fa")));
    }

    #[test]
    fn test_clean_uppercases() {
        assert_eq!(clean(b"acgtNN"), b"ACGTNN".to_vec());
    }
}
