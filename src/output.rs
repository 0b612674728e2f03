//! Persisting the outcome of an annotation.
//!
//! A successful annotation is written as a repeat-specification record
//! (`<directory>/<RepeatId>.json`). When no track is found, the region and
//! motif are instead appended to a tab-delimited fallback log
//! (`<directory>/STRs_not_found.txt`) so the region can be revisited.

use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::BufWriter;
use std::io::Write as _;
use std::path::Path;
use std::path::PathBuf;

use crate::Motif;
use crate::Region;
use crate::RepeatSpecification;

/// The file name of the fallback log.
pub const NOT_FOUND_FILE_NAME: &str = "STRs_not_found.txt";

/// Writes `record` to `<directory>/<RepeatId>.json`, creating the directory if
/// it does not already exist.
///
/// Any existing record with the same identifier is overwritten.
pub fn write_specification(
    directory: impl AsRef<Path>,
    record: &RepeatSpecification,
) -> io::Result<PathBuf> {
    let directory = directory.as_ref();
    fs::create_dir_all(directory)?;

    let path = directory.join(record.file_name());
    let mut writer = BufWriter::new(File::create(&path)?);

    record.write_to(&mut writer).map_err(io::Error::from)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(path)
}

/// Appends `<region>\t<motif>` to the fallback log within `directory`,
/// creating the directory and log if they do not already exist.
pub fn append_not_found(
    directory: impl AsRef<Path>,
    region: &Region,
    motif: &Motif,
) -> io::Result<PathBuf> {
    let directory = directory.as_ref();
    fs::create_dir_all(directory)?;

    let path = directory.join(NOT_FOUND_FILE_NAME);
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    writeln!(file, "{region}\t{motif}")?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;

    #[test]
    fn test_write_specification() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("repeatspec")?;
        let record = RepeatSpecification::new("8", 100, 120, "GAA");

        let path = write_specification(dir.path().join("specs"), &record)?;
        assert_eq!(path, dir.path().join("specs").join("8_100_120.json"));

        let contents = fs::read_to_string(&path)?;
        assert_eq!(contents, format!("{}\n", record.to_json()?));

        Ok(())
    }

    #[test]
    fn test_append_not_found() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("repeatspec")?;
        let motif = "AAG".parse::<Motif>()?;

        append_not_found(dir.path(), &"8:1-100".parse()?, &motif)?;
        let path = append_not_found(dir.path(), &"X:5-50".parse()?, &motif)?;

        let contents = fs::read_to_string(path)?;
        assert_eq!(contents, "8:1-100\tAAG\nX:5-50\tAAG\n");

        Ok(())
    }
}
