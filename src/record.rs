//! Repeat-specification records.
//!
//! A repeat-specification record describes a single reference repeat track in
//! the JSON form consumed by repeat-expansion genotypers:
//!
//! ```json
//! {
//!     "CommonUnit": "true",
//!     "RepeatId": "8_100652226_100652246",
//!     "RepeatUnit": "GAA",
//!     "TargetRegion": "8:100652226-100652246"
//! }
//! ```

use std::io;

use serde::Deserialize;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use crate::Resolution;

/// The indentation used when writing records.
const INDENT: &[u8] = b"    ";

/// The file extension for a record.
pub const EXTENSION: &str = "json";

/// A repeat-specification record.
///
/// Fields are declared in alphabetical order so that serialized records have
/// sorted keys.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RepeatSpecification {
    /// Whether the repeat unit is common. This is always `"true"`.
    common_unit: String,

    /// The identifier of the repeat (`<chromosome>_<start>_<end>`).
    repeat_id: String,

    /// The repeat unit.
    repeat_unit: String,

    /// The region spanned by the repeat (`<chromosome>:<start>-<end>`).
    target_region: String,
}

impl RepeatSpecification {
    /// Creates a new record for a repeat at the 1-based, fully-closed
    /// coordinates `start` through `end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use repeatspec::RepeatSpecification;
    ///
    /// let record = RepeatSpecification::new("8", 100652226, 100652246, "GAA");
    ///
    /// assert_eq!(record.repeat_id(), "8_100652226_100652246");
    /// assert_eq!(record.repeat_unit(), "GAA");
    /// assert_eq!(record.target_region(), "8:100652226-100652246");
    /// ```
    pub fn new(chromosome: &str, start: usize, end: usize, unit: impl Into<String>) -> Self {
        Self {
            common_unit: String::from("true"),
            repeat_id: format!("{chromosome}_{start}_{end}"),
            repeat_unit: unit.into(),
            target_region: format!("{chromosome}:{start}-{end}"),
        }
    }

    /// Gets the identifier of the repeat.
    pub fn repeat_id(&self) -> &str {
        &self.repeat_id
    }

    /// Gets the repeat unit.
    pub fn repeat_unit(&self) -> &str {
        &self.repeat_unit
    }

    /// Gets the region spanned by the repeat.
    pub fn target_region(&self) -> &str {
        &self.target_region
    }

    /// Gets whether the repeat unit is common.
    pub fn common_unit(&self) -> &str {
        &self.common_unit
    }

    /// Gets the conventional file name for the record (`<RepeatId>.json`).
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.repeat_id, EXTENSION)
    }

    /// Writes the record as indented JSON to `writer`.
    pub fn write_to<W: io::Write>(&self, writer: W) -> serde_json::Result<()> {
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = Serializer::with_formatter(writer, formatter);
        self.serialize(&mut serializer)
    }

    /// Renders the record as indented JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use repeatspec::RepeatSpecification;
    ///
    /// let record = RepeatSpecification::new("X", 10, 30, "CGG");
    ///
    /// assert_eq!(
    ///     record.to_json()?,
    ///     "{\n    \"CommonUnit\": \"true\",\n    \"RepeatId\": \"X_10_30\",\n    \
    ///      \"RepeatUnit\": \"CGG\",\n    \"TargetRegion\": \"X:10-30\"\n}"
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;

        // SAFETY: `serde_json` only ever writes valid UTF-8.
        Ok(String::from_utf8(buffer).unwrap())
    }
}

impl From<&Resolution> for RepeatSpecification {
    fn from(resolution: &Resolution) -> Self {
        RepeatSpecification::new(
            resolution.chromosome(),
            resolution.start(),
            resolution.end(),
            resolution.unit(),
        )
    }
}
