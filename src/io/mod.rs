/*!
# IO utilities

Output table reading and writing.

Normalized records are appended to a single table, either a CSV file or a JSON lines file.
Reading is limited to collecting the identifiers already present in a table, see [reader::seen_ids].
!*/
pub mod reader;
pub mod writer;

use std::path::Path;
use std::str::FromStr;

use crate::error::Error;

/// Output table format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Jsonl,
}

impl OutputFormat {
    /// Guess the format from the extension: `.jsonl` and `.json` are [OutputFormat::Jsonl],
    /// anything else is [OutputFormat::Csv].
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jsonl") || ext.eq_ignore_ascii_case("json") => {
                Self::Jsonl
            }
            _ => Self::Csv,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "jsonl" | "json" => Ok(Self::Jsonl),
            other => Err(Error::Custom(format!(
                "unknown output format {:?} (expected csv or jsonl)",
                other
            ))),
        }
    }
}
