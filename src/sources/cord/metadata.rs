//! Metadata table reading.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

/// The `metadata.csv` columns used during ingestion.
///
/// Every column is optional and unknown columns are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MetadataRow {
    pub cord_uid: String,
    pub url: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub journal: String,
    pub pdf_json_files: String,
    pub pmc_json_files: String,
}

/// Splits a `; `-separated file list, ignoring blanks and pandas-style `nan`s.
fn entries(field: &str) -> impl Iterator<Item = &str> {
    field
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty() && !entry.eq_ignore_ascii_case("nan"))
}

impl MetadataRow {
    /// Record identifier (trimmed `cord_uid`).
    pub fn id(&self) -> &str {
        self.cord_uid.trim()
    }

    pub fn pmc_files(&self) -> impl Iterator<Item = &str> {
        entries(&self.pmc_json_files)
    }

    pub fn pdf_files(&self) -> impl Iterator<Item = &str> {
        entries(&self.pdf_json_files)
    }
}

/// Iterate over the rows of a metadata table.
///
/// Rows are deserialized lazily: a malformed row yields an error without stopping iteration.
pub fn rows_from_reader<R: Read>(reader: R) -> impl Iterator<Item = Result<MetadataRow, Error>> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader)
        .into_deserialize::<MetadataRow>()
        .map(|row| row.map_err(Error::from))
}

/// Opens `path` and iterates over its rows. See [rows_from_reader].
pub fn rows(path: &Path) -> Result<impl Iterator<Item = Result<MetadataRow, Error>>, Error> {
    let file = File::open(path)?;
    Ok(rows_from_reader(file))
}
