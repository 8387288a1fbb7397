//! Identifiers already present in an output table.
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;

use crate::error::Error;
use crate::io::OutputFormat;
use crate::pipelines::cord::COLUMNS;

#[derive(Deserialize)]
struct IdOnly {
    #[serde(rename = "cord_id")]
    id: String,
}

/// Collect the identifiers of the records stored at `path`.
///
/// A missing or empty table has no identifiers.
pub fn seen_ids(path: &Path, format: OutputFormat) -> Result<HashSet<String>, Error> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{:?} does not exist yet", path);
            return Ok(HashSet::new());
        }
        Err(e) => return Err(e.into()),
    };

    if file.metadata()?.len() == 0 {
        return Ok(HashSet::new());
    }

    match format {
        OutputFormat::Csv => from_csv(file, path),
        OutputFormat::Jsonl => from_jsonl(file, path),
    }
}

fn from_csv(file: File, path: &Path) -> Result<HashSet<String>, Error> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    // rows are appended in record order, so the header has to match it exactly
    let headers = reader.headers()?;
    if !headers.iter().map(str::trim).eq(COLUMNS) {
        return Err(Error::Custom(format!(
            "{:?} has columns {:?}, expected {:?}. Refusing to append to it",
            path,
            headers.iter().collect::<Vec<_>>(),
            COLUMNS
        )));
    }

    let mut ids = HashSet::new();
    for (idx, record) in reader.records().enumerate() {
        match record {
            Ok(record) => {
                if let Some(id) = record.get(0).map(str::trim) {
                    if !id.is_empty() {
                        ids.insert(id.to_string());
                    }
                }
            }
            Err(e) => warn!("{:?}: skipping unreadable record {}: {}", path, idx, e),
        }
    }

    Ok(ids)
}

fn from_jsonl(file: File, path: &Path) -> Result<HashSet<String>, Error> {
    let mut ids = HashSet::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<IdOnly>(&line) {
            Ok(IdOnly { id }) => {
                let id = id.trim();
                if !id.is_empty() {
                    ids.insert(id.to_string());
                }
            }
            Err(e) => warn!("{:?}: skipping unreadable line {}: {}", path, idx + 1, e),
        }
    }

    Ok(ids)
}
