use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{debug, error, info};
use rayon::prelude::*;

use crate::error::Error;
use crate::filtering::{Filter, FilterMut, HasLocator, Unseen};
use crate::io::{reader, writer, OutputFormat};
use crate::normalizer::Normalizer;
use crate::pipelines::pipeline::Pipeline;
use crate::sources::cord::{metadata, DocumentSource, FsSource, MetadataRow};

use super::{NormalizedRecord, RecordExtractor};

const DEFAULT_CHUNK_SIZE: usize = 500;

/// Counters of an ingestion run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IngestStats {
    /// Metadata rows read, malformed ones included.
    pub rows: usize,
    pub malformed_rows: usize,
    pub missing_id: usize,
    pub already_processed: usize,
    pub no_locator: usize,
    pub missing_file: usize,
    pub failed: usize,
    pub written: usize,
}

pub struct CordIngest<S = FsSource> {
    metadata: PathBuf,
    source: S,
    dst: PathBuf,
    format: OutputFormat,
    normalizer: Normalizer,
    metadata_fallback: bool,
    chunk_size: usize,
}

impl<S> CordIngest<S>
where
    S: DocumentSource + Sync,
{
    /// Output format is inferred from `dst`'s extension, see [OutputFormat::from_path].
    pub fn new(metadata: PathBuf, source: S, dst: PathBuf, normalizer: Normalizer) -> Self {
        let format = OutputFormat::from_path(&dst);
        Self {
            metadata,
            source,
            dst,
            format,
            normalizer,
            metadata_fallback: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Number of metadata rows processed (in parallel) between two writes.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn with_metadata_fallback(mut self, metadata_fallback: bool) -> Self {
        self.metadata_fallback = metadata_fallback;
        self
    }

    pub fn dst(&self) -> &Path {
        &self.dst
    }

    /// Locate, read and extract a single row.
    ///
    /// Returns `Ok(None)` if none of the row's documents exist.
    fn process_row(
        &self,
        extractor: &RecordExtractor,
        row: &MetadataRow,
    ) -> Result<Option<NormalizedRecord>, Error> {
        let path = match self.source.locate(row) {
            Some(path) => path,
            None => return Ok(None),
        };
        debug!("{}: reading {:?}", row.id(), path);
        let paper = self.source.fetch(&path)?;
        debug!(
            "{}: read paper {}",
            row.id(),
            paper.paper_id.as_deref().unwrap_or("<no paper_id>")
        );
        Ok(Some(extractor.extract(row, &paper)))
    }

    /// Sort out the rows of a chunk that have to be processed, marking them as seen.
    fn select<I>(
        rows: I,
        seen: &mut Unseen,
        stats: &mut IngestStats,
    ) -> Vec<MetadataRow>
    where
        I: Iterator<Item = Result<MetadataRow, Error>>,
    {
        let has_locator = HasLocator;
        let mut batch = Vec::new();

        for row in rows {
            stats.rows += 1;
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    error!("malformed metadata row: {:?}", e);
                    stats.malformed_rows += 1;
                    continue;
                }
            };

            if row.id().is_empty() {
                stats.missing_id += 1;
            } else if !has_locator.detect(&row) {
                debug!("{}: no document referenced", row.id());
                stats.no_locator += 1;
            } else if !seen.detect_mut(row.id()) {
                stats.already_processed += 1;
            } else {
                batch.push(row);
            }
        }

        batch
    }
}

impl<S> Pipeline<IngestStats> for CordIngest<S>
where
    S: DocumentSource + Sync,
{
    fn run(&self) -> Result<IngestStats, Error> {
        let mut stats = IngestStats::default();

        let mut seen = Unseen::new(reader::seen_ids(&self.dst, self.format)?);
        info!("{} records already in {:?}", seen.len(), self.dst);

        let mut sink = writer::open(&self.dst, self.format)?;
        let extractor = RecordExtractor::new(&self.normalizer, self.metadata_fallback);

        let rows = metadata::rows(&self.metadata)?;
        for chunk in &rows.chunks(self.chunk_size) {
            let batch = Self::select(chunk, &mut seen, &mut stats);

            let results: Vec<(MetadataRow, Result<Option<NormalizedRecord>, Error>)> = batch
                .into_par_iter()
                .map(|row| {
                    let result = self.process_row(&extractor, &row);
                    (row, result)
                })
                .collect();

            let mut records = Vec::with_capacity(results.len());
            for (row, result) in results {
                match result {
                    Ok(Some(record)) => records.push(record),
                    Ok(None) => {
                        debug!("{}: no document found", row.id());
                        stats.missing_file += 1;
                        seen.forget(row.id());
                    }
                    Err(e) => {
                        error!("error processing {}: {:?}", row.id(), e);
                        stats.failed += 1;
                        seen.forget(row.id());
                    }
                }
            }

            if !records.is_empty() {
                stats.written += records.len();
                sink.write(records)?;
                sink.flush()?;
            }

            info!(
                "{} metadata rows read, {} new records written",
                stats.rows, stats.written
            );
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, pdf: &str) -> Result<MetadataRow, Error> {
        Ok(MetadataRow {
            cord_uid: id.to_string(),
            pdf_json_files: pdf.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn select() {
        let mut seen = Unseen::new(["old".to_string()].into_iter().collect());
        let mut stats = IngestStats::default();

        let rows = vec![
            row("old", "a.json"),
            row("", "b.json"),
            row("nofile", ""),
            row("new", "c.json"),
            row("new", "d.json"),
            Err(Error::Custom("bad row".to_string())),
        ];
        let batch = CordIngest::<FsSource>::select(rows.into_iter(), &mut seen, &mut stats);

        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].pdf_json_files, "c.json");
        assert_eq!(
            stats,
            IngestStats {
                rows: 6,
                malformed_rows: 1,
                missing_id: 1,
                already_processed: 2,
                no_locator: 1,
                ..Default::default()
            }
        );
    }
}
