//! CORD-19 ingestion pipeline
//!
//! Normalizes every paper of a CORD-19 style corpus into a [NormalizedRecord],
//! appending the records to an output table and skipping papers that already are in it.
//!
//! # Processing
//! 1. Identifiers already present in the output table are loaded.
//! 1. Metadata rows are streamed in chunks. Rows without identifier, without any referenced parse
//!    or with an already seen identifier are skipped.
//! 1. The documents of a chunk are located, read and normalized in parallel.
//!    A document that can't be read is logged and skipped, the run carries on.
//! 1. The chunk's records are appended to the output table.
mod extract;
mod pipeline;
mod record;

pub use extract::RecordExtractor;
pub use pipeline::{CordIngest, IngestStats};
pub use record::{NormalizedRecord, COLUMNS, ID_COLUMN};
