//! # scinorm
//!
//! Text normalization and ingestion of parsed scientific papers.
//!
//! - [normalizer] holds the deterministic text normalization pipeline, built from the
//!   [transformers] passes.
//! - [sources] reads the metadata table and the parsed paper documents.
//! - [pipelines] glues everything together: an incremental ingestion that appends normalized
//!   records to an output table ([io]), skipping the ones already there ([filtering]).
pub mod error;
pub mod filtering;
pub mod io;
pub mod normalizer;
pub mod pipelines;
pub mod sources;
pub mod transformers;
