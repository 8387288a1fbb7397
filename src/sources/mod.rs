//! Corpus sources.
pub mod cord;
