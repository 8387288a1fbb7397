//! Pipelines.
//!
//! Pipelines read a corpus, normalize it and write the result.
//! The module provides a light [pipeline::Pipeline] trait that every pipeline implements.
pub mod cord;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use cord::CordIngest;
pub use pipeline::Pipeline;
