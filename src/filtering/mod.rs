/*! Filtering utilities

Filters decide whether a metadata row goes through ingestion.

Filters implement [filter::Filter], [filter::FilterMut] or both:
- [filter::Filter] is implemented for filters that do not have state (see [row::HasLocator])
- [filter::FilterMut] is implemented for filters that do have state (see [row::Unseen], which remembers identifiers).
! */
mod filter;
pub mod row;

pub use filter::Filter;
pub use filter::FilterMut;
pub use row::{HasLocator, Unseen};
