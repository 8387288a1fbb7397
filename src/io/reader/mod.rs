/*! Output table reading.

Only identifiers are read back, to skip already processed records on later runs.
!*/
mod seen;

pub use seen::seen_ids;
