use std::path::Path;

use crate::error::Error;
use crate::pipelines::cord::NormalizedRecord;

/// Appending record writer.
///
/// Implementors append to `dst` and never truncate it.
pub trait RecordSink {
    fn new(dst: &Path) -> Result<Self, Error>
    where
        Self: Sized;
    fn write(&mut self, records: Vec<NormalizedRecord>) -> Result<(), Error>;
    fn write_single(&mut self, record: &NormalizedRecord) -> Result<(), Error>;
    fn flush(&mut self) -> Result<(), Error>;
}
