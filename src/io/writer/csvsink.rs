//! CSV output table.
use std::fs::File;
use std::path::Path;

use log::debug;

use crate::error::Error;
use crate::pipelines::cord::NormalizedRecord;

use super::{open_append, RecordSink};

pub struct CsvSink {
    writer: csv::Writer<File>,
}

impl RecordSink for CsvSink {
    /// Opens `dst` for appending, see [super::open_append].
    /// The header row is written only if the file is new or empty.
    fn new(dst: &Path) -> Result<Self, Error> {
        let (file, with_headers) = open_append(dst)?;
        debug!("opening {:?} (headers: {})", dst, with_headers);

        let writer = csv::WriterBuilder::new()
            .has_headers(with_headers)
            .from_writer(file);

        Ok(Self { writer })
    }

    fn write(&mut self, records: Vec<NormalizedRecord>) -> Result<(), Error> {
        for record in &records {
            self.write_single(record)?;
        }
        Ok(())
    }

    fn write_single(&mut self, record: &NormalizedRecord) -> Result<(), Error> {
        Ok(self.writer.serialize(record)?)
    }

    fn flush(&mut self) -> Result<(), Error> {
        Ok(self.writer.flush()?)
    }
}
