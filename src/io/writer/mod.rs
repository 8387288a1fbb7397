/*!
# Record writing

Records are appended to the output table through a [RecordSink].
Both sinks open their destination in append mode, so that successive runs grow the same table.
!*/
mod csvsink;
mod jsonlsink;
mod writertrait;

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use log::debug;

pub use csvsink::CsvSink;
pub use jsonlsink::JsonlSink;
pub use writertrait::RecordSink;

use crate::error::Error;
use crate::io::OutputFormat;

/// Open the sink matching `format` on `dst`.
pub fn open(dst: &Path, format: OutputFormat) -> Result<Box<dyn RecordSink>, Error> {
    Ok(match format {
        OutputFormat::Csv => Box::new(CsvSink::new(dst)?),
        OutputFormat::Jsonl => Box::new(JsonlSink::new(dst)?),
    })
}

/// Open `dst` for appending, creating it if needed.
///
/// A non-empty file that doesn't end with a line break gets one, so that the first appended
/// record starts on its own line. Returns the file and whether it was empty.
fn open_append(dst: &Path) -> Result<(File, bool), Error> {
    let mut file = OpenOptions::new()
        .read(true)
        .create(true)
        .append(true)
        .open(dst)?;

    let len = file.metadata()?.len();
    if len > 0 {
        let mut last = [0];
        file.seek(SeekFrom::End(-1))?;
        file.read_exact(&mut last)?;
        if last != *b"\n" {
            debug!("{:?}: terminating unfinished last line", dst);
            file.write_all(b"\n")?;
        }
    }

    Ok((file, len == 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_append_terminates_last_line() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("table");

        let (_, empty) = open_append(&dst).unwrap();
        assert!(empty);
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "");

        std::fs::write(&dst, "a\nb").unwrap();
        let (mut file, empty) = open_append(&dst).unwrap();
        assert!(!empty);
        file.write_all(b"c\n").unwrap();
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "a\nb\nc\n");

        // already terminated: left untouched
        let _ = open_append(&dst).unwrap();
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "a\nb\nc\n");
    }
}
