//! JSON lines output table.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Error;
use crate::pipelines::cord::NormalizedRecord;

use super::{open_append, RecordSink};

/// One JSON object per line.
pub struct JsonlSink {
    handle: BufWriter<File>,
}

impl RecordSink for JsonlSink {
    fn new(dst: &Path) -> Result<Self, Error> {
        let (file, _) = open_append(dst)?;
        Ok(Self {
            handle: BufWriter::new(file),
        })
    }

    fn write(&mut self, records: Vec<NormalizedRecord>) -> Result<(), Error> {
        let mut records_str = String::new();
        for record in records {
            records_str += &serde_json::to_string(&record)?;
            records_str.push('\n');
        }
        self.handle.write_all(records_str.as_bytes())?;

        Ok(())
    }

    fn write_single(&mut self, record: &NormalizedRecord) -> Result<(), Error> {
        serde_json::to_writer(&mut self.handle, record)?;
        self.handle.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        Ok(self.handle.flush()?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, BufReader};

    use super::*;

    #[test]
    fn write() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("out.jsonl");

        let records = vec![
            NormalizedRecord {
                id: "a".to_string(),
                body_text: "line one\nline two".to_string(),
                ..Default::default()
            },
            NormalizedRecord {
                id: "b".to_string(),
                ..Default::default()
            },
        ];

        let mut sink = JsonlSink::new(&dst).unwrap();
        sink.write(records.clone()).unwrap();
        sink.write_single(&records[1]).unwrap();
        sink.flush().unwrap();

        let f = File::open(&dst).unwrap();
        let read: Vec<NormalizedRecord> = BufReader::new(f)
            .lines()
            .map(|line| serde_json::from_str(&line.unwrap()).unwrap())
            .collect();

        assert_eq!(read.len(), 3);
        assert_eq!(read[0], records[0]);
        assert_eq!(read[2].id, "b");
    }

    #[test]
    fn append_after_unterminated_line() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("out.jsonl");
        std::fs::write(&dst, r#"{"cord_id":"old"}"#).unwrap();

        let mut sink = JsonlSink::new(&dst).unwrap();
        sink.write(vec![NormalizedRecord {
            id: "new".to_string(),
            ..Default::default()
        }])
        .unwrap();
        sink.flush().unwrap();

        let content = std::fs::read_to_string(&dst).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"cord_id":"old"}"#);
        let record: NormalizedRecord = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(record.id, "new");
    }

    #[test]
    fn field_names() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("out.jsonl");
        let mut sink = JsonlSink::new(&dst).unwrap();
        sink.write_single(&NormalizedRecord::default()).unwrap();
        sink.flush().unwrap();

        let value: serde_json::Value =
            serde_json::from_str(std::fs::read_to_string(&dst).unwrap().trim()).unwrap();
        assert!(value.get("cord_id").is_some());
        assert!(value.get("abstract").is_some());
    }
}
