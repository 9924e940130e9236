/*! Audit logging.

A small mutex-guarded, append-only JSONL writer shared by every worker in
the driver's pool. Each record is serialized and written as a single line,
flushed immediately — batch runs are long-lived and a crash should lose at
most the in-flight record, not the whole log.
!*/
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

use serde::Serialize;

use crate::error::Error;

pub struct AuditLog {
    writer: Mutex<BufWriter<File>>,
}

impl AuditLog {
    pub fn create(path: &Path) -> Result<Self, Error> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    /// Serializes `record` as one JSON line and flushes it immediately.
    pub fn append<T: Serialize>(&self, record: &T) -> Result<(), Error> {
        let line = serde_json::to_string(record)?;
        let mut writer = self.writer.lock().expect("audit log mutex poisoned");
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::fs;
    use tempfile::tempdir;

    #[derive(Serialize)]
    struct Record {
        path: String,
        reason: String,
    }

    #[test]
    fn appends_one_json_line_per_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.jsonl");
        let log = AuditLog::create(&path).unwrap();
        log.append(&Record {
            path: "a.txt".into(),
            reason: "non_english".into(),
        })
        .unwrap();
        log.append(&Record {
            path: "b.txt".into(),
            reason: "too_short".into(),
        })
        .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("a.txt"));
        assert!(lines[1].contains("too_short"));
    }
}
