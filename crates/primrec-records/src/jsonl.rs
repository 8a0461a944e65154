//! JSONL persistence: one line per calculation record.
//!
//! The portable interchange format for the history file. Reads skip blank
//! lines and `#` comments; writes replace the whole file atomically via a
//! temp file and rename.

use crate::record::CalculationRecord;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Errors from JSONL operations.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("line {0}: I/O error: {1}")]
    Io(usize, String),

    #[error("line {0}: parse error: {1}")]
    Parse(usize, String),

    #[error("serialization error: {0}")]
    Serialize(String),
}

/// Read records from a JSONL reader.
pub fn read_records(reader: impl BufRead) -> Result<Vec<CalculationRecord>, RecordError> {
    let mut records = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| RecordError::Io(line_no + 1, e.to_string()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let record: CalculationRecord = serde_json::from_str(trimmed)
            .map_err(|e| RecordError::Parse(line_no + 1, e.to_string()))?;
        records.push(record);
    }
    Ok(records)
}

/// Write records to a JSONL writer.
pub fn write_records(
    writer: &mut impl Write,
    records: &[CalculationRecord],
) -> Result<(), RecordError> {
    for record in records {
        let line =
            serde_json::to_string(record).map_err(|e| RecordError::Serialize(e.to_string()))?;
        writeln!(writer, "{line}").map_err(|e| RecordError::Io(0, e.to_string()))?;
    }
    Ok(())
}

/// Read records from a JSONL file path.
pub fn read_records_from_path(
    path: impl AsRef<Path>,
) -> Result<Vec<CalculationRecord>, RecordError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| RecordError::Io(0, format!("{}: {e}", path.display())))?;
    read_records(BufReader::new(file))
}

/// Write records to a JSONL file path, replacing any previous content.
pub fn write_records_to_path(
    path: impl AsRef<Path>,
    records: &[CalculationRecord],
) -> Result<(), RecordError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| RecordError::Io(0, format!("{parent:?}: {e}")))?;
    }

    let tmp_path = tmp_write_path(path);
    let write_result = (|| -> Result<(), RecordError> {
        let file = File::create(&tmp_path)
            .map_err(|e| RecordError::Io(0, format!("{}: {e}", tmp_path.display())))?;
        let mut writer = BufWriter::new(file);
        write_records(&mut writer, records)?;
        writer
            .flush()
            .map_err(|e| RecordError::Io(0, format!("{}: {e}", tmp_path.display())))?;
        Ok(())
    })();

    if let Err(error) = write_result {
        let _ = fs::remove_file(&tmp_path);
        return Err(error);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        RecordError::Io(
            0,
            format!("{} -> {}: {e}", tmp_path.display(), path.display()),
        )
    })
}

fn tmp_write_path(path: &Path) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let mut tmp: OsString = path.as_os_str().to_os_string();
    tmp.push(format!(".tmp.{}.{}", std::process::id(), unique));
    PathBuf::from(tmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::OperationKind;
    use chrono::{TimeZone, Utc};

    fn temp_path(prefix: &str) -> PathBuf {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "primrec-jsonl-{prefix}-{}-{unique}.jsonl",
            std::process::id()
        ))
    }

    fn record(operation: OperationKind, a: u64, b: u64, result: u64, secs: i64) -> CalculationRecord {
        CalculationRecord::with_timestamp(
            operation,
            a,
            b,
            result,
            Utc.timestamp_opt(secs, 0).single().expect("valid timestamp"),
        )
    }

    #[test]
    fn round_trips_through_a_file() {
        let path = temp_path("roundtrip");
        let records = vec![
            record(OperationKind::Gcd, 48, 18, 6, 100),
            record(OperationKind::Lcm, 48, 18, 144, 200),
        ];

        write_records_to_path(&path, &records).expect("write should succeed");
        let back = read_records_from_path(&path).expect("read should succeed");
        assert_eq!(back, records);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn read_skips_blank_lines_and_comments() {
        let payload = format!(
            "# history file\n\n{}\n",
            serde_json::to_string(&record(OperationKind::Gcd, 8, 12, 4, 50)).unwrap()
        );
        let records = read_records(payload.as_bytes()).expect("read should succeed");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].result, 4);
    }

    #[test]
    fn read_reports_line_numbers_on_parse_errors() {
        let payload = "# comment\nnot json\n";
        let err = read_records(payload.as_bytes()).expect_err("must fail to parse");
        assert!(matches!(err, RecordError::Parse(2, _)));
    }

    #[test]
    fn write_replaces_previous_content() {
        let path = temp_path("replace");
        write_records_to_path(&path, &[record(OperationKind::Gcd, 48, 18, 6, 1)])
            .expect("first write should succeed");
        write_records_to_path(&path, &[record(OperationKind::Lcm, 4, 6, 12, 2)])
            .expect("second write should succeed");

        let lines = fs::read_to_string(&path).expect("jsonl should exist");
        assert!(!lines.contains("GCD"));
        assert!(lines.contains("LCM"));

        let _ = fs::remove_file(path);
    }
}
