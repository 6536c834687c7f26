//! CSV export of all records

use crate::types::Record;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Byte order mark so spreadsheet tools pick up UTF-8
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

const HEADER: [&str; 5] = ["Time", "Type", "Category", "Amount", "Note"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Write every record to `path`, returning the number of rows written
pub fn export_csv(records: &[Record], path: &Path) -> Result<usize, ExportError> {
    let io_err = |source: std::io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = std::fs::File::create(path).map_err(io_err)?;
    file.write_all(UTF8_BOM).map_err(io_err)?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(HEADER)?;
    for r in records {
        let amount = r.amount.to_string();
        writer.write_record([
            r.date.as_str(),
            r.kind.label(),
            r.category.as_str(),
            amount.as_str(),
            r.note.as_str(),
        ])?;
    }
    writer.flush().map_err(io_err)?;

    info!(path = %path.display(), rows = records.len(), "Records exported");
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecordType;

    #[test]
    fn test_export_writes_bom_header_and_rows() {
        let dir = std::env::temp_dir().join(format!("pocket-track-export-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bill.csv");

        let records = vec![
            Record {
                date: "2024-05-01 08:00".into(),
                kind: RecordType::Income,
                amount: 20.0,
                category: "Allowance".into(),
                note: String::new(),
            },
            Record {
                date: "2024-05-01 12:00".into(),
                kind: RecordType::Expense,
                amount: 3.5,
                category: "Snacks".into(),
                note: "chips, salted".into(),
            },
        ];

        let rows = export_csv(&records, &path).unwrap();
        assert_eq!(rows, 2);

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Time,Type,Category,Amount,Note");
        assert_eq!(lines[1], "2024-05-01 08:00,Income,Allowance,20,");
        assert_eq!(lines[2], "2024-05-01 12:00,Expense,Snacks,3.5,\"chips, salted\"");
    }

    #[test]
    fn test_export_to_missing_dir_reports_path() {
        let path = std::env::temp_dir()
            .join(format!("pocket-track-export-missing-{}", std::process::id()))
            .join("no-such-dir")
            .join("bill.csv");
        match export_csv(&[], &path) {
            Err(ExportError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected Io error, got {:?}", other.map(|_| ())),
        }
    }
}
