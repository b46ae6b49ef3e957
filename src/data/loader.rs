// ============================================================
// Layer 4 — Dataset Loader
// ============================================================
// Reads the raw product table from a local CSV file.
//
// Expected layout (header row required):
//
//   text,label_path
//   "Kaos Polos Hitam","Fashion > Pria > Atasan"
//   ...
//
// Only the first and the last column are used, so exports with
// extra columns in between load unchanged. Records without a
// label path are skipped with a warning; an empty text is kept.
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::row::Row;
use crate::domain::traits::RowSource;

/// Loads rows from a CSV file.
/// Implements the RowSource trait from Layer 3.
pub struct CsvRowSource {
    path: PathBuf,
}

impl CsvRowSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl RowSource for CsvRowSource {
    fn load_all(&self) -> Result<Vec<Row>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .with_context(|| format!("Cannot open dataset '{}'", self.path.display()))?;

        let mut rows    = Vec::new();
        let mut skipped = 0usize;

        for (line, record) in reader.records().enumerate() {
            let record = record.with_context(|| {
                format!("Malformed record {} in '{}'", line + 1, self.path.display())
            })?;

            let text       = record.get(0).unwrap_or_default();
            let label_path = if record.len() > 1 {
                record.get(record.len() - 1).unwrap_or_default()
            } else {
                ""
            };

            if label_path.trim().is_empty() {
                skipped += 1;
                continue;
            }

            rows.push(Row::new(text, label_path));
        }

        if skipped > 0 {
            tracing::warn!(
                "Skipped {} record(s) without a label path in '{}'",
                skipped,
                self.path.display()
            );
        }

        tracing::info!("Loaded {} rows from '{}'", rows.len(), self.path.display());
        Ok(rows)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_loads_first_and_last_column() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("products.csv");
        fs::write(
            &path,
            "text,price,label_path\n\
             \"Kaos Polos Hitam\",25000,\"Fashion > Pria > Atasan\"\n\
             \"Rice Cooker\",300000,\"Elektronik > Dapur > Penanak Nasi\"\n",
        )
        .unwrap();

        let rows = CsvRowSource::new(&path).load_all().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], Row::new("Kaos Polos Hitam", "Fashion > Pria > Atasan"));
        assert_eq!(rows[1].label_path, "Elektronik > Dapur > Penanak Nasi");
    }

    #[test]
    fn test_skips_rows_without_label() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("products.csv");
        fs::write(&path, "text,label_path\nsatu,\ndua,\"A > B\"\ntiga\n").unwrap();

        let rows = CsvRowSource::new(&path).load_all().unwrap();
        assert_eq!(rows, vec![Row::new("dua", "A > B")]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(CsvRowSource::new(dir.path().join("nope.csv")).load_all().is_err());
    }
}
