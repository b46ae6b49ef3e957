// ============================================================
// Layer 6 — Split Report
// ============================================================
// Records how many samples ended up in every portion (and, for
// the section strategy, in every section) to a CSV file next to
// the cached splits.
//
// Output file: <cache_dir>/split_summary.csv
//
// Example CSV output:
//   method,level,portion,section,samples
//   flat,all,train,,7200
//   flat,all,valid,,800
//   flat,all,test,,2000
//   section,all,train,0,9000
//   section,all,train,1,5400
//   ...
//
// Rows are appended, so several strategies can share one report.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
};

const REPORT_FILE: &str = "split_summary.csv";

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitCount {
    pub method:  String,
    pub level:   String,
    pub portion: String,
    /// Empty unless the count is per section
    pub section: Option<usize>,
    pub samples: usize,
}

impl SplitCount {
    pub fn new(
        method:  impl Into<String>,
        level:   impl Into<String>,
        portion: impl Into<String>,
        section: Option<usize>,
        samples: usize,
    ) -> Self {
        Self {
            method:  method.into(),
            level:   level.into(),
            portion: portion.into(),
            section,
            samples,
        }
    }
}

pub struct SplitReport {
    csv_path: PathBuf,
}

impl SplitReport {
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        Ok(Self { csv_path: dir.join(REPORT_FILE) })
    }

    /// Append `counts` to the CSV, writing the header on first use.
    pub fn log(&self, counts: &[SplitCount]) -> Result<()> {
        let is_new = !self.csv_path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open '{}'", self.csv_path.display()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(file);

        for count in counts {
            writer.serialize(count)?;
        }
        writer.flush()?;

        tracing::debug!("Logged {} split count(s) to '{}'", counts.len(), self.csv_path.display());
        Ok(())
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}
