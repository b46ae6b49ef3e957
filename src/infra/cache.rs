// ============================================================
// Layer 6 — Split Cache
// ============================================================
// Persists preprocessed splits so later runs skip normalisation,
// tokenisation and encoding entirely.
//
// One JSON blob per portion, named after the cache key:
//
//   datasets/
//     flat_level_all_train_set.json
//     flat_level_all_valid_set.json
//     flat_level_all_test_set.json
//     level_level_1_train_set.json     ← level strategy, depth 1
//     ...
//     section_train_set.json           ← {section: [samples]}
//     section_valid_set.json
//     section_test_set.json
//     preprocess_config.json           ← settings of the last run
//
// A key is a hit only when all three blobs exist. Hits are loaded
// verbatim without checking them against the current dataset;
// delete the blobs (or use --refresh) to force a rebuild. A blob
// that cannot be parsed is reported as CacheCorruption and is
// never rebuilt silently.
//
// Reference: serde_json documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::data::splitter::{Portion, SplitSet};
use crate::domain::error::PreprocessError;
use crate::domain::strategy::{Method, Stage};

const CONFIG_FILE: &str = "preprocess_config.json";

/// Identifies one set of cached splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub method: Method,
    pub level:  Option<usize>,
    pub stage:  Option<Stage>,
}

impl CacheKey {
    pub fn flat() -> Self {
        Self { method: Method::Flat, level: None, stage: None }
    }

    pub fn level(level: usize) -> Self {
        Self { method: Method::Level, level: Some(level), stage: None }
    }

    /// Section splits are built for fit and test in one pass.
    pub fn section() -> Self {
        Self { method: Method::Section, level: None, stage: None }
    }

    /// File name prefix shared by the three blobs of this key.
    pub fn prefix(&self) -> String {
        let mut prefix = match self.method {
            Method::Section => self.method.to_string(),
            _ => {
                let level = self.level.map_or_else(|| "all".to_string(), |l| l.to_string());
                format!("{}_level_{}", self.method, level)
            }
        };
        if let Some(stage) = self.stage {
            prefix.push('_');
            prefix.push_str(&stage.to_string());
        }
        prefix
    }
}

/// Directory-backed blob store for split artifacts.
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    /// Open the store, creating the directory if needed
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create cache directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn blob_path(&self, key: &CacheKey, portion: Portion) -> PathBuf {
        self.dir.join(format!("{}_{}_set.json", key.prefix(), portion.name()))
    }

    /// True when all three blobs of `key` are present
    pub fn contains(&self, key: &CacheKey) -> bool {
        Portion::ALL.iter().all(|&p| self.blob_path(key, p).exists())
    }

    /// Return the cached splits for `key`, or compute, persist and
    /// return them. `compute` is not called on a hit.
    pub fn get_or_compute<T, F>(&self, key: &CacheKey, compute: F) -> Result<SplitSet<T>>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Result<SplitSet<T>>,
    {
        if self.contains(key) {
            tracing::info!("Loading cached '{}' splits from '{}'", key.prefix(), self.dir.display());
            return Ok(self.load(key)?);
        }

        tracing::info!("No cached '{}' splits, preprocessing", key.prefix());
        let splits = compute()?;
        self.store(key, &splits)?;
        Ok(splits)
    }

    pub fn load<T: DeserializeOwned>(&self, key: &CacheKey) -> Result<SplitSet<T>, PreprocessError> {
        Ok(SplitSet {
            train: self.read_blob(&self.blob_path(key, Portion::Train))?,
            valid: self.read_blob(&self.blob_path(key, Portion::Valid))?,
            test:  self.read_blob(&self.blob_path(key, Portion::Test))?,
        })
    }

    pub fn store<T: Serialize>(&self, key: &CacheKey, splits: &SplitSet<T>) -> Result<()> {
        for portion in Portion::ALL {
            let path = self.blob_path(key, portion);
            let file = fs::File::create(&path)
                .with_context(|| format!("Cannot write '{}'", path.display()))?;
            write_blob(file, splits.get(portion))
                .with_context(|| format!("Cannot write '{}'", path.display()))?;
            tracing::debug!("Saved '{}'", path.display());
        }
        Ok(())
    }

    /// Delete the blobs of `key` so the next call recomputes them.
    pub fn invalidate(&self, key: &CacheKey) -> Result<()> {
        for portion in Portion::ALL {
            let path = self.blob_path(key, portion);
            if path.exists() {
                fs::remove_file(&path)
                    .with_context(|| format!("Cannot remove '{}'", path.display()))?;
                tracing::debug!("Removed '{}'", path.display());
            }
        }
        Ok(())
    }

    /// Record the settings of a run next to its artifacts.
    pub fn save_config<C: Serialize>(&self, cfg: &C) -> Result<()> {
        let path = self.dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;
        tracing::debug!("Saved preprocessing config to '{}'", path.display());
        Ok(())
    }

    pub fn load_config<C: DeserializeOwned>(&self) -> Result<C> {
        let path = self.dir.join(CONFIG_FILE);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;
        Ok(serde_json::from_str(&json)?)
    }

    fn read_blob<T: DeserializeOwned>(&self, path: &Path) -> Result<T, PreprocessError> {
        let corrupt = |reason: String| PreprocessError::CacheCorruption {
            path: path.display().to_string(),
            reason,
        };
        let file = fs::File::open(path).map_err(|e| corrupt(e.to_string()))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| corrupt(e.to_string()))
    }
}

/// Serialise `value` as JSON into `out`, surfacing errors from the final flush.
fn write_blob<T: Serialize, W: Write>(out: W, value: &T) -> Result<()> {
    let mut writer = BufWriter::new(out);
    serde_json::to_writer(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}
