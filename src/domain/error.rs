// ============================================================
// Layer 3 — Preprocessing Errors
// ============================================================
// Every failure the pipeline itself can raise. Collaborator
// failures (CSV parsing, tokenizer loading) travel as anyhow
// errors with context instead.
//
// Policy: an unresolved node or an out-of-range level aborts the
// whole run. Rows are never skipped with an empty target.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("label path '{path}' references node '{node}' which is not in the hierarchy")]
    UnresolvedNode { node: String, path: String },

    #[error("level {level} requested but label path '{path}' only has {depth} level(s)")]
    DepthExceeded {
        level: usize,
        depth: usize,
        path:  String,
    },

    #[error("cached artifact '{path}' is unreadable: {reason}")]
    CacheCorruption { path: String, reason: String },

    #[error("dataset '{0}' has no rows")]
    EmptyDataset(String),

    #[error("section {0} has no fit data")]
    UnknownSection(usize),

    #[error("node '{node}' appears under more than one parent ('{first}' and '{second}')")]
    AmbiguousNode {
        node:   String,
        first:  String,
        second: String,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}
