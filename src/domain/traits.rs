// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The pipeline talks to its collaborators only through these
// traits:
//   - RowSource       → CsvRowSource reads the raw table
//   - HierarchyOracle → PathTree builds the lookup tables
//   - TextTokenizer   → PaddedTokenizer wraps a HuggingFace tokenizer
//   - Stemmer         → lives next to its implementation in data::stemmer
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::hierarchy::TreeHierarchy;
use crate::domain::row::Row;

// ─── RowSource ────────────────────────────────────────────────────────────────
/// Any component that can load the raw (text, label path) table.
pub trait RowSource {
    /// Load every row of the table, once.
    fn load_all(&self) -> Result<Vec<Row>>;
}

// ─── HierarchyOracle ──────────────────────────────────────────────────────────
/// Any component that knows the category tree.
pub trait HierarchyOracle {
    /// Produce the level / section lookup tables for the tree.
    fn generate_hierarchy(&self) -> Result<TreeHierarchy>;
}

// ─── TextTokenizer ────────────────────────────────────────────────────────────
/// Turns normalised text into a fixed-length sequence of token ids.
/// Must be shareable across the rayon worker threads.
pub trait TextTokenizer: Send + Sync {
    /// Encode `text`, truncating to or padding up to exactly `max_length` ids.
    fn encode_padded(&self, text: &str, max_length: usize) -> Result<Vec<u32>>;
}
