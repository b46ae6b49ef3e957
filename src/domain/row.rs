// ============================================================
// Layer 3 — Row Domain Type
// ============================================================
// A single record of the raw product dataset: the product title
// and the category path it is filed under, e.g.
//
//   text:       "Kaos Polos Hitam"
//   label_path: "Fashion > Pria > Atasan"
//
// The path is ordered from the root-adjacent category down to
// the leaf category.

use serde::{Deserialize, Serialize};

/// Separator between node names in a label path.
pub const PATH_DELIMITER: &str = " > ";

/// A raw dataset row before normalisation or encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Free-form product text
    pub text: String,

    /// Category path, nodes joined by `PATH_DELIMITER`
    pub label_path: String,
}

impl Row {
    pub fn new(text: impl Into<String>, label_path: impl Into<String>) -> Self {
        Self {
            text:       text.into(),
            label_path: label_path.into(),
        }
    }

    /// Number of whitespace-separated words in the raw text.
    /// Used to size the padded token sequences.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Split a label path into lower-cased, trimmed node names.
pub fn split_path(label_path: &str) -> Vec<String> {
    label_path
        .split(PATH_DELIMITER)
        .map(|node| node.trim().to_lowercase())
        .filter(|node| !node.is_empty())
        .collect()
}
