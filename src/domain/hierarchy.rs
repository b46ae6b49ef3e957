// ============================================================
// Layer 3 — Category Tree Lookup Tables
// ============================================================
// The hierarchy oracle hands the pipeline three read-only tables:
//
//   level_on_nodes_indexed  — per level, node name → index
//   idx_on_section          — section index → ordered sibling names
//   section_on_idx          — node name → section index
//
// A "section" is the group of children sharing one parent. The
// children of the (virtual) root form a section too.
//
// Example for a single path "fashion > pria > atasan":
//   level_on_nodes_indexed = [{fashion: 0}, {pria: 0}, {atasan: 0}]
//   idx_on_section         = {0: [fashion], 1: [pria], 2: [atasan]}
//   section_on_idx         = {fashion: 0, pria: 1, atasan: 2}

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::error::PreprocessError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeHierarchy {
    pub level_on_nodes_indexed: Vec<HashMap<String, usize>>,
    pub idx_on_section:         BTreeMap<usize, Vec<String>>,
    pub section_on_idx:         HashMap<String, usize>,
}

impl TreeHierarchy {
    /// Number of levels in the tree
    pub fn depth(&self) -> usize {
        self.level_on_nodes_indexed.len()
    }

    pub fn num_sections(&self) -> usize {
        self.idx_on_section.len()
    }

    /// Number of classes at a level, or 0 if the level does not exist
    pub fn level_size(&self, level: usize) -> usize {
        self.level_on_nodes_indexed.get(level).map_or(0, |m| m.len())
    }

    /// Index of `node` within `level`.
    pub fn node_index(&self, level: usize, node: &str) -> Option<usize> {
        self.level_on_nodes_indexed
            .get(level)
            .and_then(|members| members.get(node).copied())
    }

    /// Reverse lookup of `node_index`.
    pub fn node_name(&self, level: usize, index: usize) -> Option<&str> {
        self.level_on_nodes_indexed.get(level).and_then(|members| {
            members
                .iter()
                .find(|(_, &idx)| idx == index)
                .map(|(name, _)| name.as_str())
        })
    }

    pub fn section_of(&self, node: &str) -> Option<usize> {
        self.section_on_idx.get(node).copied()
    }

    /// Position of `node` inside the ordered member list of `section`
    pub fn local_index(&self, section: usize, node: &str) -> Option<usize> {
        self.idx_on_section
            .get(&section)
            .and_then(|members| members.iter().position(|m| m == node))
    }

    /// Section index and local index of `node`, or an
    /// `UnresolvedNode` error naming the offending path.
    pub fn locate(&self, node: &str, path: &str) -> Result<(usize, usize), PreprocessError> {
        let unresolved = || PreprocessError::UnresolvedNode {
            node: node.to_string(),
            path: path.to_string(),
        };
        let section = self.section_of(node).ok_or_else(unresolved)?;
        let local   = self.local_index(section, node).ok_or_else(unresolved)?;
        Ok((section, local))
    }

    /// Size of each section, i.e. the class count of its classifier
    pub fn section_sizes(&self) -> BTreeMap<usize, usize> {
        self.idx_on_section
            .iter()
            .map(|(idx, members)| (*idx, members.len()))
            .collect()
    }
}
