// ============================================================
// Layer 4 — Path Tree (Hierarchy Oracle)
// ============================================================
// Builds the category tree from the label paths found in the
// dataset and derives its lookup tables.
//
// Numbering is alphabetical, so it does not depend on row order:
//   - node indices within a level follow sorted node names
//   - section 0 holds the root-level nodes
//   - further sections are numbered level by level, parents in
//     sorted order, each holding its children in sorted order
//
// Example, paths "fashion > pria > atasan" and "fashion > wanita":
//   levels   = [{fashion: 0}, {pria: 0, wanita: 1}, {atasan: 0}]
//   sections = {0: [fashion], 1: [pria, wanita], 2: [atasan]}

use std::collections::{BTreeMap, BTreeSet, HashMap};

use anyhow::Result;

use crate::domain::error::PreprocessError;
use crate::domain::hierarchy::TreeHierarchy;
use crate::domain::row::{split_path, Row};
use crate::domain::traits::HierarchyOracle;

const ROOT: &str = "<root>";

/// A category tree assembled from label paths.
#[derive(Debug, Clone, Default)]
pub struct PathTree {
    paths: Vec<Vec<String>>,
}

impl PathTree {
    /// Collect the (lower-cased) label paths of every row.
    pub fn from_rows(rows: &[Row]) -> Self {
        Self::from_paths(rows.iter().map(|r| r.label_path.as_str()))
    }

    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let paths = paths
            .into_iter()
            .map(|p| split_path(p.as_ref()))
            .filter(|p| !p.is_empty())
            .collect();
        Self { paths }
    }
}

impl HierarchyOracle for PathTree {
    fn generate_hierarchy(&self) -> Result<TreeHierarchy> {
        let depth = self.paths.iter().map(Vec::len).max().unwrap_or(0);

        let mut levels: Vec<BTreeSet<&str>>                 = vec![BTreeSet::new(); depth];
        let mut placement: HashMap<&str, (usize, Option<&str>)> = HashMap::new();
        let mut children: HashMap<Option<&str>, BTreeSet<&str>> = HashMap::new();

        // ── Step 1: place every node under exactly one parent ─────────────────
        for path in &self.paths {
            for (level, node) in path.iter().enumerate() {
                let node   = node.as_str();
                let parent = level.checked_sub(1).map(|p| path[p].as_str());

                match placement.get(node) {
                    Some(&(seen_level, seen_parent)) if (seen_level, seen_parent) != (level, parent) => {
                        return Err(PreprocessError::AmbiguousNode {
                            node:   node.to_string(),
                            first:  seen_parent.unwrap_or(ROOT).to_string(),
                            second: parent.unwrap_or(ROOT).to_string(),
                        }
                        .into());
                    }
                    Some(_) => {}
                    None => {
                        placement.insert(node, (level, parent));
                    }
                }

                levels[level].insert(node);
                children.entry(parent).or_default().insert(node);
            }
        }

        // ── Step 2: per-level indices ─────────────────────────────────────────
        let level_on_nodes_indexed: Vec<HashMap<String, usize>> = levels
            .iter()
            .map(|members| {
                members
                    .iter()
                    .enumerate()
                    .map(|(idx, name)| (name.to_string(), idx))
                    .collect()
            })
            .collect();

        // ── Step 3: sections, root first then level by level ──────────────────
        let mut idx_on_section: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        let mut section_on_idx: HashMap<String, usize>       = HashMap::new();

        let parents = std::iter::once(None)
            .chain(levels.iter().flat_map(|members| members.iter().map(|&n| Some(n))));

        for parent in parents {
            let Some(kids) = children.get(&parent) else { continue };
            let section = idx_on_section.len();
            for &kid in kids {
                section_on_idx.insert(kid.to_string(), section);
            }
            idx_on_section.insert(section, kids.iter().map(|k| k.to_string()).collect());
        }

        tracing::debug!(
            "Hierarchy: {} level(s), {} section(s), {} node(s)",
            depth,
            idx_on_section.len(),
            section_on_idx.len()
        );

        Ok(TreeHierarchy {
            level_on_nodes_indexed,
            idx_on_section,
            section_on_idx,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_path() {
        let tree = PathTree::from_paths(["Fashion > Pria > Atasan"])
            .generate_hierarchy()
            .unwrap();

        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.node_index(0, "fashion"), Some(0));
        assert_eq!(tree.node_index(1, "pria"), Some(0));
        assert_eq!(tree.node_index(2, "atasan"), Some(0));
        assert_eq!(tree.num_sections(), 3);
        assert_eq!(tree.locate("atasan", "").unwrap(), (2, 0));
    }

    #[test]
    fn test_sections_are_sorted_and_level_ordered() {
        let tree = PathTree::from_paths([
            "Fashion > Wanita > Dress",
            "Elektronik > Dapur > Blender",
            "Fashion > Pria > Atasan",
            "Fashion > Pria > Celana",
        ])
        .generate_hierarchy()
        .unwrap();

        assert_eq!(tree.idx_on_section[&0], vec!["elektronik", "fashion"]);
        // level 1 parents in sorted order: elektronik, fashion
        assert_eq!(tree.idx_on_section[&1], vec!["dapur"]);
        assert_eq!(tree.idx_on_section[&2], vec!["pria", "wanita"]);
        // level 2 parents: dapur, pria, wanita
        assert_eq!(tree.idx_on_section[&3], vec!["blender"]);
        assert_eq!(tree.idx_on_section[&4], vec!["atasan", "celana"]);
        assert_eq!(tree.idx_on_section[&5], vec!["dress"]);
        assert_eq!(tree.section_of("celana"), Some(4));
    }

    #[test]
    fn test_numbering_ignores_row_order() {
        let a = PathTree::from_paths(["A > B", "C > D"]).generate_hierarchy().unwrap();
        let b = PathTree::from_paths(["C > D", "A > B"]).generate_hierarchy().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_node_under_two_parents_is_rejected() {
        let err = PathTree::from_paths(["Fashion > Aksesoris", "Elektronik > Aksesoris"])
            .generate_hierarchy()
            .unwrap_err();
        let err = err.downcast_ref::<PreprocessError>().unwrap();
        assert!(matches!(err, PreprocessError::AmbiguousNode { .. }));
    }

    #[test]
    fn test_empty_tree() {
        let tree = PathTree::default().generate_hierarchy().unwrap();
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.num_sections(), 0);
    }
}
