// ============================================================
// Layer 4 — Label Encoder
// ============================================================
// Converts a category path into the target of a strategy.
//
//   Flat            leaf            → index in the deepest level
//   Level(l)        node at depth l → index in level l
//   Section(Fit)    every node      → (section, position in section)
//   Section(Test)   leaf            → section index
//
// Example with the tree built from "Fashion > Pria > Atasan":
//   Flat          → Class(0)
//   Level(1)      → Class(index of "pria" in level 1)
//   Section(Fit)  → Sections([(0, 0), (1, 0), (2, 0)])
//   Section(Test) → Class(2)

use crate::domain::error::PreprocessError;
use crate::domain::hierarchy::TreeHierarchy;
use crate::domain::row::split_path;
use crate::domain::strategy::{SectionStep, Stage, Strategy, Target};

/// Encodes label paths against a shared, read-only hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct LabelEncoder<'a> {
    hierarchy: &'a TreeHierarchy,
}

impl<'a> LabelEncoder<'a> {
    pub fn new(hierarchy: &'a TreeHierarchy) -> Self {
        Self { hierarchy }
    }

    pub fn encode(&self, label_path: &str, strategy: Strategy) -> Result<Target, PreprocessError> {
        let nodes = split_path(label_path);

        match strategy {
            Strategy::Flat => {
                let leaf  = self.leaf(&nodes, label_path)?;
                let level = self.hierarchy.depth().saturating_sub(1);
                self.class_at(level, leaf, label_path)
            }
            Strategy::Level(level) => {
                let node = nodes.get(level).ok_or_else(|| PreprocessError::DepthExceeded {
                    level,
                    depth: nodes.len(),
                    path:  label_path.to_string(),
                })?;
                if level >= self.hierarchy.depth() {
                    return Err(PreprocessError::DepthExceeded {
                        level,
                        depth: self.hierarchy.depth(),
                        path:  label_path.to_string(),
                    });
                }
                self.class_at(level, node, label_path)
            }
            Strategy::Section(Stage::Fit) => self.section_steps(label_path).map(Target::Sections),
            Strategy::Section(Stage::Test) => {
                let leaf = self.leaf(&nodes, label_path)?;
                self.hierarchy
                    .section_of(leaf)
                    .map(Target::Class)
                    .ok_or_else(|| self.unresolved(leaf, label_path))
            }
        }
    }

    /// Section fit target: `(section, local index)` for every node, root first.
    pub fn section_steps(&self, label_path: &str) -> Result<Vec<SectionStep>, PreprocessError> {
        let nodes = split_path(label_path);
        if nodes.is_empty() {
            return Err(self.unresolved("", label_path));
        }
        nodes
            .iter()
            .map(|node| {
                self.hierarchy
                    .locate(node, label_path)
                    .map(|(section, local)| SectionStep { section, local })
            })
            .collect()
    }

    /// Single class index for `strategy`. For section fit this is the
    /// deepest section, the same value a section test target holds.
    pub fn class_of(&self, label_path: &str, strategy: Strategy) -> Result<usize, PreprocessError> {
        let target = self.encode(label_path, strategy)?;
        target
            .class()
            .or_else(|| target.deepest_section())
            .ok_or_else(|| self.unresolved("", label_path))
    }

    fn leaf<'n>(&self, nodes: &'n [String], label_path: &str) -> Result<&'n str, PreprocessError> {
        nodes
            .last()
            .map(String::as_str)
            .ok_or_else(|| self.unresolved("", label_path))
    }

    fn class_at(&self, level: usize, node: &str, label_path: &str) -> Result<Target, PreprocessError> {
        self.hierarchy
            .node_index(level, node)
            .map(Target::Class)
            .ok_or_else(|| self.unresolved(node, label_path))
    }

    fn unresolved(&self, node: &str, label_path: &str) -> PreprocessError {
        PreprocessError::UnresolvedNode {
            node: node.to_string(),
            path: label_path.to_string(),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tree::PathTree;
    use crate::domain::traits::HierarchyOracle;

    fn hierarchy() -> TreeHierarchy {
        PathTree::from_paths([
            "Fashion > Pria > Atasan",
            "Fashion > Pria > Celana",
            "Fashion > Wanita > Dress",
            "Elektronik > Dapur > Blender",
        ])
        .generate_hierarchy()
        .unwrap()
    }

    #[test]
    fn test_single_row_scenario() {
        let tree    = PathTree::from_paths(["Fashion > Pria > Atasan"]).generate_hierarchy().unwrap();
        let encoder = LabelEncoder::new(&tree);

        assert_eq!(encoder.encode("Fashion > Pria > Atasan", Strategy::Flat).unwrap(), Target::Class(0));
        assert_eq!(
            encoder.encode("Fashion > Pria > Atasan", Strategy::Level(1)).unwrap(),
            Target::Class(tree.node_index(1, "pria").unwrap())
        );
    }

    #[test]
    fn test_flat_and_level_targets_decode_to_path_nodes() {
        let tree    = hierarchy();
        let encoder = LabelEncoder::new(&tree);
        let path    = "Fashion > Wanita > Dress";

        let flat = encoder.encode(path, Strategy::Flat).unwrap().class().unwrap();
        assert_eq!(tree.node_name(2, flat), Some("dress"));

        for (level, expected) in ["fashion", "wanita", "dress"].iter().enumerate() {
            let idx = encoder.encode(path, Strategy::Level(level)).unwrap().class().unwrap();
            assert_eq!(tree.node_name(level, idx), Some(*expected));
        }
    }

    #[test]
    fn test_section_fit_walks_every_level() {
        let tree    = hierarchy();
        let encoder = LabelEncoder::new(&tree);
        let target  = encoder
            .encode("Fashion > Pria > Celana", Strategy::Section(Stage::Fit))
            .unwrap();

        let Target::Sections(steps) = &target else { panic!("expected section steps") };
        assert_eq!(steps.len(), 3);
        for (step, node) in steps.iter().zip(["fashion", "pria", "celana"]) {
            assert_eq!(tree.section_of(node), Some(step.section));
            assert_eq!(tree.idx_on_section[&step.section][step.local], node);
        }
        assert_eq!(target.deepest_section(), tree.section_of("celana"));
    }

    #[test]
    fn test_section_test_is_leaf_section() {
        let tree    = hierarchy();
        let encoder = LabelEncoder::new(&tree);
        let target  = encoder
            .encode("Elektronik > Dapur > Blender", Strategy::Section(Stage::Test))
            .unwrap();
        assert_eq!(target, Target::Class(tree.section_of("blender").unwrap()));
    }

    #[test]
    fn test_class_of_section_fit_is_leaf_section() {
        let tree    = hierarchy();
        let encoder = LabelEncoder::new(&tree);
        let path    = "Fashion > Pria > Atasan";
        assert_eq!(
            encoder.class_of(path, Strategy::Section(Stage::Fit)).unwrap(),
            encoder.class_of(path, Strategy::Section(Stage::Test)).unwrap()
        );
    }

    #[test]
    fn test_class_of_flat_and_level_is_the_class() {
        let tree    = hierarchy();
        let encoder = LabelEncoder::new(&tree);
        let path    = "Elektronik > Dapur > Blender";

        assert_eq!(encoder.class_of(path, Strategy::Flat).unwrap(), tree.node_index(2, "blender").unwrap());
        assert_eq!(encoder.class_of(path, Strategy::Level(0)).unwrap(), tree.node_index(0, "elektronik").unwrap());
        assert_eq!(encoder.class_of(path, Strategy::Level(1)).unwrap(), tree.node_index(1, "dapur").unwrap());
    }

    #[test]
    fn test_unknown_node_fails() {
        let tree    = hierarchy();
        let encoder = LabelEncoder::new(&tree);
        for strategy in [Strategy::Flat, Strategy::Level(1), Strategy::Section(Stage::Fit), Strategy::Section(Stage::Test)] {
            let err = encoder.encode("Fashion > Anak > Sepatu", strategy).unwrap_err();
            assert!(matches!(err, PreprocessError::UnresolvedNode { .. }), "{strategy:?}");
        }
    }

    #[test]
    fn test_level_beyond_path_fails() {
        let tree    = hierarchy();
        let encoder = LabelEncoder::new(&tree);
        let err     = encoder.encode("Fashion > Pria", Strategy::Level(2)).unwrap_err();
        assert!(matches!(err, PreprocessError::DepthExceeded { level: 2, depth: 2, .. }));
    }
}
