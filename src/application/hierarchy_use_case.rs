// ============================================================
// Layer 2 — Hierarchy Use Case
// ============================================================
// Builds the section tree of a dataset and describes it:
//   1. Load the CSV snapshot
//   2. Derive the hierarchy tables from the label paths
//   3. Summarise levels and sections, optionally export as JSON

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::data::{loader::CsvRowSource, tree::PathTree};
use crate::domain::{
    hierarchy::TreeHierarchy,
    traits::{HierarchyOracle, RowSource},
};

pub struct HierarchyUseCase {
    hierarchy: TreeHierarchy,
    num_rows:  usize,
}

impl HierarchyUseCase {
    pub fn from_dataset(dataset_path: &str) -> Result<Self> {
        let rows      = CsvRowSource::new(dataset_path).load_all()?;
        let hierarchy = PathTree::from_rows(&rows).generate_hierarchy()?;
        Ok(Self { hierarchy, num_rows: rows.len() })
    }

    /// Human-readable summary, one line per level and per section.
    pub fn summary(&self) -> String {
        let h = &self.hierarchy;
        let mut lines = vec![format!(
            "{} rows, {} level(s), {} section(s)",
            self.num_rows,
            h.depth(),
            h.num_sections()
        )];

        for level in 0..h.depth() {
            let nodes: Vec<&str> = (0..h.level_size(level)).filter_map(|idx| h.node_name(level, idx)).collect();
            lines.push(format!("  level {level} ({} classes): {}", nodes.len(), nodes.join(", ")));
        }
        for (section, classes) in h.section_sizes() {
            let nodes = h.idx_on_section.get(&section).map(|n| n.join(", ")).unwrap_or_default();
            lines.push(format!("  section {section} ({classes} classes): {nodes}"));
        }
        lines.join("\n")
    }

    /// Write the hierarchy tables as pretty JSON.
    pub fn export(&self, output: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.hierarchy)?;
        fs::write(output, json)
            .with_context(|| format!("Cannot write hierarchy to '{}'", output.display()))?;
        tracing::info!("Hierarchy written to '{}'", output.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn dataset(dir: &Path) -> String {
        let path = dir.join("products.csv");
        fs::write(
            &path,
            "text,label_path\n\
             Kaos Polos Hitam,Fashion > Pria > Atasan\n\
             Dress Pesta,Fashion > Wanita > Dress\n\
             Blender Kaca,Elektronik > Dapur > Blender\n",
        )
        .unwrap();
        path.display().to_string()
    }

    #[test]
    fn test_summary_lists_levels_and_sections() {
        let dir = tempdir().unwrap();
        let uc  = HierarchyUseCase::from_dataset(&dataset(dir.path())).unwrap();

        let summary = uc.summary();
        assert!(summary.starts_with("3 rows, 3 level(s), 6 section(s)"));
        assert!(summary.contains("section 0 (2 classes): elektronik, fashion"));
        assert!(summary.contains("level 2 (3 classes): atasan, blender, dress"));
    }

    #[test]
    fn test_export_round_trips() {
        let dir = tempdir().unwrap();
        let uc  = HierarchyUseCase::from_dataset(&dataset(dir.path())).unwrap();
        let out = dir.path().join("hierarchy.json");

        uc.export(&out).unwrap();
        let loaded: TreeHierarchy = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(loaded, uc.hierarchy);
    }
}
