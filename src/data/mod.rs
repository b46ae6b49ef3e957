// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from the raw CSV table to batched tensors.
//
// The pipeline flows in this order:
//
//   products.csv
//       │
//       ▼
//   CsvRowSource      → reads (text, label path) rows
//       │
//       ▼
//   TextNormalizer    → cleans, drops stop words, stems
//       │
//       ▼
//   Tokenizer         → fixed-length token ids (infra)
//       │
//       ▼
//   LabelEncoder      → flat / level / section targets,
//       │               looked up in the PathTree tables
//       ▼
//   DatasetSplitter   → train / valid / test, per branch for sections
//       │
//       ▼
//   HierDataset       → implements Burn's Dataset trait
//       │
//       ▼
//   Materializer      → HierBatcher + Burn DataLoader
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Reads the raw product table from CSV
pub mod loader;

/// Indonesian stop-word list
pub mod stopwords;

/// Indonesian affix stemmer
pub mod stemmer;

/// Cleans and normalises raw product text
pub mod preprocessor;

/// Builds the category tree lookup tables from label paths
pub mod tree;

/// Turns label paths into strategy targets
pub mod encoder;

/// Global and per-branch train/valid/test splitting
pub mod splitter;

/// Implements Burn's Dataset trait for encoded samples
pub mod dataset;

/// Implements Burn's Batcher trait and builds data loaders
pub mod batcher;
