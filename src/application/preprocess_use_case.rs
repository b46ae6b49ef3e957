// ============================================================
// Layer 2 — PreprocessUseCase
// ============================================================
// Orchestrates the preprocessing pipeline:
//
//   Step 1: Load the CSV snapshot          (Layer 4 - data)
//   Step 2: Build the hierarchy tables     (Layer 4 - data)
//   Step 3: Size sequences (max_length)
//   — on a cache miss only —
//   Step 4: Normalise every row            (Layer 4 - data, rayon)
//   Step 5: Load / build tokenizer         (Layer 6 - infra)
//   Step 6: Tokenise every row             (rayon)
//   (steps 4 and 6 run on a pool of `num_workers` threads)
//   Step 7: Encode labels per strategy     (Layer 4 - data)
//   Step 8: Split and cache                (Layer 4 + 6)
//   — always —
//   Step 9: Materialise Burn data loaders  (Layer 4 - data)
//
// The three public entry points mirror the strategies:
//   flat_dataloader(stage)
//   level_dataloader(stage, level)
//   section_dataloader(stage, section)
//
// Reference: Rust Book §13 (Iterators and Closures)
//            Burn Book §4 (DataLoader)

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use burn::prelude::Backend;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::data::{
    batcher::{BatchLoader, Materializer},
    dataset::EncodedSample,
    encoder::LabelEncoder,
    loader::CsvRowSource,
    preprocessor::TextNormalizer,
    splitter::{group_by_branch, DatasetSplitter, Portion, SplitSet},
    tree::PathTree,
};
use crate::domain::{
    error::PreprocessError,
    hierarchy::TreeHierarchy,
    row::Row,
    strategy::{Method, SectionStep, Stage, Strategy},
    traits::{HierarchyOracle, RowSource, TextTokenizer},
};
use crate::infra::{
    cache::{CacheKey, CacheStore},
    progress::row_progress_bar,
    report::SplitCount,
    tokenizer_store::{self, PaddedTokenizer, TokenizerStore},
};

/// Words added on top of the longest row when sizing sequences.
pub const EXTRA_LENGTH: usize = 5;

// ─── Preprocessing Configuration ─────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessConfig {
    pub dataset_path:   String,
    pub cache_dir:      String,
    pub batch_size:     usize,
    pub seed:           u64,
    pub vocab_size:     usize,
    /// Pretrained tokenizer.json; a word-level one is built when absent
    pub tokenizer_path: Option<String>,
    /// Threads used for normalisation and tokenisation
    pub num_workers:    usize,
}

impl PreprocessConfig {
    /// One worker per available CPU core.
    pub fn default_workers() -> usize {
        std::thread::available_parallelism().map_or(1, |n| n.get())
    }

    /// Settings that differ from `previous` and change the produced splits.
    pub fn changed_since(&self, previous: &PreprocessConfig) -> Vec<&'static str> {
        let mut changed = Vec::new();
        if self.dataset_path != previous.dataset_path {
            changed.push("dataset_path");
        }
        if self.seed != previous.seed {
            changed.push("seed");
        }
        if self.vocab_size != previous.vocab_size {
            changed.push("vocab_size");
        }
        if self.tokenizer_path != previous.tokenizer_path {
            changed.push("tokenizer_path");
        }
        changed
    }
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            dataset_path:   "datasets/small_product_tokopedia.csv".to_string(),
            cache_dir:      "datasets".to_string(),
            batch_size:     32,
            seed:           42,
            vocab_size:     30522,
            tokenizer_path: None,
            num_workers:    Self::default_workers(),
        }
    }
}

/// The loaders of one stage.
pub enum StageLoaders<B: Backend> {
    Fit {
        train: BatchLoader<B>,
        valid: BatchLoader<B>,
    },
    Test(BatchLoader<B>),
}

/// A row after normalisation and tokenisation, label not yet encoded.
#[derive(Debug, Clone)]
struct TokenizedRow {
    input_ids:  Vec<u32>,
    label_path: String,
}

/// Section splits: every portion is keyed by section index.
pub type SectionSplits = SplitSet<BTreeMap<usize, Vec<EncodedSample>>>;

// ─── PreprocessUseCase ────────────────────────────────────────────────────────
pub struct PreprocessUseCase {
    config:       PreprocessConfig,
    rows:         Vec<Row>,
    hierarchy:    TreeHierarchy,
    normalizer:   TextNormalizer,
    cache:        CacheStore,
    materializer: Materializer,
    max_length:   usize,
}

impl PreprocessUseCase {
    /// Load the CSV named in `config` and derive the hierarchy from its label paths.
    pub fn from_config(config: PreprocessConfig) -> Result<Self> {
        let rows = CsvRowSource::new(&config.dataset_path).load_all()?;
        let tree = PathTree::from_rows(&rows);
        Self::new(config, rows, &tree)
    }

    /// Build the use case over an immutable snapshot of `rows`.
    pub fn new(config: PreprocessConfig, rows: Vec<Row>, oracle: &dyn HierarchyOracle) -> Result<Self> {
        if rows.is_empty() {
            return Err(PreprocessError::EmptyDataset(config.dataset_path.clone()).into());
        }

        let hierarchy  = oracle.generate_hierarchy()?;
        let max_length = max_length(&rows);
        tracing::info!(
            "{} rows, {} level(s), {} section(s), max_length={}",
            rows.len(),
            hierarchy.depth(),
            hierarchy.num_sections(),
            max_length
        );

        let cache        = CacheStore::new(&config.cache_dir)?;
        let materializer = Materializer::new(config.batch_size, config.seed);

        // Cached splits are reused verbatim, even when built with other settings
        if let Ok(previous) = cache.load_config::<PreprocessConfig>() {
            let changed = config.changed_since(&previous);
            if !changed.is_empty() {
                tracing::warn!(
                    "Settings changed since the cached splits were built ({}); use --refresh to rebuild them",
                    changed.join(", ")
                );
            }
        }

        Ok(Self {
            config,
            rows,
            hierarchy,
            normalizer: TextNormalizer::indonesian(),
            cache,
            materializer,
            max_length,
        })
    }

    // ── Public loaders ───────────────────────────────────────────────────────

    pub fn flat_dataloader<B: Backend>(&self, stage: Stage, device: &B::Device) -> Result<StageLoaders<B>> {
        let splits = self.ratio_splits(Strategy::Flat)?;
        Ok(self.stage_loaders(splits, stage, device))
    }

    pub fn level_dataloader<B: Backend>(
        &self,
        stage:  Stage,
        level:  usize,
        device: &B::Device,
    ) -> Result<StageLoaders<B>> {
        let splits = self.ratio_splits(Strategy::Level(level))?;
        Ok(self.stage_loaders(splits, stage, device))
    }

    /// Fit: the train/valid loaders of one section's classifier.
    /// Test: one loader over the whole test pool, labelled with leaf
    /// sections; `section` is not used.
    pub fn section_dataloader<B: Backend>(
        &self,
        stage:   Stage,
        section: usize,
        device:  &B::Device,
    ) -> Result<StageLoaders<B>> {
        let mut splits = self.section_splits()?;

        match stage {
            Stage::Fit => {
                let train = splits.train.remove(&section);
                let valid = splits.valid.remove(&section);
                if train.is_none() && valid.is_none() {
                    return Err(PreprocessError::UnknownSection(section).into());
                }
                Ok(StageLoaders::Fit {
                    train: self.materializer.materialize(train.unwrap_or_default(), true, device),
                    valid: self.materializer.materialize(valid.unwrap_or_default(), false, device),
                })
            }
            Stage::Test => {
                let test: Vec<EncodedSample> = splits.test.into_values().flatten().collect();
                Ok(StageLoaders::Test(self.materializer.materialize(test, false, device)))
            }
        }
    }

    fn stage_loaders<B: Backend>(
        &self,
        splits: SplitSet<Vec<EncodedSample>>,
        stage:  Stage,
        device: &B::Device,
    ) -> StageLoaders<B> {
        match stage {
            Stage::Fit => StageLoaders::Fit {
                train: self.materializer.materialize(splits.train, true, device),
                valid: self.materializer.materialize(splits.valid, false, device),
            },
            Stage::Test => StageLoaders::Test(self.materializer.materialize(splits.test, false, device)),
        }
    }

    // ── Splits (cached) ──────────────────────────────────────────────────────

    /// Flat or level splits, from cache or freshly computed.
    pub fn ratio_splits(&self, strategy: Strategy) -> Result<SplitSet<Vec<EncodedSample>>> {
        let key = match strategy {
            Strategy::Flat         => CacheKey::flat(),
            Strategy::Level(level) => CacheKey::level(level),
            Strategy::Section(_)   => anyhow::bail!("section splits are keyed by section, use section_splits"),
        };

        self.cache.get_or_compute(&key, || {
            let rows     = self.tokenize_rows()?;
            let encoder  = LabelEncoder::new(&self.hierarchy);
            let samples  = rows
                .into_iter()
                .map(|row| {
                    encoder
                        .class_of(&row.label_path, strategy)
                        .map(|target| EncodedSample::new(row.input_ids, target))
                })
                .collect::<Result<Vec<_>, _>>()?;

            let splits = DatasetSplitter::new(self.config.seed).split_ratio(samples);
            tracing::info!(
                "Split: {} train, {} validation, {} test",
                splits.train.len(),
                splits.valid.len(),
                splits.test.len()
            );
            self.cache.save_config(&self.config)?;
            Ok(splits)
        })
    }

    /// Section splits, from cache or freshly computed.
    ///
    /// The snapshot is divided once into fit pool and test pool, so the
    /// two passes never share a row.
    pub fn section_splits(&self) -> Result<SectionSplits> {
        self.cache.get_or_compute(&CacheKey::section(), || {
            let rows         = self.tokenize_rows()?;
            let encoder      = LabelEncoder::new(&self.hierarchy);
            let mut splitter = DatasetSplitter::new(self.config.seed);

            let (fit_pool, test_pool) = splitter.holdout(rows);

            // ── Fit pass: per-branch 90/10 ───────────────────────────────────
            let fit_rows = fit_pool
                .into_iter()
                .map(|row| {
                    encoder
                        .section_steps(&row.label_path)
                        .map(|steps| (row.input_ids, steps))
                })
                .collect::<Result<Vec<_>, _>>()?;

            let (train_groups, valid_groups) =
                splitter.split_by_branch(fit_rows, |(_, steps)| deepest(steps));

            // ── Test pass: grouped by leaf section, no split ─────────────────
            let test_rows = test_pool
                .into_iter()
                .map(|row| {
                    encoder
                        .class_of(&row.label_path, Strategy::Section(Stage::Test))
                        .map(|section| EncodedSample::new(row.input_ids, section))
                })
                .collect::<Result<Vec<_>, _>>()?;

            let splits = SplitSet {
                train: explode_by_section(train_groups.into_values().flatten()),
                valid: explode_by_section(valid_groups.into_values().flatten()),
                test:  group_by_branch(test_rows, |s| s.target),
            };
            tracing::info!(
                "Section split: {} train section(s), {} valid section(s), {} test branch(es)",
                splits.train.len(),
                splits.valid.len(),
                splits.test.len()
            );
            self.cache.save_config(&self.config)?;
            Ok(splits)
        })
    }

    /// Drop the cached splits of `method` so the next request rebuilds them.
    pub fn refresh(&self, method: Method, level: usize) -> Result<()> {
        let key = match method {
            Method::Flat    => CacheKey::flat(),
            Method::Level   => CacheKey::level(level),
            Method::Section => CacheKey::section(),
        };
        tracing::info!("Discarding cached '{}' splits", key.prefix());
        self.cache.invalidate(&key)
    }

    /// Sample counts per portion (and per section for the section method).
    pub fn split_counts(&self, method: Method, level: usize) -> Result<Vec<SplitCount>> {
        let counts = match method {
            Method::Flat | Method::Level => {
                let (strategy, level_name) = match method {
                    Method::Flat => (Strategy::Flat, "all".to_string()),
                    _            => (Strategy::Level(level), level.to_string()),
                };
                let splits = self.ratio_splits(strategy)?;
                Portion::ALL
                    .iter()
                    .map(|&p| {
                        SplitCount::new(method.to_string(), level_name.clone(), p.name(), None, splits.get(p).len())
                    })
                    .collect()
            }
            Method::Section => {
                let splits = self.section_splits()?;
                Portion::ALL
                    .iter()
                    .flat_map(|&p| {
                        splits.get(p).iter().map(move |(section, samples)| {
                            SplitCount::new("section", "all", p.name(), Some(*section), samples.len())
                        })
                    })
                    .collect()
            }
        };
        Ok(counts)
    }

    // ── Row preparation ──────────────────────────────────────────────────────

    /// Normalise and tokenise the whole snapshot, in input order.
    fn tokenize_rows(&self) -> Result<Vec<TokenizedRow>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.num_workers.max(1))
            .build()?;

        let pb = row_progress_bar(self.rows.len() as u64, "Normalising");
        let texts: Vec<String> = pool.install(|| {
            self.rows
                .par_iter()
                .map(|row| {
                    let text = self.normalizer.normalize(&row.text);
                    pb.inc(1);
                    text
                })
                .collect()
        });
        pb.finish_and_clear();

        let tokenizer = self.tokenizer(&texts)?;

        let pb = row_progress_bar(self.rows.len() as u64, "Tokenising");
        let ids = pool.install(|| {
            texts
                .par_iter()
                .map(|text| {
                    let ids = tokenizer.encode_padded(text, self.max_length);
                    pb.inc(1);
                    ids
                })
                .collect::<Result<Vec<_>>>()
        })?;
        pb.finish_and_clear();

        Ok(ids
            .into_iter()
            .zip(&self.rows)
            .map(|(input_ids, row)| TokenizedRow {
                input_ids,
                label_path: row.label_path.clone(),
            })
            .collect())
    }

    fn tokenizer(&self, texts: &[String]) -> Result<PaddedTokenizer> {
        let inner = match &self.config.tokenizer_path {
            Some(path) => tokenizer_store::load_file(Path::new(path))?,
            None       => TokenizerStore::new(&self.config.cache_dir).load_or_build(texts, self.config.vocab_size)?,
        };
        Ok(PaddedTokenizer::new(inner))
    }
}

/// Longest raw text in words, plus `EXTRA_LENGTH`.
fn max_length(rows: &[Row]) -> usize {
    rows.iter().map(Row::word_count).max().unwrap_or(0) + EXTRA_LENGTH
}

fn deepest(steps: &[SectionStep]) -> usize {
    steps.last().map_or(0, |s| s.section)
}

/// One sample per (row, section on its path), targeting the row's
/// position within that section.
fn explode_by_section<I>(rows: I) -> BTreeMap<usize, Vec<EncodedSample>>
where
    I: IntoIterator<Item = (Vec<u32>, Vec<SectionStep>)>,
{
    let mut sections: BTreeMap<usize, Vec<EncodedSample>> = BTreeMap::new();
    for (input_ids, steps) in rows {
        for step in steps {
            sections
                .entry(step.section)
                .or_default()
                .push(EncodedSample::new(input_ids.clone(), step.local));
        }
    }
    sections
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;
    use burn::data::dataloader::DataLoader;
    use std::collections::HashMap;
    use tempfile::{tempdir, TempDir};

    type TestBackend = NdArray;

    const BRANCHES: &[(&str, &str)] = &[
        ("Fashion > Pria > Atasan",        "kaos polos hitam pria"),
        ("Fashion > Pria > Celana",        "celana jeans panjang"),
        ("Fashion > Wanita > Dress",       "dress pesta wanita"),
        ("Elektronik > Dapur > Blender",   "blender buah kaca"),
        ("Elektronik > Dapur > Rice Cooker", "penanak nasi digital"),
    ];

    /// 20 rows per leaf category, 100 rows in total.
    fn rows() -> Vec<Row> {
        BRANCHES
            .iter()
            .flat_map(|(path, text)| {
                (0..20).map(move |i| Row::new(format!("{text} varian {i}"), *path))
            })
            .collect()
    }

    fn use_case(rows: Vec<Row>) -> (TempDir, PreprocessUseCase) {
        use_case_with_workers(rows, 1)
    }

    fn use_case_with_workers(rows: Vec<Row>, num_workers: usize) -> (TempDir, PreprocessUseCase) {
        let dir    = tempdir().unwrap();
        let config = PreprocessConfig {
            cache_dir:   dir.path().display().to_string(),
            batch_size:  8,
            num_workers,
            ..PreprocessConfig::default()
        };
        let tree = PathTree::from_rows(&rows);
        let uc   = PreprocessUseCase::new(config, rows, &tree).unwrap();
        (dir, uc)
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        let dir    = tempdir().unwrap();
        let config = PreprocessConfig { cache_dir: dir.path().display().to_string(), ..Default::default() };
        let err    = PreprocessUseCase::new(config, Vec::new(), &PathTree::default()).err().unwrap();
        assert!(matches!(err.downcast_ref::<PreprocessError>(), Some(PreprocessError::EmptyDataset(_))));
    }

    #[test]
    fn test_max_length_is_longest_row_plus_five() {
        let (_dir, uc) = use_case(rows());
        // "kaos polos hitam pria varian N" → 6 words
        assert_eq!(uc.max_length, 11);
    }

    #[test]
    fn test_flat_splits_cover_every_row_once() {
        let (_dir, uc) = use_case(rows());
        let splits     = uc.ratio_splits(Strategy::Flat).unwrap();

        assert_eq!(splits.test.len(), 20);
        assert_eq!(splits.train.len(), 72);
        assert_eq!(splits.valid.len(), 8);

        let all = splits.train.iter().chain(&splits.valid).chain(&splits.test);
        for sample in all {
            assert_eq!(sample.input_ids.len(), uc.max_length);
            assert!(sample.target < uc.hierarchy.level_size(2));
        }
    }

    #[test]
    fn test_level_targets_index_requested_depth() {
        let (_dir, uc) = use_case(rows());
        let splits     = uc.ratio_splits(Strategy::Level(0)).unwrap();
        let mut seen: Vec<usize> = splits.train.iter().map(|s| s.target).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen, vec![0, 1]); // elektronik, fashion
    }

    #[test]
    fn test_splits_are_cached_and_identical() {
        let (_dir, uc) = use_case(rows());
        let first      = uc.ratio_splits(Strategy::Flat).unwrap();
        assert!(uc.cache.contains(&CacheKey::flat()));
        let second     = uc.ratio_splits(Strategy::Flat).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_section_splits_are_per_branch() {
        let (_dir, uc) = use_case(rows());
        let splits     = uc.section_splits().unwrap();
        let tree       = &uc.hierarchy;

        // 100 rows → 80 fit + 20 test
        let test_total: usize = splits.test.values().map(Vec::len).sum();
        assert_eq!(test_total, 20);

        // every fit row appears once in its root section (section 0)
        let root_total = splits.train[&0].len() + splits.valid.get(&0).map_or(0, Vec::len);
        assert_eq!(root_total, 80);

        // each leaf section's classifier only sees its own labels
        let pria = tree.section_of("atasan").unwrap();
        for sample in &splits.train[&pria] {
            assert!(sample.target < tree.idx_on_section[&pria].len());
        }

        // test targets are leaf sections
        for (section, samples) in &splits.test {
            assert!(samples.iter().all(|s| s.target == *section));
        }
    }

    #[test]
    fn test_section_train_valid_ratio_per_leaf_branch() {
        let (_dir, uc) = use_case(rows());
        let splits     = uc.section_splits().unwrap();
        let tree       = &uc.hierarchy;

        // leaf sections hold fit rows of their branch only
        let mut per_branch: HashMap<usize, (usize, usize)> = HashMap::new();
        for leaf in ["atasan", "dress", "blender"] {
            let section = tree.section_of(leaf).unwrap();
            let train   = splits.train.get(&section).map_or(0, Vec::len);
            let valid   = splits.valid.get(&section).map_or(0, Vec::len);
            per_branch.insert(section, (train, valid));
        }
        for (train, valid) in per_branch.values() {
            let total = train + valid;
            assert!(total > 0);
            assert_eq!(*train, ((total as f64) * 0.9).round() as usize);
        }
    }

    #[test]
    fn test_flat_fit_loaders_batch_every_sample() {
        let (_dir, uc) = use_case(rows());
        let device     = Default::default();

        let StageLoaders::Fit { train, valid } = uc.flat_dataloader::<TestBackend>(Stage::Fit, &device).unwrap() else {
            panic!("expected fit loaders");
        };

        let train_total: usize = train.iter().map(|b| b.targets.dims()[0]).sum();
        let valid_total: usize = valid.iter().map(|b| b.targets.dims()[0]).sum();
        assert_eq!(train_total, 72);
        assert_eq!(valid_total, 8);

        for batch in valid.iter() {
            assert_eq!(batch.input_ids.dims()[1], uc.max_length);
        }
    }

    #[test]
    fn test_section_test_loader_is_shared() {
        let (_dir, uc) = use_case(rows());
        let device     = Default::default();

        let StageLoaders::Test(test) = uc.section_dataloader::<TestBackend>(Stage::Test, 999, &device).unwrap() else {
            panic!("expected test loader");
        };
        let total: usize = test.iter().map(|b| b.targets.dims()[0]).sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn test_unknown_section_is_an_error() {
        let (_dir, uc) = use_case(rows());
        let device     = Default::default();
        let err = uc.section_dataloader::<TestBackend>(Stage::Fit, 999, &device).err().unwrap();
        assert!(matches!(err.downcast_ref::<PreprocessError>(), Some(PreprocessError::UnknownSection(999))));
    }

    #[test]
    fn test_unresolved_node_aborts_run() {
        let mut data = rows();
        data.push(Row::new("sepatu lari", "Olahraga > Sepatu"));
        let tree    = PathTree::from_paths(BRANCHES.iter().map(|(p, _)| *p));
        let dir     = tempdir().unwrap();
        let config  = PreprocessConfig { cache_dir: dir.path().display().to_string(), num_workers: 1, ..Default::default() };
        let uc      = PreprocessUseCase::new(config, data, &tree).unwrap();

        let err = uc.ratio_splits(Strategy::Flat).unwrap_err();
        assert!(matches!(err.downcast_ref::<PreprocessError>(), Some(PreprocessError::UnresolvedNode { .. })));
        assert!(!uc.cache.contains(&CacheKey::flat()));
    }

    #[test]
    fn test_split_counts_match_splits() {
        let (_dir, uc) = use_case(rows());
        let counts     = uc.split_counts(Method::Flat, 0).unwrap();
        let total: usize = counts.iter().map(|c| c.samples).sum();
        assert_eq!(total, 100);
        assert!(counts.iter().all(|c| c.level == "all" && c.section.is_none()));
    }

    fn batch_contents(loader: &BatchLoader<TestBackend>) -> Vec<Vec<i64>> {
        loader
            .iter()
            .map(|b| b.input_ids.into_data().to_vec::<i64>().unwrap())
            .collect()
    }

    #[test]
    fn test_worker_count_does_not_change_batches() {
        let device = Default::default();
        let (_one, single) = use_case_with_workers(rows(), 1);
        let (_many, multi) = use_case_with_workers(rows(), 4);

        let StageLoaders::Test(expected) = single.flat_dataloader::<TestBackend>(Stage::Test, &device).unwrap() else {
            panic!("expected test loader");
        };
        let StageLoaders::Test(actual) = multi.flat_dataloader::<TestBackend>(Stage::Test, &device).unwrap() else {
            panic!("expected test loader");
        };

        let sizes: Vec<usize> = actual.iter().map(|b| b.targets.dims()[0]).collect();
        assert_eq!(sizes, vec![8, 8, 4]);
        assert_eq!(batch_contents(&actual), batch_contents(&expected));

        let StageLoaders::Fit { train, .. } = multi.flat_dataloader::<TestBackend>(Stage::Fit, &device).unwrap() else {
            panic!("expected fit loaders");
        };
        let sizes: Vec<usize> = train.iter().map(|b| b.targets.dims()[0]).collect();
        assert_eq!(sizes, vec![8; 9]);
    }

    #[test]
    fn test_changed_settings_are_detected() {
        let previous = PreprocessConfig::default();
        let current  = PreprocessConfig { seed: 7, num_workers: 3, ..PreprocessConfig::default() };

        assert_eq!(current.changed_since(&previous), vec!["seed"]);
        assert!(previous.changed_since(&previous).is_empty());
    }

    #[test]
    fn test_config_is_saved_next_to_splits() {
        let (_dir, uc) = use_case(rows());
        uc.ratio_splits(Strategy::Flat).unwrap();

        let saved: PreprocessConfig = uc.cache.load_config().unwrap();
        assert_eq!(saved.seed, 42);
        assert_eq!(saved.batch_size, 8);
    }
}
