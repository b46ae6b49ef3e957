// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `preprocess` and `hierarchy`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, enums, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};

use crate::application::preprocess_use_case::PreprocessConfig;
use crate::domain::strategy::{Method, Stage};

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split, encode and batch a category dataset
    Preprocess(PreprocessArgs),

    /// Build the category tree of a dataset and print it
    Hierarchy(HierarchyArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodArg {
    /// One class per leaf category
    Flat,
    /// One class per category at --level
    Level,
    /// One classifier per parent category
    Section,
}

impl From<MethodArg> for Method {
    fn from(m: MethodArg) -> Self {
        match m {
            MethodArg::Flat    => Method::Flat,
            MethodArg::Level   => Method::Level,
            MethodArg::Section => Method::Section,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageArg {
    /// Train and validation loaders
    Fit,
    /// Test loader
    Test,
}

impl From<StageArg> for Stage {
    fn from(s: StageArg) -> Self {
        match s {
            StageArg::Fit  => Stage::Fit,
            StageArg::Test => Stage::Test,
        }
    }
}

/// All arguments for the `preprocess` command.
#[derive(Args, Debug)]
pub struct PreprocessArgs {
    /// CSV file with a text column and a `A > B > C` category column
    #[arg(long, default_value = "datasets/small_product_tokopedia.csv")]
    pub dataset: String,

    /// Directory for cached splits, tokenizer and reports
    #[arg(long, default_value = "datasets")]
    pub cache_dir: String,

    /// Labeling strategy
    #[arg(long, value_enum, default_value_t = MethodArg::Flat)]
    pub method: MethodArg,

    /// Depth used by `--method level` (0 = root categories)
    #[arg(long, default_value_t = 0)]
    pub level: usize,

    /// Which loaders to build
    #[arg(long, value_enum, default_value_t = StageArg::Fit)]
    pub stage: StageArg,

    /// Section whose classifier is fed by `--method section --stage fit`
    #[arg(long, default_value_t = 0)]
    pub section: usize,

    /// Samples per batch
    #[arg(long, default_value_t = 32)]
    pub batch_size: usize,

    /// Seed for every shuffle and split
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Vocabulary size of the word-level tokenizer built when
    /// no --tokenizer is given
    #[arg(long, default_value_t = 30522)]
    pub vocab_size: usize,

    /// Pretrained HuggingFace tokenizer.json
    #[arg(long)]
    pub tokenizer: Option<String>,

    /// Threads for normalisation and tokenisation (defaults to available parallelism)
    #[arg(long)]
    pub num_workers: Option<usize>,

    /// Discard cached splits of this method before running
    #[arg(long)]
    pub refresh: bool,
}

/// Convert CLI PreprocessArgs into the application-layer PreprocessConfig.
/// The application layer never sees clap types.
impl From<&PreprocessArgs> for PreprocessConfig {
    fn from(a: &PreprocessArgs) -> Self {
        PreprocessConfig {
            dataset_path:   a.dataset.clone(),
            cache_dir:      a.cache_dir.clone(),
            batch_size:     a.batch_size,
            seed:           a.seed,
            vocab_size:     a.vocab_size,
            tokenizer_path: a.tokenizer.clone(),
            num_workers:    a.num_workers.unwrap_or_else(PreprocessConfig::default_workers),
        }
    }
}

/// All arguments for the `hierarchy` command
#[derive(Args, Debug)]
pub struct HierarchyArgs {
    /// CSV file with a text column and a `A > B > C` category column
    #[arg(long, default_value = "datasets/small_product_tokopedia.csv")]
    pub dataset: String,

    /// Also write the tables as JSON to this file
    #[arg(long)]
    pub output: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_preprocess_defaults() {
        let cli = Cli::try_parse_from(["hierarchy-prep", "preprocess"]).unwrap();
        let Commands::Preprocess(args) = cli.command else { panic!("expected preprocess") };

        assert_eq!(args.method, MethodArg::Flat);
        assert_eq!(args.stage, StageArg::Fit);

        let config = PreprocessConfig::from(&args);
        assert_eq!(config.batch_size, 32);
        assert_eq!(config.seed, 42);
        assert_eq!(config.vocab_size, 30522);
        assert!(config.num_workers >= 1);
    }

    #[test]
    fn test_section_arguments() {
        let cli = Cli::try_parse_from([
            "hierarchy-prep", "preprocess",
            "--method", "section", "--stage", "test", "--section", "3", "--num-workers", "2",
        ])
        .unwrap();
        let Commands::Preprocess(args) = cli.command else { panic!("expected preprocess") };

        assert_eq!(Method::from(args.method), Method::Section);
        assert_eq!(Stage::from(args.stage), Stage::Test);
        assert_eq!(args.section, 3);
        assert_eq!(PreprocessConfig::from(&args).num_workers, 2);
    }

    #[test]
    fn test_unknown_method_is_rejected() {
        assert!(Cli::try_parse_from(["hierarchy-prep", "preprocess", "--method", "tree"]).is_err());
    }
}
