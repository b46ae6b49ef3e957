// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `preprocess` — builds (or loads) the splits of one strategy
//                     and materialises its data loaders
//   2. `hierarchy`  — prints the category tree of a dataset
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use std::path::Path;

use anyhow::Result;
use burn::backend::NdArray;
use clap::Parser;
use commands::{Commands, HierarchyArgs, PreprocessArgs};

use crate::application::preprocess_use_case::{PreprocessUseCase, StageLoaders};
use crate::data::batcher::count_batches;
use crate::domain::strategy::{Method, Stage};
use crate::infra::report::SplitReport;

type CliBackend = NdArray;

#[derive(Parser, Debug)]
#[command(
    name = "hierarchy-prep",
    version = "0.1.0",
    about = "Turn a hierarchical product-category CSV into tokenized train/valid/test loaders."
)]
pub struct Cli {
    /// The subcommand to run (preprocess or hierarchy)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Preprocess(args) => run_preprocess(args),
            Commands::Hierarchy(args)  => run_hierarchy(args),
        }
    }
}

/// Handles the `preprocess` subcommand.
fn run_preprocess(args: PreprocessArgs) -> Result<()> {
    let method: Method = args.method.into();
    let stage:  Stage  = args.stage.into();

    tracing::info!("Preprocessing '{}' with the {} method ({} stage)", args.dataset, method, stage);

    let use_case = PreprocessUseCase::from_config((&args).into())?;
    if args.refresh {
        use_case.refresh(method, args.level)?;
    }

    let device = Default::default();
    let loaders = match method {
        Method::Flat    => use_case.flat_dataloader::<CliBackend>(stage, &device)?,
        Method::Level   => use_case.level_dataloader::<CliBackend>(stage, args.level, &device)?,
        Method::Section => use_case.section_dataloader::<CliBackend>(stage, args.section, &device)?,
    };

    match &loaders {
        StageLoaders::Fit { train, valid } => {
            let (train, valid) = (count_batches(train), count_batches(valid));
            tracing::info!("Loaders ready: {} train batch(es), {} valid batch(es)", train, valid);
            println!("train batches: {train}\nvalid batches: {valid}");
        }
        StageLoaders::Test(test) => {
            let test = count_batches(test);
            tracing::info!("Loader ready: {} test batch(es)", test);
            println!("test batches: {test}");
        }
    }

    let counts = use_case.split_counts(method, args.level)?;
    let report = SplitReport::new(&args.cache_dir)?;
    report.log(&counts)?;
    println!("Split summary written to {}", report.csv_path().display());
    Ok(())
}

/// Handles the `hierarchy` subcommand.
fn run_hierarchy(args: HierarchyArgs) -> Result<()> {
    use crate::application::hierarchy_use_case::HierarchyUseCase;

    let use_case = HierarchyUseCase::from_dataset(&args.dataset)?;
    println!("{}", use_case.summary());

    if let Some(output) = &args.output {
        use_case.export(Path::new(output))?;
    }
    Ok(())
}
