// ============================================================
// Layer 4 — Batcher and Batch Materializer
// ============================================================
// HierBatcher implements Burn's Batcher trait: it stacks a list
// of EncodedSamples into tensors
//
//   input_ids: [batch_size, max_length]
//   targets:   [batch_size]
//
// Materializer wraps the batcher in a Burn DataLoader:
//   - fixed batch size, last batch may be short (nothing dropped)
//   - optional shuffling, reshuffled on every pass
//   - batches are assembled on the iterating thread; Burn's
//     multi-threaded loader would end every worker partition
//     with its own short batch
//
// A DataLoader is restartable: each call to .iter() starts a new
// pass over the same samples.
//
// Reference: Burn Book §4 (Batcher, DataLoader)

use std::sync::Arc;

use burn::{
    data::dataloader::{batcher::Batcher, DataLoader, DataLoaderBuilder},
    prelude::*,
};

use crate::data::dataset::{EncodedSample, HierDataset};

/// Shared handle to a restartable batch iterator.
pub type BatchLoader<B> = Arc<dyn DataLoader<HierBatch<B>>>;

// ─── HierBatch ────────────────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct HierBatch<B: Backend> {
    /// Token ids — shape: [batch_size, seq_len]
    pub input_ids: Tensor<B, 2, Int>,

    /// Class targets — shape: [batch_size]
    pub targets: Tensor<B, 1, Int>,
}

// ─── HierBatcher ──────────────────────────────────────────────────────────────
#[derive(Clone, Debug)]
pub struct HierBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> HierBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<EncodedSample, HierBatch<B>> for HierBatcher<B> {
    fn batch(&self, items: Vec<EncodedSample>) -> HierBatch<B> {
        let batch_size = items.len();
        // All sequences share the run's max_length
        let seq_len    = items.first().map_or(0, EncodedSample::seq_len);

        let input_flat: Vec<i32> = items
            .iter()
            .flat_map(|s| s.input_ids.iter().map(|&x| x as i32))
            .collect();

        let targets: Vec<i32> = items
            .iter()
            .map(|s| s.target as i32)
            .collect();

        let input_ids = Tensor::<B, 1, Int>::from_ints(
            input_flat.as_slice(), &self.device
        ).reshape([batch_size, seq_len]);

        let targets = Tensor::<B, 1, Int>::from_ints(
            targets.as_slice(), &self.device
        );

        HierBatch { input_ids, targets }
    }
}

// ─── Materializer ─────────────────────────────────────────────────────────────
/// Turns sample lists into Burn data loaders with shared settings.
#[derive(Debug, Clone)]
pub struct Materializer {
    batch_size: usize,
    seed:       u64,
}

impl Materializer {
    pub fn new(batch_size: usize, seed: u64) -> Self {
        Self {
            batch_size: batch_size.max(1),
            seed,
        }
    }

    /// Build a loader over `samples`.
    /// With `shuffle` the sample order is reshuffled on every pass.
    pub fn materialize<B: Backend>(
        &self,
        samples: Vec<EncodedSample>,
        shuffle: bool,
        device:  &B::Device,
    ) -> BatchLoader<B> {
        let batcher = HierBatcher::<B>::new(device.clone());
        let builder = DataLoaderBuilder::new(batcher).batch_size(self.batch_size);

        let builder = if shuffle { builder.shuffle(self.seed) } else { builder };

        builder.build(HierDataset::new(samples))
    }
}

/// Batches one pass of `loader` yields.
pub fn count_batches<B: Backend>(loader: &BatchLoader<B>) -> usize {
    loader.iter().count()
}
