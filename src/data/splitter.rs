// ============================================================
// Layer 4 — Dataset Splitter
// ============================================================
// Partitions samples into train / validation / test.
//
//   Flat and level strategies:
//     shuffle everything → 80% fit pool + 20% test
//     shuffle fit pool   → 90% train + 10% validation
//     (≈ 72 / 8 / 20 overall)
//
//   Section strategy:
//     the snapshot is split once into fit pool and test pool;
//     the fit pool is grouped by branch (the row's deepest
//     section) and every group is split 90 / 10 on its own,
//     so small categories still reach both splits.
//
// Every ratio split uses round(n * fraction), so groups smaller
// than 6 samples go entirely to train at 90%: a group of one
// lands in train and leaves validation empty.
//
// Shuffling is Fisher-Yates (rand::seq::SliceRandom) driven by
// an explicitly seeded StdRng, so runs are reproducible.
//
// Reference: rand crate documentation

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Share of all rows kept for fitting; the rest is the test set.
pub const FIT_FRACTION: f64 = 0.8;

/// Share of the fit pool (or of each branch) used for training.
pub const TRAIN_FRACTION: f64 = 0.9;

/// The three portions of a preprocessed dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitSet<T> {
    pub train: T,
    pub valid: T,
    pub test:  T,
}

/// Which portion of a `SplitSet` something belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Portion {
    Train,
    Valid,
    Test,
}

impl Portion {
    pub const ALL: [Portion; 3] = [Portion::Train, Portion::Valid, Portion::Test];

    pub fn name(&self) -> &'static str {
        match self {
            Portion::Train => "train",
            Portion::Valid => "valid",
            Portion::Test  => "test",
        }
    }
}

impl<T> SplitSet<T> {
    pub fn get(&self, portion: Portion) -> &T {
        match portion {
            Portion::Train => &self.train,
            Portion::Valid => &self.valid,
            Portion::Test  => &self.test,
        }
    }
}

/// Randomly shuffle `samples` and split into (train, validation).
///
/// The first `round(len * train_fraction)` shuffled samples go to
/// the first half.
pub fn split_train_val<T, R: Rng + ?Sized>(
    mut samples: Vec<T>,
    train_fraction: f64,
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    samples.shuffle(rng);

    let total    = samples.len();
    let split_at = ((total as f64) * train_fraction).round() as usize;
    let split_at = split_at.min(total);

    let val = samples.split_off(split_at);

    tracing::debug!(
        "Dataset split: {} / {} ({}% / {}%)",
        samples.len(),
        val.len(),
        (samples.len() * 100) / total.max(1),
        (val.len()     * 100) / total.max(1),
    );

    (samples, val)
}

/// Put every sample into the group of its branch.
/// Groups are ordered by branch index; samples keep their order.
pub fn group_by_branch<T, F>(samples: Vec<T>, branch_of: F) -> BTreeMap<usize, Vec<T>>
where
    F: Fn(&T) -> usize,
{
    let mut groups: BTreeMap<usize, Vec<T>> = BTreeMap::new();
    for sample in samples {
        groups.entry(branch_of(&sample)).or_default().push(sample);
    }
    groups
}

/// Seeded splitter shared by every strategy.
#[derive(Debug)]
pub struct DatasetSplitter {
    rng:            StdRng,
    fit_fraction:   f64,
    train_fraction: f64,
}

impl DatasetSplitter {
    pub fn new(seed: u64) -> Self {
        Self::with_fractions(seed, FIT_FRACTION, TRAIN_FRACTION)
    }

    pub fn with_fractions(seed: u64, fit_fraction: f64, train_fraction: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            fit_fraction,
            train_fraction,
        }
    }

    /// Split a snapshot into (fit pool, test pool).
    pub fn holdout<T>(&mut self, samples: Vec<T>) -> (Vec<T>, Vec<T>) {
        split_train_val(samples, self.fit_fraction, &mut self.rng)
    }

    /// Global ratio split used by the flat and level strategies.
    pub fn split_ratio<T>(&mut self, samples: Vec<T>) -> SplitSet<Vec<T>> {
        let (fit, test)    = self.holdout(samples);
        let (train, valid) = split_train_val(fit, self.train_fraction, &mut self.rng);
        SplitSet { train, valid, test }
    }

    /// Per-branch split of a fit pool into (train, valid) groups.
    ///
    /// Both maps hold every branch present in the input, possibly
    /// with an empty list on the validation side.
    pub fn split_by_branch<T, F>(
        &mut self,
        samples: Vec<T>,
        branch_of: F,
    ) -> (BTreeMap<usize, Vec<T>>, BTreeMap<usize, Vec<T>>)
    where
        F: Fn(&T) -> usize,
    {
        let mut train = BTreeMap::new();
        let mut valid = BTreeMap::new();

        for (branch, group) in group_by_branch(samples, branch_of) {
            let (t, v) = split_train_val(group, self.train_fraction, &mut self.rng);
            train.insert(branch, t);
            valid.insert(branch, v);
        }

        (train, valid)
    }
}
