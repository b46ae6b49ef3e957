use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

/// One tokenised, padded sample with a single class target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedSample {
    pub input_ids: Vec<u32>,
    pub target:    usize,
}

impl EncodedSample {
    pub fn new(input_ids: Vec<u32>, target: usize) -> Self {
        Self { input_ids, target }
    }

    pub fn seq_len(&self) -> usize {
        self.input_ids.len()
    }
}

/// In-memory dataset of encoded samples.
pub struct HierDataset {
    samples: Vec<EncodedSample>,
}

impl HierDataset {
    pub fn new(samples: Vec<EncodedSample>) -> Self { Self { samples } }
}

impl Dataset<EncodedSample> for HierDataset {
    fn get(&self, index: usize) -> Option<EncodedSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_access() {
        let ds = HierDataset::new(vec![
            EncodedSample::new(vec![5, 6, 0], 1),
            EncodedSample::new(vec![7, 0, 0], 0),
        ]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.get(1).unwrap().target, 0);
        assert!(ds.get(2).is_none());
    }
}
