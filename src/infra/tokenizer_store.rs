// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Provides the text → token-id service.
//
//   - With an explicit tokenizer.json (e.g. an IndoBERT export)
//     that file is loaded as-is.
//   - Otherwise a word-level tokenizer is built from the
//     normalised corpus, saved to the cache directory, and reused
//     by later runs.
//
// PaddedTokenizer wraps either one and enforces the fixed-length
// contract: truncate long sequences, pad short ones with [PAD].
//
// Reference: HuggingFace tokenizers documentation

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokenizers::Tokenizer;

use crate::domain::traits::TextTokenizer;

pub const PAD_TOKEN: &str = "[PAD]";
const TOKENIZER_FILE: &str = "tokenizer.json";

pub struct TokenizerStore {
    dir: PathBuf,
}

impl TokenizerStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    pub fn tokenizer_path(&self) -> PathBuf {
        self.dir.join(TOKENIZER_FILE)
    }

    /// Load the tokenizer saved in the store, or build one from `texts`
    pub fn load_or_build(&self, texts: &[String], vocab_size: usize) -> Result<Tokenizer> {
        if self.tokenizer_path().exists() {
            tracing::info!("Loading existing tokenizer from '{}'", self.tokenizer_path().display());
            load_file(&self.tokenizer_path())
        } else {
            tracing::info!("Building new tokenizer (vocab_size={})", vocab_size);
            self.build_and_save(texts, vocab_size)
        }
    }

    /// Build a word-level vocabulary from normalised texts and
    /// write it out in HuggingFace tokenizer.json format.
    fn build_and_save(&self, texts: &[String], vocab_size: usize) -> Result<Tokenizer> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;

        // ── Step 1: word frequencies ─────────────────────────────────────────
        let mut freq: HashMap<&str, usize> = HashMap::new();
        for text in texts {
            for word in text.split_whitespace() {
                *freq.entry(word).or_insert(0) += 1;
            }
        }

        // Most frequent first, ties alphabetical so rebuilds are identical
        let mut words: Vec<(&str, usize)> = freq.into_iter().collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        words.truncate(vocab_size.saturating_sub(5));

        // ── Step 2: vocabulary, BERT-style special ids ───────────────────────
        let mut vocab = serde_json::json!({
            "[PAD]":  0,
            "[UNK]":  1,
            "[CLS]":  101,
            "[SEP]":  102,
            "[MASK]": 103,
        });

        let mut next_id = 104usize;
        for (word, _) in &words {
            if vocab.get(*word).is_none() {
                vocab[*word] = serde_json::json!(next_id);
                next_id += 1;
            }
        }

        // ── Step 3: tokenizer.json ───────────────────────────────────────────
        let tokenizer_json = serde_json::json!({
            "version": "1.0",
            "truncation": null,
            "padding": null,
            "added_tokens": [
                {"id": 0,   "content": "[PAD]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
                {"id": 1,   "content": "[UNK]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
                {"id": 101, "content": "[CLS]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
                {"id": 102, "content": "[SEP]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
                {"id": 103, "content": "[MASK]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true}
            ],
            "normalizer": null,
            "pre_tokenizer": {
                "type": "Whitespace"
            },
            "post_processor": null,
            "decoder": null,
            "model": {
                "type": "WordLevel",
                "vocab": vocab,
                "unk_token": "[UNK]"
            }
        });

        let tok_path = self.tokenizer_path();
        std::fs::write(&tok_path, serde_json::to_string_pretty(&tokenizer_json)?)
            .with_context(|| "Cannot write tokenizer JSON")?;

        tracing::info!(
            "Tokenizer built with {} words, saved to '{}'",
            words.len(),
            tok_path.display()
        );

        load_file(&tok_path)
    }
}

/// Load any HuggingFace tokenizer.json
pub fn load_file(path: &Path) -> Result<Tokenizer> {
    Tokenizer::from_file(path)
        .map_err(|e| anyhow::anyhow!("Cannot load tokenizer from '{}': {}", path.display(), e))
}

// ─── PaddedTokenizer ──────────────────────────────────────────────────────────
/// Fixed-length encoder over a HuggingFace tokenizer.
pub struct PaddedTokenizer {
    inner:  Tokenizer,
    pad_id: u32,
}

impl PaddedTokenizer {
    /// Pads with the id of `[PAD]`, or 0 if the vocabulary has none.
    pub fn new(inner: Tokenizer) -> Self {
        let pad_id = inner.token_to_id(PAD_TOKEN).unwrap_or(0);
        Self { inner, pad_id }
    }
}

impl TextTokenizer for PaddedTokenizer {
    fn encode_padded(&self, text: &str, max_length: usize) -> Result<Vec<u32>> {
        let encoding = self
            .inner
            .encode(text, true)
            .map_err(|e| anyhow::anyhow!("Tokenisation error: {e}"))?;

        let mut ids = encoding.get_ids().to_vec();
        ids.truncate(max_length);
        ids.resize(max_length, self.pad_id);
        Ok(ids)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn corpus() -> Vec<String> {
        vec![
            "kaos polos hitam".to_string(),
            "kaos polos putih".to_string(),
            "celana jeans".to_string(),
        ]
    }

    #[test]
    fn test_build_then_reload() {
        let dir   = tempdir().unwrap();
        let store = TokenizerStore::new(dir.path());

        let built = store.load_or_build(&corpus(), 100).unwrap();
        assert!(store.tokenizer_path().exists());

        let reloaded = store.load_or_build(&[], 100).unwrap();
        assert_eq!(built.token_to_id("kaos"), reloaded.token_to_id("kaos"));
        assert_eq!(built.token_to_id(PAD_TOKEN), Some(0));
    }

    #[test]
    fn test_padding_and_truncation() {
        let dir = tempdir().unwrap();
        let tok = PaddedTokenizer::new(TokenizerStore::new(dir.path()).load_or_build(&corpus(), 100).unwrap());

        let short = tok.encode_padded("kaos hitam", 6).unwrap();
        assert_eq!(short.len(), 6);
        assert_eq!(&short[2..], &[0, 0, 0, 0]);

        let long = tok.encode_padded("kaos polos hitam celana jeans", 3).unwrap();
        assert_eq!(long.len(), 3);
    }

    #[test]
    fn test_empty_text_is_all_padding() {
        let dir = tempdir().unwrap();
        let tok = PaddedTokenizer::new(TokenizerStore::new(dir.path()).load_or_build(&corpus(), 100).unwrap());
        assert_eq!(tok.encode_padded("", 4).unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_unknown_words_map_to_unk() {
        let dir = tempdir().unwrap();
        let tok = PaddedTokenizer::new(TokenizerStore::new(dir.path()).load_or_build(&corpus(), 100).unwrap());
        assert_eq!(tok.encode_padded("sepatu", 2).unwrap(), vec![1, 0]);
    }
}
