// ============================================================
// Layer 4 — Text Normaliser
// ============================================================
// Turns a raw product title into the canonical token stream that
// is fed to the tokenizer.
//
// Cleaning steps (applied in order):
//   1. Lower-case
//   2. Replace every char outside [A-Za-z0-9(),!?'\-`] with a space
//      (this also turns newlines into spaces)
//   3. Strip @mentions and http… URLs
//   4. Strip ASCII punctuation, apostrophes and digits
//   5. Drop stop words and single-character tokens
//   6. Stem what remains, words joined by single spaces
//
// The result may be empty; the tokenizer still pads it to full length.
//
// Reference: Rust Book §8 (Strings in Rust)
//            regex crate documentation

use std::sync::OnceLock;

use regex::Regex;

use crate::data::stemmer::{IndonesianStemmer, Stemmer};
use crate::data::stopwords::StopWords;

/// Characters that survive step 2, besides ASCII letters and digits
const KEPT_SYMBOLS: &str = "(),!?'-`";

fn mention_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"@\w+").expect("mention pattern is valid"))
}

fn url_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"http\S+").expect("url pattern is valid"))
}

/// Stateless text cleaner; one instance is shared by every worker thread.
pub struct TextNormalizer {
    stop_words: StopWords,
    stemmer:    Box<dyn Stemmer>,
}

impl TextNormalizer {
    pub fn new(stop_words: StopWords, stemmer: impl Stemmer + 'static) -> Self {
        Self {
            stop_words,
            stemmer: Box::new(stemmer),
        }
    }

    /// Indonesian stop words + Indonesian affix stemmer.
    pub fn indonesian() -> Self {
        Self::new(StopWords::indonesian(), IndonesianStemmer::new())
    }

    /// Clean `text` into a normalised, stemmed string.
    pub fn normalize(&self, text: &str) -> String {
        // ── Steps 1–2: lower-case, restrict the alphabet ─────────────────────
        let restricted: String = text
            .to_lowercase()
            .chars()
            .map(|c| match c {
                '\n' => ' ',
                c if c.is_ascii_alphanumeric() || KEPT_SYMBOLS.contains(c) => c,
                _ => ' ',
            })
            .collect();

        // ── Step 3: mentions and links ───────────────────────────────────────
        let without_mentions = mention_pattern().replace_all(&restricted, "");
        let without_links    = url_pattern().replace_all(&without_mentions, "");

        // ── Step 4: punctuation, apostrophes, digits ─────────────────────────
        // Apostrophes are ASCII punctuation, so one filter covers both.
        let letters: String = without_links
            .chars()
            .filter(|c| !c.is_ascii_punctuation() && !c.is_ascii_digit())
            .collect();

        // ── Step 5: stop words and one-letter tokens ─────────────────────────
        let kept = letters
            .split_whitespace()
            .filter(|word| word.chars().count() > 1 && !self.stop_words.is_stop_word(word))
            .collect::<Vec<_>>()
            .join(" ");

        // ── Step 6: stemming ─────────────────────────────────────────────────
        self.stemmer.stem(kept.trim())
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::indonesian()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_title() {
        let n = TextNormalizer::indonesian();
        assert_eq!(n.normalize("Kaos Polos Hitam"), "kaos polos hitam");
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let n     = TextNormalizer::indonesian();
        let input = "Jual Kemeja Batik Pria - Lengan Panjang!! @tokobatik http://toko.id/x";
        assert_eq!(n.normalize(input), n.normalize(input));
    }

    #[test]
    fn test_strips_links_digits_and_symbols() {
        let n = TextNormalizer::indonesian();
        assert_eq!(n.normalize("Kaos 2 pcs 100% katun"), "kaos pcs katun");
        assert_eq!(
            n.normalize("beli di https://toko.com/abc sekarang"),
            "beli toko com abc sekarang"
        );
    }

    #[test]
    fn test_drops_stop_words_and_single_letters() {
        let n = TextNormalizer::indonesian();
        assert_eq!(n.normalize("a kaos yang dan x"), "kaos");
    }

    #[test]
    fn test_apostrophes_removed() {
        let n = TextNormalizer::indonesian();
        assert_eq!(n.normalize("Jum'at"), "jumat");
    }

    #[test]
    fn test_everything_dropped_gives_empty_string() {
        let n = TextNormalizer::indonesian();
        assert_eq!(n.normalize("!!! 123 ? \n"), "");
        assert_eq!(n.normalize(""), "");
    }

    #[test]
    fn test_applies_stemmer() {
        let n = TextNormalizer::indonesian();
        assert_eq!(n.normalize("Makanan Ringan"), "makan ringan");
    }
}
