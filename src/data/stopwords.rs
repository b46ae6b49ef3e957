// ============================================================
// Layer 4 — Stop Words
// ============================================================
// Very common Indonesian function words carry no category signal
// ("yang", "dan", "untuk", ...) and are dropped before stemming.
// Matching is case-insensitive: words are stored lower-cased.

use std::collections::HashSet;

/// Default Indonesian stop-word list.
pub const INDONESIAN_STOP_WORDS: &[&str] = &[
    "yang", "untuk", "pada", "ke", "para", "namun", "menurut", "antara", "dia", "dua",
    "ia", "seperti", "jika", "sehingga", "kembali", "dan", "tidak", "ini", "karena",
    "kepada", "oleh", "saat", "harus", "sementara", "setelah", "belum", "kami", "sekitar",
    "bagi", "serta", "di", "dari", "telah", "sebagai", "masih", "hal", "ketika", "adalah",
    "itu", "dalam", "bisa", "bahwa", "atau", "hanya", "kita", "dengan", "akan", "juga",
    "ada", "mereka", "sudah", "saya", "terhadap", "secara", "agar", "lain", "anda",
    "begitu", "mengapa", "kenapa", "yaitu", "yakni", "daripada", "itulah", "lagi", "maka",
    "tentang", "demi", "dimana", "kemana", "pula", "sambil", "sebelum", "sesudah",
    "supaya", "guna", "kah", "pun", "sampai", "sedangkan", "selagi", "tetapi", "apakah",
    "kecuali", "sebab", "selain", "seolah", "seraya", "seterusnya", "tanpa", "agak",
    "boleh", "dapat", "dsb", "dst", "dll", "dahulu", "dulunya", "anu", "demikian", "tapi",
    "ingin", "nggak", "mari", "nanti", "melainkan", "oh", "ok", "seharusnya",
    "sebetulnya", "setiap", "setidaknya", "sesuatu", "pasti", "saja", "toh", "ya",
    "walau", "tolong", "tentu", "amat", "apalagi", "bagaimanapun",
];

/// A set of words to drop during normalisation.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Build a stop-word set from any list of words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        Self { words }
    }

    pub fn indonesian() -> Self {
        Self::new(INDONESIAN_STOP_WORDS)
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::indonesian()
    }
}
