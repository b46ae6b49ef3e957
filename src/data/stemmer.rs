// ============================================================
// Layer 4 — Indonesian Stemmer
// ============================================================
// Dictionary-free affix stripping for Indonesian words, in the
// order used by the Tala stemmer:
//
//   1. particle          -kah -lah -tah -pun
//   2. possessive        -ku -mu -nya
//   3. first-order prefix meng- meny- men- mem- me- peng- peny-
//                         pen- pem- di- ter- ke-
//      then suffix       -kan -an -i
//      then second-order prefix ber- per- be- pe-
//   3'. if no first-order prefix: second-order prefix, then suffix
//
// Each step only runs while the word still has more than two
// syllables (vowels), so short roots like "kaos" stay intact.
//
// Examples:
//   "makanan"    → "makan"
//   "bermain"    → "main"
//   "menyapu"    → "sapu"
//   "memukul"    → "pukul"
//   "pakaiannya" → "pakai"

/// Reduces words to a root form.
/// Implementations must be shareable across worker threads.
pub trait Stemmer: Send + Sync {
    /// Stem a single lower-case word.
    fn stem_word(&self, word: &str) -> String;

    /// Stem every whitespace-separated word of `text` and re-join
    /// the results with single spaces.
    fn stem(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|w| self.stem_word(w))
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

const PARTICLES: &[&str] = &["kah", "lah", "tah", "pun"];
const POSSESSIVES: &[&str] = &["nya", "ku", "mu"];
const SUFFIXES: &[&str] = &["kan", "an", "i"];
const SECOND_ORDER_PREFIXES: &[&str] = &["ber", "per", "be", "pe"];

/// Prefix/suffix pairs that never occur together; the suffix is kept.
const DISALLOWED_CONFIXES: &[(&str, &str)] = &[
    ("ber", "i"),
    ("di", "an"),
    ("ke", "i"),
    ("ke", "kan"),
    ("me", "an"),
    ("ter", "an"),
];

/// What replaces a stripped first-order prefix.
#[derive(Clone, Copy)]
enum Recode {
    Nothing,
    Always(&'static str),
    BeforeVowel(&'static str),
}

/// (prefix, family, recoding), longest prefixes first.
const FIRST_ORDER_PREFIXES: &[(&str, &str, Recode)] = &[
    ("meng", "me", Recode::Nothing),
    ("meny", "me", Recode::Always("s")),
    ("men", "me", Recode::Nothing),
    ("mem", "me", Recode::BeforeVowel("p")),
    ("me", "me", Recode::Nothing),
    ("peng", "pe", Recode::Nothing),
    ("peny", "pe", Recode::Always("s")),
    ("pen", "pe", Recode::Nothing),
    ("pem", "pe", Recode::BeforeVowel("p")),
    ("di", "di", Recode::Nothing),
    ("ter", "ter", Recode::Nothing),
    ("ke", "ke", Recode::Nothing),
];

const MIN_STEM_LEN: usize = 2;

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn syllables(word: &str) -> usize {
    word.chars().filter(|&c| is_vowel(c)).count()
}

fn long_enough(stem: &str) -> bool {
    stem.chars().count() >= MIN_STEM_LEN
}

/// Dictionary-free Indonesian affix stripper.
#[derive(Debug, Clone, Default)]
pub struct IndonesianStemmer;

impl IndonesianStemmer {
    pub fn new() -> Self {
        Self
    }

    fn strip_ending(word: &str, endings: &[&'static str]) -> Option<(String, &'static str)> {
        if syllables(word) <= 2 {
            return None;
        }
        endings.iter().find_map(|&ending| {
            word.strip_suffix(ending)
                .filter(|rest| long_enough(rest))
                .map(|rest| (rest.to_string(), ending))
        })
    }

    /// Returns the remaining word and the prefix family that was removed.
    fn strip_first_order_prefix(word: &str) -> Option<(String, &'static str)> {
        if syllables(word) <= 2 {
            return None;
        }
        FIRST_ORDER_PREFIXES.iter().find_map(|&(prefix, family, recode)| {
            let rest = word.strip_prefix(prefix)?;
            let starts_with_vowel = rest.chars().next().is_some_and(is_vowel);
            let stem = match recode {
                Recode::Nothing                             => rest.to_string(),
                Recode::Always(head)                        => format!("{head}{rest}"),
                Recode::BeforeVowel(head) if starts_with_vowel => format!("{head}{rest}"),
                Recode::BeforeVowel(_)                      => rest.to_string(),
            };
            long_enough(&stem).then_some((stem, family))
        })
    }

    fn strip_second_order_prefix(word: &str) -> Option<String> {
        if syllables(word) <= 2 {
            return None;
        }
        SECOND_ORDER_PREFIXES.iter().find_map(|&prefix| {
            word.strip_prefix(prefix)
                .filter(|rest| long_enough(rest))
                .map(str::to_string)
        })
    }

    fn strip_suffix(word: &str, prefix_family: Option<&str>) -> Option<String> {
        let (rest, suffix) = Self::strip_ending(word, SUFFIXES)?;
        let disallowed = prefix_family.is_some_and(|family| {
            DISALLOWED_CONFIXES
                .iter()
                .any(|&(prefix, ending)| prefix == family && ending == suffix)
        });
        (!disallowed).then_some(rest)
    }
}

impl Stemmer for IndonesianStemmer {
    fn stem_word(&self, word: &str) -> String {
        let mut word = word.to_string();

        if let Some((rest, _)) = Self::strip_ending(&word, PARTICLES) {
            word = rest;
        }
        if let Some((rest, _)) = Self::strip_ending(&word, POSSESSIVES) {
            word = rest;
        }

        match Self::strip_first_order_prefix(&word) {
            Some((rest, family)) => {
                word = rest;
                if let Some(rest) = Self::strip_suffix(&word, Some(family)) {
                    word = rest;
                    if let Some(rest) = Self::strip_second_order_prefix(&word) {
                        word = rest;
                    }
                }
            }
            None => {
                if let Some(rest) = Self::strip_second_order_prefix(&word) {
                    word = rest;
                }
                if let Some(rest) = Self::strip_suffix(&word, None) {
                    word = rest;
                }
            }
        }

        word
    }
}
