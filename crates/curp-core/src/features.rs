//! # Word Features
//!
//! Every name part is reduced to a three-character fingerprint before it is
//! compared against a CURP:
//!
//! - the first character,
//! - the first internal vowel,
//! - the first internal consonant.
//!
//! Any of the three that cannot be found is reported as `X`, and `Ñ` is
//! always reported as `X`.
//!
//! ## Word groups
//!
//! Compound surnames such as `DEL CASTILLO` or `VAN DER PLAS` contribute
//! their first *substantive* word: prepositions and articles listed in
//! [`NameRules`] are skipped, except for the final word of the group, which
//! is always kept (a surname that is only `DAS` still contributes `D`).
//! Separator characters (`/ - . ' ’`) split words just like whitespace.

use std::collections::HashSet;
use std::sync::OnceLock;

use unicode_normalization::UnicodeNormalization;

use crate::text::fold_to_ascii_upper;

/// Placeholder reported when a character class is absent.
pub const NOT_FOUND: char = 'X';

/// Vowels recognised inside a word.
pub const VOWELS: &str = "AEIOU";

/// Consonants recognised inside a word. `Ñ` is listed for completeness but
/// is folded to `X` before lookup.
pub const CONSONANTS: &str = "BCDFGHJKLMNÑPQRSTVWXYZ";

const IGNORED_WORDS: [&str; 19] = [
    "DA", "DAS", "DE", "DEL", "DER", "DI", "DIE", "DD", "EL", "LA", "LOS", "LAS", "LE", "LES",
    "MAC", "MC", "VAN", "VON", "Y",
];

const SPECIAL_CHARS: [char; 5] = ['/', '-', '.', '\'', '\u{2019}'];

const COMMON_NAMES: [&str; 6] = ["MARIA", "MA", "MA.", "JOSE", "J", "J."];

// ─── Rules ───────────────────────────────────────────────────────────

/// The fixed vocabularies consumed by feature extraction and name matching.
///
/// All entries are stored upper-case and diacritic-free; lookups expect
/// input already folded with [`fold_to_ascii_upper`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRules {
    ignored_words: HashSet<String>,
    special_chars: Vec<char>,
    common_names: HashSet<String>,
}

impl NameRules {
    /// Build a rule set from explicit vocabularies.
    pub fn new<W, C, N>(ignored_words: W, special_chars: C, common_names: N) -> Self
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        C: IntoIterator<Item = char>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        Self {
            ignored_words: ignored_words
                .into_iter()
                .map(|w| fold_to_ascii_upper(w.as_ref()))
                .collect(),
            special_chars: special_chars.into_iter().collect(),
            common_names: common_names
                .into_iter()
                .map(|n| fold_to_ascii_upper(n.as_ref()))
                .collect(),
        }
    }

    /// The rule set used by the issuing authority. Built once per process.
    pub fn standard() -> &'static NameRules {
        static RULES: OnceLock<NameRules> = OnceLock::new();
        RULES.get_or_init(|| NameRules::new(IGNORED_WORDS, SPECIAL_CHARS, COMMON_NAMES))
    }

    /// Whether `folded` is a preposition/article that compound names skip.
    pub fn is_ignored_word(&self, folded: &str) -> bool {
        self.ignored_words.contains(folded)
    }

    /// Whether `c` separates words inside a name part.
    pub fn is_special_char(&self, c: char) -> bool {
        self.special_chars.contains(&c)
    }

    /// Whether `folded` is a common first name that is elided when followed
    /// by another given name (`MARIA`, `JOSE`, ...).
    pub fn is_common_name(&self, folded: &str) -> bool {
        self.common_names.contains(folded)
    }
}

impl Default for NameRules {
    fn default() -> Self {
        Self::standard().clone()
    }
}

// ─── Features ────────────────────────────────────────────────────────

/// First character, first internal vowel and first internal consonant of a
/// word group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordFeatures {
    /// First character of the selected word, or `X`.
    pub char: char,
    /// First vowel after the first character, or `X`.
    pub vowel: char,
    /// First consonant after the first character, or `X`.
    pub consonant: char,
}

impl WordFeatures {
    /// Features of an empty word group: all three are `X`.
    pub const EMPTY: WordFeatures = WordFeatures {
        char: NOT_FOUND,
        vowel: NOT_FOUND,
        consonant: NOT_FOUND,
    };

    /// Extract the features of `text` under `rules`.
    pub fn extract(text: &str, rules: &NameRules) -> Self {
        // Ñ must become X before folding would turn it into N.
        let upper: String = text
            .nfc()
            .flat_map(char::to_uppercase)
            .map(|c| if c == 'Ñ' { NOT_FOUND } else { c })
            .collect();
        let folded: String = fold_to_ascii_upper(&upper)
            .chars()
            .map(|c| if rules.is_special_char(c) { ' ' } else { c })
            .collect();

        let pieces: Vec<&str> = folded.split_whitespace().collect();
        let word = match pieces.split_last() {
            None => return Self::EMPTY,
            Some((last, init)) => init
                .iter()
                .copied()
                .find(|p| !rules.is_ignored_word(p))
                .unwrap_or(*last),
        };

        let mut chars = word.chars();
        let first = chars.next().unwrap_or(NOT_FOUND);
        let mut vowel = None;
        let mut consonant = None;
        for c in chars {
            if vowel.is_none() && VOWELS.contains(c) {
                vowel = Some(c);
            } else if consonant.is_none() && CONSONANTS.contains(c) {
                consonant = Some(if c == 'Ñ' { NOT_FOUND } else { c });
            }
            if vowel.is_some() && consonant.is_some() {
                break;
            }
        }

        Self {
            char: first,
            vowel: vowel.unwrap_or(NOT_FOUND),
            consonant: consonant.unwrap_or(NOT_FOUND),
        }
    }

    /// Extract features using [`NameRules::standard()`].
    pub fn of(text: &str) -> Self {
        Self::extract(text, NameRules::standard())
    }
}

impl std::fmt::Display for WordFeatures {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.char, self.vowel, self.consonant)
    }
}
