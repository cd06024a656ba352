//! # Inconvenient Words
//!
//! When the first four letters of a CURP would spell an offensive or
//! inconvenient Spanish word, the issuing authority replaces the second
//! letter (the first surname's vowel) with `X`: a `BACA` surname prefix is
//! issued as `BXCA`.
//!
//! This has two consequences for validation:
//!
//! - A first surname must be accepted when its real vowel is one of the
//!   vowels the censored skeleton stands for.
//! - A code whose prefix *is* one of the uncensored words can never have
//!   been issued, and is malformed.
//!
//! ## Invariant
//!
//! Every skeleton has `X` at offset 1 and is four ASCII letters long.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Censored skeleton → vowels it replaces.
///
/// Union of the list in the official CURP issuing manual and the
/// additional words observed in issued codes.
pub static ENTRIES: [(&str, &[char]); 80] = [
    ("BXCA", &['A']),
    ("BXKA", &['A']),
    ("BXEI", &['U']),
    ("BXEY", &['U']),
    ("CXCA", &['A']),
    ("CXCO", &['A']),
    ("CXGA", &['A']),
    ("CXGO", &['A']),
    ("CXKA", &['A']),
    ("CXKO", &['A']),
    ("CXGE", &['O']),
    ("CXGI", &['O']),
    ("CXJA", &['O']),
    ("CXJE", &['O']),
    ("CXJI", &['O']),
    ("CXJO", &['O']),
    ("CXLA", &['O', 'U']),
    ("CXLO", &['U']),
    ("FXJE", &['A']),
    ("FXLO", &['A']),
    ("FXTO", &['E']),
    ("GXTA", &['E']),
    ("GXEI", &['U']),
    ("GXEY", &['U']),
    ("JXTA", &['E']),
    ("JXTO", &['O']),
    ("KXCA", &['A']),
    ("KXCO", &['A']),
    ("KXGA", &['A']),
    ("KXGO", &['A']),
    ("KXKA", &['A']),
    ("KXKO", &['A']),
    ("KXGE", &['O']),
    ("KXGI", &['O']),
    ("KXJA", &['O']),
    ("KXJE", &['O']),
    ("KXJI", &['O']),
    ("KXJO", &['O']),
    ("KXLA", &['O']),
    ("KXLO", &['U']),
    ("LXLO", &['E', 'I']),
    ("LXCA", &['O']),
    ("LXCO", &['O']),
    ("LXKA", &['O']),
    ("LXKO", &['O']),
    ("MXME", &['A']),
    ("MXMO", &['A']),
    ("MXAR", &['E', 'I']),
    ("MXAS", &['E']),
    ("MXON", &['E', 'I']),
    ("MXCO", &['O']),
    ("MXKO", &['O']),
    ("MXLA", &['U']),
    ("MXLO", &['U']),
    ("NXCA", &['A']),
    ("NXCO", &['A']),
    ("PXDA", &['E']),
    ("PXDO", &['E']),
    ("PXNE", &['E']),
    ("PXPI", &['I']),
    ("PXTO", &['I', 'U']),
    ("PXPO", &['O']),
    ("PXTA", &['U']),
    ("QXLO", &['U']),
    ("RXTA", &['A']),
    ("RXBA", &['O']),
    ("RXBE", &['O']),
    ("RXBO", &['O']),
    ("RXIN", &['U']),
    ("SXNO", &['E']),
    ("SXXO", &['E']),
    ("TXTA", &['E']),
    ("VXCA", &['A']),
    ("VXGA", &['A']),
    ("VXGO", &['A']),
    ("VXKA", &['A']),
    ("VXEI", &['U']),
    ("VXEY", &['U']),
    ("WXEI", &['U']),
    ("WXEY", &['U']),
];

/// Lookup structure over [`ENTRIES`].
#[derive(Debug, Clone)]
pub struct ProfanityTable {
    censored: HashMap<&'static str, &'static [char]>,
    uncensored: HashSet<String>,
}

impl ProfanityTable {
    /// Build a table from `(skeleton, vowels)` pairs.
    pub fn new(entries: &[(&'static str, &'static [char])]) -> Self {
        let censored: HashMap<&'static str, &'static [char]> = entries.iter().copied().collect();
        let uncensored = entries
            .iter()
            .flat_map(|(skeleton, vowels)| vowels.iter().map(move |v| uncensor(skeleton, *v)))
            .collect();
        Self {
            censored,
            uncensored,
        }
    }

    /// The table of known inconvenient words. Built once per process.
    pub fn standard() -> &'static ProfanityTable {
        static TABLE: OnceLock<ProfanityTable> = OnceLock::new();
        TABLE.get_or_init(|| ProfanityTable::new(&ENTRIES))
    }

    /// Vowels a censored `prefix` may stand for, if it is a known skeleton.
    pub fn allowed_vowels(&self, prefix: &str) -> Option<&'static [char]> {
        self.censored.get(prefix).copied()
    }

    /// Whether `prefix` is an inconvenient word spelled out without censorship.
    pub fn is_uncensored(&self, prefix: &str) -> bool {
        self.uncensored.contains(prefix)
    }

    /// Number of censored skeletons.
    pub fn len(&self) -> usize {
        self.censored.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.censored.is_empty()
    }
}

/// Put `vowel` back in place of the `X` at offset 1.
fn uncensor(skeleton: &str, vowel: char) -> String {
    skeleton
        .chars()
        .enumerate()
        .map(|(i, c)| if i == 1 { vowel } else { c })
        .collect()
}
