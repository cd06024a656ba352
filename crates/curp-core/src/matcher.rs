//! # Name Matching
//!
//! Decides whether a given name, a surname or a whole full name is
//! consistent with the name-derived positions of a CURP.
//!
//! ## Per-part rules
//!
//! | part | compared features | code positions |
//! |------|-------------------|----------------|
//! | given name | char, consonant | 3, 15 |
//! | first surname | char, vowel, consonant | 0, 1, 13 |
//! | second surname | char, consonant | 2, 14 |
//!
//! A given name starting with a common first name (`MARIA`, `JOSE`, ...)
//! followed by another name is matched on the second one. A first surname
//! whose prefix was censored also matches on the vowel the censorship hid.
//!
//! ## Full-name tokenization
//!
//! A full name is split word by word with a finite-state machine whose
//! states are the buckets a word can fall into:
//!
//! ```text
//! Init ──given──▶ GivenNames ──first──▶ FirstSurname ──second──▶ SecondSurname
//! ```
//!
//! Each substantive word is tested against the matcher of the *next* part;
//! a match advances the state and the word opens the new bucket, otherwise
//! it extends the current one. Prepositions are buffered and land in the
//! bucket of the next substantive word. The words of `Init` and
//! `GivenNames` together form the given names.

use serde::Serialize;

use crate::features::{NameRules, WordFeatures};
use crate::layout::{self, char_at, Field};
use crate::profanity::ProfanityTable;
use crate::text::fold_to_ascii_upper;

// ─── States ──────────────────────────────────────────────────────────

/// Progress of full-name tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParseState {
    /// No given name identified yet.
    Init,
    /// Collecting given names.
    GivenNames,
    /// Collecting the first surname.
    FirstSurname,
    /// Collecting the second surname. Terminal.
    SecondSurname,
}

impl ParseState {
    /// Number of states, and of word buckets.
    pub const COUNT: usize = 4;

    /// The state entered when a word matches the next name part.
    pub fn next(&self) -> Option<ParseState> {
        match self {
            Self::Init => Some(Self::GivenNames),
            Self::GivenNames => Some(Self::FirstSurname),
            Self::FirstSurname => Some(Self::SecondSurname),
            Self::SecondSurname => None,
        }
    }

    /// Bucket index of this state.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for ParseState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Init => "INIT",
            Self::GivenNames => "GIVEN_NAMES",
            Self::FirstSurname => "FIRST_SURNAME",
            Self::SecondSurname => "SECOND_SURNAME",
        };
        write!(f, "{s}")
    }
}

/// A full name split into its three parts. Absent surnames are `""`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FullName {
    /// All given names, including elided common names.
    pub given_name: String,
    /// First (usually paternal) surname.
    pub first_surname: String,
    /// Second (usually maternal) surname.
    pub second_surname: String,
}

// ─── Matcher ─────────────────────────────────────────────────────────

/// Matches name parts against one code.
///
/// The code must already have passed checksum verification; positions are
/// read as ASCII.
#[derive(Debug, Clone, Copy)]
pub struct NameMatcher<'a> {
    code: &'a str,
    rules: &'a NameRules,
    profanity: &'a ProfanityTable,
}

impl<'a> NameMatcher<'a> {
    /// Matcher with the standard rules and inconvenient-word table.
    pub fn new(code: &'a str) -> Self {
        Self::with_rules(code, NameRules::standard(), ProfanityTable::standard())
    }

    /// Matcher with explicit vocabularies.
    pub fn with_rules(
        code: &'a str,
        rules: &'a NameRules,
        profanity: &'a ProfanityTable,
    ) -> Self {
        Self {
            code,
            rules,
            profanity,
        }
    }

    fn features(&self, text: &str) -> WordFeatures {
        WordFeatures::extract(text, self.rules)
    }

    fn at(&self, field: Field) -> char {
        char_at(self.code, field)
    }

    /// Whether `name` is consistent with the given-name positions.
    pub fn matches_given_name(&self, name: &str) -> bool {
        let upper = name.to_uppercase();
        let mut pieces: Vec<&str> = upper.split_whitespace().collect();
        if pieces.len() > 1 && self.rules.is_common_name(&fold_to_ascii_upper(pieces[0])) {
            pieces.remove(0);
        }

        let wf = self.features(&pieces.join(" "));
        wf.char == self.at(Field::NameChar) && wf.consonant == self.at(Field::NameConsonant)
    }

    /// Whether `surname` is consistent with the first-surname positions,
    /// accepting the uncensored vowel of an inconvenient prefix.
    pub fn matches_first_surname(&self, surname: &str) -> bool {
        let wf = self.features(surname);
        if wf.char != self.at(Field::SurnameAChar)
            || wf.consonant != self.at(Field::SurnameAConsonant)
        {
            return false;
        }
        if wf.vowel == self.at(Field::SurnameAVowel) {
            return true;
        }
        self.profanity
            .allowed_vowels(layout::slice(self.code, layout::NAME_PREFIX))
            .is_some_and(|vowels| vowels.contains(&wf.vowel))
    }

    /// Whether `surname` is consistent with the second-surname positions.
    pub fn matches_second_surname(&self, surname: &str) -> bool {
        let wf = self.features(surname);
        wf.char == self.at(Field::SurnameBChar)
            && wf.consonant == self.at(Field::SurnameBConsonant)
    }

    /// Whether the code allows the person to have no second surname.
    pub fn second_surname_may_be_empty(&self) -> bool {
        self.matches_second_surname("")
    }

    /// Whether the code allows the person to have no surnames at all.
    ///
    /// A missing first surname implies a missing second one.
    pub fn first_surname_may_be_empty(&self) -> bool {
        self.second_surname_may_be_empty() && self.matches_first_surname("")
    }

    fn matches_in(&self, state: ParseState, word: &str) -> bool {
        match state {
            ParseState::Init => self.matches_given_name(word),
            ParseState::GivenNames => self.matches_first_surname(word),
            ParseState::FirstSurname => self.matches_second_surname(word),
            ParseState::SecondSurname => false,
        }
    }

    /// Split `full_name` into given names and surnames consistent with the
    /// code, or `None` if no consistent split exists.
    pub fn split_full_name(&self, full_name: &str) -> Option<FullName> {
        let mut state = ParseState::Init;
        let mut buckets: [Vec<&str>; ParseState::COUNT] = Default::default();
        let mut ignored: Vec<&str> = Vec::new();

        for word in full_name.split_whitespace() {
            let folded = fold_to_ascii_upper(word);
            if self.rules.is_ignored_word(&folded) {
                ignored.push(word);
                continue;
            }

            if self.matches_in(state, word) {
                if let Some(next) = state.next() {
                    tracing::trace!(%word, from = %state, to = %next, "name part matched");
                    state = next;
                }
            } else if state == ParseState::Init && !self.rules.is_common_name(&folded) {
                tracing::debug!(%word, "first substantive word is not the given name");
                return None;
            }

            buckets[state.index()].append(&mut ignored);
            buckets[state.index()].push(word);
        }
        buckets[state.index()].append(&mut ignored);

        let complete = match state {
            ParseState::SecondSurname => true,
            ParseState::FirstSurname => self.second_surname_may_be_empty(),
            ParseState::GivenNames => self.first_surname_may_be_empty(),
            ParseState::Init => false,
        };
        if !complete {
            tracing::debug!(state = %state, "full name ended before the required surnames");
            return None;
        }

        let [init, given, first, second] = buckets;
        let given_name: Vec<&str> = init.into_iter().chain(given).collect();
        Some(FullName {
            given_name: given_name.join(" "),
            first_surname: first.join(" "),
            second_surname: second.join(" "),
        })
    }
}
