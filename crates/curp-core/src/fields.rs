//! # Field Extraction
//!
//! Converts the fixed positions of a checksum-verified code into typed
//! values: birth date, sex and birth region. Also checks that the
//! name-derived positions hold characters of the right class.
//!
//! Every function here expects a code that already passed
//! [`checksum::verify`](crate::checksum::verify), i.e. 18 characters in
//! `0-9A-Z`.

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use crate::error::CurpError;
use crate::features::{CONSONANTS, NOT_FOUND, VOWELS};
use crate::layout::{self, char_at, Field};
use crate::profanity::ProfanityTable;
use crate::region::{self, Region};

// ─── Sex ─────────────────────────────────────────────────────────────

/// Sex as encoded in a CURP, numbered per ISO/IEC 5218.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Sex {
    /// Not known. Never produced by a valid code.
    Unknown = 0,
    /// `H` (*hombre*).
    Male = 1,
    /// `M` (*mujer*).
    Female = 2,
}

impl Sex {
    /// The ISO/IEC 5218 number.
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// The single letter used in the CURP, `D` for unknown.
    pub fn letter(&self) -> char {
        match self {
            Self::Unknown => 'D',
            Self::Male => 'H',
            Self::Female => 'M',
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl From<Sex> for u8 {
    fn from(sex: Sex) -> Self {
        sex.code()
    }
}

impl Serialize for Sex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Read the sex at offset 10.
///
/// # Errors
///
/// Returns [`CurpError::Sex`] for anything other than `H` or `M`.
pub fn parse_sex(code: &str) -> Result<Sex, CurpError> {
    match char_at(code, Field::Sex) {
        'H' => Ok(Sex::Male),
        'M' => Ok(Sex::Female),
        other => Err(CurpError::Sex(other)),
    }
}

// ─── Birth date ──────────────────────────────────────────────────────

fn two_digits(code: &str, range: std::ops::Range<usize>) -> Option<u32> {
    let s = layout::slice(code, range);
    if s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

/// Resolve the century of a two-digit year.
///
/// Years after the reference year's last two digits belong to the previous
/// century. The homoclave then overrides: a digit means the person was
/// registered as born before 2000, so the century is forced to 19; a
/// letter moves a computed 19 up to 20. Not exact for every code, but the
/// best information the code carries.
pub fn resolve_century(year2: u32, homonymy: char, today: NaiveDate) -> i32 {
    let current_year = today.year();
    let mut century = current_year / 100;
    if year2 as i32 > current_year % 100 {
        century -= 1;
    }

    if homonymy.is_ascii_digit() {
        century = 19;
    } else if century == 19 {
        century = 20;
    }
    century
}

/// Read the birth date at offsets 4-9, resolving the century against `today`.
///
/// # Errors
///
/// - [`CurpError::NonNumericDate`] if any of the six positions is not a digit.
/// - [`CurpError::Date`] if the resulting date does not exist.
pub fn parse_birth_date(code: &str, today: NaiveDate) -> Result<NaiveDate, CurpError> {
    let (Some(year2), Some(month), Some(day)) = (
        two_digits(code, layout::YEAR),
        two_digits(code, layout::MONTH),
        two_digits(code, layout::DAY),
    ) else {
        return Err(CurpError::NonNumericDate(
            layout::slice(code, layout::YEAR.start..layout::DAY.end).to_string(),
        ));
    };

    let century = resolve_century(year2, char_at(code, Field::Homonymy), today);
    let year = century * 100 + year2 as i32;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(CurpError::Date { year, month, day })
}

// ─── Region ──────────────────────────────────────────────────────────

/// Read the birth region at offsets 11-12.
///
/// # Errors
///
/// Returns [`CurpError::Region`] if the code is not in the region table.
pub fn parse_region(code: &str) -> Result<&'static Region, CurpError> {
    let key = layout::slice(code, layout::REGION);
    region::lookup(key).ok_or_else(|| CurpError::Region(key.to_string()))
}

// ─── Name characters ─────────────────────────────────────────────────

/// Check the classes of the name-derived positions.
///
/// - The first surname's vowel is a vowel or `X`.
/// - The three initials are letters.
/// - The three internal consonants are consonants (`X` included).
/// - The four-letter prefix is not an inconvenient word left uncensored.
///
/// # Errors
///
/// - [`CurpError::InvalidNameCharacters`] for a class violation.
/// - [`CurpError::UncensoredWord`] for an uncensored prefix.
pub fn validate_name_chars(code: &str, profanity: &ProfanityTable) -> Result<(), CurpError> {
    let vowel = char_at(code, Field::SurnameAVowel);
    let pairs = [
        (Field::NameChar, Field::NameConsonant),
        (Field::SurnameAChar, Field::SurnameAConsonant),
        (Field::SurnameBChar, Field::SurnameBConsonant),
    ];

    let vowel_ok = vowel == NOT_FOUND || VOWELS.contains(vowel);
    let pairs_ok = pairs.iter().all(|(initial, consonant)| {
        char_at(code, *initial).is_ascii_uppercase()
            && CONSONANTS.contains(char_at(code, *consonant))
    });

    if !(vowel_ok && pairs_ok) {
        let mut name_chars = layout::slice(code, layout::NAME_PREFIX).to_string();
        name_chars.push_str(layout::slice(
            code,
            Field::SurnameAConsonant.offset()..Field::Homonymy.offset(),
        ));
        return Err(CurpError::InvalidNameCharacters(name_chars));
    }

    let prefix = layout::slice(code, layout::NAME_PREFIX);
    if profanity.is_uncensored(prefix) {
        return Err(CurpError::UncensoredWord(prefix.to_string()));
    }
    Ok(())
}
