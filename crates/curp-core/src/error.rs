//! # Error Types — Structured Validation Errors
//!
//! Every way a CURP can be rejected at construction time, built with
//! `thiserror`. There is a single root type, [`CurpError`], so callers can
//! propagate broadly with `?` and still branch on the precise failure with
//! [`CurpError::kind()`].
//!
//! ## Design
//!
//! - Format errors (length, charset, field classes) carry the offending
//!   character and its position.
//! - Checksum mismatches carry expected vs. found digit.
//! - Name mismatches carry the rejected input so a form can echo it back.
//!
//! The "value" family groups every malformed-field error that has no more
//! specific kind: [`CurpError::InvalidCharacter`], [`CurpError::NonNumericDate`],
//! [`CurpError::InvalidNameCharacters`] and [`CurpError::UncensoredWord`] all
//! report [`ErrorKind::Value`].

use thiserror::Error;

/// Top-level error type for CURP validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurpError {
    /// The code does not have exactly 18 characters.
    #[error("invalid CURP length: expected 18 characters, found {found}")]
    Length {
        /// Number of characters in the rejected code.
        found: usize,
    },

    /// The verification digit does not match the computed one.
    #[error("verification digit mismatch: expected {expected}, found {found}")]
    Verification {
        /// Digit computed from the first 17 characters.
        expected: char,
        /// Digit present at the last position.
        found: char,
    },

    /// A character outside `0-9A-Z` appears in the code.
    #[error("invalid character {found:?} at position {position} (expected 0-9 or A-Z)")]
    InvalidCharacter {
        /// Zero-based offset of the character.
        position: usize,
        /// The rejected character.
        found: char,
    },

    /// The birth date positions contain something other than digits.
    #[error("birth date contains non-numeric characters: \"{0}\"")]
    NonNumericDate(String),

    /// A name-derived position holds a character outside its class
    /// (letter, vowel or consonant).
    #[error("name characters of the CURP are malformed: \"{0}\"")]
    InvalidNameCharacters(String),

    /// The first four characters spell an inconvenient word that the
    /// issuing authority always censors.
    #[error("CURP starts with uncensored inconvenient word \"{0}\"")]
    UncensoredWord(String),

    /// The birth date is numeric but does not exist in the calendar.
    #[error("invalid birth date: {year:04}-{month:02}-{day:02}")]
    Date {
        /// Resolved four-digit year.
        year: i32,
        /// Month as encoded.
        month: u32,
        /// Day as encoded.
        day: u32,
    },

    /// The sex position is not `H` or `M`.
    #[error("invalid sex code {0:?} (expected H or M)")]
    Sex(char),

    /// The region code is not one of the 33 known entries.
    #[error("unknown birth region code \"{0}\"")]
    Region(String),

    /// The given name does not match the CURP.
    #[error("given name \"{0}\" does not match the CURP")]
    Name(String),

    /// The first surname does not match the CURP.
    #[error("first surname \"{0}\" does not match the CURP")]
    FirstSurname(String),

    /// The second surname does not match the CURP.
    #[error("second surname \"{0}\" does not match the CURP")]
    SecondSurname(String),

    /// The full name cannot be split consistently with the CURP.
    #[error("full name \"{0}\" does not match the CURP")]
    FullName(String),
}

/// Coarse classification of a [`CurpError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong code length.
    Length,
    /// Checksum mismatch.
    Verification,
    /// Malformed field (charset, name classes, non-numeric date, uncensored word).
    Value,
    /// Calendrically invalid birth date.
    Date,
    /// Invalid sex code.
    Sex,
    /// Unknown region code.
    Region,
    /// Given name mismatch.
    Name,
    /// First surname mismatch.
    FirstSurname,
    /// Second surname mismatch.
    SecondSurname,
    /// Full name mismatch.
    FullName,
}

impl ErrorKind {
    /// Whether this kind reports a supplied name that disagrees with the code,
    /// as opposed to a malformed code.
    pub fn is_name_mismatch(&self) -> bool {
        matches!(
            self,
            Self::Name | Self::FirstSurname | Self::SecondSurname | Self::FullName
        )
    }
}

impl CurpError {
    /// The classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Length { .. } => ErrorKind::Length,
            Self::Verification { .. } => ErrorKind::Verification,
            Self::InvalidCharacter { .. }
            | Self::NonNumericDate(_)
            | Self::InvalidNameCharacters(_)
            | Self::UncensoredWord(_) => ErrorKind::Value,
            Self::Date { .. } => ErrorKind::Date,
            Self::Sex(_) => ErrorKind::Sex,
            Self::Region(_) => ErrorKind::Region,
            Self::Name(_) => ErrorKind::Name,
            Self::FirstSurname(_) => ErrorKind::FirstSurname,
            Self::SecondSurname(_) => ErrorKind::SecondSurname,
            Self::FullName(_) => ErrorKind::FullName,
        }
    }
}
