//! # Field Layout
//!
//! Fixed positions of every semantic field inside the 18-character code.
//!
//! ```text
//!  0 1 2 3 | 4 5 6 7 8 9 | 10 | 11 12 | 13 14 15 | 16 | 17
//!  A a B N |  Y Y M M D D |  S |  R R  |  A  B  N |  H |  V
//! ```
//!
//! `A`/`B`/`N` are the first surname, second surname and given name;
//! lowercase `a` is the first surname's internal vowel; the trailing
//! `A B N` triplet holds the internal consonants; `H` is the homoclave and
//! `V` the verification digit.

/// Length of every CURP.
pub const CURP_LENGTH: usize = 18;

/// A single-character field of the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// First letter of the first surname.
    SurnameAChar,
    /// First internal vowel of the first surname.
    SurnameAVowel,
    /// First letter of the second surname.
    SurnameBChar,
    /// First letter of the given name.
    NameChar,
    /// Sex code (`H` or `M`).
    Sex,
    /// First internal consonant of the first surname.
    SurnameAConsonant,
    /// First internal consonant of the second surname.
    SurnameBConsonant,
    /// First internal consonant of the given name.
    NameConsonant,
    /// Homoclave, disambiguates homonyms and birth century.
    Homonymy,
    /// Verification digit.
    Checksum,
}

impl Field {
    /// Zero-based offset into the code.
    pub const fn offset(self) -> usize {
        match self {
            Self::SurnameAChar => 0,
            Self::SurnameAVowel => 1,
            Self::SurnameBChar => 2,
            Self::NameChar => 3,
            Self::Sex => 10,
            Self::SurnameAConsonant => 13,
            Self::SurnameBConsonant => 14,
            Self::NameConsonant => 15,
            Self::Homonymy => 16,
            Self::Checksum => 17,
        }
    }
}

/// Two-digit year, offsets 4..6.
pub const YEAR: std::ops::Range<usize> = 4..6;
/// Two-digit month, offsets 6..8.
pub const MONTH: std::ops::Range<usize> = 6..8;
/// Two-digit day, offsets 8..10.
pub const DAY: std::ops::Range<usize> = 8..10;
/// Region code, offsets 11..13.
pub const REGION: std::ops::Range<usize> = 11..13;
/// Name-derived prefix, offsets 0..4. This is where inconvenient words appear.
pub const NAME_PREFIX: std::ops::Range<usize> = 0..4;

/// Read a single field from a code already known to be 18 ASCII characters.
///
/// Returns `'\0'` when the offset is out of range so that callers comparing
/// against letters simply fail to match.
pub fn char_at(code: &str, field: Field) -> char {
    code.as_bytes()
        .get(field.offset())
        .map(|b| *b as char)
        .unwrap_or('\0')
}

/// Read a multi-character range from a code, or `""` if out of range.
pub fn slice(code: &str, range: std::ops::Range<usize>) -> &str {
    code.get(range).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODE: &str = "POPC990709MGTSRL02";

    #[test]
    fn single_fields() {
        assert_eq!(char_at(CODE, Field::SurnameAChar), 'P');
        assert_eq!(char_at(CODE, Field::SurnameAVowel), 'O');
        assert_eq!(char_at(CODE, Field::SurnameBChar), 'P');
        assert_eq!(char_at(CODE, Field::NameChar), 'C');
        assert_eq!(char_at(CODE, Field::Sex), 'M');
        assert_eq!(char_at(CODE, Field::SurnameAConsonant), 'S');
        assert_eq!(char_at(CODE, Field::SurnameBConsonant), 'R');
        assert_eq!(char_at(CODE, Field::NameConsonant), 'L');
        assert_eq!(char_at(CODE, Field::Homonymy), '0');
        assert_eq!(char_at(CODE, Field::Checksum), '2');
    }

    #[test]
    fn ranges() {
        assert_eq!(slice(CODE, YEAR), "99");
        assert_eq!(slice(CODE, MONTH), "07");
        assert_eq!(slice(CODE, DAY), "09");
        assert_eq!(slice(CODE, REGION), "GT");
        assert_eq!(slice(CODE, NAME_PREFIX), "POPC");
    }

    #[test]
    fn out_of_range_is_harmless() {
        assert_eq!(char_at("AB", Field::Checksum), '\0');
        assert_eq!(slice("AB", REGION), "");
    }
}
