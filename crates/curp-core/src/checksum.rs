//! # Verification Digit
//!
//! The last character of a CURP is a weighted checksum over the first 17.
//!
//! Each character is mapped to its base-36 value (`0-9` → 0-9, `A-Z` →
//! 10-35), except that every letter after `N` is shifted up by one. The gap
//! is the slot of `Ñ`, which the alphabet reserves but the code never uses,
//! so the weighting is effectively base 37.
//!
//! ```text
//! sum   = Σ value(code[i]) × (18 − i)      for i in 0..17
//! digit = (10 − sum mod 10) mod 10
//! ```

use crate::error::CurpError;
use crate::layout::{Field, CURP_LENGTH};

/// Value of `N`; letters after it are shifted to leave room for `Ñ`.
const N_VALUE: u32 = 23;

/// Map a code character to its checksum value.
///
/// Returns `None` for anything outside `0-9A-Z`.
pub fn char_value(c: char) -> Option<u32> {
    if !(c.is_ascii_digit() || c.is_ascii_uppercase()) {
        return None;
    }
    let value = c.to_digit(36)?;
    Some(if value > N_VALUE { value + 1 } else { value })
}

/// Weighted sum of the first 17 characters of `code`.
///
/// All 18 characters are checked against the charset, the verification
/// position included, even though it does not contribute to the sum.
///
/// # Errors
///
/// Returns [`CurpError::InvalidCharacter`] for the first character outside
/// `0-9A-Z`.
pub fn weighted_sum(code: &str) -> Result<u32, CurpError> {
    let mut sum = 0;
    for (position, c) in code.chars().enumerate().take(CURP_LENGTH) {
        let value =
            char_value(c).ok_or(CurpError::InvalidCharacter { position, found: c })?;
        if position < Field::Checksum.offset() {
            sum += value * (CURP_LENGTH - position) as u32;
        }
    }
    Ok(sum)
}

/// Convert a weighted sum to its verification digit.
pub fn sum_to_digit(sum: u32) -> char {
    let digit = (10 - sum % 10) % 10;
    char::from_digit(digit, 10).unwrap_or('0')
}

/// Compute the verification digit for a 17-character prefix.
///
/// # Errors
///
/// Returns [`CurpError::Length`] if `prefix` is not 17 characters, or
/// [`CurpError::InvalidCharacter`] if it contains anything outside `0-9A-Z`.
pub fn check_digit(prefix: &str) -> Result<char, CurpError> {
    let found = prefix.chars().count();
    if found != CURP_LENGTH - 1 {
        return Err(CurpError::Length { found });
    }
    Ok(sum_to_digit(weighted_sum(prefix)?))
}

/// Verify the last character of an 18-character `code`.
///
/// # Errors
///
/// - [`CurpError::Length`] if `code` is not 18 characters.
/// - [`CurpError::InvalidCharacter`] if any character is outside `0-9A-Z`.
/// - [`CurpError::Verification`] if the digit does not match.
pub fn verify(code: &str) -> Result<(), CurpError> {
    let length = code.chars().count();
    if length != CURP_LENGTH {
        return Err(CurpError::Length { found: length });
    }
    let expected = sum_to_digit(weighted_sum(code)?);
    let found = code
        .chars()
        .nth(Field::Checksum.offset())
        .ok_or(CurpError::Length { found: length })?;
    if expected != found {
        return Err(CurpError::Verification { expected, found });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_values_skip_enye_slot() {
        assert_eq!(char_value('0'), Some(0));
        assert_eq!(char_value('9'), Some(9));
        assert_eq!(char_value('A'), Some(10));
        assert_eq!(char_value('N'), Some(23));
        assert_eq!(char_value('O'), Some(25));
        assert_eq!(char_value('Z'), Some(36));
    }

    #[test]
    fn char_values_reject_outside_charset() {
        assert_eq!(char_value('a'), None);
        assert_eq!(char_value('Ñ'), None);
        assert_eq!(char_value('-'), None);
        assert_eq!(char_value(' '), None);
    }

    #[test]
    fn sum_to_digit_matches_last_decimal() {
        for sum in [0u32, 1, 9, 10, 11, 255, 1234, 99_999] {
            let last = sum % 10;
            let expected = if last == 0 { 0 } else { 10 - last };
            assert_eq!(sum_to_digit(sum), char::from_digit(expected, 10).unwrap());
        }
    }

    #[test]
    fn single_nonzero_character_sum() {
        // With every other position zero the sum has exactly one term.
        let charset = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
        for c in charset.chars() {
            let value = char_value(c).unwrap();
            for weight in 2..=18usize {
                let code = format!(
                    "{}{}{}",
                    "0".repeat(18 - weight),
                    c,
                    "0".repeat(weight - 1)
                );
                assert_eq!(weighted_sum(&code).unwrap(), value * weight as u32, "{code}");
            }
        }
    }

    #[test]
    fn known_codes_verify() {
        for code in [
            "POPC990709MGTSRL02",
            "MAGE981117MMNCRS05",
            "TAXA990915MNEMXM06",
            "SABC560626MDFLRN01",
        ] {
            assert!(verify(code).is_ok(), "{code}");
        }
    }

    #[test]
    fn check_digit_of_prefix() {
        assert_eq!(check_digit("POPC990709MGTSRL0").unwrap(), '2');
        assert_eq!(check_digit("SABC560626MDFLRN0").unwrap(), '1');
    }

    #[test]
    fn check_digit_rejects_wrong_prefix_length() {
        assert_eq!(
            check_digit("POPC990709MGTSRL"),
            Err(CurpError::Length { found: 16 })
        );
    }

    #[test]
    fn verify_rejects_wrong_code_length() {
        assert_eq!(
            verify("POPC990709MGTSRL02GARBAGE"),
            Err(CurpError::Length { found: 25 })
        );
        assert_eq!(
            verify("POPC990709MGTSRL0"),
            Err(CurpError::Length { found: 17 })
        );
        assert_eq!(verify(""), Err(CurpError::Length { found: 0 }));
    }

    #[test]
    fn mismatch_reports_both_digits() {
        let err = verify("POPC990709MGTSRL03").unwrap_err();
        assert_eq!(
            err,
            CurpError::Verification {
                expected: '2',
                found: '3'
            }
        );
    }

    #[test]
    fn invalid_verification_character_is_a_format_error() {
        let err = verify("POPC990709MGTSRL0#").unwrap_err();
        assert_eq!(
            err,
            CurpError::InvalidCharacter {
                position: 17,
                found: '#'
            }
        );
    }

    #[test]
    fn lowercase_is_rejected() {
        let err = verify("popc990709mgtsrl02").unwrap_err();
        assert!(matches!(err, CurpError::InvalidCharacter { position: 0, .. }));
    }
}
