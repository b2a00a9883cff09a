//! Bank account number rule
//!
//! The add-employee form only accepts an account number that, once trimmed at
//! both ends, is 8 to 20 ASCII digits. There is no checksum and no
//! bank-specific rule; the pattern is deliberately loose.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum number of digits in an account number (inclusive)
pub const MIN_DIGITS: usize = 8;

/// Maximum number of digits in an account number (inclusive)
pub const MAX_DIGITS: usize = 20;

/// The accept/reject rule. `[0-9]` rather than `\d`, which is Unicode-aware.
static ACCOUNT_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8,20}$").unwrap());

/// Trim the way a browser's `String.prototype.trim` does.
///
/// JS whitespace includes U+FEFF but not U+0085, unlike `char::is_whitespace`.
pub fn trim_js_whitespace(raw: &str) -> &str {
    raw.trim_matches(|c: char| c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}'))
}

/// Why an account number was rejected.
///
/// The accept/reject decision is made by the pattern alone; this enum only
/// explains a rejection for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountNumberError {
    #[error("account number is empty")]
    Empty,

    #[error("account number contains non-digit {character:?} at position {position}")]
    NonDigit { character: char, position: usize },

    #[error("account number has {digits} digits, expected at least {MIN_DIGITS}")]
    TooShort { digits: usize },

    #[error("account number has {digits} digits, expected at most {MAX_DIGITS}")]
    TooLong { digits: usize },
}

impl AccountNumberError {
    /// Classify a trimmed value that failed the pattern
    fn classify(trimmed: &str) -> Self {
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if let Some((position, character)) = trimmed
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_digit())
        {
            return Self::NonDigit {
                character,
                position,
            };
        }
        let digits = trimmed.len();
        if digits < MIN_DIGITS {
            Self::TooShort { digits }
        } else {
            Self::TooLong { digits }
        }
    }
}

/// A trimmed account number that matched the rule
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BankAccountNumber(String);

impl BankAccountNumber {
    /// Trim `raw` at both ends and check it against the rule.
    ///
    /// Internal whitespace is not removed, so `"1234 5678"` is rejected.
    pub fn parse(raw: &str) -> Result<Self, AccountNumberError> {
        let trimmed = trim_js_whitespace(raw);
        if ACCOUNT_NUMBER_RE.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(AccountNumberError::classify(trimmed))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn digit_count(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for BankAccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BankAccountNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Shorthand for `BankAccountNumber::parse(raw).is_ok()`
pub fn is_valid_account_number(raw: &str) -> bool {
    BankAccountNumber::parse(raw).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_boundaries() {
        assert!(is_valid_account_number("12345678"));
        assert!(!is_valid_account_number("1234567"));
        assert!(is_valid_account_number("12345678901234567890"));
        assert!(!is_valid_account_number("123456789012345678901"));
    }

    #[test]
    fn test_padded_value_is_trimmed() {
        let parsed = BankAccountNumber::parse("  123456789  ").unwrap();
        assert_eq!(parsed.as_str(), "123456789");
        assert_eq!(parsed.digit_count(), 9);
    }

    #[test]
    fn test_tabs_and_newlines_trimmed() {
        assert!(is_valid_account_number("\t00012345\n"));
    }

    #[test]
    fn test_byte_order_mark_trimmed() {
        assert!(is_valid_account_number("\u{FEFF}12345678"));
        assert!(is_valid_account_number("12345678\u{FEFF}"));
        assert_eq!(
            BankAccountNumber::parse("\u{FEFF} 12345678").unwrap().as_str(),
            "12345678"
        );
    }

    #[test]
    fn test_next_line_not_trimmed() {
        assert_eq!(
            BankAccountNumber::parse("12345678\u{0085}"),
            Err(AccountNumberError::NonDigit {
                character: '\u{0085}',
                position: 8
            })
        );
        assert!(!is_valid_account_number("\u{0085}12345678"));
    }

    #[test]
    fn test_unicode_spaces_trimmed() {
        // no-break space, ideographic space, line separator
        assert!(is_valid_account_number("\u{00A0}12345678\u{3000}"));
        assert!(is_valid_account_number("12345678\u{2028}"));
    }

    #[test]
    fn test_empty_and_blank_rejected() {
        assert_eq!(
            BankAccountNumber::parse(""),
            Err(AccountNumberError::Empty)
        );
        assert_eq!(
            BankAccountNumber::parse("   "),
            Err(AccountNumberError::Empty)
        );
    }

    #[test]
    fn test_internal_whitespace_rejected() {
        assert_eq!(
            BankAccountNumber::parse("1234 5678"),
            Err(AccountNumberError::NonDigit {
                character: ' ',
                position: 4
            })
        );
    }

    #[test]
    fn test_separators_and_signs_rejected() {
        assert!(!is_valid_account_number("1234-5678"));
        assert!(!is_valid_account_number("+12345678"));
        assert!(!is_valid_account_number("-12345678"));
        assert!(!is_valid_account_number("12345678A"));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic digits are Unicode digits but not [0-9]
        assert!(!is_valid_account_number("١٢٣٤٥٦٧٨"));
        // Fullwidth digits
        assert!(!is_valid_account_number("１２３４５６７８"));
    }

    #[test]
    fn test_classification() {
        assert_eq!(
            BankAccountNumber::parse("1234567"),
            Err(AccountNumberError::TooShort { digits: 7 })
        );
        assert_eq!(
            BankAccountNumber::parse(&"9".repeat(21)),
            Err(AccountNumberError::TooLong { digits: 21 })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AccountNumberError::TooShort { digits: 3 };
        assert_eq!(
            err.to_string(),
            "account number has 3 digits, expected at least 8"
        );
    }

    proptest! {
        #[test]
        fn digits_in_range_accepted(
            digits in "[0-9]{8,20}",
            lead in "[ \t\n]{0,4}",
            trail in "[ \t\n]{0,4}",
        ) {
            let raw = format!("{lead}{digits}{trail}");
            let parsed = BankAccountNumber::parse(&raw);
            prop_assert_eq!(parsed.map(|n| n.to_string()), Ok(digits));
        }

        #[test]
        fn too_few_digits_rejected(digits in "[0-9]{0,7}") {
            prop_assert!(!is_valid_account_number(&digits));
        }

        #[test]
        fn too_many_digits_rejected(digits in "[0-9]{21,40}") {
            prop_assert!(!is_valid_account_number(&digits));
        }

        #[test]
        fn any_non_digit_rejected(
            head in "[0-9]{4,10}",
            bad in "[^0-9\\s]",
            tail in "[0-9]{4,10}",
        ) {
            let raw = format!("{head}{bad}{tail}");
            prop_assert!(
                matches!(
                    BankAccountNumber::parse(&raw),
                    Err(AccountNumberError::NonDigit { .. })
                ),
                "{:?} should be rejected as non-digit",
                raw
            );
        }
    }
}
