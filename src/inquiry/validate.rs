//! Syntactic field validators
//!
//! Intentionally shallow checks: no locale-aware phone parsing, no MX/DNS
//! lookups. The backend does its own authoritative validation.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // local@domain.tld shape, nothing more
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();

    // Digits plus common phone punctuation
    static ref PHONE_CHARS_REGEX: Regex = Regex::new(r"^[\d\s+\-()]+$").unwrap();
}

/// True iff `s` looks like `local@domain.tld`.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_REGEX.is_match(s)
}

/// True iff `s` contains only digits, spaces, `+`, `-`, `(`, `)` and at
/// least 10 digit characters after stripping everything else.
pub fn is_valid_phone(s: &str) -> bool {
    PHONE_CHARS_REGEX.is_match(s) && s.chars().filter(char::is_ascii_digit).count() >= 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimal_email() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("jane.doe+offsets@example.org"));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("spaces in@local.part"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn accepts_formatted_phone_numbers() {
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(is_valid_phone("+44 20 7946 0958"));
        assert!(is_valid_phone("5551234567"));
    }

    #[test]
    fn rejects_short_or_lettered_phones() {
        // Only 7 digits
        assert!(!is_valid_phone("555-123"));
        assert!(!is_valid_phone("555-123-4567 ext 9"));
        assert!(!is_valid_phone(""));
    }
}
