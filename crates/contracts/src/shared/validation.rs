//! Field-level validation shared by the form drafts
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Field name -> message map produced by a failed submit
///
/// Field names are the draft's own keys ("name", "price", "variations.0.stock").
/// An empty map means the submission is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "invalid form ({joined})")
    }
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; the first message for a field wins
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(value)` when no error was recorded
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            log::warn!("form rejected: {}", self);
            Err(self)
        }
    }

    /// Check that a text field is not blank; returns the trimmed value
    pub fn require(&mut self, field: &str, value: &str, message: &str) -> String {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.add(field, message);
        }
        trimmed.to_string()
    }
}

/// Parse a strictly positive amount ("15000", "15000.5")
pub fn parse_positive_amount(value: &str) -> Option<f64> {
    let amount: f64 = value.trim().parse().ok()?;
    (amount.is_finite() && amount > 0.0).then_some(amount)
}

/// Parse a non-negative integer count
pub fn parse_count(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

/// Keep only ASCII digits ("Rp 1.500.000" -> "1500000")
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Permissive email shape: some whitespace-free token contains
/// `something@something.something`
///
/// The parts may themselves hold `@` or `.`, and text around the token is
/// ignored, so "Jane jane@doe.com" and "a@b.c." both pass.
pub fn looks_like_email(value: &str) -> bool {
    value.split_whitespace().any(token_has_email_shape)
}

fn token_has_email_shape(token: &str) -> bool {
    let bytes = token.as_bytes();
    // The earliest `@` after the first byte leaves the most room for the domain.
    let Some(at) = bytes.iter().skip(1).position(|&b| b == b'@').map(|i| i + 1) else {
        return false;
    };
    bytes
        .iter()
        .enumerate()
        .any(|(i, &b)| b == b'.' && i > at + 1 && i + 1 < bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_first_message_wins() {
        let mut errors = FieldErrors::new();
        errors.add("name", "first");
        errors.add("name", "second");
        assert_eq!(errors.get("name"), Some("first"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(FieldErrors::new().into_result(7), Ok(7));

        let mut errors = FieldErrors::new();
        errors.add("email", "Email harus diisi.");
        let err = errors.into_result(7).unwrap_err();
        assert!(err.contains("email"));
        assert!(err.to_string().contains("Email harus diisi."));
    }

    #[test]
    fn test_require_trims() {
        let mut errors = FieldErrors::new();
        assert_eq!(errors.require("name", "  Keripik  ", "x"), "Keripik");
        assert!(errors.is_empty());
        errors.require("name", "   ", "Nama harus diisi.");
        assert_eq!(errors.get("name"), Some("Nama harus diisi."));
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_positive_amount("15000"), Some(15000.0));
        assert_eq!(parse_positive_amount("0"), None);
        assert_eq!(parse_positive_amount("-5"), None);
        assert_eq!(parse_positive_amount("abc"), None);
        assert_eq!(parse_count("0"), Some(0));
        assert_eq!(parse_count(" 12 "), Some(12));
        assert_eq!(parse_count("-1"), None);
        assert_eq!(parse_count("1.5"), None);
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("Rp 1.500.000"), "1500000");
        assert_eq!(digits_only("abc"), "");
    }

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("mamat@gun.shop.com"));
        assert!(looks_like_email("a@b.c"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.c"));
        assert!(!looks_like_email("a@.c"));
        assert!(!looks_like_email(""));
        assert!(!looks_like_email("   "));
    }

    #[test]
    fn test_looks_like_email_matches_anywhere_in_text() {
        assert!(looks_like_email("a@b.c."));
        assert!(looks_like_email("a@b.."));
        assert!(looks_like_email("Jane jane@doe.com"));
        assert!(looks_like_email("x@y.z extra"));
        assert!(looks_like_email("a b@c.d"));
        assert!(looks_like_email("a@@b.c"));
        assert!(!looks_like_email("a@b. c"));
        assert!(!looks_like_email("a @b.c"));
    }
}
