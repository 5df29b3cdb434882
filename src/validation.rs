//! Demo Input Validation

use regex::Regex;
use std::sync::OnceLock;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
    })
}

/// Error text for the email demo field; empty input is not an error
pub fn email_error(value: &str) -> String {
    if value.is_empty() || email_pattern().is_match(value) {
        String::new()
    } else {
        "Please enter a valid email".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_error() {
        assert_eq!(email_error(""), "");
        assert_eq!(email_error("user@example.com"), "");
        assert_eq!(email_error("user"), "Please enter a valid email");
        assert_eq!(email_error("user@host"), "Please enter a valid email");
        assert_eq!(email_error("two words@example.com"), "Please enter a valid email");
    }
}
