//! Local credential checks for the login form.
//!
//! There is no backend: credentials that pass these checks are accepted and
//! turned into an `Identity` for `SessionStore::login`.

use std::sync::LazyLock;

use regex::Regex;

use crate::session::Identity;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

pub const INVALID_EMAIL: &str = "Please enter a valid email.";

/// Per-field validation messages. A `None` field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl CredentialErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn password_error(min_len: usize) -> String {
    format!("Password must be at least {min_len} characters.")
}

/// Checks both fields and returns the identity on success.
///
/// Both fields are always checked so the form can show every message at once.
pub fn validate(email: &str, password: &str, min_len: usize) -> Result<Identity, CredentialErrors> {
    let errors = CredentialErrors {
        email: (!is_valid_email(email)).then(|| INVALID_EMAIL.to_string()),
        password: (password.chars().count() < min_len).then(|| password_error(min_len)),
    };

    if errors.is_empty() {
        Ok(Identity::new(email))
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credentials() {
        let identity = validate("a@b.com", "secret", 6).unwrap();
        assert_eq!(identity.email, "a@b.com");
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("@b.com"));
    }

    #[test]
    fn test_both_errors_reported() {
        let errors = validate("nope", "123", 6).unwrap_err();
        assert_eq!(errors.email.as_deref(), Some(INVALID_EMAIL));
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must be at least 6 characters.")
        );
    }

    #[test]
    fn test_password_length_counts_chars() {
        assert!(validate("a@b.com", "ééééé", 6).is_err());
        assert!(validate("a@b.com", "éééééé", 6).is_ok());
    }

    #[test]
    fn test_only_password_error() {
        let errors = validate("a@b.com", "12345", 6).unwrap_err();
        assert!(errors.email.is_none());
        assert!(errors.password.is_some());
    }
}
