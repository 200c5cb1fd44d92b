//! Field guards shared by the employee and phone constructors.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::{DomainError, DomainResult};

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

/// Reject blank values; returns the trimmed value.
pub fn required(value: &str, field: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Require a `<local>@<domain>.<tld>` shaped address; returns the trimmed value.
pub fn email(value: &str, field: &str) -> DomainResult<String> {
    let value = required(value, field)?;
    if !EMAIL_SHAPE.is_match(&value) {
        return Err(DomainError::validation(format!(
            "{} is not a valid email",
            field
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        assert_eq!(
            required("", "first_name"),
            Err(DomainError::validation("first_name is required"))
        );
        assert!(required("   ", "first_name").is_err());
    }

    #[test]
    fn test_required_trims() {
        assert_eq!(required("  Ana ", "first_name").unwrap(), "Ana");
    }

    #[test]
    fn test_email_accepts_valid_shape() {
        assert_eq!(email("test@domain.com", "email").unwrap(), "test@domain.com");
        assert_eq!(email(" a@b.io ", "email").unwrap(), "a@b.io");
    }

    #[test]
    fn test_email_rejects_invalid_shape() {
        for bad in ["invalid", "no-at.example.com", "missing@tld", "sp ace@x.com", ""] {
            assert!(email(bad, "email").is_err(), "{bad:?} should be rejected");
        }
    }
}
