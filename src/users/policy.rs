use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    #[error("Password must be longer than 8 characters")]
    TooShort,
    #[error("Password must be less than 72 characters")]
    TooLong,
    #[error("Password must not start or end with empty spaces")]
    SurroundingSpaces,
    #[error("Password must contain an uppercase letter, a lowercase letter, a number, and a special character")]
    NotComplex,
}

lazy_static! {
    static ref UPPER_RE: Regex = Regex::new(r"[A-Z]").unwrap();
    static ref LOWER_RE: Regex = Regex::new(r"[a-z]").unwrap();
    static ref DIGIT_RE: Regex = Regex::new(r"[0-9]").unwrap();
    static ref SPECIAL_RE: Regex = Regex::new(r"[!@#$%^&]").unwrap();
}

/// Checks a plaintext password against the registration rules, returning the
/// first rule it breaks.
pub fn validate_password(password: &str) -> Result<(), PolicyViolation> {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LENGTH {
        return Err(PolicyViolation::TooShort);
    }
    if len > MAX_PASSWORD_LENGTH {
        return Err(PolicyViolation::TooLong);
    }
    if password.starts_with(' ') || password.ends_with(' ') {
        return Err(PolicyViolation::SurroundingSpaces);
    }
    let complex = UPPER_RE.is_match(password)
        && LOWER_RE.is_match(password)
        && DIGIT_RE.is_match(password)
        && SPECIAL_RE.is_match(password);
    if !complex {
        return Err(PolicyViolation::NotComplex);
    }
    Ok(())
}
