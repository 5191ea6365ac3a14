//! Formatting and validation of the raw text typed in the onboarding forms.
//!
//! Every function takes the field value as a plain `&str` and either returns the
//! masked value or a [`ValidationError`] carrying the message to show the user.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Brazilian mobile number, `(NN) NNNNN-NNNN` with every separator optional.
const PHONE_PATTERN: &str = r"^\(?[0-9]{2}\)?\s?[0-9]{5}-?[0-9]{4}$";

/// Length of a fully typed `DD/MM/YYYY` date.
pub const DATE_MASK_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", self.message())]
    InvalidPhone,
    #[error("{}", self.message())]
    MissingSurname,
    #[error("{}", self.message())]
    CodeNotNumeric,
    #[error("{}", self.message())]
    CodeTooLong,
}

impl ValidationError {
    /// Message to attach to the form field that failed.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidPhone => "invalid phone number",
            Self::MissingSurname => "please enter at least one surname",
            Self::CodeNotNumeric => "code must contain only numbers",
            Self::CodeTooLong => "code is too long",
        }
    }
}

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("Phone pattern is a valid regex"))
}

/// Check a phone number as typed. The value is not normalized first, so
/// surrounding whitespace makes it invalid.
pub fn validate_phone(raw: &str) -> Result<(), ValidationError> {
    if phone_regex().is_match(raw) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

/// Progressively mask a date as `DD/MM/YYYY` while it is being typed.
///
/// Anything that is not an ASCII digit is dropped, separators are inserted after
/// the day and the month, and the result never exceeds [`DATE_MASK_LEN`]
/// characters. Applying it to its own output gives the same output.
pub fn format_date(raw: &str) -> String {
    let mut date: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if date.len() > 2 {
        date.insert(2, '/');
    }
    if date.len() > 5 {
        date.insert(5, '/');
    }

    date.truncate(DATE_MASK_LEN);
    date
}

/// A full name is a given name followed by at least one surname.
pub fn validate_full_name(raw: &str) -> Result<(), ValidationError> {
    let words = raw.trim().split(' ').filter(|w| !w.is_empty()).count();
    if words >= 2 {
        Ok(())
    } else {
        Err(ValidationError::MissingSurname)
    }
}

/// Format check of a confirmation code being typed: digits only, at most
/// `max_len` of them. An empty or partial code is fine.
pub fn check_code(raw: &str, max_len: usize) -> Result<(), ValidationError> {
    if !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::CodeNotNumeric);
    }
    if raw.len() > max_len {
        return Err(ValidationError::CodeTooLong);
    }
    Ok(())
}
