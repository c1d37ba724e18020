// Author input rules. Validation runs on the trimmed value; normalization
// is applied separately right before the author is persisted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{AppError, Result};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 254;

/// Capacity of a MySQL `TEXT` column
pub const BIO_MAX_BYTES: usize = 65_535;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Name must be 2..=100 characters after trimming
pub fn validate_name(name: &str) -> Result<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(AppError::validation("author name cannot be empty"));
    }

    let length = name.chars().count();

    if length < NAME_MIN_CHARS {
        return Err(AppError::validation(format!(
            "author name must be at least {} characters long",
            NAME_MIN_CHARS
        )));
    }

    if length > NAME_MAX_CHARS {
        return Err(AppError::validation(format!(
            "author name must be at most {} characters long",
            NAME_MAX_CHARS
        )));
    }

    Ok(())
}

/// Email must be non-empty, well-formed and at most 254 characters
pub fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(AppError::validation("email cannot be empty"));
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(AppError::validation("invalid email format"));
    }

    if email.chars().count() > EMAIL_MAX_CHARS {
        return Err(AppError::validation(format!(
            "email must be at most {} characters long",
            EMAIL_MAX_CHARS
        )));
    }

    Ok(())
}

/// Bio is optional; its trimmed UTF-8 length must fit the column
pub fn validate_bio(bio: &str) -> Result<()> {
    if bio.trim().len() > BIO_MAX_BYTES {
        return Err(AppError::validation(format!(
            "author bio must be at most {} bytes long",
            BIO_MAX_BYTES
        )));
    }
    Ok(())
}

/// Canonical stored form of an email: trimmed and lowercased
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
