use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::books::models::BookRequest;

pub const TITLE_MAX_CHARS: usize = 255;
pub const ISBN_MAX_CHARS: usize = 20;

/// Scale stored by the `price` column
pub const PRICE_SCALE: u32 = 2;

/// Largest value a `DECIMAL(12, 2)` column holds: 9999999999.99
pub const PRICE_MAX: Decimal =
    Decimal::from_parts(3_567_587_327, 232, 0, false, PRICE_SCALE);

/// Capacity of a MySQL `TEXT` column
pub const DESCRIPTION_MAX_BYTES: usize = 65_535;

/// Validate a create/replace request before any storage access
pub fn validate_book(request: &BookRequest) -> Result<()> {
    validate_title(&request.title)?;
    validate_isbn(&request.isbn)?;
    validate_price(request.price)?;
    validate_description(&request.description)?;

    if request.author_id == 0 {
        return Err(AppError::validation("invalid author ID"));
    }

    Ok(())
}

pub fn validate_title(title: &str) -> Result<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(AppError::validation("book title cannot be empty"));
    }

    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(AppError::validation(format!(
            "book title must be at most {} characters long",
            TITLE_MAX_CHARS
        )));
    }

    Ok(())
}

pub fn validate_isbn(isbn: &str) -> Result<()> {
    let isbn = isbn.trim();

    if isbn.is_empty() {
        return Err(AppError::validation("ISBN cannot be empty"));
    }

    if isbn.chars().count() > ISBN_MAX_CHARS {
        return Err(AppError::validation(format!(
            "ISBN must be at most {} characters long",
            ISBN_MAX_CHARS
        )));
    }

    Ok(())
}

pub fn validate_price(price: Decimal) -> Result<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(AppError::validation("book price cannot be negative"));
    }

    // Checked after rounding, which is what gets stored
    if normalize_price(price) > PRICE_MAX {
        return Err(AppError::validation(format!(
            "book price cannot exceed {}",
            PRICE_MAX
        )));
    }

    Ok(())
}

/// Description is optional; its trimmed UTF-8 length must fit the column
pub fn validate_description(description: &str) -> Result<()> {
    if description.trim().len() > DESCRIPTION_MAX_BYTES {
        return Err(AppError::validation(format!(
            "book description must be at most {} bytes long",
            DESCRIPTION_MAX_BYTES
        )));
    }
    Ok(())
}

/// Price rounded to the stored scale
pub fn normalize_price(price: Decimal) -> Decimal {
    price.round_dp(PRICE_SCALE)
}
