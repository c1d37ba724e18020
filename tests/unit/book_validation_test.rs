/// Unit tests for book validation
///
/// Validates:
/// - 0 <= price <= 9999999999.99, rounded to 2 decimal places before storage
/// - title and ISBN are required after trimming
use bookshelf::books::services::validation::{
    normalize_price, validate_book, validate_description, validate_isbn, validate_price,
    validate_title, DESCRIPTION_MAX_BYTES, ISBN_MAX_CHARS, PRICE_MAX, TITLE_MAX_CHARS,
};
use bookshelf::books::BookRequest;
use bookshelf::AppError;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

proptest! {
    #[test]
    fn prop_non_negative_prices_accepted(cents in 0i64..10_000_000) {
        let price = Decimal::new(cents, 2);
        prop_assert!(validate_price(price).is_ok());
        prop_assert_eq!(normalize_price(price), price);
    }

    #[test]
    fn prop_negative_prices_rejected(cents in 1i64..10_000_000) {
        let price = Decimal::new(-cents, 2);
        prop_assert!(matches!(validate_price(price), Err(AppError::Validation(_))));
    }

    #[test]
    fn prop_prices_above_column_capacity_rejected(extra_cents in 1i64..1_000_000_000) {
        let price = PRICE_MAX + Decimal::new(extra_cents, 2);
        prop_assert!(matches!(validate_price(price), Err(AppError::Validation(_))));
    }

    #[test]
    fn prop_normalized_price_has_at_most_two_decimals(raw in 0i64..1_000_000_000, scale in 0u32..6) {
        let price = normalize_price(Decimal::new(raw, scale));
        prop_assert!(price.scale() <= 2);
    }
}

#[test]
fn test_title_limits() {
    assert!(validate_title("Emma").is_ok());
    assert!(validate_title(&"t".repeat(TITLE_MAX_CHARS)).is_ok());
    assert!(validate_title(&"t".repeat(TITLE_MAX_CHARS + 1)).is_err());
    assert!(validate_title("  \t ").is_err());
}

#[test]
fn test_isbn_limits() {
    assert!(validate_isbn("978-0-14-143951-8").is_ok());
    assert!(validate_isbn(&"9".repeat(ISBN_MAX_CHARS)).is_ok());
    assert!(validate_isbn(&"9".repeat(ISBN_MAX_CHARS + 1)).is_err());
    assert!(validate_isbn("").is_err());
}

#[test]
fn test_zero_author_rejected() {
    let request = BookRequest {
        title: "Emma".to_string(),
        isbn: "9780141439587".to_string(),
        price: dec!(8.99),
        description: String::new(),
        author_id: 0,
    };

    let err = validate_book(&request).unwrap_err();
    assert_eq!(err.to_string(), "Validation error: invalid author ID");
}

#[test]
fn test_price_ceiling_matches_column() {
    assert_eq!(PRICE_MAX, dec!(9999999999.99));
    assert!(validate_price(PRICE_MAX).is_ok());
    assert!(validate_price(dec!(100000000000.00)).is_err());
}

#[test]
fn test_description_byte_limit() {
    assert!(validate_description(&"d".repeat(DESCRIPTION_MAX_BYTES)).is_ok());

    let request = BookRequest {
        title: "Emma".to_string(),
        isbn: "9780141439587".to_string(),
        price: dec!(8.99),
        description: "d".repeat(DESCRIPTION_MAX_BYTES + 1),
        author_id: 1,
    };
    assert!(matches!(validate_book(&request), Err(AppError::Validation(_))));
}
