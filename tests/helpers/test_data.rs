// Test Data Factory
//
// Generates unique test data so tests sharing a database do not collide on
// the email and ISBN unique indexes.

use bookshelf::books::BookRequest;
use bookshelf::core::EntityId;
use rust_decimal::Decimal;
use uuid::Uuid;

pub struct TestDataFactory;

impl TestDataFactory {
    /// Unique, valid, lowercase email
    pub fn random_email() -> String {
        format!("author-{}@example.com", Uuid::new_v4().simple())
    }

    /// Unique 13-character ISBN-like string
    pub fn random_isbn() -> String {
        let digits: String = format!("{:020}", Uuid::new_v4().as_u128() % 10u128.pow(20))
            .chars()
            .take(10)
            .collect();
        format!("978{}", digits)
    }

    pub fn book_request(author_id: EntityId, price: Decimal) -> BookRequest {
        BookRequest {
            title: "The Rust Programming Language".to_string(),
            isbn: Self::random_isbn(),
            price,
            description: "An introductory book about Rust".to_string(),
            author_id,
        }
    }
}
