use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::storage::{MySqlQuery, SqlEntity};
use crate::core::{timestamp, Entity, EntityId};

/// Represents a book owned by exactly one author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Book {
    /// Auto-assigned identity (0 until persisted)
    pub id: EntityId,

    pub title: String,

    /// Unique among non-deleted books
    pub isbn: String,

    /// Non-negative, two decimal places
    pub price: Decimal,

    pub description: String,

    /// Owning author; must reference an existing row
    pub author_id: EntityId,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Soft-delete marker
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Book {
    /// Create an unsaved book from already-normalized fields
    pub fn new(
        title: String,
        isbn: String,
        price: Decimal,
        description: String,
        author_id: EntityId,
    ) -> Self {
        let now = timestamp::now();
        Self {
            id: 0,
            title,
            isbn,
            price,
            description,
            author_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

impl Entity for Book {
    const NAME: &'static str = "Book";

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn set_deleted_at(&mut self, at: Option<DateTime<Utc>>) {
        self.deleted_at = at;
    }

    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        vec![("isbn", self.isbn.clone())]
    }
}

impl SqlEntity for Book {
    const TABLE: &'static str = "books";
    const COLUMNS: &'static [&'static str] =
        &["title", "isbn", "price", "description", "author_id"];

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query
            .bind(&self.title)
            .bind(&self.isbn)
            .bind(self.price)
            .bind(&self.description)
            .bind(self.author_id)
    }
}

/// Request body for creating or replacing a book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRequest {
    pub title: String,
    pub isbn: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    pub author_id: EntityId,
}
