// An author owns zero or more books. Authors are never removed from
// storage: deletion sets `deleted_at` and every default read skips the row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::storage::{MySqlQuery, SqlEntity};
use crate::core::{timestamp, Entity, EntityId};
use crate::modules::books::models::Book;

/// Represents a book author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Author {
    /// Auto-assigned identity (0 until persisted)
    pub id: EntityId,

    pub name: String,

    /// Unique among non-deleted authors, stored lowercase
    pub email: String,

    pub bio: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Soft-delete marker
    pub deleted_at: Option<DateTime<Utc>>,

    /// Books owned by this author; `None` unless eagerly loaded
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub books: Option<Vec<Book>>,
}

impl Author {
    /// Create an unsaved author from already-normalized fields
    pub fn new(name: String, email: String, bio: String) -> Self {
        let now = timestamp::now();
        Self {
            id: 0,
            name,
            email,
            bio,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            books: None,
        }
    }
}

impl Entity for Author {
    const NAME: &'static str = "Author";

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
        vec![("email", self.email.clone())]
    }
}

impl SqlEntity for Author {
    const TABLE: &'static str = "authors";
    const COLUMNS: &'static [&'static str] = &["name", "email", "bio"];

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query.bind(&self.name).bind(&self.email).bind(&self.bio)
    }
}

/// Request body for creating or replacing an author
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: String,
}
