use std::sync::Arc;

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::storage::MySqlRepository;
use crate::core::{EntityId, Repository, Result};
use crate::modules::books::models::Book;

/// Book lookups layered on the generic repository
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Generic CRUD operations for books
    fn base(&self) -> &dyn Repository<Book, EntityId>;

    /// Non-deleted books owned by an author, ordered by ID
    async fn get_by_author(&self, author_id: EntityId) -> Result<Vec<Book>>;
}

pub type BookRepositoryArc = Arc<dyn BookRepository>;

pub struct MySqlBookRepository {
    base: MySqlRepository<Book>,
}

impl MySqlBookRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            base: MySqlRepository::new(pool),
        }
    }
}

#[async_trait]
impl BookRepository for MySqlBookRepository {
    fn base(&self) -> &dyn Repository<Book, EntityId> {
        &self.base
    }

    async fn get_by_author(&self, author_id: EntityId) -> Result<Vec<Book>> {
        self.base.find_where("author_id", author_id).await
    }
}
