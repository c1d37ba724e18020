use std::sync::Arc;

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::storage::MySqlRepository;
use crate::core::{AppError, EntityId, Repository, Result};
use crate::modules::authors::models::Author;
use crate::modules::books::models::Book;

/// Author lookups layered on the generic repository
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Generic CRUD operations for authors
    fn base(&self) -> &dyn Repository<Author, EntityId>;

    /// Find a non-deleted author by exact (already normalized) email
    async fn get_by_email(&self, email: &str) -> Result<Author>;

    /// Find a non-deleted author with all of its non-deleted books loaded
    async fn get_with_books(&self, id: EntityId) -> Result<Author>;
}

pub type AuthorRepositoryArc = Arc<dyn AuthorRepository>;

pub struct MySqlAuthorRepository {
    base: MySqlRepository<Author>,
    books: MySqlRepository<Book>,
}

impl MySqlAuthorRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            base: MySqlRepository::new(pool.clone()),
            books: MySqlRepository::new(pool),
        }
    }
}

#[async_trait]
impl AuthorRepository for MySqlAuthorRepository {
    fn base(&self) -> &dyn Repository<Author, EntityId> {
        &self.base
    }

    async fn get_by_email(&self, email: &str) -> Result<Author> {
        self.base
            .find_where("email", email.to_string())
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found(format!("author with email {} not found", email)))
    }

    async fn get_with_books(&self, id: EntityId) -> Result<Author> {
        let mut author = self.base.get_by_id(id).await?;
        let books = self.books.find_where("author_id", id).await?;

        author.books = Some(books);
        Ok(author)
    }
}
