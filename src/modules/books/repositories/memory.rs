use async_trait::async_trait;

use crate::core::storage::{MemoryRepository, MemoryTable};
use crate::core::{EntityId, Repository, Result};
use crate::modules::authors::models::Author;
use crate::modules::books::models::Book;
use crate::modules::books::repositories::BookRepository;

/// In-memory implementation of the book repository.
#[derive(Debug)]
pub struct MemoryBookRepository {
    base: MemoryRepository<Book>,
}

impl MemoryBookRepository {
    /// Creates a repository whose `author_id` must name a row of `authors`.
    pub fn new(books: MemoryTable<Book>, authors: MemoryTable<Author>) -> Self {
        Self {
            base: MemoryRepository::new(books).with_foreign_key(
                "author_id",
                |book: &Book| book.author_id,
                authors,
            ),
        }
    }

    pub fn table(&self) -> &MemoryTable<Book> {
        self.base.table()
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    fn base(&self) -> &dyn Repository<Book, EntityId> {
        &self.base
    }

    async fn get_by_author(&self, author_id: EntityId) -> Result<Vec<Book>> {
        Ok(self
            .base
            .table()
            .select(|book| book.author_id == author_id)
            .await)
    }
}
