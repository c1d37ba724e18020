use async_trait::async_trait;

use crate::core::storage::{MemoryRepository, MemoryTable};
use crate::core::{AppError, EntityId, Repository, Result};
use crate::modules::authors::models::Author;
use crate::modules::authors::repositories::AuthorRepository;
use crate::modules::books::models::Book;

/// In-memory implementation of the author repository.
#[derive(Debug)]
pub struct MemoryAuthorRepository {
    base: MemoryRepository<Author>,
    books: MemoryTable<Book>,
}

impl MemoryAuthorRepository {
    /// Creates a repository over shared author and book tables.
    ///
    /// # Arguments
    ///
    /// * `authors` - Table backing the generic author operations
    /// * `books` - Table read when eagerly loading an author's books
    pub fn new(authors: MemoryTable<Author>, books: MemoryTable<Book>) -> Self {
        Self {
            base: MemoryRepository::new(authors),
            books,
        }
    }

    pub fn table(&self) -> &MemoryTable<Author> {
        self.base.table()
    }
}

#[async_trait]
impl AuthorRepository for MemoryAuthorRepository {
    fn base(&self) -> &dyn Repository<Author, EntityId> {
        &self.base
    }

    async fn get_by_email(&self, email: &str) -> Result<Author> {
        self.base
            .table()
            .select(|author| author.email == email)
            .await
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found(format!("author with email {} not found", email)))
    }

    async fn get_with_books(&self, id: EntityId) -> Result<Author> {
        let mut author = self.base.get_by_id(id).await?;
        let books = self.books.select(|book| book.author_id == id).await;

        author.books = Some(books);
        Ok(author)
    }
}
