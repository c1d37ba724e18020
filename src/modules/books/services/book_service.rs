use crate::core::{AppError, EntityId, Repository, Result};
use crate::modules::authors::repositories::AuthorRepositoryArc;
use crate::modules::books::models::{Book, BookRequest};
use crate::modules::books::repositories::BookRepositoryArc;
use crate::modules::books::services::validation::{normalize_price, validate_book};

/// Service for book business logic
pub struct BookService {
    book_repo: BookRepositoryArc,
    author_repo: AuthorRepositoryArc,
}

impl BookService {
    pub fn new(book_repo: BookRepositoryArc, author_repo: AuthorRepositoryArc) -> Self {
        Self {
            book_repo,
            author_repo,
        }
    }

    /// Create a book for an existing author
    pub async fn create_book(&self, request: BookRequest) -> Result<Book> {
        validate_book(&request)?;
        self.ensure_author_exists(request.author_id).await?;

        let book = Book::new(
            request.title.trim().to_string(),
            request.isbn.trim().to_string(),
            normalize_price(request.price),
            request.description.trim().to_string(),
            request.author_id,
        );

        let created = self
            .book_repo
            .base()
            .create(book)
            .await
            .map_err(|e| e.context("failed to create book"))?;

        tracing::info!(
            book_id = created.id,
            author_id = created.author_id,
            isbn = %created.isbn,
            "Book created"
        );

        Ok(created)
    }

    /// Get a non-deleted book by ID
    pub async fn get_book_by_id(&self, id: EntityId) -> Result<Book> {
        ensure_valid_id(id)?;

        self.book_repo
            .base()
            .get_by_id(id)
            .await
            .map_err(|e| lookup_error(e, id))
    }

    /// List all non-deleted books
    pub async fn get_all_books(&self) -> Result<Vec<Book>> {
        self.book_repo
            .base()
            .get_all()
            .await
            .map_err(|e| e.context("failed to retrieve books"))
    }

    /// List the non-deleted books of an existing author
    pub async fn get_books_by_author(&self, author_id: EntityId) -> Result<Vec<Book>> {
        if author_id == 0 {
            return Err(AppError::validation("invalid author ID"));
        }
        self.ensure_author_exists(author_id).await?;

        self.book_repo
            .get_by_author(author_id)
            .await
            .map_err(|e| e.context(format!("failed to retrieve books of author {}", author_id)))
    }

    /// Replace an existing book's fields
    pub async fn update_book(&self, id: EntityId, request: BookRequest) -> Result<Book> {
        ensure_valid_id(id)?;
        validate_book(&request)?;

        let mut book = self
            .book_repo
            .base()
            .get_by_id(id)
            .await
            .map_err(|e| lookup_error(e, id))?;

        self.ensure_author_exists(request.author_id).await?;

        book.title = request.title.trim().to_string();
        book.isbn = request.isbn.trim().to_string();
        book.price = normalize_price(request.price);
        book.description = request.description.trim().to_string();
        book.author_id = request.author_id;

        let updated = self
            .book_repo
            .base()
            .update(book)
            .await
            .map_err(|e| write_error(e, id, "failed to update book"))?;

        tracing::info!(book_id = id, "Book updated");

        Ok(updated)
    }

    /// Soft-delete an existing book
    pub async fn delete_book(&self, id: EntityId) -> Result<()> {
        ensure_valid_id(id)?;

        self.book_repo
            .base()
            .get_by_id(id)
            .await
            .map_err(|e| lookup_error(e, id))?;

        self.book_repo
            .base()
            .delete(id)
            .await
            .map_err(|e| write_error(e, id, "failed to delete book"))?;

        tracing::info!(book_id = id, "Book deleted");

        Ok(())
    }

    async fn ensure_author_exists(&self, author_id: EntityId) -> Result<()> {
        self.author_repo
            .base()
            .get_by_id(author_id)
            .await
            .map(|_| ())
            .map_err(|e| match e {
                AppError::NotFound(_) => {
                    AppError::not_found(format!("author with ID {} not found", author_id))
                }
                other => other.context(format!("failed to retrieve author {}", author_id)),
            })
    }
}

fn ensure_valid_id(id: EntityId) -> Result<()> {
    if id == 0 {
        return Err(AppError::validation("invalid book ID"));
    }
    Ok(())
}

fn lookup_error(err: AppError, id: EntityId) -> AppError {
    write_error(err, id, &format!("failed to retrieve book {}", id))
}

fn write_error(err: AppError, id: EntityId, context: &str) -> AppError {
    match err {
        AppError::NotFound(_) => AppError::not_found(format!("book with ID {} not found", id)),
        other => other.context(context),
    }
}
