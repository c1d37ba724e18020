use std::sync::Arc;

use actix_web::web;
use sqlx::MySqlPool;

use crate::core::storage::MemoryTable;
use crate::core::AppError;
use crate::modules::authors::repositories::{
    AuthorRepositoryArc, MemoryAuthorRepository, MySqlAuthorRepository,
};
use crate::modules::authors::{self, AuthorService};
use crate::modules::books::repositories::{
    BookRepositoryArc, MemoryBookRepository, MySqlBookRepository,
};
use crate::modules::books::{self, BookService};
use crate::modules::health;

/// Storage backing the services, kept for readiness probes
#[derive(Debug, Clone)]
pub enum StorageHandle {
    MySql(MySqlPool),
    Memory,
}

impl StorageHandle {
    pub fn kind(&self) -> &'static str {
        match self {
            StorageHandle::MySql(_) => "mysql",
            StorageHandle::Memory => "memory",
        }
    }
}

/// Services shared by every HTTP worker
#[derive(Clone)]
pub struct AppState {
    pub authors: Arc<AuthorService>,
    pub books: Arc<BookService>,
    pub storage: StorageHandle,
}

impl AppState {
    /// Services backed by an already migrated MySQL pool
    pub fn mysql(pool: MySqlPool) -> Self {
        Self::from_repositories(
            Arc::new(MySqlAuthorRepository::new(pool.clone())),
            Arc::new(MySqlBookRepository::new(pool.clone())),
            StorageHandle::MySql(pool),
        )
    }

    /// Services backed by fresh in-memory tables
    pub fn in_memory() -> Self {
        let authors = MemoryTable::new();
        let books = MemoryTable::new();

        Self::from_repositories(
            Arc::new(MemoryAuthorRepository::new(authors.clone(), books.clone())),
            Arc::new(MemoryBookRepository::new(books, authors)),
            StorageHandle::Memory,
        )
    }

    fn from_repositories(
        author_repo: AuthorRepositoryArc,
        book_repo: BookRepositoryArc,
        storage: StorageHandle,
    ) -> Self {
        Self {
            authors: Arc::new(AuthorService::new(author_repo.clone())),
            books: Arc::new(BookService::new(book_repo, author_repo)),
            storage,
        }
    }

    /// Register shared data and every route
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(extractor_errors::json_config())
            .app_data(extractor_errors::path_config())
            .app_data(extractor_errors::query_config())
            .app_data(web::Data::new(self.authors.clone()))
            .app_data(web::Data::new(self.books.clone()))
            .app_data(web::Data::new(self.storage.clone()))
            .configure(health::controllers::configure)
            .configure(authors::controllers::configure)
            .configure(books::controllers::configure);
    }
}

/// Render malformed bodies, paths and queries with the `AppError` envelope
mod extractor_errors {
    use actix_web::web;

    use super::AppError;

    pub fn json_config() -> web::JsonConfig {
        web::JsonConfig::default().error_handler(|err, _req| {
            AppError::validation(format!("invalid JSON body: {}", err)).into()
        })
    }

    pub fn path_config() -> web::PathConfig {
        web::PathConfig::default().error_handler(|err, _req| {
            AppError::validation(format!("invalid path: {}", err)).into()
        })
    }

    pub fn query_config() -> web::QueryConfig {
        web::QueryConfig::default().error_handler(|err, _req| {
            AppError::validation(format!("invalid query string: {}", err)).into()
        })
    }
}
