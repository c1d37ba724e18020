// Books module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Book, BookRequest};
pub use repositories::{BookRepository, MemoryBookRepository, MySqlBookRepository};
pub use services::BookService;
