pub mod book_service;
pub mod validation;

pub use book_service::BookService;
