pub mod author_service;
pub mod validation;

pub use author_service::AuthorService;
