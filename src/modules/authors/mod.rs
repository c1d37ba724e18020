// Authors module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Author, AuthorRequest};
pub use repositories::{AuthorRepository, MemoryAuthorRepository, MySqlAuthorRepository};
pub use services::AuthorService;
