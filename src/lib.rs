//! Bookshelf data-access library
//!
//! Authors and books stored in MySQL behind a generic repository, with
//! validating services and a thin actix-web surface on top.

pub mod config;
pub mod core;
pub mod modules;
pub mod state;

// Re-export commonly used types
pub use crate::core::{AppError, Result};
pub use modules::authors;
pub use modules::books;
pub use state::AppState;
