pub mod book_repository;
pub mod memory;

pub use book_repository::{BookRepository, BookRepositoryArc, MySqlBookRepository};
pub use memory::MemoryBookRepository;
