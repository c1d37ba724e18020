pub mod author_repository;
pub mod memory;

pub use author_repository::{AuthorRepository, AuthorRepositoryArc, MySqlAuthorRepository};
pub use memory::MemoryAuthorRepository;
