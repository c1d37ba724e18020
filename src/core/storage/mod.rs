//! Generic repository implementations.
//!
//! Each backend implements [`Repository`](crate::core::Repository) once for
//! every entity type; entity-specific lookups are layered on top by the
//! modules' own repositories.

pub mod memory;
pub mod mysql;

pub use memory::{MemoryRepository, MemoryTable, RowLookup};
pub use mysql::{MySqlQuery, MySqlRepository, SqlEntity};
