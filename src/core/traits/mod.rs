pub mod repository;

pub use repository::{Entity, EntityId, Repository};
