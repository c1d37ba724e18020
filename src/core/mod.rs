pub mod error;
pub mod storage;
pub mod timestamp;
pub mod traits;

pub use error::{AppError, Result};
pub use traits::{Entity, EntityId, Repository};
