use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::core::Result;

/// Identity type shared by every persisted entity
pub type EntityId = u64;

/// Storage-agnostic description of a persisted entity.
///
/// Repositories use these accessors to assign identity, stamp timestamps and
/// honour the soft-delete marker without knowing the concrete record type.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Name used in error messages ("Author", "Book")
    const NAME: &'static str;

    fn id(&self) -> EntityId;

    fn set_id(&mut self, id: EntityId);

    fn created_at(&self) -> DateTime<Utc>;

    fn set_created_at(&mut self, at: DateTime<Utc>);

    fn set_updated_at(&mut self, at: DateTime<Utc>);

    fn deleted_at(&self) -> Option<DateTime<Utc>>;

    fn set_deleted_at(&mut self, at: Option<DateTime<Utc>>);

    /// Column/value pairs that must be unique among non-deleted rows.
    ///
    /// The MySQL backend leaves this to its unique indexes; the in-memory
    /// backend checks it on every write.
    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn is_deleted(&self) -> bool {
        self.deleted_at().is_some()
    }
}

/// Base repository trait for CRUD operations
/// Implemented once per storage backend for any [`Entity`]
#[async_trait]
pub trait Repository<T, ID>: Send + Sync {
    /// Persist a new entity, assigning identity and timestamps
    async fn create(&self, entity: T) -> Result<T>;

    /// Find a non-deleted entity by ID
    async fn get_by_id(&self, id: ID) -> Result<T>;

    /// List all non-deleted entities, ordered by ID
    async fn get_all(&self) -> Result<Vec<T>>;

    /// Replace the stored record matching the entity's ID
    async fn update(&self, entity: T) -> Result<T>;

    /// Soft-delete an entity by ID
    async fn delete(&self, id: ID) -> Result<()>;
}
