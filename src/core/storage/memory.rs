use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::timestamp;
use crate::core::{AppError, Entity, EntityId, Repository, Result};

#[derive(Debug)]
struct TableState<T> {
    next_id: EntityId,
    rows: BTreeMap<EntityId, T>,
}

/// Shared in-memory table.
///
/// Clones share the same rows, so one table can back a repository and be
/// read by another (eager loading, foreign keys).
#[derive(Debug)]
pub struct MemoryTable<T> {
    state: Arc<RwLock<TableState<T>>>,
}

impl<T> Clone for MemoryTable<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: Entity> Default for MemoryTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> MemoryTable<T> {
    /// Creates a new empty table.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(TableState {
                next_id: 1,
                rows: BTreeMap::new(),
            })),
        }
    }

    /// Non-deleted rows matching `predicate`, ordered by ID.
    pub async fn select<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        let state = self.state.read().await;
        state
            .rows
            .values()
            .filter(|row| !row.is_deleted() && predicate(row))
            .cloned()
            .collect()
    }

    /// Raw row lookup that ignores the soft-delete marker.
    pub async fn get_including_deleted(&self, id: EntityId) -> Option<T> {
        self.state.read().await.rows.get(&id).cloned()
    }
}

/// Existence check used to enforce foreign keys across tables.
#[async_trait]
pub trait RowLookup: Send + Sync {
    /// True if a row with this ID is stored, soft-deleted or not.
    async fn contains(&self, id: EntityId) -> bool;
}

#[async_trait]
impl<T: Entity> RowLookup for MemoryTable<T> {
    async fn contains(&self, id: EntityId) -> bool {
        self.state.read().await.rows.contains_key(&id)
    }
}

struct ForeignKey<T> {
    column: &'static str,
    value: fn(&T) -> EntityId,
    target: Arc<dyn RowLookup>,
}

/// Generic in-memory repository with the same constraint behaviour as the
/// MySQL schema: unique keys among non-deleted rows and foreign keys.
pub struct MemoryRepository<T> {
    table: MemoryTable<T>,
    foreign_keys: Vec<ForeignKey<T>>,
}

impl<T> fmt::Debug for MemoryRepository<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryRepository")
            .field(
                "foreign_keys",
                &self.foreign_keys.iter().map(|fk| fk.column).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

impl<T: Entity> MemoryRepository<T> {
    pub fn new(table: MemoryTable<T>) -> Self {
        Self {
            table,
            foreign_keys: Vec::new(),
        }
    }

    /// Require `value(row)` to name an existing row of `target` on every write.
    pub fn with_foreign_key(
        mut self,
        column: &'static str,
        value: fn(&T) -> EntityId,
        target: impl RowLookup + 'static,
    ) -> Self {
        self.foreign_keys.push(ForeignKey {
            column,
            value,
            target: Arc::new(target),
        });
        self
    }

    pub fn table(&self) -> &MemoryTable<T> {
        &self.table
    }

    async fn check_foreign_keys(&self, entity: &T) -> Result<()> {
        for fk in &self.foreign_keys {
            let id = (fk.value)(entity);
            if !fk.target.contains(id).await {
                return Err(AppError::storage(format!(
                    "{} references a missing row: {} = {}",
                    T::NAME,
                    fk.column,
                    id
                )));
            }
        }
        Ok(())
    }
}

fn check_unique<T: Entity>(rows: &BTreeMap<EntityId, T>, entity: &T) -> Result<()> {
    for (column, value) in entity.unique_keys() {
        let taken = rows.values().any(|row| {
            row.id() != entity.id()
                && !row.is_deleted()
                && row
                    .unique_keys()
                    .iter()
                    .any(|(other_column, other)| *other_column == column && *other == value)
        });

        if taken {
            return Err(AppError::storage(format!(
                "{} violates a unique constraint: duplicate entry '{}' for key '{}'",
                T::NAME,
                value,
                column
            )));
        }
    }
    Ok(())
}

fn not_found<T: Entity>(id: EntityId) -> AppError {
    AppError::not_found(format!(
        "{} with ID {} not found",
        T::NAME.to_lowercase(),
        id
    ))
}

#[async_trait]
impl<T: Entity> Repository<T, EntityId> for MemoryRepository<T> {
    async fn create(&self, mut entity: T) -> Result<T> {
        self.check_foreign_keys(&entity).await?;

        let mut state = self.table.state.write().await;
        entity.set_id(0);
        check_unique(&state.rows, &entity)?;

        let id = state.next_id;
        state.next_id += 1;

        let now = timestamp::now();
        entity.set_id(id);
        entity.set_created_at(now);
        entity.set_updated_at(now);
        entity.set_deleted_at(None);

        state.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn get_by_id(&self, id: EntityId) -> Result<T> {
        let state = self.table.state.read().await;
        state
            .rows
            .get(&id)
            .filter(|row| !row.is_deleted())
            .cloned()
            .ok_or_else(|| not_found::<T>(id))
    }

    async fn get_all(&self) -> Result<Vec<T>> {
        Ok(self.table.select(|_| true).await)
    }

    async fn update(&self, mut entity: T) -> Result<T> {
        self.check_foreign_keys(&entity).await?;

        let mut state = self.table.state.write().await;
        let id = entity.id();
        let created_at = match state.rows.get(&id) {
            Some(existing) if !existing.is_deleted() => existing.created_at(),
            _ => return Err(not_found::<T>(id)),
        };
        check_unique(&state.rows, &entity)?;

        entity.set_created_at(created_at);
        entity.set_updated_at(timestamp::now());
        entity.set_deleted_at(None);

        state.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: EntityId) -> Result<()> {
        let mut state = self.table.state.write().await;
        match state.rows.get_mut(&id) {
            Some(row) if !row.is_deleted() => {
                row.set_deleted_at(Some(timestamp::now()));
                Ok(())
            }
            _ => Err(not_found::<T>(id)),
        }
    }
}
