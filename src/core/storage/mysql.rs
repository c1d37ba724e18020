use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::mysql::{MySqlArguments, MySqlRow};
use sqlx::query::Query;
use sqlx::{Encode, FromRow, MySql, MySqlPool, Type};

use crate::core::timestamp;
use crate::core::{AppError, Entity, EntityId, Repository, Result};

/// Query type handed to [`SqlEntity::bind_columns`]
pub type MySqlQuery<'q> = Query<'q, MySql, MySqlArguments>;

/// MySQL mapping for an [`Entity`].
///
/// Every table carries `id`, `created_at`, `updated_at` and `deleted_at`
/// in addition to the writable `COLUMNS`.
pub trait SqlEntity: Entity + Unpin + for<'r> FromRow<'r, MySqlRow> {
    const TABLE: &'static str;

    /// Writable columns, in the order `bind_columns` binds them
    const COLUMNS: &'static [&'static str];

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q>;
}

/// Generic MySQL repository, instantiated once per entity type
pub struct MySqlRepository<T> {
    pool: MySqlPool,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for MySqlRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: SqlEntity> MySqlRepository<T> {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Non-deleted rows whose `column` equals `value`, ordered by ID
    ///
    /// `column` must be one of the entity's own column names; it is
    /// interpolated into the statement.
    pub async fn find_where<V>(&self, column: &'static str, value: V) -> Result<Vec<T>>
    where
        V: for<'q> Encode<'q, MySql> + Type<MySql> + Send + 'static,
    {
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ? AND deleted_at IS NULL ORDER BY id",
            select_list::<T>(),
            T::TABLE,
            column
        );

        sqlx::query_as::<_, T>(&sql)
            .bind(value)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error::<T>("query", e))
    }
}

#[async_trait]
impl<T: SqlEntity> Repository<T, EntityId> for MySqlRepository<T> {
    async fn create(&self, mut entity: T) -> Result<T> {
        let now = timestamp::now();
        entity.set_created_at(now);
        entity.set_updated_at(now);
        entity.set_deleted_at(None);

        let sql = format!(
            "INSERT INTO {} ({}, created_at, updated_at) VALUES ({})",
            T::TABLE,
            T::COLUMNS.join(", "),
            vec!["?"; T::COLUMNS.len() + 2].join(", ")
        );

        let result = entity
            .bind_columns(sqlx::query(&sql))
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error::<T>("create", e))?;

        entity.set_id(result.last_insert_id());

        tracing::debug!(entity = T::NAME, id = entity.id(), "Row inserted");

        Ok(entity)
    }

    async fn get_by_id(&self, id: EntityId) -> Result<T> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ? AND deleted_at IS NULL",
            select_list::<T>(),
            T::TABLE
        );

        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error::<T>("fetch", e))?
            .ok_or_else(|| not_found::<T>(id))
    }

    async fn get_all(&self) -> Result<Vec<T>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE deleted_at IS NULL ORDER BY id",
            select_list::<T>(),
            T::TABLE
        );

        sqlx::query_as::<_, T>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error::<T>("list", e))
    }

    async fn update(&self, mut entity: T) -> Result<T> {
        let now = timestamp::now();
        entity.set_updated_at(now);

        let assignments = T::COLUMNS
            .iter()
            .map(|column| format!("{} = ?", column))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {}, updated_at = ? WHERE id = ? AND deleted_at IS NULL",
            T::TABLE,
            assignments
        );

        let id = entity.id();
        entity
            .bind_columns(sqlx::query(&sql))
            .bind(now)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error::<T>("update", e))?;

        // rows_affected is zero for an unchanged row as well as a missing one
        self.get_by_id(id).await
    }

    async fn delete(&self, id: EntityId) -> Result<()> {
        let sql = format!(
            "UPDATE {} SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL",
            T::TABLE
        );

        let result = sqlx::query(&sql)
            .bind(timestamp::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error::<T>("delete", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found::<T>(id));
        }

        Ok(())
    }
}

fn select_list<T: SqlEntity>() -> String {
    format!(
        "id, {}, created_at, updated_at, deleted_at",
        T::COLUMNS.join(", ")
    )
}

fn not_found<T: Entity>(id: EntityId) -> AppError {
    AppError::not_found(format!(
        "{} with ID {} not found",
        T::NAME.to_lowercase(),
        id
    ))
}

fn storage_error<T: Entity>(operation: &str, err: sqlx::Error) -> AppError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            return AppError::storage(format!(
                "{} violates a unique constraint: {}",
                T::NAME,
                db_err.message()
            ));
        }
        if db_err.is_foreign_key_violation() {
            return AppError::storage(format!(
                "{} references a missing row: {}",
                T::NAME,
                db_err.message()
            ));
        }
    }

    tracing::error!(entity = T::NAME, operation, error = %err, "Storage operation failed");
    AppError::storage(format!(
        "Failed to {} {}: {}",
        operation,
        T::NAME.to_lowercase(),
        err
    ))
}
