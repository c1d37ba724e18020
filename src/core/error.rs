use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Input failed a business rule; raised before any storage access
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced identity or email does not exist among non-deleted records
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage operation failed (constraint violation, connectivity)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database errors surfaced outside a repository (pool creation, probes)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration errors
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Migration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        AppError::Storage(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    /// True for failures that originate in the storage layer
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            AppError::Storage(_) | AppError::Database(_) | AppError::Migration(_)
        )
    }

    /// Wrap a storage-class error with caller context.
    ///
    /// Validation and NotFound errors already carry a caller-facing message
    /// and pass through unchanged.
    pub fn context(self, context: impl std::fmt::Display) -> Self {
        match self {
            AppError::Storage(msg) => AppError::Storage(format!("{}: {}", context, msg)),
            AppError::Database(err) => AppError::Storage(format!("{}: {}", context, err)),
            AppError::Migration(err) => AppError::Storage(format!("{}: {}", context, err)),
            other => other,
        }
    }
}
