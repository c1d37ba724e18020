use crate::core::{AppError, EntityId, Repository, Result};
use crate::modules::authors::models::Author;
use crate::modules::authors::repositories::AuthorRepositoryArc;
use crate::modules::authors::services::validation::{
    normalize_email, validate_bio, validate_email, validate_name,
};

/// Service for author business logic
pub struct AuthorService {
    author_repo: AuthorRepositoryArc,
}

impl AuthorService {
    pub fn new(author_repo: AuthorRepositoryArc) -> Self {
        Self { author_repo }
    }

    /// Create a new author after validating and normalizing the input
    pub async fn create_author(&self, name: &str, email: &str, bio: &str) -> Result<Author> {
        validate_name(name)?;
        validate_email(email)?;
        validate_bio(bio)?;

        let author = Author::new(
            name.trim().to_string(),
            normalize_email(email),
            bio.trim().to_string(),
        );

        let created = self
            .author_repo
            .base()
            .create(author)
            .await
            .map_err(|e| e.context("failed to create author"))?;

        tracing::info!(author_id = created.id, email = %created.email, "Author created");

        Ok(created)
    }

    /// Get a non-deleted author by ID
    pub async fn get_author_by_id(&self, id: EntityId) -> Result<Author> {
        ensure_valid_id(id)?;

        let author = self
            .author_repo
            .base()
            .get_by_id(id)
            .await
            .map_err(|e| lookup_error(e, id))?;

        tracing::debug!(author_id = id, "Author fetched");

        Ok(author)
    }

    /// List all non-deleted authors
    pub async fn get_all_authors(&self) -> Result<Vec<Author>> {
        self.author_repo
            .base()
            .get_all()
            .await
            .map_err(|e| e.context("failed to retrieve authors"))
    }

    /// Replace an existing author's name, email and bio
    pub async fn update_author(
        &self,
        id: EntityId,
        name: &str,
        email: &str,
        bio: &str,
    ) -> Result<Author> {
        ensure_valid_id(id)?;
        validate_name(name)?;
        validate_email(email)?;
        validate_bio(bio)?;

        let mut author = self
            .author_repo
            .base()
            .get_by_id(id)
            .await
            .map_err(|e| lookup_error(e, id))?;

        author.name = name.trim().to_string();
        author.email = normalize_email(email);
        author.bio = bio.trim().to_string();

        let updated = self
            .author_repo
            .base()
            .update(author)
            .await
            .map_err(|e| write_error(e, id, "failed to update author"))?;

        tracing::info!(author_id = id, "Author updated");

        Ok(updated)
    }

    /// Soft-delete an existing author
    pub async fn delete_author(&self, id: EntityId) -> Result<()> {
        ensure_valid_id(id)?;

        self.author_repo
            .base()
            .get_by_id(id)
            .await
            .map_err(|e| lookup_error(e, id))?;

        self.author_repo
            .base()
            .delete(id)
            .await
            .map_err(|e| write_error(e, id, "failed to delete author"))?;

        tracing::info!(author_id = id, "Author deleted");

        Ok(())
    }

    /// Get a non-deleted author by email (matched after normalization)
    pub async fn get_author_by_email(&self, email: &str) -> Result<Author> {
        validate_email(email)?;

        let email = normalize_email(email);

        self.author_repo
            .get_by_email(&email)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => {
                    AppError::not_found(format!("author with email {} not found", email))
                }
                other => other.context("failed to retrieve author by email"),
            })
    }

    /// Get an author together with all of its books
    pub async fn get_author_with_books(&self, id: EntityId) -> Result<Author> {
        ensure_valid_id(id)?;

        self.author_repo
            .get_with_books(id)
            .await
            .map_err(|e| lookup_error(e, id))
    }
}

fn ensure_valid_id(id: EntityId) -> Result<()> {
    if id == 0 {
        return Err(AppError::validation("invalid author ID"));
    }
    Ok(())
}

fn lookup_error(err: AppError, id: EntityId) -> AppError {
    write_error(err, id, &format!("failed to retrieve author {}", id))
}

/// The row can vanish between the existence check and the write
fn write_error(err: AppError, id: EntityId, context: &str) -> AppError {
    match err {
        AppError::NotFound(_) => AppError::not_found(format!("author with ID {} not found", id)),
        other => other.context(context),
    }
}
