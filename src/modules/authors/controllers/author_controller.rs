use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::core::EntityId;
use crate::modules::authors::models::AuthorRequest;
use crate::modules::authors::services::AuthorService;

/// Query parameters for looking up an author by email
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Create a new author
/// POST /authors
pub async fn create_author(
    service: web::Data<Arc<AuthorService>>,
    request: web::Json<AuthorRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let author = service
        .create_author(&request.name, &request.email, &request.bio)
        .await?;

    Ok(HttpResponse::Created().json(author))
}

/// List authors
/// GET /authors
pub async fn list_authors(
    service: web::Data<Arc<AuthorService>>,
) -> Result<HttpResponse, AppError> {
    let authors = service.get_all_authors().await?;

    Ok(HttpResponse::Ok().json(authors))
}

/// Get author by email
/// GET /authors/lookup?email=
pub async fn get_author_by_email(
    service: web::Data<Arc<AuthorService>>,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, AppError> {
    let author = service.get_author_by_email(&query.email).await?;

    Ok(HttpResponse::Ok().json(author))
}

/// Get author by ID
/// GET /authors/{id}
pub async fn get_author(
    service: web::Data<Arc<AuthorService>>,
    path: web::Path<EntityId>,
) -> Result<HttpResponse, AppError> {
    let author = service.get_author_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(author))
}

/// Get author with its books loaded
/// GET /authors/{id}/books
pub async fn get_author_with_books(
    service: web::Data<Arc<AuthorService>>,
    path: web::Path<EntityId>,
) -> Result<HttpResponse, AppError> {
    let author = service.get_author_with_books(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(author))
}

/// Replace author fields
/// PUT /authors/{id}
pub async fn update_author(
    service: web::Data<Arc<AuthorService>>,
    path: web::Path<EntityId>,
    request: web::Json<AuthorRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let author = service
        .update_author(path.into_inner(), &request.name, &request.email, &request.bio)
        .await?;

    Ok(HttpResponse::Ok().json(author))
}

/// Soft-delete an author
/// DELETE /authors/{id}
pub async fn delete_author(
    service: web::Data<Arc<AuthorService>>,
    path: web::Path<EntityId>,
) -> Result<HttpResponse, AppError> {
    service.delete_author(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure author routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/authors")
            .route("", web::post().to(create_author))
            .route("", web::get().to(list_authors))
            .route("/lookup", web::get().to(get_author_by_email))
            .route("/{id}", web::get().to(get_author))
            .route("/{id}", web::put().to(update_author))
            .route("/{id}", web::delete().to(delete_author))
            .route("/{id}/books", web::get().to(get_author_with_books)),
    );
}
