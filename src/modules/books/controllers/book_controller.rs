use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::core::EntityId;
use crate::modules::books::models::BookRequest;
use crate::modules::books::services::BookService;

/// Create a new book
/// POST /books
pub async fn create_book(
    service: web::Data<Arc<BookService>>,
    request: web::Json<BookRequest>,
) -> Result<HttpResponse, AppError> {
    let book = service.create_book(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(book))
}

/// List books
/// GET /books
pub async fn list_books(service: web::Data<Arc<BookService>>) -> Result<HttpResponse, AppError> {
    let books = service.get_all_books().await?;

    Ok(HttpResponse::Ok().json(books))
}

/// Get book by ID
/// GET /books/{id}
pub async fn get_book(
    service: web::Data<Arc<BookService>>,
    path: web::Path<EntityId>,
) -> Result<HttpResponse, AppError> {
    let book = service.get_book_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(book))
}

/// Replace book fields
/// PUT /books/{id}
pub async fn update_book(
    service: web::Data<Arc<BookService>>,
    path: web::Path<EntityId>,
    request: web::Json<BookRequest>,
) -> Result<HttpResponse, AppError> {
    let book = service
        .update_book(path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(book))
}

/// Soft-delete a book
/// DELETE /books/{id}
pub async fn delete_book(
    service: web::Data<Arc<BookService>>,
    path: web::Path<EntityId>,
) -> Result<HttpResponse, AppError> {
    service.delete_book(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure book routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/books")
            .route("", web::post().to(create_book))
            .route("", web::get().to(list_books))
            .route("/{id}", web::get().to(get_book))
            .route("/{id}", web::put().to(update_book))
            .route("/{id}", web::delete().to(delete_book)),
    );
}
