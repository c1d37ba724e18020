use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::state::StorageHandle;

/// Liveness response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Readiness response
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub storage: String,
}

/// GET /health - Liveness probe
/// Does not touch storage
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /ready - Readiness probe
/// Returns 503 when the database does not answer
pub async fn readiness_check(storage: web::Data<StorageHandle>) -> impl Responder {
    let ready = match storage.get_ref() {
        StorageHandle::MySql(pool) => match sqlx::query("SELECT 1").execute(pool).await {
            Ok(_) => true,
            Err(e) => {
                tracing::error!("Database readiness check failed: {}", e);
                false
            }
        },
        StorageHandle::Memory => true,
    };

    let response = ReadinessResponse {
        ready,
        storage: storage.kind().to_string(),
    };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
