use crate::models::health::HealthResponse;
use crate::service::StatusService;
use actix_web::{HttpResponse, Responder, get, web};

/// # Health Check Endpoint
///
/// Liveness check. Always answers 200 while the process is serving; the
/// `database` field reports the document store connection state.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2023-10-05T12:34:56.789+00:00",
///   "database": "failed"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(service: web::Data<StatusService>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::up(service.connection_state()))
}

/// # Route Configuration
///
/// - `GET /health`: Health check endpoint
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
