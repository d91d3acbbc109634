use crate::error::StatusError;
use crate::models::message::PublicMessageResponse;
use crate::service::StatusService;
use actix_web::{HttpResponse, get, web};
use tracing::instrument;

/// # Public Message Endpoint
///
/// Returns the newest status message from the document store, creating the
/// default welcome message on the first call against an empty collection.
///
/// ## Responses
/// - **200 OK**: `{ status, message, source, timestamp }`
/// - **503 Service Unavailable**: the store connection was never established
/// - **500 Internal Server Error**: the query or the seed write failed
///
/// ## Example Response
/// ```json
/// {
///   "status": "success",
///   "message": "Welcome! This message was retrieved from MongoDB Atlas.",
///   "source": "MongoDB Atlas Cluster (zomota_db)",
///   "timestamp": "2025-04-19T12:00:00.000Z"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/public-message",
    responses(
        (status = 200, description = "Latest status message", body = PublicMessageResponse),
        (status = 503, description = "Database connection not established", body = crate::models::message::ErrorResponse),
        (status = 500, description = "Database query failed", body = crate::models::message::ErrorResponse)
    ),
    tag = "Status"
)]
#[get("/public-message")]
#[instrument(skip_all)]
pub async fn public_message(
    service: web::Data<StatusService>,
) -> Result<HttpResponse, StatusError> {
    let status = service.get_latest_status().await?;

    Ok(HttpResponse::Ok().json(PublicMessageResponse::success(
        status.message,
        status.source,
        status.timestamp,
    )))
}

/// Registers the public message endpoint.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(public_message);
}
