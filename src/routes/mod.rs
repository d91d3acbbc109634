use actix_web::web;

/// # Health Check Endpoint
///
/// Returns the liveness of the service, a timestamp and the state of the
/// document store connection.
pub mod health;

/// # Public Message Endpoint
///
/// Returns the latest status message, lazily seeding the default message.
///
/// ## Responses
/// - **200 OK**: latest message
/// - **503 Service Unavailable**: database connection not established
/// - **500 Internal Server Error**: database query failed
pub mod message;


/// # API Route Configuration
///
/// Mounts every endpoint under the `/api` base path.
///
/// ## Example Endpoints
///
/// ```text
/// GET /api/health         - Service health status
/// GET /api/public-message - Latest status message
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(health::configure_routes)
            .configure(message::configure_routes),
    );
}
