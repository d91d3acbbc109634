use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural macros.
///
/// # Endpoints
/// - Health Check: `GET /api/health`
/// - Public Message: `GET /api/public-message`
///
/// # Schemas
/// - `HealthResponse`: Service status payload
/// - `PublicMessageResponse`: Latest status message
/// - `ErrorResponse`: Body of 500 and 503 responses
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::message::public_message,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::message::PublicMessageResponse,
            crate::models::message::ErrorResponse,
            crate::service::ConnectionState
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Status", description = "Public status message backed by MongoDB Atlas")
    ),
    info(
        description = "Status message API backed by MongoDB Atlas",
        title = "Status Service API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
