use actix_web::{App, HttpServer, middleware::Logger, web::Data};
use status_service::config::{MongoConfig, ServerConfig};
use status_service::openapi::ApiDoc;
use status_service::service::StatusService;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Status Service Entry Point
///
/// Loads configuration, makes the single MongoDB Atlas connection attempt and
/// launches the Actix-web HTTP server. The server starts even when the
/// database is unconfigured or unreachable; the public message endpoint then
/// answers 503.
///
/// # Endpoints
/// - Public message: `/api/public-message`
/// - Health: `/api/health`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - `MONGO_USER`, `MONGO_PASS`, `MONGO_HOST`, `MONGO_DB_NAME`
/// - `HOST` / `PORT` (default `0.0.0.0:3001`)
/// - `RUST_LOG` (default `info`)
/// - Environment variables loaded from `.env` file (if present)
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let server = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let service = Data::new(StatusService::bootstrap(MongoConfig::from_env()).await);

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(Logger::default())
            .app_data(service.clone())
            .configure(status_service::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((server.host.as_str(), server.port))
    .inspect(|_| info!("Backend running on http://{}:{}", server.host, server.port))?
    .run()
    .await
}
