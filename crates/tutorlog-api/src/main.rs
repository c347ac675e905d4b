// Tutorlog API server
// Decision: the connection pool is an explicitly passed handle with an
// initialize/shutdown lifecycle tied to process start/stop, not a
// process-wide singleton

mod config;
mod dashboard;
mod events;
mod health;

use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tutorlog_storage::Database;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use config::Config;

/// OpenAPI documentation for the JSON surface. The dashboard endpoints
/// serve HTML and are not part of the documented API.
#[derive(OpenApi)]
#[openapi(
    paths(events::create_event, health::health),
    components(
        schemas(
            tutorlog_contracts::CreateEventRequest,
            tutorlog_contracts::EventCreated,
            health::HealthResponse,
            health::HealthError,
        )
    ),
    tags(
        (name = "events", description = "Event ingestion endpoints"),
        (name = "health", description = "Liveness probe")
    ),
    info(
        title = "Tutorlog API",
        version = "0.1.0",
        description = "Interaction-event logging with a password-gated dashboard",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tutorlog_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("tutorlog-api starting...");

    let config = Config::from_env().context("Failed to load configuration")?;

    let db = Database::connect(config.connect_options())
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    let db = Arc::new(db);

    // Create module-specific states
    let events_state = events::AppState::new(db.clone());
    let health_state = health::AppState::new(db.clone());
    let dashboard_state = dashboard::AppState::new(db.clone(), config.dashboard_secret());

    let app = Router::new()
        .merge(events::routes(events_state))
        .merge(health::routes(health_state))
        .merge(dashboard::routes(dashboard_state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = "0.0.0.0:8000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // Release all pooled connections before exiting
    db.close().await;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for shutdown signal");
    tracing::info!("shutdown signal received");
}
