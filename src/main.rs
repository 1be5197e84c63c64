//! Revize Server - Lifting Equipment Inspection Management
//!
//! REST API server for managing customers, equipment, revision records and
//! PDF revision reports per NV 193/2022 Sb.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use revize_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("revize_server={},tower_http=debug", config.logging.level).into()
    });

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting Revize Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, &config).expect("Failed to create services");

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Customers
        .route("/customers", get(api::customers::list_customers))
        .route("/customers", post(api::customers::create_customer))
        .route("/customers/:id", get(api::customers::get_customer))
        .route("/customers/:id", put(api::customers::update_customer))
        .route("/customers/:id", delete(api::customers::delete_customer))
        // Equipment
        .route("/equipment", get(api::equipment::list_equipment))
        .route("/equipment", post(api::equipment::create_equipment))
        .route("/equipment/:id", get(api::equipment::get_equipment))
        .route("/equipment/:id", put(api::equipment::update_equipment))
        .route("/equipment/:id", delete(api::equipment::delete_equipment))
        .route("/equipment/:id/locations", get(api::equipment::location_history))
        .route("/equipment/:id/locations", post(api::equipment::assign_location))
        .route("/equipment/:id/operators", get(api::equipment::list_equipment_operators))
        .route(
            "/equipment/:id/operators/:operator_id",
            post(api::equipment::assign_operator),
        )
        .route(
            "/equipment/:id/operators/:operator_id",
            delete(api::equipment::unassign_operator),
        )
        .route("/equipment/:id/revisions", get(api::equipment::list_equipment_revisions))
        .route("/equipment/:id/inspections", get(api::equipment::list_equipment_inspections))
        .route(
            "/equipment/:id/service-visits",
            get(api::equipment::list_equipment_service_visits),
        )
        .route(
            "/equipment/:id/configurations",
            get(api::equipment::list_equipment_configurations),
        )
        // Configurations
        .route("/equipment-configs", get(api::configurations::list_configurations))
        .route("/equipment-configs", post(api::configurations::create_configuration))
        .route("/equipment-configs/:id", get(api::configurations::get_configuration))
        .route("/equipment-configs/:id", put(api::configurations::update_configuration))
        .route("/equipment-configs/:id", delete(api::configurations::delete_configuration))
        // Locations
        .route("/locations", get(api::locations::list_locations))
        .route("/locations", post(api::locations::create_location))
        .route("/locations/:id", get(api::locations::get_location))
        .route("/locations/:id", put(api::locations::update_location))
        .route("/locations/:id", delete(api::locations::delete_location))
        // Operators
        .route("/operators", get(api::operators::list_operators))
        .route("/operators", post(api::operators::create_operator))
        .route("/operators/:id", get(api::operators::get_operator))
        .route("/operators/:id", put(api::operators::update_operator))
        .route("/operators/:id", delete(api::operators::delete_operator))
        // Revisions
        .route("/revisions", get(api::revisions::list_revisions))
        .route("/revisions", post(api::revisions::create_revision))
        .route("/revisions/:id", get(api::revisions::get_revision))
        .route("/revisions/:id", put(api::revisions::update_revision))
        .route("/revisions/:id", delete(api::revisions::delete_revision))
        .route("/revisions/:id/defects", get(api::revisions::list_revision_defects))
        .route("/revisions/:id/pdf", get(api::revisions::revision_pdf))
        .route("/defects", get(api::revisions::list_defects))
        // Inspections
        .route("/inspections", get(api::inspections::list_inspections))
        .route("/inspections", post(api::inspections::create_inspection))
        .route("/inspections/:id", get(api::inspections::get_inspection))
        .route("/inspections/:id", put(api::inspections::update_inspection))
        .route("/inspections/:id", delete(api::inspections::delete_inspection))
        // Service visits
        .route("/service-visits", get(api::service_visits::list_service_visits))
        .route("/service-visits", post(api::service_visits::create_service_visit))
        .route("/service-visits/:id", get(api::service_visits::get_service_visit))
        .route("/service-visits/:id", put(api::service_visits::update_service_visit))
        .route("/service-visits/:id", delete(api::service_visits::delete_service_visit))
        .route("/service/:id/files", get(api::service_visits::list_service_files))
        .route("/service/:id/files", post(api::service_visits::upload_service_file))
        .route(
            "/service-files/:id/download",
            get(api::service_visits::download_service_file),
        )
        .route("/service-files/:id", delete(api::service_visits::delete_service_file))
        // Logbook
        .route("/logbook/entries", get(api::logbook::list_entries))
        .route("/logbook/entries", post(api::logbook::create_entry))
        .route("/logbook/entries/:id", delete(api::logbook::delete_entry))
        .route("/logbook/equipment/:id", get(api::logbook::equipment_entries))
        // Statistics
        .route("/stats", get(api::stats::get_stats))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
