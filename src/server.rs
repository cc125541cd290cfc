//! # Server Configuration
//!
//! This module contains the server setup and configuration for the Hawkeye
//! management service.

use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::handlers::{self, monitors};
use crate::repositories::SeaOrmMonitorRepository;
use crate::services::MonitorService;
use crate::telemetry;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: DatabaseConnection,
    pub service: MonitorService<SeaOrmMonitorRepository>,
}

impl AppState {
    pub fn new(config: AppConfig, db: DatabaseConnection) -> Self {
        let service = MonitorService::new(SeaOrmMonitorRepository::new(db.clone()));
        Self {
            config: Arc::new(config),
            db,
            service,
        }
    }
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::healthz))
        .route(
            "/api/v1/monitors",
            get(monitors::list_monitors).post(monitors::create_monitor),
        )
        .route(
            "/api/v1/monitors/{id}",
            get(monitors::get_monitor)
                .put(monitors::update_monitor)
                .delete(monitors::delete_monitor),
        )
        .route(
            "/api/v1/monitors/org/{org_id}",
            get(monitors::list_monitors_by_org),
        )
        .route(
            "/api/v1/monitors/tenant/{tenant}",
            get(monitors::list_monitors_by_tenant),
        )
        .route("/api/v1/monitorscount", get(monitors::count_monitors))
        .route(
            "/api/v1/orgmonitorscount/{org_id}",
            get(monitors::count_monitors_by_org),
        )
        .route(
            "/api/v1/tenantmonitorscount/{tenant}",
            get(monitors::count_monitors_by_tenant),
        )
        .layer(middleware::from_fn(telemetry::trace_context_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}

/// Starts the server with the given configuration
pub async fn run_server(
    config: AppConfig,
    db: DatabaseConnection,
) -> Result<(), Box<dyn std::error::Error>> {
    // Resolve the configured bind address before touching the state.
    let addr = config
        .bind_addr()
        .map_err(|e| format!("Invalid server address: {}", e))?;
    let profile = config.profile.clone();

    let state = AppState::new(config, db);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, %profile, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("opaque")
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz,
        crate::handlers::monitors::get_monitor,
        crate::handlers::monitors::list_monitors,
        crate::handlers::monitors::list_monitors_by_org,
        crate::handlers::monitors::list_monitors_by_tenant,
        crate::handlers::monitors::count_monitors,
        crate::handlers::monitors::count_monitors_by_org,
        crate::handlers::monitors::count_monitors_by_tenant,
        crate::handlers::monitors::create_monitor,
        crate::handlers::monitors::update_monitor,
        crate::handlers::monitors::delete_monitor,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::models::monitor::TotalMonitorCount,
            crate::models::monitor::TotalMonitorCountForOrg,
            crate::models::monitor::TotalMonitorCountForTenant,
            crate::handlers::monitors::MonitorDto,
            crate::services::CreateMonitorRequest,
            crate::services::UpdateMonitorRequest,
            crate::error::ApiError,
        )
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Hawkeye Management API",
        description = "API for managing registered API health-check monitors",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
