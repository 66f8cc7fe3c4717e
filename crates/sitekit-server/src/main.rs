//! Sitekit Catalog Server
//!
//! HTTP server for the services catalog and contact-request backend of the
//! sitekit website-template store. Catalog browsing and inquiry submission
//! are public; contact management is admin-gated.

mod auth;
mod config;
mod state;

use anyhow::Result;
use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    response::Json,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::auth::require_admin;
use crate::config::Config;
use crate::state::AppState;
use sitekit_catalog::{routes, services::UploadService, MongoDb};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "sitekit_server=info,sitekit_catalog=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Starting Sitekit Catalog Server on {}:{}", config.host, config.port);
    if config.admin_api_key.is_none() {
        warn!("ADMIN_API_KEY not set; admin endpoints will reject all requests");
    }

    // Connect to MongoDB (pings and ensures indexes)
    let db = MongoDb::connect(&config.database_url, &config.database_name).await?;
    let db = Arc::new(db);

    // Create app state
    let state = Arc::new(AppState {
        db: db.clone(),
        config: config.clone(),
    });
    let catalog_state = Arc::new(routes::AppState {
        db,
        uploads: UploadService::new(
            PathBuf::from(&config.upload_dir),
            config.upload_url_prefix.clone(),
        ),
        max_list_results: config.max_list_results,
    });

    // Build router
    let app = build_router(state, catalog_state);

    // Start server
    let addr = SocketAddr::new(config.host.parse()?, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: Arc<AppState>, catalog_state: Arc<routes::AppState>) -> Router {
    let cors = cors_layer(&state.config);

    // Public server routes (no auth required)
    let server_routes = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .with_state(state.clone());

    // Catalog API: public routes plus admin routes wrapped with the auth gate
    let admin_api = routes::admin_routes().route_layer(axum::middleware::from_fn_with_state(
        state.clone(),
        require_admin,
    ));
    let api = routes::public_routes()
        .merge(admin_api)
        .with_state(catalog_state);

    Router::new()
        .merge(server_routes)
        .nest("/api", api)
        .nest_service(
            &state.config.upload_url_prefix,
            ServeDir::new(&state.config.upload_dir),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn cors_layer(config: &Config) -> CorsLayer {
    match config.cors_allowed_origins.as_deref() {
        Some(origins) if !origins.trim().is_empty() => {
            let origins: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        _ => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    }
}

async fn root() -> &'static str {
    "Sitekit Catalog Server"
}

async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    match state.db.ping().await {
        Ok(_) => Ok(Json(serde_json::json!({
            "status": "healthy",
            "database": "connected",
            "version": env!("CARGO_PKG_VERSION")
        }))),
        Err(_) => Err(StatusCode::SERVICE_UNAVAILABLE),
    }
}
