//! # ward-web - Patient Flow Web Layer
//!
//! This crate provides the HTTP layer of the Ward patient-record service:
//! the list view with keyword search and pagination, and the form-driven
//! create/update/delete flow. Handlers are stateless request/response
//! cycles; all state lives in the injected [`PatientStore`].
//!
//! ## Endpoints
//!
//! | Method | Path | Parameters | Result |
//! |--------|------|------------|--------|
//! | GET | `/` | none | redirect to `/index` |
//! | GET | `/index` | `page`(=0), `size`(=5), `keyword`(="") | rendered list view |
//! | POST | `/patients/save` | form body: patient fields; query: list context | redirect to `/index?...` |
//! | POST | `/patients/{id}` | path `id`; form body: patient fields; query: list context | redirect to `/index?...` |
//! | GET | `/delete` | `id`, `keyword`, `page`, optional `size` | redirect to `/index?...` |
//! | GET | `/health` | none | serving status |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ward_store::sqlite::SqliteStore;
//! use ward_web::{ServerConfig, create_app};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = SqliteStore::open("ward.db")?;
//!     store.init_schema()?;
//!
//!     let app = create_app(store);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`config`] - Server configuration
//! - [`state`] - Application state (store, configuration, flash slot)
//! - [`error`] - Error mapping to HTTP responses
//! - [`extractors`] - List-context extraction with defaults
//! - [`forms`] - Patient form bindings and coercion
//! - [`flash`] - One-shot flash notices
//! - [`views`] - Typed view data and the list renderer
//! - [`handlers`] - One handler per operation
//! - [`routing`] - Route configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod flash;
pub mod forms;
pub mod handlers;
pub mod routing;
pub mod state;
pub mod views;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{WebError, WebResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use ward_store::PatientStore;

/// Creates the axum application with default configuration.
///
/// This is a convenience function; for more control, use
/// [`create_app_with_config`].
pub fn create_app<S>(store: S) -> Router
where
    S: PatientStore + Send + Sync + 'static,
{
    create_app_with_config(store, ServerConfig::default())
}

/// Creates the axum application with custom configuration.
///
/// Sets up the full patient flow with all handlers and middleware.
pub fn create_app_with_config<S>(store: S, config: ServerConfig) -> Router
where
    S: PatientStore + Send + Sync + 'static,
{
    info!(backend = store.backend_name(), "Creating web application");

    let state = AppState::new(Arc::new(store), config.clone());
    router_with_middleware(routing::create_routes(state), &config)
}

/// Applies the middleware stack to an already-routed application.
///
/// Exposed separately so tests can build state themselves (for instance to
/// keep a handle on the store) and still get the production middleware.
pub fn router_with_middleware(router: Router, config: &ServerConfig) -> Router {
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins == "*" {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "ward_web={level},ward_store={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
