//! # Axum Helpers
//!
//! A collection of utilities and helpers for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`envelope`]**: The uniform `{success, message, data}` response wrapper
//! - **[`errors`]**: Application error type rendered as envelope responses
//! - **[`extractors`]**: Custom extractors (envelope-aware JSON body)
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`server`]**: Server setup, health checks, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes).await?;
//!
//!     let config = ServerConfig::default();
//!     create_app(router, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;
pub mod shutdown;

// Re-export envelope and error types
pub use envelope::ApiEnvelope;
pub use errors::AppError;

// Re-export extractors
pub use extractors::JsonBody;

// Re-export HTTP middleware
pub use http::{create_cors_layer, create_permissive_cors_layer, security_headers};

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, create_app, create_production_app, create_router,
    health_router, run_health_checks,
};

// Re-export shutdown types
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
