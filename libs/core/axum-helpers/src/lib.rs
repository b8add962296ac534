//! # Axum Helpers
//!
//! Utilities, middleware, and helpers for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`auth`]**: Stateless HS256 JWT authentication
//! - **[`server`]**: Serving with graceful shutdown, health checks, OpenAPI endpoint
//! - **[`http`]**: HTTP middleware (request logging)
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Custom extractors (ObjectId path, validated JSON)
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::{request_logging_layer, server::create_production_app};
//! use core_config::server::ServerConfig;
//!
//! let router = Router::new() // Add your routes
//!     .layer(request_logging_layer());
//!
//! create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {})
//!     .await?;
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export auth types
pub use auth::{ACCESS_TOKEN_TTL, JwtAuth, JwtClaims, JwtConfig, jwt_auth_middleware};

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, OPENAPI_PATH, create_production_app, health_router,
    openapi_router, run_health_checks, shutdown_signal,
};

// Re-export HTTP middleware
pub use http::request_logging_layer;

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{ObjectIdPath, ValidatedJson};
