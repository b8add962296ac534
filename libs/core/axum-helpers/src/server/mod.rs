//! Server infrastructure module.
//!
//! This module provides:
//! - Serving with graceful shutdown and post-drain cleanup
//! - OpenAPI document endpoint
//! - Health and readiness helpers
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, health_router, openapi_router};
//! use core_config::{server::ServerConfig, app_info};
//!
//! let app = api_routes
//!     .merge(health_router(app_info!()))
//!     .merge(openapi_router::<ApiDoc>());
//!
//! create_production_app(app, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{OPENAPI_PATH, create_production_app, openapi_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::shutdown_signal;
