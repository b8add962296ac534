//! Authentication module.
//!
//! This module provides:
//! - HS256 JWT token creation and verification
//! - Bearer/cookie authentication middleware for protected routes
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{JwtAuth, JwtConfig, jwt_auth_middleware};
//! use core_config::FromEnv;
//!
//! let config = JwtConfig::from_env()?;
//! let auth = JwtAuth::new(&config);
//!
//! let protected = Router::new()
//!     .route("/products", get(handler))
//!     .route_layer(axum::middleware::from_fn_with_state(auth, jwt_auth_middleware));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::JwtConfig;
pub use jwt::{ACCESS_TOKEN_TTL, JwtAuth, JwtClaims};
pub use middleware::jwt_auth_middleware;
