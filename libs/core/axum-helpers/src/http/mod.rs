//! HTTP middleware module.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::request_logging_layer;
//!
//! let app = Router::new()
//!     .route("/products", get(list))
//!     .layer(request_logging_layer());
//! ```

pub mod trace;

pub use trace::request_logging_layer;
