//! Products API - REST service over MongoDB
//!
//! The binary in `main.rs` wires configuration, the MongoDB client and the
//! products domain together; this library exposes the pieces so they can be
//! exercised in-process by tests.

pub mod api;
pub mod config;
pub mod openapi;

pub use api::build_app;
pub use config::Config;
