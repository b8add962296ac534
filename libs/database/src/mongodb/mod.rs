//! MongoDB database connector and utilities
//!
//! Provides connection management and the `ping` used by readiness probes.

mod config;
mod connector;

pub use config::MongoConfig;
pub use connector::{MongoError, connect, connect_from_config, ping};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
