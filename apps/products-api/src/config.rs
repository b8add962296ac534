//! Configuration for Products API

use axum_helpers::JwtConfig;
use core_config::{app_info, env_parse_or, server::ServerConfig, AppInfo, ConfigError, FromEnv};
use database::mongodb::MongoConfig;
use std::time::Duration;

pub use core_config::Environment;

/// Default per-operation storage timeout in seconds
pub const DEFAULT_STORAGE_TIMEOUT_SECS: u64 = 10;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub mongodb: MongoConfig,
    pub jwt: JwtConfig,
    pub storage_timeout: Duration,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        let storage_timeout_secs =
            env_parse_or(&["STORAGE_TIMEOUT_SECS"], DEFAULT_STORAGE_TIMEOUT_SECS)?;

        Ok(Self {
            app: app_info!(),
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            mongodb: MongoConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            storage_timeout: Duration::from_secs(storage_timeout_secs),
        })
    }
}
