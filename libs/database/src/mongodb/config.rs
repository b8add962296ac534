#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_parse_or, env_required_any};
use std::time::Duration;

const DEFAULT_MAX_POOL_SIZE: u32 = 100;
const DEFAULT_MIN_POOL_SIZE: u32 = 5;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SERVER_SELECTION_TIMEOUT_SECS: u64 = 30;

/// MongoDB database configuration
///
/// Can be constructed manually or loaded from environment variables (with the
/// `config` feature).
///
/// # Example
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "shop");
///
/// // From environment variables (requires `config` feature)
/// let config = MongoConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// MongoDB connection URL
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub url: String,

    /// Database name to use
    pub database: String,

    /// Optional application name for server logs
    pub app_name: Option<String>,

    /// Maximum number of connections in the pool
    pub max_pool_size: u32,

    /// Minimum number of connections in the pool
    pub min_pool_size: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Server selection timeout in seconds
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    /// Create a MongoConfig for a connection string and database name
    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            ..Self::default()
        }
    }

    /// Create a MongoConfig with custom pool settings
    pub fn with_pool_size(
        url: impl Into<String>,
        database: impl Into<String>,
        max_pool_size: u32,
        min_pool_size: u32,
    ) -> Self {
        Self {
            max_pool_size,
            min_pool_size,
            ..Self::with_database(url, database)
        }
    }

    /// Set the application name for server logs
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn server_selection_timeout(&self) -> Duration {
        Duration::from_secs(self.server_selection_timeout_secs)
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database: "default".to_string(),
            app_name: None,
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
            min_pool_size: DEFAULT_MIN_POOL_SIZE,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            server_selection_timeout_secs: DEFAULT_SERVER_SELECTION_TIMEOUT_SECS,
        }
    }
}

/// Load MongoConfig from environment variables
///
/// Environment variables:
/// - `MONGODB_URL`, `MONGO_URL` or `MONGO_URI` (required) - connection string
/// - `MONGODB_DATABASE`, `MONGO_DATABASE` or `DB_NAME` (required) - database name
/// - `MONGODB_APP_NAME` (optional) - application name for server logs
/// - `MONGODB_MAX_POOL_SIZE` (optional, default: 100)
/// - `MONGODB_MIN_POOL_SIZE` (optional, default: 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (optional, default: 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (optional, default: 30)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_required_any(&["MONGODB_URL", "MONGO_URL", "MONGO_URI"])?;
        let database = env_required_any(&["MONGODB_DATABASE", "MONGO_DATABASE", "DB_NAME"])?;
        let app_name = std::env::var("MONGODB_APP_NAME").ok();

        Ok(Self {
            url,
            database,
            app_name,
            max_pool_size: env_parse_or(&["MONGODB_MAX_POOL_SIZE"], DEFAULT_MAX_POOL_SIZE)?,
            min_pool_size: env_parse_or(&["MONGODB_MIN_POOL_SIZE"], DEFAULT_MIN_POOL_SIZE)?,
            connect_timeout_secs: env_parse_or(
                &["MONGODB_CONNECT_TIMEOUT_SECS"],
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
            server_selection_timeout_secs: env_parse_or(
                &["MONGODB_SERVER_SELECTION_TIMEOUT_SECS"],
                DEFAULT_SERVER_SELECTION_TIMEOUT_SECS,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mongo_config_with_database() {
        let config = MongoConfig::with_database("mongodb://localhost:27017", "shop");
        assert_eq!(config.url(), "mongodb://localhost:27017");
        assert_eq!(config.database(), "shop");
        assert_eq!(config.max_pool_size, 100);
        assert_eq!(config.min_pool_size, 5);
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert_eq!(config.server_selection_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_mongo_config_with_pool_size() {
        let config = MongoConfig::with_pool_size("mongodb://localhost:27017", "shop", 50, 10);
        assert_eq!(config.database, "shop");
        assert_eq!(config.max_pool_size, 50);
        assert_eq!(config.min_pool_size, 10);
    }

    #[test]
    fn test_mongo_config_with_app_name() {
        let config = MongoConfig::default().with_app_name("products-api");
        assert_eq!(config.app_name.as_deref(), Some("products-api"));
    }

    #[cfg(feature = "config")]
    const ALL_KEYS: [&str; 10] = [
        "MONGODB_URL",
        "MONGO_URL",
        "MONGO_URI",
        "MONGODB_DATABASE",
        "MONGO_DATABASE",
        "DB_NAME",
        "MONGODB_MAX_POOL_SIZE",
        "MONGODB_MIN_POOL_SIZE",
        "MONGODB_CONNECT_TIMEOUT_SECS",
        "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
    ];

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env() {
        temp_env::with_vars_unset(ALL_KEYS, || {
            temp_env::with_vars(
                [
                    ("MONGODB_URL", Some("mongodb://localhost:27017")),
                    ("MONGODB_DATABASE", Some("testdb")),
                    ("MONGODB_MAX_POOL_SIZE", Some("20")),
                ],
                || {
                    let config = MongoConfig::from_env().unwrap();
                    assert_eq!(config.url, "mongodb://localhost:27017");
                    assert_eq!(config.database, "testdb");
                    assert_eq!(config.max_pool_size, 20);
                    assert_eq!(config.min_pool_size, 5);
                },
            );
        });
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env_legacy_keys() {
        temp_env::with_vars_unset(ALL_KEYS, || {
            temp_env::with_vars(
                [
                    ("MONGO_URI", Some("mongodb://legacy:27017")),
                    ("DB_NAME", Some("legacydb")),
                ],
                || {
                    let config = MongoConfig::from_env().unwrap();
                    assert_eq!(config.url, "mongodb://legacy:27017");
                    assert_eq!(config.database, "legacydb");
                },
            );
        });
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env_missing_url() {
        temp_env::with_vars_unset(ALL_KEYS, || {
            temp_env::with_var("MONGODB_DATABASE", Some("testdb"), || {
                let err = MongoConfig::from_env().unwrap_err();
                assert!(matches!(err, ConfigError::MissingEnvVar(_)));
                assert!(err.to_string().contains("MONGO_URI"));
            });
        });
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env_invalid_pool_size() {
        temp_env::with_vars_unset(ALL_KEYS, || {
            temp_env::with_vars(
                [
                    ("MONGODB_URL", Some("mongodb://localhost:27017")),
                    ("MONGODB_DATABASE", Some("testdb")),
                    ("MONGODB_MIN_POOL_SIZE", Some("few")),
                ],
                || {
                    let err = MongoConfig::from_env().unwrap_err();
                    assert!(err.to_string().contains("MONGODB_MIN_POOL_SIZE"));
                },
            );
        });
    }
}
