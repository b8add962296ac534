pub mod server;
pub mod tracing;

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Application environment (dev = local, prod = deployed)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Static application identity reported by health endpoints
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Build an [`AppInfo`] from the calling crate's Cargo metadata.
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    };
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Load a `.env` file from the working directory into the process environment.
///
/// Variables already present in the environment are never overwritten, and a
/// missing file is not an error.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => ::tracing::debug!(path = %path.display(), "Loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => ::tracing::warn!("Ignoring unreadable .env file: {}", e),
    }
}

/// Helper to load and parse environment variable with a default value
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Helper to load and parse environment variable or return error
pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Read the first variable of `keys` that is set, in order.
pub fn env_required_any(keys: &[&str]) -> Result<String, ConfigError> {
    keys.iter()
        .find_map(|key| env::var(key).ok())
        .ok_or_else(|| ConfigError::MissingEnvVar(keys.join(" or ")))
}

/// Parse the first variable of `keys` that is set, or fall back to `default`.
///
/// A set-but-unparseable variable is an error naming that variable.
pub fn env_parse_or<T>(keys: &[&str], default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    for key in keys {
        if let Ok(raw) = env::var(key) {
            return raw.trim().parse().map_err(|e: T::Err| ConfigError::ParseError {
                key: key.to_string(),
                details: e.to_string(),
            });
        }
    }
    Ok(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_defaults_to_development() {
        temp_env::with_var_unset("APP_ENV", || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Development);
            assert!(env.is_development());
            assert!(!env.is_production());
        });
    }

    #[test]
    fn test_environment_production_case_insensitive() {
        temp_env::with_var("APP_ENV", Some("PRODUCTION"), || {
            assert_eq!(Environment::from_env(), Environment::Production);
        });

        temp_env::with_var("APP_ENV", Some("Production"), || {
            assert_eq!(Environment::from_env(), Environment::Production);
        });
    }

    #[test]
    fn test_environment_unknown_defaults_to_development() {
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn test_app_info_macro_uses_crate_metadata() {
        let info = app_info!();
        assert_eq!(info.name, "core_config");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_env_or_default_without_value() {
        temp_env::with_var_unset("MISSING_VAR", || {
            assert_eq!(env_or_default("MISSING_VAR", "default_value"), "default_value");
        });
    }

    #[test]
    fn test_env_required_missing() {
        temp_env::with_var_unset("MISSING_REQUIRED", || {
            let err = env_required("MISSING_REQUIRED").unwrap_err();
            assert!(err.to_string().contains("MISSING_REQUIRED"));
            assert!(err.to_string().contains("required"));
        });
    }

    #[test]
    fn test_env_required_any_takes_first_set_key() {
        temp_env::with_vars(
            [("PRIMARY_KEY", None), ("FALLBACK_KEY", Some("fallback"))],
            || {
                let value = env_required_any(&["PRIMARY_KEY", "FALLBACK_KEY"]).unwrap();
                assert_eq!(value, "fallback");
            },
        );

        temp_env::with_vars(
            [("PRIMARY_KEY", Some("primary")), ("FALLBACK_KEY", Some("fallback"))],
            || {
                let value = env_required_any(&["PRIMARY_KEY", "FALLBACK_KEY"]).unwrap();
                assert_eq!(value, "primary");
            },
        );
    }

    #[test]
    fn test_env_required_any_lists_all_keys_when_missing() {
        temp_env::with_vars_unset(["PRIMARY_KEY", "FALLBACK_KEY"], || {
            let err = env_required_any(&["PRIMARY_KEY", "FALLBACK_KEY"]).unwrap_err();
            assert!(err.to_string().contains("PRIMARY_KEY or FALLBACK_KEY"));
        });
    }

    #[test]
    fn test_env_parse_or_default_and_override() {
        temp_env::with_var_unset("TIMEOUT_SECS", || {
            assert_eq!(env_parse_or(&["TIMEOUT_SECS"], 10u64).unwrap(), 10);
        });

        temp_env::with_var("TIMEOUT_SECS", Some(" 3 "), || {
            assert_eq!(env_parse_or(&["TIMEOUT_SECS"], 10u64).unwrap(), 3);
        });
    }

    #[test]
    fn test_env_parse_or_names_invalid_key() {
        temp_env::with_vars(
            [("FIRST_PORT", None), ("SECOND_PORT", Some("not_a_number"))],
            || {
                let err = env_parse_or(&["FIRST_PORT", "SECOND_PORT"], 8080u16).unwrap_err();
                assert!(err.to_string().contains("SECOND_PORT"));
            },
        );
    }
}
