//! JWT configuration loaded through `core_config::FromEnv`.

use core_config::{ConfigError, FromEnv, env_required};

/// Minimum accepted length of the HS256 signing secret.
pub const MIN_SECRET_LEN: usize = 32;

/// JWT authentication configuration.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` (required) - at least 32 characters
///
/// # Example
///
/// ```ignore
/// use axum_helpers::JwtConfig;
/// use core_config::FromEnv;
///
/// let config = JwtConfig::from_env()?;
///
/// // Manual construction (for testing)
/// let config = JwtConfig::new("my-super-secret-key-that-is-at-least-32-chars")?;
/// ```
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// JWT signing secret
    pub secret: String,
}

impl JwtConfig {
    /// Create a JwtConfig, rejecting secrets shorter than [`MIN_SECRET_LEN`].
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::ParseError {
                key: "JWT_SECRET".to_string(),
                details: format!(
                    "must be at least {} characters (got {}). Generate one with: generate-jwt-secret",
                    MIN_SECRET_LEN,
                    secret.len()
                ),
            });
        }
        Ok(Self { secret })
    }
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Self::new(env_required("JWT_SECRET")?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_SECRET: &str = "this-is-a-valid-secret-with-32-chars!";

    #[test]
    fn test_jwt_config_new_valid() {
        let config = JwtConfig::new(VALID_SECRET).unwrap();
        assert_eq!(config.secret, VALID_SECRET);
    }

    #[test]
    fn test_jwt_config_new_too_short() {
        let err = JwtConfig::new("short").unwrap_err();
        assert!(err.to_string().contains("32 characters"));
    }

    #[test]
    fn test_jwt_config_from_env_valid() {
        temp_env::with_var("JWT_SECRET", Some(VALID_SECRET), || {
            let config = JwtConfig::from_env().unwrap();
            assert_eq!(config.secret, VALID_SECRET);
        });
    }

    #[test]
    fn test_jwt_config_from_env_missing() {
        temp_env::with_var_unset("JWT_SECRET", || {
            let err = JwtConfig::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::MissingEnvVar(_)));
            assert!(err.to_string().contains("JWT_SECRET"));
        });
    }

    #[test]
    fn test_jwt_config_from_env_too_short() {
        temp_env::with_var("JWT_SECRET", Some("short"), || {
            let err = JwtConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("JWT_SECRET"));
        });
    }
}
