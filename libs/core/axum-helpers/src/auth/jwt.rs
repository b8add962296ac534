use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default access token lifetime in seconds (15 minutes)
pub const ACCESS_TOKEN_TTL: i64 = 900;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String, // Subject (caller identity)
    pub exp: i64,    // Expiration time
    pub iat: i64,    // Issued at
    pub jti: String, // JWT ID
}

/// Stateless HS256 JWT authentication
#[derive(Clone)]
pub struct JwtAuth {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        let secret = config.secret.as_bytes();
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        tracing::info!("JWT auth initialized");
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Create an access token with the default TTL
    pub fn create_access_token(&self, subject: &str) -> eyre::Result<String> {
        self.create_token(subject, ACCESS_TOKEN_TTL)
    }

    /// Create a signed token for `subject` valid for `ttl_seconds`
    pub fn create_token(&self, subject: &str, ttl_seconds: i64) -> eyre::Result<String> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: subject.to_string(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        Ok(token)
    }

    /// Verify token signature and expiry, then decode claims
    pub fn verify_token(&self, token: &str) -> eyre::Result<JwtClaims> {
        let token_data = decode::<JwtClaims>(token, &self.decoding, &self.validation)?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(secret: &str) -> JwtAuth {
        JwtAuth::new(&JwtConfig::new(secret).unwrap())
    }

    #[test]
    fn test_token_round_trip_preserves_subject() {
        let auth = auth("0123456789abcdef0123456789abcdef");
        let token = auth.create_access_token("catalog-admin").unwrap();

        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "catalog-admin");
        assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_TTL);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_each_token_has_unique_jti() {
        let auth = auth("0123456789abcdef0123456789abcdef");
        let a = auth.verify_token(&auth.create_token("svc", 60).unwrap()).unwrap();
        let b = auth.verify_token(&auth.create_token("svc", 60).unwrap()).unwrap();
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_rejects_token_signed_with_other_secret() {
        let issuer = auth("0123456789abcdef0123456789abcdef");
        let verifier = auth("fedcba9876543210fedcba9876543210");

        let token = issuer.create_access_token("svc").unwrap();
        assert!(verifier.verify_token(&token).is_err());
    }

    #[test]
    fn test_rejects_expired_token() {
        let auth = auth("0123456789abcdef0123456789abcdef");
        let token = auth.create_token("svc", -120).unwrap();
        assert!(auth.verify_token(&token).is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        let auth = auth("0123456789abcdef0123456789abcdef");
        assert!(auth.verify_token("not.a.jwt").is_err());
    }
}
