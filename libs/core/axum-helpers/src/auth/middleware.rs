use super::jwt::JwtAuth;
use crate::errors::{AppError, responses::messages};
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

/// Extract JWT from Authorization header or `access_token` cookie
fn extract_token_from_request(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .or_else(|| {
            headers
                .get(header::COOKIE)
                .and_then(|v| v.to_str().ok())
                .and_then(|cookies| {
                    cookies.split(';').find_map(|cookie| {
                        cookie
                            .trim()
                            .strip_prefix("access_token=")
                            .map(str::to_string)
                    })
                })
        })
        .filter(|token| !token.is_empty())
}

/// JWT authentication middleware
///
/// Validates the token from the Authorization header or cookie and inserts
/// [`JwtClaims`](super::JwtClaims) into request extensions on success.
/// Requests without a valid token are answered with 401 and never reach the
/// inner service.
pub async fn jwt_auth_middleware(
    State(auth): State<JwtAuth>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = extract_token_from_request(request.headers()) else {
        tracing::debug!("No JWT found in Authorization header or cookie");
        return Err(AppError::Unauthorized(messages::UNAUTHORIZED.to_string()));
    };

    let claims = auth.verify_token(&token).map_err(|e| {
        tracing::debug!("JWT verification failed: {}", e);
        AppError::Unauthorized(messages::INVALID_TOKEN.to_string())
    })?;

    tracing::debug!(sub = %claims.sub, "Authenticated request");
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
