//! ObjectId path parameter extractor.

use crate::errors::{AppError, responses::messages};
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use bson::oid::ObjectId;

/// Extractor for MongoDB `ObjectId` path parameters.
///
/// Parses the single path segment as a 24-character hex string and rejects
/// anything else with a 400 before the handler runs.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::ObjectIdPath;
///
/// async fn get_product(ObjectIdPath(id): ObjectIdPath) -> String {
///     format!("Product ID: {}", id.to_hex())
/// }
///
/// let app = Router::new().route("/products/{id}", get(get_product));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ObjectIdPath(pub ObjectId);

impl<S> FromRequestParts<S> for ObjectIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        ObjectId::parse_str(&raw).map(ObjectIdPath).map_err(|_| {
            tracing::debug!(id = %raw, "Rejected malformed ObjectId");
            AppError::InvalidObjectId(messages::INVALID_ID.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use tower::ServiceExt;

    async fn echo(ObjectIdPath(id): ObjectIdPath) -> String {
        id.to_hex()
    }

    fn app() -> Router {
        Router::new().route("/items/{id}", get(echo))
    }

    #[tokio::test]
    async fn test_accepts_valid_object_id() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/items/65f1c0ffee0000000000beef")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rejects_malformed_ids() {
        for bad in ["abc", "65f1c0ffee0000000000beefff", "zzzzzzzzzzzzzzzzzzzzzzzz"] {
            let response = app()
                .oneshot(
                    Request::builder()
                        .uri(format!("/items/{bad}"))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "id {bad}");
        }
    }
}
