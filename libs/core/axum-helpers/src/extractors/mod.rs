//! Custom extractors for Axum handlers.
//!
//! Reusable extractors that reject malformed input with a structured
//! [`AppError`](crate::errors::AppError) before a handler runs.

pub mod object_id_path;
pub mod validated_json;

pub use object_id_path::ObjectIdPath;
pub use validated_json::ValidatedJson;
