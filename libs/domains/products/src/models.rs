use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Product as exposed over HTTP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Storage-assigned identifier (24 hex characters)
    #[schema(example = "65f1c0ffee0000000000beef")]
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Price in cents (for precision)
    pub price: i64,
    /// Current stock quantity
    pub stock: i32,
    /// Tags for search and organization
    pub tags: Vec<String>,
    /// Additional metadata as JSON
    pub metadata: serde_json::Value,
    /// Creation timestamp (millisecond precision)
    pub created_at: DateTime<Utc>,
    /// Last update timestamp (millisecond precision)
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product
///
/// Client-supplied `id`, `_id`, `created_at` and `updated_at` are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in cents
    #[validate(range(min = 0))]
    #[serde(default)]
    pub price: i64,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(custom(function = "validate_metadata"))]
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// DTO for replacing the business fields of an existing product
///
/// Omitted fields are reset to their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in cents
    #[validate(range(min = 0))]
    #[serde(default)]
    pub price: i64,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(custom(function = "validate_metadata"))]
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// Rejects metadata that cannot be stored as a BSON document.
///
/// Integers must fit in `i64` and object keys must not start with `$`.
fn validate_metadata(value: &serde_json::Value) -> Result<(), ValidationError> {
    match value {
        serde_json::Value::Number(n) if n.is_u64() && n.as_i64().is_none() => Err(
            ValidationError::new("metadata_integer_range")
                .with_message("integers in metadata must fit in a signed 64-bit range".into()),
        ),
        serde_json::Value::Array(items) => items.iter().try_for_each(validate_metadata),
        serde_json::Value::Object(map) => map.iter().try_for_each(|(key, nested)| {
            if key.starts_with('$') {
                return Err(ValidationError::new("metadata_reserved_key")
                    .with_message("metadata keys must not start with '$'".into()));
            }
            validate_metadata(nested)
        }),
        _ => Ok(()),
    }
}
