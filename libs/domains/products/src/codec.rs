//! Conversion between the storage document and the wire representation.

use chrono::{DateTime as ChronoDateTime, Utc};
use mongodb::bson::{doc, oid::ObjectId, to_bson, DateTime, Document};
use serde::{Deserialize, Serialize};

use crate::models::{CreateProduct, Product, UpdateProduct};

/// Product as stored in the `products` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl ProductDocument {
    /// Build a new document with a fresh identifier; both timestamps are `now`.
    pub fn new(input: CreateProduct, now: DateTime) -> Self {
        Self {
            id: ObjectId::new(),
            name: input.name,
            description: input.description,
            price: input.price,
            stock: input.stock,
            tags: input.tags,
            metadata: input.metadata,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            name: doc.name,
            description: doc.description,
            price: doc.price,
            stock: doc.stock,
            tags: doc.tags,
            metadata: doc.metadata,
            created_at: to_chrono(doc.created_at),
            updated_at: to_chrono(doc.updated_at),
        }
    }
}

/// `$set` update replacing every business field and refreshing `updated_at`.
///
/// Never touches `_id` or `created_at`.
pub fn replacement_update(
    input: UpdateProduct,
    now: DateTime,
) -> Result<Document, mongodb::bson::ser::Error> {
    Ok(doc! {
        "$set": {
            "name": input.name,
            "description": input.description,
            "price": input.price,
            "stock": input.stock,
            "tags": input.tags,
            "metadata": to_bson(&input.metadata)?,
            "updated_at": now,
        }
    })
}

/// Current time at BSON (millisecond) precision.
pub fn now() -> DateTime {
    DateTime::now()
}

fn to_chrono(dt: DateTime) -> ChronoDateTime<Utc> {
    ChronoDateTime::from_timestamp_millis(dt.timestamp_millis()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{from_document, to_document, Bson};
    use serde_json::json;

    fn create_input() -> CreateProduct {
        CreateProduct {
            name: "pen".to_string(),
            description: "blue ink".to_string(),
            price: 199,
            stock: 12,
            tags: vec!["office".to_string()],
            metadata: json!({ "color": "blue", "sizes": [1, 2] }),
        }
    }

    #[test]
    fn test_new_document_assigns_id_and_equal_timestamps() {
        let now = DateTime::from_millis(1_700_000_000_123);
        let a = ProductDocument::new(create_input(), now);
        let b = ProductDocument::new(create_input(), now);

        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, now);
        assert_eq!(a.updated_at, now);
    }

    #[test]
    fn test_document_uses_native_id_and_dates() {
        let doc = ProductDocument::new(create_input(), DateTime::from_millis(0));
        let stored = to_document(&doc).unwrap();

        assert!(matches!(stored.get("_id"), Some(Bson::ObjectId(_))));
        assert!(matches!(stored.get("created_at"), Some(Bson::DateTime(_))));
        assert!(stored.get("id").is_none());

        let decoded: ProductDocument = from_document(stored).unwrap();
        assert_eq!(decoded, doc);
    }

    #[test]
    fn test_wire_form_has_hex_id_and_millisecond_timestamps() {
        let now = DateTime::from_millis(1_700_000_000_123);
        let doc = ProductDocument::new(create_input(), now);
        let id = doc.id;

        let product = Product::from(doc);
        assert_eq!(product.id, id.to_hex());
        assert_eq!(product.id.len(), 24);
        assert_eq!(product.created_at.timestamp_millis(), 1_700_000_000_123);

        let wire = serde_json::to_value(&product).unwrap();
        assert_eq!(wire["created_at"], "2023-11-14T22:13:20.123Z");
        assert_eq!(wire["metadata"]["color"], "blue");
    }

    #[test]
    fn test_replacement_update_excludes_identity_and_creation_time() {
        let input = UpdateProduct {
            name: "pencil".to_string(),
            description: String::new(),
            price: 0,
            stock: 3,
            tags: vec![],
            metadata: serde_json::Value::Null,
        };
        let now = DateTime::from_millis(42);

        let update = replacement_update(input, now).unwrap();
        let set = update.get_document("$set").unwrap();

        assert_eq!(set.get_str("name").unwrap(), "pencil");
        assert_eq!(set.get_i32("stock").unwrap(), 3);
        assert_eq!(set.get_datetime("updated_at").unwrap(), &now);
        assert!(matches!(set.get("metadata"), Some(Bson::Null)));
        assert!(!set.contains_key("_id"));
        assert!(!set.contains_key("created_at"));
    }

    #[test]
    fn test_documents_written_without_optional_fields_decode_with_defaults() {
        let stored = doc! {
            "_id": ObjectId::new(),
            "name": "legacy",
            "created_at": DateTime::from_millis(0),
            "updated_at": DateTime::from_millis(0),
        };

        let decoded: ProductDocument = from_document(stored).unwrap();
        assert_eq!(decoded.description, "");
        assert_eq!(decoded.price, 0);
        assert!(decoded.metadata.is_null());
    }
}
