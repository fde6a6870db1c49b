use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Product entity - represents a product stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Image URL or path
    pub image: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product.
///
/// Every field deserializes as optional: presence is part of the
/// required-field check in the service, so an incomplete payload gets the
/// contract's single rejection message instead of a deserialization error.
/// Unknown fields in the payload are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required)]
    pub price: Option<f64>,
    #[validate(required, length(min = 1))]
    pub image: Option<String>,
}

/// DTO for updating an existing product
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
}

impl Product {
    /// Create a new product record from a CreateProduct DTO.
    ///
    /// Callers run the required-field validation first; absent fields fall
    /// back to defaults here rather than panicking.
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name.unwrap_or_default(),
            price: input.price.unwrap_or_default(),
            image: input.image.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from an UpdateProduct DTO.
    ///
    /// Absent and null fields keep their stored values; `updated_at` is
    /// refreshed. Provided values are not re-validated.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(name: &str, price: f64, image: &str) -> CreateProduct {
        CreateProduct {
            name: Some(name.to_string()),
            price: Some(price),
            image: Some(image.to_string()),
        }
    }

    #[test]
    fn test_new_assigns_id_and_timestamps() {
        let product = Product::new(create_input("Pen", 2.0, "pen.png"));
        assert!(!product.id.is_nil());
        assert_eq!(product.name, "Pen");
        assert_eq!(product.price, 2.0);
        assert_eq!(product.image, "pen.png");
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_apply_update_replaces_named_fields_only() {
        let mut product = Product::new(create_input("Pen", 2.0, "pen.png"));
        let created_at = product.created_at;

        product.apply_update(UpdateProduct {
            price: Some(3.0),
            ..Default::default()
        });

        assert_eq!(product.name, "Pen");
        assert_eq!(product.price, 3.0);
        assert_eq!(product.image, "pen.png");
        assert_eq!(product.created_at, created_at);
        assert!(product.updated_at >= created_at);
    }

    #[test]
    fn test_apply_update_accepts_empty_values() {
        // Updates are not re-validated: an empty name goes through
        let mut product = Product::new(create_input("Pen", 2.0, "pen.png"));
        product.apply_update(UpdateProduct {
            name: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(product.name, "");
    }

    #[test]
    fn test_product_serializes_with_wire_names() {
        let product = Product::new(create_input("Pen", 2.0, "pen.png"));
        let value = serde_json::to_value(&product).unwrap();

        assert!(value.get("_id").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_create_product_tolerates_missing_and_unknown_fields() {
        let input: CreateProduct =
            serde_json::from_str(r#"{"price": 5, "sku": "ignored"}"#).unwrap();
        assert!(input.name.is_none());
        assert_eq!(input.price, Some(5.0));
        assert!(input.image.is_none());
    }

    #[test]
    fn test_create_product_validation_requires_all_fields() {
        use validator::Validate;

        assert!(create_input("Pen", 2.0, "pen.png").validate().is_ok());
        assert!(create_input("", 2.0, "pen.png").validate().is_err());
        assert!(CreateProduct {
            name: Some("Pen".to_string()),
            price: None,
            image: Some("pen.png".to_string()),
        }
        .validate()
        .is_err());
    }
}
