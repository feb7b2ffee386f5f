use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Largest integral part allowed by the `decimal(10,2)` price column:
/// eight integer digits plus two fractional digits.
const PRICE_MAX_INTEGRAL: i64 = 100_000_000;

/// Custom validator for prices: at most two decimal places and ten digits
/// in total, mirroring the database column.
fn validate_price(price: &Decimal) -> Result<(), validator::ValidationError> {
    if price.scale() > 2 {
        return Err(validator::ValidationError::new("price_scale"));
    }
    if price.abs().trunc() >= Decimal::from(PRICE_MAX_INTEGRAL) {
        return Err(validator::ValidationError::new("price_digits"));
    }
    Ok(())
}

/// Product entity - a single inventory item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned by the store
    pub id: i32,
    /// Product name
    pub name: String,
    /// Product type/category label
    #[serde(rename = "type")]
    pub kind: String,
    /// Stock Keeping Unit, unique across all products
    pub sku: String,
    /// Optional product image
    pub image_url: Option<String>,
    /// Free-form description
    pub description: String,
    /// Units on hand
    pub quantity: i32,
    /// Unit price, two decimal places
    pub price: Decimal,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 100))]
    pub kind: String,
    #[validate(length(min = 1, max = 100))]
    pub sku: String,
    #[validate(url)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: String,
    pub quantity: i32,
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
}

/// DTO for updating an existing product.
///
/// Updates are a full replace: every field is written, so the same fields
/// are required as on create. The id is taken from the path and cannot
/// change.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 100))]
    pub kind: String,
    #[validate(length(min = 1, max = 100))]
    pub sku: String,
    #[validate(url)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: String,
    pub quantity: i32,
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
}

/// Query filters for listing products
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct ProductFilter {
    /// Filter by product type
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Substring match on the product name
    pub search: Option<String>,
    /// Maximum number of results
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Number of results to skip
    #[serde(default)]
    pub offset: u64,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            kind: None,
            search: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

fn default_limit() -> u64 {
    50
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn create_input() -> CreateProduct {
        CreateProduct {
            name: "Widget".to_string(),
            kind: "Tool".to_string(),
            sku: "W-1".to_string(),
            image_url: None,
            description: String::new(),
            quantity: 5,
            price: Decimal::from_str("9.99").unwrap(),
        }
    }

    #[test]
    fn test_create_product_valid() {
        assert!(create_input().validate().is_ok());
    }

    #[test]
    fn test_name_required() {
        let mut input = create_input();
        input.name = String::new();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_name_too_long() {
        let mut input = create_input();
        input.name = "x".repeat(101);
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_sku_too_long() {
        let mut input = create_input();
        input.sku = "s".repeat(101);
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_image_url_must_be_url() {
        let mut input = create_input();
        input.image_url = Some("not a url".to_string());
        assert!(input.validate().is_err());

        input.image_url = Some("https://example.com/widget.png".to_string());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_price_rejects_three_decimal_places() {
        let mut input = create_input();
        input.price = Decimal::from_str("9.999").unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_price_rejects_more_than_ten_digits() {
        let mut input = create_input();
        input.price = Decimal::from_str("123456789.00").unwrap();
        assert!(input.validate().is_err());

        input.price = Decimal::from_str("99999999.99").unwrap();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_product_serializes_type_field() {
        let product = Product {
            id: 1,
            name: "Widget".to_string(),
            kind: "Tool".to_string(),
            sku: "W-1".to_string(),
            image_url: None,
            description: String::new(),
            quantity: 5,
            price: Decimal::from_str("9.99").unwrap(),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["type"], "Tool");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_filter_defaults() {
        let filter: ProductFilter = serde_json::from_str("{}").unwrap();
        assert_eq!(filter.limit, 50);
        assert_eq!(filter.offset, 0);
        assert!(filter.kind.is_none());
    }
}
