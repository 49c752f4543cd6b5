use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, generated on create
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Price in whole currency units
    pub price: i64,
    /// Image URL
    pub image: Option<String>,
    /// Blocked products cannot be fetched individually
    #[serde(default)]
    pub is_blocked: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateProduct {
    /// 3 to 15 letters, digits or spaces
    #[validate(
        length(min = 3, max = 15),
        custom(function = "validate_product_name")
    )]
    #[schema(example = "Chair", min_length = 3, max_length = 15)]
    pub name: String,
    #[validate(range(min = 10))]
    #[schema(example = 50, minimum = 10)]
    pub price: i64,
    #[validate(url)]
    pub image: Option<String>,
}

/// DTO for updating an existing product. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateProduct {
    #[validate(
        length(min = 3, max = 15),
        custom(function = "validate_product_name")
    )]
    pub name: Option<String>,
    #[validate(range(min = 10))]
    pub price: Option<i64>,
    #[validate(url)]
    pub image: Option<String>,
    pub is_blocked: Option<bool>,
}

/// Query parameters for listing products
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema, IntoParams)]
#[validate(schema(function = "validate_price_range"))]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Maximum number of results
    #[validate(range(min = 1))]
    pub limit: Option<usize>,
    /// Number of results to skip
    pub offset: Option<usize>,
    /// Exact price match
    #[validate(range(min = 10))]
    pub price: Option<i64>,
    /// Lower price bound, inclusive. Requires `price_max`.
    #[validate(range(min = 10))]
    pub price_min: Option<i64>,
    /// Upper price bound, inclusive
    #[validate(range(min = 10))]
    pub price_max: Option<i64>,
}

fn validate_product_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ') {
        Ok(())
    } else {
        Err(ValidationError::new("alphanum")
            .with_message("name may only contain letters, digits and spaces".into()))
    }
}

fn validate_price_range(query: &ProductQuery) -> Result<(), ValidationError> {
    match (query.price_min, query.price_max) {
        (Some(_), None) => Err(ValidationError::new("price_max_required")
            .with_message("price_max is required when price_min is given".into())),
        (Some(min), Some(max)) if min > max => Err(ValidationError::new("price_range")
            .with_message("price_min must not exceed price_max".into())),
        _ => Ok(()),
    }
}

impl Product {
    /// Create a new product from CreateProduct DTO
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            price: input.price,
            image: input.image,
            is_blocked: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from UpdateProduct DTO
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(image) = update.image {
            self.image = Some(image);
        }
        if let Some(is_blocked) = update.is_blocked {
            self.is_blocked = is_blocked;
        }
        self.updated_at = Utc::now();
    }
}

impl ProductQuery {
    /// Whether `product` passes the price filters of this query.
    pub fn matches(&self, product: &Product) -> bool {
        if self.price.is_some_and(|price| product.price != price) {
            return false;
        }
        if self.price_min.is_some_and(|min| product.price < min) {
            return false;
        }
        if self.price_max.is_some_and(|max| product.price > max) {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, price: i64) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            price,
            image: None,
        }
    }

    fn product(price: i64) -> Product {
        Product::new(create("Lamp", price))
    }

    #[test]
    fn test_create_product_accepts_valid_input() {
        assert!(create("Chair", 50).validate().is_ok());
        assert!(create("Desk 2", 10).validate().is_ok());
    }

    #[test]
    fn test_create_product_name_rules() {
        let errors = create("ab", 50).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));

        let errors = create("a very long product", 50).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));

        let errors = create("chair!", 50).validate().unwrap_err();
        assert_eq!(errors.field_errors()["name"][0].code, "alphanum");
    }

    #[test]
    fn test_create_product_price_minimum() {
        let errors = create("Chair", 9).validate().unwrap_err();
        assert_eq!(errors.field_errors()["price"][0].code, "range");
    }

    #[test]
    fn test_create_product_image_must_be_url() {
        let mut input = create("Chair", 50);
        input.image = Some("not a url".into());
        assert!(input.validate().is_err());

        input.image = Some("https://example.com/chair.png".into());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_create_product_rejects_unknown_fields() {
        let result: Result<CreateProduct, _> =
            serde_json::from_str(r#"{"name":"Chair","price":50,"color":"red"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_product_all_fields_optional() {
        let update: UpdateProduct = serde_json::from_str("{}").unwrap();
        assert!(update.validate().is_ok());

        let update: UpdateProduct = serde_json::from_str(r#"{"price":5}"#).unwrap();
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_query_price_min_requires_price_max() {
        let query = ProductQuery {
            price_min: Some(20),
            ..Default::default()
        };
        let errors = query.validate().unwrap_err();
        assert_eq!(errors.field_errors()["__all__"][0].code, "price_max_required");

        let query = ProductQuery {
            price_min: Some(20),
            price_max: Some(40),
            ..Default::default()
        };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_query_inverted_range_rejected() {
        let query = ProductQuery {
            price_min: Some(50),
            price_max: Some(20),
            ..Default::default()
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_query_matches_price_filters() {
        let exact = ProductQuery {
            price: Some(30),
            ..Default::default()
        };
        assert!(exact.matches(&product(30)));
        assert!(!exact.matches(&product(31)));

        let range = ProductQuery {
            price_min: Some(20),
            price_max: Some(40),
            ..Default::default()
        };
        assert!(range.matches(&product(20)));
        assert!(range.matches(&product(40)));
        assert!(!range.matches(&product(19)));
        assert!(!range.matches(&product(41)));

        // A lone floor is refused by validation, but still filters on its own.
        let floor = ProductQuery {
            price_min: Some(20),
            ..Default::default()
        };
        assert!(floor.matches(&product(20)));
        assert!(floor.matches(&product(500)));
        assert!(!floor.matches(&product(19)));

        let ceiling = ProductQuery {
            price_max: Some(40),
            ..Default::default()
        };
        assert!(ceiling.matches(&product(15)));
        assert!(!ceiling.matches(&product(45)));

        assert!(ProductQuery::default().matches(&product(99)));
    }

    #[test]
    fn test_apply_update_changes_only_given_fields() {
        let mut p = product(30);
        let name = p.name.clone();
        p.apply_update(UpdateProduct {
            price: Some(60),
            is_blocked: Some(true),
            ..Default::default()
        });

        assert_eq!(p.name, name);
        assert_eq!(p.price, 60);
        assert!(p.is_blocked);
        assert!(p.updated_at >= p.created_at);
    }
}
