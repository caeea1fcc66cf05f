use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

/// Catalog product identifier (integer id from the catalog API)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.as_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(ProductId::new)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Rating
// ============================================================================

/// Maximum number of stars a rating is drawn with
pub const MAX_STARS: u8 = 5;

/// Customer rating summary, informational only
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

impl Rating {
    /// Split the rate into (filled, outline) stars.
    ///
    /// Filled is `floor(rate)` clamped to `0..=5`; the two always add up to 5.
    pub fn stars(&self) -> (u8, u8) {
        let rate = if self.rate.is_finite() { self.rate } else { 0.0 };
        let filled = rate.floor().clamp(0.0, MAX_STARS as f64) as u8;
        (filled, MAX_STARS - filled)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalog product as served by the catalog API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Product {
    /// Validate catalog data before it can be put into a cart.
    ///
    /// Only the price matters; the rating is display-only and any value is
    /// accepted, as it is when a stored cart is loaded.
    pub fn validate(&self) -> Result<(), String> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("Product {}: invalid price {}", self.id, self.price));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use and walks in the forest.",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#
    }

    #[test]
    fn test_parse_catalog_product() {
        let product: Product = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(product.id, ProductId(1));
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating, Some(Rating { rate: 3.9, count: 120 }));
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_parse_without_rating() {
        let product: Product =
            serde_json::from_str(r#"{"id": 7, "title": "Ring", "price": 9.99}"#).unwrap();
        assert!(product.rating.is_none());
        assert!(product.description.is_empty());
    }

    #[test]
    fn test_stars() {
        assert_eq!(Rating { rate: 3.9, count: 1 }.stars(), (3, 2));
        assert_eq!(Rating { rate: 0.0, count: 0 }.stars(), (0, 5));
        assert_eq!(Rating { rate: 5.0, count: 2 }.stars(), (5, 0));
        assert_eq!(Rating { rate: 7.5, count: 2 }.stars(), (5, 0));
        assert_eq!(Rating { rate: -1.0, count: 2 }.stars(), (0, 5));
        assert_eq!(Rating { rate: f64::NAN, count: 2 }.stars(), (0, 5));
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let mut product: Product = serde_json::from_str(sample_json()).unwrap();
        product.price = -1.0;
        assert!(product.validate().is_err());
        product.price = f64::INFINITY;
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_out_of_range_rating_does_not_block_validation() {
        let mut product: Product = serde_json::from_str(sample_json()).unwrap();
        product.rating = Some(Rating { rate: 7.5, count: 3 });
        assert!(product.validate().is_ok());
        product.rating = Some(Rating { rate: -1.0, count: 0 });
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_product_id_from_string() {
        assert_eq!(ProductId::from_string("42"), Ok(ProductId(42)));
        assert!(ProductId::from_string("abc").is_err());
        assert_eq!(ProductId(42).as_string(), "42");
    }
}
