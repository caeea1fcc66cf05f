use serde::{Deserialize, Serialize};

use crate::domain::a001_product::{Product, ProductId, Rating};

/// One product in the cart with its own quantity.
///
/// The serialized form is the catalog product plus `quantity`, so carts
/// written by earlier storefront builds load as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Unit price captured when the product was added
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl LineItem {
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price,
            quantity,
            image: product.image.clone(),
            category: product.category.clone(),
            // NaN would be stored as `null` and make the whole cart unreadable
            rating: product.rating.filter(|r| r.rate.is_finite()),
        }
    }

    /// `price * quantity`
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.quantity == 0 {
            return Err("quantity must be at least 1".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("invalid price {}", self.price));
        }
        Ok(())
    }
}
