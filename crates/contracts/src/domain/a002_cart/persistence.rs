//! Storage mirror of the cart.
//!
//! The whole item list is written under a single key after every change
//! (full replace, no diffing). Reading never fails: anything that cannot be
//! turned back into a valid cart is treated as an empty one.

use std::collections::HashSet;

use thiserror::Error;

use super::line_item::LineItem;
use crate::domain::a001_product::ProductId;
use crate::shared::key_value::{KeyValueStore, StorageError};

/// Storage key the cart lives under
pub const CART_STORAGE_KEY: &str = "carts";

#[derive(Debug, Error)]
pub enum CartDecodeError {
    #[error("stored cart is not a valid item list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("stored cart item {id} is invalid: {reason}")]
    InvalidItem { id: ProductId, reason: String },

    #[error("stored cart contains product {0} more than once")]
    DuplicateId(ProductId),
}

/// Parse a stored cart and check it against the line item invariants.
pub fn decode_cart(raw: &str) -> Result<Vec<LineItem>, CartDecodeError> {
    let items: Vec<LineItem> = serde_json::from_str(raw)?;

    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        item.validate().map_err(|reason| CartDecodeError::InvalidItem {
            id: item.id,
            reason,
        })?;
        if !seen.insert(item.id) {
            return Err(CartDecodeError::DuplicateId(item.id));
        }
    }

    Ok(items)
}

pub fn encode_cart(items: &[LineItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string(items)
}

/// Reads and writes the cart list through a [`KeyValueStore`].
#[derive(Debug)]
pub struct CartRepository<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> CartRepository<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, CART_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the stored list; empty when absent, unavailable or malformed.
    pub fn read(&self) -> Vec<LineItem> {
        if !self.storage.is_available() {
            log::warn!("cart storage is not available, starting with an empty cart");
            return Vec::new();
        }

        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("failed to read cart from storage: {}", e);
                return Vec::new();
            }
        };

        match decode_cart(&raw) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("ignoring stored cart under '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Overwrite the stored list with `items`.
    pub fn write(&self, items: &[LineItem]) -> Result<(), StorageError> {
        if !self.storage.is_available() {
            return Err(StorageError::Unavailable);
        }
        let raw = encode_cart(items)?;
        self.storage.set_item(&self.key, &raw)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        if !self.storage.is_available() {
            return Err(StorageError::Unavailable);
        }
        self.storage.remove_item(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::Rating;
    use crate::shared::key_value::MemoryStore;

    fn item(id: i64, price: f64, quantity: u32) -> LineItem {
        LineItem {
            id: ProductId(id),
            title: format!("Product {}", id),
            description: "desc".into(),
            price,
            quantity,
            image: format!("https://img.example/{}.jpg", id),
            category: String::new(),
            rating: Some(Rating { rate: 4.1, count: 259 }),
        }
    }

    #[test]
    fn test_read_absent_key_is_empty() {
        let repo = CartRepository::new(MemoryStore::new());
        assert!(repo.read().is_empty());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let repo = CartRepository::new(MemoryStore::new());
        let items = vec![item(1, 109.95, 2), item(5, 695.0, 1), item(9, 64.0, 7)];

        repo.write(&items).unwrap();

        assert_eq!(repo.read(), items);
    }

    #[test]
    fn test_full_precision_prices_survive_reload_bit_for_bit() {
        let repo = CartRepository::new(MemoryStore::new());
        let mut seed: u64 = 0x9e37_79b9_7f4a_7c15;
        let mut next_unit = || {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            (seed >> 11) as f64 / (1u64 << 53) as f64
        };

        for round in 0..40 {
            let items: Vec<LineItem> = (0..500)
                .map(|i| {
                    let mut line = item(round * 500 + i, next_unit() * 1000.0, 1 + (i as u32 % 4));
                    line.rating = Some(Rating {
                        rate: next_unit() * 5.0,
                        count: i as u32,
                    });
                    line
                })
                .collect();

            repo.write(&items).unwrap();
            let loaded = repo.read();

            assert_eq!(loaded.len(), items.len());
            for (before, after) in items.iter().zip(&loaded) {
                assert_eq!(
                    before.price.to_bits(),
                    after.price.to_bits(),
                    "price {} changed on reload",
                    before.price
                );
                assert_eq!(
                    before.rating.map(|r| r.rate.to_bits()),
                    after.rating.map(|r| r.rate.to_bits())
                );
            }
            assert_eq!(loaded, items);
        }
    }

    #[test]
    fn test_write_overwrites_previous_value() {
        let repo = CartRepository::new(MemoryStore::new());
        repo.write(&[item(1, 1.0, 1), item(2, 2.0, 1)]).unwrap();
        repo.write(&[item(3, 3.0, 1)]).unwrap();

        let ids: Vec<_> = repo.read().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![ProductId(3)]);
    }

    #[test]
    fn test_malformed_payloads_read_as_empty() {
        for raw in [
            "",
            "not json",
            "null",
            "{}",
            r#"{"id": 1}"#,
            r#"[{"id": 1, "title": "x"}]"#,
            r#"[{"id": 1, "title": "x", "price": 1.0, "quantity": 0}]"#,
            r#"[{"id": 1, "title": "x", "price": -3.0, "quantity": 1}]"#,
            r#"[{"id": 1, "title": "x", "price": 1.0, "quantity": -2}]"#,
        ] {
            let repo = CartRepository::new(MemoryStore::with_entry(CART_STORAGE_KEY, raw));
            assert!(repo.read().is_empty(), "payload {:?} should read as empty", raw);
        }
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let raw = encode_cart(&[item(1, 1.0, 1), item(1, 1.0, 2)]).unwrap();
        assert!(matches!(
            decode_cart(&raw),
            Err(CartDecodeError::DuplicateId(ProductId(1)))
        ));
    }

    #[test]
    fn test_reads_cart_written_by_web_storefront() {
        let raw = r#"[{"id":2,"title":"Mens Casual Premium Slim Fit T-Shirts ","price":22.3,"description":"Slim-fitting style","category":"men's clothing","image":"https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg","rating":{"rate":4.1,"count":259},"quantity":3}]"#;
        let items = decode_cart(raw).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, ProductId(2));
        assert_eq!(items[0].quantity, 3);
        assert_eq!(items[0].category, "men's clothing");
    }

    #[test]
    fn test_unavailable_storage() {
        let repo = CartRepository::new(MemoryStore::unavailable());
        assert!(repo.read().is_empty());
        assert!(matches!(repo.write(&[]), Err(StorageError::Unavailable)));
        assert!(matches!(repo.clear(), Err(StorageError::Unavailable)));
    }

    #[test]
    fn test_custom_key_and_clear() {
        let repo = CartRepository::with_key(MemoryStore::new(), "cart-test");
        repo.write(&[item(1, 1.0, 1)]).unwrap();
        assert!(repo.storage().get_item("cart-test").unwrap().is_some());
        assert!(repo.storage().get_item(CART_STORAGE_KEY).unwrap().is_none());

        repo.clear().unwrap();
        assert!(repo.read().is_empty());
    }
}
