//! Cart store: the in-memory cart for the current session.
//!
//! Every mutation is mirrored to storage through [`CartRepository`] before it
//! returns. Operations on ids the cart does not hold are no-ops reported as
//! [`CartChange::NotFound`] and do not touch storage.

use super::line_item::LineItem;
use super::persistence::CartRepository;
use crate::domain::a001_product::{Product, ProductId};
use crate::shared::key_value::KeyValueStore;

/// What a mutation did to the cart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    Added { id: ProductId, quantity: u32 },
    QuantityChanged { id: ProductId, quantity: u32 },
    Removed { id: ProductId },
    Cleared,
    NotFound { id: ProductId },
    Unchanged,
}

impl CartChange {
    /// True when the item list changed
    pub fn is_mutation(&self) -> bool {
        !matches!(self, CartChange::NotFound { .. } | CartChange::Unchanged)
    }
}

/// Totals shown next to the cart
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartSummary {
    pub subtotal: f64,
    pub shipping: f64,
    pub total: f64,
}

#[derive(Debug)]
pub struct CartStore<S> {
    items: Vec<LineItem>,
    repository: CartRepository<S>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Empty store; call [`CartStore::load`] to pick up the stored cart.
    pub fn new(repository: CartRepository<S>) -> Self {
        Self {
            items: Vec::new(),
            repository,
        }
    }

    /// Store over `storage` with the stored cart already loaded
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(CartRepository::new(storage));
        store.load();
        store
    }

    /// Replace the in-memory list with the stored one.
    pub fn load(&mut self) -> &[LineItem] {
        self.items = self.repository.read();
        log::debug!("cart loaded with {} item(s)", self.items.len());
        &self.items
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities over all lines
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| item.quantity as u64).sum()
    }

    /// `sum(price * quantity)` over the current list
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .fold(0.0, |acc, item| acc + item.line_total())
    }

    /// Subtotal plus a flat shipping fee; an empty cart ships for free.
    pub fn summary(&self, shipping_fee: f64) -> CartSummary {
        let subtotal = self.total();
        let shipping = if self.items.is_empty() {
            0.0
        } else {
            shipping_fee
        };
        CartSummary {
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }

    /// Put `quantity` units of `product` into the cart.
    ///
    /// An existing line keeps its captured price and grows by `quantity`.
    pub fn add(&mut self, product: &Product, quantity: u32) -> CartChange {
        if quantity == 0 {
            return CartChange::Unchanged;
        }
        if let Err(e) = product.validate() {
            log::warn!("refusing to add product to cart: {}", e);
            return CartChange::Unchanged;
        }

        let change = match self.position(product.id) {
            Some(idx) => {
                let item = &mut self.items[idx];
                item.quantity = item.quantity.saturating_add(quantity);
                CartChange::QuantityChanged {
                    id: item.id,
                    quantity: item.quantity,
                }
            }
            None => {
                self.items.push(LineItem::from_product(product, quantity));
                CartChange::Added {
                    id: product.id,
                    quantity,
                }
            }
        };
        self.commit(change)
    }

    pub fn add_one(&mut self, product: &Product) -> CartChange {
        self.add(product, 1)
    }

    pub fn increment(&mut self, id: ProductId) -> CartChange {
        let Some(idx) = self.position(id) else {
            return CartChange::NotFound { id };
        };
        let item = &mut self.items[idx];
        item.quantity = item.quantity.saturating_add(1);
        let change = CartChange::QuantityChanged {
            id,
            quantity: item.quantity,
        };
        self.commit(change)
    }

    /// Decrease by one; a line at quantity 1 is removed instead.
    pub fn decrement(&mut self, id: ProductId) -> CartChange {
        let Some(idx) = self.position(id) else {
            return CartChange::NotFound { id };
        };
        let change = if self.items[idx].quantity <= 1 {
            self.items.remove(idx);
            CartChange::Removed { id }
        } else {
            let item = &mut self.items[idx];
            item.quantity -= 1;
            CartChange::QuantityChanged {
                id,
                quantity: item.quantity,
            }
        };
        self.commit(change)
    }

    pub fn remove(&mut self, id: ProductId) -> CartChange {
        let Some(idx) = self.position(id) else {
            return CartChange::NotFound { id };
        };
        self.items.remove(idx);
        self.commit(CartChange::Removed { id })
    }

    /// Drop every line and the stored entry.
    pub fn clear(&mut self) -> CartChange {
        self.items.clear();
        if let Err(e) = self.repository.clear() {
            log::warn!("failed to clear stored cart: {}", e);
        }
        log::debug!("cart cleared");
        CartChange::Cleared
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn commit(&self, change: CartChange) -> CartChange {
        log::debug!("cart {:?}", change);
        if let Err(e) = self.repository.write(&self.items) {
            log::warn!("failed to persist cart: {}", e);
        }
        change
    }
}
