//! Session cart shared through Leptos context.
//!
//! The store lives in one signal; views read it through the tracked getters
//! below and mutate it with exactly one call per user gesture. Every
//! mutation is written to `localStorage` by the store itself.

use contracts::domain::a001_product::{Product, ProductId};
use contracts::domain::a002_cart::{CartChange, CartRepository, CartStore, CartSummary, LineItem};
use leptos::prelude::*;

use crate::shared::config::config;
use crate::shared::storage::BrowserStorage;

#[derive(Clone, Copy)]
pub struct CartContext {
    store: RwSignal<CartStore<BrowserStorage>>,
    shipping_fee: f64,
}

impl CartContext {
    /// Build the store and read the stored cart once for this session.
    pub fn load() -> Self {
        let settings = &config().cart;
        let repository = CartRepository::with_key(BrowserStorage, settings.storage_key.clone());
        let mut store = CartStore::new(repository);
        store.load();

        Self {
            store: RwSignal::new(store),
            shipping_fee: settings.shipping_fee,
        }
    }

    pub fn items(&self) -> Vec<LineItem> {
        self.store.with(|s| s.items().to_vec())
    }

    pub fn is_empty(&self) -> bool {
        self.store.with(|s| s.is_empty())
    }

    pub fn item_count(&self) -> u64 {
        self.store.with(|s| s.item_count())
    }

    pub fn quantity_of(&self, id: ProductId) -> Option<u32> {
        self.store.with(|s| s.get(id).map(|item| item.quantity))
    }

    pub fn summary(&self) -> CartSummary {
        let fee = self.shipping_fee;
        self.store.with(|s| s.summary(fee))
    }

    pub fn add(&self, product: &Product, quantity: u32) -> CartChange {
        self.mutate(|s| s.add(product, quantity))
    }

    pub fn increment(&self, id: ProductId) -> CartChange {
        self.mutate(|s| s.increment(id))
    }

    pub fn decrement(&self, id: ProductId) -> CartChange {
        self.mutate(|s| s.decrement(id))
    }

    pub fn remove(&self, id: ProductId) -> CartChange {
        self.mutate(|s| s.remove(id))
    }

    pub fn clear(&self) -> CartChange {
        self.mutate(|s| s.clear())
    }

    fn mutate(
        &self,
        f: impl FnOnce(&mut CartStore<BrowserStorage>) -> CartChange,
    ) -> CartChange {
        let mut change = CartChange::Unchanged;
        self.store.maybe_update(|s| {
            change = f(s);
            change.is_mutation()
        });
        change
    }
}

/// Hook to access the cart
pub fn use_cart() -> CartContext {
    use_context::<CartContext>().expect("CartContext not found. Provide it in App.")
}
