//! Shopping cart: line items, the cart store and its storage mirror.

pub mod line_item;
pub mod persistence;
pub mod store;

pub use line_item::LineItem;
pub use persistence::{decode_cart, encode_cart, CartDecodeError, CartRepository, CART_STORAGE_KEY};
pub use store::{CartChange, CartStore, CartSummary};
