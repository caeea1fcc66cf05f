//! Shared domain types for the storefront.
//!
//! Everything here is platform independent: the cart store and its
//! persistence adapter run the same way in the browser and in host tests.

pub mod domain;
pub mod shared;
