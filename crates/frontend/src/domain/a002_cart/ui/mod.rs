pub mod page;
pub mod summary;

pub use page::ShoppingCart;
pub use summary::CartSummaryPanel;
