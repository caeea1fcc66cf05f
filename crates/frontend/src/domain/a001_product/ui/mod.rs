pub mod details;
pub mod image;
pub mod list;
pub mod not_found;
pub mod rating;

pub use details::ProductDetails;
pub use image::ProductImage;
pub use list::ProductList;
pub use not_found::NotFound;
pub use rating::RatingStars;
