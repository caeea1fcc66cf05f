//! Catalog API URL helpers
//!
//! The catalog is an external HTTP service; its base URL comes from the
//! storefront configuration.

use crate::shared::config::config;

/// Base URL of the catalog API, without a trailing slash
pub fn api_base() -> String {
    config().catalog.base_url.clone()
}

/// Build a full catalog URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/products/1");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://fakestoreapi.com", "/products"),
            "https://fakestoreapi.com/products"
        );
        assert_eq!(
            join_url("https://fakestoreapi.com/", "products/1"),
            "https://fakestoreapi.com/products/1"
        );
    }

    #[test]
    fn test_api_url_uses_configured_base() {
        assert_eq!(api_url("/products"), "https://fakestoreapi.com/products");
    }
}
