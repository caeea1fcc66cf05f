use contracts::domain::a001_product::{Product, ProductId};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// All catalog products
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    get_json(&api_url("/products")).await
}

/// Products of a single category
pub async fn fetch_products_in_category(category: &str) -> Result<Vec<Product>, String> {
    let url = api_url(&format!(
        "/products/category/{}",
        urlencoding::encode(category)
    ));
    get_json(&url).await
}

/// Category names known to the catalog
pub async fn fetch_categories() -> Result<Vec<String>, String> {
    get_json(&api_url("/products/categories")).await
}

/// One product; `Ok(None)` when the catalog does not know the id
pub async fn fetch_product(id: ProductId) -> Result<Option<Product>, String> {
    let response = Request::get(&api_url(&format!("/products/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    parse_product_body(&body)
}

/// The catalog answers unknown ids with an empty body or `null`.
fn parse_product_body(body: &str) -> Result<Option<Product>, String> {
    let body = body.trim();
    if body.is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<Product>>(body)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
