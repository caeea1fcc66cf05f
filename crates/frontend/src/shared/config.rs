use once_cell::sync::Lazy;
use serde::Deserialize;

use anyhow::Context;
use contracts::domain::a002_cart::CART_STORAGE_KEY;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorefrontConfig {
    pub catalog: CatalogConfig,
    pub cart: CartConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CartConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_shipping_fee")]
    pub shipping_fee: f64,
}

fn default_storage_key() -> String {
    CART_STORAGE_KEY.to_string()
}

fn default_shipping_fee() -> f64 {
    10.0
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[catalog]
base_url = "https://fakestoreapi.com"

[cart]
storage_key = "carts"
shipping_fee = 10.0
"#;

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig {
                base_url: "https://fakestoreapi.com".to_string(),
            },
            cart: CartConfig {
                storage_key: default_storage_key(),
                shipping_fee: default_shipping_fee(),
            },
        }
    }
}

/// Parse a TOML configuration document
pub fn parse_config(source: &str) -> anyhow::Result<StorefrontConfig> {
    let mut config: StorefrontConfig =
        toml::from_str(source).context("invalid storefront configuration")?;

    config.catalog.base_url = config.catalog.base_url.trim_end_matches('/').to_string();
    if config.catalog.base_url.is_empty() {
        anyhow::bail!("catalog.base_url must not be empty");
    }
    if config.cart.storage_key.trim().is_empty() {
        anyhow::bail!("cart.storage_key must not be empty");
    }
    if !config.cart.shipping_fee.is_finite() || config.cart.shipping_fee < 0.0 {
        anyhow::bail!(
            "cart.shipping_fee must be a non-negative number, got {}",
            config.cart.shipping_fee
        );
    }
    Ok(config)
}

static CONFIG: Lazy<StorefrontConfig> = Lazy::new(|| match parse_config(DEFAULT_CONFIG) {
    Ok(config) => config,
    Err(e) => {
        log::error!("{:#}, using built-in defaults", e);
        StorefrontConfig::default()
    }
});

/// Application configuration, parsed once on first use
pub fn config() -> &'static StorefrontConfig {
    &CONFIG
}
