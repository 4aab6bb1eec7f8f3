//! Storefront configuration from environment variables (and `.env`, if present)

use std::env;

use crate::app::summary::SummaryPolicy;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080/api";

#[derive(Clone, Debug)]
pub struct StorefrontConfig {
    /// Base URL of the REST API, e.g. `http://192.168.1.10:8080/api`
    pub api_url: String,
    /// Base URL that image paths are resolved against
    pub storage_url: String,
    pub tax_rate: f64,
    pub service_fee: f64,
    pub fee_on_empty_cart: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            storage_url: derive_storage_url(DEFAULT_API_URL),
            tax_rate: SummaryPolicy::DEFAULT_TAX_RATE,
            service_fee: SummaryPolicy::DEFAULT_FEE,
            fee_on_empty_cart: true,
        }
    }
}

impl StorefrontConfig {
    /// Load `.env` (ignored when missing), then read `STOREFRONT_*` variables.
    pub fn from_env() -> Result<Self, String> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("STOREFRONT_API_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let storage_url = lookup("STOREFRONT_STORAGE_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| derive_storage_url(&api_url));

        let tax_rate = match lookup("STOREFRONT_TAX_RATE") {
            Some(v) => v
                .parse()
                .map_err(|_| "STOREFRONT_TAX_RATE must be a number".to_string())?,
            None => SummaryPolicy::DEFAULT_TAX_RATE,
        };

        let service_fee = match lookup("STOREFRONT_SERVICE_FEE") {
            Some(v) => v
                .parse()
                .map_err(|_| "STOREFRONT_SERVICE_FEE must be a number".to_string())?,
            None => SummaryPolicy::DEFAULT_FEE,
        };

        let fee_on_empty_cart = lookup("STOREFRONT_FEE_ON_EMPTY_CART")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(true);

        let config = Self {
            api_url,
            storage_url,
            tax_rate,
            service_fee,
            fee_on_empty_cart,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_url.is_empty() {
            return Err("STOREFRONT_API_URL must not be empty".to_string());
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err("STOREFRONT_API_URL must start with http:// or https://".to_string());
        }

        if !(0.0..=1.0).contains(&self.tax_rate) {
            return Err("STOREFRONT_TAX_RATE must be between 0 and 1".to_string());
        }

        if self.service_fee < 0.0 {
            return Err("STOREFRONT_SERVICE_FEE must not be negative".to_string());
        }

        Ok(())
    }

    pub fn summary_policy(&self) -> SummaryPolicy {
        SummaryPolicy {
            tax_rate: self.tax_rate,
            fee: self.service_fee,
            fee_on_empty_cart: self.fee_on_empty_cart,
        }
    }
}

/// `http://host:8080/api` → `http://host:8080/storage`
fn derive_storage_url(api_url: &str) -> String {
    let trimmed = api_url.trim_end_matches('/');
    match trimmed.strip_suffix("/api") {
        Some(root) => format!("{}/storage", root),
        None => format!("{}/storage", trimmed),
    }
}
