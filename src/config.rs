// config.rs - Remote API configuration
//
// The catalog talks to a single ProductsAPI. Its base URL is fixed at
// build time: the default below, or CATALOG_API_URL when set while
// compiling (the WASM bundle has no runtime environment to read).

use thiserror::Error;

/// Base URL used when CATALOG_API_URL was not set at build time
pub const DEFAULT_API_BASE_URL: &str = "https://gendacproficiencytest.azurewebsites.net/api";

/// Path of the product collection below the base URL
pub const PRODUCTS_RESOURCE: &str = "ProductsAPI";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API base URL must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),
}

/// Where the ProductsAPI lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config from an explicit base URL
    ///
    /// Trailing slashes are stripped so resource paths join cleanly.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');

        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(raw));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Config baked in at build time
    ///
    /// An invalid CATALOG_API_URL is logged and replaced by the default.
    pub fn from_build_env() -> Self {
        match option_env!("CATALOG_API_URL") {
            Some(url) => Self::new(url).unwrap_or_else(|e| {
                tracing::warn!("Ignoring CATALOG_API_URL: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/ProductsAPI`
    pub fn products_url(&self) -> String {
        format!("{}/{}", self.base_url, PRODUCTS_RESOURCE)
    }

    /// `{base}/ProductsAPI/{id}`
    pub fn product_url(&self, id: i32) -> String {
        format!("{}/{}/{}", self.base_url, PRODUCTS_RESOURCE, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = ApiConfig::default();
        assert_eq!(
            config.products_url(),
            "https://gendacproficiencytest.azurewebsites.net/api/ProductsAPI"
        );
        assert_eq!(
            config.product_url(7),
            "https://gendacproficiencytest.azurewebsites.net/api/ProductsAPI/7"
        );
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ApiConfig::new("http://localhost:8080/api//").unwrap();
        assert_eq!(config.base_url(), "http://localhost:8080/api");
        assert_eq!(config.products_url(), "http://localhost:8080/api/ProductsAPI");
    }

    #[test]
    fn test_rejects_non_http_url() {
        let err = ApiConfig::new("ftp://example.com").unwrap_err();
        assert_eq!(err, ConfigError::InvalidBaseUrl("ftp://example.com".to_string()));
        assert!(ApiConfig::new("").is_err());
    }

    #[test]
    fn test_from_build_env_is_valid() {
        let config = ApiConfig::from_build_env();
        assert!(config.base_url().starts_with("http"));
        assert!(!config.base_url().ends_with('/'));
    }
}
