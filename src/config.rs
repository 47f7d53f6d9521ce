//! Client configuration: API base address, landing page, token storage key.

use crate::error::ConfigError;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_LANDING_PAGE: &str = "index.html";
pub const DEFAULT_TOKEN_KEY: &str = "auth_token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub landing_page: String,
    pub token_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            landing_page: DEFAULT_LANDING_PAGE.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build a config pointing at `api_base`, keeping the default landing
    /// page and token key.
    ///
    /// The base address is used verbatim as a URL prefix; request paths are
    /// appended without inserting a separator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `api_base` is empty or not an HTTP(S) address.
    pub fn new(api_base: &str) -> Result<Self, ConfigError> {
        let api_base = api_base.trim();
        if api_base.is_empty() {
            return Err(ConfigError::EmptyApiBase);
        }
        if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(api_base.to_owned()));
        }
        Ok(Self { api_base: api_base.to_owned(), ..Self::default() })
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyValue`] for an empty location.
    pub fn with_landing_page(mut self, landing_page: &str) -> Result<Self, ConfigError> {
        if landing_page.is_empty() {
            return Err(ConfigError::EmptyValue("landing page"));
        }
        landing_page.clone_into(&mut self.landing_page);
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyValue`] for an empty key.
    pub fn with_token_key(mut self, token_key: &str) -> Result<Self, ConfigError> {
        if token_key.is_empty() {
            return Err(ConfigError::EmptyValue("token key"));
        }
        token_key.clone_into(&mut self.token_key);
        Ok(self)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
