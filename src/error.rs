//! Error types for configuration and API calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failed API call surfaces as one [`ApiError`] carrying a readable
//! message. Callers that need finer handling inspect the message text.

/// Failure of a REST call: non-success status, transport failure, or an
/// undecodable success body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Fallback message for a failed response: `"<status> <status text>"`.
    pub fn from_status(status: u16, status_text: &str) -> Self {
        Self::new(format!("{status} {status_text}"))
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Errors produced while building a [`crate::ClientConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The API base address was empty.
    #[error("API base address is empty")]
    EmptyApiBase,

    /// The API base address does not use an HTTP scheme.
    #[error("unsupported API base address '{0}' (expected http:// or https://)")]
    UnsupportedScheme(String),

    /// A storage key or landing page value was empty.
    #[error("{0} must not be empty")]
    EmptyValue(&'static str),
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
