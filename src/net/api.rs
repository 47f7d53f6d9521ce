//! Auth-aware REST request wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page code calls [`ApiClient::request`] with a path relative to the
//! configured base address. Headers are composed from the token store and
//! snapshotted before the transport is invoked.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses fail with the body's JSON `detail` field when present,
//! otherwise `"<status> <status text>"`. Transport failures and undecodable
//! success bodies propagate unchanged. Nothing is retried or logged as a
//! failure here; callers decide.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::headers::compose_headers;
use super::request::{HttpRequest, HttpResponse, RequestOptions, ResponseBody};
use super::transport::Transport;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::storage::token::TokenStore;

pub struct ApiClient<T, S> {
    base_url: String,
    transport: T,
    tokens: S,
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    /// Create a client that prefixes every request path with `base_url`.
    pub fn new(base_url: impl Into<String>, transport: T, tokens: S) -> Self {
        Self { base_url: base_url.into(), transport, tokens }
    }

    pub fn from_config(config: &ClientConfig, transport: T, tokens: S) -> Self {
        Self::new(config.api_base.clone(), transport, tokens)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Full URL for `path`: the base address with `path` appended as-is.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a request and decode the success body as JSON or text per
    /// `options.expect_json`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for non-2xx statuses, transport failures, and
    /// success bodies that fail to decode as JSON.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<ResponseBody, ApiError> {
        let request = self.prepare(path, &options)?;
        log::debug!("api: {} {}", request.method, request.url);

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(failure_error(&response));
        }
        if options.expect_json {
            Ok(ResponseBody::Json(serde_json::from_str(&response.body)?))
        } else {
            Ok(ResponseBody::Text(response.body))
        }
    }

    /// Issue a request and deserialize the JSON success body into `R`.
    ///
    /// # Errors
    ///
    /// As [`ApiClient::request`], plus a decode failure when the JSON does not
    /// match `R`.
    pub async fn request_json<R: DeserializeOwned>(
        &self,
        path: &str,
        mut options: RequestOptions,
    ) -> Result<R, ApiError> {
        options.expect_json = true;
        match self.request(path, options).await? {
            ResponseBody::Json(value) => Ok(serde_json::from_value(value)?),
            ResponseBody::Text(text) => Ok(serde_json::from_str(&text)?),
        }
    }

    /// Issue a request and return the success body as raw text.
    ///
    /// # Errors
    ///
    /// As [`ApiClient::request`], minus JSON decoding.
    pub async fn request_text(&self, path: &str, options: RequestOptions) -> Result<String, ApiError> {
        match self.request(path, options.text()).await? {
            ResponseBody::Text(text) => Ok(text),
            ResponseBody::Json(value) => Ok(value.to_string()),
        }
    }

    fn prepare(&self, path: &str, options: &RequestOptions) -> Result<HttpRequest, ApiError> {
        let body = options.body.as_ref().map(serde_json::to_string).transpose()?;
        Ok(HttpRequest {
            method: options.method,
            url: self.endpoint(path),
            headers: compose_headers(&options.headers, &self.tokens),
            body,
        })
    }
}

/// Error for a non-2xx response.
pub(crate) fn failure_error(response: &HttpResponse) -> ApiError {
    detail_message(&response.body)
        .map_or_else(|| ApiError::from_status(response.status, &response.status_text), ApiError::new)
}

/// The `detail` field of a JSON error body, if it carries a usable value.
///
/// Strings are taken verbatim; other non-empty values (e.g. a list of
/// validation errors) use their JSON text. `null`, `false`, `0` and `""`
/// count as absent.
fn detail_message(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    match parsed.get("detail")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        #[allow(clippy::float_cmp)]
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
