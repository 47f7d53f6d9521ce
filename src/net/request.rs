//! Per-call request options and the raw HTTP exchange types handed to a
//! [`crate::net::transport::Transport`].

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::headers::Headers;
use crate::error::ApiError;

/// HTTP method of a REST call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for a single call through [`crate::ApiClient::request`].
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    /// JSON body; serialized and sent only when present.
    pub body: Option<Value>,
    /// Extra headers merged over the JSON content-type baseline.
    pub headers: Headers,
    /// Decode a successful response as JSON (`true`) or return raw text.
    pub expect_json: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self { method: Method::Get, body: None, headers: Headers::new(), expect_json: true }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: Value) -> Self {
        Self { method: Method::Post, body: Some(body), ..Self::default() }
    }

    /// `POST` with a serializable body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if `body` cannot be represented as JSON.
    pub fn post_json<B: Serialize>(body: &B) -> Result<Self, ApiError> {
        Self::get().method(Method::Post).json(body)
    }

    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach any serializable value as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if `body` cannot be represented as JSON.
    pub fn json<B: Serialize>(self, body: &B) -> Result<Self, ApiError> {
        Ok(self.body(serde_json::to_value(body)?))
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Return the success body as raw text instead of decoding JSON.
    #[must_use]
    pub fn text(mut self) -> Self {
        self.expect_json = false;
        self
    }
}

/// Decoded success body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Json(v) => Some(v),
            Self::Text(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(t) => Some(t),
            Self::Json(_) => None,
        }
    }
}

/// Fully composed request, snapshotted before it reaches the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub body: Option<String>,
}

/// Status line and body text of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    /// `true` for statuses in `200..=299`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;
