//! HTTP transports behind the request wrapper.
//!
//! Client-side (hydrate): `fetch` via `gloo-net`, credentials omitted,
//! redirects followed, CORS mode.
//! Native (non-wasm32 targets only): `reqwest` without a cookie store,
//! following redirects.
//!
//! A transport reads the whole body as text; status handling and decoding
//! belong to [`crate::ApiClient`]. No timeout is applied at this layer.

use super::request::{HttpRequest, HttpResponse};
use crate::error::ApiError;

/// Performs one HTTP exchange. Enables mocking in tests.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Send `request` and read the full response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the exchange fails below HTTP (DNS,
    /// connectivity, CORS rejection, body read).
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

// =============================================================================
// NATIVE
// =============================================================================

#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
const MAX_REDIRECTS: usize = 10;

#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self { http })
    }

    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
fn reqwest_method(method: super::request::Method) -> reqwest::Method {
    use super::request::Method;
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
#[async_trait::async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.http.request(reqwest_method(request.method), &request.url);
        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_owned();
        let body = response.text().await?;
        Ok(HttpResponse { status: status.as_u16(), status_text, body })
    }
}

// =============================================================================
// BROWSER
// =============================================================================

#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
fn gloo_method(method: super::request::Method) -> gloo_net::http::Method {
    use super::request::Method;
    match method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
        Method::Put => gloo_net::http::Method::PUT,
        Method::Patch => gloo_net::http::Method::PATCH,
        Method::Delete => gloo_net::http::Method::DELETE,
    }
}

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        use web_sys::{RequestCredentials, RequestMode, RequestRedirect};

        let mut builder = gloo_net::http::RequestBuilder::new(&request.url)
            .method(gloo_method(request.method))
            .credentials(RequestCredentials::Omit)
            .redirect(RequestRedirect::Follow)
            .mode(RequestMode::Cors);
        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }
        let prepared = match request.body {
            Some(body) => builder.body(body)?,
            None => builder.build()?,
        };

        let response = prepared.send().await?;
        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await?;
        Ok(HttpResponse { status, status_text, body })
    }
}

#[cfg(all(test, feature = "native", not(target_arch = "wasm32")))]
#[path = "transport_test.rs"]
mod transport_test;
