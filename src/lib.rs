//! # coffee-shop-web
//!
//! Client helpers for the Coffee Shop front-end: session token storage,
//! an auth-aware REST wrapper, HTML escaping, and the authenticated/guest
//! visibility toggle.
//!
//! Browser bindings live behind the `hydrate` feature; the `native` feature
//! provides a `reqwest` transport so the same wrapper runs outside the browser.

pub mod config;
pub mod error;
pub mod net;
pub mod storage;
pub mod ui;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod browser;

pub use config::ClientConfig;
pub use error::{ApiError, ConfigError};
pub use net::api::ApiClient;
pub use net::headers::{Headers, compose_headers};
pub use net::request::{Method, RequestOptions, ResponseBody};
pub use net::transport::Transport;
pub use net::types::{LoginOutcome, Product, Purchase};
pub use storage::token::{MemoryTokenStore, TokenStore};
pub use ui::visibility::{AuthPage, AuthView, VisibilityTag};
pub use util::html::escape_html;
