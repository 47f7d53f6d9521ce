//! Wire schema for the Coffee Shop REST endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response of `POST /login`. Rejected credentials yield an empty object.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Result of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// A token was issued and saved to the token store.
    Authenticated,
    /// The server issued no token. This includes a 200 response whose body
    /// is a serialized error such as `{"status_code":400,"detail":...}`.
    Rejected,
}

/// Body of `POST /register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Body of `POST /purchase`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseRequest {
    pub username: String,
    pub productname: String,
}

/// A row of `GET /products`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
}

/// A row of `GET /purchases` or `GET /mypurchases`.
///
/// Only the user and product columns are typed; remaining columns (time,
/// quantity, ...) are kept as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Purchase {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub productname: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
