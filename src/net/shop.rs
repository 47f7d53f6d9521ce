//! Typed bindings for the Coffee Shop endpoints.
//!
//! Each call goes through [`ApiClient::request`], so auth headers and error
//! messages behave the same as for untyped calls.

use super::api::ApiClient;
use super::request::RequestOptions;
use super::transport::Transport;
use super::types::{LoginOutcome, LoginRequest, LoginResponse, Product, Purchase, PurchaseRequest, Registration};
use crate::error::ApiError;
use crate::storage::token::TokenStore;

fn my_purchases_endpoint(session: &str) -> String {
    format!("/mypurchases?session={}", urlencoding::encode(session))
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    /// Exchange credentials for a token via `POST /login`, saving it on
    /// success.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, ApiError> {
        let body = LoginRequest { username: username.to_owned(), password: password.to_owned() };
        let resp: LoginResponse = self.request_json("/login", RequestOptions::post_json(&body)?).await?;
        match resp.access_token.filter(|t| !t.is_empty()) {
            Some(token) => {
                self.tokens().save(&token);
                log::info!("shop: signed in as {username}");
                Ok(LoginOutcome::Authenticated)
            }
            None => Ok(LoginOutcome::Rejected),
        }
    }

    /// Create an account via `POST /register`; returns the raw response text.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn register(&self, username: &str, password: &str, email: &str) -> Result<String, ApiError> {
        let body = Registration { username: username.to_owned(), password: password.to_owned(), email: email.to_owned() };
        self.request_text("/register", RequestOptions::post_json(&body)?).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or rows do not decode.
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.request_json("/products", RequestOptions::get()).await
    }

    /// Every recorded purchase.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or rows do not decode.
    pub async fn purchases(&self) -> Result<Vec<Purchase>, ApiError> {
        self.request_json("/purchases", RequestOptions::get()).await
    }

    /// Purchases for the user identified by `session`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or rows do not decode.
    pub async fn my_purchases(&self, session: &str) -> Result<Vec<Purchase>, ApiError> {
        self.request_json(&my_purchases_endpoint(session), RequestOptions::get()).await
    }

    /// Record a purchase via `POST /purchase`; returns the raw response text.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn purchase(&self, username: &str, productname: &str) -> Result<String, ApiError> {
        let body = PurchaseRequest { username: username.to_owned(), productname: productname.to_owned() };
        self.request_text("/purchase", RequestOptions::post_json(&body)?).await
    }
}

#[cfg(test)]
#[path = "shop_test.rs"]
mod shop_test;
