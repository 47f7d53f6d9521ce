//! Networking modules for the Coffee Shop REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the auth-aware request wrapper, `headers` composes request
//! headers, `request` holds per-call options and raw exchange types,
//! `transport` performs the HTTP exchange, `shop` binds the shop endpoints,
//! and `types` defines their wire schema.

pub mod api;
pub mod headers;
pub mod request;
pub mod shop;
pub mod transport;
pub mod types;
