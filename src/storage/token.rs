//! Session-scoped authentication token slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page saves the token, the header composer reads it on every
//! request, and logout clears it. At most one token is held at a time.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort: a missing window or a blocked
//! `sessionStorage` reads as "no token" and writes are dropped, so callers
//! never handle storage errors.

use std::rc::Rc;
use std::sync::{Arc, Mutex, PoisonError};

/// A single-slot token store.
pub trait TokenStore {
    /// Replace the stored token.
    fn save(&self, token: &str);

    /// The stored token, or `None` when the slot is empty. An empty string
    /// is returned as `Some("")`.
    fn get(&self) -> Option<String>;

    /// Empty the slot.
    fn clear(&self);

    /// The token to present as a bearer credential. Empty tokens count as
    /// signed out.
    fn bearer(&self) -> Option<String> {
        self.get().filter(|t| !t.is_empty())
    }

    fn is_authenticated(&self) -> bool {
        self.bearer().is_some()
    }
}

impl<S: TokenStore + ?Sized> TokenStore for &S {
    fn save(&self, token: &str) {
        (**self).save(token);
    }

    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn clear(&self) {
        (**self).clear();
    }
}

impl<S: TokenStore + ?Sized> TokenStore for Rc<S> {
    fn save(&self, token: &str) {
        (**self).save(token);
    }

    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn clear(&self) {
        (**self).clear();
    }
}

impl<S: TokenStore + ?Sized> TokenStore for Arc<S> {
    fn save(&self, token: &str) {
        (**self).save(token);
    }

    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// In-process token slot, used outside the browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self { slot: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn get(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn clear(&self) {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).take();
    }
}

/// Log a rejected storage write (quota exceeded, storage blocked) and report
/// whether the write went through.
#[cfg(any(test, feature = "hydrate"))]
fn storage_write_ok<E: std::fmt::Debug>(op: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            log::warn!("sessionStorage {op} failed: {err:?}");
            false
        }
    }
}

/// Token slot backed by the browser's `sessionStorage`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone)]
pub struct SessionTokenStore {
    key: String,
}

#[cfg(feature = "hydrate")]
impl SessionTokenStore {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_owned() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.session_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl TokenStore for SessionTokenStore {
    fn save(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("sessionStorage unavailable; token not saved");
            return;
        };
        storage_write_ok("save", storage.set_item(&self.key, token));
    }

    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok().flatten()
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            storage_write_ok("clear", storage.remove_item(&self.key));
        }
    }
}

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;
