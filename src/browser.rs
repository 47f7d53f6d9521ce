//! Browser entry points (hydrate only).
//!
//! SYSTEM CONTEXT
//! ==============
//! `start` runs when the WASM module loads: it wires console logging and the
//! panic hook, then applies auth visibility now and again once the document
//! structure has loaded. Page code builds its API client and auth view from
//! the helpers below so every page shares the same session token slot.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::transport::GlooTransport;
use crate::storage::token::SessionTokenStore;
use crate::ui::visibility::{AuthView, DomPage};

pub type BrowserClient = ApiClient<GlooTransport, SessionTokenStore>;
pub type BrowserAuthView = AuthView<SessionTokenStore, DomPage>;

/// API client for the default configuration.
pub fn browser_client() -> BrowserClient {
    browser_client_with(&ClientConfig::default())
}

pub fn browser_client_with(config: &ClientConfig) -> BrowserClient {
    ApiClient::from_config(config, GlooTransport, SessionTokenStore::new(&config.token_key))
}

pub fn auth_view() -> BrowserAuthView {
    auth_view_with(&ClientConfig::default())
}

pub fn auth_view_with(config: &ClientConfig) -> BrowserAuthView {
    AuthView::from_config(config, SessionTokenStore::new(&config.token_key), DomPage)
}

/// Sign out: clear the token, refresh visibility, go to the landing page.
#[wasm_bindgen(js_name = logout)]
pub fn logout() {
    auth_view().logout();
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    install_on_page_load();
}

/// Apply visibility immediately and once more on `DOMContentLoaded`.
///
/// The module may finish loading before or after the event fires; applying
/// twice is harmless.
pub fn install_on_page_load() {
    auth_view().apply_visibility();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let on_ready = Closure::once_into_js(|| auth_view().apply_visibility());
    if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        log::warn!("auth: could not register DOMContentLoaded listener: {err:?}");
    }
}
