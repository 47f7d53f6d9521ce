//! Authenticated/guest visibility toggle and logout.
//!
//! Elements carrying `data-authed` are shown only while a token is stored;
//! elements carrying `data-guest` only while none is. Logout clears the
//! token, re-applies visibility, and then navigates to the landing page.
//!
//! TRADE-OFFS
//! ==========
//! The page is reached through [`AuthPage`] so the toggle can run against
//! the real DOM (hydrate) or a recorded fake in tests.

use crate::config::ClientConfig;
use crate::storage::token::TokenStore;

pub const AUTHED_ATTR: &str = "data-authed";
pub const GUEST_ATTR: &str = "data-guest";

/// Declarative marker selecting when an element is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisibilityTag {
    /// Shown only to signed-in users.
    Authenticated,
    /// Shown only to guests.
    Guest,
}

impl VisibilityTag {
    pub const ALL: [Self; 2] = [Self::Authenticated, Self::Guest];

    #[must_use]
    pub fn attribute(self) -> &'static str {
        match self {
            Self::Authenticated => AUTHED_ATTR,
            Self::Guest => GUEST_ATTR,
        }
    }

    /// CSS attribute selector matching tagged elements.
    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            Self::Authenticated => "[data-authed]",
            Self::Guest => "[data-guest]",
        }
    }

    #[must_use]
    pub fn visible_when(self, authenticated: bool) -> bool {
        match self {
            Self::Authenticated => authenticated,
            Self::Guest => !authenticated,
        }
    }
}

/// The page surface the toggle drives.
pub trait AuthPage {
    /// Show or hide every element carrying `tag`.
    fn set_visible(&self, tag: VisibilityTag, visible: bool);

    /// Navigate the document to `location`.
    fn navigate(&self, location: &str);
}

pub struct AuthView<S, P> {
    tokens: S,
    page: P,
    landing_page: String,
}

impl<S: TokenStore, P: AuthPage> AuthView<S, P> {
    pub fn new(tokens: S, page: P, landing_page: impl Into<String>) -> Self {
        Self { tokens, page, landing_page: landing_page.into() }
    }

    pub fn from_config(config: &ClientConfig, tokens: S, page: P) -> Self {
        Self::new(tokens, page, config.landing_page.clone())
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn landing_page(&self) -> &str {
        &self.landing_page
    }

    /// Show or hide tagged elements for the current token state.
    pub fn apply_visibility(&self) {
        let authenticated = self.tokens.is_authenticated();
        for tag in VisibilityTag::ALL {
            self.page.set_visible(tag, tag.visible_when(authenticated));
        }
    }

    /// Clear the token, refresh visibility, then leave for the landing page.
    pub fn logout(&self) {
        self.tokens.clear();
        self.apply_visibility();
        log::info!("auth: signed out, navigating to {}", self.landing_page);
        self.page.navigate(&self.landing_page);
    }
}

/// [`AuthPage`] over the live document.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DomPage;

#[cfg(feature = "hydrate")]
impl AuthPage for DomPage {
    fn set_visible(&self, tag: VisibilityTag, visible: bool) {
        use wasm_bindgen::JsCast;

        let display = if visible { "" } else { "none" };
        for el in crate::util::dom::qsa(tag.selector(), None) {
            let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() else {
                continue;
            };
            let _ = el.style().set_property("display", display);
        }
    }

    fn navigate(&self, location: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(location) {
            log::warn!("auth: navigation to {location} failed: {err:?}");
        }
    }
}

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;
