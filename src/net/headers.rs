//! Request header composition.
//!
//! Precedence, lowest first: the `Content-Type: application/json` baseline,
//! then caller-supplied headers, then the bearer `Authorization` entry when a
//! token is stored. Names compare case-insensitively; a later entry replaces
//! an earlier one in place.

use crate::storage::token::TokenStore;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Ordered header list with case-insensitive replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(Vec<(String, String)>);

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing any entry with the same name.
    pub fn insert(&mut self, name: &str, value: &str) {
        match self.0.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
            Some(entry) => entry.1 = value.to_owned(),
            None => self.0.push((name.to_owned(), value.to_owned())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name.as_ref(), value.as_ref());
        }
        headers
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Headers {
    fn from(entries: [(&str, &str); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// Build the headers for one request from `extra` and the stored token.
pub fn compose_headers(extra: &Headers, tokens: &impl TokenStore) -> Headers {
    let mut headers = Headers::from([(CONTENT_TYPE, JSON_CONTENT_TYPE)]);
    for (name, value) in extra.iter() {
        headers.insert(name, value);
    }
    if let Some(token) = tokens.bearer() {
        headers.insert(AUTHORIZATION, &format!("Bearer {token}"));
    }
    headers
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
