//! Client-side storage for the authentication token.

pub mod token;
