//! Page-level UI behavior driven by authentication state.

pub mod visibility;
