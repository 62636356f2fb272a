//! # auth-provider
//!
//! Leptos bridge that exposes authentication session state to UI components.
//!
//! The session itself lives in an injected [`store::AuthStore`]; this crate
//! only reads it, forwards login/register/logout to it, checks the persisted
//! token on mount, and raises toast notifications for each outcome.
//! Components reach all of it through [`auth::use_auth`] under an
//! [`auth::AuthProvider`].

pub mod auth;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod state;
pub mod store;
pub mod util;

pub use auth::{AuthContext, AuthProvider, expect_auth, use_auth};
pub use config::AuthConfig;
pub use error::AuthError;
pub use store::AuthStore;

/// Install browser panic and log forwarding to the devtools console.
#[cfg(feature = "hydrate")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
