//! Store action wrappers with toast side effects.
//!
//! Each wrapper awaits the store's settlement before notifying, then hands
//! the outcome back to the caller. Failures are reported exactly once and
//! never retried.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::Signal;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::net::types::{LoginCredentials, RegisterData, User};
use crate::state::session::SessionState;
use crate::store::AuthStore;
use crate::util::notify::Notifier;
use crate::util::token_storage::TokenStorage;

pub const LOGIN_SUCCESS_TEXT: &str = "Login successful";
pub const LOGIN_FAILED_TEXT: &str = "Login failed";
pub const REGISTER_SUCCESS_TEXT: &str = "Registration successful";
pub const REGISTER_FAILED_TEXT: &str = "Registration failed";
pub const LOGOUT_TEXT: &str = "Logged out";

/// Which branch the mount-time token check took.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountValidation {
    /// Nothing persisted; the session is left untouched.
    NoStoredToken,
    /// The persisted token resolved to a user.
    Restored(User),
    /// Resolution failed; the token was removed and the session logged out.
    Cleared(AuthError),
}

/// Handles shared by every consumer of one provider instance.
#[derive(Clone)]
pub struct AuthActions {
    store: Arc<dyn AuthStore>,
    storage: Arc<dyn TokenStorage>,
    notifier: Arc<dyn Notifier>,
    storage_key: Arc<str>,
    mount_checked: Arc<AtomicBool>,
}

impl AuthActions {
    pub fn new(
        store: Arc<dyn AuthStore>,
        storage: Arc<dyn TokenStorage>,
        notifier: Arc<dyn Notifier>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            store,
            storage,
            notifier,
            storage_key: Arc::from(config.storage_key.as_str()),
            mount_checked: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn session(&self) -> Signal<SessionState> {
        self.store.session()
    }

    /// Log in and notify.
    ///
    /// # Errors
    ///
    /// Returns the store's failure after the error toast has been shown.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let result = self.store.login(LoginCredentials::new(email, password)).await;
        self.report(&result, "login", LOGIN_SUCCESS_TEXT, LOGIN_FAILED_TEXT);
        result
    }

    /// Register and notify.
    ///
    /// # Errors
    ///
    /// Returns the store's failure after the error toast has been shown.
    pub async fn register(&self, data: RegisterData) -> Result<User, AuthError> {
        let result = self.store.register(data).await;
        self.report(&result, "register", REGISTER_SUCCESS_TEXT, REGISTER_FAILED_TEXT);
        result
    }

    pub fn logout(&self) {
        self.store.logout();
        self.notifier.success(LOGOUT_TEXT);
    }

    /// Kept for API compatibility. The store exposes no action that clears
    /// `error`, so this leaves the session untouched.
    #[allow(clippy::unused_self)]
    pub fn clear_error(&self) {}

    /// Run the token check once for this provider; later calls return `None`.
    pub async fn validate_on_mount(&self) -> Option<MountValidation> {
        if self.mount_checked.swap(true, Ordering::SeqCst) {
            return None;
        }
        Some(self.validate_stored_token().await)
    }

    /// Resolve the persisted token into a user, or clear it.
    pub async fn validate_stored_token(&self) -> MountValidation {
        if self.storage.get(&self.storage_key).is_none() {
            return MountValidation::NoStoredToken;
        }
        match self.store.get_current_user().await {
            Ok(user) => {
                leptos::logging::log!("stored token restored session for {}", user.id);
                MountValidation::Restored(user)
            }
            Err(e) => {
                leptos::logging::warn!("stored token rejected: {e}");
                self.storage.remove(&self.storage_key);
                self.store.logout();
                MountValidation::Cleared(e)
            }
        }
    }

    fn report(&self, result: &Result<User, AuthError>, action: &str, success_text: &str, fallback: &str) {
        match result {
            Ok(user) => {
                leptos::logging::log!("{action} succeeded for {}", user.id);
                self.notifier.success(success_text);
            }
            Err(e) => {
                leptos::logging::warn!("{action} failed: {e}");
                self.notifier.error(e.display_message(fallback));
            }
        }
    }
}
