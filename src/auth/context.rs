//! Provider component and accessor hook for the auth context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthProvider` sits near the root of the view tree. Descendants call
//! `use_auth()` to read session fields reactively and to dispatch actions.
//!
//! ERROR HANDLING
//! ==============
//! Accessing the context without a provider ancestor yields
//! `AuthError::MissingProvider` before anything is rendered or dispatched.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::actions::AuthActions;
use crate::components::toast_host::use_toast_queue;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::net::types::{RegisterData, User};
use crate::state::session::SessionState;
use crate::store::AuthStore;
use crate::util::notify::{Notifier, ToastNotifier};
use crate::util::token_storage::{LocalTokenStorage, TokenStorage};

/// Value published to descendants of `AuthProvider`.
///
/// Field accessors read the store's session signal, so calling them inside a
/// reactive scope re-runs that scope when the session changes.
#[derive(Clone)]
pub struct AuthContext {
    session: Signal<SessionState>,
    actions: AuthActions,
}

impl AuthContext {
    pub fn new(actions: AuthActions) -> Self {
        Self { session: actions.session(), actions }
    }

    pub fn session(&self) -> Signal<SessionState> {
        self.session
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.user.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.session.with(|s| s.token.clone())
    }

    pub fn loading(&self) -> bool {
        self.session.with(|s| s.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.session.with(|s| s.error.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(SessionState::is_authenticated)
    }

    /// # Errors
    ///
    /// Returns the store's failure after it has been shown as a toast.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.actions.login(email, password).await
    }

    /// # Errors
    ///
    /// Returns the store's failure after it has been shown as a toast.
    pub async fn register(&self, data: RegisterData) -> Result<User, AuthError> {
        self.actions.register(data).await
    }

    pub fn logout(&self) {
        self.actions.logout();
    }

    pub fn clear_error(&self) {
        self.actions.clear_error();
    }

    pub fn actions(&self) -> &AuthActions {
        &self.actions
    }
}

/// Fetch the nearest provider's context.
///
/// # Errors
///
/// Returns `AuthError::MissingProvider` when no `AuthProvider` is an ancestor.
pub fn use_auth() -> Result<AuthContext, AuthError> {
    use_context::<AuthContext>().ok_or(AuthError::MissingProvider)
}

/// Like [`use_auth`], for components that cannot render without auth.
///
/// # Panics
///
/// Panics when called outside an `AuthProvider`.
pub fn expect_auth() -> AuthContext {
    use_auth().unwrap_or_else(|e| panic!("{e}"))
}

/// Publishes the auth context and checks the persisted token once on mount.
///
/// Defaults: `localStorage` for the token and toasts queued into the shared
/// `ToastState` context for notifications.
#[component]
pub fn AuthProvider(
    store: Arc<dyn AuthStore>,
    #[prop(optional)] storage: Option<Arc<dyn TokenStorage>>,
    #[prop(optional)] notifier: Option<Arc<dyn Notifier>>,
    #[prop(optional)] config: Option<AuthConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let storage = storage.unwrap_or_else(|| Arc::new(LocalTokenStorage));
    let notifier =
        notifier.unwrap_or_else(|| Arc::new(ToastNotifier::new(use_toast_queue(), config.toast_duration_ms)));

    let actions = AuthActions::new(store, storage, notifier, &config);
    provide_context(AuthContext::new(actions.clone()));

    // Tracks nothing, so it runs once after mount and only in the browser.
    Effect::new(move || {
        let actions = actions.clone();
        leptos::task::spawn_local(async move {
            let _ = actions.validate_on_mount().await;
        });
    });

    children()
}
