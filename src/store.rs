//! Contract consumed from the external session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store owns `SessionState`, performs transport, and decides how each
//! action mutates the session. The provider holds it as a shared handle and
//! never writes session fields itself.

use async_trait::async_trait;
use leptos::prelude::Signal;

use crate::error::AuthError;
use crate::net::types::{LoginCredentials, RegisterData, User};
use crate::state::session::SessionState;

/// Action dispatchers and read view of the store's `auth` partition.
///
/// Futures are not `Send`: stores run on the browser's single-threaded
/// event loop.
#[async_trait(?Send)]
pub trait AuthStore: Send + Sync {
    /// Reactive read view over the session partition.
    fn session(&self) -> Signal<SessionState>;

    /// Authenticate; on success the store holds the user and token.
    async fn login(&self, credentials: LoginCredentials) -> Result<User, AuthError>;

    async fn register(&self, data: RegisterData) -> Result<User, AuthError>;

    /// Reset the session and drop the persisted token. Never fails.
    fn logout(&self);

    /// Resolve the user for the currently held token.
    async fn get_current_user(&self) -> Result<User, AuthError>;
}
