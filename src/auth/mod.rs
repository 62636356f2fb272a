//! Auth context: action wrappers, provider component, and accessor hook.
//!
//! SYSTEM CONTEXT
//! ==============
//! `actions` turns store outcomes into notifications and runs the mount-time
//! token check; `context` publishes those actions plus the session view to
//! descendant components.

pub mod actions;
pub mod context;

pub use actions::{AuthActions, MountValidation};
pub use context::{AuthContext, AuthProvider, expect_auth, use_auth};
