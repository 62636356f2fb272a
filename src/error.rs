//! Error taxonomy for store actions and context access.
//!
//! ERROR HANDLING
//! ==============
//! Store failures arrive as `Rejected`/`Unspecified` and are turned into toast
//! text by the action wrappers. `MissingProvider` is a usage error raised by
//! the accessor hook and is never shown to the user.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The store settled with a failure carrying a message.
    #[error("{0}")]
    Rejected(String),
    /// The store settled with a failure but gave no reason.
    #[error("request failed")]
    Unspecified,
    #[error("auth context used outside of an AuthProvider")]
    MissingProvider,
}

impl AuthError {
    /// The failure's own message, if it has a non-blank one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Rejected(msg) => {
                let msg = msg.trim();
                (!msg.is_empty()).then_some(msg)
            }
            Self::Unspecified | Self::MissingProvider => None,
        }
    }

    /// Message to show in a toast, falling back to `fallback` when the
    /// failure has none.
    pub fn display_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message().unwrap_or(fallback)
    }
}

impl From<String> for AuthError {
    fn from(msg: String) -> Self {
        Self::Rejected(msg)
    }
}
