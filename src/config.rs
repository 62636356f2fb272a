//! Provider configuration: token storage key and toast lifetime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// `localStorage` key holding the persisted session token.
    pub storage_key: String,
    /// How long a toast stays visible before auto-dismissal.
    pub toast_duration_ms: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_owned(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl AuthConfig {
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        let key = key.trim();
        if !key.is_empty() {
            self.storage_key = key.to_owned();
        }
        self
    }

    #[must_use]
    pub fn with_toast_duration_ms(mut self, ms: u32) -> Self {
        self.toast_duration_ms = ms;
        self
    }
}
