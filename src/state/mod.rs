//! Client-side state models.
//!
//! DESIGN
//! ======
//! `session` is the read view over the store's auth partition; `toast` is the
//! notification queue rendered by `ToastHost`.

pub mod session;
pub mod toast;
