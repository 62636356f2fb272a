//! Browser integration helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage and notification are trait seams so the provider can run against
//! `localStorage` and toasts in the browser and against in-memory doubles in
//! tests or on the server.

pub mod notify;
pub mod token_storage;
