//! Payload types exchanged with the auth store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Transport is owned by the store implementation; this crate only shapes the
//! DTOs it hands over and receives back.

pub mod types;
