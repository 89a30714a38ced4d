//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` isolates the provider SDK bridge from pages and components;
//! `timestamp` handles display formatting of server-issued timestamps.

pub mod identity;
pub mod timestamp;
