//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `testcases`) so components depend on
//! small focused models, and transitions are plain methods that unit tests
//! can exercise without a browser.

pub mod auth;
pub mod testcases;
