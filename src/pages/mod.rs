//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering
//! details to `components`. Protected pages wrap their content in the
//! session gate.

pub mod dashboard;
pub mod editor;
pub mod home;
pub mod sign_in;
pub mod sign_up;
