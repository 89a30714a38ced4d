//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render list rows, dialogs, and the session gate while reading
//! shared state from Leptos context providers; pages own orchestration.

pub mod session_gate;
pub mod testcase_card;
pub mod testcase_modal;
pub mod user_button;
