//! Networking modules for the test case REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles authenticated REST calls, `types` defines the shared wire
//! schema. All protected endpoints carry a bearer token fetched on demand
//! from the identity bridge.

pub mod api;
pub mod types;
