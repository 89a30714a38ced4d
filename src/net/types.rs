//! Wire DTOs for the test case REST API.
//!
//! Field names are camelCase on the wire (`gherkinScript`, `createdAt`);
//! the structs mirror the backend's record shape exactly so serde
//! round-trips stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A stored test case as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    /// Server-assigned identifier; unique and immutable.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Newline-preserving Gherkin body, stored opaquely (no parsing here).
    pub gherkin_script: String,
    /// Server-assigned ISO-8601 creation timestamp; never mutated.
    pub created_at: String,
}

/// Create-request payload; the server assigns `id` and `createdAt`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestCase {
    pub name: String,
    pub gherkin_script: String,
}
