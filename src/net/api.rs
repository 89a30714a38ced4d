//! REST API calls for test case records.
//!
//! Browser side (`csr`): real HTTP calls via `gloo-net`, each carrying a
//! freshly fetched bearer token. Native side: stubs returning
//! [`ApiError::Unsupported`] so the crate compiles and tests run off-wasm.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<T, ApiError>`; callers decide display
//! policy. Errors never bubble past the owning controller and there is no
//! retry or backoff.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{NewTestCase, TestCase};

/// Collection endpoint for list and create; the trailing slash matters to
/// the backend's route table.
pub const TESTCASES_ENDPOINT: &str = "/api/v1/testcases/";

#[cfg(any(test, feature = "csr"))]
fn testcase_endpoint(id: i64) -> String {
    format!("/api/v1/testcases/{id}")
}

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Failure of a single REST operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Connectivity, timeout, or other transport-level failure.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("{op} failed with status {status}")]
    Status { op: &'static str, status: u16 },
    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// No bearer token could be obtained for the request.
    #[error("session credential unavailable: {0}")]
    Credential(String),
    /// Called outside the browser (native stub path).
    #[error("not available outside the browser")]
    Unsupported,
}

/// Fetch the complete list of test cases for the authenticated user.
///
/// # Errors
///
/// Returns an [`ApiError`] when the token fetch, transport, status, or
/// body decode fails.
pub async fn list_test_cases() -> Result<Vec<TestCase>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let token = crate::util::identity::session_token()
            .await
            .map_err(ApiError::Credential)?;
        let resp = gloo_net::http::Request::get(TESTCASES_ENDPOINT)
            .header("Authorization", &bearer_header(&token))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status {
                op: "list",
                status: resp.status(),
            });
        }
        resp.json::<Vec<TestCase>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unsupported)
    }
}

/// Create a test case; the server assigns the id and creation timestamp.
///
/// # Errors
///
/// Returns an [`ApiError`] when the token fetch, transport, status, or
/// body decode fails.
pub async fn create_test_case(new_record: &NewTestCase) -> Result<TestCase, ApiError> {
    #[cfg(feature = "csr")]
    {
        let token = crate::util::identity::session_token()
            .await
            .map_err(ApiError::Credential)?;
        let resp = gloo_net::http::Request::post(TESTCASES_ENDPOINT)
            .header("Authorization", &bearer_header(&token))
            .json(new_record)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status {
                op: "create",
                status: resp.status(),
            });
        }
        resp.json::<TestCase>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = new_record;
        Err(ApiError::Unsupported)
    }
}

/// Delete a test case by id. The response body is ignored; only the
/// status matters.
///
/// # Errors
///
/// Returns an [`ApiError`] when the token fetch, transport, or status
/// fails.
pub async fn delete_test_case(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let token = crate::util::identity::session_token()
            .await
            .map_err(ApiError::Credential)?;
        let resp = gloo_net::http::Request::delete(&testcase_endpoint(id))
            .header("Authorization", &bearer_header(&token))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status {
                op: "delete",
                status: resp.status(),
            });
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::Unsupported)
    }
}
