//! Session state observed from the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider owns the session lifecycle; this state is a read-only
//! mirror written by the identity bridge and consumed by the session gate
//! and user-aware components. The app never mutates it directly.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// The signed-in user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
}

/// Session state for the current browser user.
///
/// Starts in `loading` until the provider SDK reports its first session
/// snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
