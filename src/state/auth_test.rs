use super::*;

#[test]
fn auth_state_starts_loading_and_signed_out() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(!state.is_signed_in());
}

#[test]
fn is_signed_in_requires_a_user() {
    let state = AuthState {
        user: Some(SessionUser {
            id: "u1".to_owned(),
            name: "Alice".to_owned(),
        }),
        loading: false,
    };
    assert!(state.is_signed_in());
}
