use super::*;
use crate::state::auth::SessionUser;

fn signed_in() -> AuthState {
    AuthState {
        user: Some(SessionUser {
            id: "u1".to_owned(),
            name: "Alice".to_owned(),
        }),
        loading: false,
    }
}

#[test]
fn gate_shows_placeholder_while_provider_loads() {
    let state = AuthState {
        user: None,
        loading: true,
    };
    assert_eq!(gate_view(&state), GateView::Loading);
}

#[test]
fn gate_shows_sign_in_when_settled_and_signed_out() {
    let state = AuthState {
        user: None,
        loading: false,
    };
    assert_eq!(gate_view(&state), GateView::SignIn);
}

#[test]
fn gate_shows_content_when_signed_in() {
    assert_eq!(gate_view(&signed_in()), GateView::Content);
}

#[test]
fn gate_prefers_loading_over_an_early_user_snapshot() {
    let mut state = signed_in();
    state.loading = true;
    assert_eq!(gate_view(&state), GateView::Loading);
}
