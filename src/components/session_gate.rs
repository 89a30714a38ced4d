//! Session gate: branch rendering on the observed auth state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same gate, including the creation
//! form. When no session exists the sign-in flow renders in place of the
//! protected content; the gate itself never mutates session state.

#[cfg(test)]
#[path = "session_gate_test.rs"]
mod session_gate_test;

use leptos::prelude::*;

use crate::pages::sign_in::SignInPage;
use crate::state::auth::AuthState;

/// What a gated route should render for a given auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateView {
    /// Provider still initializing; show a placeholder.
    Loading,
    /// Signed out; show the sign-in flow in place.
    SignIn,
    /// Signed in; show the protected content.
    Content,
}

/// Pure branch decision for the gate.
#[must_use]
pub fn gate_view(state: &AuthState) -> GateView {
    if state.loading {
        GateView::Loading
    } else if state.is_signed_in() {
        GateView::Content
    } else {
        GateView::SignIn
    }
}

/// Render children only while a session exists.
#[component]
pub fn SignedIn(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    view! {
        <Show when=move || gate_view(&auth.get()) == GateView::Content>
            {children()}
        </Show>
    }
}

/// Render children only once the provider has settled on "no session".
#[component]
pub fn SignedOut(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    view! {
        <Show when=move || gate_view(&auth.get()) == GateView::SignIn>
            {children()}
        </Show>
    }
}

/// Protect a route: content when signed in, the sign-in widget in place
/// when signed out, a placeholder while the provider initializes.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    view! {
        {move || match gate_view(&auth.get()) {
            GateView::Loading => view! {
                <p class="session-gate__loading">"Checking session..."</p>
            }
            .into_any(),
            GateView::SignIn => view! { <SignInPage/> }.into_any(),
            GateView::Content => children().into_any(),
        }}
    }
}
