//! Current-user chip with a sign-out action.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Shows the session user's name and delegates sign-out to the provider.
/// The session listener clears the auth state afterwards; nothing here
/// mutates it directly.
#[component]
pub fn UserButton() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let name = move || {
        auth.get()
            .user
            .map_or_else(|| "—".to_owned(), |u| u.name)
    };

    let on_sign_out = move |_| {
        crate::util::identity::sign_out();
    };

    view! {
        <span class="user-button">
            <span class="user-button__name">{name}</span>
            <button class="btn user-button__sign-out" on:click=on_sign_out title="Sign out">
                "Sign out"
            </button>
        </span>
    }
}
