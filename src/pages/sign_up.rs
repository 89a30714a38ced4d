//! Sign-up page hosting the provider's widget.

use leptos::html::Div;
use leptos::prelude::*;

/// Counterpart to [`crate::pages::sign_in::SignInPage`] for registration;
/// covers `/sign-up/*`.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let host = NodeRef::<Div>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        if let Some(el) = host.get() {
            crate::util::identity::mount_sign_up(&el);
        }
    });

    view! {
        <div class="widget-page">
            <div class="widget-page__host" node_ref=host></div>
        </div>
    }
}
