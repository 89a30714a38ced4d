//! Sign-in page hosting the provider's widget.

use leptos::html::Div;
use leptos::prelude::*;

/// Mounts the identity provider's sign-in widget into a host element on
/// first render. The widget owns the whole flow, including `/sign-in/*`
/// sub-routes.
#[component]
pub fn SignInPage() -> impl IntoView {
    let host = NodeRef::<Div>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        if let Some(el) = host.get() {
            crate::util::identity::mount_sign_in(&el);
        }
    });

    view! {
        <div class="widget-page">
            <div class="widget-page__host" node_ref=host></div>
        </div>
    }
}
