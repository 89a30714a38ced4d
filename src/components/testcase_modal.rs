//! Modal displaying a single test case in full.

#[cfg(test)]
#[path = "testcase_modal_test.rs"]
mod testcase_modal_test;

use leptos::prelude::*;

use crate::net::types::TestCase;
use crate::util::timestamp::format_created_at;

/// Keys that dismiss the dialog from the keyboard.
fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

/// Purely presentational detail dialog. The parent owns the open flag;
/// backdrop click, Escape, and the Close button all run the same
/// `on_close`, so there is exactly one exit route.
#[component]
pub fn TestCaseModal(record: TestCase, on_close: Callback<()>) -> impl IntoView {
    let created = format_created_at(&record.created_at);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    };

    // Escape is only delivered while the backdrop holds focus, so take it
    // on mount.
    let backdrop = NodeRef::<leptos::html::Div>::new();
    #[cfg(feature = "csr")]
    Effect::new(move || {
        if let Some(el) = backdrop.get() {
            let _ = el.focus();
        }
    });

    view! {
        <div
            class="dialog-backdrop"
            node_ref=backdrop
            on:click=move |_| on_close.run(())
            on:keydown=on_keydown
            tabindex="0"
        >
            <div class="dialog testcase-modal" on:click=move |ev| ev.stop_propagation()>
                <h2 class="testcase-modal__name">{record.name.clone()}</h2>
                <p class="testcase-modal__created">{format!("Created {created}")}</p>
                <pre class="testcase-modal__script">{record.gherkin_script.clone()}</pre>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
