//! Creation form for a new test case.
//!
//! On success the form navigates back to the dashboard, which re-fetches
//! on mount. On failure the user stays on the form with both field values
//! intact and the error shown inline. No client-side validation: the
//! backend owns what a valid record is, so empty submissions go through.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::components::session_gate::RequireSession;
#[cfg(any(test, feature = "csr"))]
use crate::net::types::NewTestCase;

/// Editor route at `/testcases/new`; gated like every mutating route.
#[component]
pub fn EditorPage() -> impl IntoView {
    view! {
        <RequireSession>
            <EditorForm/>
        </RequireSession>
    }
}

/// Build the create payload exactly as typed: whitespace, newlines, and
/// empty strings included.
#[cfg(any(test, feature = "csr"))]
fn build_create_payload(name: &str, script: &str) -> NewTestCase {
    NewTestCase {
        name: name.to_owned(),
        gherkin_script: script.to_owned(),
    }
}

#[component]
fn EditorForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let script = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            if pending.get_untracked() {
                return;
            }
            pending.set(true);
            let payload =
                build_create_payload(&name.get_untracked(), &script.get_untracked());
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_test_case(&payload).await {
                    Ok(_created) => {
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("test case create failed: {err}");
                        error.set(Some(err.to_string()));
                        pending.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="editor-page">
            <header class="editor-page__header">
                <h1>"New Test Case"</h1>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="editor-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <form class="editor-page__form" on:submit=submit>
                <label class="editor-page__label">
                    "Name"
                    <input
                        class="editor-page__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="editor-page__label">
                    "Gherkin Script"
                    <textarea
                        class="editor-page__script"
                        rows="12"
                        placeholder="Given ...\nWhen ...\nThen ..."
                        prop:value=move || script.get()
                        on:input=move |ev| script.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="editor-page__actions">
                    <a class="btn" href="/dashboard">
                        "Cancel"
                    </a>
                    <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                        {move || if pending.get() { "Saving..." } else { "Save Test Case" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
