//! Dashboard page listing test cases with view and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches the full record
//! list on mount and again after every successful mutation; there is no
//! optimistic patching. List and selection state live in one signal owned
//! by this page.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::session_gate::RequireSession;
use crate::components::testcase_card::TestCaseCard;
use crate::components::testcase_modal::TestCaseModal;
use crate::components::user_button::UserButton;
use crate::net::types::TestCase;
use crate::state::testcases::TestCasesState;

/// Dashboard route; the record list renders only behind the session gate.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireSession>
            <RecordList/>
        </RequireSession>
    }
}

fn delete_prompt(name: &str) -> String {
    format!("Delete \"{name}\"? This cannot be undone.")
}

/// Replace the rendered list with a fresh server snapshot. Results that
/// arrive after the page is torn down are discarded.
#[cfg(feature = "csr")]
fn fetch_all(
    state: RwSignal<TestCasesState>,
    alive: std::sync::Arc<std::sync::atomic::AtomicBool>,
) {
    if state.try_update(TestCasesState::begin_load).is_none() {
        return;
    }
    leptos::task::spawn_local(async move {
        let result = crate::net::api::list_test_cases().await;
        if !alive.load(std::sync::atomic::Ordering::Relaxed) {
            return;
        }
        match result {
            Ok(items) => {
                let _ = state.try_update(|s| s.apply_list(items));
            }
            Err(err) => {
                log::warn!("test case list fetch failed: {err}");
                let _ = state.try_update(|s| s.apply_list_error(err.to_string()));
            }
        }
    });
}

#[component]
fn RecordList() -> impl IntoView {
    let state = RwSignal::new(TestCasesState::default());
    let confirm_delete = RwSignal::new(None::<TestCase>);

    // Flipped on teardown; in-flight tasks check it before touching state.
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let refresh = {
        #[cfg(feature = "csr")]
        {
            let alive = alive.clone();
            Callback::new(move |()| fetch_all(state, alive.clone()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Callback::new(move |()| state.update(TestCasesState::begin_load))
        }
    };

    // Initial fetch on mount, once.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        refresh.run(());
    });

    let on_view = Callback::new(move |record: TestCase| {
        state.update(|s| s.select(record));
    });
    let on_modal_close = Callback::new(move |()| {
        state.update(TestCasesState::clear_selection);
    });
    let on_delete_request = Callback::new(move |record: TestCase| {
        confirm_delete.set(Some(record));
    });
    let on_delete_cancel = Callback::new(move |()| confirm_delete.set(None));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"Test Cases"</span>
                <span class="toolbar__divider" aria-hidden="true"></span>
                <a class="btn toolbar__new" href="/testcases/new">
                    "+ New Test Case"
                </a>
                <span class="toolbar__spacer"></span>
                <UserButton/>
            </header>

            <Show when=move || state.get().error.is_some()>
                <p class="dashboard-page__error">
                    {move || state.get().error.unwrap_or_default()}
                </p>
            </Show>

            <Show
                when=move || !state.get().loading
                fallback=move || view! { <p>"Loading test cases..."</p> }
            >
                <Show
                    when=move || !state.get().items.is_empty()
                    fallback=move || {
                        view! { <p class="dashboard-page__empty">"No test cases yet."</p> }
                    }
                >
                    <ul class="dashboard-page__list">
                        {move || {
                            state
                                .get()
                                .items
                                .into_iter()
                                .map(|record| {
                                    view! {
                                        <TestCaseCard
                                            record=record
                                            on_view=on_view
                                            on_delete=on_delete_request
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>

            {move || {
                state
                    .get()
                    .selected
                    .map(|record| view! { <TestCaseModal record=record on_close=on_modal_close/> })
            }}

            {move || {
                confirm_delete
                    .get()
                    .map(|record| {
                        view! {
                            <DeleteTestCaseDialog
                                target=record
                                on_cancel=on_delete_cancel
                                state=state
                                refresh=refresh
                                alive=alive.clone()
                            />
                        }
                    })
            }}
        </div>
    }
}

/// Apply the outcome of a delete request. Results that arrive after the
/// page is torn down are discarded before any signal is touched.
#[cfg(any(test, feature = "csr"))]
fn settle_delete(
    state: RwSignal<TestCasesState>,
    alive: &std::sync::atomic::AtomicBool,
    refresh: Callback<()>,
    result: Result<(), crate::net::api::ApiError>,
) {
    if !alive.load(std::sync::atomic::Ordering::Relaxed) {
        return;
    }
    match result {
        Ok(()) => {
            let _ = state.try_update(TestCasesState::finish_delete);
            refresh.run(());
        }
        Err(err) => {
            log::warn!("test case delete failed: {err}");
            let _ = state.try_update(|s| s.apply_delete_error(err.to_string()));
        }
    }
}

/// Confirmation dialog for deleting one record. On confirm the delete is
/// issued and, on success, the list resynced; a failure leaves the list
/// unchanged and surfaces the error.
#[component]
fn DeleteTestCaseDialog(
    target: TestCase,
    on_cancel: Callback<()>,
    state: RwSignal<TestCasesState>,
    refresh: Callback<()>,
    alive: std::sync::Arc<std::sync::atomic::AtomicBool>,
) -> impl IntoView {
    let id = target.id;
    let prompt = delete_prompt(&target.name);

    let submit = Callback::new(move |()| {
        let started = state.try_update(|s| s.begin_delete(id)).unwrap_or(false);
        if !started {
            return;
        }
        on_cancel.run(());
        #[cfg(feature = "csr")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::delete_test_case(id).await;
                settle_delete(state, &alive, refresh, result);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&refresh, &alive);
            state.update(TestCasesState::finish_delete);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Test Case"</h2>
                <p class="dialog__danger">{prompt}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
