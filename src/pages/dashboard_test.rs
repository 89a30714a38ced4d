use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use super::*;

fn counted_refresh() -> (Callback<()>, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = count.clone();
    let refresh = Callback::new(move |()| {
        seen.fetch_add(1, Ordering::Relaxed);
    });
    (refresh, count)
}

#[test]
fn delete_success_resyncs_while_mounted() {
    let owner = Owner::new();
    owner.set();
    let state = RwSignal::new(TestCasesState::default());
    state.update(|s| {
        assert!(s.begin_delete(5));
    });
    let (refresh, resyncs) = counted_refresh();
    let alive = AtomicBool::new(true);

    settle_delete(state, &alive, refresh, Ok(()));

    assert_eq!(resyncs.load(Ordering::Relaxed), 1);
    assert!(state.get_untracked().delete_pending.is_none());
}

#[test]
fn late_delete_result_after_teardown_is_discarded() {
    let owner = Owner::new();
    owner.set();
    let state = RwSignal::new(TestCasesState::default());
    state.update(|s| {
        assert!(s.begin_delete(5));
    });
    let (refresh, resyncs) = counted_refresh();
    let alive = AtomicBool::new(true);

    // Navigation away: the cleanup hook flips the flag, then the reactive
    // owner disposes the page's signals and callbacks.
    alive.store(false, Ordering::Relaxed);
    owner.cleanup();

    // Running the disposed refresh callback would panic; the settled
    // result must be dropped before any signal or callback is touched.
    settle_delete(state, &alive, refresh, Ok(()));

    assert_eq!(resyncs.load(Ordering::Relaxed), 0);
}

#[test]
fn delete_failure_surfaces_error_without_resync() {
    let owner = Owner::new();
    owner.set();
    let state = RwSignal::new(TestCasesState::default());
    state.update(|s| {
        assert!(s.begin_delete(5));
    });
    let (refresh, resyncs) = counted_refresh();
    let alive = AtomicBool::new(true);

    settle_delete(
        state,
        &alive,
        refresh,
        Err(crate::net::api::ApiError::Status {
            op: "delete",
            status: 500,
        }),
    );

    assert_eq!(resyncs.load(Ordering::Relaxed), 0);
    let settled = state.get_untracked();
    assert!(settled.delete_pending.is_none());
    assert_eq!(
        settled.error.as_deref(),
        Some("delete failed with status 500")
    );
}

#[test]
fn delete_prompt_quotes_the_record_name() {
    assert_eq!(
        delete_prompt("Login flow"),
        "Delete \"Login flow\"? This cannot be undone."
    );
}

#[test]
fn delete_prompt_keeps_empty_names_verbatim() {
    assert_eq!(delete_prompt(""), "Delete \"\"? This cannot be undone.");
}
