//! List row for a test case on the dashboard.

use leptos::prelude::*;

use crate::net::types::TestCase;
use crate::util::timestamp::format_created_at;

/// One dashboard row: name, creation date, view and delete actions.
/// The parent decides what selection and deletion mean.
#[component]
pub fn TestCaseCard(
    record: TestCase,
    on_view: Callback<TestCase>,
    on_delete: Callback<TestCase>,
) -> impl IntoView {
    let view_record = record.clone();
    let delete_record = record.clone();
    let created = format_created_at(&record.created_at);

    view! {
        <li class="testcase-card">
            <span class="testcase-card__name">{record.name.clone()}</span>
            <span class="testcase-card__created">{created}</span>
            <span class="testcase-card__actions">
                <button class="btn" on:click=move |_| on_view.run(view_record.clone())>
                    "View"
                </button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(delete_record.clone())>
                    "Delete"
                </button>
            </span>
        </li>
    }
}
