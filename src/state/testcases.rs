//! Dashboard list state for test case records.
//!
//! DESIGN
//! ======
//! The record set is owned server-side; this is a transient rendering copy.
//! A list refresh replaces the items wholesale in server order — there is
//! no optimistic patching, so a failed resync leaves the previous list
//! visible. One record at a time may be selected for the detail dialog.

#[cfg(test)]
#[path = "testcases_test.rs"]
mod testcases_test;

use crate::net::types::TestCase;

/// Dashboard-owned state for the record list, selection, and in-flight
/// operations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestCasesState {
    /// Records in server-given order.
    pub items: Vec<TestCase>,
    /// Record currently shown in the detail dialog, if any.
    pub selected: Option<TestCase>,
    /// A list fetch is in flight.
    pub loading: bool,
    /// Id of a delete in flight; duplicate requests are dropped.
    pub delete_pending: Option<i64>,
    /// Last operation failure, shown inline until the next success.
    pub error: Option<String>,
}

impl TestCasesState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Replace the whole list with a fresh server response.
    pub fn apply_list(&mut self, items: Vec<TestCase>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed list fetch; the previously rendered items stay.
    pub fn apply_list_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Select a record for the detail dialog. No network call: the list
    /// response already carries the full script body.
    pub fn select(&mut self, record: TestCase) {
        self.selected = Some(record);
    }

    /// Single exit route for the detail dialog.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Mark a delete as in flight. Returns `false` when another delete is
    /// already pending, dropping the duplicate request.
    pub fn begin_delete(&mut self, id: i64) -> bool {
        if self.delete_pending.is_some() {
            return false;
        }
        self.delete_pending = Some(id);
        true
    }

    pub fn finish_delete(&mut self) {
        self.delete_pending = None;
    }

    /// Record a failed delete; the list is left unchanged.
    pub fn apply_delete_error(&mut self, message: String) {
        self.delete_pending = None;
        self.error = Some(message);
    }
}
