use super::*;

fn record(id: i64, name: &str) -> TestCase {
    TestCase {
        id,
        name: name.to_owned(),
        gherkin_script: format!("Given record {id}\nThen it exists"),
        created_at: "2024-05-01T09:30:12Z".to_owned(),
    }
}

#[test]
fn state_defaults_are_empty_and_idle() {
    let s = TestCasesState::default();
    assert!(s.items.is_empty());
    assert!(s.selected.is_none());
    assert!(!s.loading);
    assert!(s.delete_pending.is_none());
    assert!(s.error.is_none());
}

#[test]
fn apply_list_replaces_items_in_server_order() {
    let mut s = TestCasesState::default();
    s.begin_load();
    assert!(s.loading);

    s.apply_list(vec![record(9, "c"), record(1, "a"), record(5, "b")]);
    assert!(!s.loading);
    let ids: Vec<i64> = s.items.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![9, 1, 5]);
    let names: Vec<&str> = s.items.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["c", "a", "b"]);
}

#[test]
fn apply_list_twice_with_same_response_is_idempotent() {
    let response = vec![record(1, "a"), record(5, "b")];
    let mut s = TestCasesState::default();
    s.apply_list(response.clone());
    let first = s.clone();
    s.apply_list(response);
    assert_eq!(s, first);
}

#[test]
fn failed_resync_keeps_previous_items() {
    let mut s = TestCasesState::default();
    s.apply_list(vec![record(1, "a"), record(5, "b"), record(9, "c")]);

    s.begin_load();
    s.apply_list_error("list failed with status 503".to_owned());

    let ids: Vec<i64> = s.items.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 5, 9]);
    assert_eq!(s.error.as_deref(), Some("list failed with status 503"));
    assert!(!s.loading);
}

#[test]
fn successful_resync_after_delete_drops_the_record() {
    let mut s = TestCasesState::default();
    s.apply_list(vec![record(1, "a"), record(5, "b"), record(9, "c")]);

    assert!(s.begin_delete(5));
    s.finish_delete();
    // Server resync response no longer contains id 5.
    s.apply_list(vec![record(1, "a"), record(9, "c")]);

    let ids: Vec<i64> = s.items.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 9]);
}

#[test]
fn duplicate_delete_is_dropped_while_one_is_pending() {
    let mut s = TestCasesState::default();
    assert!(s.begin_delete(5));
    assert!(!s.begin_delete(5));
    assert!(!s.begin_delete(9));
    s.finish_delete();
    assert!(s.begin_delete(9));
}

#[test]
fn failed_delete_keeps_items_and_surfaces_error() {
    let mut s = TestCasesState::default();
    s.apply_list(vec![record(1, "a"), record(5, "b")]);

    assert!(s.begin_delete(5));
    s.apply_delete_error("delete failed with status 500".to_owned());

    assert!(s.delete_pending.is_none());
    assert_eq!(s.items.len(), 2);
    assert_eq!(s.error.as_deref(), Some("delete failed with status 500"));
}

#[test]
fn selection_is_cleared_and_replaced_without_stale_fields() {
    let mut s = TestCasesState::default();
    let first = record(1, "a");
    let second = record(2, "b");

    s.select(first);
    s.clear_selection();
    assert!(s.selected.is_none());

    s.select(second.clone());
    assert_eq!(s.selected, Some(second));
}

#[test]
fn list_success_clears_a_previous_error() {
    let mut s = TestCasesState::default();
    s.apply_list_error("request failed: offline".to_owned());
    s.apply_list(vec![record(1, "a")]);
    assert!(s.error.is_none());
}
