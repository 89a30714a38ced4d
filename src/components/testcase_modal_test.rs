use super::*;

#[test]
fn escape_dismisses_the_dialog() {
    assert!(is_dismiss_key("Escape"));
}

#[test]
fn other_keys_leave_the_dialog_open() {
    assert!(!is_dismiss_key("Enter"));
    assert!(!is_dismiss_key("Tab"));
    assert!(!is_dismiss_key("escape"));
}
