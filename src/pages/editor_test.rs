use super::*;

#[test]
fn payload_carries_name_and_script_verbatim() {
    let payload = build_create_payload("Login flow", "Given ...\nWhen ...\nThen ...");
    assert_eq!(payload.name, "Login flow");
    assert_eq!(payload.gherkin_script, "Given ...\nWhen ...\nThen ...");
}

#[test]
fn payload_accepts_empty_and_whitespace_fields() {
    // The backend owns validation; the client sends what was typed.
    let payload = build_create_payload("", "   ");
    assert_eq!(payload.name, "");
    assert_eq!(payload.gherkin_script, "   ");
}

#[test]
fn payload_preserves_trailing_newlines() {
    let payload = build_create_payload("p", "Given a\n\n");
    assert_eq!(payload.gherkin_script, "Given a\n\n");
}
