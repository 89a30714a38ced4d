use super::*;
use base64::Engine as _;

fn key_for_host(prefix: &str, host: &str) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(format!("{host}$"));
    format!("{prefix}{payload}")
}

#[test]
fn frontend_api_decodes_test_key() {
    let key = key_for_host("pk_test_", "eager-fox-12.clerk.accounts.dev");
    assert_eq!(
        frontend_api_from_key(&key).as_deref(),
        Some("eager-fox-12.clerk.accounts.dev")
    );
}

#[test]
fn frontend_api_decodes_live_key() {
    let key = key_for_host("pk_live_", "clerk.example.com");
    assert_eq!(frontend_api_from_key(&key).as_deref(), Some("clerk.example.com"));
}

#[test]
fn frontend_api_tolerates_missing_dollar_suffix() {
    let payload = base64::engine::general_purpose::STANDARD.encode("clerk.example.com");
    let key = format!("pk_test_{payload}");
    assert_eq!(frontend_api_from_key(&key).as_deref(), Some("clerk.example.com"));
}

#[test]
fn frontend_api_rejects_unknown_prefix() {
    assert_eq!(frontend_api_from_key("sk_test_abc"), None);
    assert_eq!(frontend_api_from_key(""), None);
}

#[test]
fn frontend_api_rejects_bad_payload() {
    assert_eq!(frontend_api_from_key("pk_test_%%%"), None);
    // Payload decoding to just "$" leaves an empty host.
    let key = key_for_host("pk_test_", "");
    assert_eq!(frontend_api_from_key(&key), None);
}

#[test]
fn sdk_script_url_targets_frontend_api_host() {
    assert_eq!(
        sdk_script_url("eager-fox-12.clerk.accounts.dev"),
        "https://eager-fox-12.clerk.accounts.dev/npm/@clerk/clerk-js@5/dist/clerk.browser.js"
    );
}

#[test]
fn display_name_prefers_first_name() {
    assert_eq!(
        display_name(Some("Alice".to_owned()), Some("al".to_owned())),
        "Alice"
    );
}

#[test]
fn display_name_falls_back_to_username_then_default() {
    assert_eq!(display_name(None, Some("al".to_owned())), "al");
    assert_eq!(display_name(Some("  ".to_owned()), None), "Member");
    assert_eq!(display_name(None, None), "Member");
}
