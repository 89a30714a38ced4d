use super::*;

#[test]
fn formats_utc_timestamp_to_minutes() {
    assert_eq!(format_created_at("2024-05-01T09:30:12Z"), "2024-05-01 09:30");
}

#[test]
fn drops_fractional_seconds_and_offset() {
    assert_eq!(
        format_created_at("2024-05-02T14:00:59.123+00:00"),
        "2024-05-02 14:00"
    );
}

#[test]
fn returns_non_iso_input_unchanged() {
    assert_eq!(format_created_at("yesterday"), "yesterday");
    assert_eq!(format_created_at(""), "");
    assert_eq!(format_created_at("2024-05-01T"), "2024-05-01T");
}
