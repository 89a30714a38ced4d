//! Display formatting for server-issued timestamps.

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

/// Format an ISO-8601 timestamp for display as `YYYY-MM-DD HH:MM`.
///
/// The server owns the value; the client only reformats it, dropping
/// seconds, fractions, and the offset. Input that does not look like an
/// ISO timestamp is returned unchanged.
#[must_use]
pub fn format_created_at(raw: &str) -> String {
    let Some((date, time)) = raw.split_once('T') else {
        return raw.to_owned();
    };
    let clock: String = time
        .chars()
        .take_while(|c| *c == ':' || c.is_ascii_digit())
        .collect();
    let mut parts = clock.split(':');
    match (parts.next(), parts.next()) {
        (Some(hours), Some(minutes)) if !hours.is_empty() && !minutes.is_empty() => {
            format!("{date} {hours}:{minutes}")
        }
        _ => raw.to_owned(),
    }
}
