use jiff::{Timestamp, Zoned, civil, tz};

/// Localize a timestamp to the browser's timezone for display.
pub fn localize_timestamp(timestamp: Timestamp) -> Zoned {
    timestamp.to_zoned(tz::TimeZone::system())
}

/// Schedule display, e.g. "Sat, 14 Mar 2026 09:30".
pub fn format_event_time(timestamp: Timestamp) -> String {
    localize_timestamp(timestamp)
        .strftime("%a, %d %b %Y %H:%M")
        .to_string()
}

/// Date-only display, e.g. "March 14, 2026".
pub fn format_date(timestamp: Timestamp) -> String {
    localize_timestamp(timestamp).strftime("%B %d, %Y").to_string()
}

/// Value string for an `<input type="datetime-local">`.
pub fn datetime_local_value(timestamp: Timestamp) -> String {
    localize_timestamp(timestamp)
        .strftime("%Y-%m-%dT%H:%M")
        .to_string()
}

/// Parse an `<input type="datetime-local">` value, interpreted in the
/// browser's timezone. Returns None for anything the input widget
/// shouldn't produce.
pub fn parse_datetime_local(value: &str) -> Option<Timestamp> {
    let datetime = civil::DateTime::strptime("%Y-%m-%dT%H:%M", value).ok()?;
    let zoned = datetime.to_zoned(tz::TimeZone::system()).ok()?;
    Some(zoned.timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datetime_local_round_trips() {
        let parsed = parse_datetime_local("2026-04-14T09:30").unwrap();
        assert_eq!(datetime_local_value(parsed), "2026-04-14T09:30");
    }

    #[test]
    fn rejects_garbage_input() {
        assert_eq!(parse_datetime_local(""), None);
        assert_eq!(parse_datetime_local("not a date"), None);
        assert_eq!(parse_datetime_local("2026-04-14"), None);
    }
}
