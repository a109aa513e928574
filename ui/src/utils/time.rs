use jiff::{Timestamp, tz};

/// Format an activity's scheduling instant for display in the viewer's
/// timezone.
pub fn format_timestamp(timestamp: Timestamp) -> String {
    timestamp
        .to_zoned(tz::TimeZone::system())
        .strftime("%a, %d %b %Y %H:%M")
        .to_string()
}
