//! Display projection of an activity's attendee list.

use payloads::responses;

/// One row of the attendee sidebar, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeRow {
    /// Row key and profile-link target.
    pub username: String,
    pub display_name: String,
    /// Fully resolved image URL, placeholder included.
    pub image_src: String,
    pub is_host: bool,
    pub following: bool,
}

/// Project attendees into display rows, preserving order. `resolve` maps a
/// relative image path (or none) to a display URL.
pub fn attendee_rows(
    attendees: &[responses::Attendee],
    resolve: impl Fn(Option<&str>) -> String,
) -> Vec<AttendeeRow> {
    attendees
        .iter()
        .map(|attendee| AttendeeRow {
            username: attendee.username.clone(),
            display_name: attendee.display_name.clone(),
            image_src: resolve(attendee.image.as_deref()),
            is_host: attendee.is_host,
            following: attendee.following,
        })
        .collect()
}

pub fn going_headline(count: usize) -> String {
    if count == 1 {
        "1 Person Going".to_string()
    } else {
        format!("{count} People Going")
    }
}
