use crate::{ActivityId, Category, PhotoId};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A person attending an activity.
///
/// `image` is a relative path; resolve it with
/// [`APIClient::photo_src`](crate::APIClient::photo_src) before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub username: String,
    pub display_name: String,
    pub image: Option<String>,
    pub is_host: bool,
    /// Whether the viewer follows this attendee.
    pub following: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub date: Timestamp,
    pub city: String,
    pub venue: String,
    pub attendees: Vec<Attendee>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoId,
    /// Relative path to the image bytes.
    pub url: String,
    pub is_main: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub display_name: String,
    pub image: Option<String>,
    /// True when the profile belongs to the viewer; gates the photo
    /// management controls.
    pub is_current_user: bool,
    pub photos: Vec<Photo>,
}
