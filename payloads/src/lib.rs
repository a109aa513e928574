use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError, ok_body, ok_empty};

/// Identity of a persisted activity. Generated client-side (uuid v4) when an
/// activity is created, so the id is usable before the server has confirmed
/// the write.
#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub struct ActivityId(pub Uuid);

impl ActivityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActivityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::str::FromStr for ActivityId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Identity of an uploaded photo, assigned by the server's storage layer.
#[derive(
    Debug, Display, Clone, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct PhotoId(pub String);

/// The closed set of activity categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Drinks,
    Culture,
    Film,
    Food,
    Music,
    Travel,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Drinks,
        Category::Culture,
        Category::Film,
        Category::Food,
        Category::Music,
        Category::Travel,
    ];

    /// The wire value, also used as the form select value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Drinks => "drinks",
            Category::Culture => "culture",
            Category::Film => "film",
            Category::Food => "food",
            Category::Music => "music",
            Category::Travel => "travel",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Drinks => "Drinks",
            Category::Culture => "Culture",
            Category::Film => "Film",
            Category::Food => "Food",
            Category::Music => "Music",
            Category::Travel => "Travel",
        }
    }

    /// Parse a form select value. Empty or unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub const DESCRIPTION_MIN_LEN: usize = 5;
pub const MAX_PHOTO_SIZE: usize = 1_048_576;

/// Shown in place of a missing profile or attendee image.
pub const PLACEHOLDER_IMAGE: &str = "/assets/user.png";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_round_trips_all_variants() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(Category::parse(""), None);
        assert_eq!(Category::parse("sports"), None);
    }

    #[test]
    fn activity_id_parses_from_route_segment() {
        let id = ActivityId::new();
        let parsed: ActivityId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<ActivityId>().is_err());
    }
}
