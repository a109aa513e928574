use crate::{ActivityId, Category};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// The submission shape shared by activity creation and update. The client
/// owns the id in both cases: a freshly generated one for create, the
/// existing one for update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityPayload {
    pub id: ActivityId,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// The combined scheduling instant.
    pub date: Timestamp,
    pub city: String,
    pub venue: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadPhoto {
    pub filename: String,
    pub image_data: Vec<u8>,
}
