//! The editable local copy of an activity.

use jiff::{civil, tz};
use payloads::{ActivityId, Category, DESCRIPTION_MIN_LEN, requests, responses};

use crate::validate::{FieldValues, FormValidator, Rule};

pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const CATEGORY: &str = "category";
pub const DATE: &str = "date";
pub const TIME: &str = "time";
pub const CITY: &str = "city";
pub const VENUE: &str = "venue";

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("date is not set")]
    MissingDate,
    #[error("time is not set")]
    MissingTime,
    #[error("no identity attached to the draft")]
    MissingId,
    #[error("category is not set")]
    MissingCategory,
    #[error("invalid scheduling instant: {0}")]
    InvalidInstant(String),
}

/// A mutable working copy of an activity being created or edited.
///
/// The remote entity carries one scheduling instant; the form edits it as
/// separate date and time sub-fields in the display timezone. The two
/// representations meet in [`from_remote`](Self::from_remote) and
/// [`to_payload`](Self::to_payload).
///
/// `id` is `Some` exactly when the draft represents an already-persisted
/// activity; submission routing branches on this alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityDraft {
    pub id: Option<ActivityId>,
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub date: Option<civil::Date>,
    pub time: Option<civil::Time>,
    pub city: String,
    pub venue: String,
}

impl ActivityDraft {
    /// Hydrate a draft from a fetched activity, splitting the scheduling
    /// instant into date and time in the system timezone.
    pub fn from_remote(activity: &responses::Activity) -> Self {
        let zoned = activity.date.to_zoned(tz::TimeZone::system());
        Self {
            id: Some(activity.id),
            title: activity.title.clone(),
            description: activity.description.clone(),
            category: Some(activity.category),
            date: Some(zoned.date()),
            time: Some(zoned.time()),
            city: activity.city.clone(),
            venue: activity.venue.clone(),
        }
    }

    /// Recombine the date and time sub-fields into one instant and shape the
    /// draft for the create/update API.
    ///
    /// The caller is expected to have validated the draft first; an absent
    /// sub-field or identity is an error, not a panic.
    pub fn to_payload(
        &self,
    ) -> Result<requests::ActivityPayload, DraftError> {
        let id = self.id.ok_or(DraftError::MissingId)?;
        let date = self.date.ok_or(DraftError::MissingDate)?;
        let time = self.time.ok_or(DraftError::MissingTime)?;
        let instant = date
            .to_datetime(time)
            .to_zoned(tz::TimeZone::system())
            .map_err(|e| DraftError::InvalidInstant(e.to_string()))?
            .timestamp();
        Ok(requests::ActivityPayload {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.ok_or(DraftError::MissingCategory)?,
            date: instant,
            city: self.city.clone(),
            venue: self.venue.clone(),
        })
    }

    /// Project the draft into the raw field record the validator consumes.
    pub fn field_values(&self) -> FieldValues {
        FieldValues::new()
            .set(TITLE, self.title.clone())
            .set(DESCRIPTION, self.description.clone())
            .set(
                CATEGORY,
                self.category.map(|c| c.as_str()).unwrap_or_default(),
            )
            .set(
                DATE,
                self.date
                    .map(|d| d.strftime("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
            )
            .set(
                TIME,
                self.time
                    .map(|t| t.strftime("%H:%M").to_string())
                    .unwrap_or_default(),
            )
            .set(CITY, self.city.clone())
            .set(VENUE, self.venue.clone())
    }
}

/// The rule set for the activity form.
pub fn activity_validator() -> FormValidator {
    FormValidator::new()
        .field(
            TITLE,
            "Title",
            vec![Rule::RequiredMsg("Event title is required!")],
        )
        .field(CATEGORY, "Category", vec![Rule::Required])
        .field(
            DESCRIPTION,
            "Description",
            vec![
                Rule::Required,
                Rule::MinLengthMsg(
                    DESCRIPTION_MIN_LEN,
                    "Description needs to be at least 5 chars!",
                ),
            ],
        )
        .field(CITY, "City", vec![Rule::Required])
        .field(VENUE, "Venue", vec![Rule::Required])
        .field(DATE, "Date", vec![Rule::Required])
        .field(TIME, "Time", vec![Rule::Required])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote_activity() -> responses::Activity {
        // Build the instant from a civil datetime so the test is
        // independent of the environment's timezone.
        let instant = civil::date(2024, 6, 15)
            .at(18, 30, 0, 0)
            .to_zoned(tz::TimeZone::system())
            .unwrap()
            .timestamp();
        responses::Activity {
            id: ActivityId::new(),
            title: "Gallery Night".to_string(),
            description: "Openings across town".to_string(),
            category: Category::Culture,
            date: instant,
            city: "Lisbon".to_string(),
            venue: "Bairro Alto".to_string(),
            attendees: vec![responses::Attendee {
                username: "ines".to_string(),
                display_name: "Inês".to_string(),
                image: None,
                is_host: true,
                following: false,
            }],
        }
    }

    #[test]
    fn default_draft_has_no_identity() {
        let draft = ActivityDraft::default();
        assert!(draft.id.is_none());
        assert!(draft.date.is_none());
        assert!(draft.time.is_none());
        assert!(draft.title.is_empty());
        assert!(draft.category.is_none());
    }

    #[test]
    fn from_remote_copies_identity_and_splits_the_instant() {
        let activity = remote_activity();
        let draft = ActivityDraft::from_remote(&activity);
        assert_eq!(draft.id, Some(activity.id));
        assert_eq!(draft.date, Some(civil::date(2024, 6, 15)));
        assert_eq!(draft.time, Some(civil::time(18, 30, 0, 0)));
        assert_eq!(draft.title, activity.title);
        assert_eq!(draft.category, Some(Category::Culture));
    }

    #[test]
    fn round_trip_preserves_scalars_and_instant() {
        let activity = remote_activity();
        let payload =
            ActivityDraft::from_remote(&activity).to_payload().unwrap();
        assert_eq!(payload.id, activity.id);
        assert_eq!(payload.title, activity.title);
        assert_eq!(payload.description, activity.description);
        assert_eq!(payload.category, activity.category);
        assert_eq!(payload.city, activity.city);
        assert_eq!(payload.venue, activity.venue);
        assert_eq!(payload.date, activity.date);
    }

    #[test]
    fn to_payload_requires_both_date_and_time() {
        let activity = remote_activity();
        let mut draft = ActivityDraft::from_remote(&activity);
        draft.date = None;
        assert_eq!(draft.to_payload(), Err(DraftError::MissingDate));

        let mut draft = ActivityDraft::from_remote(&activity);
        draft.time = None;
        assert_eq!(draft.to_payload(), Err(DraftError::MissingTime));
    }

    #[test]
    fn to_payload_requires_an_attached_identity() {
        let mut draft = ActivityDraft::from_remote(&remote_activity());
        draft.id = None;
        assert_eq!(draft.to_payload(), Err(DraftError::MissingId));
    }

    #[test]
    fn empty_draft_fails_every_required_field() {
        let errors =
            activity_validator().validate(&ActivityDraft::default().field_values());
        assert_eq!(errors.len(), 7);
        assert_eq!(errors.get(TITLE), Some("Event title is required!"));
        assert_eq!(errors.get(CATEGORY), Some("Category is required"));
        assert_eq!(errors.get(DESCRIPTION), Some("Description is required"));
    }

    #[test]
    fn short_description_gets_the_custom_message() {
        let mut draft = ActivityDraft::from_remote(&remote_activity());
        draft.description = "hey".to_string();
        let errors = activity_validator().validate(&draft.field_values());
        assert_eq!(
            errors.get(DESCRIPTION),
            Some("Description needs to be at least 5 chars!")
        );
    }

    #[test]
    fn hydrated_draft_validates_clean() {
        let draft = ActivityDraft::from_remote(&remote_activity());
        assert!(activity_validator().validate(&draft.field_values()).is_empty());
    }
}
