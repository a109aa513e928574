//! Client-side state for the activity editor and photo gallery.
//!
//! Everything here is synchronous and framework-independent: the `ui` crate
//! drives these types from the browser event loop, and the asynchronous work
//! itself lives behind the `payloads::APIClient` collaborator.

pub mod attendees;
pub mod draft;
pub mod editor;
pub mod photo_actions;
pub mod validate;

pub use attendees::{AttendeeRow, attendee_rows, going_headline};
pub use draft::{ActivityDraft, DraftError, activity_validator};
pub use editor::{
    Destination, EditorAction, EditorState, SubmissionPlan, SubmitRequest,
    exit_destination, plan_submission,
};
pub use photo_actions::{PhotoActionKind, PhotoActionTracker};
pub use validate::{FieldValues, FormValidator, Rule, ValidationErrors};
