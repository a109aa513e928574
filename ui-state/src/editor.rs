//! State transitions for the activity editor.
//!
//! The editor is a pure state machine: the `ui` crate dispatches an
//! [`EditorAction`] for every event (including the completion of remote
//! calls) and re-renders from the returned state. The remote calls
//! themselves are issued by the caller against its `APIClient`.

use payloads::{ActivityId, requests, responses};

use crate::draft::{ActivityDraft, DraftError};
use crate::validate::ValidationErrors;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    /// The working copy the form edits.
    pub draft: ActivityDraft,
    /// The draft as hydrated, for pristine detection.
    initial: ActivityDraft,
    /// True while an existing activity is being fetched.
    pub is_loading: bool,
    /// True while a create/update call is in flight.
    pub is_submitting: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    /// An existing activity is being fetched for editing.
    LoadStarted,
    /// The fetch settled. `None` means it failed: the draft stays as it
    /// was. Either way the loading flag clears.
    LoadFinished(Option<responses::Activity>),
    /// The user changed a field.
    Edited(ActivityDraft),
    SubmitStarted,
    /// The create/update call settled, successfully or not.
    SubmitSettled,
}

impl EditorState {
    pub fn apply(&self, action: EditorAction) -> Self {
        let mut next = self.clone();
        match action {
            EditorAction::LoadStarted => next.is_loading = true,
            EditorAction::LoadFinished(activity) => {
                if let Some(activity) = &activity {
                    next.draft = ActivityDraft::from_remote(activity);
                    next.initial = next.draft.clone();
                }
                next.is_loading = false;
            }
            EditorAction::Edited(draft) => next.draft = draft,
            EditorAction::SubmitStarted => next.is_submitting = true,
            EditorAction::SubmitSettled => next.is_submitting = false,
        }
        next
    }

    /// True until the user has changed something since hydration.
    pub fn is_pristine(&self) -> bool {
        self.draft == self.initial
    }

    /// Whether the submit control is enabled, derived fresh from current
    /// state: disabled while loading, while invalid, or while untouched.
    pub fn can_submit(&self, errors: &ValidationErrors) -> bool {
        !self.is_loading && errors.is_empty() && !self.is_pristine()
    }
}

/// Where to go after leaving the editor, by cancel or by submission.
/// Decided purely by identity presence, never by the remote outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    ActivityList,
    ActivityDetail(ActivityId),
}

pub fn exit_destination(id: Option<ActivityId>) -> Destination {
    match id {
        None => Destination::ActivityList,
        Some(id) => Destination::ActivityDetail(id),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitRequest {
    Create(requests::ActivityPayload),
    Update(requests::ActivityPayload),
}

/// A planned submission: which API call to make and where to navigate
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPlan {
    pub request: SubmitRequest,
    pub destination: Destination,
}

/// Decide create-vs-update from identity presence. A draft without an
/// identity gets `new_id` attached and becomes a create; one with an
/// identity becomes an update under it. The destination follows the
/// pre-submission identity.
pub fn plan_submission(
    draft: &ActivityDraft,
    new_id: ActivityId,
) -> Result<SubmissionPlan, DraftError> {
    let destination = exit_destination(draft.id);
    if draft.id.is_some() {
        Ok(SubmissionPlan {
            request: SubmitRequest::Update(draft.to_payload()?),
            destination,
        })
    } else {
        let mut draft = draft.clone();
        draft.id = Some(new_id);
        Ok(SubmissionPlan {
            request: SubmitRequest::Create(draft.to_payload()?),
            destination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::activity_validator;
    use jiff::{civil, tz};
    use payloads::Category;

    fn remote_activity() -> responses::Activity {
        let instant = civil::date(2025, 3, 8)
            .at(9, 0, 0, 0)
            .to_zoned(tz::TimeZone::system())
            .unwrap()
            .timestamp();
        responses::Activity {
            id: ActivityId::new(),
            title: "Morning Run".to_string(),
            description: "Easy 5k along the river".to_string(),
            category: Category::Travel,
            date: instant,
            city: "Porto".to_string(),
            venue: "Ribeira".to_string(),
            attendees: vec![],
        }
    }

    #[test]
    fn load_finished_replaces_the_draft_and_clears_the_flag() {
        let activity = remote_activity();
        let state = EditorState::default()
            .apply(EditorAction::LoadStarted)
            .apply(EditorAction::LoadFinished(Some(activity.clone())));
        assert!(!state.is_loading);
        assert_eq!(state.draft.id, Some(activity.id));
        assert!(state.is_pristine());
    }

    #[test]
    fn failed_load_leaves_the_draft_untouched_but_clears_the_flag() {
        let state = EditorState::default().apply(EditorAction::LoadStarted);
        assert!(state.is_loading);
        let state = state.apply(EditorAction::LoadFinished(None));
        assert!(!state.is_loading);
        assert_eq!(state.draft, ActivityDraft::default());
    }

    #[test]
    fn submit_flag_tracks_the_in_flight_call() {
        let state = EditorState::default().apply(EditorAction::SubmitStarted);
        assert!(state.is_submitting);
        assert!(!state.apply(EditorAction::SubmitSettled).is_submitting);
    }

    #[test]
    fn can_submit_requires_valid_edited_and_not_loading() {
        let state = EditorState::default();
        let errors = activity_validator().validate(&state.draft.field_values());
        // Untouched and invalid.
        assert!(!state.can_submit(&errors));

        let mut draft = ActivityDraft::from_remote(&remote_activity());
        draft.title = "Evening Run".to_string();
        let state = EditorState::default()
            .apply(EditorAction::LoadFinished(Some(remote_activity())))
            .apply(EditorAction::Edited(draft));
        let errors = activity_validator().validate(&state.draft.field_values());
        assert!(state.can_submit(&errors));

        let loading = state.apply(EditorAction::LoadStarted);
        assert!(!loading.can_submit(&errors));
    }

    #[test]
    fn pristine_draft_cannot_be_submitted_even_when_valid() {
        let state = EditorState::default()
            .apply(EditorAction::LoadFinished(Some(remote_activity())));
        let errors = activity_validator().validate(&state.draft.field_values());
        assert!(errors.is_empty());
        assert!(!state.can_submit(&errors));
    }

    #[test]
    fn exit_destination_branches_on_identity_presence() {
        assert_eq!(exit_destination(None), Destination::ActivityList);
        let id = ActivityId::new();
        assert_eq!(
            exit_destination(Some(id)),
            Destination::ActivityDetail(id)
        );
    }

    #[test]
    fn draft_without_identity_plans_a_create_under_the_new_id() {
        let mut draft = ActivityDraft::from_remote(&remote_activity());
        draft.id = None;
        let new_id = ActivityId::new();
        let plan = plan_submission(&draft, new_id).unwrap();
        match plan.request {
            SubmitRequest::Create(payload) => assert_eq!(payload.id, new_id),
            SubmitRequest::Update(_) => panic!("expected a create"),
        }
        assert_eq!(plan.destination, Destination::ActivityList);
    }

    #[test]
    fn draft_with_identity_plans_an_update_under_it() {
        let activity = remote_activity();
        let draft = ActivityDraft::from_remote(&activity);
        let plan = plan_submission(&draft, ActivityId::new()).unwrap();
        match plan.request {
            SubmitRequest::Update(payload) => {
                assert_eq!(payload.id, activity.id)
            }
            SubmitRequest::Create(_) => panic!("expected an update"),
        }
        assert_eq!(
            plan.destination,
            Destination::ActivityDetail(activity.id)
        );
    }

    #[test]
    fn planning_an_incomplete_draft_fails() {
        let mut draft = ActivityDraft::from_remote(&remote_activity());
        draft.time = None;
        assert_eq!(
            plan_submission(&draft, ActivityId::new()),
            Err(DraftError::MissingTime)
        );
    }

    #[test]
    fn generated_identities_do_not_collide() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(ActivityId::new()));
        }
    }
}
