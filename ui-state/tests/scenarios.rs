//! End-to-end exercises of the editor and gallery state, driven the way the
//! browser layer drives them.

use jiff::{civil, tz};
use payloads::{ActivityId, Category, PhotoId, responses};
use ui_state::{
    ActivityDraft, Destination, EditorAction, EditorState, PhotoActionKind,
    PhotoActionTracker, SubmitRequest, activity_validator, plan_submission,
};

#[test]
fn creating_an_activity_from_a_blank_editor() {
    // Editor opened with no identity.
    let state = EditorState::default();
    assert!(state.draft.id.is_none());

    // The user fills in the form.
    let mut draft = ActivityDraft::default();
    draft.title = "Beach Cleanup".to_string();
    draft.category = Some(Category::Culture);
    draft.description = "Community event".to_string();
    draft.city = "Miami".to_string();
    draft.venue = "South Beach".to_string();
    draft.date = Some(civil::date(2024, 5, 1));
    draft.time = Some(civil::time(10, 0, 0, 0));
    let state = state.apply(EditorAction::Edited(draft));

    // The form is valid and submittable.
    let errors = activity_validator().validate(&state.draft.field_values());
    assert!(errors.is_empty());
    assert!(state.can_submit(&errors));

    // Submission plans a create under a freshly generated identity, with a
    // combined instant of 2024-05-01T10:00 in the display timezone.
    let new_id = ActivityId::new();
    let plan = plan_submission(&state.draft, new_id).unwrap();
    let payload = match plan.request {
        SubmitRequest::Create(payload) => payload,
        SubmitRequest::Update(_) => panic!("expected a create"),
    };
    assert_eq!(payload.id, new_id);
    let expected = civil::date(2024, 5, 1)
        .at(10, 0, 0, 0)
        .to_zoned(tz::TimeZone::system())
        .unwrap()
        .timestamp();
    assert_eq!(payload.date, expected);

    // A brand-new activity exits to the listing, not a detail view.
    assert_eq!(plan.destination, Destination::ActivityList);
}

#[test]
fn editing_an_existing_activity_keeps_its_identity() {
    let id = ActivityId::new();
    let activity = responses::Activity {
        id,
        title: "Beach Cleanup".to_string(),
        description: "Community event".to_string(),
        category: Category::Culture,
        date: civil::date(2024, 5, 1)
            .at(10, 0, 0, 0)
            .to_zoned(tz::TimeZone::system())
            .unwrap()
            .timestamp(),
        city: "Miami".to_string(),
        venue: "South Beach".to_string(),
        attendees: vec![],
    };

    let state = EditorState::default()
        .apply(EditorAction::LoadStarted)
        .apply(EditorAction::LoadFinished(Some(activity)));
    assert!(!state.is_loading);

    let mut draft = state.draft.clone();
    draft.venue = "North Beach".to_string();
    let state = state.apply(EditorAction::Edited(draft));

    let plan = plan_submission(&state.draft, ActivityId::new()).unwrap();
    match plan.request {
        SubmitRequest::Update(payload) => assert_eq!(payload.id, id),
        SubmitRequest::Create(_) => panic!("expected an update"),
    }
    assert_eq!(plan.destination, Destination::ActivityDetail(id));
}

#[test]
fn gallery_actions_respect_the_main_photo_and_the_busy_flag() {
    let p1 = responses::Photo {
        id: PhotoId("p1".to_string()),
        url: "/images/p1.jpg".to_string(),
        is_main: true,
    };
    let p2 = responses::Photo {
        id: PhotoId("p2".to_string()),
        url: "/images/p2.jpg".to_string(),
        is_main: false,
    };

    // Deleting p2: loading while the shared flag is up, quiet once it
    // clears.
    let tracker = PhotoActionTracker::default();
    let tracker = tracker.begin(PhotoActionKind::Delete, &p2).unwrap();
    assert!(tracker.is_loading(PhotoActionKind::Delete, &p2.id, true));
    assert!(!tracker.is_loading(PhotoActionKind::Delete, &p2.id, false));

    // The main photo cannot be targeted; state is unchanged.
    let before = tracker.clone();
    assert!(tracker.begin(PhotoActionKind::Delete, &p1).is_none());
    assert_eq!(tracker, before);

    // Promoting p2 clears the pending delete target.
    let tracker = tracker.begin(PhotoActionKind::SetMain, &p2).unwrap();
    assert!(!tracker.is_loading(PhotoActionKind::Delete, &p2.id, true));
    assert!(tracker.is_loading(PhotoActionKind::SetMain, &p2.id, true));
}
