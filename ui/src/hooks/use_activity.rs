use payloads::{ActivityId, responses};
use yew::prelude::*;

use crate::{get_api_client, hooks::use_fetch};

use super::FetchHookReturn;

/// Hook to fetch a single activity with its attendees.
#[hook]
pub fn use_activity(
    activity_id: ActivityId,
) -> FetchHookReturn<responses::Activity> {
    use_fetch(activity_id, move || async move {
        let api_client = get_api_client();
        api_client
            .get_activity(&activity_id)
            .await
            .map_err(|e| e.to_string())
    })
}
