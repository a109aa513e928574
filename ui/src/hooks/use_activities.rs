use payloads::responses;
use yew::prelude::*;

use crate::{get_api_client, hooks::use_fetch};

use super::FetchHookReturn;

/// Hook to fetch the activity listing.
#[hook]
pub fn use_activities() -> FetchHookReturn<Vec<responses::Activity>> {
    use_fetch((), move || async move {
        let api_client = get_api_client();
        api_client
            .list_activities()
            .await
            .map_err(|e| e.to_string())
    })
}
