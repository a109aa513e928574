use payloads::responses;
use yew::prelude::*;

use crate::{get_api_client, hooks::use_fetch};

use super::FetchHookReturn;

/// Hook to fetch a user's profile, including their photo gallery.
#[hook]
pub fn use_profile(username: String) -> FetchHookReturn<responses::Profile> {
    use_fetch(username.clone(), move || {
        let username = username.clone();
        async move {
            let api_client = get_api_client();
            api_client
                .get_profile(&username)
                .await
                .map_err(|e| e.to_string())
        }
    })
}
