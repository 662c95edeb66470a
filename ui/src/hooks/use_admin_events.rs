use payloads::responses;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, use_fetch};

/// Hook to fetch every event on the platform (admin only).
#[hook]
pub fn use_admin_events() -> FetchHookReturn<Vec<responses::Event>> {
    use_fetch((), || async {
        let api_client = get_api_client();
        api_client
            .list_all_events()
            .await
            .map_err(|e| e.user_message("Failed to load events"))
    })
}
