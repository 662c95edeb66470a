use payloads::responses;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::contexts::toast::use_toast;
use crate::{Route, get_api_client};

/// State and actions for deleting an event behind a confirmation prompt.
///
/// `pending` is Some while the prompt is open. Opening and closing the
/// prompt never touches the network; the delete call fires only from
/// `confirm`. After a successful delete a success toast is raised and the
/// router lands on the admin events table.
pub struct EventDeletionHookReturn {
    pub pending: Option<responses::Event>,
    pub is_deleting: bool,
    pub request_delete: Callback<responses::Event>,
    pub cancel: Callback<()>,
    pub confirm: Callback<()>,
}

#[hook]
pub fn use_event_deletion(on_deleted: Callback<()>) -> EventDeletionHookReturn {
    let toasts = use_toast();
    let navigator = use_navigator().unwrap();
    let pending = use_state(|| None::<responses::Event>);
    let is_deleting = use_state(|| false);

    let request_delete = {
        let pending = pending.clone();
        Callback::from(move |event: responses::Event| {
            pending.set(Some(event));
        })
    };

    let cancel = {
        let pending = pending.clone();
        Callback::from(move |_| {
            pending.set(None);
        })
    };

    let confirm = {
        let toasts = toasts.clone();
        let navigator = navigator.clone();
        let pending = pending.clone();
        let is_deleting = is_deleting.clone();

        Callback::from(move |_| {
            let Some(event) = (*pending).clone() else {
                return;
            };
            let toasts = toasts.clone();
            let navigator = navigator.clone();
            let pending = pending.clone();
            let is_deleting = is_deleting.clone();
            let on_deleted = on_deleted.clone();

            yew::platform::spawn_local(async move {
                is_deleting.set(true);

                let api_client = get_api_client();
                match api_client.delete_event(&event.event_id).await {
                    Ok(()) => {
                        toasts.success(format!(
                            "Deleted \"{}\"",
                            event.title
                        ));
                        pending.set(None);
                        on_deleted.emit(());
                        navigator.push(&Route::AdminEvents);
                    }
                    Err(e) => {
                        toasts.error(
                            e.user_message("Failed to delete event"),
                        );
                    }
                }

                is_deleting.set(false);
            });
        })
    };

    EventDeletionHookReturn {
        pending: (*pending).clone(),
        is_deleting: *is_deleting,
        request_delete,
        cancel,
        confirm,
    }
}
