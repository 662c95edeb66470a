use payloads::{EventId, RegistrationId, RegistrationStatus};
use yew::prelude::*;

use crate::contexts::toast::use_toast;
use crate::get_api_client;

/// Register/cancel actions for the current student. `on_change` fires
/// after either action succeeds so the owning page can refetch.
pub struct EventRegistrationHookReturn {
    pub is_submitting: bool,
    pub register: Callback<EventId>,
    pub cancel: Callback<RegistrationId>,
}

#[hook]
pub fn use_event_registration(
    on_change: Callback<()>,
) -> EventRegistrationHookReturn {
    let toasts = use_toast();
    let is_submitting = use_state(|| false);

    let register = {
        let toasts = toasts.clone();
        let is_submitting = is_submitting.clone();
        let on_change = on_change.clone();

        Callback::from(move |event_id: EventId| {
            let toasts = toasts.clone();
            let is_submitting = is_submitting.clone();
            let on_change = on_change.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);

                let api_client = get_api_client();
                match api_client.register_for_event(&event_id).await {
                    Ok(registration) => {
                        match registration.status {
                            RegistrationStatus::Waitlisted => toasts.info(
                                "The event is full, you're on the waitlist",
                            ),
                            _ => toasts.success("You're registered!"),
                        }
                        on_change.emit(());
                    }
                    Err(e) => {
                        toasts.error(
                            e.user_message("Failed to register for event"),
                        );
                    }
                }

                is_submitting.set(false);
            });
        })
    };

    let cancel = {
        let toasts = toasts.clone();
        let is_submitting = is_submitting.clone();
        let on_change = on_change.clone();

        Callback::from(move |registration_id: RegistrationId| {
            let toasts = toasts.clone();
            let is_submitting = is_submitting.clone();
            let on_change = on_change.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);

                let api_client = get_api_client();
                match api_client.cancel_registration(&registration_id).await {
                    Ok(()) => {
                        toasts.success("Registration cancelled");
                        on_change.emit(());
                    }
                    Err(e) => {
                        toasts.error(
                            e.user_message("Failed to cancel registration"),
                        );
                    }
                }

                is_submitting.set(false);
            });
        })
    };

    EventRegistrationHookReturn {
        is_submitting: *is_submitting,
        register,
        cancel,
    }
}
