use yew::prelude::*;

use crate::components::{EventForm, RequireAuth};
use crate::contexts::toast::use_toast;
use crate::hooks::{use_push_route, use_title};
use crate::{Route, get_api_client};

#[function_component]
pub fn CreateEventPage() -> Html {
    use_title("Create event - Gatherly");

    html! {
        <RequireAuth>
            <CreateEventInner />
        </RequireAuth>
    }
}

#[function_component]
fn CreateEventInner() -> Html {
    let toasts = use_toast();
    let push_route = use_push_route();
    let is_submitting = use_state(|| false);

    let on_submit = {
        let toasts = toasts.clone();
        let push_route = push_route.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |details: payloads::Event| {
            let toasts = toasts.clone();
            let push_route = push_route.clone();
            let is_submitting = is_submitting.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);

                let api_client = get_api_client();
                match api_client.create_event(&details).await {
                    Ok(event_id) => {
                        toasts.success(format!(
                            "Created \"{}\"",
                            details.title
                        ));
                        push_route.emit(Route::EventDetail { id: event_id });
                    }
                    Err(e) => {
                        toasts.error(
                            e.user_message("Failed to create event"),
                        );
                    }
                }

                is_submitting.set(false);
            });
        })
    };

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Create event"}
                </h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                    {"New events start as drafts; publish when ready"}
                </p>
            </div>

            <EventForm
                submit_text="Create event"
                on_submit={on_submit}
                is_submitting={*is_submitting}
            />
        </div>
    }
}
