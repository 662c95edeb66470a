use payloads::{EventId, requests};
use yew::prelude::*;

use crate::components::{EventForm, RequireAuth};
use crate::contexts::toast::use_toast;
use crate::hooks::{use_fetch, use_push_route, use_title};
use crate::{Route, get_api_client};

#[derive(Properties, PartialEq)]
pub struct EditEventPageProps {
    pub id: EventId,
}

#[function_component]
pub fn EditEventPage(props: &EditEventPageProps) -> Html {
    use_title("Edit event - Gatherly");

    html! {
        <RequireAuth>
            <EditEventInner id={props.id} />
        </RequireAuth>
    }
}

#[function_component]
fn EditEventInner(props: &EditEventPageProps) -> Html {
    let toasts = use_toast();
    let push_route = use_push_route();
    let is_submitting = use_state(|| false);

    let event_id = props.id;
    let event_hook = use_fetch(event_id, move || async move {
        let api_client = get_api_client();
        api_client
            .get_event(&event_id)
            .await
            .map_err(|e| e.user_message("Failed to load event"))
    });

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
                let update = requests::UpdateEvent {
                    event_id,
                    event_details: details,
                };
                match api_client.update_event(&update).await {
                    Ok(updated) => {
                        toasts.success(format!(
                            "Saved \"{}\"",
                            updated.title
                        ));
                        push_route.emit(Route::EventDetail { id: event_id });
                    }
                    Err(e) => {
                        toasts.error(
                            e.user_message("Failed to save event"),
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
                    {"Edit event"}
                </h1>
            </div>

            {event_hook.render("event", |event, _, _| html! {
                <EventForm
                    initial={event.event_details.clone()}
                    submit_text="Save changes"
                    on_submit={on_submit.clone()}
                    is_submitting={*is_submitting}
                />
            })}
        </div>
    }
}
