use payloads::{
    EventId, EventStatus, RegistrationStatus, Role, responses,
};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{
    ConfirmationModal, EventStatusBadge, RequireAuth,
};
use crate::contexts::toast::use_toast;
use crate::hooks::{
    EventDetailData, use_event_deletion, use_event_detail,
    use_event_registration, use_title,
};
use crate::utils::time::format_event_time;
use crate::{Route, State, get_api_client};

#[derive(Properties, PartialEq)]
pub struct EventDetailPageProps {
    pub id: EventId,
}

#[function_component]
pub fn EventDetailPage(props: &EventDetailPageProps) -> Html {
    html! {
        <RequireAuth>
            <EventDetailInner id={props.id} />
        </RequireAuth>
    }
}

fn can_manage(
    profile: Option<&responses::UserProfile>,
    event: &responses::Event,
) -> bool {
    match profile {
        Some(profile) => {
            profile.role == Role::Admin
                || profile.user_id == event.organizer.user_id
        }
        None => false,
    }
}

#[function_component]
fn EventDetailInner(props: &EventDetailPageProps) -> Html {
    let (state, _) = use_store::<State>();
    let toasts = use_toast();
    let detail_hook = use_event_detail(props.id);
    let registration_actions =
        use_event_registration(detail_hook.refetch.clone());
    let deletion = use_event_deletion(Callback::noop());
    let is_transitioning = use_state(|| false);

    // Hooks must run unconditionally, so the title is set before the
    // not-yet-loaded early return.
    let title = match &detail_hook.detail {
        Some(data) => format!("{} - Gatherly", data.event.title),
        None => "Event - Gatherly".to_string(),
    };
    use_title(&title);

    let Some(EventDetailData {
        event,
        registrations,
        stats,
    }) = &detail_hook.detail
    else {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {if detail_hook.is_loading {
                        "Loading event..."
                    } else {
                        "This event couldn't be loaded."
                    }}
                </p>
            </div>
        };
    };

    let manager = can_manage(state.profile(), event);
    let own_registration = registrations.iter().find(|r| {
        state.profile().is_some_and(|p| p.user_id == r.attendee.user_id)
            && r.status != RegistrationStatus::Cancelled
    });

    // Publish/cancel share the same shape: call, toast, refetch.
    let transition = |label: &'static str, publish: bool| {
        let toasts = toasts.clone();
        let refetch = detail_hook.refetch.clone();
        let is_transitioning = is_transitioning.clone();
        let event_id = event.event_id;

        Callback::from(move |_: MouseEvent| {
            let toasts = toasts.clone();
            let refetch = refetch.clone();
            let is_transitioning = is_transitioning.clone();

            yew::platform::spawn_local(async move {
                is_transitioning.set(true);

                let api_client = get_api_client();
                let result = if publish {
                    api_client.publish_event(&event_id).await
                } else {
                    api_client.cancel_event(&event_id).await
                };

                match result {
                    Ok(_) => {
                        toasts.success(label);
                        refetch.emit(());
                    }
                    Err(e) => {
                        toasts.error(e.user_message("Failed to update event"));
                    }
                }

                is_transitioning.set(false);
            });
        })
    };
    let on_publish = transition("Event published", true);
    let on_cancel_event = transition("Event cancelled", false);

    let on_register = {
        let register = registration_actions.register.clone();
        let event_id = event.event_id;
        Callback::from(move |_| register.emit(event_id))
    };

    let on_delete = {
        let request_delete = deletion.request_delete.clone();
        let event = event.clone();
        Callback::from(move |_| request_delete.emit(event.clone()))
    };

    html! {
        <div class="space-y-8 max-w-4xl">
            <div class="flex items-start justify-between gap-4">
                <div>
                    <div class="flex items-center gap-3">
                        <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                            {&event.title}
                        </h1>
                        <EventStatusBadge status={event.status} />
                    </div>
                    <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                        {event.category.label()}
                        {" · organized by "}
                        {event.organizer.display()}
                    </p>
                </div>
                if manager {
                    <div class="flex items-center gap-3 whitespace-nowrap">
                        <Link<Route>
                            to={Route::EditEvent { id: event.event_id }}
                            classes="text-sm font-medium text-neutral-900 dark:text-neutral-100 hover:underline"
                        >
                            {"Edit"}
                        </Link<Route>>
                        if event.status == EventStatus::Draft {
                            <button
                                onclick={on_publish}
                                disabled={*is_transitioning}
                                class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-3 py-1.5 rounded-md text-sm font-medium transition-colors disabled:opacity-50"
                            >
                                {"Publish"}
                            </button>
                        }
                        if event.status == EventStatus::Published {
                            <button
                                onclick={on_cancel_event}
                                disabled={*is_transitioning}
                                class="text-sm font-medium text-amber-600 dark:text-amber-400 hover:underline disabled:opacity-50"
                            >
                                {"Cancel event"}
                            </button>
                        }
                        <button
                            onclick={on_delete}
                            class="text-sm font-medium text-red-600 dark:text-red-400 hover:underline"
                        >
                            {"Delete"}
                        </button>
                    </div>
                }
            </div>

            if let Some(description) = &event.description {
                <p class="text-neutral-700 dark:text-neutral-300 whitespace-pre-line">
                    {description}
                </p>
            }

            <div class="grid grid-cols-1 sm:grid-cols-2 gap-x-8 gap-y-4 bg-white dark:bg-neutral-800 p-6 rounded-lg border border-neutral-200 dark:border-neutral-700 text-sm">
                <div>
                    <p class="font-medium text-neutral-500 dark:text-neutral-400">{"Starts"}</p>
                    <p class="text-neutral-900 dark:text-neutral-100">{format_event_time(event.starts_at)}</p>
                </div>
                <div>
                    <p class="font-medium text-neutral-500 dark:text-neutral-400">{"Ends"}</p>
                    <p class="text-neutral-900 dark:text-neutral-100">{format_event_time(event.ends_at)}</p>
                </div>
                <div>
                    <p class="font-medium text-neutral-500 dark:text-neutral-400">{"Location"}</p>
                    <p class="text-neutral-900 dark:text-neutral-100">{&event.location}</p>
                </div>
                <div>
                    <p class="font-medium text-neutral-500 dark:text-neutral-400">{"Fee"}</p>
                    <p class="text-neutral-900 dark:text-neutral-100">
                        {match &event.fee {
                            Some(fee) => format!("${fee}"),
                            None => "Free".to_string(),
                        }}
                    </p>
                </div>
                <div>
                    <p class="font-medium text-neutral-500 dark:text-neutral-400">{"Seats"}</p>
                    <p class="text-neutral-900 dark:text-neutral-100">
                        {format!(
                            "{} confirmed of {} ({} remaining)",
                            stats.confirmed, event.capacity, stats.remaining
                        )}
                    </p>
                </div>
                <div>
                    <p class="font-medium text-neutral-500 dark:text-neutral-400">{"Waitlist"}</p>
                    <p class="text-neutral-900 dark:text-neutral-100">
                        {stats.waitlisted.to_string()}
                    </p>
                </div>
            </div>

            if event.status == EventStatus::Published && !manager {
                <div>
                    {match own_registration {
                        Some(registration) => html! {
                            <p class="text-neutral-700 dark:text-neutral-300">
                                {"You're "}
                                {registration.status.label().to_lowercase()}
                                {" for this event."}
                            </p>
                        },
                        None => html! {
                            <button
                                onclick={on_register}
                                disabled={registration_actions.is_submitting}
                                class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-6 py-2 rounded-md text-sm font-medium transition-colors disabled:opacity-50"
                            >
                                {if stats.remaining > 0 { "Register" } else { "Join waitlist" }}
                            </button>
                        },
                    }}
                </div>
            }

            if let Some(event) = &deletion.pending {
                <ConfirmationModal
                    title="Delete Event"
                    message="All registrations for this event will be removed as well."
                    confirm_text="Delete Event"
                    confirmation_value={event.title.clone()}
                    confirmation_label="the event title"
                    on_confirm={deletion.confirm.clone()}
                    on_close={deletion.cancel.clone()}
                    is_loading={deletion.is_deleting}
                />
            }
        </div>
    }
}
