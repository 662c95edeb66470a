use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{ConfirmationModal, EventStatusBadge, RequireAuth};
use crate::hooks::{use_admin_events, use_event_deletion, use_title};
use crate::utils::time::format_event_time;

#[function_component]
pub fn AdminEventsPage() -> Html {
    use_title("Manage events - Gatherly");

    html! {
        <RequireAuth>
            <AdminEventsInner />
        </RequireAuth>
    }
}

#[function_component]
fn AdminEventsInner() -> Html {
    let events_hook = use_admin_events();
    let deletion = use_event_deletion(events_hook.refetch.clone());

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Manage events"}
                </h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                    {"Every event on the platform"}
                </p>
            </div>

            {events_hook.render("events", |events, _, _| {
                if events.is_empty() {
                    return html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {"No events yet."}
                            </p>
                        </div>
                    };
                }

                html! {
                    <div class="overflow-x-auto rounded-lg border border-neutral-200 dark:border-neutral-700">
                        <table class="min-w-full divide-y divide-neutral-200 dark:divide-neutral-700">
                            <thead class="bg-neutral-50 dark:bg-neutral-800">
                                <tr>
                                    <th class="px-4 py-3 text-left text-xs font-medium text-neutral-500 dark:text-neutral-400 uppercase tracking-wider">
                                        {"Event"}
                                    </th>
                                    <th class="px-4 py-3 text-left text-xs font-medium text-neutral-500 dark:text-neutral-400 uppercase tracking-wider">
                                        {"Organizer"}
                                    </th>
                                    <th class="px-4 py-3 text-left text-xs font-medium text-neutral-500 dark:text-neutral-400 uppercase tracking-wider">
                                        {"Starts"}
                                    </th>
                                    <th class="px-4 py-3 text-left text-xs font-medium text-neutral-500 dark:text-neutral-400 uppercase tracking-wider">
                                        {"Status"}
                                    </th>
                                    <th class="px-4 py-3"></th>
                                </tr>
                            </thead>
                            <tbody class="bg-white dark:bg-neutral-900 divide-y divide-neutral-200 dark:divide-neutral-700">
                                {for events.iter().map(|event| {
                                    let on_delete = {
                                        let request_delete = deletion.request_delete.clone();
                                        let event = event.clone();
                                        Callback::from(move |_| request_delete.emit(event.clone()))
                                    };

                                    html! {
                                        <tr key={event.event_id.to_string()}>
                                            <td class="px-4 py-3 text-sm">
                                                <Link<Route>
                                                    to={Route::EventDetail { id: event.event_id }}
                                                    classes="font-medium text-neutral-900 dark:text-neutral-100 hover:underline"
                                                >
                                                    {&event.title}
                                                </Link<Route>>
                                            </td>
                                            <td class="px-4 py-3 text-sm text-neutral-600 dark:text-neutral-400">
                                                {event.organizer.display()}
                                            </td>
                                            <td class="px-4 py-3 text-sm text-neutral-600 dark:text-neutral-400">
                                                {format_event_time(event.starts_at)}
                                            </td>
                                            <td class="px-4 py-3">
                                                <EventStatusBadge status={event.status} />
                                            </td>
                                            <td class="px-4 py-3 text-sm text-right space-x-3 whitespace-nowrap">
                                                <Link<Route>
                                                    to={Route::EditEvent { id: event.event_id }}
                                                    classes="font-medium text-neutral-900 dark:text-neutral-100 hover:underline"
                                                >
                                                    {"Edit"}
                                                </Link<Route>>
                                                <button
                                                    onclick={on_delete}
                                                    class="font-medium text-red-600 dark:text-red-400 hover:underline"
                                                >
                                                    {"Delete"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            })}

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
