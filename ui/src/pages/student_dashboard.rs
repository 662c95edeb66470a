use payloads::{EventId, RegistrationStatus, responses};
use yew::prelude::*;

use crate::components::{EventCard, RequireAuth};
use crate::hooks::{
    use_event_registration, use_student_dashboard, use_title,
};
use crate::utils::time::format_event_time;

#[function_component]
pub fn StudentDashboardPage() -> Html {
    use_title("Your dashboard - Gatherly");

    html! {
        <RequireAuth>
            <StudentDashboardInner />
        </RequireAuth>
    }
}

/// Registrations that still hold (or might hold) a seat.
fn active_registrations(
    registrations: &[responses::Registration],
) -> Vec<&responses::Registration> {
    registrations
        .iter()
        .filter(|r| r.status != RegistrationStatus::Cancelled)
        .collect()
}

fn registered_event_ids(
    registrations: &[responses::Registration],
) -> Vec<EventId> {
    active_registrations(registrations)
        .iter()
        .map(|r| r.event_id)
        .collect()
}

#[function_component]
fn StudentDashboardInner() -> Html {
    let dashboard = use_student_dashboard();
    let actions = use_event_registration(dashboard.refetch.clone());

    if dashboard.data.is_none() && dashboard.is_loading {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Loading your dashboard..."}
                </p>
            </div>
        };
    }

    let Some(data) = &dashboard.data else {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Your dashboard couldn't be loaded."}
                </p>
            </div>
        };
    };

    let registered = registered_event_ids(&data.registrations);
    let my_registrations = active_registrations(&data.registrations);

    html! {
        <div class="space-y-12">
            <div>
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Your dashboard"}
                </h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                    {"Upcoming events and your registrations"}
                </p>
            </div>

            <section class="space-y-6">
                <h2 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Your registrations"}
                </h2>
                if my_registrations.is_empty() {
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"You haven't registered for anything yet."}
                    </p>
                } else {
                    <div class="space-y-3">
                        {for my_registrations.iter().map(|registration| {
                            let registration_id = registration.registration_id;
                            let on_cancel = {
                                let cancel = actions.cancel.clone();
                                Callback::from(move |_| cancel.emit(registration_id))
                            };
                            let event_title = data
                                .upcoming_events
                                .iter()
                                .find(|e| e.event_id == registration.event_id)
                                .map(|e| e.title.clone())
                                .unwrap_or_else(|| "Event".to_string());

                            html! {
                                <div
                                    key={registration.registration_id.to_string()}
                                    class="flex items-center justify-between bg-white dark:bg-neutral-800 p-4 rounded-lg border border-neutral-200 dark:border-neutral-700"
                                >
                                    <div>
                                        <p class="font-medium text-neutral-900 dark:text-neutral-100">
                                            {event_title}
                                        </p>
                                        <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                            {registration.status.label()}
                                            {" · registered "}
                                            {format_event_time(registration.registered_at)}
                                        </p>
                                    </div>
                                    <button
                                        onclick={on_cancel}
                                        disabled={actions.is_submitting}
                                        class="text-sm font-medium text-red-600 dark:text-red-400 hover:underline disabled:opacity-50"
                                    >
                                        {"Cancel"}
                                    </button>
                                </div>
                            }
                        })}
                    </div>
                }
            </section>

            <section class="space-y-6">
                <h2 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Upcoming events"}
                </h2>
                if data.upcoming_events.is_empty() {
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Nothing scheduled right now."}
                    </p>
                } else {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {for data.upcoming_events.iter().map(|event| {
                            let event_id = event.event_id;
                            let already_registered = registered.contains(&event_id);
                            let on_register = {
                                let register = actions.register.clone();
                                Callback::from(move |_| register.emit(event_id))
                            };

                            html! {
                                <EventCard
                                    key={event.event_id.to_string()}
                                    event={event.clone()}
                                >
                                    <button
                                        onclick={on_register}
                                        disabled={already_registered || actions.is_submitting}
                                        class="block w-full bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                                    >
                                        {if already_registered { "Registered" } else { "Register" }}
                                    </button>
                                </EventCard>
                            }
                        })}
                    </div>
                }
            </section>
        </div>
    }
}
