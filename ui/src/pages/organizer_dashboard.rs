use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{EventCard, RequireAuth};
use crate::hooks::{use_my_events, use_title};

#[function_component]
pub fn OrganizerDashboardPage() -> Html {
    use_title("Organizer dashboard - Gatherly");

    html! {
        <RequireAuth>
            <OrganizerDashboardInner />
        </RequireAuth>
    }
}

#[function_component]
fn OrganizerDashboardInner() -> Html {
    let navigator = use_navigator().unwrap();
    let events_hook = use_my_events();

    let on_create_event = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            navigator.push(&Route::CreateEvent);
        })
    };

    html! {
        <div class="space-y-8">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                        {"Your events"}
                    </h1>
                    <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                        {"Everything you organize, drafts included"}
                    </p>
                </div>
                <button
                    onclick={on_create_event.clone()}
                    class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
                >
                    {"Create event"}
                </button>
            </div>

            {events_hook.render("your events", |events, _, _| {
                if events.is_empty() {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400 mb-4">
                                {"You haven't created any events yet."}
                            </p>
                            <button
                                onclick={on_create_event.clone()}
                                class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
                            >
                                {"Create your first event"}
                            </button>
                        </div>
                    }
                } else {
                    html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {for events.iter().map(|event| html! {
                                <EventCard
                                    key={event.event_id.to_string()}
                                    event={event.clone()}
                                    show_status={true}
                                >
                                    <Link<Route>
                                        to={Route::EventRegistrations { id: event.event_id }}
                                        classes="block w-full bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors text-center"
                                    >
                                        {"Registrations"}
                                    </Link<Route>>
                                </EventCard>
                            })}
                        </div>
                    }
                }
            })}
        </div>
    }
}
