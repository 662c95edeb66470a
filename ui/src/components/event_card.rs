use payloads::responses;
use yew::prelude::*;
use yew_router::prelude::*;

use super::EventStatusBadge;
use crate::Route;
use crate::utils::time::format_event_time;

#[derive(Properties, PartialEq)]
pub struct EventCardProps {
    pub event: responses::Event,
    /// Show the lifecycle badge (organizer/admin views).
    #[prop_or_default]
    pub show_status: bool,
    /// Extra actions rendered under the card body.
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn EventCard(props: &EventCardProps) -> Html {
    let event = &props.event;

    html! {
        <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700">
            <div class="space-y-4">
                <div class="flex items-start justify-between gap-2">
                    <div>
                        <h3 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100">
                            {&event.title}
                        </h3>
                        <p class="text-sm text-neutral-600 dark:text-neutral-400">
                            {event.category.label()}
                            {" · by "}
                            {event.organizer.display()}
                        </p>
                    </div>
                    if props.show_status {
                        <EventStatusBadge status={event.status} />
                    }
                </div>

                <div class="text-sm text-neutral-600 dark:text-neutral-400 space-y-1">
                    <p>{format_event_time(event.starts_at)}</p>
                    <p>{&event.location}</p>
                    if let Some(fee) = &event.fee {
                        <p>{format!("Fee: ${fee}")}</p>
                    }
                </div>

                <div class="pt-2 space-y-2">
                    <Link<Route>
                        to={Route::EventDetail { id: event.event_id }}
                        classes="block w-full bg-neutral-100 hover:bg-neutral-200 dark:bg-neutral-700 dark:hover:bg-neutral-600 text-neutral-900 dark:text-neutral-100 px-4 py-2 rounded-md text-sm font-medium transition-colors text-center"
                    >
                        {"View details"}
                    </Link<Route>>
                    {for props.children.iter()}
                </div>
            </div>
        </div>
    }
}
