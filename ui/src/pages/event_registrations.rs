use payloads::EventId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{RegistrationList, RequireAuth, StatCard};
use crate::hooks::{EventDetailData, use_event_detail, use_title};

#[derive(Properties, PartialEq)]
pub struct EventRegistrationsPageProps {
    pub id: EventId,
}

#[function_component]
pub fn EventRegistrationsPage(props: &EventRegistrationsPageProps) -> Html {
    use_title("Registrations - Gatherly");

    html! {
        <RequireAuth>
            <EventRegistrationsInner id={props.id} />
        </RequireAuth>
    }
}

#[function_component]
fn EventRegistrationsInner(props: &EventRegistrationsPageProps) -> Html {
    let detail_hook = use_event_detail(props.id);

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
                        "Loading registrations..."
                    } else {
                        "Registrations couldn't be loaded."
                    }}
                </p>
            </div>
        };
    };

    html! {
        <div class="space-y-8">
            <div>
                <Link<Route>
                    to={Route::EventDetail { id: event.event_id }}
                    classes="text-sm text-neutral-600 dark:text-neutral-400 hover:underline"
                >
                    {"← "}{&event.title}
                </Link<Route>>
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100 mt-2">
                    {"Registrations"}
                </h1>
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-3 gap-6">
                <StatCard
                    label="Confirmed"
                    value={stats.confirmed.to_string()}
                    hint={format!("of {} seats", event.capacity)}
                />
                <StatCard
                    label="Waitlisted"
                    value={stats.waitlisted.to_string()}
                />
                <StatCard
                    label="Cancelled"
                    value={stats.cancelled.to_string()}
                />
            </div>

            <RegistrationList registrations={registrations.clone()} />
        </div>
    }
}
