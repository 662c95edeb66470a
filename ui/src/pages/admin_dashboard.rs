use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{EventStatusBadge, RequireAuth, StatCard};
use crate::hooks::{use_admin_overview, use_title};
use crate::utils::time::format_event_time;

#[function_component]
pub fn AdminDashboardPage() -> Html {
    use_title("Admin dashboard - Gatherly");

    html! {
        <RequireAuth>
            <AdminDashboardInner />
        </RequireAuth>
    }
}

#[function_component]
fn AdminDashboardInner() -> Html {
    let overview_hook = use_admin_overview();

    if overview_hook.data.is_none() && overview_hook.is_loading {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Loading admin dashboard..."}
                </p>
            </div>
        };
    }

    let Some(data) = &overview_hook.data else {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"The admin dashboard couldn't be loaded."}
                </p>
            </div>
        };
    };

    let overview = &data.overview;
    let mut recent_events = data.recent_events.clone();
    recent_events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent_events.truncate(5);

    html! {
        <div class="space-y-12">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                        {"Admin dashboard"}
                    </h1>
                    <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                        {"Platform activity at a glance"}
                    </p>
                </div>
                <Link<Route>
                    to={Route::AdminEvents}
                    classes="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
                >
                    {"Manage events"}
                </Link<Route>>
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                <StatCard
                    label="Events"
                    value={overview.total_events.to_string()}
                    hint={format!("{} published", overview.published_events)}
                />
                <StatCard
                    label="Registrations"
                    value={overview.total_registrations.to_string()}
                />
                <StatCard
                    label="Users"
                    value={overview.total_users.to_string()}
                />
                <StatCard
                    label="Drafts & other"
                    value={overview.total_events.saturating_sub(overview.published_events).to_string()}
                />
            </div>

            <section class="space-y-6">
                <h2 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Recently created"}
                </h2>
                if recent_events.is_empty() {
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"No events yet."}
                    </p>
                } else {
                    <div class="space-y-3">
                        {for recent_events.iter().map(|event| html! {
                            <div
                                key={event.event_id.to_string()}
                                class="flex items-center justify-between bg-white dark:bg-neutral-800 p-4 rounded-lg border border-neutral-200 dark:border-neutral-700"
                            >
                                <div>
                                    <Link<Route>
                                        to={Route::EventDetail { id: event.event_id }}
                                        classes="font-medium text-neutral-900 dark:text-neutral-100 hover:underline"
                                    >
                                        {&event.title}
                                    </Link<Route>>
                                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                        {"by "}{event.organizer.display()}
                                        {" · "}
                                        {format_event_time(event.starts_at)}
                                    </p>
                                </div>
                                <EventStatusBadge status={event.status} />
                            </div>
                        })}
                    </div>
                }
            </section>
        </div>
    }
}
