use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{EventCard, HeroBanner, PageBackground};
use crate::hooks::{use_events, use_title};
use crate::{Route, State};

#[function_component]
pub fn HomePage() -> Html {
    use_title("Gatherly - Campus events, organized");
    let (state, _) = use_store::<State>();
    let events_hook = use_events();

    let cta = if state.is_authenticated() {
        html! {
            <Link<Route>
                to={Route::Dashboard}
                classes="bg-white text-neutral-900 hover:bg-neutral-200 px-6 py-3 rounded-md text-sm font-medium transition-colors"
            >
                {"Go to your dashboard"}
            </Link<Route>>
        }
    } else {
        html! {
            <Link<Route>
                to={Route::Login}
                classes="bg-white text-neutral-900 hover:bg-neutral-200 px-6 py-3 rounded-md text-sm font-medium transition-colors"
            >
                {"Get started"}
            </Link<Route>>
        }
    };

    html! {
        <PageBackground>
            <HeroBanner
                title="Find your next event"
                subtitle="Workshops, socials, career fairs and more, all across campus. Browse what's coming up and grab a seat."
            >
                {cta}
            </HeroBanner>

            <section class="space-y-6">
                <h2 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"What's on"}
                </h2>
                {events_hook.render("events", |events, _, _| {
                    if events.is_empty() {
                        html! {
                            <div class="text-center py-12">
                                <p class="text-neutral-600 dark:text-neutral-400">
                                    {"Nothing scheduled right now. Check back soon."}
                                </p>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                {for events.iter().map(|event| html! {
                                    <EventCard
                                        key={event.event_id.to_string()}
                                        event={event.clone()}
                                    />
                                })}
                            </div>
                        }
                    }
                })}
            </section>
        </PageBackground>
    }
}
