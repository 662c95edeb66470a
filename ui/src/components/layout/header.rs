use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_logout;
use crate::{AuthState, Route, State, ThemeToggle};

#[function_component]
pub fn Header() -> Html {
    let (state, _) = use_store::<State>();
    let on_logout = use_logout();

    html! {
        <header class="bg-white dark:bg-neutral-800 border-b border-neutral-200 dark:border-neutral-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center space-x-8">
                        <Link<Route> to={Route::Home} classes="text-xl font-semibold text-neutral-900 dark:text-white">
                            {"Gatherly"}
                        </Link<Route>>
                        if state.is_authenticated() {
                            <Link<Route>
                                to={Route::Dashboard}
                                classes="text-sm font-medium text-neutral-600 dark:text-neutral-300 hover:text-neutral-900 dark:hover:text-white"
                            >
                                {"Dashboard"}
                            </Link<Route>>
                        }
                    </div>
                    <div class="flex items-center space-x-4">
                        <ThemeToggle />
                        {match &state.auth_state {
                            AuthState::LoggedIn(profile) => html! {
                                <>
                                    <Link<Route>
                                        to={Route::Profile}
                                        classes="hidden sm:inline text-sm text-neutral-600 dark:text-neutral-400 hover:text-neutral-900 dark:hover:text-white"
                                    >
                                        {profile.display_name.clone().unwrap_or_else(|| profile.username.clone())}
                                    </Link<Route>>
                                    <button
                                        onclick={on_logout}
                                        class="text-sm font-medium text-neutral-600 dark:text-neutral-300 hover:text-neutral-900 dark:hover:text-white"
                                    >
                                        {"Sign out"}
                                    </button>
                                </>
                            },
                            AuthState::LoggedOut => html! {
                                <Link<Route>
                                    to={Route::Login}
                                    classes="text-sm font-medium text-neutral-600 dark:text-neutral-300 hover:text-neutral-900 dark:hover:text-white"
                                >
                                    {"Sign in"}
                                </Link<Route>>
                            },
                            AuthState::Unknown => html! {},
                        }}
                    </div>
                </div>
            </div>
        </header>
    }
}
