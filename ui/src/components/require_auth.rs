use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::{AuthState, Route, State};

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Gate that renders its children only for an authenticated user: a
/// spinner while the session check is in flight, a sign-in prompt when
/// logged out.
#[function_component]
pub fn RequireAuth(props: &RequireAuthProps) -> Html {
    let (state, _) = use_store::<State>();

    match &state.auth_state {
        AuthState::Unknown => html! {
            <div class="text-center py-8">
                <div class="inline-block animate-spin rounded-full h-8 w-8 border-2 border-neutral-900 dark:border-neutral-100 border-t-transparent dark:border-t-transparent"></div>
            </div>
        },
        AuthState::LoggedOut => html! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <div class="max-w-md w-full text-center space-y-4">
                    <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                        {"Sign in to continue"}
                    </h1>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"This page requires an account."}
                    </p>
                    <Link<Route>
                        to={Route::Login}
                        classes="inline-block bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
                    >
                        {"Sign in"}
                    </Link<Route>>
                </div>
            </div>
        },
        AuthState::LoggedIn(_) => html! {
            <>{for props.children.iter()}</>
        },
    }
}
