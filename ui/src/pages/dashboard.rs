use payloads::Role;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::hooks::{use_push_route, use_title};
use crate::{AuthState, Route, State};

/// Where each role lands when visiting /dashboard.
pub fn dashboard_route(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminDashboard,
        Role::Organizer => Route::OrganizerDashboard,
        Role::Student => Route::StudentDashboard,
    }
}

/// The redirect decision: Some only once the session check has finished
/// and produced a user; a pending or logged-out session never redirects.
fn redirect_target(auth_state: &AuthState) -> Option<Route> {
    match auth_state {
        AuthState::LoggedIn(profile) => Some(dashboard_route(profile.role)),
        AuthState::Unknown | AuthState::LoggedOut => None,
    }
}

/// Landing page for /dashboard: forwards each role to its own dashboard
/// once authentication has resolved.
#[function_component]
pub fn DashboardPage() -> Html {
    use_title("Dashboard - Gatherly");
    let (state, _) = use_store::<State>();
    let push_route = use_push_route();

    {
        let auth_state = state.auth_state.clone();
        use_effect_with(auth_state, move |auth_state| {
            if let Some(route) = redirect_target(auth_state) {
                push_route.emit(route);
            }
        });
    }

    match &state.auth_state {
        AuthState::Unknown | AuthState::LoggedIn(_) => html! {
            <div class="text-center py-8">
                <div class="inline-block animate-spin rounded-full h-8 w-8 border-2 border-neutral-900 dark:border-neutral-100 border-t-transparent dark:border-t-transparent"></div>
            </div>
        },
        AuthState::LoggedOut => html! {
            <div class="text-center py-16 space-y-4">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Sign in to see your dashboard."}
                </p>
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::{UserId, responses::UserProfile};
    use uuid::Uuid;

    fn profile(role: Role) -> UserProfile {
        UserProfile {
            user_id: UserId(Uuid::new_v4()),
            email: "casey@example.edu".to_string(),
            username: "casey".to_string(),
            display_name: None,
            role,
        }
    }

    #[test]
    fn each_role_lands_on_its_own_dashboard() {
        assert_eq!(dashboard_route(Role::Admin), Route::AdminDashboard);
        assert_eq!(
            dashboard_route(Role::Organizer),
            Route::OrganizerDashboard
        );
        assert_eq!(dashboard_route(Role::Student), Route::StudentDashboard);
    }

    #[test]
    fn no_redirect_while_auth_is_unresolved() {
        assert_eq!(redirect_target(&AuthState::Unknown), None);
        assert_eq!(redirect_target(&AuthState::LoggedOut), None);
    }

    #[test]
    fn logged_in_user_redirects_by_role() {
        assert_eq!(
            redirect_target(&AuthState::LoggedIn(profile(Role::Admin))),
            Some(Route::AdminDashboard)
        );
        assert_eq!(
            redirect_target(&AuthState::LoggedIn(profile(Role::Student))),
            Some(Route::StudentDashboard)
        );
    }
}
