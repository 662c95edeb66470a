use payloads::responses;
use yewdux::prelude::*;

/// Authentication status, resolved once at startup by
/// `use_authentication`. `Unknown` renders spinners rather than redirects
/// so a slow session check never bounces a logged-in user to the login
/// page.
#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn(responses::UserProfile),
}

/// Global app state. Fetched page data deliberately does not live here:
/// each data-loading hook owns its view state exclusively, so nothing is
/// shared (or goes stale) across hook instances.
#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub auth_state: AuthState,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth_state, AuthState::LoggedIn(_))
    }

    pub fn profile(&self) -> Option<&responses::UserProfile> {
        match &self.auth_state {
            AuthState::LoggedIn(profile) => Some(profile),
            AuthState::LoggedOut | AuthState::Unknown => None,
        }
    }

    pub fn logout(&mut self) {
        self.auth_state = AuthState::LoggedOut;
    }
}
