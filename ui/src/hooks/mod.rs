//! Data-loading hooks. Each hook instance owns its view state: it fetches
//! on mount (and when its inputs change), exposes a loading flag, and on
//! failure keeps the previously fetched data while surfacing the error.

mod use_admin_events;
mod use_admin_overview;
mod use_authentication;
mod use_event_deletion;
mod use_event_detail;
mod use_event_registration;
mod use_events;
mod use_fetch;
mod use_logout;
mod use_my_events;
mod use_push_route;
mod use_student_dashboard;
mod use_system_theme;
mod use_title;

pub use use_admin_events::use_admin_events;
pub use use_admin_overview::{
    AdminOverviewData, AdminOverviewHookReturn, use_admin_overview,
};
pub use use_authentication::use_authentication;
pub use use_event_deletion::{EventDeletionHookReturn, use_event_deletion};
pub use use_event_detail::{
    EventDetailData, EventDetailHookReturn, use_event_detail,
};
pub use use_event_registration::{
    EventRegistrationHookReturn, use_event_registration,
};
pub use use_events::use_events;
pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_logout::use_logout;
pub use use_my_events::use_my_events;
pub use use_push_route::use_push_route;
pub use use_student_dashboard::{
    StudentDashboardData, StudentDashboardHookReturn, use_student_dashboard,
};
pub use use_system_theme::use_system_theme;
pub use use_title::use_title;

/// Distinguishes "not fetched yet" from "fetched, possibly empty".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchState::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            FetchState::Fetched(value) => Some(value),
            FetchState::NotFetched => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FetchState;

    #[test]
    fn not_fetched_is_empty() {
        let state: FetchState<Vec<u32>> = FetchState::NotFetched;
        assert!(!state.is_fetched());
        assert_eq!(state.as_ref(), None);
    }

    #[test]
    fn fetched_empty_collection_still_counts_as_fetched() {
        let state: FetchState<Vec<u32>> = FetchState::Fetched(vec![]);
        assert!(state.is_fetched());
        assert_eq!(state.as_ref(), Some(&vec![]));
    }
}
