use payloads::{ClientError, responses};
use yew::prelude::*;

use crate::contexts::toast::use_toast;
use crate::get_api_client;

/// The two collections backing the student dashboard, replaced together.
#[derive(Clone, PartialEq)]
pub struct StudentDashboardData {
    pub upcoming_events: Vec<responses::Event>,
    pub registrations: Vec<responses::Registration>,
}

pub struct StudentDashboardHookReturn {
    pub data: Option<StudentDashboardData>,
    pub is_loading: bool,
    pub refetch: Callback<()>,
}

fn join_dashboard(
    upcoming_events: Result<Vec<responses::Event>, ClientError>,
    registrations: Result<Vec<responses::Registration>, ClientError>,
) -> Result<StudentDashboardData, ClientError> {
    Ok(StudentDashboardData {
        upcoming_events: upcoming_events?,
        registrations: registrations?,
    })
}

/// Hook backing the student dashboard: upcoming events and the student's
/// own registrations, fetched concurrently and applied as one update. A
/// failed cycle leaves previous data in place and raises one toast.
#[hook]
pub fn use_student_dashboard() -> StudentDashboardHookReturn {
    let toasts = use_toast();
    let data = use_state(|| None::<StudentDashboardData>);
    let is_loading = use_state(|| false);
    let generation = use_mut_ref(|| 0u64);

    let refetch = {
        let toasts = toasts.clone();
        let data = data.clone();
        let is_loading = is_loading.clone();
        let generation = generation.clone();

        use_callback((), move |_, _| {
            let toasts = toasts.clone();
            let data = data.clone();
            let is_loading = is_loading.clone();
            let generation = generation.clone();

            let this_generation = {
                let mut generation = generation.borrow_mut();
                *generation += 1;
                *generation
            };

            yew::platform::spawn_local(async move {
                is_loading.set(true);

                let api_client = get_api_client();
                let (upcoming_events, registrations) = futures::join!(
                    api_client.upcoming_events(),
                    api_client.my_registrations(),
                );

                if *generation.borrow() != this_generation {
                    return;
                }

                match join_dashboard(upcoming_events, registrations) {
                    Ok(joined) => data.set(Some(joined)),
                    Err(e) => {
                        toasts.error(
                            e.user_message("Failed to load your dashboard"),
                        );
                    }
                }

                is_loading.set(false);
            });
        })
    };

    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
        });
    }

    StudentDashboardHookReturn {
        data: (*data).clone(),
        is_loading: *is_loading,
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn join_keeps_nothing_when_either_call_fails() {
        let failed = join_dashboard(
            Ok(vec![]),
            Err(ClientError::APIError(
                StatusCode::UNAUTHORIZED,
                "session expired".to_string(),
            )),
        );
        assert!(failed.is_err());
    }

    #[test]
    fn join_accepts_two_empty_collections() {
        let joined = join_dashboard(Ok(vec![]), Ok(vec![])).unwrap();
        assert!(joined.upcoming_events.is_empty());
        assert!(joined.registrations.is_empty());
    }
}
