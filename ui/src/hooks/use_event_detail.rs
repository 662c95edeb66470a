use payloads::{ClientError, EventId, responses};
use yew::prelude::*;

use crate::contexts::toast::use_toast;
use crate::get_api_client;

/// Everything the event detail page needs, loaded as one unit so the page
/// never renders a half-updated mix of old and new data.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetailData {
    pub event: responses::Event,
    pub registrations: Vec<responses::Registration>,
    pub stats: responses::RegistrationStats,
}

pub struct EventDetailHookReturn {
    pub detail: Option<EventDetailData>,
    pub is_loading: bool,
    pub refetch: Callback<()>,
}

fn join_detail(
    event: Result<responses::Event, ClientError>,
    registrations: Result<Vec<responses::Registration>, ClientError>,
    stats: Result<responses::RegistrationStats, ClientError>,
) -> Result<EventDetailData, ClientError> {
    Ok(EventDetailData {
        event: event?,
        registrations: registrations?,
        stats: stats?,
    })
}

/// Hook to fetch an event together with its registrations and headline
/// counts. The three calls are independent and issued concurrently; the
/// view state updates only once all of them have resolved. On any failure
/// the previous data stays on screen and a single toast is raised.
#[hook]
pub fn use_event_detail(event_id: EventId) -> EventDetailHookReturn {
    let toasts = use_toast();
    let detail = use_state(|| None::<EventDetailData>);
    let is_loading = use_state(|| false);
    let generation = use_mut_ref(|| 0u64);

    let refetch = {
        let toasts = toasts.clone();
        let detail = detail.clone();
        let is_loading = is_loading.clone();
        let generation = generation.clone();

        use_callback(event_id, move |event_id: EventId, _| {
            let toasts = toasts.clone();
            let detail = detail.clone();
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
                let (event, registrations, stats) = futures::join!(
                    api_client.get_event(&event_id),
                    api_client.list_registrations(&event_id),
                    api_client.registration_stats(&event_id),
                );

                // Superseded by a newer event id; drop this result.
                if *generation.borrow() != this_generation {
                    return;
                }

                match join_detail(event, registrations, stats) {
                    Ok(data) => detail.set(Some(data)),
                    Err(e) => {
                        toasts.error(
                            e.user_message("Failed to load event details"),
                        );
                    }
                }

                is_loading.set(false);
            });
        })
    };

    {
        let refetch = refetch.clone();
        use_effect_with(event_id, move |event_id| {
            refetch.emit(*event_id);
        });
    }

    EventDetailHookReturn {
        detail: (*detail).clone(),
        is_loading: *is_loading,
        refetch: Callback::from(move |_| refetch.emit(event_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::{Timestamp, ToSpan};
    use payloads::{
        EventCategory, EventStatus, RegistrationId, RegistrationStatus,
        UserId, responses::UserIdentity,
    };
    use reqwest::StatusCode;
    use uuid::Uuid;

    fn sample_event() -> responses::Event {
        let starts_at = Timestamp::UNIX_EPOCH + 48.hours();
        responses::Event {
            event_id: EventId(Uuid::new_v4()),
            event_details: payloads::Event {
                title: "Career Fair".to_string(),
                description: None,
                location: "Main Hall".to_string(),
                category: EventCategory::Career,
                capacity: 200,
                starts_at,
                ends_at: starts_at + 6.hours(),
                fee: None,
            },
            organizer: UserIdentity {
                user_id: UserId(Uuid::new_v4()),
                username: "careers_office".to_string(),
                display_name: None,
            },
            status: EventStatus::Published,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn sample_registration(event_id: EventId) -> responses::Registration {
        responses::Registration {
            registration_id: RegistrationId(Uuid::new_v4()),
            event_id,
            attendee: UserIdentity {
                user_id: UserId(Uuid::new_v4()),
                username: "sam".to_string(),
                display_name: None,
            },
            status: RegistrationStatus::Confirmed,
            registered_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn sample_stats() -> responses::RegistrationStats {
        responses::RegistrationStats {
            confirmed: 1,
            waitlisted: 0,
            cancelled: 0,
            remaining: 199,
        }
    }

    fn api_error(body: &str) -> ClientError {
        ClientError::APIError(StatusCode::FORBIDDEN, body.to_string())
    }

    #[test]
    fn join_populates_all_slots_when_every_call_succeeds() {
        let event = sample_event();
        let registration = sample_registration(event.event_id);

        let joined = join_detail(
            Ok(event.clone()),
            Ok(vec![registration.clone()]),
            Ok(sample_stats()),
        )
        .unwrap();

        assert_eq!(joined.event, event);
        assert_eq!(joined.registrations, vec![registration]);
        assert_eq!(joined.stats.confirmed, 1);
    }

    #[test]
    fn join_is_all_or_nothing() {
        let event = sample_event();

        let joined = join_detail(
            Ok(event),
            Err(api_error("not your event")),
            Ok(sample_stats()),
        );

        assert!(joined.is_err());
    }

    #[test]
    fn join_surfaces_the_first_failure() {
        let error = join_detail(
            Err(api_error(r#"{"message":"event not found"}"#)),
            Err(api_error("also failed")),
            Ok(sample_stats()),
        )
        .unwrap_err();

        assert_eq!(
            error.user_message("Failed to load event details"),
            "event not found"
        );
    }
}
