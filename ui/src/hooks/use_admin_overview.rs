use payloads::{ClientError, responses};
use yew::prelude::*;

use crate::contexts::toast::use_toast;
use crate::get_api_client;

/// Platform totals plus the event list the admin landing page summarizes.
#[derive(Clone, PartialEq)]
pub struct AdminOverviewData {
    pub overview: responses::AdminOverview,
    pub recent_events: Vec<responses::Event>,
}

pub struct AdminOverviewHookReturn {
    pub data: Option<AdminOverviewData>,
    pub is_loading: bool,
    pub refetch: Callback<()>,
}

fn join_overview(
    overview: Result<responses::AdminOverview, ClientError>,
    events: Result<Vec<responses::Event>, ClientError>,
) -> Result<AdminOverviewData, ClientError> {
    Ok(AdminOverviewData {
        overview: overview?,
        recent_events: events?,
    })
}

/// Hook backing the admin dashboard: totals and the event list, fetched
/// concurrently, applied as one update, one toast per failed cycle.
#[hook]
pub fn use_admin_overview() -> AdminOverviewHookReturn {
    let toasts = use_toast();
    let data = use_state(|| None::<AdminOverviewData>);
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
                let (overview, events) = futures::join!(
                    api_client.admin_overview(),
                    api_client.list_all_events(),
                );

                if *generation.borrow() != this_generation {
                    return;
                }

                match join_overview(overview, events) {
                    Ok(joined) => data.set(Some(joined)),
                    Err(e) => {
                        toasts.error(
                            e.user_message("Failed to load admin dashboard"),
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

    AdminOverviewHookReturn {
        data: (*data).clone(),
        is_loading: *is_loading,
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
