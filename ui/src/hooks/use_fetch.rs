use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::FetchState;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// - No data + loading: spinner text ("Loading {context}...")
    /// - No data + error: error banner
    /// - Has data: `render_fn(data, is_loading, error)`; a refetch error
    ///   arrives here with the previous data still shown.
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match self.data.as_ref() {
            None => {
                if self.is_loading {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("Loading {}...", context)}
                            </p>
                        </div>
                    }
                } else if let Some(error) = &self.error {
                    html! {
                        <div class="p-4 rounded-md bg-red-50 \
                                   dark:bg-red-900/20 border \
                                   border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 \
                                      dark:text-red-400">
                                {format!("Error loading {}: {}", context, error)}
                            </p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("No {} found", context)}
                            </p>
                        </div>
                    }
                }
            }
            Some(data) => render_fn(data, self.is_loading, self.error.as_ref()),
        }
    }
}

/// Generic fetch hook composer.
///
/// Fetches on mount and again whenever `deps` changes; the fetch function
/// captures its inputs from the closure. Each trigger starts a new fetch
/// cycle under a fresh generation; a cycle that resolves after a newer one
/// has started is discarded without writing anything, so the newest
/// trigger always wins regardless of response ordering.
///
/// # Example
///
/// ```ignore
/// #[hook]
/// pub fn use_event(event_id: EventId) -> FetchHookReturn<responses::Event> {
///     use_fetch(event_id, move || async move {
///         let api_client = get_api_client();
///         api_client
///             .get_event(&event_id)
///             .await
///             .map_err(|e| e.user_message("Failed to load event"))
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let data = use_state(|| FetchState::NotFetched);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    let generation = use_mut_ref(|| 0u64);

    let refetch = {
        let data = data.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let generation = generation.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let data = data.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let generation = generation.clone();
            let fetch_fn = fetch_fn.clone();

            let this_generation = {
                let mut generation = generation.borrow_mut();
                *generation += 1;
                *generation
            };

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                let result = fetch_fn().await;

                // A newer cycle owns the slots now; drop this result.
                if *generation.borrow() != this_generation {
                    return;
                }

                match result {
                    Ok(value) => {
                        data.set(FetchState::Fetched(value));
                        error.set(None);
                    }
                    Err(e) => {
                        error.set(Some(e));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    // Auto-fetch on mount and when deps change. No in-flight guard: a dep
    // change must supersede the running cycle, and the generation check
    // above keeps the superseded cycle from writing.
    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
        });
    }

    FetchHookReturn {
        data: (*data).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
