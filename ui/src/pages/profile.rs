use payloads::requests;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::{RequireAuth, RoleBadge};
use crate::contexts::toast::use_toast;
use crate::hooks::use_title;
use crate::{AuthState, State, get_api_client};

#[function_component]
pub fn ProfilePage() -> Html {
    use_title("Profile - Gatherly");

    html! {
        <RequireAuth>
            <ProfileInner />
        </RequireAuth>
    }
}

#[function_component]
fn ProfileInner() -> Html {
    let (state, dispatch) = use_store::<State>();
    let toasts = use_toast();
    let display_name_ref = use_node_ref();
    let is_saving = use_state(|| false);

    let Some(profile) = state.profile().cloned() else {
        // RequireAuth only renders children when logged in
        return html! {};
    };

    let on_submit = {
        let toasts = toasts.clone();
        let dispatch = dispatch.clone();
        let display_name_ref = display_name_ref.clone();
        let is_saving = is_saving.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let input = display_name_ref.cast::<HtmlInputElement>().unwrap();
            let display_name = match input.value().trim() {
                "" => None,
                name => Some(name.to_string()),
            };

            let toasts = toasts.clone();
            let dispatch = dispatch.clone();
            let is_saving = is_saving.clone();

            yew::platform::spawn_local(async move {
                is_saving.set(true);

                let api_client = get_api_client();
                let request = requests::UpdateProfile { display_name };
                match api_client.update_profile(&request).await {
                    Ok(updated) => {
                        dispatch.reduce_mut(|state| {
                            state.auth_state = AuthState::LoggedIn(updated);
                        });
                        toasts.success("Profile saved");
                    }
                    Err(e) => {
                        toasts.error(
                            e.user_message("Failed to save profile"),
                        );
                    }
                }

                is_saving.set(false);
            });
        })
    };

    html! {
        <div class="max-w-lg space-y-8">
            <div>
                <div class="flex items-center gap-3">
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                        {&profile.username}
                    </h1>
                    <RoleBadge role={profile.role} />
                </div>
                <p class="text-neutral-600 dark:text-neutral-400 mt-2">
                    {&profile.email}
                </p>
            </div>

            <form onsubmit={on_submit} class="space-y-6">
                <div>
                    <label for="display-name" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"Display name"}
                    </label>
                    <input
                        ref={display_name_ref}
                        type="text"
                        id="display-name"
                        value={profile.display_name.clone().unwrap_or_default()}
                        class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
                               rounded-md shadow-sm bg-white dark:bg-neutral-700
                               text-neutral-900 dark:text-neutral-100
                               focus:outline-none focus:ring-2 focus:ring-neutral-500 focus:border-neutral-500"
                        placeholder="Shown instead of your username"
                    />
                </div>

                <button
                    type="submit"
                    disabled={*is_saving}
                    class="px-6 py-2 border border-transparent rounded-md shadow-sm
                           text-sm font-medium text-white
                           bg-neutral-900 hover:bg-neutral-800
                           dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                           disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors"
                >
                    {if *is_saving { "Saving..." } else { "Save" }}
                </button>
            </form>
        </div>
    }
}
