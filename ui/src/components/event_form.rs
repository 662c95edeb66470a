use payloads::{EventCategory, requests::validate_event};
use rust_decimal::Decimal;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::utils::time::{datetime_local_value, parse_datetime_local};

#[derive(Properties, PartialEq)]
pub struct EventFormProps {
    /// Prefilled details when editing; None for a new event.
    #[prop_or_default]
    pub initial: Option<payloads::Event>,
    pub submit_text: AttrValue,
    pub on_submit: Callback<payloads::Event>,
    #[prop_or_default]
    pub is_submitting: bool,
}

#[function_component]
pub fn EventForm(props: &EventFormProps) -> Html {
    let initial = props.initial.clone();
    let title = use_state(|| {
        initial.as_ref().map(|e| e.title.clone()).unwrap_or_default()
    });
    let description = use_state(|| {
        initial
            .as_ref()
            .and_then(|e| e.description.clone())
            .unwrap_or_default()
    });
    let location = use_state(|| {
        initial
            .as_ref()
            .map(|e| e.location.clone())
            .unwrap_or_default()
    });
    let category = use_state(|| {
        initial
            .as_ref()
            .map(|e| e.category)
            .unwrap_or(EventCategory::Other)
    });
    let capacity = use_state(|| {
        initial
            .as_ref()
            .map(|e| e.capacity.to_string())
            .unwrap_or_default()
    });
    let starts_at = use_state(|| {
        initial
            .as_ref()
            .map(|e| datetime_local_value(e.starts_at))
            .unwrap_or_default()
    });
    let ends_at = use_state(|| {
        initial
            .as_ref()
            .map(|e| datetime_local_value(e.ends_at))
            .unwrap_or_default()
    });
    let fee = use_state(|| {
        initial
            .as_ref()
            .and_then(|e| e.fee)
            .map(|fee| fee.to_string())
            .unwrap_or_default()
    });
    let error_message = use_state(|| None::<String>);

    fn text_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    }

    let on_description_input = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(selected) = EventCategory::from_key(&select.value()) {
                category.set(selected);
            }
        })
    };

    let on_submit = {
        let title = title.clone();
        let description = description.clone();
        let location = location.clone();
        let category = category.clone();
        let capacity = capacity.clone();
        let starts_at = starts_at.clone();
        let ends_at = ends_at.clone();
        let fee = fee.clone();
        let error_message = error_message.clone();
        let submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Ok(capacity) = capacity.parse::<u32>() else {
                error_message
                    .set(Some("Capacity must be a whole number".to_string()));
                return;
            };
            let Some(starts_at) = parse_datetime_local(&starts_at) else {
                error_message
                    .set(Some("Please pick a start time".to_string()));
                return;
            };
            let Some(ends_at) = parse_datetime_local(&ends_at) else {
                error_message.set(Some("Please pick an end time".to_string()));
                return;
            };
            let fee = match fee.trim() {
                "" => None,
                raw => match raw.parse::<Decimal>() {
                    Ok(parsed) => Some(parsed),
                    Err(_) => {
                        error_message.set(Some(
                            "Fee must be an amount like 5.00".to_string(),
                        ));
                        return;
                    }
                },
            };

            let details = payloads::Event {
                title: title.trim().to_string(),
                description: match description.trim() {
                    "" => None,
                    text => Some(text.to_string()),
                },
                location: location.trim().to_string(),
                category: *category,
                capacity,
                starts_at,
                ends_at,
                fee,
            };

            let validation = validate_event(&details);
            if let Some(message) = validation.error_message() {
                error_message.set(Some(message.to_string()));
                return;
            }

            error_message.set(None);
            submit.emit(details);
        })
    };

    let input_classes = "w-full px-3 py-2 border border-neutral-300 \
                         dark:border-neutral-600 rounded-md shadow-sm \
                         bg-white dark:bg-neutral-700 text-neutral-900 \
                         dark:text-neutral-100 focus:outline-none \
                         focus:ring-2 focus:ring-neutral-500 \
                         focus:border-neutral-500";
    let label_classes = "block text-sm font-medium text-neutral-700 \
                         dark:text-neutral-300 mb-2";

    html! {
        <form onsubmit={on_submit} class="space-y-6 max-w-2xl">
            if let Some(error) = &*error_message {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                </div>
            }

            <div>
                <label for="title" class={label_classes}>{"Title"}</label>
                <input
                    type="text"
                    id="title"
                    value={(*title).clone()}
                    oninput={text_input(&title)}
                    required={true}
                    class={input_classes}
                    placeholder="e.g. Intro to Rust workshop"
                />
            </div>

            <div>
                <label for="description" class={label_classes}>{"Description"}</label>
                <textarea
                    id="description"
                    rows="4"
                    value={(*description).clone()}
                    oninput={on_description_input}
                    class={input_classes}
                    placeholder="What should attendees expect?"
                />
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                <div>
                    <label for="location" class={label_classes}>{"Location"}</label>
                    <input
                        type="text"
                        id="location"
                        value={(*location).clone()}
                        oninput={text_input(&location)}
                        required={true}
                        class={input_classes}
                        placeholder="e.g. Student Center, Room 204"
                    />
                </div>
                <div>
                    <label for="category" class={label_classes}>{"Category"}</label>
                    <select
                        id="category"
                        onchange={on_category_change}
                        class={input_classes}
                    >
                        {for EventCategory::ALL.iter().map(|option| html! {
                            <option
                                value={option.key()}
                                selected={*option == *category}
                            >
                                {option.label()}
                            </option>
                        })}
                    </select>
                </div>
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                <div>
                    <label for="starts-at" class={label_classes}>{"Starts"}</label>
                    <input
                        type="datetime-local"
                        id="starts-at"
                        value={(*starts_at).clone()}
                        oninput={text_input(&starts_at)}
                        required={true}
                        class={input_classes}
                    />
                </div>
                <div>
                    <label for="ends-at" class={label_classes}>{"Ends"}</label>
                    <input
                        type="datetime-local"
                        id="ends-at"
                        value={(*ends_at).clone()}
                        oninput={text_input(&ends_at)}
                        required={true}
                        class={input_classes}
                    />
                </div>
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                <div>
                    <label for="capacity" class={label_classes}>{"Capacity"}</label>
                    <input
                        type="number"
                        id="capacity"
                        min="1"
                        value={(*capacity).clone()}
                        oninput={text_input(&capacity)}
                        required={true}
                        class={input_classes}
                        placeholder="e.g. 50"
                    />
                </div>
                <div>
                    <label for="fee" class={label_classes}>{"Fee (optional)"}</label>
                    <input
                        type="text"
                        id="fee"
                        value={(*fee).clone()}
                        oninput={text_input(&fee)}
                        class={input_classes}
                        placeholder="Leave empty for a free event"
                    />
                </div>
            </div>

            <button
                type="submit"
                disabled={props.is_submitting}
                class="w-full sm:w-auto px-6 py-2 border border-transparent
                       rounded-md shadow-sm text-sm font-medium text-white
                       bg-neutral-900 hover:bg-neutral-800
                       dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                       focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-neutral-500
                       disabled:opacity-50 disabled:cursor-not-allowed
                       transition-colors duration-200"
            >
                if props.is_submitting {
                    {"Saving..."}
                } else {
                    {&props.submit_text}
                }
            </button>
        </form>
    }
}
