use payloads::EventStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EventStatusBadgeProps {
    pub status: EventStatus,
}

/// Small colored pill showing where an event is in its lifecycle.
#[function_component]
pub fn EventStatusBadge(props: &EventStatusBadgeProps) -> Html {
    let classes = match props.status {
        EventStatus::Draft => {
            "bg-neutral-100 text-neutral-700 dark:bg-neutral-700 dark:text-neutral-300"
        }
        EventStatus::Published => {
            "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-300"
        }
        EventStatus::Cancelled => {
            "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-300"
        }
        EventStatus::Completed => {
            "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-300"
        }
    };

    html! {
        <span class={format!(
            "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {}",
            classes
        )}>
            {props.status.label()}
        </span>
    }
}
