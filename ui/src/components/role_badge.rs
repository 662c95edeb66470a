use payloads::Role;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RoleBadgeProps {
    pub role: Role,
}

#[function_component]
pub fn RoleBadge(props: &RoleBadgeProps) -> Html {
    let classes = match props.role {
        Role::Admin => {
            "bg-purple-100 text-purple-800 dark:bg-purple-900 dark:text-purple-300"
        }
        Role::Organizer => {
            "bg-amber-100 text-amber-800 dark:bg-amber-900 dark:text-amber-300"
        }
        Role::Student => {
            "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-300"
        }
    };

    html! {
        <span class={format!(
            "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {}",
            classes
        )}>
            {props.role.label()}
        </span>
    }
}
