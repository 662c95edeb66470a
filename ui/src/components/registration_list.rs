use payloads::{RegistrationStatus, responses};
use yew::prelude::*;

use crate::utils::time::format_event_time;

#[derive(Properties, PartialEq)]
pub struct RegistrationListProps {
    pub registrations: Vec<responses::Registration>,
    #[prop_or(AttrValue::Static("No registrations yet"))]
    pub empty_text: AttrValue,
}

fn status_classes(status: RegistrationStatus) -> &'static str {
    match status {
        RegistrationStatus::Confirmed => {
            "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-300"
        }
        RegistrationStatus::Waitlisted => {
            "bg-amber-100 text-amber-800 dark:bg-amber-900 dark:text-amber-300"
        }
        RegistrationStatus::Cancelled => {
            "bg-neutral-100 text-neutral-600 dark:bg-neutral-700 dark:text-neutral-400"
        }
    }
}

/// Attendee table for organizer and admin views.
#[function_component]
pub fn RegistrationList(props: &RegistrationListProps) -> Html {
    if props.registrations.is_empty() {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {&props.empty_text}
                </p>
            </div>
        };
    }

    html! {
        <div class="overflow-x-auto rounded-lg border border-neutral-200 dark:border-neutral-700">
            <table class="min-w-full divide-y divide-neutral-200 dark:divide-neutral-700">
                <thead class="bg-neutral-50 dark:bg-neutral-800">
                    <tr>
                        <th class="px-4 py-3 text-left text-xs font-medium text-neutral-500 dark:text-neutral-400 uppercase tracking-wider">
                            {"Attendee"}
                        </th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-neutral-500 dark:text-neutral-400 uppercase tracking-wider">
                            {"Status"}
                        </th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-neutral-500 dark:text-neutral-400 uppercase tracking-wider">
                            {"Registered"}
                        </th>
                    </tr>
                </thead>
                <tbody class="bg-white dark:bg-neutral-900 divide-y divide-neutral-200 dark:divide-neutral-700">
                    {for props.registrations.iter().map(|registration| html! {
                        <tr key={registration.registration_id.to_string()}>
                            <td class="px-4 py-3 text-sm text-neutral-900 dark:text-neutral-100">
                                {registration.attendee.display()}
                            </td>
                            <td class="px-4 py-3">
                                <span class={format!(
                                    "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {}",
                                    status_classes(registration.status)
                                )}>
                                    {registration.status.label()}
                                </span>
                            </td>
                            <td class="px-4 py-3 text-sm text-neutral-600 dark:text-neutral-400">
                                {format_event_time(registration.registered_at)}
                            </td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
