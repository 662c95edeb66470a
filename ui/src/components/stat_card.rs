use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
}

#[function_component]
pub fn StatCard(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700">
            <p class="text-sm font-medium text-neutral-600 dark:text-neutral-400">
                {&props.label}
            </p>
            <p class="mt-2 text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                {&props.value}
            </p>
            if let Some(hint) = &props.hint {
                <p class="mt-1 text-sm text-neutral-500 dark:text-neutral-400">
                    {hint}
                </p>
            }
        </div>
    }
}
