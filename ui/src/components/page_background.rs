use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageBackgroundProps {
    pub children: Children,
}

/// Subtle full-width backdrop for landing-style pages.
#[function_component]
pub fn PageBackground(props: &PageBackgroundProps) -> Html {
    html! {
        <div class="relative">
            <div
                aria-hidden="true"
                class="absolute inset-0 -z-10 bg-gradient-to-b from-neutral-50 to-transparent dark:from-neutral-800/40 rounded-3xl"
            ></div>
            <div class="relative space-y-12">
                {for props.children.iter()}
            </div>
        </div>
    }
}
