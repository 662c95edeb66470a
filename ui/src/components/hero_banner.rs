use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroBannerProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    /// Call-to-action area rendered under the subtitle.
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn HeroBanner(props: &HeroBannerProps) -> Html {
    html! {
        <section class="rounded-2xl bg-gradient-to-br from-neutral-900 to-neutral-700 dark:from-neutral-800 dark:to-neutral-950 text-white px-8 py-16 text-center">
            <h1 class="text-4xl sm:text-5xl font-bold tracking-tight">
                {&props.title}
            </h1>
            <p class="mt-4 text-lg text-neutral-300 max-w-2xl mx-auto">
                {&props.subtitle}
            </p>
            <div class="mt-8 flex justify-center gap-4">
                {for props.children.iter()}
            </div>
        </section>
    }
}
