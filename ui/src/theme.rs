use web_sys::window;
use yew::prelude::*;
use yewdux::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct ThemeState {
    /// The user's stated preference, System until they toggle.
    pub theme: Theme,
    /// What is actually applied to the document.
    pub dark: bool,
}

pub fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

pub fn stored_theme() -> Theme {
    if let Ok(Some(storage)) = window().unwrap().local_storage()
        && let Ok(Some(theme_str)) = storage.get_item("theme")
    {
        return Theme::from_str(&theme_str);
    }
    Theme::System
}

fn store_theme(theme: Theme) {
    if let Ok(Some(storage)) = window().unwrap().local_storage() {
        match theme {
            // System is the default; an explicit entry would shadow future
            // OS-level changes.
            Theme::System => {
                let _ = storage.remove_item("theme");
            }
            _ => {
                let _ = storage.set_item("theme", theme.as_str());
            }
        }
    }
}

pub fn resolve_dark(theme: Theme) -> bool {
    match theme {
        Theme::Light => false,
        Theme::Dark => true,
        Theme::System => system_prefers_dark(),
    }
}

pub fn apply_dark_class(dark: bool) {
    let document = window().unwrap().document().unwrap();
    let html = document.document_element().unwrap();
    if dark {
        let _ = html.class_list().add_1("dark");
    } else {
        let _ = html.class_list().remove_1("dark");
    }
}

#[hook]
pub fn use_theme() -> (Theme, bool, Callback<Theme>) {
    let (state, dispatch) = use_store::<ThemeState>();

    let setter = use_callback(
        dispatch.clone(),
        move |new_theme: Theme, dispatch: &Dispatch<ThemeState>| {
            let dark = resolve_dark(new_theme);
            store_theme(new_theme);
            apply_dark_class(dark);
            dispatch.reduce_mut(|state| {
                state.theme = new_theme;
                state.dark = dark;
            });
        },
    );

    (state.theme, state.dark, setter)
}

// Header button cycling between light and dark.
#[function_component]
pub fn ThemeToggle() -> Html {
    let (_, dark, set_theme) = use_theme();

    // Pick up the stored preference on first render
    {
        let set_theme = set_theme.clone();
        use_effect_with((), move |_| {
            set_theme.emit(stored_theme());
        });
    }

    let toggle_theme = use_callback(
        (dark, set_theme.clone()),
        move |_: MouseEvent, (dark, set_theme)| {
            let new_theme = if *dark { Theme::Light } else { Theme::Dark };
            set_theme.emit(new_theme);
        },
    );

    let (icon, title) = if dark {
        ("☀️", "Switch to light mode")
    } else {
        ("🌙", "Switch to dark mode")
    };

    html! {
        <button
            class="p-2 rounded-lg hover:bg-neutral-200 dark:hover:bg-neutral-700 transition-colors"
            onclick={toggle_theme}
            title={title}
            aria-label={title}
        >
            <span class="text-xl">{icon}</span>
        </button>
    }
}
