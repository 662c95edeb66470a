use wasm_bindgen::prelude::*;
use web_sys::{MediaQueryList, MediaQueryListEvent};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::theme::{Theme, ThemeState, apply_dark_class};

/// Hook to follow the OS color-scheme preference while the user hasn't
/// picked an explicit theme.
#[hook]
pub fn use_system_theme() {
    let (_state, dispatch) = use_store::<ThemeState>();

    use_effect_with((), {
        let dispatch = dispatch.clone();
        move |_| {
            let window = web_sys::window().unwrap();
            let media_query: MediaQueryList = window
                .match_media("(prefers-color-scheme: dark)")
                .unwrap()
                .unwrap();

            let dispatch_clone = dispatch.clone();
            let closure =
                Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
                    let prefers_dark = event.matches();
                    dispatch_clone.reduce_mut(move |state| {
                        if state.theme == Theme::System {
                            state.dark = prefers_dark;
                            apply_dark_class(prefers_dark);
                        }
                    });
                })
                    as Box<dyn FnMut(MediaQueryListEvent)>);

            // addEventListener rather than the deprecated addListener
            media_query
                .add_event_listener_with_callback(
                    "change",
                    closure.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Rust retains ownership of the closure, JS only has a pointer
            move || {
                let _ = media_query.remove_event_listener_with_callback(
                    "change",
                    closure.as_ref().unchecked_ref(),
                );
                drop(closure);
            }
        }
    });
}
