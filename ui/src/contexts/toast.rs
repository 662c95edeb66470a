//! Transient notifications, provided to the component tree as a context so
//! hooks and pages receive an explicit handle rather than reaching for a
//! global.

use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
    /// Milliseconds until auto-dismiss; None keeps the toast until closed.
    pub duration: Option<u32>,
}

impl Toast {
    pub fn new(message: String, kind: ToastKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            kind,
            duration: Some(5000),
        }
    }

    pub fn error(message: String) -> Self {
        Self::new(message, ToastKind::Error)
    }

    pub fn success(message: String) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn info(message: String) -> Self {
        Self::new(message, ToastKind::Info)
    }

    #[allow(dead_code)]
    pub fn no_auto_dismiss(mut self) -> Self {
        self.duration = None;
        self
    }
}

/// Toasts in insertion order, oldest first, so the container stacks them
/// in the order they were raised.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
    #[allow(dead_code)]
    Clear,
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();

        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|toast| toast.id != id),
            ToastAction::Clear => toasts.clear(),
        }

        Rc::new(ToastState { toasts })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    context: ToastContext,
}

impl ToastHandle {
    pub fn add(&self, toast: Toast) {
        let toast_id = toast.id;
        let duration = toast.duration;

        self.context.dispatch(ToastAction::Add(toast));

        if let Some(duration_ms) = duration {
            let context = self.context.clone();
            yew::platform::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                context.dispatch(ToastAction::Remove(toast_id));
            });
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.add(Toast::error(message.into()));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.add(Toast::success(message.into()));
    }

    #[allow(dead_code)]
    pub fn info(&self, message: impl Into<String>) {
        self.add(Toast::info(message.into()));
    }

    pub fn remove(&self, id: Uuid) {
        self.context.dispatch(ToastAction::Remove(id));
    }

    #[allow(dead_code)]
    pub fn clear(&self) {
        self.context.dispatch(ToastAction::Clear);
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast must be used within a ToastProvider");
    ToastHandle { context }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: ToastState, action: ToastAction) -> ToastState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn toasts_stack_in_insertion_order() {
        let first = Toast::success("saved".to_string());
        let second = Toast::error("failed".to_string());

        let state = reduce(ToastState::default(), ToastAction::Add(first.clone()));
        let state = reduce(state, ToastAction::Add(second.clone()));

        let ids: Vec<_> = state.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn remove_only_touches_the_matching_toast() {
        let keep = Toast::info("still here".to_string());
        let drop = Toast::error("going away".to_string());

        let state = reduce(ToastState::default(), ToastAction::Add(keep.clone()));
        let state = reduce(state, ToastAction::Add(drop.clone()));
        let state = reduce(state, ToastAction::Remove(drop.id));

        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].id, keep.id);
    }

    #[test]
    fn clear_empties_the_stack() {
        let state = reduce(
            ToastState::default(),
            ToastAction::Add(Toast::success("one".to_string())),
        );
        let state = reduce(state, ToastAction::Clear);
        assert!(state.toasts.is_empty());
    }
}
