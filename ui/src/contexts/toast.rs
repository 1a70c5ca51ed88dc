use std::collections::HashMap;
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

use payloads::{ClientError, drafts::DraftError};

/// How long a toast stays up unless told otherwise.
pub const DEFAULT_TOAST_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Error,
    /// Recoverable problems, such as a form missing a required field.
    Warning,
    Success,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    /// Orders toasts on screen; uuids carry no ordering.
    pub seq: u64,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: Option<u32>, // milliseconds, None for no auto-dismiss
}

impl Toast {
    pub fn new(message: String, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            seq: 0,
            message,
            toast_type,
            duration: Some(DEFAULT_TOAST_MS),
        }
    }

    pub fn error(message: String) -> Self {
        Self::new(message, ToastType::Error)
    }

    pub fn warning(message: String) -> Self {
        Self::new(message, ToastType::Warning)
    }

    pub fn success(message: String) -> Self {
        Self::new(message, ToastType::Success)
    }

    pub fn info(message: String) -> Self {
        Self::new(message, ToastType::Info)
    }

    pub fn duration(mut self, duration_ms: u32) -> Self {
        self.duration = Some(duration_ms);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: HashMap<Uuid, Toast>,
    next_seq: u64,
}

impl ToastState {
    /// Oldest first.
    pub fn ordered(&self) -> Vec<Toast> {
        let mut toasts: Vec<_> = self.toasts.values().cloned().collect();
        toasts.sort_by_key(|toast| toast.seq);
        toasts
    }
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
    Clear,
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        let mut next_seq = self.next_seq;

        match action {
            ToastAction::Add(mut toast) => {
                toast.seq = next_seq;
                next_seq += 1;
                toasts.insert(toast.id, toast);
            }
            ToastAction::Remove(id) => {
                toasts.remove(&id);
            }
            ToastAction::Clear => {
                toasts.clear();
            }
        }

        Rc::new(ToastState { toasts, next_seq })
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

#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    context: Option<ToastContext>,
}

impl ToastHandle {
    pub fn new(context: Option<ToastContext>) -> Self {
        Self { context }
    }

    pub fn add(&self, toast: Toast) {
        let Some(context) = self.context.clone() else {
            tracing::warn!(message = %toast.message, "toast raised outside a ToastProvider");
            return;
        };
        let toast_id = toast.id;
        let duration = toast.duration;

        context.dispatch(ToastAction::Add(toast));

        if let Some(duration_ms) = duration {
            yew::platform::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                context.dispatch(ToastAction::Remove(toast_id));
            });
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.add(Toast::error(message.into()));
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.add(Toast::warning(message.into()));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.add(Toast::success(message.into()));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.add(Toast::info(message.into()));
    }

    /// Report a failed call: `action` names what failed, the server's text
    /// follows when it sent one.
    pub fn client_error(&self, action: &str, error: &ClientError) {
        tracing::warn!(%action, %error, "request failed");
        match error {
            ClientError::APIError(_, text) if !text.trim().is_empty() => {
                self.error(format!("{action}: {}", text.trim()))
            }
            _ => self.error(action.to_string()),
        }
    }

    /// Validation failures never reach the network and are shown as
    /// warnings.
    pub fn draft_error(&self, error: &DraftError) {
        self.warning(error.to_string());
    }

    pub fn remove(&self, id: Uuid) {
        if let Some(context) = &self.context {
            context.dispatch(ToastAction::Remove(id));
        }
    }

    pub fn clear(&self) {
        if let Some(context) = &self.context {
            context.dispatch(ToastAction::Clear);
        }
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    ToastHandle::new(use_context::<ToastContext>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_keep_insertion_order() {
        let mut state = Rc::new(ToastState::default());
        for message in ["first", "second", "third"] {
            state = state.reduce(ToastAction::Add(Toast::error(message.into())));
        }
        let messages: Vec<_> =
            state.ordered().into_iter().map(|t| t.message).collect();
        assert_eq!(messages, ["first", "second", "third"]);
    }

    #[test]
    fn remove_and_clear() {
        let toast = Toast::warning("Name is required.".into());
        let id = toast.id;
        let state = Rc::new(ToastState::default())
            .reduce(ToastAction::Add(toast))
            .reduce(ToastAction::Add(Toast::info("x".into())));
        let state = state.reduce(ToastAction::Remove(id));
        assert_eq!(state.toasts.len(), 1);
        assert!(state.reduce(ToastAction::Clear).toasts.is_empty());
    }

    #[test]
    fn default_duration_is_short() {
        assert_eq!(Toast::success("ok".into()).duration, Some(DEFAULT_TOAST_MS));
        assert_eq!(Toast::info("ok".into()).duration(800).duration, Some(800));
    }
}
