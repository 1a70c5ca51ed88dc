use super::ToastItem;
use crate::contexts::toast::{Toast, ToastContext};
use yew::prelude::*;

/// Toasts beyond this many stay queued until older ones expire.
const MAX_VISIBLE: usize = 4;

fn visible(ordered: Vec<Toast>) -> Vec<Toast> {
    ordered.into_iter().take(MAX_VISIBLE).collect()
}

/// Bottom-right stack, oldest on top.
#[function_component]
pub fn ToastContainer() -> Html {
    let toasts = use_context::<ToastContext>()
        .map(|context| visible(context.ordered()))
        .unwrap_or_default();

    html! {
        <div aria-live="polite" class="fixed bottom-4 right-4 z-50 w-80 space-y-2">
            {for toasts.into_iter().map(|toast| {
                let key = toast.id.to_string();
                html! { <ToastItem {key} {toast} /> }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_toasts_wait_behind_the_visible_ones() {
        let ordered: Vec<_> = (0..6)
            .map(|n| Toast::info(format!("toast {n}")))
            .collect();
        let shown = visible(ordered.clone());
        assert_eq!(shown.len(), MAX_VISIBLE);
        assert_eq!(shown[0], ordered[0]);
    }
}
