use crate::contexts::toast::{Toast, ToastType, use_toast};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
}

/// Tailwind classes and marker glyph for one kind of toast.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Palette {
    surface: &'static str,
    text: &'static str,
    marker: &'static str,
}

fn palette(kind: ToastType) -> Palette {
    match kind {
        ToastType::Error => Palette {
            surface: "bg-red-50 border-red-200 dark:bg-red-900 dark:border-red-800",
            text: "text-red-700 dark:text-red-300",
            marker: "✕",
        },
        ToastType::Warning => Palette {
            surface: "bg-yellow-50 border-yellow-200 dark:bg-yellow-900 dark:border-yellow-800",
            text: "text-yellow-800 dark:text-yellow-200",
            marker: "!",
        },
        ToastType::Success => Palette {
            surface: "bg-green-50 border-green-200 dark:bg-green-900 dark:border-green-800",
            text: "text-green-700 dark:text-green-300",
            marker: "✓",
        },
        ToastType::Info => Palette {
            surface: "bg-white border-neutral-200 dark:bg-neutral-800 dark:border-neutral-700",
            text: "text-neutral-700 dark:text-neutral-300",
            marker: "i",
        },
    }
}

/// Errors interrupt screen readers, everything else waits its turn.
fn aria_role(kind: ToastType) -> &'static str {
    match kind {
        ToastType::Error => "alert",
        _ => "status",
    }
}

#[function_component]
pub fn ToastItem(props: &ToastItemProps) -> Html {
    let toasts = use_toast();
    let toast = &props.toast;
    let colors = palette(toast.toast_type);

    let on_dismiss = {
        let id = toast.id;
        Callback::from(move |_: MouseEvent| toasts.remove(id))
    };

    html! {
        <div
            role={aria_role(toast.toast_type)}
            class={classes!(
                "flex", "items-start", "gap-3", "p-3", "rounded-md", "border", "shadow-md",
                colors.surface, colors.text
            )}
        >
            <span class="w-4 text-center text-sm font-bold">{colors.marker}</span>
            <p class="flex-1 min-w-0 text-sm break-words">{&toast.message}</p>
            <button
                onclick={on_dismiss}
                class="text-lg leading-none opacity-60 hover:opacity-100"
                aria-label="Dismiss"
            >
                {"×"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_errors_are_announced_as_alerts() {
        assert_eq!(aria_role(ToastType::Error), "alert");
        assert_eq!(aria_role(ToastType::Warning), "status");
        assert_eq!(aria_role(ToastType::Success), "status");
    }

    #[test]
    fn every_kind_has_its_own_marker() {
        let markers: Vec<_> = [
            ToastType::Error,
            ToastType::Warning,
            ToastType::Success,
            ToastType::Info,
        ]
        .into_iter()
        .map(|kind| palette(kind).marker)
        .collect();
        assert_eq!(markers, ["✕", "!", "✓", "i"]);
    }
}
