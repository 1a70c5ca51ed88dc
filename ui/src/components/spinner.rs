use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component]
pub fn Spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center gap-2" role="status">
            <div class="h-8 w-8 rounded-full border-4 border-neutral-200 \
                        dark:border-neutral-700 border-t-neutral-900 \
                        dark:border-t-neutral-100 animate-spin" />
            if let Some(label) = &props.label {
                <span class="text-sm text-neutral-600 dark:text-neutral-400">
                    {label}
                </span>
            }
        </div>
    }
}
