use yew::prelude::*;

use crate::paging::{PAGE_SIZE_CHOICES, Pager, format_count};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// 1-based
    pub current_page: u32,
    pub total_pages: u32,
    pub items_per_page: u32,
    pub on_page_change: Callback<u32>,
    pub on_items_per_page_change: Callback<u32>,
    #[prop_or(false)]
    pub is_loading: bool,
    pub children: Html,
}

/// Page-size selector and previous/next controls above and below the
/// wrapped table. Only forwards intent; the owner of the list fetches.
#[function_component]
pub fn Pagination(props: &Props) -> Html {
    let pager = Pager::new(props.current_page, props.total_pages);

    let controls = |position: &'static str| {
        let on_size_change = {
            let on_items_per_page_change = props.on_items_per_page_change.clone();
            Callback::from(move |e: Event| {
                let target = e.target_dyn_into::<web_sys::HtmlSelectElement>();
                if let Some(select) = target
                    && let Ok(size) = select.value().parse::<u32>()
                {
                    on_items_per_page_change.emit(size);
                }
            })
        };

        let on_previous = {
            let on_page_change = props.on_page_change.clone();
            let page = pager.current_page.saturating_sub(1).max(1);
            Callback::from(move |_: MouseEvent| on_page_change.emit(page))
        };

        let on_next = {
            let on_page_change = props.on_page_change.clone();
            let page = pager.current_page + 1;
            Callback::from(move |_: MouseEvent| on_page_change.emit(page))
        };

        let prev_disabled = pager.previous_disabled() || props.is_loading;
        let next_disabled = pager.next_disabled() || props.is_loading;

        let button_class = |disabled: bool| {
            if disabled {
                "px-3 py-1 border border-neutral-300 dark:border-neutral-600 \
                 rounded-md text-sm font-medium text-neutral-400 \
                 dark:text-neutral-500 bg-neutral-100 dark:bg-neutral-800 \
                 cursor-not-allowed"
            } else {
                "px-3 py-1 border border-neutral-300 dark:border-neutral-600 \
                 rounded-md text-sm font-medium text-neutral-700 \
                 dark:text-neutral-300 bg-white dark:bg-neutral-700 \
                 hover:bg-neutral-50 dark:hover:bg-neutral-600 \
                 transition-colors duration-200"
            }
        };

        html! {
            <div class={classes!(
                "flex", "items-center", "justify-between", "gap-4", "py-3",
                if position == "top" { "mb-2" } else { "mt-2" }
            )}>
                <label class="flex items-center gap-2 text-sm text-neutral-600 \
                              dark:text-neutral-400">
                    {"Items per page"}
                    <select
                        onchange={on_size_change}
                        class="px-2 py-1 border border-neutral-300 \
                               dark:border-neutral-600 rounded-md \
                               bg-white dark:bg-neutral-700 \
                               text-neutral-900 dark:text-neutral-100"
                    >
                        {for PAGE_SIZE_CHOICES.iter().map(|size| html! {
                            <option
                                value={size.to_string()}
                                selected={*size == props.items_per_page}
                            >
                                {format_count(u64::from(*size))}
                            </option>
                        })}
                    </select>
                </label>

                <div class="flex items-center gap-3">
                    <button
                        onclick={on_previous}
                        disabled={prev_disabled}
                        class={button_class(prev_disabled)}
                    >
                        {"Previous"}
                    </button>
                    <span class="text-sm text-neutral-600 dark:text-neutral-400">
                        {pager.indicator()}
                    </span>
                    <button
                        onclick={on_next}
                        disabled={next_disabled}
                        class={button_class(next_disabled)}
                    >
                        {"Next"}
                    </button>
                </div>
            </div>
        }
    };

    html! {
        <div>
            {controls("top")}
            {props.children.clone()}
            {controls("bottom")}
        </div>
    }
}
