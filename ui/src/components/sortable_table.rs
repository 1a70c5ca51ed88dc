use yew::prelude::*;

use super::styles;
use crate::utils::{SortDirection, SortState};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub headers: Vec<AttrValue>,
    /// Header clicks are reported only when this is set.
    #[prop_or_default]
    pub on_sort: Option<Callback<String>>,
    /// Sort the caller has applied, used for the indicator.
    #[prop_or_default]
    pub sort: SortState,
    /// Table rows.
    pub children: Html,
}

/// Header row plus body. Clicking a header reports its label; flipping the
/// direction and refetching is up to the caller.
#[function_component]
pub fn SortableTable(props: &Props) -> Html {
    html! {
        <div class="overflow-x-auto rounded-lg border border-neutral-200 \
                    dark:border-neutral-700">
            <table class={styles::TABLE}>
                <thead>
                    <tr>
                        {for props.headers.iter().map(|header| {
                            let indicator = if props.sort.is_active(header) {
                                match props.sort.direction {
                                    SortDirection::Asc => " ▲",
                                    SortDirection::Desc => " ▼",
                                }
                            } else {
                                ""
                            };

                            match &props.on_sort {
                                Some(on_sort) => {
                                    let onclick = {
                                        let on_sort = on_sort.clone();
                                        let header = header.to_string();
                                        Callback::from(move |_: MouseEvent| {
                                            on_sort.emit(header.clone())
                                        })
                                    };
                                    html! {
                                        <th
                                            key={header.to_string()}
                                            {onclick}
                                            class={classes!(styles::TH, "cursor-pointer", "select-none")}
                                        >
                                            {header}{indicator}
                                        </th>
                                    }
                                }
                                None => html! {
                                    <th key={header.to_string()} class={styles::TH}>
                                        {header}
                                    </th>
                                },
                            }
                        })}
                    </tr>
                </thead>
                <tbody class="bg-white dark:bg-neutral-800">
                    {props.children.clone()}
                </tbody>
            </table>
        </div>
    }
}

/// Build the header list from string literals.
pub fn headers(labels: &[&'static str]) -> Vec<AttrValue> {
    labels.iter().map(|label| AttrValue::Static(label)).collect()
}
