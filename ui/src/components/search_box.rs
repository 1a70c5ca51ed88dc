use payloads::requests::search_filter;
use yew::prelude::*;

use super::styles;
use crate::hooks::use_debounced_value;
use crate::utils::SEARCH_DEBOUNCE_MS;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_else(|| AttrValue::from("Search..."))]
    pub placeholder: AttrValue,
    /// Settled search filter. `None` once the text drops below the minimum
    /// length. Not emitted on mount.
    pub on_search: Callback<Option<String>>,
}

/// Text input that reports the search filter only after typing settles.
#[function_component]
pub fn SearchBox(props: &Props) -> Html {
    let text = use_state(String::new);
    let settled = use_debounced_value((*text).clone(), SEARCH_DEBOUNCE_MS);
    let last_emitted = use_mut_ref(|| None::<String>);

    {
        let on_search = props.on_search.clone();
        use_effect_with(search_filter(&settled), move |filter| {
            let changed = *last_emitted.borrow() != *filter;
            if changed {
                *last_emitted.borrow_mut() = filter.clone();
                on_search.emit(filter.clone());
            }
        });
    }

    let on_input = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            text.set(input.value());
        })
    };

    html! {
        <input
            type="search"
            value={(*text).clone()}
            oninput={on_input}
            placeholder={props.placeholder.clone()}
            class={styles::INPUT}
        />
    }
}
