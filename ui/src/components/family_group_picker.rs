use payloads::{QueryParams, responses::FamilyGroupListing};
use yew::prelude::*;

use super::sortable_table::headers;
use super::{Modal, Pagination, SearchBox, SortableTable, styles};
use crate::hooks::use_paginated_fetch;
use crate::paging::DEFAULT_PAGE_SIZE;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_select: Callback<FamilyGroupListing>,
    pub on_close: Callback<()>,
}

/// Paginated, searchable list of family groups to pick one from.
#[function_component]
pub fn FamilyGroupPicker(props: &Props) -> Html {
    let groups = use_paginated_fetch::<FamilyGroupListing>(
        "/family-group",
        DEFAULT_PAGE_SIZE,
        QueryParams::new(),
    );

    {
        let fetch_page = groups.fetch_page.clone();
        use_effect_with((), move |_| fetch_page.emit((1, None)));
    }

    let on_search = {
        let fetch_page = groups.fetch_page.clone();
        Callback::from(move |filter: Option<String>| {
            fetch_page.emit((1, Some(QueryParams::new().with("search", filter))));
        })
    };

    let on_page_change = {
        let fetch_page = groups.fetch_page.clone();
        Callback::from(move |page: u32| fetch_page.emit((page, None)))
    };

    let select = |listing: &FamilyGroupListing| {
        let on_select = props.on_select.clone();
        let listing = listing.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(listing.clone()))
    };

    html! {
        <Modal title="Select family group" on_close={props.on_close.clone()} max_width="max-w-3xl">
            <div class="space-y-3">
                <SearchBox placeholder="Search by principal..." {on_search} />
                <Pagination
                    current_page={groups.current_page}
                    total_pages={groups.total_pages}
                    items_per_page={groups.page_size}
                    {on_page_change}
                    on_items_per_page_change={groups.set_page_size.clone()}
                    is_loading={groups.is_loading}
                >
                    <SortableTable headers={headers(&["Actions", "ID", "Principal"])}>
                        {for groups.data.iter().map(|listing| html! {
                            <tr key={listing.id.to_string()} class={styles::TR}>
                                <td class={styles::TD}>
                                    <button onclick={select(listing)} class={styles::LINK_BUTTON}>
                                        {"Select"}
                                    </button>
                                </td>
                                <td class={styles::TD}>{listing.id.to_string()}</td>
                                <td class={styles::TD}>{listing.principal_name()}</td>
                            </tr>
                        })}
                    </SortableTable>
                </Pagination>
            </div>
        </Modal>
    }
}
