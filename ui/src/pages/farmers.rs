use payloads::{QueryParams, responses::Farmer};
use yew::prelude::*;

use super::Dialog;
use crate::components::sortable_table::headers;
use crate::components::status_dot::status_cell;
use crate::components::{FarmerModal, Pagination, SearchBox, SortableTable, styles};
use crate::hooks::use_paginated_fetch;
use crate::paging::{DEFAULT_PAGE_SIZE, format_count};
use crate::utils::format_area;

const COLUMNS: [&str; 10] = [
    "Actions",
    "Registration",
    "Name",
    "Status",
    "Technician",
    "Branch",
    "Family group",
    "Owned",
    "Leased",
    "Total",
];

/// `/farmer` searches by name or registration under `value`.
fn search_query(filter: Option<String>) -> QueryParams {
    QueryParams::new().with("value", filter)
}

#[function_component]
pub fn FarmersPage() -> Html {
    let farmers =
        use_paginated_fetch::<Farmer>("/farmer", DEFAULT_PAGE_SIZE, QueryParams::new());
    let dialog = use_state(|| Dialog::<Farmer>::Closed);
    let search = use_state(|| None::<String>);

    {
        let fetch_page = farmers.fetch_page.clone();
        use_effect_with((), move |_| fetch_page.emit((1, None)));
    }

    let on_search = {
        let fetch_page = farmers.fetch_page.clone();
        let search = search.clone();
        Callback::from(move |filter: Option<String>| {
            fetch_page.emit((1, Some(search_query(filter.clone()))));
            search.set(filter);
        })
    };

    let on_page_change = {
        let fetch_page = farmers.fetch_page.clone();
        Callback::from(move |page: u32| fetch_page.emit((page, None)))
    };

    let on_create = {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| dialog.set(Dialog::Create))
    };

    let on_close = {
        let dialog = dialog.clone();
        Callback::from(move |_: ()| dialog.set(Dialog::Closed))
    };

    let on_saved = {
        let dialog = dialog.clone();
        let fetch_page = farmers.fetch_page.clone();
        let current_page = farmers.current_page;
        Callback::from(move |_: ()| {
            dialog.set(Dialog::Closed);
            fetch_page.emit((current_page, None));
        })
    };

    let edit = |farmer: &Farmer| {
        let dialog = dialog.clone();
        let farmer = farmer.clone();
        Callback::from(move |_: MouseEvent| dialog.set(Dialog::Edit(farmer.clone())))
    };

    let rows = if farmers.data.is_empty() && !farmers.is_loading {
        html! {
            <tr><td colspan="10" class={styles::TD}>{"No farmers found."}</td></tr>
        }
    } else {
        html! {
            {for farmers.data.iter().map(|farmer| html! {
                <tr key={farmer.registration_number.to_string()} class={styles::TR}>
                    <td class={styles::TD}>
                        <button onclick={edit(farmer)} class={styles::LINK_BUTTON}>{"Edit"}</button>
                    </td>
                    <td class={styles::TD}>{farmer.registration_number.to_string()}</td>
                    <td class={styles::TD}>{&farmer.name}</td>
                    <td class={styles::TD}>{status_cell(farmer.status)}</td>
                    <td class={styles::TD}>
                        {farmer.technician.as_ref().map(|t| t.display_name()).unwrap_or("No technician")}
                    </td>
                    <td class={styles::TD}>
                        {farmer.branch.as_ref().map(|b| b.name.as_str()).unwrap_or("No branch")}
                    </td>
                    <td class={styles::TD}>
                        {farmer
                            .family_group
                            .as_ref()
                            .map(|g| g.principal.as_ref().map(|p| p.name.clone()).unwrap_or_else(|| format!("#{}", g.id)))
                            .unwrap_or_else(|| "No family group".into())}
                    </td>
                    <td class={styles::TD}>{format_area(farmer.owned_area)}</td>
                    <td class={styles::TD}>{format_area(farmer.leased_area)}</td>
                    <td class={styles::TD}>{format_area(farmer.total_area())}</td>
                </tr>
            })}
        }
    };

    html! {
        <div class="space-y-4">
            <div class="flex flex-wrap items-center gap-4">
                <button onclick={on_create} class={styles::BUTTON_PRIMARY}>{"New farmer"}</button>
                <div class="flex-1 min-w-[16rem]">
                    <SearchBox placeholder="Search by name or registration..." {on_search} />
                </div>
                <span class={styles::MUTED}>
                    {format!("Total: {}", format_count(farmers.total_items))}
                </span>
            </div>

            <Pagination
                current_page={farmers.current_page}
                total_pages={farmers.total_pages}
                items_per_page={farmers.page_size}
                {on_page_change}
                on_items_per_page_change={farmers.resize_keeping(search_query((*search).clone()))}
                is_loading={farmers.is_loading}
            >
                <SortableTable headers={headers(&COLUMNS)}>
                    {rows}
                </SortableTable>
            </Pagination>

            {match &*dialog {
                Dialog::Closed => html! {},
                Dialog::Create => html! {
                    <FarmerModal farmer={None::<Farmer>} {on_close} {on_saved} />
                },
                Dialog::Edit(farmer) => html! {
                    <FarmerModal farmer={Some(farmer.clone())} {on_close} {on_saved} />
                },
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::use_paginated_fetch::detached_handle;
    use crate::paging::PaginatedList;

    #[test]
    fn search_text_survives_a_page_size_change() {
        let (farmers, sent) =
            detached_handle(PaginatedList::<Farmer>::new(DEFAULT_PAGE_SIZE, QueryParams::new()));
        let search = Some("maria".to_string());

        farmers.fetch_page.emit((2, Some(search_query(search.clone()))));
        farmers.resize_keeping(search_query(search)).emit(25);

        assert_eq!(
            sent.borrow().last().map(String::as_str),
            Some("page=0&size=25&value=maria")
        );
    }

    #[test]
    fn cleared_search_sends_no_value() {
        assert_eq!(search_query(None).to_query_string(), "");
    }
}
