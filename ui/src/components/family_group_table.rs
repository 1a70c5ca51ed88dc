use payloads::{
    FamilyGroupId,
    responses::{Crop, Cultivation, Farmer, FarmerSummary, farmers_total_area},
};
use yew::prelude::*;

use super::status_dot::status_cell;
use super::{SortableTable, styles};
use crate::utils::format_area;

/// Season the cultivation figures refer to.
pub const CURRENT_SEASON: &str = "2025/2026";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub group_id: FamilyGroupId,
    pub principal: Option<FarmerSummary>,
    pub members: Vec<Farmer>,
    pub cultivation: Cultivation,
    #[prop_or_default]
    pub on_edit_farmer: Option<Callback<Farmer>>,
    #[prop_or_default]
    pub on_edit_assets: Option<Callback<Farmer>>,
    /// Offered on every member except the principal.
    #[prop_or_default]
    pub on_make_principal: Option<Callback<Farmer>>,
    /// Offered on every member except the principal.
    #[prop_or_default]
    pub on_remove_farmer: Option<Callback<Farmer>>,
    #[prop_or_default]
    pub on_add_farmer: Option<Callback<()>>,
    #[prop_or_default]
    pub on_edit_cultivation: Option<Callback<()>>,
}

fn action_button(
    label: &'static str,
    class: &'static str,
    callback: &Option<Callback<Farmer>>,
    farmer: &Farmer,
) -> Html {
    let Some(callback) = callback.clone() else {
        return html! {};
    };
    let farmer = farmer.clone();
    let onclick = Callback::from(move |_: MouseEvent| callback.emit(farmer.clone()));
    html! { <button {onclick} {class}>{label}</button> }
}

/// Members of one family group with their areas, followed by the group's
/// cultivation for the current season.
#[function_component]
pub fn FamilyGroupTable(props: &Props) -> Html {
    let show_actions = props.on_edit_farmer.is_some()
        || props.on_edit_assets.is_some()
        || props.on_make_principal.is_some()
        || props.on_remove_farmer.is_some();

    let mut member_headers = vec![
        "Registration",
        "Type",
        "Name",
        "Status",
        "Branch",
        "Technician",
        "Owned",
        "Leased",
        "Total",
    ];
    if show_actions {
        member_headers.push("Actions");
    }

    let principal_registration = props
        .principal
        .as_ref()
        .map(|p| p.registration_number.clone());
    let principal_name = props
        .principal
        .as_ref()
        .map(|p| p.name.as_str())
        .unwrap_or("-");

    let small = "px-2 py-1 text-xs";
    let edit_class = "px-2 py-1 text-xs rounded-md border border-neutral-300 \
                      dark:border-neutral-600 hover:bg-neutral-100 \
                      dark:hover:bg-neutral-700";

    let rows = props.members.iter().map(|farmer| {
        let is_principal = principal_registration.as_ref() == Some(&farmer.registration_number);
        html! {
            <tr key={farmer.registration_number.to_string()} class={styles::TR}>
                <td class={styles::TD}>{farmer.registration_number.to_string()}</td>
                <td class={styles::TD}>
                    {farmer.farmer_type.as_ref().map(|t| t.id.to_string()).unwrap_or_else(|| "-".into())}
                </td>
                <td class={styles::TD}>
                    {&farmer.name}
                    if is_principal {
                        <span class="ml-2 text-xs font-semibold text-neutral-500">{"(principal)"}</span>
                    }
                </td>
                <td class={styles::TD}>{status_cell(farmer.status)}</td>
                <td class={styles::TD}>
                    {farmer.branch.as_ref().map(|b| b.name.as_str()).unwrap_or("No branch")}
                </td>
                <td class={styles::TD}>
                    {farmer.technician.as_ref().map(|t| t.display_name()).unwrap_or("No technician")}
                </td>
                <td class={styles::TD}>{format_area(farmer.owned_area)}</td>
                <td class={styles::TD}>{format_area(farmer.leased_area)}</td>
                <td class={styles::TD}>{format_area(farmer.total_area())}</td>
                if show_actions {
                    <td class={classes!(styles::TD, "flex", "gap-2")}>
                        {action_button("Edit", edit_class, &props.on_edit_farmer, farmer)}
                        {action_button("Assets", edit_class, &props.on_edit_assets, farmer)}
                        if !is_principal {
                            {action_button("Make principal", edit_class, &props.on_make_principal, farmer)}
                            {action_button("Remove", styles::BUTTON_DANGER, &props.on_remove_farmer, farmer)}
                        }
                    </td>
                }
            </tr>
        }
    });

    let on_add = props.on_add_farmer.clone().map(|cb| {
        Callback::from(move |_: MouseEvent| cb.emit(()))
    });
    let on_edit_cultivation = props.on_edit_cultivation.clone().map(|cb| {
        Callback::from(move |_: MouseEvent| cb.emit(()))
    });

    let crop_headers: Vec<AttrValue> = std::iter::once(AttrValue::Static("Season"))
        .chain(Crop::ALL.iter().map(|crop| AttrValue::Static(crop.label())))
        .collect();

    html! {
        <div class="space-y-3">
            <div class="flex flex-wrap items-baseline justify-between gap-2">
                <h3 class="font-semibold text-neutral-900 dark:text-neutral-100">
                    {format!("Family group #{} - Principal: {}", props.group_id, principal_name)}
                </h3>
                <span class={styles::MUTED}>
                    {format!("Total area: {}", format_area(farmers_total_area(&props.members)))}
                </span>
            </div>

            <SortableTable headers={member_headers.into_iter().map(AttrValue::Static).collect::<Vec<_>>()}>
                {for rows}
            </SortableTable>

            if let Some(onclick) = on_add {
                <div class="flex justify-end">
                    <button {onclick} class={classes!(styles::BUTTON_PRIMARY, small)}>
                        {"Add member"}
                    </button>
                </div>
            }

            <h4 class="font-semibold text-neutral-900 dark:text-neutral-100">{"Cultivation"}</h4>
            <SortableTable headers={crop_headers}>
                <tr class={styles::TR}>
                    <td class={styles::TD}>{CURRENT_SEASON}</td>
                    {for Crop::ALL.iter().map(|crop| html! {
                        <td class={styles::TD}>{format_area(props.cultivation.area(*crop))}</td>
                    })}
                </tr>
            </SortableTable>

            if let Some(onclick) = on_edit_cultivation {
                <div class="flex justify-end">
                    <button {onclick} class={styles::BUTTON_SECONDARY}>
                        {"Edit cultivation"}
                    </button>
                </div>
            }
        </div>
    }
}
