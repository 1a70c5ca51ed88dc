use payloads::{
    FamilyGroupId, QueryParams,
    responses::{Cultivation, FamilyGroupListing, Farmer, FarmerSummary},
};
use yew::prelude::*;

use crate::components::sortable_table::headers;
use crate::components::{
    AddMemberModal, AssetModal, CreateFamilyGroupModal, CultivationModal,
    FamilyGroupPicker, FamilyGroupTable, FarmerModal, SortableTable, styles,
};
use crate::contexts::toast::use_toast;
use crate::get_api_client;
use crate::hooks::use_fetch_item;
use crate::utils::format_area;

#[derive(Debug, Clone, PartialEq)]
struct SelectedGroup {
    id: FamilyGroupId,
    principal: Option<FarmerSummary>,
}

impl From<FamilyGroupListing> for SelectedGroup {
    fn from(listing: FamilyGroupListing) -> Self {
        Self {
            id: listing.id,
            principal: listing.farmer.as_ref().map(Farmer::summary),
        }
    }
}

/// At most one dialog is open on this screen.
#[derive(Debug, Clone, PartialEq)]
enum Overlay {
    None,
    Picker,
    Create,
    EditFarmer(Farmer),
    Assets(Farmer),
    AddMember,
    Cultivation(Cultivation),
}

#[function_component]
pub fn FamilyGroupsPage() -> Html {
    let selected = use_state(|| None::<SelectedGroup>);
    let overlay = use_state(|| Overlay::None);
    let toast = use_toast();

    let group_id = selected.as_ref().map(|s| s.id);
    let endpoint = |prefix: &str| {
        group_id
            .map(|id| format!("{prefix}/{id}"))
            .unwrap_or_default()
    };

    let members = use_fetch_item::<Vec<Farmer>>(
        &endpoint("/farmer/by-family-group"),
        QueryParams::new(),
        group_id.is_some(),
    );
    let cultivation = use_fetch_item::<Cultivation>(
        &endpoint("/family-group/cultivation"),
        QueryParams::new(),
        group_id.is_some(),
    );
    let lessors = use_fetch_item::<Vec<Farmer>>(
        &endpoint("/family-group/lessors"),
        QueryParams::new(),
        group_id.is_some(),
    );

    let open = |next: Overlay| {
        let overlay = overlay.clone();
        Callback::from(move |_: MouseEvent| overlay.set(next.clone()))
    };

    let close = {
        let overlay = overlay.clone();
        Callback::from(move |_: ()| overlay.set(Overlay::None))
    };

    let on_select = {
        let selected = selected.clone();
        let overlay = overlay.clone();
        Callback::from(move |listing: FamilyGroupListing| {
            selected.set(Some(listing.into()));
            overlay.set(Overlay::None);
        })
    };

    let reload_members = {
        let refetch_members = members.refetch.clone();
        let refetch_lessors = lessors.refetch.clone();
        Callback::from(move |_: ()| {
            refetch_members.emit(());
            refetch_lessors.emit(());
        })
    };

    let on_farmer_saved = {
        let overlay = overlay.clone();
        let reload_members = reload_members.clone();
        Callback::from(move |_: ()| {
            overlay.set(Overlay::None);
            reload_members.emit(());
        })
    };

    let on_member_added = {
        let overlay = overlay.clone();
        let reload_members = reload_members.clone();
        Callback::from(move |_: ()| {
            overlay.set(Overlay::None);
            reload_members.emit(());
        })
    };

    let on_cultivation_saved = {
        let overlay = overlay.clone();
        let refetch = cultivation.refetch.clone();
        Callback::from(move |_: ()| {
            overlay.set(Overlay::None);
            refetch.emit(());
        })
    };

    let on_assets_changed = {
        let reload_members = reload_members.clone();
        Callback::from(move |_: Farmer| reload_members.emit(()))
    };

    let on_edit_farmer = {
        let overlay = overlay.clone();
        Callback::from(move |farmer: Farmer| overlay.set(Overlay::EditFarmer(farmer)))
    };

    let on_edit_assets = {
        let overlay = overlay.clone();
        Callback::from(move |farmer: Farmer| overlay.set(Overlay::Assets(farmer)))
    };

    let on_make_principal = {
        let selected = selected.clone();
        let toast = toast.clone();
        let reload_members = reload_members.clone();
        Callback::from(move |farmer: Farmer| {
            let Some(group) = (*selected).clone() else {
                return;
            };
            let selected = selected.clone();
            let toast = toast.clone();
            let reload_members = reload_members.clone();
            yew::platform::spawn_local(async move {
                let result = get_api_client()
                    .change_principal(group.id, &farmer.registration_number)
                    .await;
                match result {
                    Ok(()) => {
                        tracing::info!(
                            family_group_id = %group.id,
                            principal = %farmer.registration_number,
                            "principal changed"
                        );
                        selected.set(Some(SelectedGroup {
                            principal: Some(farmer.summary()),
                            ..group
                        }));
                        toast.success("Principal updated.");
                        reload_members.emit(());
                    }
                    Err(e) => toast.client_error("Failed to change principal", &e),
                }
            });
        })
    };

    let on_remove_farmer = {
        let toast = toast.clone();
        let reload_members = reload_members.clone();
        Callback::from(move |farmer: Farmer| {
            let Some(group_id) = group_id else {
                return;
            };
            let toast = toast.clone();
            let reload_members = reload_members.clone();
            yew::platform::spawn_local(async move {
                match get_api_client()
                    .remove_member(group_id, &farmer.registration_number)
                    .await
                {
                    Ok(()) => {
                        toast.success("Member removed.");
                        reload_members.emit(());
                    }
                    Err(e) => toast.client_error("Failed to remove member", &e),
                }
            });
        })
    };

    let on_add_farmer = {
        let overlay = overlay.clone();
        Callback::from(move |_: ()| overlay.set(Overlay::AddMember))
    };

    let current_cultivation = cultivation.data.as_ref().copied().unwrap_or_default();
    let on_edit_cultivation = {
        let overlay = overlay.clone();
        Callback::from(move |_: ()| overlay.set(Overlay::Cultivation(current_cultivation)))
    };

    let principal_name = selected
        .as_ref()
        .and_then(|s| s.principal.as_ref())
        .map(|p| p.name.clone())
        .unwrap_or_default();

    let group_view = match (*selected).clone() {
        None => html! {
            <p class={styles::MUTED}>{"Select or create a family group to see its members."}</p>
        },
        Some(group) => members.render("members", |members, _, _| html! {
            <FamilyGroupTable
                group_id={group.id}
                principal={group.principal.clone()}
                members={members.clone()}
                cultivation={current_cultivation}
                on_edit_farmer={on_edit_farmer.clone()}
                on_edit_assets={on_edit_assets.clone()}
                on_make_principal={on_make_principal.clone()}
                on_remove_farmer={on_remove_farmer.clone()}
                on_add_farmer={on_add_farmer.clone()}
                on_edit_cultivation={on_edit_cultivation.clone()}
            />
        }),
    };

    let lessors_view = lessors.render("lessors", |lessors, _, _| {
        if lessors.is_empty() {
            return html! {};
        }
        html! {
            <div class="space-y-2">
                <h4 class="font-semibold text-neutral-900 dark:text-neutral-100">{"Lessors"}</h4>
                <SortableTable headers={headers(&["Registration", "Name", "Owned"])}>
                    {for lessors.iter().map(|lessor| html! {
                        <tr key={lessor.registration_number.to_string()} class={styles::TR}>
                            <td class={styles::TD}>{lessor.registration_number.to_string()}</td>
                            <td class={styles::TD}>{&lessor.name}</td>
                            <td class={styles::TD}>{format_area(lessor.owned_area)}</td>
                        </tr>
                    })}
                </SortableTable>
            </div>
        }
    });

    let dialog = match (&*overlay, group_id) {
        (Overlay::None, _) => html! {},
        (Overlay::Picker, _) => html! {
            <FamilyGroupPicker {on_select} on_close={close.clone()} />
        },
        (Overlay::Create, _) => html! {
            <CreateFamilyGroupModal on_created={on_select} on_close={close.clone()} />
        },
        (Overlay::EditFarmer(farmer), _) => html! {
            <FarmerModal
                farmer={Some(farmer.clone())}
                on_close={close.clone()}
                on_saved={on_farmer_saved}
            />
        },
        (Overlay::Assets(farmer), _) => html! {
            <AssetModal
                farmer={farmer.clone()}
                on_close={close.clone()}
                on_farmer_updated={on_assets_changed}
            />
        },
        (Overlay::AddMember, Some(group_id)) => html! {
            <AddMemberModal {group_id} on_added={on_member_added} on_close={close.clone()} />
        },
        (Overlay::Cultivation(current), Some(group_id)) => html! {
            <CultivationModal
                {group_id}
                cultivation={*current}
                on_saved={on_cultivation_saved}
                on_close={close.clone()}
            />
        },
        (Overlay::AddMember | Overlay::Cultivation(_), None) => html! {},
    };

    html! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-end gap-3">
                <div class="flex-1 min-w-[16rem]">
                    <label class={styles::LABEL}>{"Family group"}</label>
                    <input
                        type="text"
                        readonly=true
                        class={styles::INPUT}
                        placeholder="No family group selected"
                        value={principal_name}
                    />
                </div>
                <button onclick={open(Overlay::Picker)} class={styles::BUTTON_SECONDARY}>
                    {"Select"}
                </button>
                <button onclick={open(Overlay::Create)} class={styles::BUTTON_PRIMARY}>
                    {"New family group"}
                </button>
            </div>

            {group_view}
            {lessors_view}
            {dialog}
        </div>
    }
}
