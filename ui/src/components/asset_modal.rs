use payloads::{
    AssetId, AssetType, Page, QueryParams,
    drafts::AssetDraft,
    responses::{Farmer, FarmerSummary},
};
use yew::prelude::*;

use super::form::input_value;
use super::sortable_table::headers;
use super::{Modal, SearchBox, SortableTable, styles};
use crate::contexts::toast::use_toast;
use crate::get_api_client;
use crate::hooks::{use_fetch_item, use_mounted};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub farmer: Farmer,
    pub on_close: Callback<()>,
    /// Fresh copy of the farmer after each asset change.
    pub on_farmer_updated: Callback<Farmer>,
}

fn farmer_label(farmer: &FarmerSummary) -> String {
    format!("{} - {}", farmer.registration_number, farmer.name)
}

/// Ownership and lease edges of one farmer. New assets are always owned by
/// this farmer; picking a lessee turns the draft into a lease.
#[function_component]
pub fn AssetModal(props: &Props) -> Html {
    let farmer = use_state(|| props.farmer.clone());
    let draft = use_state(|| AssetDraft::owned_by(props.farmer.summary()));
    let lessee_search = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);
    let mounted = use_mounted();
    let toast = use_toast();

    let lessee_results = use_fetch_item::<Page<Farmer>>(
        "/farmer",
        QueryParams::new()
            .with("value", (*lessee_search).clone())
            .with("size", 10),
        lessee_search.is_some(),
    );

    // Reload the farmer so both tables reflect the server.
    let reload = {
        let farmer = farmer.clone();
        let on_farmer_updated = props.on_farmer_updated.clone();
        let toast = toast.clone();
        let mounted = mounted.clone();
        let registration = props.farmer.registration_number.clone();

        Callback::from(move |_: ()| {
            let farmer = farmer.clone();
            let on_farmer_updated = on_farmer_updated.clone();
            let toast = toast.clone();
            let mounted = mounted.clone();
            let registration = registration.clone();

            yew::platform::spawn_local(async move {
                match get_api_client().get_farmer(&registration).await {
                    Ok(updated) => {
                        if mounted.get() {
                            farmer.set(updated.clone());
                        }
                        on_farmer_updated.emit(updated);
                    }
                    Err(e) => toast.client_error("Failed to reload farmer", &e),
                }
            });
        })
    };

    let on_description = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.description = input_value(&e);
            draft.set(next);
        })
    };

    let on_lessee_search = {
        let lessee_search = lessee_search.clone();
        Callback::from(move |filter: Option<String>| lessee_search.set(filter))
    };

    let pick_lessee = {
        let draft = draft.clone();
        let lessee_search = lessee_search.clone();
        move |lessee: FarmerSummary| {
            let draft = draft.clone();
            let lessee_search = lessee_search.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*draft).clone();
                next.set_asset_type(AssetType::Leased);
                next.set_counterparty(Some(lessee.clone()));
                draft.set(next);
                lessee_search.set(None);
            })
        }
    };

    let clear_lessee = {
        let draft = draft.clone();
        let owner = props.farmer.summary();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*draft).clone();
            next.set_asset_type(AssetType::Owned);
            next.set_counterparty(Some(owner.clone()));
            draft.set(next);
        })
    };

    let on_save = {
        let draft = draft.clone();
        let is_submitting = is_submitting.clone();
        let toast = toast.clone();
        let reload = reload.clone();
        let owner = props.farmer.summary();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut request = match draft.validate() {
                Ok(request) => request,
                Err(error) => {
                    toast.draft_error(&error);
                    return;
                }
            };
            // The backend records the owner on leases as well.
            request.owner_registration_number = Some(owner.registration_number.clone());

            let draft = draft.clone();
            let is_submitting = is_submitting.clone();
            let toast = toast.clone();
            let reload = reload.clone();
            let owner = owner.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);
                let result = get_api_client().create_asset(&request).await;
                is_submitting.set(false);
                match result {
                    Ok(()) => {
                        toast.success("Asset added.");
                        draft.set(AssetDraft::owned_by(owner));
                        reload.emit(());
                    }
                    Err(e) => toast.client_error("Failed to add asset", &e),
                }
            });
        })
    };

    let remove_asset = {
        let toast = toast.clone();
        let reload = reload.clone();
        move |asset_id: AssetId| {
            let toast = toast.clone();
            let reload = reload.clone();
            Callback::from(move |_: MouseEvent| {
                let toast = toast.clone();
                let reload = reload.clone();
                yew::platform::spawn_local(async move {
                    match get_api_client().delete_asset(asset_id).await {
                        Ok(()) => {
                            toast.success("Asset removed.");
                            reload.emit(());
                        }
                        Err(e) => toast.client_error("Failed to remove asset", &e),
                    }
                });
            })
        }
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let owned_rows = if farmer.owned_assets.is_empty() {
        html! {
            <tr><td colspan="4" class={styles::TD}>{"No owned assets."}</td></tr>
        }
    } else {
        html! {
            {for farmer.owned_assets.iter().map(|asset| html! {
                <tr key={asset.id.to_string()} class={styles::TR}>
                    <td class={styles::TD}>{asset.id.to_string()}</td>
                    <td class={styles::TD}>{&asset.description}</td>
                    <td class={styles::TD}>
                        {asset.leased_to.as_ref().map(farmer_label).unwrap_or_else(|| "-".into())}
                    </td>
                    <td class={styles::TD}>
                        <button onclick={remove_asset(asset.id)} class={styles::BUTTON_DANGER}>
                            {"Remove"}
                        </button>
                    </td>
                </tr>
            })}
        }
    };

    let leased_rows = if farmer.leased_assets.is_empty() {
        html! {
            <tr><td colspan="3" class={styles::TD}>{"No leased assets."}</td></tr>
        }
    } else {
        html! {
            {for farmer.leased_assets.iter().map(|asset| html! {
                <tr key={asset.id.to_string()} class={styles::TR}>
                    <td class={styles::TD}>{asset.id.to_string()}</td>
                    <td class={styles::TD}>{&asset.description}</td>
                    <td class={styles::TD}>
                        {asset.owner.as_ref().map(farmer_label).unwrap_or_else(|| "-".into())}
                    </td>
                </tr>
            })}
        }
    };

    html! {
        <Modal
            title={format!("Assets of {}", farmer.name)}
            on_close={props.on_close.clone()}
            max_width="max-w-4xl"
        >
            <div class="space-y-6">
                <section class="space-y-2">
                    <h4 class="font-semibold text-neutral-900 dark:text-neutral-100">
                        {"Owned assets"}
                    </h4>
                    <SortableTable headers={headers(&["Id", "Description", "Leased to", "Actions"])}>
                        {owned_rows}
                    </SortableTable>
                </section>

                <form onsubmit={on_save} class="space-y-3 p-4 rounded-md border \
                                                 border-neutral-200 dark:border-neutral-700">
                    <h4 class="font-semibold text-neutral-900 dark:text-neutral-100">
                        {"New asset"}
                    </h4>
                    <div>
                        <label class={styles::LABEL}>{"Description"}</label>
                        <input
                            type="text"
                            class={styles::INPUT}
                            value={draft.description.clone()}
                            oninput={on_description}
                        />
                    </div>
                    <div>
                        <label class={styles::LABEL}>{"Leased to"}</label>
                        <div class="flex items-center justify-between mb-2">
                            <span class="text-sm">
                                {match (draft.asset_type(), draft.leased_to()) {
                                    (AssetType::Leased, Some(lessee)) => farmer_label(lessee),
                                    _ => "Not leased".to_string(),
                                }}
                            </span>
                            if draft.leased_to().is_some() {
                                <button type="button" onclick={clear_lessee} class={styles::LINK_BUTTON}>
                                    {"Clear"}
                                </button>
                            }
                        </div>
                        <SearchBox placeholder="Search farmers..." on_search={on_lessee_search} />
                        {lessee_results.render("farmers", |page, _, _| html! {
                            <ul class="mt-2 max-h-40 overflow-y-auto divide-y \
                                       divide-neutral-100 dark:divide-neutral-700">
                                {for page.content.iter()
                                    .filter(|f| f.registration_number != props.farmer.registration_number)
                                    .map(|f| html! {
                                        <li key={f.registration_number.to_string()}
                                            class="flex justify-between items-center py-1">
                                            <span class="text-sm">{farmer_label(&f.summary())}</span>
                                            <button
                                                type="button"
                                                onclick={pick_lessee(f.summary())}
                                                class={styles::LINK_BUTTON}
                                            >
                                                {"Select"}
                                            </button>
                                        </li>
                                    })}
                            </ul>
                        })}
                    </div>
                    <div class="flex justify-end">
                        <button type="submit" disabled={*is_submitting} class={styles::BUTTON_PRIMARY}>
                            if *is_submitting { {"Saving..."} } else { {"Save asset"} }
                        </button>
                    </div>
                </form>

                <section class="space-y-2">
                    <h4 class="font-semibold text-neutral-900 dark:text-neutral-100">
                        {"Leased assets"}
                    </h4>
                    <SortableTable headers={headers(&["Id", "Description", "Lessor"])}>
                        {leased_rows}
                    </SortableTable>
                </section>

                <div class="flex justify-end">
                    <button onclick={on_close_click} class={styles::BUTTON_SECONDARY}>
                        {"Close"}
                    </button>
                </div>
            </div>
        </Modal>
    }
}
