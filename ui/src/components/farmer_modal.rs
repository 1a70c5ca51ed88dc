use payloads::{
    FarmerStatus, Page, QueryParams,
    drafts::FarmerDraft,
    responses::{Branch, FARMER_TYPE_CHOICES, FamilyGroupListing, FamilyGroupSummary, Farmer, User},
};
use yew::prelude::*;

use super::form::{input_value, parse_area, parse_id, select_value};
use super::{Modal, SearchBox, styles};
use crate::contexts::toast::use_toast;
use crate::get_api_client;
use crate::hooks::{use_fetch_item, use_lazy_fetch};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// `None` registers a new farmer.
    pub farmer: Option<Farmer>,
    pub on_close: Callback<()>,
    /// Called after the server accepted the change.
    pub on_saved: Callback<()>,
}

/// Create or edit one farmer. Registration number, name and branch are
/// fixed once the farmer exists.
#[function_component]
pub fn FarmerModal(props: &Props) -> Html {
    let is_edit = props.farmer.is_some();
    let draft = use_state(|| {
        props
            .farmer
            .as_ref()
            .map(FarmerDraft::from_farmer)
            .unwrap_or_default()
    });
    let is_submitting = use_state(|| false);
    let group_search = use_state(|| None::<String>);
    let toast = use_toast();

    let technicians = use_lazy_fetch::<Vec<User>>();
    let branches = use_lazy_fetch::<Vec<Branch>>();
    {
        let fetch_technicians = technicians.fetch.clone();
        let fetch_branches = branches.fetch.clone();
        use_effect_with((), move |_| {
            fetch_technicians.emit(("/user/all".into(), "Failed to load technicians".into()));
            fetch_branches.emit(("/branch".into(), "Failed to load branches".into()));
        });
    }

    let group_results = use_fetch_item::<Page<FamilyGroupListing>>(
        "/family-group",
        QueryParams::new()
            .with("search", (*group_search).clone())
            .with("size", 10),
        group_search.is_some(),
    );

    let edit = |apply: fn(&mut FarmerDraft, String)| {
        let draft = draft.clone();
        move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        }
    };

    let on_registration = {
        let set = edit(|d, v| d.registration_number = v);
        Callback::from(move |e: InputEvent| set(input_value(&e)))
    };
    let on_name = {
        let set = edit(|d, v| d.name = v);
        Callback::from(move |e: InputEvent| set(input_value(&e)))
    };
    let on_owned = {
        let set = edit(|d, v| d.owned_area = parse_area(&v));
        Callback::from(move |e: InputEvent| set(input_value(&e)))
    };
    let on_leased = {
        let set = edit(|d, v| d.leased_area = parse_area(&v));
        Callback::from(move |e: InputEvent| set(input_value(&e)))
    };
    let on_status = {
        let set = edit(|d, v| {
            if let Some(status) = FarmerStatus::parse(&v) {
                d.status = status;
            }
        });
        Callback::from(move |e: Event| set(select_value(&e)))
    };
    let on_type = {
        let set = edit(|d, v| d.type_id = parse_id(&v));
        Callback::from(move |e: Event| set(select_value(&e)))
    };

    let on_technician = {
        let draft = draft.clone();
        let users = technicians.data.clone().unwrap_or_default();
        Callback::from(move |e: Event| {
            let id = parse_id(&select_value(&e));
            let mut next = (*draft).clone();
            next.technician = users.iter().find(|u| Some(u.id.0) == id).cloned();
            draft.set(next);
        })
    };

    let on_branch = {
        let draft = draft.clone();
        let list = branches.data.clone().unwrap_or_default();
        Callback::from(move |e: Event| {
            let id = parse_id(&select_value(&e));
            let mut next = (*draft).clone();
            next.branch = list.iter().find(|b| Some(b.id.0) == id).cloned();
            draft.set(next);
        })
    };

    let on_group_search = {
        let group_search = group_search.clone();
        Callback::from(move |filter: Option<String>| group_search.set(filter))
    };

    let pick_group = {
        let draft = draft.clone();
        let group_search = group_search.clone();
        move |listing: &FamilyGroupListing| {
            let summary = FamilyGroupSummary {
                id: listing.id,
                principal: listing.farmer.as_ref().map(Farmer::summary),
            };
            let draft = draft.clone();
            let group_search = group_search.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*draft).clone();
                next.family_group = Some(summary.clone());
                draft.set(next);
                group_search.set(None);
            })
        }
    };

    let clear_group = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*draft).clone();
            next.family_group = None;
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let is_submitting = is_submitting.clone();
        let toast = toast.clone();
        let on_saved = props.on_saved.clone();
        let original = props
            .farmer
            .as_ref()
            .map(|f| f.registration_number.clone());

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match draft.validate() {
                Ok(request) => request,
                Err(error) => {
                    toast.draft_error(&error);
                    return;
                }
            };

            let is_submitting = is_submitting.clone();
            let toast = toast.clone();
            let on_saved = on_saved.clone();
            let original = original.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);
                let client = get_api_client();
                let result = match &original {
                    Some(registration) => client
                        .update_farmer(registration, &request)
                        .await
                        .map(|_| ()),
                    None => client.create_farmer(&request).await,
                };
                is_submitting.set(false);

                match result {
                    Ok(()) => {
                        toast.success(if original.is_some() {
                            "Farmer updated."
                        } else {
                            "Farmer registered."
                        });
                        on_saved.emit(());
                    }
                    Err(e) => toast.client_error("Failed to save farmer", &e),
                }
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let title = if is_edit { "Edit farmer" } else { "New farmer" };
    let selected_technician = draft.technician.as_ref().map(|t| t.id);
    let selected_branch = draft.branch.as_ref().map(|b| b.id);

    html! {
        <Modal title={title} on_close={props.on_close.clone()} max_width="max-w-2xl">
            <form onsubmit={on_submit} class="space-y-4">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div>
                        <label class={styles::LABEL}>{"Registration number"}</label>
                        <input
                            type="text"
                            class={styles::INPUT}
                            value={draft.registration_number.clone()}
                            oninput={on_registration}
                            disabled={is_edit}
                        />
                    </div>
                    <div>
                        <label class={styles::LABEL}>{"Name"}</label>
                        <input
                            type="text"
                            class={styles::INPUT}
                            value={draft.name.clone()}
                            oninput={on_name}
                            disabled={is_edit}
                        />
                    </div>
                    <div>
                        <label class={styles::LABEL}>{"Status"}</label>
                        <select class={styles::INPUT} onchange={on_status}>
                            {for FarmerStatus::ALL.iter().map(|status| html! {
                                <option
                                    value={status.as_str()}
                                    selected={*status == draft.status}
                                >
                                    {status.label()}
                                </option>
                            })}
                        </select>
                    </div>
                    <div>
                        <label class={styles::LABEL}>{"Type"}</label>
                        <select class={styles::INPUT} onchange={on_type}>
                            <option value="" selected={draft.type_id.is_none()}>
                                {"No type"}
                            </option>
                            {for FARMER_TYPE_CHOICES.iter().map(|(id, label)| html! {
                                <option
                                    value={id.to_string()}
                                    selected={draft.type_id == Some(*id)}
                                >
                                    {*label}
                                </option>
                            })}
                        </select>
                    </div>
                    <div>
                        <label class={styles::LABEL}>{"Owned area (ha)"}</label>
                        <input
                            type="number"
                            step="0.01"
                            min="0"
                            class={styles::INPUT}
                            value={draft.owned_area.to_string()}
                            oninput={on_owned}
                        />
                    </div>
                    <div>
                        <label class={styles::LABEL}>{"Leased area (ha)"}</label>
                        <input
                            type="number"
                            step="0.01"
                            min="0"
                            class={styles::INPUT}
                            value={draft.leased_area.to_string()}
                            oninput={on_leased}
                        />
                    </div>
                    <div>
                        <label class={styles::LABEL}>{"Technician"}</label>
                        <select class={styles::INPUT} onchange={on_technician}>
                            <option value="" selected={selected_technician.is_none()}>
                                {"No technician"}
                            </option>
                            {for technicians.data.iter().flatten().map(|user| html! {
                                <option
                                    value={user.id.to_string()}
                                    selected={selected_technician == Some(user.id)}
                                >
                                    {user.display_name()}
                                </option>
                            })}
                        </select>
                    </div>
                    <div>
                        <label class={styles::LABEL}>{"Branch"}</label>
                        <select
                            class={styles::INPUT}
                            onchange={on_branch}
                            disabled={is_edit}
                        >
                            <option value="" selected={selected_branch.is_none()}>
                                {"No branch"}
                            </option>
                            {for branches.data.iter().flatten().map(|branch| html! {
                                <option
                                    value={branch.id.to_string()}
                                    selected={selected_branch == Some(branch.id)}
                                >
                                    {&branch.name}
                                </option>
                            })}
                        </select>
                    </div>
                </div>

                <div>
                    <label class={styles::LABEL}>{"Family group"}</label>
                    <div class="flex items-center justify-between gap-2 mb-2">
                        <span class="text-sm text-neutral-800 dark:text-neutral-200">
                            {match &draft.family_group {
                                Some(group) => format!(
                                    "#{} - {}",
                                    group.id,
                                    group.principal.as_ref().map(|p| p.name.as_str()).unwrap_or("-")
                                ),
                                None => "No family group".to_string(),
                            }}
                        </span>
                        if draft.family_group.is_some() {
                            <button type="button" onclick={clear_group} class={styles::LINK_BUTTON}>
                                {"Remove from group"}
                            </button>
                        }
                    </div>
                    <SearchBox placeholder="Search family groups..." on_search={on_group_search} />
                    {group_results.render("family groups", |page, _, _| html! {
                        <ul class="mt-2 max-h-40 overflow-y-auto divide-y \
                                   divide-neutral-100 dark:divide-neutral-700">
                            {for page.content.iter().map(|listing| html! {
                                <li key={listing.id.to_string()} class="flex justify-between items-center py-1">
                                    <span class="text-sm">
                                        {format!("#{} - {}", listing.id, listing.principal_name())}
                                    </span>
                                    <button
                                        type="button"
                                        onclick={pick_group(listing)}
                                        class={styles::LINK_BUTTON}
                                    >
                                        {"Select"}
                                    </button>
                                </li>
                            })}
                        </ul>
                    })}
                </div>

                <div class="flex justify-end gap-3 pt-2">
                    <button type="button" onclick={on_cancel} class={styles::BUTTON_SECONDARY}>
                        {"Cancel"}
                    </button>
                    <button type="submit" disabled={*is_submitting} class={styles::BUTTON_PRIMARY}>
                        if *is_submitting { {"Saving..."} } else { {"Save"} }
                    </button>
                </div>
            </form>
        </Modal>
    }
}
