use payloads::{
    RegistrationNumber,
    drafts::FamilyGroupDraft,
    responses::{FamilyGroupListing, Farmer},
};
use yew::prelude::*;

use super::form::select_value;
use super::{Modal, Spinner, styles};
use crate::contexts::toast::use_toast;
use crate::get_api_client;
use crate::hooks::use_lazy_fetch;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_created: Callback<FamilyGroupListing>,
    pub on_close: Callback<()>,
}

/// Form a new group out of farmers that are not in any group yet.
#[function_component]
pub fn CreateFamilyGroupModal(props: &Props) -> Html {
    let available = use_lazy_fetch::<Vec<Farmer>>();
    let draft = use_state(FamilyGroupDraft::default);
    let is_submitting = use_state(|| false);
    let toast = use_toast();

    {
        let fetch = available.fetch.clone();
        use_effect_with((), move |_| {
            fetch.emit((
                "/farmer/avaible".into(),
                "Failed to load available farmers".into(),
            ));
        });
    }

    let farmers = available.data.clone().unwrap_or_default();

    let on_principal = {
        let draft = draft.clone();
        let farmers = farmers.clone();
        Callback::from(move |e: Event| {
            let value = RegistrationNumber(select_value(&e));
            let mut next = (*draft).clone();
            next.principal = farmers
                .iter()
                .find(|f| f.registration_number == value)
                .map(Farmer::summary);
            draft.set(next);
        })
    };

    let toggle_member = |farmer: &Farmer| {
        let draft = draft.clone();
        let summary = farmer.summary();
        Callback::from(move |_: Event| {
            let mut next = (*draft).clone();
            next.toggle_member(summary.clone());
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let is_submitting = is_submitting.clone();
        let on_created = props.on_created.clone();

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
            let on_created = on_created.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);
                let result = get_api_client().create_family_group(&request).await;
                is_submitting.set(false);
                match result {
                    Ok(listing) => {
                        tracing::info!(family_group_id = %listing.id, "family group created");
                        toast.success("Family group created.");
                        on_created.emit(listing);
                    }
                    Err(e) => toast.client_error("Failed to create family group", &e),
                }
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let principal = draft
        .principal
        .as_ref()
        .map(|p| p.registration_number.clone());

    let body = if available.is_loading && available.data.is_none() {
        html! { <div class="py-8"><Spinner label="Loading farmers..." /></div> }
    } else if farmers.is_empty() {
        html! { <p class={styles::MUTED}>{"Every farmer already belongs to a family group."}</p> }
    } else {
        html! {
            <>
                <div>
                    <label class={styles::LABEL}>{"Principal"}</label>
                    <select class={styles::INPUT} onchange={on_principal}>
                        <option value="" selected={principal.is_none()}>{"Select a farmer"}</option>
                        {for farmers.iter().map(|f| html! {
                            <option
                                value={f.registration_number.to_string()}
                                selected={principal.as_ref() == Some(&f.registration_number)}
                            >
                                {format!("{} - {}", f.registration_number, f.name)}
                            </option>
                        })}
                    </select>
                </div>
                <fieldset>
                    <legend class={styles::LABEL}>{"Members"}</legend>
                    <ul class="max-h-64 overflow-y-auto space-y-1">
                        {for farmers
                            .iter()
                            .filter(|f| principal.as_ref() != Some(&f.registration_number))
                            .map(|f| {
                                let checked = draft
                                    .members
                                    .iter()
                                    .any(|m| m.registration_number == f.registration_number);
                                html! {
                                    <li key={f.registration_number.to_string()}>
                                        <label class="flex items-center gap-2 text-sm">
                                            <input type="checkbox" {checked} onchange={toggle_member(f)} />
                                            {format!("{} - {}", f.registration_number, f.name)}
                                        </label>
                                    </li>
                                }
                            })}
                    </ul>
                </fieldset>
            </>
        }
    };

    html! {
        <Modal title="New family group" on_close={props.on_close.clone()} max_width="max-w-2xl">
            <form onsubmit={on_submit} class="space-y-4">
                {body}
                <div class="flex justify-end gap-3">
                    <button type="button" onclick={on_cancel} class={styles::BUTTON_SECONDARY}>
                        {"Cancel"}
                    </button>
                    <button type="submit" disabled={*is_submitting} class={styles::BUTTON_PRIMARY}>
                        {"Create"}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
