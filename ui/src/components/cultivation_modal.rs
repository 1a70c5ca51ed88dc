use payloads::{
    FamilyGroupId,
    drafts::validate_cultivation,
    responses::{Crop, Cultivation},
};
use yew::prelude::*;

use super::form::{input_value, parse_area};
use super::{Modal, styles};
use crate::contexts::toast::use_toast;
use crate::get_api_client;
use crate::hooks::use_mounted;
use crate::utils::format_area;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub group_id: FamilyGroupId,
    pub cultivation: Cultivation,
    pub on_saved: Callback<()>,
    pub on_close: Callback<()>,
}

/// Edit the six crop areas of a group. The server rejects totals above the
/// group's area and its message is shown as is.
#[function_component]
pub fn CultivationModal(props: &Props) -> Html {
    let draft = use_state(|| props.cultivation);
    let free_area = use_state(|| None::<f64>);
    let is_submitting = use_state(|| false);
    let mounted = use_mounted();
    let toast = use_toast();

    {
        let free_area = free_area.clone();
        let toast = toast.clone();
        use_effect_with(props.group_id, move |group_id| {
            let group_id = *group_id;
            yew::platform::spawn_local(async move {
                match get_api_client().free_area(group_id).await {
                    Ok(area) if mounted.get() => free_area.set(Some(area)),
                    Ok(_) => {}
                    Err(e) => toast.client_error("Failed to load free area", &e),
                }
            });
        });
    }

    let on_area = |crop: Crop| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = *draft;
            next.set_area(crop, parse_area(&input_value(&e)));
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let is_submitting = is_submitting.clone();
        let on_saved = props.on_saved.clone();
        let group_id = props.group_id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let cultivation = match validate_cultivation(&draft) {
                Ok(cultivation) => cultivation,
                Err(error) => {
                    toast.draft_error(&error);
                    return;
                }
            };

            let is_submitting = is_submitting.clone();
            let toast = toast.clone();
            let on_saved = on_saved.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);
                let result = get_api_client()
                    .update_cultivation(group_id, &cultivation)
                    .await;
                is_submitting.set(false);
                match result {
                    Ok(()) => {
                        toast.success("Cultivation updated.");
                        on_saved.emit(());
                    }
                    Err(e) => toast.client_error("Failed to update cultivation", &e),
                }
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <Modal title="Edit cultivation" on_close={props.on_close.clone()} max_width="max-w-lg">
            <form onsubmit={on_submit} class="space-y-4">
                if let Some(area) = *free_area {
                    <p class={styles::MUTED}>
                        {format!("Area available for cultivation: {}", format_area(area))}
                    </p>
                }
                <div class="grid grid-cols-2 gap-4">
                    {for Crop::ALL.iter().map(|crop| html! {
                        <div key={crop.label()}>
                            <label class={styles::LABEL}>{format!("{} (ha)", crop.label())}</label>
                            <input
                                type="number"
                                step="0.01"
                                min="0"
                                class={styles::INPUT}
                                value={draft.area(*crop).to_string()}
                                oninput={on_area(*crop)}
                            />
                        </div>
                    })}
                </div>
                <div class="flex justify-end gap-3">
                    <button type="button" onclick={on_cancel} class={styles::BUTTON_SECONDARY}>
                        {"Cancel"}
                    </button>
                    <button type="submit" disabled={*is_submitting} class={styles::BUTTON_PRIMARY}>
                        {"Save"}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
