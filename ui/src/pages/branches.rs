use payloads::{QueryParams, drafts::BranchDraft, responses::Branch};
use yew::prelude::*;

use super::Dialog;
use crate::components::form::input_value;
use crate::components::sortable_table::headers;
use crate::components::{Modal, SortableTable, styles};
use crate::contexts::toast::use_toast;
use crate::get_api_client;
use crate::hooks::use_fetch_item;

#[derive(Properties, PartialEq)]
struct BranchFormProps {
    branch: Option<Branch>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
}

#[function_component]
fn BranchForm(props: &BranchFormProps) -> Html {
    let draft = use_state(|| {
        props
            .branch
            .as_ref()
            .map(BranchDraft::from_branch)
            .unwrap_or_default()
    });
    let is_submitting = use_state(|| false);
    let toast = use_toast();

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.name = input_value(&e);
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let is_submitting = is_submitting.clone();
        let on_saved = props.on_saved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match draft.validate() {
                Ok(request) => request,
                Err(error) => {
                    toast.draft_error(&error);
                    return;
                }
            };

            let id = draft.id;
            let is_submitting = is_submitting.clone();
            let toast = toast.clone();
            let on_saved = on_saved.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);
                let client = get_api_client();
                let result = match id {
                    Some(id) => client.update_branch(id, &request).await,
                    None => client.create_branch(&request).await,
                };
                is_submitting.set(false);

                match result {
                    Ok(branch) => {
                        tracing::info!(branch_id = %branch.id, "branch saved");
                        toast.success("Branch saved.");
                        on_saved.emit(());
                    }
                    Err(e) => toast.client_error("Failed to save branch", &e),
                }
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let title = if draft.id.is_some() { "Edit branch" } else { "New branch" };

    html! {
        <Modal {title} on_close={props.on_close.clone()}>
            <form onsubmit={on_submit} class="space-y-4">
                if let Some(id) = draft.id {
                    <div>
                        <label class={styles::LABEL}>{"ID"}</label>
                        <input type="text" class={styles::INPUT} value={id.to_string()} disabled={true} />
                    </div>
                }
                <div>
                    <label class={styles::LABEL}>{"Name"}</label>
                    <input
                        type="text"
                        class={styles::INPUT}
                        value={draft.name.clone()}
                        oninput={on_name}
                    />
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

#[function_component]
pub fn BranchesPage() -> Html {
    let branches = use_fetch_item::<Vec<Branch>>("/branch", QueryParams::new(), true);
    let dialog = use_state(|| Dialog::<Branch>::Closed);

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
        let refetch = branches.refetch.clone();
        Callback::from(move |_: ()| {
            dialog.set(Dialog::Closed);
            refetch.emit(());
        })
    };

    let edit = |branch: &Branch| {
        let dialog = dialog.clone();
        let branch = branch.clone();
        Callback::from(move |_: MouseEvent| dialog.set(Dialog::Edit(branch.clone())))
    };

    html! {
        <div class="space-y-4">
            <div>
                <button onclick={on_create} class={styles::BUTTON_PRIMARY}>{"New branch"}</button>
            </div>

            {branches.render("branches", |list, _, _| html! {
                <SortableTable headers={headers(&["Actions", "ID", "Name"])}>
                    {for list.iter().map(|branch| html! {
                        <tr key={branch.id.to_string()} class={styles::TR}>
                            <td class={styles::TD}>
                                <button onclick={edit(branch)} class={styles::LINK_BUTTON}>{"Edit"}</button>
                            </td>
                            <td class={styles::TD}>{branch.id.to_string()}</td>
                            <td class={styles::TD}>{&branch.name}</td>
                        </tr>
                    })}
                </SortableTable>
            })}

            {match &*dialog {
                Dialog::Closed => html! {},
                Dialog::Create => html! {
                    <BranchForm branch={None::<Branch>} {on_close} {on_saved} />
                },
                Dialog::Edit(branch) => html! {
                    <BranchForm branch={Some(branch.clone())} {on_close} {on_saved} />
                },
            }}
        </div>
    }
}
