use payloads::{
    QueryParams, Role,
    drafts::UserDraft,
    responses::{Branch, User},
};
use yew::prelude::*;

use super::Dialog;
use crate::components::form::{input_value, parse_id, select_value};
use crate::components::sortable_table::headers;
use crate::components::{Modal, Pagination, SortableTable, styles};
use crate::contexts::toast::use_toast;
use crate::get_api_client;
use crate::hooks::{use_lazy_fetch, use_paginated_fetch};
use crate::paging::DEFAULT_PAGE_SIZE;

#[derive(Properties, PartialEq)]
struct UserFormProps {
    user: Option<User>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
}

#[function_component]
fn UserForm(props: &UserFormProps) -> Html {
    let draft = use_state(|| {
        props
            .user
            .as_ref()
            .map(UserDraft::from_user)
            .unwrap_or_default()
    });
    let is_submitting = use_state(|| false);
    let toast = use_toast();

    let branches = use_lazy_fetch::<Vec<Branch>>();
    {
        let fetch = branches.fetch.clone();
        use_effect_with((), move |_| {
            fetch.emit(("/branch".into(), "Failed to load branches".into()));
        });
    }

    let edit = |apply: fn(&mut UserDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            apply(&mut next, input_value(&e));
            draft.set(next);
        })
    };
    let on_username = edit(|d, v| d.username = v);
    let on_name = edit(|d, v| d.name = v);
    let on_password = edit(|d, v| d.password = v);

    let toggle_role = |role: Role| {
        let draft = draft.clone();
        Callback::from(move |_: Event| {
            let mut next = (*draft).clone();
            next.toggle_role(role.as_str());
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
                    Some(id) => client.update_user(id, &request).await,
                    None => client.register_user(&request).await,
                };
                is_submitting.set(false);

                match result {
                    Ok(()) => {
                        toast.success("User saved.");
                        on_saved.emit(());
                    }
                    Err(e) => toast.client_error("Failed to save user", &e),
                }
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let is_edit = draft.id.is_some();
    let title = if is_edit { "Edit user" } else { "New user" };
    let selected_branch = draft.branch.as_ref().map(|b| b.id);

    html! {
        <Modal {title} on_close={props.on_close.clone()}>
            <form onsubmit={on_submit} class="space-y-4">
                <div>
                    <label class={styles::LABEL}>{"Username"}</label>
                    <input type="text" class={styles::INPUT}
                        value={draft.username.clone()} oninput={on_username} />
                </div>
                <div>
                    <label class={styles::LABEL}>{"Name"}</label>
                    <input type="text" class={styles::INPUT}
                        value={draft.name.clone()} oninput={on_name} />
                </div>
                <div>
                    <label class={styles::LABEL}>
                        {if is_edit { "New password (leave empty to keep)" } else { "Password" }}
                    </label>
                    <input type="password" class={styles::INPUT} autocomplete="new-password"
                        value={draft.password.clone()} oninput={on_password} />
                </div>
                <fieldset>
                    <legend class={styles::LABEL}>{"Roles"}</legend>
                    <div class="flex gap-6">
                        {for Role::ALL.iter().map(|role| html! {
                            <label class="flex items-center gap-2 text-sm">
                                <input
                                    type="checkbox"
                                    checked={draft.roles.iter().any(|r| r == role.as_str())}
                                    onchange={toggle_role(*role)}
                                />
                                {role.label()}
                            </label>
                        })}
                    </div>
                </fieldset>
                <div>
                    <label class={styles::LABEL}>{"Branch"}</label>
                    <select class={styles::INPUT} onchange={on_branch}>
                        <option value="" selected={selected_branch.is_none()}>{"No branch"}</option>
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
pub fn UsersPage() -> Html {
    let users = use_paginated_fetch::<User>("/user", DEFAULT_PAGE_SIZE, QueryParams::new());
    let dialog = use_state(|| Dialog::<User>::Closed);

    {
        let fetch_page = users.fetch_page.clone();
        use_effect_with((), move |_| fetch_page.emit((1, None)));
    }

    let on_page_change = {
        let fetch_page = users.fetch_page.clone();
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
        let fetch_page = users.fetch_page.clone();
        let current_page = users.current_page;
        Callback::from(move |_: ()| {
            dialog.set(Dialog::Closed);
            fetch_page.emit((current_page, None));
        })
    };

    let edit = |user: &User| {
        let dialog = dialog.clone();
        let user = user.clone();
        Callback::from(move |_: MouseEvent| dialog.set(Dialog::Edit(user.clone())))
    };

    html! {
        <div class="space-y-4">
            <div>
                <button onclick={on_create} class={styles::BUTTON_PRIMARY}>{"New user"}</button>
            </div>

            <Pagination
                current_page={users.current_page}
                total_pages={users.total_pages}
                items_per_page={users.page_size}
                {on_page_change}
                on_items_per_page_change={users.set_page_size.clone()}
                is_loading={users.is_loading}
            >
                <SortableTable headers={headers(&["Actions", "Username", "Name", "Roles", "Branch"])}>
                    {for users.data.iter().map(|user| html! {
                        <tr key={user.id.to_string()} class={styles::TR}>
                            <td class={styles::TD}>
                                <button onclick={edit(user)} class={styles::LINK_BUTTON}>{"Edit"}</button>
                            </td>
                            <td class={styles::TD}>{&user.username}</td>
                            <td class={styles::TD}>{user.name.as_deref().unwrap_or("-")}</td>
                            <td class={styles::TD}>
                                {user.roles.iter().map(|r| Role::label_for(r)).collect::<Vec<_>>().join(", ")}
                            </td>
                            <td class={styles::TD}>
                                {user.branch.as_ref().map(|b| b.name.as_str()).unwrap_or("No branch")}
                            </td>
                        </tr>
                    })}
                </SortableTable>
            </Pagination>

            {match &*dialog {
                Dialog::Closed => html! {},
                Dialog::Create => html! {
                    <UserForm user={None::<User>} {on_close} {on_saved} />
                },
                Dialog::Edit(user) => html! {
                    <UserForm user={Some(user.clone())} {on_close} {on_saved} />
                },
            }}
        </div>
    }
}
