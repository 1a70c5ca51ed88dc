use payloads::{FamilyGroupId, RegistrationNumber, responses::Farmer};
use yew::prelude::*;

use super::form::input_value;
use super::sortable_table::headers;
use super::{Modal, SortableTable, Spinner, styles};
use crate::contexts::toast::use_toast;
use crate::get_api_client;
use crate::hooks::use_lazy_fetch;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub group_id: FamilyGroupId,
    pub on_added: Callback<()>,
    pub on_close: Callback<()>,
}

/// Case-insensitive match on name or registration number. Blank text
/// matches everything.
fn matches(farmer: &Farmer, text: &str) -> bool {
    let text = text.trim().to_lowercase();
    text.is_empty()
        || farmer.name.to_lowercase().contains(&text)
        || farmer.registration_number.0.contains(&text)
}

/// Add a farmer that is not yet in any group to `group_id`.
#[function_component]
pub fn AddMemberModal(props: &Props) -> Html {
    let available = use_lazy_fetch::<Vec<Farmer>>();
    let filter = use_state(String::new);
    let toast = use_toast();

    let reload = {
        let fetch = available.fetch.clone();
        Callback::from(move |_: ()| {
            fetch.emit((
                "/farmer/avaible".into(),
                "Failed to load available farmers".into(),
            ));
        })
    };
    {
        let reload = reload.clone();
        use_effect_with((), move |_| reload.emit(()));
    }

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| filter.set(input_value(&e)))
    };

    let add = |registration: RegistrationNumber| {
        let toast = toast.clone();
        let on_added = props.on_added.clone();
        let reload = reload.clone();
        let group_id = props.group_id;
        Callback::from(move |_: MouseEvent| {
            let toast = toast.clone();
            let on_added = on_added.clone();
            let reload = reload.clone();
            let registration = registration.clone();
            yew::platform::spawn_local(async move {
                match get_api_client().add_member(group_id, &registration).await {
                    Ok(()) => {
                        toast.success("Member added.");
                        reload.emit(());
                        on_added.emit(());
                    }
                    Err(e) => toast.client_error("Failed to add member", &e),
                }
            });
        })
    };

    let body = match &available.data {
        None => html! { <div class="py-8"><Spinner /></div> },
        Some(farmers) => html! {
            <SortableTable headers={headers(&["Registration", "Name", "Actions"])}>
                {for farmers.iter().filter(|f| matches(f, &filter)).map(|f| html! {
                    <tr key={f.registration_number.to_string()} class={styles::TR}>
                        <td class={styles::TD}>{f.registration_number.to_string()}</td>
                        <td class={styles::TD}>{&f.name}</td>
                        <td class={styles::TD}>
                            <button
                                onclick={add(f.registration_number.clone())}
                                class={styles::LINK_BUTTON}
                            >
                                {"Add"}
                            </button>
                        </td>
                    </tr>
                })}
            </SortableTable>
        },
    };

    html! {
        <Modal title="Add member" on_close={props.on_close.clone()} max_width="max-w-2xl">
            <div class="space-y-3">
                <input
                    type="search"
                    class={styles::INPUT}
                    placeholder="Filter by name or registration..."
                    value={(*filter).clone()}
                    oninput={on_filter}
                />
                {body}
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::FarmerStatus;

    fn farmer(reg: &str, name: &str) -> Farmer {
        Farmer {
            registration_number: reg.into(),
            name: name.into(),
            status: FarmerStatus::Active,
            technician: None,
            branch: None,
            family_group: None,
            farmer_type: None,
            owned_area: 0.0,
            leased_area: 0.0,
            owned_assets: vec![],
            leased_assets: vec![],
        }
    }

    #[test]
    fn filter_matches_name_or_registration() {
        let ana = farmer("1042", "Ana Souza");
        assert!(matches(&ana, ""));
        assert!(matches(&ana, "souza"));
        assert!(matches(&ana, " 104 "));
        assert!(!matches(&ana, "maria"));
    }
}
