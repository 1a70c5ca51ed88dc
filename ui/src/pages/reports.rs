use payloads::{
    BranchId, FamilyGroupId, QueryParams, UserId,
    responses::{
        Branch, FARMER_TYPE_CHOICES, FamilyGroupMembers, Farmer, User, farmers_total_area,
    },
};
use yew::prelude::*;

use super::Dialog;
use crate::components::form::{parse_id, select_value};
use crate::components::sortable_table::headers;
use crate::components::status_dot::status_cell;
use crate::components::{FamilyGroupTable, FarmerModal, Pagination, SearchBox, SortableTable, styles};
use crate::contexts::toast::use_toast;
use crate::get_api_client;
use crate::hooks::{use_fetch_item, use_lazy_fetch, use_paginated_fetch};
use crate::paging::{DEFAULT_PAGE_SIZE, format_count};
use crate::utils::{SortState, format_area};

#[derive(Debug, Clone, Copy, PartialEq)]
enum ReportMode {
    ByTechnician,
    ByBranch,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ReportKind {
    Farmer,
    FamilyGroup,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TechnicianChoice {
    /// Farmers with no technician assigned.
    Unassigned,
    User(UserId),
}

const FARMER_COLUMNS: [&str; 10] = [
    "Registration",
    "Type",
    "Name",
    "Status",
    "Branch",
    "Technician",
    "Owned",
    "Leased",
    "Total",
    "Actions",
];

/// Backend field behind a sortable farmer column.
fn sort_field(label: &str) -> Option<&'static str> {
    match label {
        "Registration" => Some("registrationNumber"),
        "Type" => Some("type"),
        "Name" => Some("name"),
        "Status" => Some("status"),
        "Technician" => Some("technician.name"),
        "Branch" => Some("branch"),
        "Owned" => Some("ownedArea"),
        "Leased" => Some("leasedArea"),
        "Total" => Some("totalArea"),
        _ => None,
    }
}

/// Endpoint and fixed filters of the farmer report, once enough has been
/// picked to run it.
fn farmer_report_source(
    mode: ReportMode,
    technician: Option<TechnicianChoice>,
    branch: Option<BranchId>,
) -> Option<(String, QueryParams)> {
    match mode {
        ReportMode::ByBranch => {
            branch.map(|id| (format!("/farmer/by-branch/{id}"), QueryParams::new()))
        }
        ReportMode::ByTechnician => match technician? {
            TechnicianChoice::Unassigned => {
                Some(("/farmer/by-technician".to_string(), QueryParams::new()))
            }
            TechnicianChoice::User(id) => Some((
                "/farmer/by-technician".to_string(),
                QueryParams::new().with("userId", id.0),
            )),
        },
    }
}

/// Filters the user has applied on top of the report's fixed ones.
#[derive(Debug, Clone, PartialEq, Default)]
struct FarmerFilters {
    search: Option<String>,
    type_id: Option<i64>,
    sort: SortState,
}

impl FarmerFilters {
    fn query(&self) -> QueryParams {
        QueryParams::new()
            .with("search", self.search.clone())
            .with("typeId", self.type_id)
            .with("sort", self.sort.query_value(sort_field))
    }
}

#[derive(Properties, PartialEq)]
struct FarmerReportProps {
    endpoint: AttrValue,
    default_filters: QueryParams,
}

/// Paginated farmer table. Keyed by its source, so a new endpoint starts
/// from a clean state.
#[function_component]
fn ReportByFarmer(props: &FarmerReportProps) -> Html {
    let farmers = use_paginated_fetch::<Farmer>(
        &props.endpoint,
        DEFAULT_PAGE_SIZE,
        props.default_filters.clone(),
    );
    let filters = use_state(FarmerFilters::default);
    let dialog = use_state(|| Dialog::<Farmer>::Closed);

    {
        let fetch_page = farmers.fetch_page.clone();
        use_effect_with((), move |_| fetch_page.emit((1, None)));
    }

    let apply = {
        let filters = filters.clone();
        let fetch_page = farmers.fetch_page.clone();
        move |next: FarmerFilters| {
            fetch_page.emit((1, Some(next.query())));
            filters.set(next);
        }
    };

    let on_search = {
        let filters = filters.clone();
        let apply = apply.clone();
        Callback::from(move |search: Option<String>| {
            apply(FarmerFilters {
                search,
                ..(*filters).clone()
            });
        })
    };

    let on_type = {
        let filters = filters.clone();
        let apply = apply.clone();
        Callback::from(move |e: Event| {
            apply(FarmerFilters {
                type_id: parse_id(&select_value(&e)),
                ..(*filters).clone()
            });
        })
    };

    let on_sort = {
        let filters = filters.clone();
        Callback::from(move |label: String| {
            if sort_field(&label).is_none() {
                return;
            }
            let mut next = (*filters).clone();
            next.sort.toggle(&label);
            apply(next);
        })
    };

    let on_page_change = {
        let fetch_page = farmers.fetch_page.clone();
        Callback::from(move |page: u32| fetch_page.emit((page, None)))
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

    html! {
        <div class="space-y-4">
            <div class="flex flex-wrap items-end gap-4">
                <div class="flex-1 min-w-[16rem]">
                    <SearchBox placeholder="Search farmers..." {on_search} />
                </div>
                <div>
                    <label class={styles::LABEL}>{"Type"}</label>
                    <select class={styles::INPUT} onchange={on_type}>
                        <option value="" selected={filters.type_id.is_none()}>{"All"}</option>
                        {for FARMER_TYPE_CHOICES.iter().map(|(id, label)| html! {
                            <option value={id.to_string()} selected={filters.type_id == Some(*id)}>
                                {*label}
                            </option>
                        })}
                    </select>
                </div>
                <span class={styles::MUTED}>
                    {format!("Total items: {}", format_count(farmers.total_items))}
                </span>
                <span class={styles::MUTED}>
                    {format!("Area on this page: {}", format_area(farmers_total_area(&farmers.data)))}
                </span>
            </div>

            <Pagination
                current_page={farmers.current_page}
                total_pages={farmers.total_pages}
                items_per_page={farmers.page_size}
                {on_page_change}
                on_items_per_page_change={farmers.resize_keeping(filters.query())}
                is_loading={farmers.is_loading}
            >
                <SortableTable
                    headers={headers(&FARMER_COLUMNS)}
                    on_sort={on_sort}
                    sort={filters.sort.clone()}
                >
                    {for farmers.data.iter().map(|farmer| html! {
                        <tr key={farmer.registration_number.to_string()} class={styles::TR}>
                            <td class={styles::TD}>{farmer.registration_number.to_string()}</td>
                            <td class={styles::TD}>
                                {farmer.farmer_type.as_ref().map(|t| t.description.as_str()).unwrap_or("-")}
                            </td>
                            <td class={styles::TD}>{&farmer.name}</td>
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
                            <td class={styles::TD}>
                                <button onclick={edit(farmer)} class={styles::LINK_BUTTON}>{"Edit"}</button>
                            </td>
                        </tr>
                    })}
                </SortableTable>
            </Pagination>

            if let Dialog::Edit(farmer) = &*dialog {
                <FarmerModal farmer={Some(farmer.clone())} {on_close} {on_saved} />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FamilyGroupReportProps {
    technician: UserId,
}

/// Every group whose principal is assigned to `technician`, one table each.
#[function_component]
fn ReportByFamilyGroup(props: &FamilyGroupReportProps) -> Html {
    let groups = use_fetch_item::<Vec<FamilyGroupMembers>>(
        &format!("/family-group/by-technician/{}", props.technician),
        QueryParams::new(),
        true,
    );
    let editing = use_state(|| None::<Farmer>);
    let toast = use_toast();

    let on_edit_farmer = {
        let editing = editing.clone();
        Callback::from(move |farmer: Farmer| editing.set(Some(farmer)))
    };

    let on_close = {
        let editing = editing.clone();
        Callback::from(move |_: ()| editing.set(None))
    };

    let on_saved = {
        let editing = editing.clone();
        let refetch = groups.refetch.clone();
        Callback::from(move |_: ()| {
            editing.set(None);
            refetch.emit(());
        })
    };

    let make_principal = |group_id: FamilyGroupId| {
        let toast = toast.clone();
        let refetch = groups.refetch.clone();
        Callback::from(move |farmer: Farmer| {
            let toast = toast.clone();
            let refetch = refetch.clone();
            yew::platform::spawn_local(async move {
                match get_api_client()
                    .change_principal(group_id, &farmer.registration_number)
                    .await
                {
                    Ok(()) => {
                        toast.success("Principal updated.");
                        refetch.emit(());
                    }
                    Err(e) => toast.client_error("Failed to change principal", &e),
                }
            });
        })
    };

    let remove_member = |group_id: FamilyGroupId| {
        let toast = toast.clone();
        let refetch = groups.refetch.clone();
        Callback::from(move |farmer: Farmer| {
            let toast = toast.clone();
            let refetch = refetch.clone();
            yew::platform::spawn_local(async move {
                match get_api_client()
                    .remove_member(group_id, &farmer.registration_number)
                    .await
                {
                    Ok(()) => {
                        toast.success("Member removed.");
                        refetch.emit(());
                    }
                    Err(e) => toast.client_error("Failed to remove member", &e),
                }
            });
        })
    };

    let view = groups.render("family groups", |groups, _, _| {
        if groups.is_empty() {
            return html! {
                <p class={styles::MUTED}>{"No family groups for this technician."}</p>
            };
        }
        let total: f64 = groups.iter().map(FamilyGroupMembers::total_area).sum();
        html! {
            <div class="space-y-8">
                <p class={styles::MUTED}>
                    {format!("{} family groups, total area {}", groups.len(), format_area(total))}
                </p>
                {for groups.iter().map(|group| html! {
                    <div key={group.family_group_id.to_string()} class={styles::CARD}>
                        <FamilyGroupTable
                            group_id={group.family_group_id}
                            principal={Some(group.principal.summary())}
                            members={group.members.clone()}
                            cultivation={group.cultivation.areas}
                            on_edit_farmer={on_edit_farmer.clone()}
                            on_make_principal={make_principal(group.family_group_id)}
                            on_remove_farmer={remove_member(group.family_group_id)}
                        />
                    </div>
                })}
            </div>
        }
    });

    html! {
        <>
            {view}
            if let Some(farmer) = &*editing {
                <FarmerModal farmer={Some(farmer.clone())} {on_close} {on_saved} />
            }
        </>
    }
}

#[function_component]
pub fn ReportsPage() -> Html {
    let mode = use_state(|| None::<ReportMode>);
    let kind = use_state(|| ReportKind::Farmer);
    let technician = use_state(|| None::<TechnicianChoice>);
    let branch = use_state(|| None::<BranchId>);

    let users = use_lazy_fetch::<Vec<User>>();
    let branches = use_lazy_fetch::<Vec<Branch>>();

    {
        let fetch_users = users.fetch.clone();
        let fetch_branches = branches.fetch.clone();
        use_effect_with(*mode, move |mode| match mode {
            Some(ReportMode::ByTechnician) => {
                fetch_users.emit(("/user/all".into(), "Failed to load technicians".into()));
            }
            Some(ReportMode::ByBranch) => {
                fetch_branches.emit(("/branch".into(), "Failed to load branches".into()));
            }
            None => {}
        });
    }

    let on_mode = {
        let mode = mode.clone();
        let technician = technician.clone();
        let branch = branch.clone();
        Callback::from(move |e: Event| {
            mode.set(match select_value(&e).as_str() {
                "technician" => Some(ReportMode::ByTechnician),
                "branch" => Some(ReportMode::ByBranch),
                _ => None,
            });
            technician.set(None);
            branch.set(None);
        })
    };

    let on_technician = {
        let technician = technician.clone();
        Callback::from(move |e: Event| {
            let value = select_value(&e);
            technician.set(match value.as_str() {
                "" => None,
                "none" => Some(TechnicianChoice::Unassigned),
                other => parse_id(other).map(|id| TechnicianChoice::User(UserId(id))),
            });
        })
    };

    let on_branch = {
        let branch = branch.clone();
        Callback::from(move |e: Event| branch.set(parse_id(&select_value(&e)).map(BranchId)))
    };

    let on_kind = {
        let kind = kind.clone();
        Callback::from(move |e: Event| {
            kind.set(match select_value(&e).as_str() {
                "family-group" => ReportKind::FamilyGroup,
                _ => ReportKind::Farmer,
            });
        })
    };

    let mode_value = match *mode {
        Some(ReportMode::ByTechnician) => "technician",
        Some(ReportMode::ByBranch) => "branch",
        None => "",
    };

    let controls = match *mode {
        Some(ReportMode::ByTechnician) => html! {
            <>
                <div>
                    <label class={styles::LABEL}>{"Technician"}</label>
                    <select class={styles::INPUT} onchange={on_technician}>
                        <option value="" selected={technician.is_none()}>{"Select a technician"}</option>
                        <option
                            value="none"
                            selected={*technician == Some(TechnicianChoice::Unassigned)}
                        >
                            {"No technician"}
                        </option>
                        {for users.data.iter().flatten().map(|user| html! {
                            <option
                                value={user.id.to_string()}
                                selected={*technician == Some(TechnicianChoice::User(user.id))}
                            >
                                {user.display_name()}
                            </option>
                        })}
                    </select>
                </div>
                <div>
                    <label class={styles::LABEL}>{"Report"}</label>
                    <select class={styles::INPUT} onchange={on_kind}>
                        <option value="farmer" selected={*kind == ReportKind::Farmer}>{"Farmers"}</option>
                        <option value="family-group" selected={*kind == ReportKind::FamilyGroup}>
                            {"Family groups"}
                        </option>
                    </select>
                </div>
            </>
        },
        Some(ReportMode::ByBranch) => html! {
            <div>
                <label class={styles::LABEL}>{"Branch"}</label>
                <select class={styles::INPUT} onchange={on_branch}>
                    <option value="" selected={branch.is_none()}>{"Select a branch"}</option>
                    {for branches.data.iter().flatten().map(|b| html! {
                        <option value={b.id.to_string()} selected={*branch == Some(b.id)}>
                            {&b.name}
                        </option>
                    })}
                </select>
            </div>
        },
        None => html! {},
    };

    let family_group_view = *mode == Some(ReportMode::ByTechnician)
        && *kind == ReportKind::FamilyGroup;

    let report = if family_group_view {
        match *technician {
            Some(TechnicianChoice::User(id)) => html! {
                <ReportByFamilyGroup key={id.to_string()} technician={id} />
            },
            Some(TechnicianChoice::Unassigned) => html! {
                <p class={styles::MUTED}>
                    {"Family groups are reported per technician. Pick one to continue."}
                </p>
            },
            None => html! {},
        }
    } else {
        match (*mode).and_then(|mode| farmer_report_source(mode, *technician, *branch)) {
            Some((endpoint, default_filters)) => {
                let key = default_filters.append_to(&endpoint);
                html! {
                    <ReportByFarmer {key} endpoint={endpoint} {default_filters} />
                }
            }
            None => html! {},
        }
    };

    html! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-end gap-4">
                <div>
                    <label class={styles::LABEL}>{"Report by"}</label>
                    <select class={styles::INPUT} onchange={on_mode}>
                        <option value="" selected={mode_value.is_empty()}>{"Select"}</option>
                        <option value="technician" selected={mode_value == "technician"}>
                            {"Technician"}
                        </option>
                        <option value="branch" selected={mode_value == "branch"}>{"Branch"}</option>
                    </select>
                </div>
                {controls}
            </div>
            {report}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::use_paginated_fetch::detached_handle;
    use crate::paging::PaginatedList;
    use crate::utils::SortDirection;

    #[test]
    fn technician_report_carries_user_id() {
        let (endpoint, filters) = farmer_report_source(
            ReportMode::ByTechnician,
            Some(TechnicianChoice::User(UserId(7))),
            None,
        )
        .unwrap();
        assert_eq!(endpoint, "/farmer/by-technician");
        assert_eq!(filters.to_query_string(), "userId=7");

        let (_, unassigned) = farmer_report_source(
            ReportMode::ByTechnician,
            Some(TechnicianChoice::Unassigned),
            None,
        )
        .unwrap();
        assert!(unassigned.is_empty());
    }

    #[test]
    fn branch_report_needs_a_branch() {
        assert_eq!(farmer_report_source(ReportMode::ByBranch, None, None), None);
        let (endpoint, filters) =
            farmer_report_source(ReportMode::ByBranch, None, Some(BranchId(3))).unwrap();
        assert_eq!(endpoint, "/farmer/by-branch/3");
        assert!(filters.is_empty());
    }

    #[test]
    fn filters_render_search_type_and_sort() {
        let mut filters = FarmerFilters {
            search: Some("souza".into()),
            type_id: Some(2),
            ..Default::default()
        };
        filters.sort.toggle("Technician");
        filters.sort.direction = SortDirection::Desc;

        let query = filters.query();
        assert_eq!(query.get("search").and_then(|v| v.render()).as_deref(), Some("souza"));
        assert_eq!(query.get("typeId").and_then(|v| v.render()).as_deref(), Some("2"));
        assert_eq!(
            query.get("sort").and_then(|v| v.render()).as_deref(),
            Some("technician.name,desc")
        );
    }

    #[test]
    fn resizing_the_report_keeps_search_type_and_sort() {
        let (_, defaults) = farmer_report_source(
            ReportMode::ByTechnician,
            Some(TechnicianChoice::User(UserId(7))),
            None,
        )
        .unwrap();
        let (farmers, sent) =
            detached_handle(PaginatedList::<Farmer>::new(DEFAULT_PAGE_SIZE, defaults));

        let mut filters = FarmerFilters {
            search: Some("souza".into()),
            type_id: Some(2),
            ..Default::default()
        };
        filters.sort.toggle("Name");
        filters.sort.toggle("Name");

        farmers.fetch_page.emit((1, Some(filters.query())));
        farmers.resize_keeping(filters.query()).emit(50);

        assert_eq!(
            sent.borrow().last().map(String::as_str),
            Some("page=0&size=50&userId=7&search=souza&typeId=2&sort=name%2Cdesc")
        );
    }

    #[test]
    fn empty_filters_send_nothing() {
        assert_eq!(FarmerFilters::default().query().to_query_string(), "");
    }
}
