use futures::future::try_join_all;
use payloads::{
    BranchId, UserId,
    responses::{Branch, CropShare, CultivationReport, User},
};
use yew::prelude::*;

use crate::components::form::select_value;
use crate::components::{PieChart, PieSlice, Spinner, styles};
use crate::contexts::toast::use_toast;
use crate::get_api_client;
use crate::hooks::{use_lazy_fetch, use_mounted};

const REMAINING_COLOR: &str = "#0088FE";
const PARTICIPATION_COLOR: &str = "#00C49F";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Grouping {
    Branch,
    Technician,
}

/// Remaining area against the cooperative's participation for one crop.
fn crop_slices(share: &CropShare) -> Vec<PieSlice> {
    vec![
        PieSlice {
            label: "Remaining".into(),
            value: share.remaining,
            color: REMAINING_COLOR,
        },
        PieSlice {
            label: "Participation".into(),
            value: share.participation,
            color: PARTICIPATION_COLOR,
        },
    ]
}

/// Adds `id` when absent, removes it when present.
fn toggled(selection: &[i64], id: i64) -> Vec<i64> {
    if selection.contains(&id) {
        selection.iter().copied().filter(|s| *s != id).collect()
    } else {
        let mut next = selection.to_vec();
        next.push(id);
        next
    }
}

async fn load_report(
    grouping: Grouping,
    ids: Vec<i64>,
) -> Result<CultivationReport, payloads::ClientError> {
    let client = get_api_client();
    let batches = match grouping {
        Grouping::Branch => {
            try_join_all(ids.into_iter().map(|id| client.cultivation_by_branch(BranchId(id))))
                .await?
        }
        Grouping::Technician => {
            try_join_all(ids.into_iter().map(|id| client.cultivation_by_technician(UserId(id))))
                .await?
        }
    };
    Ok(CultivationReport::sum(batches.iter().flatten()))
}

/// Aggregated cultivation participation for the selected branches or
/// technicians, one pie per crop.
#[function_component]
pub fn DashboardPage() -> Html {
    let grouping = use_state(|| None::<Grouping>);
    let selection = use_state(Vec::<i64>::new);
    let report = use_state(|| None::<CultivationReport>);
    let is_loading = use_state(|| false);
    let generation = use_mut_ref(|| 0_u64);
    let mounted = use_mounted();
    let toast = use_toast();

    let branches = use_lazy_fetch::<Vec<Branch>>();
    let users = use_lazy_fetch::<Vec<User>>();

    {
        let fetch_branches = branches.fetch.clone();
        let fetch_users = users.fetch.clone();
        use_effect_with(*grouping, move |grouping| match grouping {
            Some(Grouping::Branch) => {
                fetch_branches.emit(("/branch".into(), "Failed to load branches".into()));
            }
            Some(Grouping::Technician) => {
                fetch_users.emit(("/user/all".into(), "Failed to load technicians".into()));
            }
            None => {}
        });
    }

    {
        let report = report.clone();
        let is_loading = is_loading.clone();
        use_effect_with(
            (*grouping, (*selection).clone()),
            move |(grouping, ids)| {
                *generation.borrow_mut() += 1;
                let ticket = *generation.borrow();

                let grouping = match *grouping {
                    Some(grouping) if !ids.is_empty() => grouping,
                    _ => {
                        report.set(None);
                        is_loading.set(false);
                        return;
                    }
                };

                let ids = ids.clone();
                is_loading.set(true);
                yew::platform::spawn_local(async move {
                    let result = load_report(grouping, ids).await;
                    if !mounted.get() || *generation.borrow() != ticket {
                        tracing::debug!("superseded dashboard report dropped");
                        return;
                    }
                    match result {
                        Ok(summed) => report.set(Some(summed)),
                        Err(e) => {
                            report.set(None);
                            toast.client_error("Failed to load cultivation", &e);
                        }
                    }
                    is_loading.set(false);
                });
            },
        );
    }

    let on_grouping = {
        let grouping = grouping.clone();
        let selection = selection.clone();
        Callback::from(move |e: Event| {
            grouping.set(match select_value(&e).as_str() {
                "branch" => Some(Grouping::Branch),
                "technician" => Some(Grouping::Technician),
                _ => None,
            });
            selection.set(Vec::new());
        })
    };

    let toggle = |id: i64| {
        let selection = selection.clone();
        Callback::from(move |_: Event| selection.set(toggled(&selection, id)))
    };

    let options: Vec<(i64, String)> = match *grouping {
        Some(Grouping::Branch) => branches
            .data
            .iter()
            .flatten()
            .map(|b| (b.id.0, b.name.clone()))
            .collect(),
        Some(Grouping::Technician) => users
            .data
            .iter()
            .flatten()
            .map(|u| (u.id.0, u.display_name().to_string()))
            .collect(),
        None => Vec::new(),
    };

    let pies = match &*report {
        _ if *is_loading => html! { <div class="py-8"><Spinner label="Loading cultivation..." /></div> },
        None => html! {},
        Some(report) => html! {
            <div class="grid gap-6 sm:grid-cols-2 xl:grid-cols-3">
                {for report.shares().iter().map(|share| html! {
                    <div key={share.crop.label()} class={styles::CARD}>
                        <PieChart title={share.crop.label()} slices={crop_slices(share)} />
                    </div>
                })}
            </div>
        },
    };

    html! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-start gap-6">
                <div>
                    <label class={styles::LABEL}>{"Group by"}</label>
                    <select class={styles::INPUT} onchange={on_grouping}>
                        <option value="" selected={grouping.is_none()}>{"Select"}</option>
                        <option value="branch" selected={*grouping == Some(Grouping::Branch)}>
                            {"Branch"}
                        </option>
                        <option value="technician" selected={*grouping == Some(Grouping::Technician)}>
                            {"Technician"}
                        </option>
                    </select>
                </div>
                if !options.is_empty() {
                    <fieldset class="flex-1">
                        <legend class={styles::LABEL}>{"Include"}</legend>
                        <div class="flex flex-wrap gap-x-6 gap-y-2">
                            {for options.iter().map(|(id, label)| html! {
                                <label key={id.to_string()} class="flex items-center gap-2 text-sm">
                                    <input
                                        type="checkbox"
                                        checked={selection.contains(id)}
                                        onchange={toggle(*id)}
                                    />
                                    {label.clone()}
                                </label>
                            })}
                        </div>
                    </fieldset>
                }
            </div>
            {pies}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::responses::Crop;

    #[test]
    fn toggling_adds_then_removes() {
        let once = toggled(&[], 4);
        assert_eq!(once, vec![4]);
        let twice = toggled(&once, 9);
        assert_eq!(twice, vec![4, 9]);
        assert_eq!(toggled(&twice, 4), vec![9]);
    }

    #[test]
    fn slices_split_remaining_and_participation() {
        let share = CropShare {
            crop: Crop::Wheat,
            total: 120.0,
            participation: 45.0,
            remaining: 75.0,
        };
        let slices = crop_slices(&share);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label.as_str(), "Remaining");
        assert_eq!(slices[0].value, 75.0);
        assert_eq!(slices[1].label.as_str(), "Participation");
        assert_eq!(slices[1].value, 45.0);
    }
}
