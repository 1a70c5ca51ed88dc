use yew::prelude::*;

use super::{
    BranchesPage, DashboardPage, FamilyGroupsPage, FarmersPage, ReportsPage,
    UsersPage,
};
use crate::Route;
use crate::components::{CsvUploadModal, Sidebar, Spinner, styles};
use crate::hooks::{MANAGE_USERS, use_logout, use_permission, use_title};

/// Screen shown in the main area next to the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeView {
    FamilyGroups,
    Farmers,
    Reports,
    Dashboard,
    Users,
    Branches,
}

impl HomeView {
    pub fn route(&self) -> Route {
        match self {
            Self::FamilyGroups => Route::FamilyGroups,
            Self::Farmers => Route::Farmers,
            Self::Reports => Route::Reports,
            Self::Dashboard => Route::Dashboard,
            Self::Users => Route::Users,
            Self::Branches => Route::Branches,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::FamilyGroups => "Family groups",
            Self::Farmers => "Farmers",
            Self::Reports => "Reports",
            Self::Dashboard => "Dashboard",
            Self::Users => "Users",
            Self::Branches => "Branches",
        }
    }

    /// Needs the user-management permission.
    pub fn admin_only(&self) -> bool {
        !matches!(self, Self::FamilyGroups | Self::Farmers)
    }
}

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub view: HomeView,
}

#[function_component]
pub fn HomePage(props: &HomePageProps) -> Html {
    use_title(props.view.title());
    let can_manage = use_permission(MANAGE_USERS);
    let on_logout = use_logout();
    let uploading = use_state(|| false);

    let on_upload = {
        let uploading = uploading.clone();
        Callback::from(move |_: MouseEvent| uploading.set(true))
    };

    let on_upload_close = {
        let uploading = uploading.clone();
        Callback::from(move |_: ()| uploading.set(false))
    };

    let content = match (props.view.admin_only(), can_manage) {
        (false, _) | (true, Some(true)) => match props.view {
            HomeView::FamilyGroups => html! { <FamilyGroupsPage /> },
            HomeView::Farmers => html! { <FarmersPage /> },
            HomeView::Reports => html! { <ReportsPage /> },
            HomeView::Dashboard => html! { <DashboardPage /> },
            HomeView::Users => html! { <UsersPage /> },
            HomeView::Branches => html! { <BranchesPage /> },
        },
        (true, None) => html! { <div class="py-16"><Spinner label="Checking permissions..." /></div> },
        (true, Some(false)) => html! {
            <div class={styles::ERROR_BOX}>
                <p class="text-sm text-red-700 dark:text-red-400">
                    {"You do not have permission to view this page."}
                </p>
            </div>
        },
    };

    html! {
        <div class="flex min-h-screen">
            <aside class="w-56 shrink-0 bg-white dark:bg-neutral-800 border-r \
                          border-neutral-200 dark:border-neutral-700">
                <Sidebar
                    active_route={props.view.route()}
                    is_admin={can_manage == Some(true)}
                    {on_logout}
                    {on_upload}
                />
            </aside>
            <main class="flex-1 min-w-0 p-6 space-y-6">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {props.view.title()}
                </h1>
                {content}
            </main>
            if *uploading && can_manage == Some(true) {
                <CsvUploadModal on_close={on_upload_close} />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_and_farmer_screens_are_open_to_everyone() {
        assert!(!HomeView::FamilyGroups.admin_only());
        assert!(!HomeView::Farmers.admin_only());
        for view in [
            HomeView::Reports,
            HomeView::Dashboard,
            HomeView::Users,
            HomeView::Branches,
        ] {
            assert!(view.admin_only(), "{view:?}");
        }
    }
}
