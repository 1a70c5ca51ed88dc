use crate::Route;
use crate::hooks::use_push_route;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub title: &'static str,
    pub route: Route,
    /// Shown only to users allowed to manage users.
    pub admin_only: bool,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        title: "Family groups",
        route: Route::FamilyGroups,
        admin_only: false,
    },
    NavItem {
        title: "Farmers",
        route: Route::Farmers,
        admin_only: false,
    },
    NavItem {
        title: "Reports",
        route: Route::Reports,
        admin_only: true,
    },
    NavItem {
        title: "Dashboard",
        route: Route::Dashboard,
        admin_only: true,
    },
    NavItem {
        title: "Users",
        route: Route::Users,
        admin_only: true,
    },
    NavItem {
        title: "Branches",
        route: Route::Branches,
        admin_only: true,
    },
];

/// Items visible for the given permission.
pub fn visible_items(is_admin: bool) -> impl Iterator<Item = &'static NavItem> {
    NAV_ITEMS.iter().filter(move |item| is_admin || !item.admin_only)
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active_route: Route,
    pub is_admin: bool,
    pub on_logout: Callback<MouseEvent>,
    /// Opens the bulk import. Admins only.
    #[prop_or_default]
    pub on_upload: Option<Callback<MouseEvent>>,
}

const LINK_BASE_CLASSES: &str =
    "block w-full text-left px-4 py-2 text-sm transition-colors cursor-pointer";
const LINK_INACTIVE_CLASSES: &str = "text-neutral-600 dark:text-neutral-400 \
    hover:text-neutral-900 dark:hover:text-white \
    hover:bg-neutral-100 dark:hover:bg-neutral-800";
const LINK_ACTIVE_CLASSES: &str = "text-neutral-900 dark:text-white \
    bg-neutral-100 dark:bg-neutral-800 font-medium";

#[function_component]
pub fn Sidebar(props: &SidebarProps) -> Html {
    let push_route = use_push_route();

    html! {
        <nav class="flex flex-col h-full py-4">
            <div class="px-4 pb-4 text-lg font-semibold text-neutral-900 \
                        dark:text-neutral-100">
                {"Farmer registry"}
            </div>
            <ul class="flex-1">
                {for visible_items(props.is_admin).map(|item| {
                    let is_active = props.active_route == item.route
                        || (props.active_route == Route::Home
                            && item.route == Route::FamilyGroups);

                    let link_classes = format!(
                        "{} {}",
                        LINK_BASE_CLASSES,
                        if is_active { LINK_ACTIVE_CLASSES } else { LINK_INACTIVE_CLASSES }
                    );

                    let on_click = {
                        let push_route = push_route.clone();
                        let route = item.route.clone();
                        Callback::from(move |_: MouseEvent| {
                            push_route.emit(route.clone());
                        })
                    };

                    html! {
                        <li key={item.title}>
                            <button onclick={on_click} class={link_classes}>
                                {item.title}
                            </button>
                        </li>
                    }
                })}
                if let (true, Some(on_upload)) = (props.is_admin, props.on_upload.clone()) {
                    <li>
                        <button onclick={on_upload} class={format!("{} {}", LINK_BASE_CLASSES, LINK_INACTIVE_CLASSES)}>
                            {"Upload data"}
                        </button>
                    </li>
                }
            </ul>
            <div class="px-4 pt-4 border-t border-neutral-200 dark:border-neutral-700">
                <button
                    onclick={props.on_logout.clone()}
                    class={format!("{} {}", LINK_BASE_CLASSES, LINK_INACTIVE_CLASSES)}
                >
                    {"Log out"}
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_admins_only_see_group_and_farmer_screens() {
        let titles: Vec<_> = visible_items(false).map(|item| item.title).collect();
        assert_eq!(titles, vec!["Family groups", "Farmers"]);
    }

    #[test]
    fn admins_see_everything() {
        assert_eq!(visible_items(true).count(), NAV_ITEMS.len());
    }
}
