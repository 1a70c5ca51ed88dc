pub mod branches;
pub mod dashboard;
pub mod family_groups;
pub mod farmers;
pub mod home;
pub mod login;
pub mod not_found;
pub mod reports;
pub mod users;

pub use branches::BranchesPage;
pub use dashboard::DashboardPage;
pub use family_groups::FamilyGroupsPage;
pub use farmers::FarmersPage;
pub use home::{HomePage, HomeView};
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use reports::ReportsPage;
pub use users::UsersPage;

/// Which create/edit form a CRUD screen has open.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog<T> {
    Closed,
    Create,
    Edit(T),
}
