pub mod add_member_modal;
pub mod asset_modal;
pub mod create_family_group_modal;
pub mod csv_upload_modal;
pub mod cultivation_modal;
pub mod family_group_picker;
pub mod family_group_table;
pub mod farmer_modal;
pub mod form;
pub mod login_form;
pub mod modal;
pub mod pagination;
pub mod pie_chart;
pub mod require_auth;
pub mod search_box;
pub mod sidebar;
pub mod sortable_table;
pub mod spinner;
pub mod status_dot;
pub mod styles;
pub mod toast;

pub use add_member_modal::AddMemberModal;
pub use asset_modal::AssetModal;
pub use create_family_group_modal::CreateFamilyGroupModal;
pub use csv_upload_modal::CsvUploadModal;
pub use cultivation_modal::CultivationModal;
pub use family_group_picker::FamilyGroupPicker;
pub use family_group_table::FamilyGroupTable;
pub use farmer_modal::FarmerModal;
pub use login_form::LoginForm;
pub use modal::Modal;
pub use pagination::Pagination;
pub use pie_chart::{PieChart, PieSlice};
pub use require_auth::RequireAuth;
pub use search_box::SearchBox;
pub use sidebar::Sidebar;
pub use sortable_table::SortableTable;
pub use spinner::Spinner;
pub use status_dot::{DotColor, StatusDot};
pub use toast::ToastContainer;
