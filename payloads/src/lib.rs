pub mod api_client;
pub mod drafts;
pub mod query;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError, UploadOutcome};
pub use query::{QueryParams, QueryValue};
pub use responses::Page;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Content type of the bulk farmer import.
pub const CSV_MIME: &str = "text/csv";

/// Whether a picked file may be sent to the bulk import. The browser must
/// report it as CSV and the backend only takes names ending in `.csv`.
pub fn is_csv_file(mime: &str, file_name: &str) -> bool {
    mime == CSV_MIME && file_name.to_ascii_lowercase().ends_with(".csv")
}

/// A farmer's registration number. Numeric in practice, but the backend
/// treats it as an opaque string.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    Display,
)]
#[serde(transparent)]
pub struct RegistrationNumber(pub String);

impl From<&str> for RegistrationNumber {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
pub struct FamilyGroupId(pub i64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
pub struct AssetId(pub i64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
pub struct UserId(pub i64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
pub struct BranchId(pub i64);

/// Lifecycle status of a farmer. Retirement is modelled by status rather
/// than deletion.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FarmerStatus {
    #[default]
    Active,
    Deceased,
}

impl FarmerStatus {
    pub const ALL: [FarmerStatus; 2] = [Self::Active, Self::Deceased];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Deceased => "Deceased",
        }
    }

    /// Wire value, also used as the `<option>` value in forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Deceased => "DECEASED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

/// Direction of an asset edge between farmers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    #[default]
    Owned,
    Leased,
}

impl AssetType {
    pub const ALL: [AssetType; 2] = [Self::Owned, Self::Leased];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Owned => "Owned",
            Self::Leased => "Leased",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owned => "OWNED",
            Self::Leased => "LEASED",
        }
    }

    /// Numeric id of the asset type on the backend.
    pub fn type_id(&self) -> i64 {
        match self {
            Self::Owned => 1,
            Self::Leased => 2,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

/// Role strings understood by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Technician,
}

impl Role {
    pub const ALL: [Role; 2] = [Self::Admin, Self::Technician];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ROLE_ADMIN",
            Self::Technician => "ROLE_TECHNICIAN",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Technician => "Technician",
        }
    }

    pub fn label_for(role: &str) -> &str {
        Self::ALL
            .iter()
            .find(|r| r.as_str() == role)
            .map(|r| r.label())
            .unwrap_or(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_wire_names() {
        let json = serde_json::to_string(&FarmerStatus::Deceased).unwrap();
        assert_eq!(json, "\"DECEASED\"");
        assert_eq!(FarmerStatus::parse("ACTIVE"), Some(FarmerStatus::Active));
        assert_eq!(FarmerStatus::parse("active"), None);
    }

    #[test]
    fn unknown_roles_fall_back_to_raw_string() {
        assert_eq!(Role::label_for("ROLE_ADMIN"), "Administrator");
        assert_eq!(Role::label_for("ROLE_AUDITOR"), "ROLE_AUDITOR");
    }

    #[test]
    fn registration_number_is_transparent_on_the_wire() {
        let id: RegistrationNumber = serde_json::from_str("\"1042\"").unwrap();
        assert_eq!(id, RegistrationNumber::from("1042"));
        assert_eq!(id.to_string(), "1042");
    }

    #[test]
    fn only_csv_files_go_to_the_import() {
        assert!(is_csv_file("text/csv", "farmers.csv"));
        assert!(is_csv_file("text/csv", "FARMERS.CSV"));
        assert!(!is_csv_file("application/vnd.ms-excel", "farmers.csv"));
        assert!(!is_csv_file("text/csv", "farmers.txt"));
        assert!(!is_csv_file("", ""));
    }
}
