use crate::{
    BranchId, FamilyGroupId, FarmerStatus, RegistrationNumber, UserId,
    responses::Cultivation,
};
use serde::{Deserialize, Serialize};

/// Searches shorter than this are not sent to the backend.
pub const MIN_SEARCH_LEN: usize = 3;

#[derive(Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerRequest {
    pub registration_number: RegistrationNumber,
    pub name: String,
    pub status: FarmerStatus,
    pub family_group_id: Option<FamilyGroupId>,
    pub technician_id: Option<UserId>,
    pub type_id: Option<i64>,
    pub owned_area: f64,
    pub leased_area: f64,
    pub branch: Option<BranchId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFamilyGroup {
    pub principal_id: RegistrationNumber,
    pub members_id: Vec<RegistrationNumber>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRequest {
    pub description: String,
    pub owner_registration_number: Option<RegistrationNumber>,
    /// Empty string when the asset is not leased out.
    pub leased_to_registration_number: String,
    pub asset_type_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub username: String,
    pub name: String,
    /// Left out on updates when the password is not being changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub roles: Vec<String>,
    pub branch_id: Option<BranchId>,
}

pub type UpdateCultivation = Cultivation;

/// Trimmed search text, or `None` when it is too short to send.
pub fn search_filter(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.chars().count() >= MIN_SEARCH_LEN {
        Some(trimmed.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_searches_are_dropped() {
        assert_eq!(search_filter("ab"), None);
        assert_eq!(search_filter("  ab  "), None);
        assert_eq!(search_filter(" joã "), Some("joã".to_string()));
    }

    #[test]
    fn user_update_without_password_omits_field() {
        let request = UserRequest {
            username: "maria".into(),
            name: "Maria".into(),
            password: None,
            roles: vec!["ROLE_TECHNICIAN".into()],
            branch_id: Some(BranchId(2)),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["branchId"], 2);
    }
}
