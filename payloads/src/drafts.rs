//! Editable form state, kept distinct from committed records.
//!
//! A draft holds exactly what a form can change, with optional fields
//! spelled out. `validate` is the only way to turn a draft into a request
//! body, so an incomplete draft never reaches the network.

use crate::{
    AssetType, BranchId, FarmerStatus, RegistrationNumber, UserId,
    requests::{
        AssetRequest, BranchRequest, CreateFamilyGroup, FarmerRequest,
        UserRequest,
    },
    responses::{
        Asset, Branch, Crop, Cultivation, Farmer, FamilyGroupSummary,
        FarmerSummary, User,
    },
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftError {
    #[error("Registration number is required.")]
    MissingRegistrationNumber,
    #[error("Name is required.")]
    MissingName,
    #[error("Area values cannot be negative.")]
    NegativeArea,
    #[error("Description is required.")]
    MissingDescription,
    #[error("Select the owner of the asset.")]
    MissingOwner,
    #[error("Select the farmer the asset is leased to.")]
    MissingLessee,
    #[error("Username, name and at least one role are required.")]
    IncompleteUser,
    #[error("Select a principal farmer.")]
    MissingPrincipal,
    #[error("{0} area cannot be negative.")]
    NegativeCropArea(&'static str),
}

fn required(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ============================================================================
// Farmer
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FarmerDraft {
    pub registration_number: String,
    pub name: String,
    pub status: FarmerStatus,
    pub owned_area: f64,
    pub leased_area: f64,
    pub family_group: Option<FamilyGroupSummary>,
    pub technician: Option<User>,
    pub branch: Option<Branch>,
    pub type_id: Option<i64>,
}

impl FarmerDraft {
    pub fn from_farmer(farmer: &Farmer) -> Self {
        Self {
            registration_number: farmer.registration_number.0.clone(),
            name: farmer.name.clone(),
            status: farmer.status,
            owned_area: farmer.owned_area,
            leased_area: farmer.leased_area,
            family_group: farmer.family_group.clone(),
            technician: farmer.technician.clone(),
            branch: farmer.branch.clone(),
            type_id: farmer.farmer_type.as_ref().map(|t| t.id),
        }
    }

    pub fn validate(&self) -> Result<FarmerRequest, DraftError> {
        let registration_number = required(&self.registration_number)
            .ok_or(DraftError::MissingRegistrationNumber)?;
        let name = required(&self.name).ok_or(DraftError::MissingName)?;
        if self.owned_area < 0.0 || self.leased_area < 0.0 {
            return Err(DraftError::NegativeArea);
        }

        Ok(FarmerRequest {
            registration_number: RegistrationNumber(registration_number),
            name,
            status: self.status,
            family_group_id: self.family_group.as_ref().map(|g| g.id),
            technician_id: self.technician.as_ref().map(|t| t.id),
            type_id: self.type_id,
            owned_area: self.owned_area,
            leased_area: self.leased_area,
            branch: self.branch.as_ref().map(|b| b.id),
        })
    }
}

// ============================================================================
// Asset
// ============================================================================

/// Draft of one ownership/lease edge. Only the relation matching
/// `asset_type` is ever populated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssetDraft {
    pub description: String,
    asset_type: AssetType,
    owner: Option<FarmerSummary>,
    leased_to: Option<FarmerSummary>,
}

impl AssetDraft {
    /// A new owned asset belonging to `owner`.
    pub fn owned_by(owner: FarmerSummary) -> Self {
        Self {
            description: String::new(),
            asset_type: AssetType::Owned,
            owner: Some(owner),
            leased_to: None,
        }
    }

    pub fn from_asset(asset: &Asset) -> Self {
        let asset_type = asset.kind();
        let mut draft = Self {
            description: asset.description.clone(),
            asset_type,
            owner: None,
            leased_to: None,
        };
        match asset_type {
            AssetType::Owned => draft.owner = asset.owner.clone(),
            AssetType::Leased => draft.leased_to = asset.leased_to.clone(),
        }
        draft
    }

    pub fn asset_type(&self) -> AssetType {
        self.asset_type
    }

    pub fn owner(&self) -> Option<&FarmerSummary> {
        self.owner.as_ref()
    }

    pub fn leased_to(&self) -> Option<&FarmerSummary> {
        self.leased_to.as_ref()
    }

    /// The farmer on the relation that is meaningful for the current type.
    pub fn counterparty(&self) -> Option<&FarmerSummary> {
        match self.asset_type {
            AssetType::Owned => self.owner.as_ref(),
            AssetType::Leased => self.leased_to.as_ref(),
        }
    }

    /// Switch type, carrying the selected farmer over to the relation that
    /// matches the new type and clearing the other one.
    pub fn set_asset_type(&mut self, asset_type: AssetType) {
        if asset_type == self.asset_type {
            return;
        }
        let farmer = self.owner.take().or_else(|| self.leased_to.take());
        self.asset_type = asset_type;
        self.set_counterparty(farmer);
    }

    pub fn set_counterparty(&mut self, farmer: Option<FarmerSummary>) {
        match self.asset_type {
            AssetType::Owned => {
                self.owner = farmer;
                self.leased_to = None;
            }
            AssetType::Leased => {
                self.leased_to = farmer;
                self.owner = None;
            }
        }
    }

    pub fn validate(&self) -> Result<AssetRequest, DraftError> {
        let description =
            required(&self.description).ok_or(DraftError::MissingDescription)?;
        match self.asset_type {
            AssetType::Owned if self.owner.is_none() => {
                return Err(DraftError::MissingOwner);
            }
            AssetType::Leased if self.leased_to.is_none() => {
                return Err(DraftError::MissingLessee);
            }
            _ => {}
        }

        Ok(AssetRequest {
            description,
            owner_registration_number: self
                .owner
                .as_ref()
                .map(|o| o.registration_number.clone()),
            leased_to_registration_number: self
                .leased_to
                .as_ref()
                .map(|l| l.registration_number.0.clone())
                .unwrap_or_default(),
            asset_type_id: self.asset_type.type_id(),
        })
    }
}

// ============================================================================
// Branch
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BranchDraft {
    pub id: Option<BranchId>,
    pub name: String,
}

impl BranchDraft {
    pub fn from_branch(branch: &Branch) -> Self {
        Self {
            id: Some(branch.id),
            name: branch.name.clone(),
        }
    }

    pub fn validate(&self) -> Result<BranchRequest, DraftError> {
        let name = required(&self.name).ok_or(DraftError::MissingName)?;
        Ok(BranchRequest { name })
    }
}

// ============================================================================
// User
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserDraft {
    pub id: Option<UserId>,
    pub username: String,
    pub name: String,
    /// Write-only. Always starts empty, even when editing.
    pub password: String,
    pub roles: Vec<String>,
    pub branch: Option<Branch>,
}

impl UserDraft {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: Some(user.id),
            username: user.username.clone(),
            name: user.name.clone().unwrap_or_default(),
            password: String::new(),
            roles: user.roles.clone(),
            branch: user.branch.clone(),
        }
    }

    pub fn toggle_role(&mut self, role: &str) {
        if let Some(index) = self.roles.iter().position(|r| r == role) {
            self.roles.remove(index);
        } else {
            self.roles.push(role.to_string());
        }
    }

    pub fn validate(&self) -> Result<UserRequest, DraftError> {
        let (Some(username), Some(name)) =
            (required(&self.username), required(&self.name))
        else {
            return Err(DraftError::IncompleteUser);
        };
        if self.roles.is_empty() {
            return Err(DraftError::IncompleteUser);
        }

        Ok(UserRequest {
            username,
            name,
            password: (!self.password.is_empty()).then(|| self.password.clone()),
            roles: self.roles.clone(),
            branch_id: self.branch.as_ref().map(|b| b.id),
        })
    }
}

// ============================================================================
// Family group
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FamilyGroupDraft {
    pub principal: Option<FarmerSummary>,
    pub members: Vec<FarmerSummary>,
}

impl FamilyGroupDraft {
    pub fn toggle_member(&mut self, farmer: FarmerSummary) {
        if let Some(index) = self
            .members
            .iter()
            .position(|m| m.registration_number == farmer.registration_number)
        {
            self.members.remove(index);
        } else {
            self.members.push(farmer);
        }
    }

    /// The principal is always sent as a member as well.
    pub fn validate(&self) -> Result<CreateFamilyGroup, DraftError> {
        let principal = self.principal.as_ref().ok_or(DraftError::MissingPrincipal)?;
        let mut members_id: Vec<RegistrationNumber> = self
            .members
            .iter()
            .map(|m| m.registration_number.clone())
            .collect();
        if !members_id.contains(&principal.registration_number) {
            members_id.insert(0, principal.registration_number.clone());
        }

        Ok(CreateFamilyGroup {
            principal_id: principal.registration_number.clone(),
            members_id,
        })
    }
}

/// Reject negative crop areas before sending a cultivation update.
pub fn validate_cultivation(cultivation: &Cultivation) -> Result<Cultivation, DraftError> {
    for crop in Crop::ALL {
        if cultivation.area(crop) < 0.0 {
            return Err(DraftError::NegativeCropArea(crop.label()));
        }
    }
    Ok(*cultivation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(reg: &str) -> FarmerSummary {
        FarmerSummary {
            registration_number: reg.into(),
            name: format!("Farmer {reg}"),
        }
    }

    #[test]
    fn owned_to_leased_moves_the_farmer() {
        let mut draft = AssetDraft::owned_by(summary("10"));
        draft.description = "North field".into();

        draft.set_asset_type(AssetType::Leased);

        assert_eq!(draft.owner(), None);
        assert_eq!(draft.leased_to(), Some(&summary("10")));
        let request = draft.validate().unwrap();
        assert_eq!(request.owner_registration_number, None);
        assert_eq!(request.leased_to_registration_number, "10");
        assert_eq!(request.asset_type_id, 2);
    }

    #[test]
    fn never_both_relations_populated() {
        let mut draft = AssetDraft::owned_by(summary("1"));
        draft.set_asset_type(AssetType::Leased);
        draft.set_counterparty(Some(summary("2")));
        draft.set_asset_type(AssetType::Owned);

        assert_eq!(draft.owner(), Some(&summary("2")));
        assert_eq!(draft.leased_to(), None);
    }

    #[test]
    fn setting_same_type_is_a_no_op() {
        let mut draft = AssetDraft::owned_by(summary("1"));
        draft.set_asset_type(AssetType::Owned);
        assert_eq!(draft.owner(), Some(&summary("1")));
    }

    #[test]
    fn asset_requires_description_and_counterparty() {
        let mut draft = AssetDraft::default();
        assert_eq!(draft.validate(), Err(DraftError::MissingDescription));
        draft.description = "Barn".into();
        assert_eq!(draft.validate(), Err(DraftError::MissingOwner));
        draft.set_asset_type(AssetType::Leased);
        assert_eq!(draft.validate(), Err(DraftError::MissingLessee));
    }

    #[test]
    fn farmer_requires_name_and_registration() {
        let mut draft = FarmerDraft {
            name: "  ".into(),
            registration_number: "12".into(),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Err(DraftError::MissingName));

        draft.name = " Ana ".into();
        draft.owned_area = 4.5;
        let request = draft.validate().unwrap();
        assert_eq!(request.name, "Ana");
        assert_eq!(request.status, FarmerStatus::Active);
        assert_eq!(request.family_group_id, None);
    }

    #[test]
    fn user_edit_never_round_trips_password() {
        let user = User {
            id: UserId(3),
            username: "joao".into(),
            name: Some("João".into()),
            roles: vec!["ROLE_ADMIN".into()],
            branch: None,
        };
        let draft = UserDraft::from_user(&user);
        assert!(draft.password.is_empty());
        assert_eq!(draft.validate().unwrap().password, None);
    }

    #[test]
    fn user_requires_a_role() {
        let mut draft = UserDraft {
            username: "x".into(),
            name: "X".into(),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Err(DraftError::IncompleteUser));
        draft.toggle_role("ROLE_TECHNICIAN");
        assert!(draft.validate().is_ok());
        draft.toggle_role("ROLE_TECHNICIAN");
        assert!(draft.roles.is_empty());
    }

    #[test]
    fn principal_is_always_a_member() {
        let mut draft = FamilyGroupDraft::default();
        assert_eq!(draft.validate(), Err(DraftError::MissingPrincipal));

        draft.principal = Some(summary("7"));
        draft.toggle_member(summary("8"));
        let request = draft.validate().unwrap();
        assert_eq!(
            request.members_id,
            vec![RegistrationNumber::from("7"), RegistrationNumber::from("8")]
        );
    }

    #[test]
    fn negative_crop_area_is_rejected() {
        let mut cultivation = Cultivation::default();
        cultivation.set_area(Crop::Bean, -1.0);
        assert_eq!(
            validate_cultivation(&cultivation),
            Err(DraftError::NegativeCropArea("Bean"))
        );
    }
}
