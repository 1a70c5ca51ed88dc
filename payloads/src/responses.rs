use crate::{
    AssetId, AssetType, BranchId, FamilyGroupId, FarmerStatus,
    RegistrationNumber, UserId,
};
use serde::{Deserialize, Serialize};

/// Paginated envelope returned by every list endpoint.
///
/// Only `content`, `total_pages` and `total_elements` are relied upon; the
/// remaining fields are kept for completeness and may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_pages: u32,
    pub total_elements: u64,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub first: Option<bool>,
    #[serde(default)]
    pub last: Option<bool>,
    #[serde(default)]
    pub empty: Option<bool>,
}

impl<T> Page<T> {
    /// Envelope with only the consumed fields populated.
    pub fn new(content: Vec<T>, total_pages: u32, total_elements: u64) -> Self {
        Self {
            content,
            total_pages,
            total_elements,
            number: None,
            size: None,
            first: None,
            last: None,
            empty: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginToken {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: BranchId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub branch: Option<Branch>,
}

impl User {
    /// Name to show in tables and selects.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.username)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerSummary {
    pub registration_number: RegistrationNumber,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmerType {
    pub id: i64,
    pub description: String,
}

/// Farmer type ids known to the backend, with their labels.
pub const FARMER_TYPE_CHOICES: [(i64, &str); 4] = [
    (1, "Individual, member"),
    (2, "Individual, third party"),
    (3, "Company, member"),
    (4, "Company, third party"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyGroupSummary {
    pub id: FamilyGroupId,
    #[serde(default)]
    pub principal: Option<FarmerSummary>,
}

/// An ownership or lease edge between farmers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: AssetId,
    pub description: String,
    #[serde(default)]
    pub asset_category: Option<String>,
    /// Human-readable type description, not the [`AssetType`] wire name.
    #[serde(default)]
    pub asset_type: Option<String>,
    #[serde(default)]
    pub owner: Option<FarmerSummary>,
    #[serde(default)]
    pub leased_to: Option<FarmerSummary>,
}

impl Asset {
    pub fn kind(&self) -> AssetType {
        if self.leased_to.is_some() {
            AssetType::Leased
        } else {
            AssetType::Owned
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farmer {
    pub registration_number: RegistrationNumber,
    pub name: String,
    pub status: FarmerStatus,
    #[serde(default)]
    pub technician: Option<User>,
    #[serde(default)]
    pub branch: Option<Branch>,
    #[serde(default)]
    pub family_group: Option<FamilyGroupSummary>,
    #[serde(default, rename = "type")]
    pub farmer_type: Option<FarmerType>,
    #[serde(default)]
    pub owned_area: f64,
    #[serde(default)]
    pub leased_area: f64,
    #[serde(default)]
    pub owned_assets: Vec<Asset>,
    #[serde(default)]
    pub leased_assets: Vec<Asset>,
}

impl Farmer {
    pub fn total_area(&self) -> f64 {
        self.owned_area + self.leased_area
    }

    pub fn summary(&self) -> FarmerSummary {
        FarmerSummary {
            registration_number: self.registration_number.clone(),
            name: self.name.clone(),
        }
    }
}

/// Sum of owned and leased area across a set of farmers.
pub fn farmers_total_area<'a>(farmers: impl IntoIterator<Item = &'a Farmer>) -> f64 {
    farmers.into_iter().map(Farmer::total_area).sum()
}

/// Family group as returned by the paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyGroupListing {
    #[serde(alias = "Id")]
    pub id: FamilyGroupId,
    /// The principal farmer.
    #[serde(default)]
    pub farmer: Option<Farmer>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub registry: Option<String>,
}

impl FamilyGroupListing {
    pub fn principal_name(&self) -> &str {
        self.farmer.as_ref().map(|f| f.name.as_str()).unwrap_or("-")
    }
}

/// The six crops tracked per family group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crop {
    Canola,
    Wheat,
    CornSilage,
    GrainCorn,
    Bean,
    Soybean,
}

impl Crop {
    pub const ALL: [Crop; 6] = [
        Self::Canola,
        Self::Wheat,
        Self::CornSilage,
        Self::GrainCorn,
        Self::Bean,
        Self::Soybean,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Canola => "Canola",
            Self::Wheat => "Wheat",
            Self::CornSilage => "Corn (silage)",
            Self::GrainCorn => "Corn (grain)",
            Self::Bean => "Bean",
            Self::Soybean => "Soybean",
        }
    }
}

/// Cultivated area per crop, in hectares. Null fields count as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cultivation {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub canola_area: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub wheat_area: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub corn_silage_area: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub grain_corn_area: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub bean_area: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub soybean_area: f64,
}

impl Cultivation {
    pub fn area(&self, crop: Crop) -> f64 {
        match crop {
            Crop::Canola => self.canola_area,
            Crop::Wheat => self.wheat_area,
            Crop::CornSilage => self.corn_silage_area,
            Crop::GrainCorn => self.grain_corn_area,
            Crop::Bean => self.bean_area,
            Crop::Soybean => self.soybean_area,
        }
    }

    pub fn set_area(&mut self, crop: Crop, value: f64) {
        let slot = match crop {
            Crop::Canola => &mut self.canola_area,
            Crop::Wheat => &mut self.wheat_area,
            Crop::CornSilage => &mut self.corn_silage_area,
            Crop::GrainCorn => &mut self.grain_corn_area,
            Crop::Bean => &mut self.bean_area,
            Crop::Soybean => &mut self.soybean_area,
        };
        *slot = value;
    }
}

/// Cultivation with the cooperative's participation share per crop.
///
/// Missing or null fields on the wire count as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CultivationReport {
    #[serde(flatten)]
    pub areas: Cultivation,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub canola_area_participation: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub wheat_area_participation: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub corn_silage_area_participation: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub grain_corn_area_participation: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub bean_area_participation: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub soybean_area_participation: f64,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// One crop's slice of an aggregated report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropShare {
    pub crop: Crop,
    pub total: f64,
    pub participation: f64,
    /// `total - participation`, floored at zero.
    pub remaining: f64,
}

impl CultivationReport {
    pub fn participation(&self, crop: Crop) -> f64 {
        match crop {
            Crop::Canola => self.canola_area_participation,
            Crop::Wheat => self.wheat_area_participation,
            Crop::CornSilage => self.corn_silage_area_participation,
            Crop::GrainCorn => self.grain_corn_area_participation,
            Crop::Bean => self.bean_area_participation,
            Crop::Soybean => self.soybean_area_participation,
        }
    }

    fn add(mut self, other: &CultivationReport) -> Self {
        for crop in Crop::ALL {
            self.areas
                .set_area(crop, self.areas.area(crop) + other.areas.area(crop));
        }
        self.canola_area_participation += other.canola_area_participation;
        self.wheat_area_participation += other.wheat_area_participation;
        self.corn_silage_area_participation +=
            other.corn_silage_area_participation;
        self.grain_corn_area_participation += other.grain_corn_area_participation;
        self.bean_area_participation += other.bean_area_participation;
        self.soybean_area_participation += other.soybean_area_participation;
        self
    }

    /// Field-wise sum of many reports.
    pub fn sum<'a>(reports: impl IntoIterator<Item = &'a CultivationReport>) -> Self {
        reports
            .into_iter()
            .fold(CultivationReport::default(), |acc, r| acc.add(r))
    }

    pub fn shares(&self) -> Vec<CropShare> {
        Crop::ALL
            .into_iter()
            .map(|crop| {
                let total = self.areas.area(crop);
                let participation = self.participation(crop);
                CropShare {
                    crop,
                    total,
                    participation,
                    remaining: (total - participation).max(0.0),
                }
            })
            .collect()
    }
}

/// A family group with its members and cultivation figures, as used by the
/// report views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyGroupMembers {
    pub family_group_id: FamilyGroupId,
    pub principal: Farmer,
    #[serde(default)]
    pub members: Vec<Farmer>,
    #[serde(flatten)]
    pub cultivation: CultivationReport,
}

impl FamilyGroupMembers {
    pub fn total_area(&self) -> f64 {
        farmers_total_area(&self.members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn farmer(reg: &str, owned: f64, leased: f64) -> Farmer {
        Farmer {
            registration_number: reg.into(),
            name: format!("Farmer {reg}"),
            status: FarmerStatus::Active,
            technician: None,
            branch: None,
            family_group: None,
            farmer_type: None,
            owned_area: owned,
            leased_area: leased,
            owned_assets: vec![],
            leased_assets: vec![],
        }
    }

    #[test]
    fn page_envelope_ignores_unused_fields() {
        let page: Page<Branch> = serde_json::from_value(json!({
            "content": [{"id": 1, "name": "North"}],
            "totalPages": 5,
            "totalElements": 47,
            "pageable": {"pageNumber": 0},
            "first": true
        }))
        .unwrap();

        assert_eq!(page.total_pages, 5);
        assert_eq!(page.total_elements, 47);
        assert_eq!(page.content[0].name, "North");
        assert_eq!(page.last, None);
    }

    #[test]
    fn farmer_tolerates_sparse_records() {
        let farmer: Farmer = serde_json::from_value(json!({
            "registrationNumber": "88",
            "name": "Ana",
            "status": "DECEASED",
            "technician": null,
            "type": {"id": 2, "description": "Cooperated"}
        }))
        .unwrap();

        assert_eq!(farmer.status, FarmerStatus::Deceased);
        assert_eq!(farmer.total_area(), 0.0);
        assert_eq!(farmer.farmer_type.unwrap().description, "Cooperated");
    }

    #[test]
    fn total_area_sums_owned_and_leased() {
        let farmers = [farmer("1", 10.5, 2.0), farmer("2", 0.0, 7.25)];
        assert_eq!(farmers_total_area(&farmers), 19.75);
    }

    #[test]
    fn report_sum_and_shares() {
        let a: CultivationReport = serde_json::from_value(json!({
            "canolaArea": 10.0, "canolaAreaParticipation": 4.0,
            "soybeanArea": 20.0, "soybeanAreaParticipation": null
        }))
        .unwrap();
        let b: CultivationReport = serde_json::from_value(json!({
            "canolaArea": 5.0, "canolaAreaParticipation": 1.0,
            "soybeanArea": 3.0, "soybeanAreaParticipation": 5.0
        }))
        .unwrap();

        let total = CultivationReport::sum([&a, &b]);
        let shares = total.shares();
        let canola = shares.iter().find(|s| s.crop == Crop::Canola).unwrap();
        assert_eq!(canola.total, 15.0);
        assert_eq!(canola.participation, 5.0);
        assert_eq!(canola.remaining, 10.0);

        let soybean = shares.iter().find(|s| s.crop == Crop::Soybean).unwrap();
        assert_eq!(soybean.total, 23.0);
        assert_eq!(soybean.remaining, 18.0);
        assert_eq!(shares.len(), 6);
    }

    #[test]
    fn family_group_members_flattens_cultivation() {
        let group: FamilyGroupMembers = serde_json::from_value(json!({
            "familyGroupId": 3,
            "principal": {"registrationNumber": "1", "name": "P", "status": "ACTIVE"},
            "members": [
                {"registrationNumber": "1", "name": "P", "status": "ACTIVE", "ownedArea": 12.0},
                {"registrationNumber": "2", "name": "M", "status": "ACTIVE", "leasedArea": 3.0}
            ],
            "wheatArea": 8.0,
            "wheatAreaParticipation": 2.0
        }))
        .unwrap();

        assert_eq!(group.family_group_id, FamilyGroupId(3));
        assert_eq!(group.cultivation.areas.wheat_area, 8.0);
        assert_eq!(group.total_area(), 15.0);
    }
}
