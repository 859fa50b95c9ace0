use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Central sector schemes assessed for every holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemeType {
    PmKisan,
    JalJeevanMission,
    Mgnrega,
    Dajgua,
    PmAwasGramin,
    AyushmanBharat,
}

impl SchemeType {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::PmKisan,
            Self::JalJeevanMission,
            Self::Mgnrega,
            Self::Dajgua,
            Self::PmAwasGramin,
            Self::AyushmanBharat,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PmKisan => "PM_KISAN",
            Self::JalJeevanMission => "JAL_JEEVAN_MISSION",
            Self::Mgnrega => "MGNREGA",
            Self::Dajgua => "DAJGUA",
            Self::PmAwasGramin => "PM_AWAS_GRAMIN",
            Self::AyushmanBharat => "AYUSHMAN_BHARAT",
        }
    }
}

impl fmt::Display for SchemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SchemeType {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        Self::ordered()
            .into_iter()
            .find(|scheme| scheme.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownLabel::new("scheme", wanted))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EligibilityStatus {
    Eligible,
    NotEligible,
    RequiresVerification,
    PendingDocuments,
}

impl EligibilityStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Eligible => "ELIGIBLE",
            Self::NotEligible => "NOT_ELIGIBLE",
            Self::RequiresVerification => "REQUIRES_VERIFICATION",
            Self::PendingDocuments => "PENDING_DOCUMENTS",
        }
    }
}

/// Urgency band assigned to an intervention from its priority score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterventionPriority {
    /// Immediate intervention required.
    Critical,
    /// Urgent within 6 months.
    High,
    /// Within 1 year.
    Medium,
    /// Within 2-3 years.
    Low,
}

impl InterventionPriority {
    pub const fn ordered() -> [Self; 4] {
        [Self::Critical, Self::High, Self::Medium, Self::Low]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    /// Sort key where the most severe band comes first.
    pub const fn severity_rank(self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    pub const fn is_urgent(self) -> bool {
        matches!(self, Self::Critical | Self::High)
    }
}

impl fmt::Display for InterventionPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InterventionPriority {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        Self::ordered()
            .into_iter()
            .find(|priority| priority.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownLabel::new("priority", wanted))
    }
}

/// Infrastructure domains eligible for prioritized village investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterventionCategory {
    WaterInfrastructure,
    ElectricityInfrastructure,
    RoadConnectivity,
    HealthInfrastructure,
    EducationInfrastructure,
}

impl InterventionCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::WaterInfrastructure,
            Self::ElectricityInfrastructure,
            Self::RoadConnectivity,
            Self::HealthInfrastructure,
            Self::EducationInfrastructure,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::WaterInfrastructure => "water_infrastructure",
            Self::ElectricityInfrastructure => "electricity_infrastructure",
            Self::RoadConnectivity => "road_connectivity",
            Self::HealthInfrastructure => "health_infrastructure",
            Self::EducationInfrastructure => "education_infrastructure",
        }
    }

    /// Village index whose deficit drives this category.
    pub const fn index_field(self) -> IndexField {
        match self {
            Self::WaterInfrastructure => IndexField::Water,
            Self::ElectricityInfrastructure => IndexField::Electricity,
            Self::RoadConnectivity => IndexField::RoadConnectivity,
            Self::HealthInfrastructure => IndexField::HealthFacility,
            Self::EducationInfrastructure => IndexField::Education,
        }
    }
}

impl fmt::Display for InterventionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Selector over the 0-100 infrastructure indices of a village.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexField {
    Water,
    Electricity,
    RoadConnectivity,
    HealthFacility,
    Education,
}

impl IndexField {
    pub fn read(self, village: &VillageProfile) -> f64 {
        match self {
            Self::Water => village.water_index,
            Self::Electricity => village.electricity_index,
            Self::RoadConnectivity => village.road_connectivity_index,
            Self::HealthFacility => village.health_facility_index,
            Self::Education => village.education_index,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Water => "water_index",
            Self::Electricity => "electricity_index",
            Self::RoadConnectivity => "road_connectivity_index",
            Self::HealthFacility => "health_facility_index",
            Self::Education => "education_index",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialCategory {
    #[serde(rename = "ST")]
    ScheduledTribe,
    #[serde(rename = "SC")]
    ScheduledCaste,
    #[serde(rename = "OBC")]
    OtherBackwardClass,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// FRA patta holder as supplied by the caller; never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraHolder {
    pub holder_id: String,
    pub name: String,
    pub family_size: u32,
    pub land_area_hectares: f64,
    #[serde(default)]
    pub annual_income: Option<f64>,
    pub social_category: SocialCategory,
    pub has_bank_account: bool,
    pub aadhaar_linked: bool,
    pub village_code: String,
    pub district: String,
    pub state: String,
    pub age: u32,
    pub gender: Gender,
    pub education_level: String,
    pub occupation: String,
    pub has_electricity: bool,
    pub has_toilet: bool,
    pub water_source: String,
    #[serde(default)]
    pub mobile_number: Option<String>,
}

/// Village-level demographic and infrastructure data.
///
/// Indices and percentages are on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VillageProfile {
    pub village_code: String,
    pub village_name: String,
    pub block: String,
    pub district: String,
    pub state: String,
    pub total_households: u32,
    pub st_households: u32,
    pub sc_households: u32,
    pub total_population: u32,
    pub st_population: u32,
    pub water_index: f64,
    pub electricity_index: f64,
    pub road_connectivity_index: f64,
    pub health_facility_index: f64,
    pub education_index: f64,
    pub livelihood_index: f64,
    pub forest_cover_percent: f64,
    pub agricultural_land_percent: f64,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl VillageProfile {
    /// Share of the population that is Scheduled Tribe, zero for an empty village.
    pub fn st_population_ratio(&self) -> f64 {
        if self.total_population == 0 {
            return 0.0;
        }
        f64::from(self.st_population) / f64::from(self.total_population)
    }
}

/// Outcome of one scheme check for one holder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeEligibility {
    pub scheme: SchemeType,
    pub status: EligibilityStatus,
    pub confidence_score: f64,
    pub eligible_amount: Option<f64>,
    pub reasons: Vec<String>,
    pub required_documents: Vec<String>,
    pub timeline_months: Option<u32>,
}

impl SchemeEligibility {
    /// Amount that counts towards individual benefit budgets.
    pub fn payable_amount(&self) -> Option<f64> {
        match self.status {
            EligibilityStatus::Eligible => self.eligible_amount,
            _ => None,
        }
    }
}

/// Ranked village-level intervention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterventionRecommendation {
    pub village_code: String,
    pub intervention_type: InterventionCategory,
    pub priority: InterventionPriority,
    pub estimated_beneficiaries: u32,
    pub estimated_cost: f64,
    pub implementing_ministry: String,
    pub timeline_months: u32,
    pub success_probability: f64,
    pub impact_score: f64,
    pub reasoning: String,
}

/// Raised when a CLI or query label does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownLabel {
    kind: &'static str,
    value: String,
}

impl UnknownLabel {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
