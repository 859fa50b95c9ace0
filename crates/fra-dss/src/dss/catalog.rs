use super::domain::{IndexField, InterventionCategory, SchemeType, VillageProfile};
use serde::Serialize;

/// Static rule tables shared by the assessor, prioritizer, and aggregator.
///
/// Built once when the engine is constructed and only ever read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleCatalog {
    pub schemes: SchemeRules,
    pub interventions: Vec<InterventionRule>,
}

impl RuleCatalog {
    pub fn standard() -> Self {
        Self {
            schemes: SchemeRules::standard(),
            interventions: InterventionCategory::ordered()
                .into_iter()
                .map(InterventionRule::standard)
                .collect(),
        }
    }

    pub fn intervention(&self, category: InterventionCategory) -> Option<&InterventionRule> {
        self.interventions
            .iter()
            .find(|rule| rule.category == category)
    }

    /// Candidate works for a category, in catalog order.
    pub fn candidate_works(&self, category: InterventionCategory) -> &[&'static str] {
        self.intervention(category)
            .map(|rule| rule.interventions.as_slice())
            .unwrap_or_default()
    }

    /// Public-facing description of each scheme, derived from the rule values.
    pub fn scheme_info(&self) -> Vec<SchemeInfo> {
        SchemeType::ordered()
            .into_iter()
            .map(|scheme| self.schemes.info(scheme))
            .collect()
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchemeRules {
    pub pm_kisan: PmKisanRules,
    pub jal_jeevan: JalJeevanRules,
    pub mgnrega: MgnregaRules,
    pub dajgua: DajguaRules,
    pub housing: HousingRules,
    pub health: HealthRules,
}

impl SchemeRules {
    pub fn standard() -> Self {
        Self {
            pm_kisan: PmKisanRules {
                max_annual_income: 200_000.0,
                min_land_area: 0.01,
                excluded_occupations: [
                    "doctor",
                    "engineer",
                    "lawyer",
                    "chartered_accountant",
                    "architect",
                ]
                .into_iter()
                .map(str::to_string)
                .collect(),
                annual_benefit: 6_000.0,
                installments: 3,
            },
            jal_jeevan: JalJeevanRules {
                timeline_months: 12,
            },
            mgnrega: MgnregaRules {
                guaranteed_days: 100,
                daily_wage: 200.0,
                minimum_age: 18,
            },
            dajgua: DajguaRules {
                total_interventions: 25,
                target_villages: 63_843,
            },
            housing: HousingRules {
                assistance_amount: 130_000.0,
            },
            health: HealthRules {
                income_ceiling: 250_000.0,
                coverage_amount: 500_000.0,
            },
        }
    }

    fn info(&self, scheme: SchemeType) -> SchemeInfo {
        let blank = SchemeInfo {
            scheme,
            name: "",
            target_group: "",
            implementing_ministry: "",
            benefit_type: None,
            annual_benefit: None,
            installments: None,
            guaranteed_days: None,
            interventions: None,
            target_villages: None,
            assistance_amount: None,
            coverage_amount: None,
        };

        match scheme {
            SchemeType::PmKisan => SchemeInfo {
                name: "PM Kisan Samman Nidhi",
                target_group: "Land holding farmers",
                implementing_ministry: "Ministry of Agriculture and Farmers Welfare",
                annual_benefit: Some(self.pm_kisan.annual_benefit),
                installments: Some(self.pm_kisan.installments),
                ..blank
            },
            SchemeType::JalJeevanMission => SchemeInfo {
                name: "Jal Jeevan Mission (Har Ghar Jal)",
                target_group: "All rural households",
                implementing_ministry: "Ministry of Jal Shakti",
                benefit_type: Some("Infrastructure"),
                ..blank
            },
            SchemeType::Mgnrega => SchemeInfo {
                name: "Mahatma Gandhi National Rural Employment Guarantee Act",
                target_group: "Adult members of rural households",
                implementing_ministry: "Ministry of Rural Development",
                guaranteed_days: Some(self.mgnrega.guaranteed_days),
                ..blank
            },
            SchemeType::Dajgua => SchemeInfo {
                name: "Dharti Aaba Janjatiya Gram Utkarsh Abhiyan",
                target_group: "Scheduled Tribe villages",
                implementing_ministry: "Ministry of Tribal Affairs",
                interventions: Some(self.dajgua.total_interventions),
                target_villages: Some(self.dajgua.target_villages),
                ..blank
            },
            SchemeType::PmAwasGramin => SchemeInfo {
                name: "PM Awas Yojana Gramin",
                target_group: "Rural households without pucca houses",
                implementing_ministry: "Ministry of Rural Development",
                assistance_amount: Some(self.housing.assistance_amount),
                ..blank
            },
            SchemeType::AyushmanBharat => SchemeInfo {
                name: "Ayushman Bharat PM-JAY",
                target_group: "Vulnerable families",
                implementing_ministry: "Ministry of Health and Family Welfare",
                coverage_amount: Some(self.health.coverage_amount),
                ..blank
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PmKisanRules {
    pub max_annual_income: f64,
    pub min_land_area: f64,
    /// Lower-case occupation names excluded from the scheme.
    pub excluded_occupations: Vec<String>,
    pub annual_benefit: f64,
    pub installments: u8,
}

impl PmKisanRules {
    pub fn excludes_occupation(&self, occupation: &str) -> bool {
        let occupation = occupation.to_lowercase();
        self.excluded_occupations
            .iter()
            .any(|excluded| *excluded == occupation)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JalJeevanRules {
    pub timeline_months: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MgnregaRules {
    pub guaranteed_days: u32,
    pub daily_wage: f64,
    pub minimum_age: u32,
}

impl MgnregaRules {
    pub fn annual_entitlement(&self) -> f64 {
        f64::from(self.guaranteed_days) * self.daily_wage
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DajguaRules {
    pub total_interventions: u32,
    pub target_villages: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HousingRules {
    pub assistance_amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HealthRules {
    pub income_ceiling: f64,
    pub coverage_amount: f64,
}

/// Fires when one village index sits strictly below its threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerCondition {
    pub field: IndexField,
    pub threshold: f64,
}

impl TriggerCondition {
    pub const fn below(field: IndexField, threshold: f64) -> Self {
        Self { field, threshold }
    }

    /// Normalized deficit of the index when the condition fires.
    pub fn impact_factor(&self, village: &VillageProfile) -> Option<f64> {
        let value = self.field.read(village);
        (value < self.threshold).then(|| (100.0 - value) / 100.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterventionRule {
    pub category: InterventionCategory,
    pub triggers: Vec<TriggerCondition>,
    pub interventions: Vec<&'static str>,
    pub implementing_ministry: &'static str,
    pub average_cost_per_village: f64,
    pub timeline_months: u32,
}

impl InterventionRule {
    pub fn standard(category: InterventionCategory) -> Self {
        let field = category.index_field();
        match category {
            InterventionCategory::WaterInfrastructure => Self {
                category,
                triggers: vec![TriggerCondition::below(field, 40.0)],
                interventions: vec!["borewell", "hand_pump", "water_treatment_plant"],
                implementing_ministry: "Ministry of Jal Shakti",
                average_cost_per_village: 500_000.0,
                timeline_months: 6,
            },
            InterventionCategory::ElectricityInfrastructure => Self {
                category,
                triggers: vec![TriggerCondition::below(field, 50.0)],
                interventions: vec!["solar_power", "grid_connection", "micro_grid"],
                implementing_ministry: "Ministry of Power",
                average_cost_per_village: 800_000.0,
                timeline_months: 8,
            },
            InterventionCategory::RoadConnectivity => Self {
                category,
                triggers: vec![TriggerCondition::below(field, 30.0)],
                interventions: vec!["all_weather_road", "bridge_construction"],
                implementing_ministry: "Ministry of Rural Development",
                average_cost_per_village: 2_000_000.0,
                timeline_months: 12,
            },
            InterventionCategory::HealthInfrastructure => Self {
                category,
                triggers: vec![TriggerCondition::below(field, 40.0)],
                interventions: vec!["sub_center", "phc_upgrade", "ambulance"],
                implementing_ministry: "Ministry of Health and Family Welfare",
                average_cost_per_village: 1_500_000.0,
                timeline_months: 10,
            },
            InterventionCategory::EducationInfrastructure => Self {
                category,
                triggers: vec![TriggerCondition::below(field, 50.0)],
                interventions: vec!["anganwadi_center", "school_building", "digital_classroom"],
                implementing_ministry: "Ministry of Education",
                average_cost_per_village: 1_000_000.0,
                timeline_months: 8,
            },
        }
    }

    /// Impact factors of the triggers on this category's own index.
    ///
    /// Evaluation stops at the first condition that fires.
    pub fn impact_factors(&self, village: &VillageProfile) -> Vec<f64> {
        let field = self.category.index_field();
        self.triggers
            .iter()
            .filter(|condition| condition.field == field)
            .find_map(|condition| condition.impact_factor(village))
            .into_iter()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemeInfo {
    #[serde(skip)]
    pub scheme: SchemeType,
    pub name: &'static str,
    pub target_group: &'static str,
    pub implementing_ministry: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefit_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_benefit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guaranteed_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interventions: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_villages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistance_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_amount: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_covers_every_category_once() {
        let catalog = RuleCatalog::standard();
        for category in InterventionCategory::ordered() {
            let rule = catalog.intervention(category).expect("rule present");
            assert_eq!(rule.triggers.len(), 1);
            assert_eq!(rule.triggers[0].field, category.index_field());
        }
        assert_eq!(catalog.interventions.len(), 5);
    }

    #[test]
    fn candidate_works_follow_catalog_order() {
        let catalog = RuleCatalog::standard();
        assert_eq!(
            catalog.candidate_works(InterventionCategory::WaterInfrastructure),
            &["borewell", "hand_pump", "water_treatment_plant"]
        );
        assert_eq!(
            catalog.candidate_works(InterventionCategory::RoadConnectivity),
            &["all_weather_road", "bridge_construction"]
        );
    }

    #[test]
    fn occupation_exclusion_ignores_case() {
        let rules = SchemeRules::standard().pm_kisan;
        assert!(rules.excludes_occupation("Doctor"));
        assert!(rules.excludes_occupation("CHARTERED_ACCOUNTANT"));
        assert!(!rules.excludes_occupation("farmer"));
    }

    #[test]
    fn scheme_info_reflects_rule_values() {
        let info = RuleCatalog::standard().scheme_info();
        assert_eq!(info.len(), 6);
        let kisan = &info[0];
        assert_eq!(kisan.scheme, SchemeType::PmKisan);
        assert_eq!(kisan.annual_benefit, Some(6_000.0));
        assert_eq!(kisan.installments, Some(3));
        let awas = info
            .iter()
            .find(|entry| entry.scheme == SchemeType::PmAwasGramin)
            .expect("housing info present");
        assert_eq!(awas.assistance_amount, Some(130_000.0));
    }
}
