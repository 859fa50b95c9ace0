use super::super::domain::{InterventionCategory, InterventionPriority};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRecommendations {
    pub summary: PolicySummary,
    pub coverage_gaps: CoverageGaps,
    /// CRITICAL and HIGH interventions grouped by state.
    pub priority_interventions: BTreeMap<String, Vec<RegionalIntervention>>,
    pub resource_allocation: ResourceAllocation,
    pub implementation_timeline: ImplementationTimeline,
    pub key_recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicySummary {
    pub total_villages_analyzed: usize,
    pub total_fra_holders: usize,
    pub high_priority_villages: usize,
    pub estimated_total_investment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageGaps {
    pub infrastructure_gaps: InfrastructureGaps,
    pub eligibility_gaps: EligibilityGaps,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfrastructureGaps {
    pub water: InfrastructureGap,
    pub electricity: InfrastructureGap,
    pub roads: InfrastructureGap,
    pub health: InfrastructureGap,
    pub education: InfrastructureGap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfrastructureGap {
    pub villages_affected: usize,
    pub percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_states: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityGaps {
    pub banking: EligibilityGap,
    pub aadhaar: EligibilityGap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityGap {
    pub holders_affected: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalIntervention {
    pub village: String,
    pub district: String,
    pub intervention: InterventionCategory,
    pub priority: InterventionPriority,
    pub cost: f64,
    pub beneficiaries: u32,
}

/// Budget buckets: one per intervention category plus individual scheme benefits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceAllocation {
    pub water_infrastructure: f64,
    pub electricity_infrastructure: f64,
    pub road_connectivity: f64,
    pub health_infrastructure: f64,
    pub education_infrastructure: f64,
    pub individual_benefits: f64,
}

impl ResourceAllocation {
    pub fn category(&self, category: InterventionCategory) -> f64 {
        match category {
            InterventionCategory::WaterInfrastructure => self.water_infrastructure,
            InterventionCategory::ElectricityInfrastructure => self.electricity_infrastructure,
            InterventionCategory::RoadConnectivity => self.road_connectivity,
            InterventionCategory::HealthInfrastructure => self.health_infrastructure,
            InterventionCategory::EducationInfrastructure => self.education_infrastructure,
        }
    }

    pub(crate) fn add(&mut self, category: InterventionCategory, amount: f64) {
        let bucket = match category {
            InterventionCategory::WaterInfrastructure => &mut self.water_infrastructure,
            InterventionCategory::ElectricityInfrastructure => {
                &mut self.electricity_infrastructure
            }
            InterventionCategory::RoadConnectivity => &mut self.road_connectivity,
            InterventionCategory::HealthInfrastructure => &mut self.health_infrastructure,
            InterventionCategory::EducationInfrastructure => &mut self.education_infrastructure,
        };
        *bucket += amount;
    }

    pub fn total(&self) -> f64 {
        InterventionCategory::ordered()
            .into_iter()
            .map(|category| self.category(category))
            .sum::<f64>()
            + self.individual_benefits
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImplementationPhase {
    Immediate,
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl ImplementationPhase {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Immediate,
            Self::ShortTerm,
            Self::MediumTerm,
            Self::LongTerm,
        ]
    }

    pub const fn for_priority(priority: InterventionPriority) -> Self {
        match priority {
            InterventionPriority::Critical => Self::Immediate,
            InterventionPriority::High => Self::ShortTerm,
            InterventionPriority::Medium => Self::MediumTerm,
            InterventionPriority::Low => Self::LongTerm,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Immediate => "Phase 1 (0-6 months)",
            Self::ShortTerm => "Phase 2 (6-12 months)",
            Self::MediumTerm => "Phase 3 (12-24 months)",
            Self::LongTerm => "Phase 4 (24+ months)",
        }
    }
}

/// Phased rollout with `"{village}: {intervention}"` entries per phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImplementationTimeline {
    #[serde(rename = "Phase 1 (0-6 months)")]
    pub phase_1: Vec<String>,
    #[serde(rename = "Phase 2 (6-12 months)")]
    pub phase_2: Vec<String>,
    #[serde(rename = "Phase 3 (12-24 months)")]
    pub phase_3: Vec<String>,
    #[serde(rename = "Phase 4 (24+ months)")]
    pub phase_4: Vec<String>,
}

impl ImplementationTimeline {
    pub fn phase(&self, phase: ImplementationPhase) -> &[String] {
        match phase {
            ImplementationPhase::Immediate => &self.phase_1,
            ImplementationPhase::ShortTerm => &self.phase_2,
            ImplementationPhase::MediumTerm => &self.phase_3,
            ImplementationPhase::LongTerm => &self.phase_4,
        }
    }

    pub(crate) fn push(&mut self, phase: ImplementationPhase, entry: String) {
        let bucket = match phase {
            ImplementationPhase::Immediate => &mut self.phase_1,
            ImplementationPhase::ShortTerm => &mut self.phase_2,
            ImplementationPhase::MediumTerm => &mut self.phase_3,
            ImplementationPhase::LongTerm => &mut self.phase_4,
        };
        bucket.push(entry);
    }
}
