mod gaps;
mod plan;
mod recommendations;
pub mod views;

pub use views::{
    CoverageGaps, EligibilityGap, EligibilityGaps, ImplementationPhase, ImplementationTimeline,
    InfrastructureGap, InfrastructureGaps, PolicyRecommendations, PolicySummary,
    RegionalIntervention, ResourceAllocation,
};

use super::domain::{FraHolder, InterventionRecommendation, SchemeEligibility, VillageProfile};
use super::eligibility::EligibilityAssessor;
use super::interventions::InterventionPrioritizer;
use serde::{Deserialize, Serialize};
use tracing::info;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Whether per-record evaluation fans out across threads.
///
/// `Parallel` only takes effect when the crate is built with the `parallel`
/// feature; otherwise records are evaluated in order on the calling thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    #[default]
    Sequential,
    Parallel,
}

/// Folds per-holder assessments and per-village rankings into a policy report.
#[derive(Debug, Clone)]
pub struct PolicyAggregator {
    assessor: EligibilityAssessor,
    prioritizer: InterventionPrioritizer,
    mode: EvaluationMode,
}

impl PolicyAggregator {
    pub fn new(
        assessor: EligibilityAssessor,
        prioritizer: InterventionPrioritizer,
        mode: EvaluationMode,
    ) -> Self {
        Self {
            assessor,
            prioritizer,
            mode,
        }
    }

    pub fn aggregate(
        &self,
        villages: &[VillageProfile],
        holders: &[FraHolder],
    ) -> PolicyRecommendations {
        let plans: Vec<plan::VillagePlan<'_>> = villages
            .iter()
            .zip(self.rank_villages(villages))
            .collect();
        let assessments = self.assess_holders(holders);

        let coverage_gaps = gaps::analyze(villages, holders);
        let priority_interventions = plan::regional_priorities(&plans);
        let resource_allocation = plan::resource_allocation(&plans, &assessments);
        let implementation_timeline = plan::implementation_timeline(&plans);
        let key_recommendations = recommendations::key_policy_points(&coverage_gaps);

        let summary = PolicySummary {
            total_villages_analyzed: villages.len(),
            total_fra_holders: holders.len(),
            high_priority_villages: villages
                .iter()
                .filter(|village| recommendations::is_high_priority_village(village))
                .count(),
            estimated_total_investment: resource_allocation.total(),
        };

        info!(
            villages = summary.total_villages_analyzed,
            holders = summary.total_fra_holders,
            high_priority = summary.high_priority_villages,
            investment = summary.estimated_total_investment,
            "generated policy recommendations"
        );

        PolicyRecommendations {
            summary,
            coverage_gaps,
            priority_interventions,
            resource_allocation,
            implementation_timeline,
            key_recommendations,
        }
    }

    fn rank_villages(&self, villages: &[VillageProfile]) -> Vec<Vec<InterventionRecommendation>> {
        match self.mode {
            #[cfg(feature = "parallel")]
            EvaluationMode::Parallel => villages
                .par_iter()
                .map(|village| self.prioritizer.prioritize(village))
                .collect(),
            _ => villages
                .iter()
                .map(|village| self.prioritizer.prioritize(village))
                .collect(),
        }
    }

    fn assess_holders(&self, holders: &[FraHolder]) -> Vec<Vec<SchemeEligibility>> {
        match self.mode {
            #[cfg(feature = "parallel")]
            EvaluationMode::Parallel => holders
                .par_iter()
                .map(|holder| self.assessor.assess(holder))
                .collect(),
            _ => holders
                .iter()
                .map(|holder| self.assessor.assess(holder))
                .collect(),
        }
    }
}
