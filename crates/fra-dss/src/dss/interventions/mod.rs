mod scoring;

use super::catalog::{InterventionRule, RuleCatalog};
use super::domain::{InterventionRecommendation, VillageProfile};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

/// How ranked interventions are ordered before they are returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityOrdering {
    /// CRITICAL, HIGH, MEDIUM, LOW.
    #[default]
    Severity,
    /// Lexical order of the level labels (CRITICAL, HIGH, LOW, MEDIUM).
    Alphabetic,
}

impl PriorityOrdering {
    fn compare(
        self,
        left: &InterventionRecommendation,
        right: &InterventionRecommendation,
    ) -> Ordering {
        let by_level = match self {
            Self::Severity => left
                .priority
                .severity_rank()
                .cmp(&right.priority.severity_rank()),
            Self::Alphabetic => left.priority.label().cmp(right.priority.label()),
        };

        by_level.then_with(|| right.impact_score.total_cmp(&left.impact_score))
    }
}

/// Ranks infrastructure interventions for a single village.
#[derive(Debug, Clone)]
pub struct InterventionPrioritizer {
    catalog: Arc<RuleCatalog>,
    ordering: PriorityOrdering,
}

impl InterventionPrioritizer {
    pub fn new(catalog: Arc<RuleCatalog>) -> Self {
        Self::with_ordering(catalog, PriorityOrdering::default())
    }

    pub fn with_ordering(catalog: Arc<RuleCatalog>, ordering: PriorityOrdering) -> Self {
        Self { catalog, ordering }
    }

    pub fn ordering(&self) -> PriorityOrdering {
        self.ordering
    }

    /// Zero or one recommendation per category whose trigger fires, ranked.
    pub fn prioritize(&self, village: &VillageProfile) -> Vec<InterventionRecommendation> {
        let mut recommendations: Vec<InterventionRecommendation> = self
            .catalog
            .interventions
            .iter()
            .filter_map(|rule| recommend(village, rule))
            .collect();

        recommendations.sort_by(|left, right| self.ordering.compare(left, right));

        debug!(
            village_code = %village.village_code,
            triggered = recommendations.len(),
            "prioritized village interventions"
        );

        recommendations
    }
}

fn recommend(village: &VillageProfile, rule: &InterventionRule) -> Option<InterventionRecommendation> {
    let impact_factors = rule.impact_factors(village);
    if impact_factors.is_empty() {
        return None;
    }

    let score = scoring::priority_score(village, &impact_factors);
    let priority = scoring::priority_level(score);

    Some(InterventionRecommendation {
        village_code: village.village_code.clone(),
        intervention_type: rule.category,
        priority,
        estimated_beneficiaries: village.st_households.min(village.total_households),
        estimated_cost: rule.average_cost_per_village,
        implementing_ministry: rule.implementing_ministry.to_string(),
        timeline_months: rule.timeline_months,
        success_probability: scoring::success_probability(village),
        impact_score: score,
        reasoning: format!(
            "Village {} requires {} intervention due to low infrastructure indices. Priority: {}, Expected impact: {:.2}",
            village.village_name,
            rule.category,
            priority.label(),
            score
        ),
    })
}
