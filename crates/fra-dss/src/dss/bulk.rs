use super::domain::{
    FraHolder, InterventionPriority, InterventionRecommendation, SchemeEligibility, SchemeType,
    VillageProfile,
};
use super::eligibility::EligibilityAssessor;
use super::interventions::InterventionPrioritizer;
use std::collections::BTreeMap;

/// Assess many holders, keeping only the requested schemes when a non-empty filter is given.
pub fn assess_bulk(
    assessor: &EligibilityAssessor,
    holders: &[FraHolder],
    scheme_filter: Option<&[SchemeType]>,
) -> BTreeMap<String, Vec<SchemeEligibility>> {
    let filter = scheme_filter.filter(|schemes| !schemes.is_empty());

    holders
        .iter()
        .map(|holder| {
            let mut results = assessor.assess(holder);
            if let Some(schemes) = filter {
                results.retain(|result| schemes.contains(&result.scheme));
            }
            (holder.holder_id.clone(), results)
        })
        .collect()
}

/// Rank interventions for many villages, optionally keeping a single priority level.
pub fn prioritize_bulk(
    prioritizer: &InterventionPrioritizer,
    villages: &[VillageProfile],
    priority_filter: Option<InterventionPriority>,
) -> BTreeMap<String, Vec<InterventionRecommendation>> {
    villages
        .iter()
        .map(|village| {
            let mut ranked = prioritizer.prioritize(village);
            if let Some(level) = priority_filter {
                ranked.retain(|recommendation| recommendation.priority == level);
            }
            (village.village_code.clone(), ranked)
        })
        .collect()
}
