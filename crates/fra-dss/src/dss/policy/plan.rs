use super::super::domain::{InterventionRecommendation, SchemeEligibility, VillageProfile};
use super::views::{
    ImplementationPhase, ImplementationTimeline, RegionalIntervention, ResourceAllocation,
};
use std::collections::BTreeMap;

/// Village paired with its already-ranked interventions.
pub(crate) type VillagePlan<'a> = (&'a VillageProfile, Vec<InterventionRecommendation>);

pub(crate) fn regional_priorities(
    plans: &[VillagePlan<'_>],
) -> BTreeMap<String, Vec<RegionalIntervention>> {
    let mut by_state: BTreeMap<String, Vec<RegionalIntervention>> = BTreeMap::new();

    for (village, interventions) in plans {
        let entries = by_state.entry(village.state.clone()).or_default();
        entries.extend(
            interventions
                .iter()
                .filter(|intervention| intervention.priority.is_urgent())
                .map(|intervention| RegionalIntervention {
                    village: village.village_name.clone(),
                    district: village.district.clone(),
                    intervention: intervention.intervention_type,
                    priority: intervention.priority,
                    cost: intervention.estimated_cost,
                    beneficiaries: intervention.estimated_beneficiaries,
                }),
        );
    }

    by_state
}

pub(crate) fn resource_allocation(
    plans: &[VillagePlan<'_>],
    assessments: &[Vec<SchemeEligibility>],
) -> ResourceAllocation {
    let mut allocation = ResourceAllocation::default();

    for intervention in plans
        .iter()
        .flat_map(|(_, interventions)| interventions)
        .filter(|intervention| intervention.priority.is_urgent())
    {
        allocation.add(intervention.intervention_type, intervention.estimated_cost);
    }

    allocation.individual_benefits = assessments
        .iter()
        .flatten()
        .filter_map(SchemeEligibility::payable_amount)
        .sum();

    allocation
}

pub(crate) fn implementation_timeline(plans: &[VillagePlan<'_>]) -> ImplementationTimeline {
    let mut timeline = ImplementationTimeline::default();

    for (village, interventions) in plans {
        for intervention in interventions {
            timeline.push(
                ImplementationPhase::for_priority(intervention.priority),
                format!(
                    "{}: {}",
                    village.village_name, intervention.intervention_type
                ),
            );
        }
    }

    timeline
}
