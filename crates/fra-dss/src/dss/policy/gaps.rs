use std::collections::HashMap;

use super::super::domain::{FraHolder, VillageProfile};
use super::views::{
    CoverageGaps, EligibilityGap, EligibilityGaps, InfrastructureGap, InfrastructureGaps,
};

const GAP_THRESHOLD: f64 = 50.0;
const ROAD_GAP_THRESHOLD: f64 = 40.0;
const TOP_STATES: usize = 5;

pub(crate) fn analyze(villages: &[VillageProfile], holders: &[FraHolder]) -> CoverageGaps {
    let water: Vec<&VillageProfile> = villages
        .iter()
        .filter(|village| village.water_index < GAP_THRESHOLD)
        .collect();

    let mut water_gap = village_gap(water.len(), villages.len());
    water_gap.priority_states = Some(top_states(water.iter().map(|village| village.state.as_str())));

    let infrastructure_gaps = InfrastructureGaps {
        water: water_gap,
        electricity: count_gap(villages, |village| village.electricity_index < GAP_THRESHOLD),
        roads: count_gap(villages, |village| {
            village.road_connectivity_index < ROAD_GAP_THRESHOLD
        }),
        health: count_gap(villages, |village| village.health_facility_index < GAP_THRESHOLD),
        education: count_gap(villages, |village| village.education_index < GAP_THRESHOLD),
    };

    let unbanked = holders
        .iter()
        .filter(|holder| !holder.has_bank_account)
        .count();
    let unlinked = holders
        .iter()
        .filter(|holder| !holder.aadhaar_linked)
        .count();

    CoverageGaps {
        infrastructure_gaps,
        eligibility_gaps: EligibilityGaps {
            banking: EligibilityGap {
                holders_affected: unbanked,
                percentage: percentage(unbanked, holders.len()),
            },
            aadhaar: EligibilityGap {
                holders_affected: unlinked,
                percentage: percentage(unlinked, holders.len()),
            },
        },
    }
}

fn count_gap<F>(villages: &[VillageProfile], lacking: F) -> InfrastructureGap
where
    F: Fn(&VillageProfile) -> bool,
{
    let affected = villages.iter().filter(|&village| lacking(village)).count();
    village_gap(affected, villages.len())
}

fn village_gap(affected: usize, total: usize) -> InfrastructureGap {
    InfrastructureGap {
        villages_affected: affected,
        percentage: percentage(affected, total),
        priority_states: None,
    }
}

pub(crate) fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Most frequent states first; ties keep first-seen order.
fn top_states<'a, I>(states: I) -> Vec<String>
where
    I: Iterator<Item = &'a str>,
{
    // state -> (first-seen position, count)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, state) in states.enumerate() {
        counts.entry(state).or_insert((position, 0)).1 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(state, (first_seen, count))| (state, first_seen, count))
        .collect();
    ranked.sort_by(|left, right| right.2.cmp(&left.2).then(left.1.cmp(&right.1)));
    ranked
        .into_iter()
        .take(TOP_STATES)
        .map(|(state, _, _)| state.to_string())
        .collect()
}
