use super::super::domain::{InterventionPriority, VillageProfile};

const IMPACT_WEIGHT: f64 = 0.6;
const TRIBAL_WEIGHT: f64 = 0.4;
const DEFAULT_IMPACT: f64 = 0.5;
const BASELINE_SUCCESS_RATE: f64 = 0.8;

pub(crate) fn priority_score(village: &VillageProfile, impact_factors: &[f64]) -> f64 {
    let mean_impact = if impact_factors.is_empty() {
        DEFAULT_IMPACT
    } else {
        impact_factors.iter().sum::<f64>() / impact_factors.len() as f64
    };

    mean_impact * IMPACT_WEIGHT + village.st_population_ratio() * TRIBAL_WEIGHT
}

pub(crate) fn priority_level(score: f64) -> InterventionPriority {
    if score >= 0.8 {
        InterventionPriority::Critical
    } else if score >= 0.6 {
        InterventionPriority::High
    } else if score >= 0.4 {
        InterventionPriority::Medium
    } else {
        InterventionPriority::Low
    }
}

/// Implementation feasibility for the village as a whole.
pub(crate) fn success_probability(village: &VillageProfile) -> f64 {
    let road_access = village.road_connectivity_index / 100.0;
    let power_access = if village.electricity_index > 50.0 {
        1.0
    } else {
        0.5
    };

    (road_access + power_access + BASELINE_SUCCESS_RATE) / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_are_inclusive() {
        assert_eq!(priority_level(0.8), InterventionPriority::Critical);
        assert_eq!(priority_level(0.79999), InterventionPriority::High);
        assert_eq!(priority_level(0.6), InterventionPriority::High);
        assert_eq!(priority_level(0.4), InterventionPriority::Medium);
        assert_eq!(priority_level(0.39), InterventionPriority::Low);
        assert_eq!(priority_level(0.0), InterventionPriority::Low);
    }
}
