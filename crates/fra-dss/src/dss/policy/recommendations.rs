use super::super::domain::VillageProfile;
use super::views::CoverageGaps;

const WATER_GAP_ALERT: f64 = 30.0;
const ELECTRICITY_GAP_ALERT: f64 = 25.0;
const ROAD_GAP_ALERT: f64 = 40.0;
const BANKING_GAP_ALERT: f64 = 20.0;
const AADHAAR_GAP_ALERT: f64 = 15.0;

const CONVERGENCE_STRATEGIES: [&str; 3] = [
    "Implement integrated approach: Link MGNREGA employment with infrastructure development",
    "Use PM-KISAN beneficiary database to identify eligible families for housing and health schemes",
    "Establish village-level coordination committees for multi-scheme implementation",
];

pub(crate) fn key_policy_points(gaps: &CoverageGaps) -> Vec<String> {
    let infrastructure = &gaps.infrastructure_gaps;
    let eligibility = &gaps.eligibility_gaps;

    let alerts = [
        (
            infrastructure.water.percentage > WATER_GAP_ALERT,
            "Accelerate Jal Jeevan Mission implementation in tribal areas - 30%+ villages lack adequate water infrastructure",
        ),
        (
            infrastructure.electricity.percentage > ELECTRICITY_GAP_ALERT,
            "Prioritize solar power and grid connectivity under DAJGUA for tribal villages with <50% electricity access",
        ),
        (
            infrastructure.roads.percentage > ROAD_GAP_ALERT,
            "Focus on all-weather road connectivity as prerequisite for other interventions",
        ),
        (
            eligibility.banking.percentage > BANKING_GAP_ALERT,
            "Conduct targeted banking camp in tribal villages - 20%+ FRA holders lack bank accounts",
        ),
        (
            eligibility.aadhaar.percentage > AADHAAR_GAP_ALERT,
            "Organize Aadhaar enrollment drives to ensure scheme eligibility compliance",
        ),
    ];

    alerts
        .into_iter()
        .filter_map(|(fired, sentence)| fired.then_some(sentence))
        .chain(CONVERGENCE_STRATEGIES)
        .map(str::to_string)
        .collect()
}

/// At least two of the four critical-index conditions must hold.
pub(crate) fn is_high_priority_village(village: &VillageProfile) -> bool {
    let critical = [
        village.water_index < 40.0,
        village.electricity_index < 30.0,
        village.road_connectivity_index < 25.0,
        village.health_facility_index < 35.0,
    ];

    critical.into_iter().filter(|hit| *hit).count() >= 2
}
