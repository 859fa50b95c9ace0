use axum::response::Response;
use serde_json::Value;

use crate::dss::domain::{FraHolder, Gender, SocialCategory, VillageProfile};
use crate::dss::{DssEngine, EngineSettings, RuleCatalog};

/// Fully documented ST farmer who clears every scheme except housing.
pub(super) fn holder(id: &str) -> FraHolder {
    FraHolder {
        holder_id: id.to_string(),
        name: "Birsa Oraon".to_string(),
        family_size: 5,
        land_area_hectares: 1.2,
        annual_income: Some(60_000.0),
        social_category: SocialCategory::ScheduledTribe,
        has_bank_account: true,
        aadhaar_linked: true,
        village_code: "V-001".to_string(),
        district: "Gumla".to_string(),
        state: "Jharkhand".to_string(),
        age: 38,
        gender: Gender::Male,
        education_level: "Secondary".to_string(),
        occupation: "farmer".to_string(),
        has_electricity: true,
        has_toilet: true,
        water_source: "Handpump".to_string(),
        mobile_number: None,
    }
}

/// Village sitting at or above every trigger threshold.
pub(super) fn served_village(code: &str) -> VillageProfile {
    VillageProfile {
        village_code: code.to_string(),
        village_name: format!("Village {code}"),
        block: "Bishunpur".to_string(),
        district: "Gumla".to_string(),
        state: "Jharkhand".to_string(),
        total_households: 120,
        st_households: 90,
        sc_households: 10,
        total_population: 600,
        st_population: 450,
        water_index: 40.0,
        electricity_index: 50.0,
        road_connectivity_index: 30.0,
        health_facility_index: 40.0,
        education_index: 50.0,
        livelihood_index: 45.0,
        forest_cover_percent: 62.0,
        agricultural_land_percent: 25.0,
        latitude: Some(23.04),
        longitude: Some(84.54),
    }
}

/// Village lacking in every dimension with a mostly tribal population.
pub(super) fn deprived_village(code: &str) -> VillageProfile {
    VillageProfile {
        water_index: 10.0,
        electricity_index: 20.0,
        road_connectivity_index: 15.0,
        health_facility_index: 20.0,
        education_index: 25.0,
        ..served_village(code)
    }
}

pub(super) fn engine() -> DssEngine {
    DssEngine::new(RuleCatalog::standard(), EngineSettings::default())
}

pub(super) fn approx(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
