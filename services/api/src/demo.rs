use crate::infra::engine_from_env;
use crate::reports::{render_eligibility, render_interventions, render_policy};
use clap::Args;
use fra_dss::dss::{FraHolder, Gender, SocialCategory, VillageProfile};
use fra_dss::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the policy report at the end of the demo.
    #[arg(long)]
    pub(crate) skip_policy: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = engine_from_env()?;
    let holders = demo_holders();
    let villages = demo_villages();

    for holder in &holders {
        holder.validate()?;
    }
    for village in &villages {
        village.validate()?;
    }

    println!("FRA decision support demo\n");
    render_eligibility(&holders, &engine.assess_bulk(&holders, None));

    println!();
    render_interventions(
        engine.catalog(),
        &villages,
        &engine.prioritize_bulk(&villages, None),
    );

    if args.skip_policy {
        return Ok(());
    }

    println!();
    render_policy(&engine.aggregate(&villages, &holders));
    Ok(())
}

fn demo_holder(
    holder_id: &str,
    name: &str,
    village: &VillageProfile,
    social_category: SocialCategory,
) -> FraHolder {
    FraHolder {
        holder_id: holder_id.to_string(),
        name: name.to_string(),
        family_size: 5,
        land_area_hectares: 1.5,
        annual_income: Some(45_000.0),
        social_category,
        has_bank_account: true,
        aadhaar_linked: true,
        village_code: village.village_code.clone(),
        district: village.district.clone(),
        state: village.state.clone(),
        age: 40,
        gender: Gender::Male,
        education_level: "Primary".to_string(),
        occupation: "farmer".to_string(),
        has_electricity: true,
        has_toilet: false,
        water_source: "Handpump".to_string(),
        mobile_number: None,
    }
}

fn demo_holders() -> Vec<FraHolder> {
    let villages = demo_villages();
    let (basia, bichhiya) = (&villages[0], &villages[1]);

    vec![
        demo_holder("FRA001", "Ramesh Munda", basia, SocialCategory::ScheduledTribe),
        FraHolder {
            gender: Gender::Female,
            has_bank_account: false,
            annual_income: None,
            land_area_hectares: 0.8,
            ..demo_holder("FRA002", "Sunita Oraon", basia, SocialCategory::ScheduledTribe)
        },
        FraHolder {
            aadhaar_linked: false,
            annual_income: Some(180_000.0),
            has_toilet: true,
            occupation: "forest produce collector".to_string(),
            ..demo_holder("FRA003", "Lakshman Gond", bichhiya, SocialCategory::ScheduledTribe)
        },
        FraHolder {
            age: 17,
            ..demo_holder("FRA004", "Meena Baiga", bichhiya, SocialCategory::OtherBackwardClass)
        },
    ]
}

fn demo_village(code: &str, name: &str, district: &str, state: &str) -> VillageProfile {
    VillageProfile {
        village_code: code.to_string(),
        village_name: name.to_string(),
        block: name.to_string(),
        district: district.to_string(),
        state: state.to_string(),
        total_households: 150,
        st_households: 120,
        sc_households: 15,
        total_population: 750,
        st_population: 600,
        water_index: 60.0,
        electricity_index: 70.0,
        road_connectivity_index: 55.0,
        health_facility_index: 50.0,
        education_index: 60.0,
        livelihood_index: 40.0,
        forest_cover_percent: 55.0,
        agricultural_land_percent: 30.0,
        latitude: None,
        longitude: None,
    }
}

fn demo_villages() -> Vec<VillageProfile> {
    vec![
        VillageProfile {
            water_index: 15.0,
            electricity_index: 20.0,
            road_connectivity_index: 18.0,
            health_facility_index: 25.0,
            education_index: 35.0,
            latitude: Some(22.87),
            longitude: Some(84.42),
            ..demo_village("JH001", "Basia", "Gumla", "Jharkhand")
        },
        VillageProfile {
            water_index: 35.0,
            total_population: 1_050,
            st_population: 700,
            ..demo_village("MP014", "Bichhiya", "Mandla", "Madhya Pradesh")
        },
        demo_village("OD007", "Lamtaput", "Koraput", "Odisha"),
    ]
}
