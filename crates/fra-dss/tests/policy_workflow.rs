use fra_dss::dss::{
    DssEngine, EligibilityStatus, EngineSettings, EvaluationMode, ImportError,
    InterventionCategory, InterventionPriority, RecordImporter, RuleCatalog, SchemeType,
};

fn fixture(name: &str) -> String {
    format!("{}/data/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn load_fixtures() -> (Vec<fra_dss::dss::VillageProfile>, Vec<fra_dss::dss::FraHolder>) {
    let villages =
        RecordImporter::villages_from_path(fixture("sample_villages.csv")).expect("villages import");
    let holders =
        RecordImporter::holders_from_path(fixture("sample_holders.csv")).expect("holders import");
    (villages, holders)
}

#[test]
fn fixtures_import_with_optional_cells() {
    let (villages, holders) = load_fixtures();

    assert_eq!(villages.len(), 3);
    assert_eq!(holders.len(), 5);
    assert_eq!(villages[1].latitude, None);
    assert_eq!(holders[1].annual_income, None);
    assert_eq!(holders[1].mobile_number, None);
    assert_eq!(holders[0].mobile_number.as_deref(), Some("9876543210"));
}

#[test]
fn holder_assessments_cover_each_rule_path() {
    let (_, holders) = load_fixtures();
    let engine = DssEngine::standard();

    let results = engine.assess_bulk(&holders, None);

    let kisan_status = |id: &str| results[id][0].status;
    assert_eq!(kisan_status("FRA001"), EligibilityStatus::Eligible);
    assert_eq!(kisan_status("FRA002"), EligibilityStatus::PendingDocuments);
    assert_eq!(kisan_status("FRA004"), EligibilityStatus::NotEligible);
    assert_eq!(kisan_status("FRA005"), EligibilityStatus::NotEligible);
    // Excluded engineer over the income ceiling gets no benefit attached.
    assert_eq!(results["FRA005"][0].eligible_amount, None);
    assert_eq!(results["FRA005"][0].confidence_score, 0.0);

    let mgnrega = &results["FRA005"][2];
    assert_eq!(mgnrega.scheme, SchemeType::Mgnrega);
    assert_eq!(mgnrega.status, EligibilityStatus::NotEligible);

    let health = &results["FRA002"][5];
    assert_eq!(health.scheme, SchemeType::AyushmanBharat);
    assert_eq!(health.status, EligibilityStatus::RequiresVerification);
}

#[test]
fn policy_report_over_fixtures() {
    let (villages, holders) = load_fixtures();
    let engine = DssEngine::standard();

    let report = engine.aggregate(&villages, &holders);

    assert_eq!(report.summary.total_villages_analyzed, 3);
    assert_eq!(report.summary.total_fra_holders, 5);
    assert_eq!(report.summary.high_priority_villages, 1);

    let allocation = &report.resource_allocation;
    assert_eq!(allocation.water_infrastructure, 1_000_000.0);
    assert_eq!(allocation.road_connectivity, 2_000_000.0);
    assert_eq!(allocation.individual_benefits, 1_976_000.0);
    assert_eq!(report.summary.estimated_total_investment, 8_276_000.0);

    let water = &report.coverage_gaps.infrastructure_gaps.water;
    assert_eq!(water.villages_affected, 2);
    assert_eq!(
        water.priority_states,
        Some(vec!["Jharkhand".to_string(), "Madhya Pradesh".to_string()])
    );
    assert_eq!(report.coverage_gaps.infrastructure_gaps.health.villages_affected, 2);
    assert_eq!(report.coverage_gaps.eligibility_gaps.aadhaar.percentage, 20.0);

    assert_eq!(report.priority_interventions["Jharkhand"].len(), 5);
    assert_eq!(report.priority_interventions["Madhya Pradesh"].len(), 1);
    assert!(report.priority_interventions["Odisha"].is_empty());

    // Water, electricity and aadhaar alerts fire; banking sits exactly on its threshold.
    assert_eq!(report.key_recommendations.len(), 6);
    assert!(report.key_recommendations[2].contains("Aadhaar"));
}

#[test]
fn village_rankings_over_fixtures() {
    let (villages, _) = load_fixtures();
    let engine = DssEngine::standard();

    let ranked = engine.prioritize_bulk(&villages, None);

    let basia = &ranked["JH001"];
    assert_eq!(basia.len(), 5);
    assert_eq!(basia[0].priority, InterventionPriority::Critical);
    assert_eq!(basia[0].intervention_type, InterventionCategory::WaterInfrastructure);
    assert_eq!(basia[0].estimated_beneficiaries, 120);

    let bichhiya = &ranked["MP014"];
    assert_eq!(bichhiya.len(), 1);
    assert_eq!(bichhiya[0].priority, InterventionPriority::High);

    assert!(ranked["OD007"].is_empty());
}

#[test]
fn parallel_mode_matches_sequential_report() {
    let (villages, holders) = load_fixtures();
    let sequential = DssEngine::standard();
    let parallel = DssEngine::new(
        RuleCatalog::standard(),
        EngineSettings {
            mode: EvaluationMode::Parallel,
            ..EngineSettings::default()
        },
    );

    assert_eq!(
        sequential.aggregate(&villages, &holders),
        parallel.aggregate(&villages, &holders)
    );
}

#[test]
fn missing_export_is_an_io_error() {
    let err = RecordImporter::villages_from_path(fixture("absent.csv")).expect_err("missing file");
    assert!(matches!(err, ImportError::Io(_)));
}
