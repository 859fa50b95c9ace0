use crate::infra::{currency, engine_from_env};
use chrono::Local;
use clap::Args;
use fra_dss::dss::policy::ImplementationPhase;
use fra_dss::dss::{
    FraHolder, InterventionPriority, InterventionRecommendation, PolicyRecommendations,
    RecordImporter, RuleCatalog, SchemeEligibility, SchemeType, VillageProfile,
};
use fra_dss::error::AppError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// CSV export of FRA holders
    #[arg(long)]
    pub(crate) holders: PathBuf,
    /// Only report these schemes (repeatable)
    #[arg(long = "scheme")]
    pub(crate) schemes: Vec<SchemeType>,
    /// Emit JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct VillagesArgs {
    /// CSV export of village profiles
    #[arg(long)]
    pub(crate) villages: PathBuf,
    /// Only report interventions at this priority level
    #[arg(long)]
    pub(crate) priority: Option<InterventionPriority>,
    /// Emit JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct PolicyArgs {
    /// CSV export of village profiles
    #[arg(long)]
    pub(crate) villages: PathBuf,
    /// CSV export of FRA holders
    #[arg(long)]
    pub(crate) holders: PathBuf,
    /// Emit JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let holders = RecordImporter::holders_from_path(&args.holders)?;
    let engine = engine_from_env()?;
    let results = engine.assess_bulk(&holders, Some(args.schemes.as_slice()));

    if args.json {
        return print_json(&results);
    }
    render_eligibility(&holders, &results);
    Ok(())
}

pub(crate) fn run_villages(args: VillagesArgs) -> Result<(), AppError> {
    let villages = RecordImporter::villages_from_path(&args.villages)?;
    let engine = engine_from_env()?;
    let ranked = engine.prioritize_bulk(&villages, args.priority);

    if args.json {
        return print_json(&ranked);
    }
    render_interventions(engine.catalog(), &villages, &ranked);
    Ok(())
}

pub(crate) fn run_policy(args: PolicyArgs) -> Result<(), AppError> {
    let villages = RecordImporter::villages_from_path(&args.villages)?;
    let holders = RecordImporter::holders_from_path(&args.holders)?;
    let engine = engine_from_env()?;
    let report = engine.aggregate(&villages, &holders);

    if args.json {
        return print_json(&report);
    }
    render_policy(&report);
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn render_eligibility(
    holders: &[FraHolder],
    results: &BTreeMap<String, Vec<SchemeEligibility>>,
) {
    println!("Scheme eligibility ({} holders)", holders.len());
    for holder in holders {
        let Some(assessments) = results.get(&holder.holder_id) else {
            continue;
        };
        println!(
            "- {} {} ({}, {})",
            holder.holder_id, holder.name, holder.district, holder.state
        );
        for assessment in assessments {
            let amount = assessment
                .eligible_amount
                .map(currency)
                .unwrap_or_else(|| "-".to_string());
            println!(
                "    {:<20} {:<22} confidence {:.2} | {}",
                assessment.scheme.label(),
                assessment.status.label(),
                assessment.confidence_score,
                amount
            );
            if !assessment.required_documents.is_empty() {
                println!(
                    "      documents needed: {}",
                    assessment.required_documents.join(", ")
                );
            }
        }
    }
}

pub(crate) fn render_interventions(
    catalog: &RuleCatalog,
    villages: &[VillageProfile],
    ranked: &BTreeMap<String, Vec<InterventionRecommendation>>,
) {
    println!("Village interventions ({} villages)", villages.len());
    for village in villages {
        let Some(recommendations) = ranked.get(&village.village_code) else {
            continue;
        };
        println!(
            "- {} {} ({}, {})",
            village.village_code, village.village_name, village.district, village.state
        );
        if recommendations.is_empty() {
            println!("    no interventions triggered");
            continue;
        }
        for rec in recommendations {
            println!(
                "    {:<9} {:<27} impact {:.2} | {} | {} months | {} households",
                rec.priority.label(),
                rec.intervention_type.label(),
                rec.impact_score,
                currency(rec.estimated_cost),
                rec.timeline_months,
                rec.estimated_beneficiaries
            );
            let works = catalog.candidate_works(rec.intervention_type);
            if !works.is_empty() {
                println!("              works: {}", works.join(", "));
            }
        }
    }
}

pub(crate) fn render_policy(report: &PolicyRecommendations) {
    let summary = &report.summary;
    println!(
        "Policy recommendations (generated {})",
        Local::now().format("%Y-%m-%d %H:%M")
    );
    println!(
        "- {} villages | {} FRA holders | {} high-priority villages",
        summary.total_villages_analyzed, summary.total_fra_holders, summary.high_priority_villages
    );
    println!(
        "- Estimated total investment: {}",
        currency(summary.estimated_total_investment)
    );

    let gaps = &report.coverage_gaps.infrastructure_gaps;
    println!("Infrastructure gaps:");
    for (name, gap) in [
        ("water", &gaps.water),
        ("electricity", &gaps.electricity),
        ("roads", &gaps.roads),
        ("health", &gaps.health),
        ("education", &gaps.education),
    ] {
        println!(
            "  - {:<12} {} villages ({:.1}%)",
            name, gap.villages_affected, gap.percentage
        );
    }
    if let Some(states) = report
        .coverage_gaps
        .infrastructure_gaps
        .water
        .priority_states
        .as_ref()
        .filter(|states| !states.is_empty())
    {
        println!("    water priority states: {}", states.join(", "));
    }

    let eligibility = &report.coverage_gaps.eligibility_gaps;
    println!(
        "Documentation gaps: {} without bank accounts ({:.1}%), {} without Aadhaar link ({:.1}%)",
        eligibility.banking.holders_affected,
        eligibility.banking.percentage,
        eligibility.aadhaar.holders_affected,
        eligibility.aadhaar.percentage
    );

    println!("Urgent interventions by state:");
    for (state, entries) in &report.priority_interventions {
        println!("  - {}: {} interventions", state, entries.len());
    }

    let allocation = &report.resource_allocation;
    println!("Resource allocation:");
    println!("  - water: {}", currency(allocation.water_infrastructure));
    println!(
        "  - electricity: {}",
        currency(allocation.electricity_infrastructure)
    );
    println!("  - roads: {}", currency(allocation.road_connectivity));
    println!("  - health: {}", currency(allocation.health_infrastructure));
    println!(
        "  - education: {}",
        currency(allocation.education_infrastructure)
    );
    println!(
        "  - individual benefits: {}",
        currency(allocation.individual_benefits)
    );

    println!("Implementation timeline:");
    for phase in ImplementationPhase::ordered() {
        let entries = report.implementation_timeline.phase(phase);
        println!("  - {}: {} interventions", phase.label(), entries.len());
    }

    println!("Key recommendations:");
    for (index, point) in report.key_recommendations.iter().enumerate() {
        println!("  {}. {}", index + 1, point);
    }
}
