use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use super::catalog::SchemeInfo;
use super::domain::{
    FraHolder, InterventionPriority, InterventionRecommendation, SchemeEligibility, SchemeType,
    VillageProfile,
};
use super::policy::PolicyRecommendations;
use super::DssEngine;
use crate::error::AppError;

/// Router builder exposing the engine contracts over HTTP.
pub fn dss_router(engine: Arc<DssEngine>) -> Router {
    Router::new()
        .route("/api/dss/health", get(health_handler))
        .route(
            "/api/dss/eligibility/individual",
            post(individual_eligibility_handler),
        )
        .route("/api/dss/eligibility/bulk", post(bulk_eligibility_handler))
        .route(
            "/api/dss/interventions/village",
            post(village_interventions_handler),
        )
        .route(
            "/api/dss/interventions/bulk",
            post(bulk_interventions_handler),
        )
        .route(
            "/api/dss/policy/recommendations",
            post(policy_recommendations_handler),
        )
        .route("/api/dss/schemes/info", get(scheme_info_handler))
        .with_state(engine)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityAnalysisRequest {
    pub fra_holders: Vec<FraHolder>,
    #[serde(default)]
    pub schemes_filter: Option<Vec<SchemeType>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VillageAnalysisRequest {
    pub villages: Vec<VillageProfile>,
    #[serde(default)]
    pub priority_filter: Option<InterventionPriority>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyRequest {
    pub villages: Vec<VillageProfile>,
    pub fra_holders: Vec<FraHolder>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SchemeCatalogResponse {
    pub schemes: BTreeMap<&'static str, SchemeInfo>,
    pub total_schemes: usize,
    pub last_updated: String,
}

pub(crate) async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "Decision Support System",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub(crate) async fn individual_eligibility_handler(
    State(engine): State<Arc<DssEngine>>,
    Json(holder): Json<FraHolder>,
) -> Result<Json<Vec<SchemeEligibility>>, AppError> {
    holder.validate()?;
    let results = engine.assess(&holder);
    info!(
        holder_id = %holder.holder_id,
        schemes = results.len(),
        "assessed individual eligibility"
    );
    Ok(Json(results))
}

pub(crate) async fn bulk_eligibility_handler(
    State(engine): State<Arc<DssEngine>>,
    Json(request): Json<EligibilityAnalysisRequest>,
) -> Result<Json<BTreeMap<String, Vec<SchemeEligibility>>>, AppError> {
    for holder in &request.fra_holders {
        holder.validate()?;
    }
    let results = engine.assess_bulk(&request.fra_holders, request.schemes_filter.as_deref());
    info!(
        holders = request.fra_holders.len(),
        "bulk eligibility assessment completed"
    );
    Ok(Json(results))
}

pub(crate) async fn village_interventions_handler(
    State(engine): State<Arc<DssEngine>>,
    Json(village): Json<VillageProfile>,
) -> Result<Json<Vec<InterventionRecommendation>>, AppError> {
    village.validate()?;
    let ranked = engine.prioritize(&village);
    info!(
        village_code = %village.village_code,
        recommendations = ranked.len(),
        "generated village interventions"
    );
    Ok(Json(ranked))
}

pub(crate) async fn bulk_interventions_handler(
    State(engine): State<Arc<DssEngine>>,
    Json(request): Json<VillageAnalysisRequest>,
) -> Result<Json<BTreeMap<String, Vec<InterventionRecommendation>>>, AppError> {
    for village in &request.villages {
        village.validate()?;
    }
    let results = engine.prioritize_bulk(&request.villages, request.priority_filter);
    info!(
        villages = request.villages.len(),
        "bulk village analysis completed"
    );
    Ok(Json(results))
}

pub(crate) async fn policy_recommendations_handler(
    State(engine): State<Arc<DssEngine>>,
    Json(request): Json<PolicyRequest>,
) -> Result<Json<PolicyRecommendations>, AppError> {
    for village in &request.villages {
        village.validate()?;
    }
    for holder in &request.fra_holders {
        holder.validate()?;
    }
    Ok(Json(
        engine.aggregate(&request.villages, &request.fra_holders),
    ))
}

pub(crate) async fn scheme_info_handler(
    State(engine): State<Arc<DssEngine>>,
) -> Json<SchemeCatalogResponse> {
    let schemes: BTreeMap<&'static str, SchemeInfo> = engine
        .catalog()
        .scheme_info()
        .into_iter()
        .map(|info| (info.scheme.label(), info))
        .collect();

    Json(SchemeCatalogResponse {
        total_schemes: schemes.len(),
        schemes,
        last_updated: Utc::now().to_rfc3339(),
    })
}
