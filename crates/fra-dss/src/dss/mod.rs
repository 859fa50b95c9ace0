//! Decision support engine for FRA holder scheme eligibility and village
//! intervention planning.
//!
//! Every operation is a pure function of its inputs and the immutable
//! [`RuleCatalog`]; the engine holds no mutable state and can be shared
//! across threads behind an `Arc`.

pub mod bulk;
pub mod catalog;
pub mod domain;
pub mod eligibility;
pub mod import;
pub mod interventions;
pub mod policy;
pub mod router;
pub mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{RuleCatalog, SchemeInfo};
pub use domain::{
    EligibilityStatus, FraHolder, Gender, IndexField, InterventionCategory, InterventionPriority,
    InterventionRecommendation, SchemeEligibility, SchemeType, SocialCategory, VillageProfile,
};
pub use eligibility::EligibilityAssessor;
pub use import::{ImportError, RecordImporter};
pub use interventions::{InterventionPrioritizer, PriorityOrdering};
pub use policy::{EvaluationMode, PolicyAggregator, PolicyRecommendations};
pub use router::dss_router;
pub use validation::ValidationError;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Runtime knobs that do not change any rule value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub ordering: PriorityOrdering,
    pub mode: EvaluationMode,
}

/// Facade composing the assessor, prioritizer, and aggregator over one catalog.
#[derive(Debug, Clone)]
pub struct DssEngine {
    catalog: Arc<RuleCatalog>,
    assessor: EligibilityAssessor,
    prioritizer: InterventionPrioritizer,
    aggregator: PolicyAggregator,
}

impl DssEngine {
    pub fn new(catalog: RuleCatalog, settings: EngineSettings) -> Self {
        let catalog = Arc::new(catalog);
        let assessor = EligibilityAssessor::new(catalog.clone());
        let prioritizer = InterventionPrioritizer::with_ordering(catalog.clone(), settings.ordering);
        let aggregator = PolicyAggregator::new(assessor.clone(), prioritizer.clone(), settings.mode);

        Self {
            catalog,
            assessor,
            prioritizer,
            aggregator,
        }
    }

    pub fn standard() -> Self {
        Self::new(RuleCatalog::standard(), EngineSettings::default())
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    pub fn assess(&self, holder: &FraHolder) -> Vec<SchemeEligibility> {
        self.assessor.assess(holder)
    }

    pub fn prioritize(&self, village: &VillageProfile) -> Vec<InterventionRecommendation> {
        self.prioritizer.prioritize(village)
    }

    pub fn aggregate(
        &self,
        villages: &[VillageProfile],
        holders: &[FraHolder],
    ) -> PolicyRecommendations {
        self.aggregator.aggregate(villages, holders)
    }

    pub fn assess_bulk(
        &self,
        holders: &[FraHolder],
        scheme_filter: Option<&[SchemeType]>,
    ) -> BTreeMap<String, Vec<SchemeEligibility>> {
        bulk::assess_bulk(&self.assessor, holders, scheme_filter)
    }

    pub fn prioritize_bulk(
        &self,
        villages: &[VillageProfile],
        priority_filter: Option<InterventionPriority>,
    ) -> BTreeMap<String, Vec<InterventionRecommendation>> {
        bulk::prioritize_bulk(&self.prioritizer, villages, priority_filter)
    }
}

impl Default for DssEngine {
    fn default() -> Self {
        Self::standard()
    }
}
