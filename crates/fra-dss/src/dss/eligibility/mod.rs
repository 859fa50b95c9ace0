mod schemes;

use super::catalog::RuleCatalog;
use super::domain::{FraHolder, SchemeEligibility, SchemeType};
use std::sync::Arc;
use tracing::debug;

/// Stateless evaluator that checks one holder against every scheme in the catalog.
#[derive(Debug, Clone)]
pub struct EligibilityAssessor {
    catalog: Arc<RuleCatalog>,
}

impl EligibilityAssessor {
    pub fn new(catalog: Arc<RuleCatalog>) -> Self {
        Self { catalog }
    }

    /// One result per scheme, always in [`SchemeType::ordered`] order.
    pub fn assess(&self, holder: &FraHolder) -> Vec<SchemeEligibility> {
        let results: Vec<SchemeEligibility> = SchemeType::ordered()
            .into_iter()
            .map(|scheme| self.assess_scheme(holder, scheme))
            .collect();

        debug!(
            holder_id = %holder.holder_id,
            eligible = results.iter().filter(|result| result.payable_amount().is_some()).count(),
            "assessed scheme eligibility"
        );

        results
    }

    pub fn assess_scheme(&self, holder: &FraHolder, scheme: SchemeType) -> SchemeEligibility {
        let rules = &self.catalog.schemes;
        match scheme {
            SchemeType::PmKisan => schemes::pm_kisan(holder, &rules.pm_kisan),
            SchemeType::JalJeevanMission => schemes::jal_jeevan(holder, &rules.jal_jeevan),
            SchemeType::Mgnrega => schemes::mgnrega(holder, &rules.mgnrega),
            SchemeType::Dajgua => schemes::dajgua(holder),
            SchemeType::PmAwasGramin => schemes::housing(holder, &rules.housing),
            SchemeType::AyushmanBharat => schemes::health(holder, &rules.health),
        }
    }
}
