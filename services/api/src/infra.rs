use fra_dss::config::AppConfig;
use fra_dss::dss::{DssEngine, RuleCatalog};
use fra_dss::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Engine honoring `DSS_PRIORITY_ORDERING` and `DSS_PARALLEL` for one-shot CLI commands.
pub(crate) fn engine_from_env() -> Result<DssEngine, AppError> {
    let config = AppConfig::load()?;
    Ok(DssEngine::new(RuleCatalog::standard(), config.engine))
}

pub(crate) fn currency(amount: f64) -> String {
    if amount >= 10_000_000.0 {
        format!("Rs {:.2} crore", amount / 10_000_000.0)
    } else if amount >= 100_000.0 {
        format!("Rs {:.2} lakh", amount / 100_000.0)
    } else {
        format!("Rs {:.0}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_uses_indian_units() {
        assert_eq!(currency(6_000.0), "Rs 6000");
        assert_eq!(currency(130_000.0), "Rs 1.30 lakh");
        assert_eq!(currency(58_000_000.0), "Rs 5.80 crore");
    }
}
