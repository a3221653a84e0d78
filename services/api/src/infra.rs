use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use property_markup::config::PricingConfig;
use property_markup::error::AppError;
use property_markup::pricing::{DiscountSchedule, RuleEngine};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the discount schedule once and wrap it in an engine.
///
/// An explicit path wins over the configured one. Without either the engine
/// runs with an empty schedule.
pub(crate) fn load_engine(
    config: &PricingConfig,
    schedule_override: Option<PathBuf>,
) -> Result<RuleEngine, AppError> {
    let path = schedule_override.or_else(|| config.discount_schedule.clone());
    let schedule = match path {
        Some(path) => {
            info!(path = %path.display(), "loading discount schedule");
            DiscountSchedule::from_path(&path)?
        }
        None => {
            warn!("no discount schedule configured; bulk discounts disabled");
            DiscountSchedule::default()
        }
    };

    Ok(RuleEngine::new(schedule))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Bulk keys come from a free-text cell; anything that is not a finite
/// number means "no bulk discount".
pub(crate) fn parse_bulk_key(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}
