use crate::adapters::LinearSleepModel;
use crate::config::CliConfig;
use crate::core::BedtimeEstimator;
use crate::domain::model::{Bedtime, BedtimeReport, ClockFormat};
use crate::utils::error::{BedtimeError, ModelUnavailable, Result};
use crate::utils::validation::Validate;

/// Validates the inputs and renders the recommended bedtime as one line.
///
/// A model that cannot be loaded is logged and replaced by the fallback
/// formula; only invalid input or output failures are returned as errors.
pub fn run(config: &CliConfig) -> Result<String> {
    config.validate()?;

    let wake = config.wake_time()?;
    let sleep = config.sleep_amount();
    let coffee = config.coffee_intake();

    // 模型載入失敗時改用固定公式
    let model = match load_model(config.model.as_deref()) {
        Ok(model) => Some(model),
        Err(e) => {
            let e = BedtimeError::from(e);
            tracing::warn!("{}", e.user_friendly_message());
            tracing::debug!("💡 {}", e.recovery_suggestion());
            None
        }
    };

    let estimator = BedtimeEstimator::new(model);
    let estimate = estimator.estimate(wake, sleep, coffee);
    tracing::debug!(
        "Bedtime {} (day offset {}) via {:?}",
        estimate.bedtime,
        estimate.bedtime.day_offset(),
        estimate.source
    );

    render(&estimate.bedtime, config.clock, config.json)
}

fn load_model(path: Option<&str>) -> std::result::Result<LinearSleepModel, ModelUnavailable> {
    match path {
        Some(path) => LinearSleepModel::load(path),
        None => LinearSleepModel::bundled(),
    }
}

pub fn render(bedtime: &Bedtime, clock: ClockFormat, json: bool) -> Result<String> {
    if json {
        let report = BedtimeReport::new(bedtime, clock);
        Ok(serde_json::to_string(&report)?)
    } else {
        Ok(bedtime.format(clock))
    }
}
