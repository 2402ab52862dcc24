use crate::domain::model::{
    Bedtime, CoffeeIntake, Estimate, EstimateSource, SleepAmount, SleepFeatures, WakeTime,
    SECONDS_PER_DAY,
};
use crate::domain::ports::SleepRegressor;
use crate::utils::error::ModelUnavailable;

/// Maps wake time, requested sleep and coffee intake to a bedtime.
///
/// The regressor is consulted first; whenever it reports
/// [`ModelUnavailable`] the fixed fallback formula is used instead, so an
/// estimate is always produced.
#[derive(Debug, Clone)]
pub struct BedtimeEstimator<R: SleepRegressor> {
    regressor: R,
}

impl<R: SleepRegressor> BedtimeEstimator<R> {
    pub fn new(regressor: R) -> Self {
        Self { regressor }
    }

    pub fn estimate(&self, wake: WakeTime, sleep: SleepAmount, coffee: CoffeeIntake) -> Estimate {
        match self.model_bedtime(wake, sleep, coffee) {
            Ok(bedtime) => Estimate {
                bedtime,
                source: EstimateSource::Model,
            },
            Err(e) => {
                tracing::debug!("Falling back to fixed sleep formula: {}", e);
                Estimate {
                    bedtime: fallback_bedtime(wake, sleep),
                    source: EstimateSource::Fallback,
                }
            }
        }
    }

    pub fn bedtime(&self, wake: WakeTime, sleep: SleepAmount, coffee: CoffeeIntake) -> Bedtime {
        self.estimate(wake, sleep, coffee).bedtime
    }

    /// Bedtime from the regressor alone, without the fallback.
    pub fn model_bedtime(
        &self,
        wake: WakeTime,
        sleep: SleepAmount,
        coffee: CoffeeIntake,
    ) -> Result<Bedtime, ModelUnavailable> {
        let features = SleepFeatures::new(wake, sleep, coffee);
        let predicted_hours = self.regressor.predict(&features)?;
        let seconds = prediction_to_seconds(predicted_hours)?;
        tracing::debug!(
            wake = %wake,
            requested_hours = sleep.hours(),
            predicted_hours,
            "Model predicted actual sleep"
        );
        Ok(Bedtime::before(wake, seconds))
    }
}

/// Wake time minus whole hours and the rounded minute remainder of `sleep`.
///
/// The sleep range is not checked here; out-of-range amounts saturate
/// instead of overflowing.
pub fn fallback_bedtime(wake: WakeTime, sleep: SleepAmount) -> Bedtime {
    let seconds = sleep
        .whole_hours()
        .saturating_mul(3600)
        .saturating_add(sleep.remainder_minutes().saturating_mul(60));
    Bedtime::before(wake, seconds)
}

fn prediction_to_seconds(hours: f64) -> Result<i64, ModelUnavailable> {
    if !hours.is_finite() {
        return Err(ModelUnavailable::new(format!("prediction is not finite: {}", hours)));
    }
    let seconds = (hours * 3600.0).round();
    if seconds < 0.0 || seconds > SECONDS_PER_DAY as f64 {
        return Err(ModelUnavailable::new(format!(
            "predicted sleep of {} hours is outside 0-24 hours",
            hours
        )));
    }
    Ok(seconds as i64)
}
