pub mod estimator;

pub use crate::domain::model::{Bedtime, CoffeeIntake, Estimate, EstimateSource, SleepAmount, WakeTime};
pub use crate::domain::ports::SleepRegressor;
pub use estimator::{fallback_bedtime, BedtimeEstimator};
