pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LinearSleepModel, UnavailableModel};
pub use config::ModelArtifact;
pub use crate::core::{fallback_bedtime, BedtimeEstimator};
pub use domain::model::{
    Bedtime, BedtimeReport, ClockFormat, CoffeeIntake, Estimate, EstimateSource, SleepAmount,
    SleepFeatures, WakeTime,
};
pub use domain::ports::SleepRegressor;
pub use utils::error::{BedtimeError, ModelUnavailable, Result};
