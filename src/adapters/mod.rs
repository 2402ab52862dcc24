pub mod linear_model;

use crate::domain::model::SleepFeatures;
use crate::domain::ports::SleepRegressor;
use crate::utils::error::ModelUnavailable;

pub use linear_model::LinearSleepModel;

/// A regressor that always fails; forces the fallback formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableModel;

impl SleepRegressor for UnavailableModel {
    fn predict(&self, _features: &SleepFeatures) -> Result<f64, ModelUnavailable> {
        Err(ModelUnavailable::new("no model configured"))
    }
}
