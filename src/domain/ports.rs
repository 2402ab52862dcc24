use crate::domain::model::SleepFeatures;
use crate::utils::error::ModelUnavailable;

/// A pre-trained regression model predicting actual sleep hours.
///
/// Any failure, whether the model never loaded or the call itself was
/// rejected, is reported as [`ModelUnavailable`].
pub trait SleepRegressor: Send + Sync {
    fn predict(&self, features: &SleepFeatures) -> Result<f64, ModelUnavailable>;
}

impl<R: SleepRegressor + ?Sized> SleepRegressor for &R {
    fn predict(&self, features: &SleepFeatures) -> Result<f64, ModelUnavailable> {
        (**self).predict(features)
    }
}

impl<R: SleepRegressor + ?Sized> SleepRegressor for Box<R> {
    fn predict(&self, features: &SleepFeatures) -> Result<f64, ModelUnavailable> {
        (**self).predict(features)
    }
}

/// `None` stands for a model that failed to load.
impl<R: SleepRegressor> SleepRegressor for Option<R> {
    fn predict(&self, features: &SleepFeatures) -> Result<f64, ModelUnavailable> {
        match self {
            Some(model) => model.predict(features),
            None => Err(ModelUnavailable::new("model was not loaded")),
        }
    }
}
