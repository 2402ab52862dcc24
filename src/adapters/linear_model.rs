use crate::config::model_artifact::{Coefficients, FeatureBounds, ModelArtifact};
use crate::domain::model::SleepFeatures;
use crate::domain::ports::SleepRegressor;
use crate::utils::error::ModelUnavailable;
use std::path::Path;

/// Linear sleep regression backed by a TOML model artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSleepModel {
    name: String,
    coefficients: Coefficients,
    bounds: FeatureBounds,
}

impl LinearSleepModel {
    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        let bounds = artifact.bounds();
        Self {
            name: artifact.model.name,
            coefficients: artifact.coefficients,
            bounds,
        }
    }

    /// Loads and validates an artifact. Every failure collapses into
    /// [`ModelUnavailable`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelUnavailable> {
        let path = path.as_ref();
        let artifact = ModelArtifact::from_file(path)
            .map_err(|e| ModelUnavailable::new(format!("{}: {}", path.display(), e)))?;
        tracing::info!(
            "Loaded sleep model '{}' v{} from {}",
            artifact.model.name,
            artifact.model.version,
            path.display()
        );
        Ok(Self::from_artifact(artifact))
    }

    /// The model compiled into the binary.
    pub fn bundled() -> Result<Self, ModelUnavailable> {
        let artifact = ModelArtifact::bundled()
            .map_err(|e| ModelUnavailable::new(format!("bundled model: {}", e)))?;
        tracing::debug!(
            "Using bundled sleep model '{}' v{}",
            artifact.model.name,
            artifact.model.version
        );
        Ok(Self::from_artifact(artifact))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn check_feature(name: &str, value: f64, bound: Option<[f64; 2]>) -> Result<(), ModelUnavailable> {
    if !value.is_finite() {
        return Err(ModelUnavailable::new(format!("feature '{}' is not finite", name)));
    }
    match bound {
        Some([min, max]) if value < min || value > max => Err(ModelUnavailable::new(format!(
            "feature '{}' = {} is outside the trained range [{}, {}]",
            name, value, min, max
        ))),
        _ => Ok(()),
    }
}

impl SleepRegressor for LinearSleepModel {
    fn predict(&self, features: &SleepFeatures) -> Result<f64, ModelUnavailable> {
        check_feature("wake", features.wake, self.bounds.wake)?;
        check_feature("estimated_sleep", features.estimated_sleep, self.bounds.estimated_sleep)?;
        check_feature("coffee", features.coffee, self.bounds.coffee)?;

        let c = &self.coefficients;
        Ok(c.intercept
            + c.wake * features.wake
            + c.estimated_sleep * features.estimated_sleep
            + c.coffee * features.coffee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model_artifact::ModelInfo;

    fn artifact(bounds: Option<FeatureBounds>) -> ModelArtifact {
        ModelArtifact {
            model: ModelInfo {
                name: "test".to_string(),
                version: "0.1".to_string(),
                description: None,
            },
            coefficients: Coefficients {
                intercept: 0.5,
                wake: 0.0,
                estimated_sleep: 1.0,
                coffee: 0.25,
            },
            bounds,
        }
    }

    fn features(estimated_sleep: f64, coffee: f64) -> SleepFeatures {
        SleepFeatures {
            wake: 32_400.0,
            estimated_sleep,
            coffee,
        }
    }

    #[test]
    fn test_linear_prediction() {
        let model = LinearSleepModel::from_artifact(artifact(None));
        assert_eq!(model.predict(&features(8.0, 2.0)), Ok(9.0));
    }

    #[test]
    fn test_out_of_bounds_feature_is_unavailable() {
        let bounds = FeatureBounds {
            coffee: Some([0.0, 20.0]),
            ..Default::default()
        };
        let model = LinearSleepModel::from_artifact(artifact(Some(bounds)));
        assert!(model.predict(&features(8.0, 20.0)).is_ok());
        assert!(model.predict(&features(8.0, 21.0)).is_err());
    }

    #[test]
    fn test_non_finite_feature_is_unavailable() {
        let model = LinearSleepModel::from_artifact(artifact(None));
        assert!(model.predict(&features(f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn test_bundled_model_predicts() {
        let model = LinearSleepModel::bundled().unwrap();
        assert_eq!(model.name(), "SleepCalculator");
        let predicted = model.predict(&features(7.5, 0.0)).unwrap();
        assert!((predicted - 7.37484).abs() < 1e-9);
    }

    #[test]
    fn test_load_missing_file() {
        let err = LinearSleepModel::load("missing/SleepCalculator.toml").unwrap_err();
        assert!(err.reason.contains("missing/SleepCalculator.toml"));
    }
}
