use crate::utils::error::{BedtimeError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUNDLED_ARTIFACT: &str = include_str!("../../models/SleepCalculator.toml");

/// On-disk description of a trained sleep regression model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub model: ModelInfo,
    pub coefficients: Coefficients,
    pub bounds: Option<FeatureBounds>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub version: String,
    pub description: Option<String>,
}

/// `predicted = intercept + wake * w + estimated_sleep * s + coffee * c`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    #[serde(default)]
    pub intercept: f64,
    pub wake: f64,
    pub estimated_sleep: f64,
    pub coffee: f64,
}

/// Inclusive `[min, max]` ranges the model was trained on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureBounds {
    pub wake: Option<[f64; 2]>,
    pub estimated_sleep: Option<[f64; 2]>,
    pub coffee: Option<[f64; 2]>,
}

impl ModelArtifact {
    /// 從 TOML 檔案載入模型
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BedtimeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// The artifact compiled into the binary from `models/SleepCalculator.toml`.
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED_ARTIFACT)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let artifact: Self =
            toml::from_str(&processed_content).map_err(|e| BedtimeError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Replaces `${VAR_NAME}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BedtimeError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn bounds(&self) -> FeatureBounds {
        self.bounds.unwrap_or_default()
    }
}

fn validate_bound(field_name: &str, bound: Option<[f64; 2]>) -> Result<()> {
    if let Some([min, max]) = bound {
        validation::validate_finite(field_name, min)?;
        validation::validate_finite(field_name, max)?;
        if min > max {
            return Err(BedtimeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format!("[{}, {}]", min, max),
                reason: "Lower bound is greater than upper bound".to_string(),
            });
        }
    }
    Ok(())
}

impl Validate for ModelArtifact {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("model.name", &self.model.name)?;

        let c = &self.coefficients;
        validation::validate_finite("coefficients.intercept", c.intercept)?;
        validation::validate_finite("coefficients.wake", c.wake)?;
        validation::validate_finite("coefficients.estimated_sleep", c.estimated_sleep)?;
        validation::validate_finite("coefficients.coffee", c.coffee)?;

        if let Some(bounds) = &self.bounds {
            validate_bound("bounds.wake", bounds.wake)?;
            validate_bound("bounds.estimated_sleep", bounds.estimated_sleep)?;
            validate_bound("bounds.coffee", bounds.coffee)?;
        }

        Ok(())
    }
}
