use thiserror::Error;

/// Raised whenever the regression model cannot be loaded or invoked.
///
/// The estimator never surfaces this to its caller: it selects the
/// fallback formula instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Sleep model unavailable: {reason}")]
pub struct ModelUnavailable {
    pub reason: String,
}

impl ModelUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum BedtimeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error(transparent)]
    ModelUnavailable(#[from] ModelUnavailable),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Model,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BedtimeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BedtimeError::InvalidConfigValueError { .. } => ErrorCategory::Input,
            BedtimeError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            BedtimeError::ModelUnavailable(_) => ErrorCategory::Model,
            BedtimeError::IoError(_) | BedtimeError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // a bedtime is still produced by the fallback formula
            BedtimeError::ModelUnavailable(_) => ErrorSeverity::Low,
            BedtimeError::ConfigValidationError { .. } => ErrorSeverity::Medium,
            BedtimeError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            BedtimeError::IoError(_) | BedtimeError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BedtimeError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for {}: {}", value, field, reason)
            }
            BedtimeError::ConfigValidationError { field, message } => {
                format!("The configuration for {} could not be read: {}", field, message)
            }
            BedtimeError::ModelUnavailable(e) => {
                format!("The sleep model could not be used ({}); using the simple estimate", e.reason)
            }
            BedtimeError::IoError(e) => format!("A file could not be read or written: {}", e),
            BedtimeError::SerializationError(e) => format!("The result could not be serialized: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check the wake time (HH:MM), sleep hours (4-12, quarter steps) and coffee cups (0-20)",
            ErrorCategory::Configuration => "Check that the model artifact is valid TOML with a [coefficients] table",
            ErrorCategory::Model => "Pass --model with the path to a valid model artifact, or omit it to use the bundled model",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

impl ErrorSeverity {
    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium | ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, BedtimeError>;
