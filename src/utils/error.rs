use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListError {
    #[error("LengthMismatch: sequences have different sizes (left: {left}, right: {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("EmptyInput: {operation} requires at least one element")]
    EmptyInput { operation: String },

    #[error("Invalid number '{value}': {reason}")]
    InvalidNumber { value: String, reason: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Detection failed: {message}")]
    DetectionError { message: String },

    #[error("Frame source error: {message}")]
    FrameSourceError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Integration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ListError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ListError::LengthMismatch { .. }
            | ListError::EmptyInput { .. }
            | ListError::InvalidNumber { .. } => ErrorCategory::Input,
            ListError::ConfigValidationError { .. }
            | ListError::InvalidConfigValueError { .. }
            | ListError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ListError::DetectionError { .. } | ListError::FrameSourceError { .. } => {
                ErrorCategory::Integration
            }
            ListError::IoError(_) | ListError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Integration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ListError::LengthMismatch { left, right } => format!(
                "Pass two sequences of the same length (got {} and {} elements)",
                left, right
            ),
            ListError::EmptyInput { .. } => {
                "Provide at least one element in each sequence".to_string()
            }
            ListError::InvalidNumber { .. } => {
                "Use comma-separated integers or decimals, e.g. 1,2.5,-3".to_string()
            }
            ListError::ConfigValidationError { field, .. }
            | ListError::InvalidConfigValueError { field, .. } => {
                format!("Check the value of '{}' in the configuration file", field)
            }
            ListError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration", field)
            }
            ListError::DetectionError { .. } => {
                "Check the detector model files and retry".to_string()
            }
            ListError::FrameSourceError { .. } => {
                "Make sure the video source exists and is readable".to_string()
            }
            ListError::IoError(_) => "Check file paths and permissions".to_string(),
            ListError::SerializationError(_) => {
                "Report this as a bug; output could not be encoded".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ListError::LengthMismatch { .. } => {
                "The two lists have different sizes".to_string()
            }
            ListError::EmptyInput { .. } => "The lists are empty".to_string(),
            ListError::InvalidNumber { value, .. } => format!("'{}' is not a number", value),
            ListError::ConfigValidationError { .. }
            | ListError::InvalidConfigValueError { .. }
            | ListError::MissingConfigError { .. } => format!("Configuration problem: {}", self),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ListError>;
