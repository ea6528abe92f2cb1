use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("Location not found for postal code '{postal_code}' (HTTP {status})")]
    LocationNotFound { postal_code: String, status: u16 },

    #[error("Invalid climate data: {reason}")]
    InvalidClimateData { reason: String },

    #[error("A rainfall lookup is already in progress")]
    LookupInProgress,

    #[error("Missing input: {field}")]
    MissingInput { field: String },

    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Location,
    Climate,
    Input,
    Network,
    Configuration,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl HarvestError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HarvestError::LocationNotFound { .. } => ErrorCategory::Location,
            HarvestError::InvalidClimateData { .. } => ErrorCategory::Climate,
            HarvestError::LookupInProgress
            | HarvestError::MissingInput { .. }
            | HarvestError::InvalidNumber { .. } => ErrorCategory::Input,
            HarvestError::HttpError(_) => ErrorCategory::Network,
            HarvestError::IoError(_)
            | HarvestError::ConfigError { .. }
            | HarvestError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            HarvestError::SerializationError(_) | HarvestError::ProcessingError { .. } => {
                ErrorCategory::Data
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            HarvestError::MissingInput { .. } | HarvestError::InvalidNumber { .. } => {
                ErrorSeverity::Low
            }
            HarvestError::LookupInProgress | HarvestError::HttpError(_) => ErrorSeverity::Medium,
            HarvestError::LocationNotFound { .. }
            | HarvestError::InvalidClimateData { .. }
            | HarvestError::SerializationError(_)
            | HarvestError::ProcessingError { .. } => ErrorSeverity::High,
            HarvestError::IoError(_)
            | HarvestError::ConfigError { .. }
            | HarvestError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    /// True for failures of the postal code → climate lookup.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Location | ErrorCategory::Climate | ErrorCategory::Network | ErrorCategory::Data
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HarvestError::MissingInput { .. } => "Please enter a ZIP code.".to_string(),
            HarvestError::InvalidNumber { .. } => "Please enter valid numbers.".to_string(),
            HarvestError::LookupInProgress => {
                "A rainfall lookup is already running. Please wait for it to finish.".to_string()
            }
            HarvestError::IoError(e) => format!("Could not read configuration: {}", e),
            HarvestError::ConfigError { message } => format!("Configuration problem: {}", message),
            HarvestError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            _ => "Could not fetch rainfall data. Try another ZIP.".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Location => "Check the ZIP code and the country code".to_string(),
            ErrorCategory::Climate => {
                "Try a nearby ZIP code or enter the rainfall in inches manually".to_string()
            }
            ErrorCategory::Input => "Correct the input and try again".to_string(),
            ErrorCategory::Network => {
                "Check your network connection and the service endpoints".to_string()
            }
            ErrorCategory::Configuration => "Review the configuration file and flags".to_string(),
            ErrorCategory::Data => {
                "The service returned unexpected data; try another ZIP code".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, HarvestError>;
