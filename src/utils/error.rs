use thiserror::Error;

#[derive(Error, Debug)]
pub enum WichtelError {
    #[error("Unrecognized secret code")]
    UnrecognizedSecret,

    #[error("Roster integrity error: {message}")]
    RosterIntegrityError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code used by the binaries.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl WichtelError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WichtelError::UnrecognizedSecret => ErrorCategory::Authentication,
            WichtelError::RosterIntegrityError { .. }
            | WichtelError::TomlError(_)
            | WichtelError::ConfigValidationError { .. }
            | WichtelError::InvalidConfigValueError { .. }
            | WichtelError::MissingConfigError { .. } => ErrorCategory::Configuration,
            WichtelError::IoError(_) | WichtelError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Authentication => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            WichtelError::UnrecognizedSecret => {
                "The code you entered does not belong to any participant".to_string()
            }
            WichtelError::RosterIntegrityError { message } => {
                format!("The roster is not usable: {}", message)
            }
            WichtelError::IoError(e) => format!("Could not read or write a file: {}", e),
            WichtelError::TomlError(e) => format!("The roster file is not valid TOML: {}", e),
            WichtelError::SerializationError(e) => format!("Could not render output: {}", e),
            WichtelError::ConfigValidationError { field, message } => {
                format!("Setting '{}' is invalid: {}", field, message)
            }
            WichtelError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            WichtelError::MissingConfigError { field } => {
                format!("Setting '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            WichtelError::UnrecognizedSecret => {
                "Check the code in your invitation email or ask the organizer"
            }
            WichtelError::RosterIntegrityError { .. } => {
                "Make sure every participant has a non-empty name and a unique code"
            }
            WichtelError::IoError(_) => "Check that the roster path exists and is readable",
            WichtelError::TomlError(_) => "Fix the TOML syntax in the roster file",
            WichtelError::SerializationError(_) => "Retry with --format text",
            WichtelError::ConfigValidationError { .. }
            | WichtelError::InvalidConfigValueError { .. }
            | WichtelError::MissingConfigError { .. } => {
                "Review the roster file against the documented format"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, WichtelError>;
