use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Relay request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Relay rejected the message (status {status}): {body}")]
    RelayRejected { status: u16, body: String },

    #[error("Relay client has not been initialized")]
    RelayNotInitialized,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid {field}: {reason}")]
    ValidationError { field: String, reason: String },
}

impl ContactError {
    /// Whether the error came from talking to the relay rather than from local setup.
    pub fn is_relay_failure(&self) -> bool {
        matches!(
            self,
            ContactError::Http(_) | ContactError::RelayRejected { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ContactError::Http(_) | ContactError::RelayRejected { .. } => {
                "Failed to send message".to_string()
            }
            ContactError::RelayNotInitialized => {
                "The contact form is not ready yet".to_string()
            }
            ContactError::IoError(e) => format!("Could not read input: {}", e),
            ContactError::SerializationError(_) => "Failed to send message".to_string(),
            ContactError::ConfigError { message } => {
                format!("Configuration problem: {}", message)
            }
            ContactError::MissingConfigError { field } => {
                format!("Configuration value '{}' is required", field)
            }
            ContactError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            ContactError::ValidationError { field, reason } => {
                format!("Please check the {} field: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ContactError::Http(_) | ContactError::RelayRejected { .. } => {
                "Please try again or contact me directly via email."
            }
            ContactError::RelayNotInitialized => "Initialize the relay client before submitting",
            ContactError::IoError(_) => "Check that stdin is readable and the config path exists",
            ContactError::SerializationError(_) => "Please try again",
            ContactError::ConfigError { .. }
            | ContactError::MissingConfigError { .. }
            | ContactError::InvalidConfigValueError { .. } => {
                "Check the config file, the EMAILJS_* environment variables and command-line flags"
            }
            ContactError::ValidationError { .. } => "Fill in every field with a valid value",
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactError>;
