use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

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

    #[error("Dataset error: {message}")]
    DatasetError { message: String },
}

impl DirectoryError {
    /// 給使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            DirectoryError::IoError(e) => format!("Could not read a required file: {}", e),
            DirectoryError::SerializationError(e) => {
                format!("The employee data is not valid JSON: {}", e)
            }
            DirectoryError::CsvError(e) => format!("Could not render CSV output: {}", e),
            DirectoryError::ConfigError { message } => message.clone(),
            DirectoryError::ConfigValidationError { field, message } => {
                format!("{}: {}", field, message)
            }
            DirectoryError::InvalidConfigValueError { field, reason, .. } => {
                format!("{}: {}", field, reason)
            }
            DirectoryError::MissingConfigError { field } => {
                format!("{} must be set", field)
            }
            DirectoryError::DatasetError { message } => message.clone(),
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            DirectoryError::ConfigError { .. }
                | DirectoryError::ConfigValidationError { .. }
                | DirectoryError::InvalidConfigValueError { .. }
                | DirectoryError::MissingConfigError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
