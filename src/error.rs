use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to load results from {path}: {message}")]
    ResultsLoad { path: String, message: String },

    #[error("Failed to load player roster from {path}: {message}")]
    RosterLoad { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid argument error (bad CLI value, unknown filter label)
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a results feed load error
    pub fn results_load(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ResultsLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a roster load error
    pub fn roster_load(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RosterLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check if the error was caused by input data rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::JsonParse(_)
                | AppError::ResultsLoad { .. }
                | AppError::RosterLoad { .. }
                | AppError::InvalidArgument(_)
        )
    }
}
