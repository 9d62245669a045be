use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Input file '{path}' not found")]
    InputNotFound { path: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

impl HarvestError {
    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            HarvestError::InputNotFound { path } => {
                format!("Error: Input file '{}' not found!", path)
            }
            HarvestError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            HarvestError::TomlError(e) => format!("Config file is not valid TOML: {}", e),
            HarvestError::CsvError(e) => format!("Could not process CSV data: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HarvestError::InputNotFound { .. } => {
                "Check the --input path. Use --help to see usage information."
            }
            HarvestError::ConfigError { .. }
            | HarvestError::InvalidConfigValueError { .. }
            | HarvestError::TomlError(_) => "Fix the configuration file or command line flags.",
            HarvestError::CsvError(_) => "Make sure the input is a CSV file with a header row.",
            HarvestError::IoError(_) => "Check file permissions and available disk space.",
            HarvestError::HttpError(_) => "Check network connectivity.",
            HarvestError::ProcessingError { .. } => "Re-run with --verbose for details.",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            HarvestError::InputNotFound { .. }
            | HarvestError::ConfigError { .. }
            | HarvestError::InvalidConfigValueError { .. }
            | HarvestError::TomlError(_) => 1,
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, HarvestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_is_exit_code_one() {
        let err = HarvestError::InputNotFound {
            path: "missing.csv".to_string(),
        };
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("missing.csv"));
        assert!(err.recovery_suggestion().contains("--help"));
    }

    #[test]
    fn test_processing_error_exit_code() {
        let err = HarvestError::ProcessingError {
            message: "boom".to_string(),
        };
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.user_friendly_message(), "Data processing error: boom");
    }
}
