use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MotoinatError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid MO number '{token}'")]
    InvalidMoNumber { token: String },

    #[error("Error reading file {}: File not found.", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Error reading file {}: Permission denied.", .path.display())]
    FilePermissionDenied { path: PathBuf },

    #[error("Error reading file {}: {source}", .path.display())]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No valid Mushroom Observer numbers provided.")]
    NoValidNumbers,
}

pub type Result<T> = std::result::Result<T, MotoinatError>;

/// Coarse grouping used by the binary when reporting a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Network,
    Data,
}

impl MotoinatError {
    /// Classify an I/O failure on the MO number input file.
    pub fn from_file_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => Self::FilePermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::FileReadError {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) => ErrorCategory::Network,
            Self::SerializationError(_) => ErrorCategory::Data,
            Self::TomlError(_) | Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_)
            | Self::InvalidMoNumber { .. }
            | Self::FileNotFound { .. }
            | Self::FilePermissionDenied { .. }
            | Self::FileReadError { .. }
            | Self::NoValidNumbers => ErrorCategory::Input,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            // already phrased as "Error reading file ..."
            Self::FileNotFound { .. }
            | Self::FilePermissionDenied { .. }
            | Self::FileReadError { .. } => self.to_string(),
            other => format!("Error: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::NoValidNumbers | Self::InvalidMoNumber { .. } => {
                "Usage: motoinat [MO_NUMBERS]... [--file FILE] [--debug] [--url] [-q]"
            }
            Self::FileNotFound { .. } => "Check that the --file path exists",
            Self::FilePermissionDenied { .. } => "Check the permissions of the --file path",
            Self::FileReadError { .. } | Self::IoError(_) => "Check that the input file is readable text",
            Self::TomlError(_) | Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Check the --config file and the MOTOINAT_* environment variables"
            }
            Self::ApiError(_) | Self::SerializationError(_) => {
                "Check network access to the iNaturalist API and retry"
            }
        }
    }

    /// Process exit status for an error that aborts the run.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
