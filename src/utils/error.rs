use crate::domain::model::EdamErrorCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuickstartError {
    #[error("No authentication token configured")]
    MissingCredential,

    #[error("EDAM protocol version {major}.{minor} rejected for client '{client_name}'")]
    VersionMismatch {
        client_name: String,
        major: i16,
        minor: i16,
    },

    #[error("EDAM user exception: {error_code} (parameter: {})", .parameter.as_deref().unwrap_or("-"))]
    UserException {
        error_code: EdamErrorCode,
        parameter: Option<String>,
    },

    #[error("EDAM system exception: {error_code} ({})", .message.as_deref().unwrap_or("no message"))]
    SystemException {
        error_code: EdamErrorCode,
        message: Option<String>,
        rate_limit_duration: Option<i32>,
    },

    #[error("EDAM object not found: {} (key: {})", .identifier.as_deref().unwrap_or("-"), .key.as_deref().unwrap_or("-"))]
    NotFound {
        identifier: Option<String>,
        key: Option<String>,
    },

    #[error("Remote application error in {method} (type {kind}): {message}")]
    RemoteApplication {
        method: String,
        kind: i32,
        message: String,
    },

    #[error("Unexpected reply to {method}: {message}")]
    UnexpectedReply { method: String, message: String },

    #[error("Malformed reply: {message}")]
    MalformedReply { message: String },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Thrift protocol error: {0}")]
    Protocol(#[from] thrift::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Notebook '{name}' not found in account")]
    NotebookNotFound { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Credential,
    Compatibility,
    Remote,
    Network,
    Configuration,
    Selection,
    Internal,
}

impl QuickstartError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingCredential => ErrorCategory::Credential,
            Self::VersionMismatch { .. } => ErrorCategory::Compatibility,
            Self::UserException { .. }
            | Self::SystemException { .. }
            | Self::NotFound { .. }
            | Self::RemoteApplication { .. }
            | Self::UnexpectedReply { .. }
            | Self::MalformedReply { .. } => ErrorCategory::Remote,
            Self::Transport(_) | Self::HttpStatus { .. } | Self::Protocol(_) => {
                ErrorCategory::Network
            }
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
            Self::NotebookNotFound { .. } => ErrorCategory::Selection,
            Self::Io(_) | Self::Serialization(_) => ErrorCategory::Internal,
        }
    }

    /// Any failure reported by, or on the way to, the remote service.
    pub fn is_rpc_failure(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Remote | ErrorCategory::Network
        )
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_rpc_failure() {
            2
        } else {
            1
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingCredential => "Error: no authentication token".to_string(),
            Self::VersionMismatch { major, minor, .. } => format!(
                "The service no longer accepts EDAM API version {}.{}",
                major, minor
            ),
            Self::UserException { error_code, .. } => {
                format!("The service rejected the request: {}", error_code)
            }
            Self::SystemException { error_code, .. } => {
                format!("The service failed to handle the request: {}", error_code)
            }
            Self::NotebookNotFound { name } => {
                format!("No notebook named '{}' exists in this account", name)
            }
            Self::Transport(_) | Self::HttpStatus { .. } => {
                "Could not reach the note service".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::MissingCredential => {
                "Set auth_token in the config file or pass --auth-token".to_string()
            }
            Self::VersionMismatch { .. } => {
                "Upgrade edam-quickstart to a release built against a current EDAM schema"
                    .to_string()
            }
            Self::UserException { error_code, .. } => match error_code {
                EdamErrorCode::InvalidAuth | EdamErrorCode::AuthExpired => {
                    "Request a fresh developer token and update the config".to_string()
                }
                EdamErrorCode::EnmlValidation | EdamErrorCode::BadDataFormat => {
                    "Check that the note body is valid ENML".to_string()
                }
                _ => "Inspect the error code and parameter reported above".to_string(),
            },
            Self::SystemException {
                rate_limit_duration: Some(seconds),
                ..
            } => format!("Rate limited, wait {} seconds before retrying", seconds),
            Self::SystemException { .. } | Self::RemoteApplication { .. } => {
                "Try again later".to_string()
            }
            Self::Transport(_) | Self::HttpStatus { .. } => {
                "Check the network connection and the configured host".to_string()
            }
            Self::NotebookNotFound { .. } => {
                "Run without --notebook to list the available notebooks".to_string()
            }
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => {
                "Fix the configuration file or command-line flags".to_string()
            }
            _ => "Re-run with --verbose for details".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QuickstartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_category() {
        assert_eq!(QuickstartError::MissingCredential.exit_code(), 1);
        let mismatch = QuickstartError::VersionMismatch {
            client_name: "test".to_string(),
            major: 1,
            minor: 28,
        };
        assert_eq!(mismatch.exit_code(), 1);
        assert!(!mismatch.is_rpc_failure());

        let user = QuickstartError::UserException {
            error_code: EdamErrorCode::InvalidAuth,
            parameter: Some("authenticationToken".to_string()),
        };
        assert!(user.is_rpc_failure());
        assert_eq!(user.exit_code(), 2);
    }

    #[test]
    fn test_rate_limit_suggestion_mentions_duration() {
        let err = QuickstartError::SystemException {
            error_code: EdamErrorCode::RateLimitReached,
            message: None,
            rate_limit_duration: Some(30),
        };
        assert!(err.recovery_suggestion().contains("30 seconds"));
        assert_eq!(err.category(), ErrorCategory::Remote);
    }

    #[test]
    fn test_display_includes_parameter() {
        let err = QuickstartError::UserException {
            error_code: EdamErrorCode::EnmlValidation,
            parameter: Some("Note.content".to_string()),
        };
        let text = err.to_string();
        assert!(text.contains("ENML_VALIDATION"));
        assert!(text.contains("Note.content"));
    }
}
