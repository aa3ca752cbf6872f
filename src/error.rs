//! Error types for the news feed client
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// Message used when the transport could not produce a response
pub const COULD_NOT_RETRIEVE: &str = "Could not retrieve news";

/// Message used when a search is issued without keywords
pub const KEYWORD_REQUIRED: &str = "At least one keyword is required";

/// The main error type for the news feed client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Client Errors (API-facing)
    // ============================================================================
    #[error("{message}")]
    Client { message: String },

    #[error("Unexpected response code from news feed service: {status}")]
    UnexpectedStatus { status: u16 },

    #[error("Bad request: {message}")]
    BadRequest {
        message: String,
        detail: Option<String>,
    },

    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
        detail: Option<String>,
    },

    // ============================================================================
    // Caller Errors
    // ============================================================================
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic client error
    pub fn client(message: impl Into<String>) -> Self {
        Self::Client {
            message: message.into(),
        }
    }

    /// Create a bad request error with the default message
    pub fn bad_request(detail: Option<String>) -> Self {
        Self::BadRequest {
            message: "The request is unacceptable, parameters might be missing or placed incorrectly"
                .to_string(),
            detail,
        }
    }

    /// Create an unauthorized error with the default message
    pub fn unauthorized(detail: Option<String>) -> Self {
        Self::Unauthorized {
            message: "API Key missing/incorrect".to_string(),
            detail,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Whether this error belongs to the client error family.
    ///
    /// Bad request and unauthorized responses are specialisations of the
    /// generic client error, so they report `true` as well.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::Client { .. }
                | Error::UnexpectedStatus { .. }
                | Error::BadRequest { .. }
                | Error::Unauthorized { .. }
        )
    }

    /// Detail message reported by the API, if any
    pub fn api_detail(&self) -> Option<&str> {
        match self {
            Error::BadRequest { detail, .. } | Error::Unauthorized { detail, .. } => {
                detail.as_deref()
            }
            _ => None,
        }
    }

    /// Actionable advice for the end user
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Unauthorized { .. } => Some("check your API key"),
            Error::BadRequest { .. } | Error::InvalidArgument { .. } => {
                Some("check your search parameters")
            }
            Error::Client { message } if message == COULD_NOT_RETRIEVE => {
                Some("check your network connection and the configured endpoint")
            }
            Error::Client { message } if message == KEYWORD_REQUIRED => {
                Some("pass at least one keyword")
            }
            _ => None,
        }
    }
}

/// Result type alias for the news feed client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::client(COULD_NOT_RETRIEVE);
        assert_eq!(err.to_string(), "Could not retrieve news");

        let err = Error::UnexpectedStatus { status: 503 };
        assert_eq!(
            err.to_string(),
            "Unexpected response code from news feed service: 503"
        );

        let err = Error::unauthorized(None);
        assert_eq!(err.to_string(), "Unauthorized: API Key missing/incorrect");

        let err = Error::missing_field("api_key");
        assert_eq!(err.to_string(), "Missing required config field: api_key");
    }

    #[test]
    fn test_is_client_error() {
        assert!(Error::client("boom").is_client_error());
        assert!(Error::bad_request(None).is_client_error());
        assert!(Error::unauthorized(None).is_client_error());
        assert!(Error::UnexpectedStatus { status: 500 }.is_client_error());

        assert!(!Error::invalid_argument("n").is_client_error());
        assert!(!Error::decode("bad json").is_client_error());
        assert!(!Error::config("test").is_client_error());
    }

    #[test]
    fn test_hint() {
        assert_eq!(
            Error::unauthorized(None).hint(),
            Some("check your API key")
        );
        assert_eq!(
            Error::bad_request(None).hint(),
            Some("check your search parameters")
        );
        assert_eq!(
            Error::client(KEYWORD_REQUIRED).hint(),
            Some("pass at least one keyword")
        );
        assert!(Error::decode("x").hint().is_none());
    }

    #[test]
    fn test_api_detail() {
        let err = Error::unauthorized(Some("Your API key is invalid".to_string()));
        assert_eq!(err.api_detail(), Some("Your API key is invalid"));
        assert!(Error::client("x").api_detail().is_none());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
