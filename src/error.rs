//! Error types for the Home Assistant plugin
//!
//! The normalization engine itself is total and never produces these errors.
//! They cover the plugin boundary: configuration, snapshot loading and the
//! service-call pass-through to the hub.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for plugin operations
pub type Result<T> = std::result::Result<T, HassError>;

/// Error types raised at the plugin boundary
#[derive(Error, Debug)]
pub enum HassError {
    /// Connection errors reported by the transport
    #[error("Connection error: {0}")]
    Connection(String),

    /// Authentication errors reported by the transport
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// JSON parsing errors
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The hub rejected a service call
    #[error("Service call failed: {0}")]
    ServiceCall(String),

    /// Generic errors
    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

/// Structured error code for machine-readable error handling
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Connection errors (1000-1099)
    ConnectionLost,

    // Authentication errors (1100-1199)
    InvalidCredentials,

    // Configuration errors (1200-1299)
    ConfigurationInvalid,

    // Data errors (1400-1499)
    ParsingFailed,
    InvalidInput,

    // Service errors (1600-1699)
    ServiceCallFailed,

    // Internal errors (1900-1999)
    InternalError,
}

impl ErrorCode {
    /// Get numeric error code
    pub fn as_number(&self) -> u32 {
        match self {
            ErrorCode::ConnectionLost => 1003,
            ErrorCode::InvalidCredentials => 1101,
            ErrorCode::ConfigurationInvalid => 1202,
            ErrorCode::ParsingFailed => 1401,
            ErrorCode::InvalidInput => 1402,
            ErrorCode::ServiceCallFailed => 1603,
            ErrorCode::InternalError => 1901,
        }
    }

    /// Get error category
    pub fn category(&self) -> &'static str {
        match self.as_number() {
            1000..=1099 => "connection",
            1100..=1199 => "authentication",
            1200..=1299 => "configuration",
            1400..=1499 => "data",
            1600..=1699 => "service",
            _ => "internal",
        }
    }
}

impl HassError {
    /// Create a connection error
    pub fn connection<S: Into<String>>(msg: S) -> Self {
        Self::Connection(msg.into())
    }

    /// Create an authentication error
    pub fn authentication<S: Into<String>>(msg: S) -> Self {
        Self::Authentication(msg.into())
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a service call error
    pub fn service_call<S: Into<String>>(msg: S) -> Self {
        Self::ServiceCall(msg.into())
    }

    /// Map the error onto its structured code
    pub fn to_error_code(&self) -> ErrorCode {
        match self {
            HassError::Connection(_) => ErrorCode::ConnectionLost,
            HassError::Authentication(_) => ErrorCode::InvalidCredentials,
            HassError::Json(_) => ErrorCode::ParsingFailed,
            HassError::Config(_) => ErrorCode::ConfigurationInvalid,
            HassError::InvalidInput(_) => ErrorCode::InvalidInput,
            HassError::ServiceCall(_) => ErrorCode::ServiceCallFailed,
            HassError::Io(_) | HassError::Generic(_) => ErrorCode::InternalError,
        }
    }

    /// Check if the operation that produced this error may succeed on retry
    pub fn is_retryable(&self) -> bool {
        matches!(self, HassError::Connection(_) | HassError::Io(_))
    }

    /// Check if error is authentication-related
    pub fn is_auth_error(&self) -> bool {
        matches!(self, HassError::Authentication(_))
    }

    /// Message safe to hand to the host; credential details are not echoed
    pub fn sanitized_message(&self) -> String {
        #[cfg(debug_assertions)]
        {
            self.to_string()
        }

        #[cfg(not(debug_assertions))]
        {
            match self {
                HassError::Authentication(_) => "Authentication failed".to_string(),
                HassError::Config(_) => "Configuration error".to_string(),
                HassError::Io(_) | HassError::Generic(_) => "Internal error".to_string(),
                other => other.to_string(),
            }
        }
    }
}
