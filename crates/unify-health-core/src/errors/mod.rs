// ABOUTME: Unified error handling for the unify-health service layer
// ABOUTME: Defines error codes, the AppError type, and conversions from adapter errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

//! # Unified Error Handling
//!
//! Adapters report failures with [`ProviderError`]. The service layer,
//! configuration loading and the CLI wrap them into [`AppError`], which pairs a
//! stable [`ErrorCode`] with a human-readable message.

/// Adapter-level error types
pub mod provider;

pub use provider::{ProviderError, ProviderResult};

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::{fmt, io};
use thiserror::Error;

/// Standard error codes used throughout the service layer
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input could not be parsed or is out of range
    InvalidInput,
    /// Configuration is present but invalid
    ConfigInvalid,
    /// The platform health store is not available
    ExternalServiceUnavailable,
    /// The platform health store reported a failure
    ExternalServiceError,
    /// The user or platform refused a permission request
    PermissionDenied,
    /// Data could not be (de)serialized
    SerializationError,
    /// Unexpected internal failure
    InternalError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::ExternalServiceUnavailable => "The health data store is unavailable",
            Self::ExternalServiceError => "The health data store encountered an error",
            Self::PermissionDenied => "Access to health data was not granted",
            Self::SerializationError => "Data serialization/deserialization failed",
            Self::InternalError => "An internal error occurred",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Unified error type for the service layer
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid user input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Invalid configuration value
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Unexpected internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        let code = match &error {
            ProviderError::Unavailable { .. } | ProviderError::NotConnected { .. } => {
                ErrorCode::ExternalServiceUnavailable
            }
            ProviderError::PermissionRequestFailed { .. } => ErrorCode::PermissionDenied,
            ProviderError::InvalidInterval { .. } => ErrorCode::InvalidInput,
            ProviderError::InvalidFixture { .. } => ErrorCode::SerializationError,
            ProviderError::NativeSdk { .. } => ErrorCode::ExternalServiceError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(
            ErrorCode::SerializationError,
            format!("JSON processing failed: {error}"),
        )
        .with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::internal(format!("I/O failure: {error}")).with_source(error)
    }
}

/// Result type alias for service-layer operations
pub type AppResult<T> = Result<T, AppError>;
