// ABOUTME: Structured error types for health store adapter operations
// ABOUTME: Distinguishes unavailable stores, failed native calls, and rejected permission requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors raised by health store adapters and their native bindings
///
/// Reads never surface these to callers (they degrade to an empty list), but
/// authorization requests, connection attempts and fixture loading do.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// The platform health store is not present on this device
    #[error("{provider} health store is not available on this device")]
    Unavailable {
        /// Provider name
        provider: String,
    },

    /// The adapter has no live connection to its health store
    #[error("{provider} is not connected")]
    NotConnected {
        /// Provider name
        provider: String,
    },

    /// The native SDK reported a failure
    #[error("{provider} native call failed: {details}")]
    NativeSdk {
        /// Provider name
        provider: String,
        /// Failure description as reported by the SDK
        details: String,
    },

    /// The permission request completed without success
    #[error("{provider} permission request failed: {reason}")]
    PermissionRequestFailed {
        /// Provider name
        provider: String,
        /// Reason reported by the platform
        reason: String,
    },

    /// An interval whose end precedes its start
    #[error("interval end {end} precedes start {start}")]
    InvalidInterval {
        /// Interval start
        start: DateTime<Utc>,
        /// Interval end
        end: DateTime<Utc>,
    },

    /// Native records supplied to an in-memory binding could not be parsed
    #[error("invalid {provider} fixture: {details}")]
    InvalidFixture {
        /// Provider name
        provider: String,
        /// Parse failure description
        details: String,
    },
}

impl ProviderError {
    /// Shorthand for a native SDK failure
    pub fn native(provider: &str, details: impl Into<String>) -> Self {
        Self::NativeSdk {
            provider: provider.to_owned(),
            details: details.into(),
        }
    }

    /// Provider name attached to this error, if any
    #[must_use]
    pub fn provider(&self) -> Option<&str> {
        match self {
            Self::Unavailable { provider }
            | Self::NotConnected { provider }
            | Self::NativeSdk { provider, .. }
            | Self::PermissionRequestFailed { provider, .. }
            | Self::InvalidFixture { provider, .. } => Some(provider),
            Self::InvalidInterval { .. } => None,
        }
    }
}

/// Result type for adapter operations
pub type ProviderResult<T> = Result<T, ProviderError>;
