// ABOUTME: Environment configuration for the health service and developer CLI
// ABOUTME: Provider selection, lookback window and permission request scope parsed from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

//! Environment-based configuration

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants::{defaults, env_config, provider_names};
use crate::errors::{AppError, AppResult};

/// Platform health store backing the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Android Health Connect
    HealthConnect,
    /// Apple `HealthKit`
    #[serde(rename = "healthkit")]
    HealthKit,
    /// Samsung Health data SDK
    Samsung,
}

impl ProviderKind {
    /// Every provider kind
    pub const ALL: [Self; 3] = [Self::HealthConnect, Self::HealthKit, Self::Samsung];

    /// Provider name as used in logs and descriptors
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HealthConnect => provider_names::HEALTH_CONNECT,
            Self::HealthKit => provider_names::HEALTHKIT,
            Self::Samsung => provider_names::SAMSUNG,
        }
    }

    /// Default provider for the build target
    #[must_use]
    pub const fn platform_default() -> Self {
        if cfg!(any(target_os = "ios", target_os = "macos")) {
            Self::HealthKit
        } else {
            Self::HealthConnect
        }
    }
}

impl Default for ProviderKind {
    fn default() -> Self {
        Self::platform_default()
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "health_connect" | "healthconnect" | "android" => Ok(Self::HealthConnect),
            "healthkit" | "health_kit" | "apple" | "ios" => Ok(Self::HealthKit),
            "samsung" | "samsung_health" => Ok(Self::Samsung),
            other => Err(AppError::config_invalid(format!(
                "unknown provider '{other}', expected one of health_connect, healthkit, samsung"
            ))),
        }
    }
}

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Provider backing the service
    pub provider: ProviderKind,
    /// Days covered by `read_recent`
    pub lookback_days: u32,
    /// Request authorization for every record type at startup
    pub request_all_types: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::platform_default(),
            lookback_days: defaults::LOOKBACK_DAYS,
            request_all_types: true,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// resulting configuration fails [`ServiceConfig::validate`].
    pub fn from_env() -> AppResult<Self> {
        let provider = match env::var(env_config::PROVIDER) {
            Ok(value) => value.parse()?,
            Err(_) => ProviderKind::platform_default(),
        };

        let lookback_days = match env::var(env_config::LOOKBACK_DAYS) {
            Ok(value) => value.trim().parse::<u32>().map_err(|e| {
                AppError::config_invalid(format!(
                    "{} must be a whole number of days: {e}",
                    env_config::LOOKBACK_DAYS
                ))
            })?,
            Err(_) => defaults::LOOKBACK_DAYS,
        };

        let request_all_types =
            env::var(env_config::REQUEST_ALL_TYPES).map_or(true, |v| parse_bool(&v));

        let config = Self {
            provider,
            lookback_days,
            request_all_types,
        };
        config.validate()?;

        info!(
            provider = %config.provider,
            lookback_days = config.lookback_days,
            request_all_types = config.request_all_types,
            "Service configuration loaded"
        );
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the lookback window is zero or longer than
    /// [`defaults::MAX_LOOKBACK_DAYS`].
    pub fn validate(&self) -> AppResult<()> {
        if self.lookback_days == 0 {
            return Err(AppError::config_invalid(format!(
                "{} must be at least 1",
                env_config::LOOKBACK_DAYS
            )));
        }
        if self.lookback_days > defaults::MAX_LOOKBACK_DAYS {
            return Err(AppError::config_invalid(format!(
                "{} must not exceed {}",
                env_config::LOOKBACK_DAYS,
                defaults::MAX_LOOKBACK_DAYS
            )));
        }
        if self.provider == ProviderKind::HealthKit && !self.request_all_types {
            warn!("HealthKit cannot report granted read types; only requested types will be readable");
        }
        Ok(())
    }
}

/// Parse a boolean flag; anything other than an explicit false value is true
fn parse_bool(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}
