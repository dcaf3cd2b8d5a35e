// ABOUTME: Application constants organized by domain
// ABOUTME: Provider names, service identity, configuration defaults and unit factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

/// Unit conversion factors
pub mod units;

/// Provider identifiers shared by descriptors, configuration and logs
pub mod provider_names {
    /// Android Health Connect
    pub const HEALTH_CONNECT: &str = "health_connect";
    /// Apple `HealthKit`
    pub const HEALTHKIT: &str = "healthkit";
    /// Samsung Health data SDK
    pub const SAMSUNG: &str = "samsung";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Default service name
    pub const UNIFY_HEALTH: &str = "unify-health";
}

/// Configuration defaults
pub mod defaults {
    /// Default read window, matching the original dashboard's history view
    pub const LOOKBACK_DAYS: u32 = 15;
    /// Upper bound accepted for the read window
    pub const MAX_LOOKBACK_DAYS: u32 = 365;
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Active provider (`health_connect`, `healthkit`, `samsung`)
    pub const PROVIDER: &str = "UNIFY_HEALTH_PROVIDER";
    /// Read window in days
    pub const LOOKBACK_DAYS: &str = "UNIFY_HEALTH_LOOKBACK_DAYS";
    /// Whether the permission request covers every record type
    pub const REQUEST_ALL_TYPES: &str = "UNIFY_HEALTH_REQUEST_ALL_TYPES";
}
