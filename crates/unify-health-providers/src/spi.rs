// ABOUTME: Provider descriptors and capability flags for the platform adapters
// ABOUTME: Identity, permission style and per-type support of each health store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

//! # Provider Service Provider Interface (SPI)
//!
//! Each adapter publishes a [`ProviderDescriptor`] describing how it connects,
//! how it asks for permissions, and which record types have a native mapping.
//! The CLI and the service layer use descriptors to explain a provider without
//! talking to the platform store.

use crate::constants::provider_names;
#[cfg(feature = "provider-health-connect")]
use crate::health_connect;
#[cfg(feature = "provider-healthkit")]
use crate::healthkit;
use crate::models::HealthRecordType;
#[cfg(feature = "provider-samsung")]
use crate::samsung;

bitflags::bitflags! {
    /// Provider capability flags
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct ProviderCapabilities: u8 {
        /// Store requires an explicit connection step before use
        const EXPLICIT_CONNECT = 0b0000_0001;
        /// Authorization is delegated to a host-UI permission sheet
        const PERMISSION_SHEET = 0b0000_0010;
        /// Authorization invokes the system dialog directly
        const DIRECT_PERMISSION_DIALOG = 0b0000_0100;
        /// Granted permissions can be queried
        const PERMISSION_QUERY = 0b0000_1000;
        /// Cycle tracking record types are readable
        const CYCLE_TRACKING = 0b0001_0000;
        /// Nutrition records are readable
        const NUTRITION = 0b0010_0000;
    }
}

impl ProviderCapabilities {
    /// Health Connect: sheet-driven permissions, full catalogue
    #[must_use]
    pub const fn health_connect() -> Self {
        Self::PERMISSION_SHEET
            .union(Self::PERMISSION_QUERY)
            .union(Self::CYCLE_TRACKING)
            .union(Self::NUTRITION)
    }

    /// `HealthKit`: system dialog, read authorization is never revealed
    #[must_use]
    pub const fn healthkit() -> Self {
        Self::DIRECT_PERMISSION_DIALOG.union(Self::CYCLE_TRACKING)
    }

    /// Samsung Health: explicit connection, system dialog, no cycle tracking
    #[must_use]
    pub const fn samsung() -> Self {
        Self::EXPLICIT_CONNECT
            .union(Self::DIRECT_PERMISSION_DIALOG)
            .union(Self::PERMISSION_QUERY)
            .union(Self::NUTRITION)
    }

    /// Check if the store needs an explicit connection
    #[must_use]
    pub const fn requires_connect(&self) -> bool {
        self.contains(Self::EXPLICIT_CONNECT)
    }

    /// Check if authorization goes through the host-UI permission sheet
    #[must_use]
    pub const fn uses_permission_sheet(&self) -> bool {
        self.contains(Self::PERMISSION_SHEET)
    }

    /// Check if granted permissions can be inspected
    #[must_use]
    pub const fn can_query_permissions(&self) -> bool {
        self.contains(Self::PERMISSION_QUERY)
    }

    /// Check if cycle tracking types are readable
    #[must_use]
    pub const fn supports_cycle_tracking(&self) -> bool {
        self.contains(Self::CYCLE_TRACKING)
    }

    /// Check if nutrition is readable
    #[must_use]
    pub const fn supports_nutrition(&self) -> bool {
        self.contains(Self::NUTRITION)
    }
}

/// Describes a provider's identity and capabilities
pub trait ProviderDescriptor: Send + Sync {
    /// Unique provider identifier (e.g. `health_connect`)
    fn name(&self) -> &'static str;

    /// Human-readable name (e.g. `Health Connect`)
    fn display_name(&self) -> &'static str;

    /// Provider capabilities
    fn capabilities(&self) -> ProviderCapabilities;

    /// Record types with a native mapping, in declaration order
    fn supported_types(&self) -> &'static [HealthRecordType];

    /// Whether `record_type` can return data on this provider
    fn supports(&self, record_type: HealthRecordType) -> bool {
        self.supported_types().contains(&record_type)
    }
}

/// Health Connect descriptor
#[cfg(feature = "provider-health-connect")]
pub struct HealthConnectDescriptor;

#[cfg(feature = "provider-health-connect")]
impl ProviderDescriptor for HealthConnectDescriptor {
    fn name(&self) -> &'static str {
        provider_names::HEALTH_CONNECT
    }

    fn display_name(&self) -> &'static str {
        "Health Connect"
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities::health_connect()
    }

    fn supported_types(&self) -> &'static [HealthRecordType] {
        health_connect::SUPPORTED_TYPES
    }
}

/// `HealthKit` descriptor
#[cfg(feature = "provider-healthkit")]
pub struct HealthKitDescriptor;

#[cfg(feature = "provider-healthkit")]
impl ProviderDescriptor for HealthKitDescriptor {
    fn name(&self) -> &'static str {
        provider_names::HEALTHKIT
    }

    fn display_name(&self) -> &'static str {
        "Apple Health"
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities::healthkit()
    }

    fn supported_types(&self) -> &'static [HealthRecordType] {
        healthkit::SUPPORTED_TYPES
    }
}

/// Samsung Health descriptor
#[cfg(feature = "provider-samsung")]
pub struct SamsungDescriptor;

#[cfg(feature = "provider-samsung")]
impl ProviderDescriptor for SamsungDescriptor {
    fn name(&self) -> &'static str {
        provider_names::SAMSUNG
    }

    fn display_name(&self) -> &'static str {
        "Samsung Health"
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities::samsung()
    }

    fn supported_types(&self) -> &'static [HealthRecordType] {
        samsung::SUPPORTED_TYPES
    }
}

/// Descriptor for a provider name, if that provider is compiled in
#[must_use]
pub fn descriptor_for(name: &str) -> Option<Box<dyn ProviderDescriptor>> {
    match name {
        #[cfg(feature = "provider-health-connect")]
        provider_names::HEALTH_CONNECT => Some(Box::new(HealthConnectDescriptor)),
        #[cfg(feature = "provider-healthkit")]
        provider_names::HEALTHKIT => Some(Box::new(HealthKitDescriptor)),
        #[cfg(feature = "provider-samsung")]
        provider_names::SAMSUNG => Some(Box::new(SamsungDescriptor)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_presets_are_disjoint_on_permission_style() {
        for caps in [
            ProviderCapabilities::health_connect(),
            ProviderCapabilities::healthkit(),
            ProviderCapabilities::samsung(),
        ] {
            assert_ne!(
                caps.uses_permission_sheet(),
                caps.contains(ProviderCapabilities::DIRECT_PERMISSION_DIALOG)
            );
        }
    }

    #[test]
    fn test_unknown_descriptor() {
        assert!(descriptor_for("google_fit").is_none());
    }
}
