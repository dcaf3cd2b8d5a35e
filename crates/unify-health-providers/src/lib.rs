// ABOUTME: Platform health store adapters for Health Connect, HealthKit and Samsung Health
// ABOUTME: Adapter contract, permission-sheet state, descriptors and derived metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

//! Platform health store adapters and the contract they share.
//!
//! Each adapter is written against a narrow native-binding trait
//! (`HealthConnectClient`, `HealthStore`, `HealthDataStore`) so the platform
//! bridge plugs in underneath without touching the mapping code. In-memory
//! bindings ship with every adapter for tests and the developer CLI.

#![deny(unsafe_code)]

pub use unify_health_core::constants;
pub use unify_health_core::errors;
pub use unify_health_core::models;

/// Adapter contract
pub mod core;
/// Metrics derived from other records
pub mod derived;
/// Observable permission-sheet state
pub mod permission_sheet;
/// Provider descriptors and capabilities
pub mod spi;

/// Android Health Connect adapter
#[cfg(feature = "provider-health-connect")]
pub mod health_connect;
/// Apple `HealthKit` adapter
#[cfg(feature = "provider-healthkit")]
pub mod healthkit;
/// Samsung Health data SDK adapter
#[cfg(feature = "provider-samsung")]
pub mod samsung;

pub use core::HealthDataProvider;
#[cfg(feature = "provider-health-connect")]
pub use health_connect::{HealthConnectProvider, InMemoryHealthConnectClient};
#[cfg(feature = "provider-healthkit")]
pub use healthkit::{HealthKitProvider, InMemoryHealthStore};
pub use permission_sheet::PermissionSheet;
#[cfg(feature = "provider-samsung")]
pub use samsung::{InMemorySamsungStore, SamsungHealthProvider};
#[cfg(feature = "provider-health-connect")]
pub use spi::HealthConnectDescriptor;
#[cfg(feature = "provider-healthkit")]
pub use spi::HealthKitDescriptor;
#[cfg(feature = "provider-samsung")]
pub use spi::SamsungDescriptor;
pub use spi::{descriptor_for, ProviderCapabilities, ProviderDescriptor};
pub use unify_health_core::errors::{ProviderError, ProviderResult};
