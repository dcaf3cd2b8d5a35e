// ABOUTME: Builds platform adapters over in-memory native stores
// ABOUTME: Loads JSON fixtures of native records for the developer CLI and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

//! Adapter construction from JSON fixtures.
//!
//! Each provider reads its own native fixture format: Health Connect records,
//! `HealthKit` samples or Samsung Health rows. Without a fixture the adapter
//! runs over an empty store.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::ProviderKind;
use crate::errors::{AppError, AppResult};
use crate::providers::HealthDataProvider;

#[cfg(feature = "provider-health-connect")]
use crate::providers::{HealthConnectProvider, InMemoryHealthConnectClient};
#[cfg(feature = "provider-healthkit")]
use crate::providers::{HealthKitProvider, InMemoryHealthStore};
#[cfg(feature = "provider-samsung")]
use crate::providers::{InMemorySamsungStore, SamsungHealthProvider};

fn read_fixture(path: &Path) -> AppResult<String> {
    debug!(path = %path.display(), "Loading fixture");
    fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("cannot read fixture {}: {e}", path.display()))
            .with_source(e)
    })
}

/// Build the adapter for `kind`, optionally seeded from a fixture file
///
/// # Errors
///
/// Returns an error if the fixture cannot be read or parsed, or if the
/// provider was not compiled into this build.
pub fn build_provider(
    kind: ProviderKind,
    fixture: Option<&Path>,
) -> AppResult<Arc<dyn HealthDataProvider>> {
    let json = fixture.map(read_fixture).transpose()?;
    let provider = build_from_json(kind, json.as_deref())?;
    info!(
        provider = provider.name(),
        seeded = json.is_some(),
        "Built in-memory provider"
    );
    Ok(provider)
}

/// Build the adapter for `kind` from fixture JSON, or over an empty store
///
/// # Errors
///
/// Returns an error if the JSON does not match the provider's fixture format,
/// or if the provider was not compiled into this build.
pub fn build_from_json(
    kind: ProviderKind,
    json: Option<&str>,
) -> AppResult<Arc<dyn HealthDataProvider>> {
    match kind {
        #[cfg(feature = "provider-health-connect")]
        ProviderKind::HealthConnect => {
            let client = match json {
                Some(json) => InMemoryHealthConnectClient::from_fixture_json(json)?,
                None => InMemoryHealthConnectClient::new(),
            };
            Ok(Arc::new(HealthConnectProvider::new(client)))
        }
        #[cfg(feature = "provider-healthkit")]
        ProviderKind::HealthKit => {
            let store = match json {
                Some(json) => InMemoryHealthStore::from_fixture_json(json)?,
                None => InMemoryHealthStore::new(),
            };
            Ok(Arc::new(HealthKitProvider::new(store)))
        }
        #[cfg(feature = "provider-samsung")]
        ProviderKind::Samsung => {
            let store = match json {
                Some(json) => InMemorySamsungStore::from_fixture_json(json)?,
                None => InMemorySamsungStore::new(),
            };
            Ok(Arc::new(SamsungHealthProvider::new(store)))
        }
        #[allow(unreachable_patterns)]
        other => Err(AppError::config_invalid(format!(
            "provider '{other}' is not enabled in this build"
        ))),
    }
}
