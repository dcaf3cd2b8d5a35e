// ABOUTME: Health service facade the UI layer talks to
// ABOUTME: Forwards availability, permission and read calls to the injected platform adapter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

//! # Health Service
//!
//! [`HealthService`] owns one [`HealthDataProvider`] chosen by the caller and
//! forwards every call to it. On top of the adapter contract it adds the
//! lookback-window read, concurrent multi-type reads and the status line
//! shown next to read results.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use futures_util::future::join_all;
use tokio::sync::watch;
use tracing::{info, instrument, warn};

use crate::config::ServiceConfig;
use crate::constants::defaults;
use crate::errors::AppResult;
use crate::models::{HealthRecord, HealthRecordType};
use crate::providers::{HealthDataProvider, ProviderCapabilities};

/// Facade over a platform health adapter
#[derive(Clone)]
pub struct HealthService {
    provider: Arc<dyn HealthDataProvider>,
    lookback: Duration,
}

impl HealthService {
    /// Wrap `provider` with the default lookback window
    #[must_use]
    pub fn new(provider: Arc<dyn HealthDataProvider>) -> Self {
        Self {
            provider,
            lookback: Duration::days(i64::from(defaults::LOOKBACK_DAYS)),
        }
    }

    /// Wrap `provider` using the lookback window from `config`
    #[must_use]
    pub fn with_config(provider: Arc<dyn HealthDataProvider>, config: &ServiceConfig) -> Self {
        Self::new(provider).with_lookback_days(config.lookback_days)
    }

    /// Override the window used by [`HealthService::read_recent`]
    ///
    /// `days` is clamped to `1..=MAX_LOOKBACK_DAYS`.
    #[must_use]
    pub fn with_lookback_days(mut self, days: u32) -> Self {
        let clamped = days.clamp(1, defaults::MAX_LOOKBACK_DAYS);
        if clamped != days {
            warn!(
                requested = days,
                applied = clamped,
                "Lookback outside supported range, clamping"
            );
        }
        self.lookback = Duration::days(i64::from(clamped));
        self
    }

    /// Window used by [`HealthService::read_recent`]
    #[must_use]
    pub const fn lookback(&self) -> Duration {
        self.lookback
    }

    /// Underlying adapter
    #[must_use]
    pub fn provider(&self) -> &Arc<dyn HealthDataProvider> {
        &self.provider
    }

    /// Adapter name
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Adapter capabilities
    #[must_use]
    pub fn capabilities(&self) -> ProviderCapabilities {
        self.provider.capabilities()
    }

    /// Whether the platform store can be used on this device
    pub async fn is_available(&self) -> bool {
        self.provider.connect().await
    }

    /// Whether every mapped permission for `types` has been granted
    pub async fn has_permissions(&self, types: &BTreeSet<HealthRecordType>) -> bool {
        self.provider.has_permissions(types).await
    }

    /// Start the platform permission flow for `types`
    ///
    /// # Errors
    ///
    /// Returns an error if the adapter's native permission request fails.
    pub async fn request_authorization(&self, types: &BTreeSet<HealthRecordType>) -> AppResult<()> {
        self.provider.request_authorization(types).await?;
        Ok(())
    }

    /// Start the platform permission flow for every record type
    ///
    /// # Errors
    ///
    /// Returns an error if the adapter's native permission request fails.
    pub async fn request_all_authorization(&self) -> AppResult<()> {
        let types: BTreeSet<HealthRecordType> = HealthRecordType::ALL.into_iter().collect();
        self.request_authorization(&types).await
    }

    /// Read records of `record_type` overlapping `[start, end)`
    pub async fn read_data(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        record_type: HealthRecordType,
    ) -> Vec<HealthRecord> {
        self.provider.read_data(start, end, record_type).await
    }

    /// Read the lookback window ending now
    pub async fn read_recent(&self, record_type: HealthRecordType) -> Vec<HealthRecord> {
        self.read_window(self.lookback, record_type).await
    }

    /// Read the `window` ending now
    ///
    /// A window reaching past the representable date range reads nothing.
    pub async fn read_window(
        &self,
        window: Duration,
        record_type: HealthRecordType,
    ) -> Vec<HealthRecord> {
        let end = Utc::now();
        let Some(start) = end.checked_sub_signed(window) else {
            warn!(
                provider = self.provider.name(),
                window_days = window.num_days(),
                "Read window out of range"
            );
            return Vec::new();
        };
        self.read_data(start, end, record_type).await
    }

    /// Read several types concurrently, returning results in request order
    #[instrument(skip(self, types), fields(provider = self.provider.name(), types = types.len()))]
    pub async fn read_many(
        &self,
        types: &[HealthRecordType],
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<(HealthRecordType, Vec<HealthRecord>)> {
        let reads = types.iter().map(|&record_type| async move {
            (record_type, self.read_data(start, end, record_type).await)
        });
        let results = join_all(reads).await;
        info!(
            records = results.iter().map(|(_, records)| records.len()).sum::<usize>(),
            "Completed multi-type read"
        );
        results
    }

    /// Status line for a finished read
    #[must_use]
    pub fn describe_result(record_type: HealthRecordType, records: &[HealthRecord]) -> String {
        if records.is_empty() {
            format!("No {record_type} data found for the requested period.")
        } else {
            format!("Fetched {} {record_type} records.", records.len())
        }
    }

    /// Raise the permission sheet
    pub fn show_permission_sheet(&self) {
        self.provider.show_permission_sheet();
    }

    /// Lower the permission sheet
    pub fn hide_permission_sheet(&self) {
        self.provider.hide_permission_sheet();
    }

    /// Current permission-sheet visibility
    #[must_use]
    pub fn is_permission_sheet_visible(&self) -> bool {
        self.provider.is_permission_sheet_visible()
    }

    /// Native permission identifiers the host UI should request
    #[must_use]
    pub fn permissions_to_request(&self) -> BTreeSet<String> {
        self.provider.permissions_to_request()
    }

    /// Observe permission-sheet visibility
    #[must_use]
    pub fn subscribe_permission_sheet(&self) -> watch::Receiver<bool> {
        self.provider.subscribe_permission_sheet()
    }
}
