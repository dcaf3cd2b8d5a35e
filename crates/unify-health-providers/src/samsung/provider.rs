// ABOUTME: Samsung Health adapter implementing the HealthDataProvider contract
// ABOUTME: Remembered service connection, permission-key authorization and mapped row reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use crate::constants::provider_names::SAMSUNG;
use crate::core::HealthDataProvider;
use crate::derived::{move_minutes, query_range};
use crate::errors::{ProviderError, ProviderResult};
use crate::models::{sort_chronologically, HealthRecord, HealthRecordType};
use crate::permission_sheet::PermissionSheet;
use crate::spi::ProviderCapabilities;

use super::mapping::{data_type_for, permission_key_for, row_interval, to_health_record};
use super::store::{HealthDataStore, PermissionKey, ReadRequest, ResultStatus};

/// Samsung Health data SDK adapter
///
/// The store must be connected before permissions can be checked or
/// requested; a successful connection is remembered for the adapter's
/// lifetime.
pub struct SamsungHealthProvider<S> {
    store: S,
    connected: AtomicBool,
    sheet: PermissionSheet,
}

impl<S: HealthDataStore> SamsungHealthProvider<S> {
    /// Wrap a data store
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            connected: AtomicBool::new(false),
            sheet: PermissionSheet::new(),
        }
    }

    /// Underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Whether `connect` has succeeded
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn keys_for(types: &BTreeSet<HealthRecordType>) -> BTreeSet<PermissionKey> {
        types
            .iter()
            .copied()
            .filter_map(permission_key_for)
            .collect()
    }
}

#[async_trait]
impl<S: HealthDataStore> HealthDataProvider for SamsungHealthProvider<S> {
    fn name(&self) -> &'static str {
        SAMSUNG
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities::samsung()
    }

    fn permission_sheet(&self) -> &PermissionSheet {
        &self.sheet
    }

    #[instrument(skip(self), fields(provider = SAMSUNG))]
    async fn connect(&self) -> bool {
        if self.is_connected() {
            return true;
        }
        match self.store.connect_service().await {
            Ok(()) => {
                info!("Samsung HealthDataStore connected");
                self.connected.store(true, Ordering::SeqCst);
                true
            }
            Err(e) => {
                warn!(error = %e, "Samsung HealthDataStore connection failed");
                false
            }
        }
    }

    #[instrument(skip(self, types), fields(provider = SAMSUNG, requested = types.len()))]
    async fn has_permissions(&self, types: &BTreeSet<HealthRecordType>) -> bool {
        if !self.is_connected() {
            return false;
        }
        let keys = Self::keys_for(types);
        if keys.is_empty() {
            return true;
        }
        match self.store.is_permission_acquired(&keys).await {
            Ok(acquired) => keys.iter().all(|key| acquired.get(key) == Some(&true)),
            Err(e) => {
                warn!(error = %e, "Failed to query acquired permissions");
                false
            }
        }
    }

    #[instrument(skip(self, types), fields(provider = SAMSUNG, requested = types.len()))]
    async fn request_authorization(&self, types: &BTreeSet<HealthRecordType>) -> ProviderResult<()> {
        if !self.is_connected() {
            return Err(ProviderError::NotConnected {
                provider: SAMSUNG.to_owned(),
            });
        }
        let keys = Self::keys_for(types);
        if keys.is_empty() {
            debug!("No Samsung permission keys to request");
            return Ok(());
        }
        info!(keys = keys.len(), "Requesting Samsung Health permissions");
        match self.store.request_permissions(&keys).await? {
            ResultStatus::Successful => Ok(()),
            status => Err(ProviderError::PermissionRequestFailed {
                provider: SAMSUNG.to_owned(),
                reason: format!("permission request finished with {status}"),
            }),
        }
    }

    #[instrument(skip(self), fields(provider = SAMSUNG, record_type = %record_type))]
    async fn read_data(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        record_type: HealthRecordType,
    ) -> Vec<HealthRecord> {
        let Some(range) = query_range(SAMSUNG, start, end) else {
            return Vec::new();
        };
        let Some(data_type) = data_type_for(record_type) else {
            debug!("No Samsung data type for this record type");
            return Vec::new();
        };
        if !self.is_connected() {
            warn!("Samsung HealthDataStore is not connected, returning no records");
            return Vec::new();
        }

        let request = ReadRequest {
            data_type: data_type.to_owned(),
            start_ms: range.start().timestamp_millis(),
            end_ms: range.end().timestamp_millis(),
        };
        let rows = match self.store.read(request).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, "Samsung read failed, returning no records");
                return Vec::new();
            }
        };

        if record_type == HealthRecordType::MoveMinutes {
            return move_minutes(rows.iter().filter_map(row_interval), range)
                .into_iter()
                .collect();
        }

        let mut records: Vec<HealthRecord> = rows
            .iter()
            .filter_map(|row| to_health_record(record_type, row))
            .collect();
        sort_chronologically(&mut records);
        debug!(count = records.len(), "Read Samsung Health records");
        records
    }
}
