// ABOUTME: Health Connect adapter implementing the HealthDataProvider contract
// ABOUTME: Sheet-style authorization, granted-permission checks and mapped record reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use crate::constants::provider_names::HEALTH_CONNECT;
use crate::core::HealthDataProvider;
use crate::derived::{move_minutes, query_range};
use crate::errors::ProviderResult;
use crate::models::{sort_chronologically, HealthRecord, HealthRecordType};
use crate::permission_sheet::PermissionSheet;
use crate::spi::ProviderCapabilities;

use super::client::{HealthConnectClient, SdkStatus};
use super::mapping::{exercise_interval, read_permission_for, record_kind_for, to_health_record};

/// Android Health Connect adapter
///
/// Health Connect has no explicit connect step and its permission dialog is
/// launched by the host activity, so authorization only raises the
/// permission sheet with the `READ_*` permissions to request.
pub struct HealthConnectProvider<C> {
    client: C,
    sheet: PermissionSheet,
}

impl<C: HealthConnectClient> HealthConnectProvider<C> {
    /// Wrap a Health Connect client
    #[must_use]
    pub fn new(client: C) -> Self {
        Self {
            client,
            sheet: PermissionSheet::new(),
        }
    }

    /// Underlying client
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    fn permissions_for(types: &BTreeSet<HealthRecordType>) -> BTreeSet<String> {
        types
            .iter()
            .copied()
            .filter_map(read_permission_for)
            .collect()
    }
}

#[async_trait]
impl<C: HealthConnectClient> HealthDataProvider for HealthConnectProvider<C> {
    fn name(&self) -> &'static str {
        HEALTH_CONNECT
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities::health_connect()
    }

    fn permission_sheet(&self) -> &PermissionSheet {
        &self.sheet
    }

    async fn connect(&self) -> bool {
        let status = self.client.sdk_status().await;
        debug!(provider = HEALTH_CONNECT, ?status, "Checked SDK status");
        status == SdkStatus::Available
    }

    #[instrument(skip(self, types), fields(provider = HEALTH_CONNECT, requested = types.len()))]
    async fn has_permissions(&self, types: &BTreeSet<HealthRecordType>) -> bool {
        let required = Self::permissions_for(types);
        if required.is_empty() {
            return true;
        }
        match self.client.granted_permissions().await {
            Ok(granted) => required.is_subset(&granted),
            Err(e) => {
                warn!(error = %e, "Failed to query granted permissions");
                false
            }
        }
    }

    #[instrument(skip(self, types), fields(provider = HEALTH_CONNECT, requested = types.len()))]
    async fn request_authorization(&self, types: &BTreeSet<HealthRecordType>) -> ProviderResult<()> {
        let permissions = Self::permissions_for(types);
        info!(
            permissions = permissions.len(),
            "Requesting Health Connect permissions via permission sheet"
        );
        self.sheet.request(permissions);
        Ok(())
    }

    #[instrument(skip(self), fields(provider = HEALTH_CONNECT, record_type = %record_type))]
    async fn read_data(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        record_type: HealthRecordType,
    ) -> Vec<HealthRecord> {
        let Some(range) = query_range(HEALTH_CONNECT, start, end) else {
            return Vec::new();
        };
        let Some(kind) = record_kind_for(record_type) else {
            debug!("No Health Connect record class for this type");
            return Vec::new();
        };

        let native = match self.client.read_records(kind, range).await {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "Health Connect read failed, returning no records");
                return Vec::new();
            }
        };

        if record_type == HealthRecordType::MoveMinutes {
            return move_minutes(native.iter().filter_map(exercise_interval), range)
                .into_iter()
                .collect();
        }

        let mut records: Vec<HealthRecord> = native.into_iter().filter_map(to_health_record).collect();
        sort_chronologically(&mut records);
        debug!(count = records.len(), "Read Health Connect records");
        records
    }
}
