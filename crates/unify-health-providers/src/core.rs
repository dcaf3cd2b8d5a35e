// ABOUTME: Adapter contract every platform health store backend implements
// ABOUTME: Connect, permission query and request, time-ranged reads and permission-sheet helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

//! # Health Data Provider Contract
//!
//! Every platform store (Health Connect, `HealthKit`, Samsung Health) is wrapped
//! by one adapter implementing [`HealthDataProvider`]. Callers only ever see
//! the unified model from `unify_health_core::models`.
//!
//! ## Error policy
//!
//! - `connect()` reports an unavailable store as `false`, never as an error
//! - `read_data()` returns an empty list for unsupported types, denied
//!   permissions, native failures or simply no data
//! - `request_authorization()` is the only operation that propagates failures

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::errors::ProviderResult;
use crate::models::{HealthRecord, HealthRecordType};
use crate::permission_sheet::PermissionSheet;
use crate::spi::ProviderCapabilities;

/// Read-only access to one platform health store
#[async_trait]
pub trait HealthDataProvider: Send + Sync {
    /// Provider identifier (e.g. `health_connect`)
    fn name(&self) -> &'static str;

    /// What this adapter supports
    fn capabilities(&self) -> ProviderCapabilities;

    /// Permission-sheet state owned by this adapter
    fn permission_sheet(&self) -> &PermissionSheet;

    /// Establish (or confirm) the connection to the store
    ///
    /// Idempotent. Returns `false` when the store is not present on the device.
    async fn connect(&self) -> bool;

    /// Whether every native permission mapped from `types` has been granted
    ///
    /// Types without a native mapping are left out of the check.
    async fn has_permissions(&self, types: &BTreeSet<HealthRecordType>) -> bool;

    /// Start the platform permission flow for `types`
    ///
    /// Sheet-style platforms raise the permission sheet and return; direct
    /// dialog platforms suspend until the user responds.
    ///
    /// # Errors
    ///
    /// Returns an error if the native permission request fails.
    async fn request_authorization(&self, types: &BTreeSet<HealthRecordType>)
        -> ProviderResult<()>;

    /// Read records of `record_type` overlapping `[start, end)`, oldest first
    async fn read_data(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        record_type: HealthRecordType,
    ) -> Vec<HealthRecord>;

    /// Raise the permission sheet
    fn show_permission_sheet(&self) {
        self.permission_sheet().show();
    }

    /// Lower the permission sheet once the host UI has finished the OS dialog
    fn hide_permission_sheet(&self) {
        self.permission_sheet().hide();
    }

    /// Current permission-sheet visibility
    fn is_permission_sheet_visible(&self) -> bool {
        self.permission_sheet().is_visible()
    }

    /// Native permission identifiers the host UI should request
    fn permissions_to_request(&self) -> BTreeSet<String> {
        self.permission_sheet().requested_permissions()
    }

    /// Observe permission-sheet visibility
    fn subscribe_permission_sheet(&self) -> watch::Receiver<bool> {
        self.permission_sheet().subscribe()
    }
}
