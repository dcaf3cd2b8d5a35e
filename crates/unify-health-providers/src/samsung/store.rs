// ABOUTME: Samsung Health data store binding and an in-memory implementation
// ABOUTME: Service connection, permission keys and time-ranged resolver reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::constants::provider_names::SAMSUNG;
use crate::errors::{ProviderError, ProviderResult};

use super::data::SamsungHealthData;

/// `HealthPermissionManager.PermissionType`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionType {
    /// Read access
    Read,
    /// Write access
    Write,
}

/// `HealthPermissionManager.PermissionKey`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PermissionKey {
    /// Data type name
    pub data_type: String,
    /// Access kind
    pub permission_type: PermissionType,
}

impl PermissionKey {
    /// Read key for `data_type`
    #[must_use]
    pub fn read(data_type: impl Into<String>) -> Self {
        Self {
            data_type: data_type.into(),
            permission_type: PermissionType::Read,
        }
    }
}

/// `HealthResultHolder.BaseResult` status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    /// `STATUS_SUCCESSFUL`
    Successful,
    /// `STATUS_CANCELED`
    Canceled,
    /// `STATUS_FAILED`
    Failed,
    /// `STATUS_INVALID_INPUT_DATA`
    InvalidInputData,
    /// `STATUS_OUT_OF_SPACE`
    OutOfSpace,
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Successful => "STATUS_SUCCESSFUL",
            Self::Canceled => "STATUS_CANCELED",
            Self::Failed => "STATUS_FAILED",
            Self::InvalidInputData => "STATUS_INVALID_INPUT_DATA",
            Self::OutOfSpace => "STATUS_OUT_OF_SPACE",
        };
        f.write_str(name)
    }
}

/// `HealthDataResolver.ReadRequest` with a local time range on the start time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRequest {
    /// Data type name
    pub data_type: String,
    /// Inclusive range start, epoch milliseconds
    pub start_ms: i64,
    /// Exclusive range end, epoch milliseconds
    pub end_ms: i64,
}

/// Narrow view of the Samsung `HealthDataStore` and its managers
#[async_trait]
pub trait HealthDataStore: Send + Sync {
    /// `HealthDataStore.connectService()`, resolved by the connection listener
    async fn connect_service(&self) -> ProviderResult<()>;

    /// `HealthPermissionManager.isPermissionAcquired`
    async fn is_permission_acquired(
        &self,
        keys: &BTreeSet<PermissionKey>,
    ) -> ProviderResult<BTreeMap<PermissionKey, bool>>;

    /// `HealthPermissionManager.requestPermissions`, resolved by its result listener
    async fn request_permissions(&self, keys: &BTreeSet<PermissionKey>) -> ProviderResult<ResultStatus>;

    /// `HealthDataResolver.read`
    async fn read(&self, request: ReadRequest) -> ProviderResult<Vec<SamsungHealthData>>;
}

/// Serialized form of an [`InMemorySamsungStore`]
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SamsungFixture {
    /// Whether `connect_service` fails
    #[serde(default)]
    pub connection_fails: bool,
    /// Data types with read permission already acquired
    #[serde(default)]
    pub granted: BTreeSet<String>,
    /// Stored rows
    #[serde(default)]
    pub rows: Vec<SamsungHealthData>,
}

/// Samsung Health store backed by process memory
///
/// Permission requests grant every requested key unless
/// [`InMemorySamsungStore::fail_authorization`] is set, in which case the
/// request completes with [`ResultStatus::Canceled`].
#[derive(Debug, Default)]
pub struct InMemorySamsungStore {
    connection_fails: AtomicBool,
    connected: AtomicBool,
    connection_attempts: AtomicUsize,
    granted: RwLock<BTreeSet<String>>,
    rows: RwLock<Vec<SamsungHealthData>>,
    fail_reads: AtomicBool,
    fail_authorization: AtomicBool,
}

impl InMemorySamsungStore {
    /// Empty store that connects successfully
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a JSON [`SamsungFixture`]
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidFixture`] if the JSON does not parse.
    pub fn from_fixture_json(json: &str) -> ProviderResult<Self> {
        let fixture: SamsungFixture =
            serde_json::from_str(json).map_err(|e| ProviderError::InvalidFixture {
                provider: SAMSUNG.to_owned(),
                details: e.to_string(),
            })?;
        let store = Self::new();
        store.fail_connection(fixture.connection_fails);
        store.grant(fixture.granted);
        *store.rows.write().unwrap_or_else(PoisonError::into_inner) = fixture.rows;
        Ok(store)
    }

    /// Store a row
    pub fn insert(&self, row: SamsungHealthData) {
        self.rows
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(row);
    }

    /// Acquire read permission for data types without a request
    pub fn grant<I, S>(&self, data_types: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.granted
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(data_types.into_iter().map(Into::into));
    }

    /// Make `connect_service` fail
    pub fn fail_connection(&self, fail: bool) {
        self.connection_fails.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent read fail
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent permission request complete unsuccessfully
    pub fn fail_authorization(&self, fail: bool) {
        self.fail_authorization.store(fail, Ordering::SeqCst);
    }

    /// Number of `connect_service` calls
    #[must_use]
    pub fn connection_attempts(&self) -> usize {
        self.connection_attempts.load(Ordering::SeqCst)
    }

    fn is_granted(&self, data_type: &str) -> bool {
        self.granted
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(data_type)
    }

    fn ensure_connected(&self) -> ProviderResult<()> {
        if self.connected.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(ProviderError::NotConnected {
                provider: SAMSUNG.to_owned(),
            })
        }
    }
}

#[async_trait]
impl HealthDataStore for InMemorySamsungStore {
    async fn connect_service(&self) -> ProviderResult<()> {
        self.connection_attempts.fetch_add(1, Ordering::SeqCst);
        if self.connection_fails.load(Ordering::SeqCst) {
            return Err(ProviderError::native(
                SAMSUNG,
                "HealthConnectionErrorResult: PLATFORM_NOT_INSTALLED",
            ));
        }
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn is_permission_acquired(
        &self,
        keys: &BTreeSet<PermissionKey>,
    ) -> ProviderResult<BTreeMap<PermissionKey, bool>> {
        self.ensure_connected()?;
        Ok(keys
            .iter()
            .map(|key| {
                let acquired =
                    key.permission_type == PermissionType::Read && self.is_granted(&key.data_type);
                (key.clone(), acquired)
            })
            .collect())
    }

    async fn request_permissions(&self, keys: &BTreeSet<PermissionKey>) -> ProviderResult<ResultStatus> {
        self.ensure_connected()?;
        if self.fail_authorization.load(Ordering::SeqCst) {
            return Ok(ResultStatus::Canceled);
        }
        self.grant(
            keys.iter()
                .filter(|key| key.permission_type == PermissionType::Read)
                .map(|key| key.data_type.clone()),
        );
        Ok(ResultStatus::Successful)
    }

    async fn read(&self, request: ReadRequest) -> ProviderResult<Vec<SamsungHealthData>> {
        self.ensure_connected()?;
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(ProviderError::native(
                SAMSUNG,
                "HealthResultHolder: STATUS_FAILED",
            ));
        }
        if !self.is_granted(&request.data_type) {
            return Err(ProviderError::native(
                SAMSUNG,
                format!("SecurityException: no read permission for {}", request.data_type),
            ));
        }
        Ok(self
            .rows
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|row| row.data_type == request.data_type)
            .filter(|row| {
                row.start().is_some_and(|start| {
                    let millis = start.timestamp_millis();
                    request.start_ms <= millis && millis < request.end_ms
                })
            })
            .cloned()
            .collect())
    }
}
