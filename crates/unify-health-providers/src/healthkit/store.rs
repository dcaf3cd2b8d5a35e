// ABOUTME: HealthKit store binding and an in-memory implementation
// ABOUTME: Availability, read authorization and predicate-filtered sample and correlation queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::provider_names::HEALTHKIT;
use crate::errors::{ProviderError, ProviderResult};

use super::samples::{
    HkCategorySample, HkCorrelation, HkCorrelationTypeIdentifier, HkObjectType,
    HkQuantitySample, HkQuantityTypeIdentifier, HkSample,
};

/// `HKQuery.predicateForSamples(withStart:end:options:)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplePredicate {
    /// Range start
    pub start: DateTime<Utc>,
    /// Range end
    pub end: DateTime<Utc>,
}

impl SamplePredicate {
    /// Predicate matching samples that start inside `[start, end)`
    #[must_use]
    pub const fn strict_start(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Whether a sample starting at `sample_start` matches
    #[must_use]
    pub fn matches(&self, sample_start: DateTime<Utc>) -> bool {
        self.start <= sample_start && sample_start < self.end
    }
}

/// Narrow view of `HKHealthStore` used by the adapter
#[async_trait]
pub trait HealthStore: Send + Sync {
    /// `HKHealthStore.isHealthDataAvailable()`
    fn is_health_data_available(&self) -> bool;

    /// Present the system authorization dialog and wait for it to close
    ///
    /// Completion does not reveal which read types the user allowed.
    async fn request_authorization(&self, read_types: &BTreeSet<HkObjectType>) -> ProviderResult<()>;

    /// `HKSampleQuery` for one object type
    async fn execute_sample_query(
        &self,
        object_type: HkObjectType,
        predicate: SamplePredicate,
    ) -> ProviderResult<Vec<HkSample>>;

    /// `HKCorrelationQuery` for one correlation type
    async fn execute_correlation_query(
        &self,
        correlation_type: HkCorrelationTypeIdentifier,
        predicate: SamplePredicate,
    ) -> ProviderResult<Vec<HkCorrelation>>;
}

const fn default_available() -> bool {
    true
}

/// Serialized form of an [`InMemoryHealthStore`]
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthKitFixture {
    /// Whether health data is available on the device
    #[serde(default = "default_available")]
    pub available: bool,
    /// Stored quantity samples
    #[serde(default)]
    pub quantity_samples: Vec<HkQuantitySample>,
    /// Stored category samples
    #[serde(default)]
    pub category_samples: Vec<HkCategorySample>,
    /// Stored correlations
    #[serde(default)]
    pub correlations: Vec<HkCorrelation>,
}

/// `HealthKit` store backed by process memory
///
/// Every authorization request is treated as allowed for all requested
/// types; reads of types never authorized return no samples, as `HealthKit`
/// does for denied read access.
#[derive(Debug)]
pub struct InMemoryHealthStore {
    available: AtomicBool,
    quantity: RwLock<Vec<HkQuantitySample>>,
    category: RwLock<Vec<HkCategorySample>>,
    correlations: RwLock<Vec<HkCorrelation>>,
    authorized: RwLock<BTreeSet<HkObjectType>>,
    authorization_requests: AtomicUsize,
    fail_reads: AtomicBool,
    fail_authorization: AtomicBool,
}

impl Default for InMemoryHealthStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryHealthStore {
    /// Empty store with health data available
    #[must_use]
    pub fn new() -> Self {
        Self {
            available: AtomicBool::new(true),
            quantity: RwLock::new(Vec::new()),
            category: RwLock::new(Vec::new()),
            correlations: RwLock::new(Vec::new()),
            authorized: RwLock::new(BTreeSet::new()),
            authorization_requests: AtomicUsize::new(0),
            fail_reads: AtomicBool::new(false),
            fail_authorization: AtomicBool::new(false),
        }
    }

    /// Load a store from a JSON [`HealthKitFixture`]
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidFixture`] if the JSON does not parse.
    pub fn from_fixture_json(json: &str) -> ProviderResult<Self> {
        let fixture: HealthKitFixture =
            serde_json::from_str(json).map_err(|e| ProviderError::InvalidFixture {
                provider: HEALTHKIT.to_owned(),
                details: e.to_string(),
            })?;
        let store = Self::new();
        store.set_available(fixture.available);
        *store.quantity.write().unwrap_or_else(PoisonError::into_inner) = fixture.quantity_samples;
        *store.category.write().unwrap_or_else(PoisonError::into_inner) = fixture.category_samples;
        *store
            .correlations
            .write()
            .unwrap_or_else(PoisonError::into_inner) = fixture.correlations;
        Ok(store)
    }

    /// Toggle device availability
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Store a quantity sample
    pub fn add_quantity_sample(&self, sample: HkQuantitySample) {
        self.quantity
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(sample);
    }

    /// Store a category sample
    pub fn add_category_sample(&self, sample: HkCategorySample) {
        self.category
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(sample);
    }

    /// Store a correlation
    pub fn add_correlation(&self, correlation: HkCorrelation) {
        self.correlations
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(correlation);
    }

    /// Mark object types as readable without going through a request
    pub fn authorize<I: IntoIterator<Item = HkObjectType>>(&self, types: I) {
        self.authorized
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(types);
    }

    /// Object types authorized so far
    #[must_use]
    pub fn authorized_types(&self) -> BTreeSet<HkObjectType> {
        self.authorized
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of authorization dialogs presented
    #[must_use]
    pub fn authorization_request_count(&self) -> usize {
        self.authorization_requests.load(Ordering::SeqCst)
    }

    /// Make every subsequent query fail
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent authorization request fail
    pub fn fail_authorization(&self, fail: bool) {
        self.fail_authorization.store(fail, Ordering::SeqCst);
    }

    fn is_authorized(&self, object_type: HkObjectType) -> bool {
        self.authorized
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&object_type)
    }

    fn check_reads(&self) -> ProviderResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(ProviderError::native(
                HEALTHKIT,
                "Error Domain=com.apple.healthkit Code=6 \"Protected health data is inaccessible\"",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl HealthStore for InMemoryHealthStore {
    fn is_health_data_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    async fn request_authorization(&self, read_types: &BTreeSet<HkObjectType>) -> ProviderResult<()> {
        self.authorization_requests.fetch_add(1, Ordering::SeqCst);
        if self.fail_authorization.load(Ordering::SeqCst) {
            return Err(ProviderError::PermissionRequestFailed {
                provider: HEALTHKIT.to_owned(),
                reason: "Authorization session was interrupted".to_owned(),
            });
        }
        if !self.is_health_data_available() {
            return Err(ProviderError::Unavailable {
                provider: HEALTHKIT.to_owned(),
            });
        }
        self.authorize(read_types.iter().copied());
        Ok(())
    }

    async fn execute_sample_query(
        &self,
        object_type: HkObjectType,
        predicate: SamplePredicate,
    ) -> ProviderResult<Vec<HkSample>> {
        self.check_reads()?;
        if !self.is_authorized(object_type) {
            return Ok(Vec::new());
        }
        let samples: Vec<HkSample> = match object_type {
            HkObjectType::Quantity(quantity_type) => self
                .quantity
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .iter()
                .filter(|s| s.quantity_type == quantity_type)
                .filter(|s| predicate.matches(s.start_date))
                .cloned()
                .map(HkSample::Quantity)
                .collect(),
            HkObjectType::Category(category_type) => self
                .category
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .iter()
                .filter(|s| s.category_type == category_type)
                .filter(|s| predicate.matches(s.start_date))
                .cloned()
                .map(HkSample::Category)
                .collect(),
        };
        Ok(samples)
    }

    async fn execute_correlation_query(
        &self,
        correlation_type: HkCorrelationTypeIdentifier,
        predicate: SamplePredicate,
    ) -> ProviderResult<Vec<HkCorrelation>> {
        self.check_reads()?;
        let members = match correlation_type {
            HkCorrelationTypeIdentifier::BloodPressure => [
                HkQuantityTypeIdentifier::BloodPressureSystolic,
                HkQuantityTypeIdentifier::BloodPressureDiastolic,
            ],
        };
        if !members
            .into_iter()
            .all(|member| self.is_authorized(HkObjectType::Quantity(member)))
        {
            return Ok(Vec::new());
        }
        Ok(self
            .correlations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|c| c.correlation_type == correlation_type)
            .filter(|c| predicate.matches(c.start_date))
            .cloned()
            .collect())
    }
}
