// ABOUTME: Apple HealthKit adapter implementing the HealthDataProvider contract
// ABOUTME: Direct authorization dialog, strict-start sample queries and record aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use crate::constants::provider_names::HEALTHKIT;
use crate::core::HealthDataProvider;
use crate::derived::query_range;
use crate::errors::ProviderResult;
use crate::models::{sort_chronologically, HealthRecord, HealthRecordType, Interval};
use crate::permission_sheet::PermissionSheet;
use crate::spi::ProviderCapabilities;

use super::mapping::{
    aggregate_heart_rate, aggregate_sleep, category_to_record, classify, correlation_to_record,
    quantity_to_record, read_object_types, sum_move_minutes, truncate_to_seconds, HkTypeMapping,
};
use super::samples::{HkCategorySample, HkObjectType, HkQuantitySample, HkSample};
use super::store::{HealthStore, SamplePredicate};

/// Apple `HealthKit` adapter
///
/// `HealthKit` never reveals whether read access was granted, so
/// [`HealthDataProvider::has_permissions`] always reports `true` and denied
/// types simply read back empty.
pub struct HealthKitProvider<S> {
    store: S,
    sheet: PermissionSheet,
}

impl<S: HealthStore> HealthKitProvider<S> {
    /// Wrap a health store
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            sheet: PermissionSheet::new(),
        }
    }

    /// Underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    async fn query_samples(
        &self,
        object_type: HkObjectType,
        predicate: SamplePredicate,
    ) -> Vec<HkSample> {
        match self.store.execute_sample_query(object_type, predicate).await {
            Ok(samples) => samples,
            Err(e) => {
                warn!(error = %e, ?object_type, "HealthKit sample query failed, returning no records");
                Vec::new()
            }
        }
    }

    async fn read_quantity(
        &self,
        record_type: HealthRecordType,
        object_type: HkObjectType,
        predicate: SamplePredicate,
        range: Interval,
    ) -> Vec<HealthRecord> {
        let samples: Vec<HkQuantitySample> = self
            .query_samples(object_type, predicate)
            .await
            .into_iter()
            .filter_map(|sample| match sample {
                HkSample::Quantity(quantity) => Some(quantity),
                HkSample::Category(_) => None,
            })
            .collect();

        match record_type {
            HealthRecordType::HeartRate => aggregate_heart_rate(&samples).into_iter().collect(),
            HealthRecordType::MoveMinutes => sum_move_minutes(&samples, range).into_iter().collect(),
            _ => samples
                .iter()
                .filter_map(|sample| quantity_to_record(record_type, sample))
                .collect(),
        }
    }

    async fn read_category(
        &self,
        record_type: HealthRecordType,
        object_type: HkObjectType,
        predicate: SamplePredicate,
    ) -> Vec<HealthRecord> {
        let samples: Vec<HkCategorySample> = self
            .query_samples(object_type, predicate)
            .await
            .into_iter()
            .filter_map(|sample| match sample {
                HkSample::Category(category) => Some(category),
                HkSample::Quantity(_) => None,
            })
            .collect();

        if record_type == HealthRecordType::Sleep {
            return aggregate_sleep(&samples).into_iter().collect();
        }
        samples
            .iter()
            .filter_map(|sample| category_to_record(record_type, sample))
            .collect()
    }
}

#[async_trait]
impl<S: HealthStore> HealthDataProvider for HealthKitProvider<S> {
    fn name(&self) -> &'static str {
        HEALTHKIT
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities::healthkit()
    }

    fn permission_sheet(&self) -> &PermissionSheet {
        &self.sheet
    }

    async fn connect(&self) -> bool {
        let available = self.store.is_health_data_available();
        debug!(provider = HEALTHKIT, available, "Checked health data availability");
        available
    }

    async fn has_permissions(&self, _types: &BTreeSet<HealthRecordType>) -> bool {
        true
    }

    #[instrument(skip(self, types), fields(provider = HEALTHKIT, requested = types.len()))]
    async fn request_authorization(&self, types: &BTreeSet<HealthRecordType>) -> ProviderResult<()> {
        let object_types: BTreeSet<HkObjectType> = types
            .iter()
            .copied()
            .flat_map(read_object_types)
            .collect();
        if object_types.is_empty() {
            debug!("No HealthKit object types to authorize");
            return Ok(());
        }
        info!(
            object_types = object_types.len(),
            "Presenting HealthKit authorization dialog"
        );
        self.store.request_authorization(&object_types).await
    }

    #[instrument(skip(self), fields(provider = HEALTHKIT, record_type = %record_type))]
    async fn read_data(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        record_type: HealthRecordType,
    ) -> Vec<HealthRecord> {
        let Some(range) = query_range(
            HEALTHKIT,
            truncate_to_seconds(start),
            truncate_to_seconds(end),
        ) else {
            return Vec::new();
        };
        let Some(mapping) = classify(record_type) else {
            debug!("No HealthKit mapping for this type");
            return Vec::new();
        };
        let predicate = SamplePredicate::strict_start(range.start(), range.end());

        let mut records = match mapping {
            HkTypeMapping::Quantity(identifier, _) => {
                self.read_quantity(record_type, HkObjectType::Quantity(identifier), predicate, range)
                    .await
            }
            HkTypeMapping::Category(identifier) => {
                self.read_category(record_type, HkObjectType::Category(identifier), predicate)
                    .await
            }
            HkTypeMapping::Correlation(identifier) => {
                match self.store.execute_correlation_query(identifier, predicate).await {
                    Ok(correlations) => correlations
                        .iter()
                        .filter_map(correlation_to_record)
                        .collect(),
                    Err(e) => {
                        warn!(error = %e, "HealthKit correlation query failed, returning no records");
                        Vec::new()
                    }
                }
            }
        };

        sort_chronologically(&mut records);
        debug!(count = records.len(), "Read HealthKit records");
        records
    }
}
