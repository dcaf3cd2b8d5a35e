// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, fixed timestamps and native record builders for each platform
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `unify_health`

use std::collections::BTreeSet;
use std::env;
use std::sync::Once;

use chrono::{DateTime, Duration, TimeZone, Utc};
use tracing::Level;
use unify_health::models::{HealthRecordType, Interval};
use unify_health::providers::health_connect::records::{
    ExerciseSessionRecord, HeartRateRecord, HeartRateRecordSample, StepsRecord,
};
use unify_health::providers::health_connect::HealthConnectRecord;
use unify_health::providers::healthkit::{
    HkCategorySample, HkCategoryTypeIdentifier, HkQuantity, HkQuantitySample,
    HkQuantityTypeIdentifier, HkUnit,
};
use unify_health::providers::samsung::data::fields;
use unify_health::providers::samsung::SamsungHealthData;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

// ============================================================================
// Time helpers
// ============================================================================

/// 2025-03-10 at `hour:minute` UTC
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, hour, minute, 0).unwrap()
}

/// The whole of 2025-03-10
pub fn whole_day() -> (DateTime<Utc>, DateTime<Utc>) {
    (at(0, 0), at(0, 0) + Duration::days(1))
}

pub fn interval(start: DateTime<Utc>, minutes: i64) -> Interval {
    Interval::new(start, start + Duration::minutes(minutes)).unwrap()
}

pub fn types(types: &[HealthRecordType]) -> BTreeSet<HealthRecordType> {
    types.iter().copied().collect()
}

// ============================================================================
// Health Connect builders
// ============================================================================

pub fn hc_steps(count: i64, start: DateTime<Utc>, minutes: i64) -> HealthConnectRecord {
    HealthConnectRecord::Steps(StepsRecord {
        count,
        start_time: start,
        end_time: start + Duration::minutes(minutes),
    })
}

pub fn hc_exercise(exercise_type: i32, start: DateTime<Utc>, minutes: i64) -> HealthConnectRecord {
    HealthConnectRecord::ExerciseSession(ExerciseSessionRecord {
        exercise_type,
        title: None,
        notes: None,
        segments: Vec::new(),
        start_time: start,
        end_time: start + Duration::minutes(minutes),
    })
}

pub fn hc_heart_rate(bpms: &[i64], start: DateTime<Utc>) -> HealthConnectRecord {
    let samples: Vec<HeartRateRecordSample> = bpms
        .iter()
        .zip(0_i64..)
        .map(|(&beats_per_minute, offset)| HeartRateRecordSample {
            beats_per_minute,
            time: start + Duration::minutes(offset),
        })
        .collect();
    let minutes = i64::try_from(bpms.len()).unwrap();
    HealthConnectRecord::HeartRate(HeartRateRecord {
        samples,
        start_time: start,
        end_time: start + Duration::minutes(minutes),
    })
}

// ============================================================================
// HealthKit builders
// ============================================================================

pub fn hk_quantity(
    quantity_type: HkQuantityTypeIdentifier,
    value: f64,
    unit: HkUnit,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> HkQuantitySample {
    HkQuantitySample {
        uuid: Uuid::new_v4(),
        quantity_type,
        quantity: HkQuantity::new(value, unit),
        start_date: start,
        end_date: end,
        metadata: Default::default(),
    }
}

pub fn hk_category(
    category_type: HkCategoryTypeIdentifier,
    value: i32,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> HkCategorySample {
    HkCategorySample {
        uuid: Uuid::new_v4(),
        category_type,
        value,
        start_date: start,
        end_date: end,
        metadata: Default::default(),
    }
}

// ============================================================================
// Samsung builders
// ============================================================================

pub fn samsung_row(data_type: &str, start: DateTime<Utc>, minutes: i64) -> SamsungHealthData {
    SamsungHealthData::new(data_type)
        .with(fields::START_TIME, start.timestamp_millis())
        .with(
            fields::END_TIME,
            (start + Duration::minutes(minutes)).timestamp_millis(),
        )
}
