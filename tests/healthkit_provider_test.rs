// ABOUTME: Integration tests for the HealthKit adapter
// ABOUTME: Covers the authorization dialog, unit conversion, aggregation and correlation reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{at, hk_category, hk_quantity, init_test_logging, types, whole_day};
use unify_health::constants::provider_names;
use unify_health::errors::ProviderError;
use unify_health::models::{HealthRecord, HealthRecordType, RecordTime};
use unify_health::providers::healthkit::{
    HealthKitProvider, HkCategoryTypeIdentifier, HkCorrelation, HkCorrelationTypeIdentifier,
    HkObjectType, HkQuantityTypeIdentifier, HkUnit, InMemoryHealthStore, SUPPORTED_TYPES,
};
use unify_health::providers::HealthDataProvider;
use uuid::Uuid;

fn provider() -> HealthKitProvider<InMemoryHealthStore> {
    init_test_logging();
    HealthKitProvider::new(InMemoryHealthStore::new())
}

async fn authorized(record_types: &[HealthRecordType]) -> HealthKitProvider<InMemoryHealthStore> {
    let provider = provider();
    provider
        .request_authorization(&types(record_types))
        .await
        .unwrap();
    provider
}

// ============================================================================
// Availability and authorization
// ============================================================================

#[tokio::test]
async fn test_connect_reflects_device_availability() {
    let provider = provider();
    assert_eq!(provider.name(), provider_names::HEALTHKIT);
    assert!(provider.connect().await);

    provider.store().set_available(false);
    assert!(!provider.connect().await);
}

#[tokio::test]
async fn test_has_permissions_is_always_true() {
    let provider = provider();
    assert!(
        provider
            .has_permissions(&types(&[HealthRecordType::Steps]))
            .await
    );
    assert!(!provider.capabilities().can_query_permissions());
}

#[tokio::test]
async fn test_request_authorization_presents_dialog_with_member_types() {
    let provider = authorized(&[HealthRecordType::Steps, HealthRecordType::BloodPressure]).await;

    assert_eq!(provider.store().authorization_request_count(), 1);
    let granted = provider.store().authorized_types();
    assert!(granted.contains(&HkObjectType::Quantity(HkQuantityTypeIdentifier::StepCount)));
    assert!(granted.contains(&HkObjectType::Quantity(
        HkQuantityTypeIdentifier::BloodPressureSystolic
    )));
    assert!(granted.contains(&HkObjectType::Quantity(
        HkQuantityTypeIdentifier::BloodPressureDiastolic
    )));
    assert!(!provider.is_permission_sheet_visible());
}

#[tokio::test]
async fn test_request_authorization_for_unsupported_types_skips_dialog() {
    let provider = authorized(&[HealthRecordType::Exercise, HealthRecordType::Nutrition]).await;
    assert_eq!(provider.store().authorization_request_count(), 0);
}

#[tokio::test]
async fn test_request_authorization_failure_propagates() {
    let provider = provider();
    provider.store().fail_authorization(true);

    let err = provider
        .request_authorization(&types(&[HealthRecordType::Steps]))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::PermissionRequestFailed { .. }));
}

#[test]
fn test_unsupported_types_are_not_listed() {
    assert!(!SUPPORTED_TYPES.contains(&HealthRecordType::Exercise));
    assert!(!SUPPORTED_TYPES.contains(&HealthRecordType::Nutrition));
    assert!(!SUPPORTED_TYPES.contains(&HealthRecordType::BodyMassIndex));
    assert!(SUPPORTED_TYPES.contains(&HealthRecordType::MoveMinutes));
}

// ============================================================================
// Quantity reads
// ============================================================================

#[tokio::test]
async fn test_read_steps_strict_start_date() {
    let provider = authorized(&[HealthRecordType::Steps]).await;
    let store = provider.store();
    store.add_quantity_sample(hk_quantity(
        HkQuantityTypeIdentifier::StepCount,
        800.0,
        HkUnit::Count,
        at(10, 0),
        at(10, 30),
    ));
    // Starts before the range, so the strict start predicate excludes it
    store.add_quantity_sample(hk_quantity(
        HkQuantityTypeIdentifier::StepCount,
        300.0,
        HkUnit::Count,
        at(0, 0) - Duration::minutes(10),
        at(0, 10),
    ));

    let (start, end) = whole_day();
    let records = provider.read_data(start, end, HealthRecordType::Steps).await;
    match records.as_slice() {
        [HealthRecord::Steps { count, .. }] => assert_eq!(*count, 800),
        other => panic!("unexpected records {other:?}"),
    }
}

#[tokio::test]
async fn test_read_unauthorized_type_returns_empty() {
    let provider = provider();
    provider.store().add_quantity_sample(hk_quantity(
        HkQuantityTypeIdentifier::StepCount,
        800.0,
        HkUnit::Count,
        at(10, 0),
        at(10, 30),
    ));

    let (start, end) = whole_day();
    assert!(provider
        .read_data(start, end, HealthRecordType::Steps)
        .await
        .is_empty());
}

#[tokio::test]
async fn test_read_converts_units() {
    let provider = authorized(&[HealthRecordType::Weight, HealthRecordType::BodyFatPercentage]).await;
    let store = provider.store();
    store.add_quantity_sample(hk_quantity(
        HkQuantityTypeIdentifier::BodyMass,
        160.0,
        HkUnit::Pound,
        at(7, 0),
        at(7, 0),
    ));
    store.add_quantity_sample(hk_quantity(
        HkQuantityTypeIdentifier::BodyFatPercentage,
        0.215,
        HkUnit::Percent,
        at(7, 1),
        at(7, 1),
    ));

    let (start, end) = whole_day();
    let weights = provider.read_data(start, end, HealthRecordType::Weight).await;
    match weights.as_slice() {
        [HealthRecord::Weight { kilograms, time }] => {
            assert!((kilograms - 72.574_779_2).abs() < 1e-3);
            assert_eq!(*time, at(7, 0));
        }
        other => panic!("unexpected records {other:?}"),
    }

    let fat = provider
        .read_data(start, end, HealthRecordType::BodyFatPercentage)
        .await;
    match fat.as_slice() {
        [HealthRecord::BodyFatPercentage { percentage, .. }] => {
            assert!((percentage - 21.5).abs() < 1e-9);
        }
        other => panic!("unexpected records {other:?}"),
    }
}

#[tokio::test]
async fn test_read_heart_rate_aggregates_samples() {
    let provider = authorized(&[HealthRecordType::HeartRate]).await;
    for (minute, bpm) in [(5, 70.0), (1, 61.0), (3, 66.0)] {
        provider.store().add_quantity_sample(hk_quantity(
            HkQuantityTypeIdentifier::HeartRate,
            bpm,
            HkUnit::CountPerMinute,
            at(9, minute),
            at(9, minute),
        ));
    }

    let (start, end) = whole_day();
    let records = provider
        .read_data(start, end, HealthRecordType::HeartRate)
        .await;
    match records.as_slice() {
        [HealthRecord::HeartRate { samples, timing }] => {
            let bpms: Vec<u32> = samples.iter().map(|s| s.bpm).collect();
            assert_eq!(bpms, vec![61, 66, 70]);
            assert_eq!(*timing, RecordTime::At(at(9, 5)));
        }
        other => panic!("unexpected records {other:?}"),
    }
}

#[tokio::test]
async fn test_read_move_minutes_sums_move_time() {
    let provider = authorized(&[HealthRecordType::MoveMinutes]).await;
    provider.store().add_quantity_sample(hk_quantity(
        HkQuantityTypeIdentifier::AppleMoveTime,
        300.0,
        HkUnit::Second,
        at(8, 0),
        at(8, 5),
    ));
    provider.store().add_quantity_sample(hk_quantity(
        HkQuantityTypeIdentifier::AppleMoveTime,
        7.0,
        HkUnit::Minute,
        at(17, 0),
        at(17, 7),
    ));

    let (start, end) = whole_day();
    let records = provider
        .read_data(start, end, HealthRecordType::MoveMinutes)
        .await;
    match records.as_slice() {
        [HealthRecord::MoveMinutes { minutes, interval }] => {
            assert_eq!(*minutes, 12);
            assert_eq!(interval.start(), start);
        }
        other => panic!("unexpected records {other:?}"),
    }
}

// ============================================================================
// Category and correlation reads
// ============================================================================

#[tokio::test]
async fn test_read_sleep_collapses_stages_into_one_session() {
    let provider = authorized(&[HealthRecordType::Sleep]).await;
    let store = provider.store();
    store.add_category_sample(hk_category(
        HkCategoryTypeIdentifier::SleepAnalysis,
        4,
        at(1, 0),
        at(2, 30),
    ));
    store.add_category_sample(hk_category(
        HkCategoryTypeIdentifier::SleepAnalysis,
        3,
        at(0, 0),
        at(1, 0),
    ));

    let (start, end) = whole_day();
    let records = provider.read_data(start, end, HealthRecordType::Sleep).await;
    match records.as_slice() {
        [HealthRecord::SleepSession {
            duration_minutes,
            stages,
            interval,
        }] => {
            assert_eq!(*duration_minutes, 150);
            assert_eq!(interval.start(), at(0, 0));
            let labels: Vec<&str> = stages.iter().map(|s| s.stage.as_str()).collect();
            assert_eq!(labels, vec!["Core", "Deep"]);
        }
        other => panic!("unexpected records {other:?}"),
    }
}

#[tokio::test]
async fn test_read_blood_pressure_from_correlation() {
    let provider = authorized(&[HealthRecordType::BloodPressure]).await;
    provider.store().add_correlation(HkCorrelation {
        uuid: Uuid::new_v4(),
        correlation_type: HkCorrelationTypeIdentifier::BloodPressure,
        objects: vec![
            hk_quantity(
                HkQuantityTypeIdentifier::BloodPressureSystolic,
                121.0,
                HkUnit::MillimeterOfMercury,
                at(8, 0),
                at(8, 0),
            ),
            hk_quantity(
                HkQuantityTypeIdentifier::BloodPressureDiastolic,
                79.0,
                HkUnit::MillimeterOfMercury,
                at(8, 0),
                at(8, 0),
            ),
        ],
        start_date: at(8, 0),
        end_date: at(8, 0),
        metadata: Default::default(),
    });

    let (start, end) = whole_day();
    let records = provider
        .read_data(start, end, HealthRecordType::BloodPressure)
        .await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].summary(), "Systolic: 121, Diastolic: 79");
}

#[tokio::test]
async fn test_read_failure_returns_empty() {
    let provider = authorized(&[HealthRecordType::Steps]).await;
    provider.store().add_quantity_sample(hk_quantity(
        HkQuantityTypeIdentifier::StepCount,
        800.0,
        HkUnit::Count,
        at(10, 0),
        at(10, 30),
    ));
    provider.store().fail_reads(true);

    let (start, end) = whole_day();
    assert!(provider
        .read_data(start, end, HealthRecordType::Steps)
        .await
        .is_empty());
}

#[tokio::test]
async fn test_read_unsupported_type_returns_empty() {
    let provider = authorized(&[HealthRecordType::Steps]).await;
    let (start, end) = whole_day();
    assert!(provider
        .read_data(start, end, HealthRecordType::Nutrition)
        .await
        .is_empty());
}
