// ABOUTME: End-to-end tests for the HealthService facade over in-memory adapters
// ABOUTME: Exercises the permission sheet flow, multi-type reads and result descriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{Duration, Utc};
use common::{at, hc_exercise, hc_heart_rate, hc_steps, init_test_logging, types, whole_day};
use unify_health::config::ServiceConfig;
use unify_health::constants::provider_names;
use unify_health::errors::ErrorCode;
use unify_health::models::{HealthRecord, HealthRecordType};
use unify_health::providers::health_connect::{
    read_permission_for, HealthConnectProvider, InMemoryHealthConnectClient,
};
use unify_health::providers::samsung::mapping::{columns, data_types};
use unify_health::providers::{HealthDataProvider, InMemorySamsungStore, SamsungHealthProvider};
use unify_health::HealthService;

type HcProvider = HealthConnectProvider<InMemoryHealthConnectClient>;

fn health_connect() -> (Arc<HcProvider>, HealthService) {
    init_test_logging();
    let provider = Arc::new(HealthConnectProvider::new(InMemoryHealthConnectClient::new()));
    let dyn_provider: Arc<dyn HealthDataProvider> = provider.clone();
    (provider, HealthService::new(dyn_provider))
}

// ============================================================================
// Permission sheet flow
// ============================================================================

#[tokio::test]
async fn test_permission_sheet_round_trip_with_host_grant() {
    let (provider, service) = health_connect();
    let wanted = types(&[HealthRecordType::Steps, HealthRecordType::HeartRate]);
    let mut visibility = service.subscribe_permission_sheet();

    assert!(service.is_available().await);
    assert!(!service.has_permissions(&wanted).await);
    assert!(!service.is_permission_sheet_visible());

    service.request_authorization(&wanted).await.unwrap();
    assert!(service.is_permission_sheet_visible());
    visibility.changed().await.unwrap();
    assert!(*visibility.borrow_and_update());

    // The host UI launches the OS dialog with these and the user grants them
    let requested = service.permissions_to_request();
    let expected: BTreeSet<String> = wanted
        .iter()
        .copied()
        .filter_map(read_permission_for)
        .collect();
    assert_eq!(requested, expected);
    provider.client().grant(requested);

    service.hide_permission_sheet();
    assert!(!service.is_permission_sheet_visible());
    visibility.changed().await.unwrap();
    assert!(!*visibility.borrow_and_update());

    assert!(service.has_permissions(&wanted).await);
}

#[tokio::test]
async fn test_show_after_hide_raises_sheet_with_nothing_queued() {
    let (_, service) = health_connect();
    service
        .request_authorization(&types(&[HealthRecordType::Steps]))
        .await
        .unwrap();
    service.hide_permission_sheet();

    service.show_permission_sheet();
    assert!(service.is_permission_sheet_visible());
    assert!(service.permissions_to_request().is_empty());
}

#[tokio::test]
async fn test_request_all_authorization_queues_every_mapped_permission() {
    let (_, service) = health_connect();
    service.request_all_authorization().await.unwrap();

    let expected: BTreeSet<String> = HealthRecordType::ALL
        .into_iter()
        .filter_map(read_permission_for)
        .collect();
    assert_eq!(service.permissions_to_request(), expected);
}

#[tokio::test]
async fn test_authorization_failure_maps_to_app_error() {
    init_test_logging();
    let provider: Arc<dyn HealthDataProvider> =
        Arc::new(SamsungHealthProvider::new(InMemorySamsungStore::new()));
    let service = HealthService::new(provider);

    let err = service
        .request_authorization(&types(&[HealthRecordType::Steps]))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
}

// ============================================================================
// Reads
// ============================================================================

#[tokio::test]
async fn test_move_minutes_end_to_end() {
    let (provider, service) = health_connect();
    provider.client().grant(read_permission_for(HealthRecordType::MoveMinutes));
    provider.client().insert(hc_exercise(79, at(7, 0), 5));
    provider.client().insert(hc_exercise(8, at(18, 0), 7));

    let (start, end) = whole_day();
    let records = service
        .read_data(start, end, HealthRecordType::MoveMinutes)
        .await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].summary(), "Total Exercise Minutes: 12");
}

#[tokio::test]
async fn test_read_many_preserves_request_order() {
    let (provider, service) = health_connect();
    provider.client().grant([
        "android.permission.health.READ_STEPS",
        "android.permission.health.READ_HEART_RATE",
    ]);
    provider.client().insert(hc_steps(1500, at(10, 0), 20));
    provider.client().insert(hc_heart_rate(&[60, 62], at(11, 0)));

    let (start, end) = whole_day();
    let results = service
        .read_many(
            &[
                HealthRecordType::HeartRate,
                HealthRecordType::Weight,
                HealthRecordType::Steps,
            ],
            start,
            end,
        )
        .await;

    let order: Vec<HealthRecordType> = results.iter().map(|(t, _)| *t).collect();
    assert_eq!(
        order,
        vec![
            HealthRecordType::HeartRate,
            HealthRecordType::Weight,
            HealthRecordType::Steps
        ]
    );
    assert_eq!(results[0].1.len(), 1);
    assert!(results[1].1.is_empty());
    assert!(matches!(
        results[2].1.as_slice(),
        [HealthRecord::Steps { count: 1500, .. }]
    ));
}

#[tokio::test]
async fn test_read_recent_uses_lookback_window() {
    let (provider, _) = health_connect();
    provider
        .client()
        .grant(read_permission_for(HealthRecordType::Steps));
    let now = Utc::now();
    provider
        .client()
        .insert(hc_steps(300, now - Duration::days(2), 10));
    provider
        .client()
        .insert(hc_steps(400, now - Duration::days(20), 10));

    let dyn_provider: Arc<dyn HealthDataProvider> = provider;
    let service = HealthService::new(dyn_provider);
    assert_eq!(service.lookback(), Duration::days(15));
    assert_eq!(service.read_recent(HealthRecordType::Steps).await.len(), 1);

    let narrow = service.clone().with_lookback_days(1);
    assert!(narrow.read_recent(HealthRecordType::Steps).await.is_empty());
}

#[tokio::test]
async fn test_lookback_is_clamped_to_supported_range() {
    let (provider, service) = health_connect();
    provider
        .client()
        .grant(read_permission_for(HealthRecordType::Steps));
    provider
        .client()
        .insert(hc_steps(250, Utc::now() - Duration::days(100), 10));

    let widest = service.clone().with_lookback_days(u32::MAX);
    assert_eq!(widest.lookback(), Duration::days(365));
    assert_eq!(widest.read_recent(HealthRecordType::Steps).await.len(), 1);

    let zero = service.with_lookback_days(0);
    assert_eq!(zero.lookback(), Duration::days(1));
    assert!(zero.read_recent(HealthRecordType::Steps).await.is_empty());
}

#[tokio::test]
async fn test_read_window_past_date_range_is_empty() {
    let (provider, service) = health_connect();
    provider
        .client()
        .grant(read_permission_for(HealthRecordType::Steps));
    provider
        .client()
        .insert(hc_steps(250, Utc::now() - Duration::days(1), 10));

    assert!(service
        .read_window(Duration::days(1_000_000_000), HealthRecordType::Steps)
        .await
        .is_empty());
    assert_eq!(
        service
            .read_window(Duration::days(2), HealthRecordType::Steps)
            .await
            .len(),
        1
    );
}

#[tokio::test]
async fn test_with_config_applies_lookback() {
    init_test_logging();
    let config = ServiceConfig {
        lookback_days: 30,
        ..ServiceConfig::default()
    };
    let provider: Arc<dyn HealthDataProvider> =
        Arc::new(SamsungHealthProvider::new(InMemorySamsungStore::new()));
    let service = HealthService::with_config(provider, &config);

    assert_eq!(service.lookback(), Duration::days(30));
    assert_eq!(service.provider_name(), provider_names::SAMSUNG);
    assert!(service.capabilities().requires_connect());
}

#[tokio::test]
async fn test_samsung_service_reads_after_connect() {
    init_test_logging();
    let store = InMemorySamsungStore::new();
    store.grant([data_types::STEP_COUNT]);
    store.insert(
        common::samsung_row(data_types::STEP_COUNT, at(9, 0), 10).with(columns::COUNT, 250_i64),
    );
    let provider: Arc<dyn HealthDataProvider> = Arc::new(SamsungHealthProvider::new(store));
    let service = HealthService::new(provider);
    let (start, end) = whole_day();

    assert!(service
        .read_data(start, end, HealthRecordType::Steps)
        .await
        .is_empty());

    assert!(service.is_available().await);
    let records = service.read_data(start, end, HealthRecordType::Steps).await;
    assert!(matches!(
        records.as_slice(),
        [HealthRecord::Steps { count: 250, .. }]
    ));
}

// ============================================================================
// Result descriptions
// ============================================================================

#[test]
fn test_describe_result_messages() {
    assert_eq!(
        HealthService::describe_result(HealthRecordType::Steps, &[]),
        "No STEPS data found for the requested period."
    );

    let record = HealthRecord::Steps {
        count: 10,
        interval: common::interval(at(9, 0), 5),
    };
    assert_eq!(
        HealthService::describe_result(HealthRecordType::Steps, &[record.clone(), record]),
        "Fetched 2 STEPS records."
    );
}
