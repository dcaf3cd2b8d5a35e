// ABOUTME: Tests for provider descriptors and capability flags
// ABOUTME: Checks that descriptors agree with the adapters' type mappings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use unify_health::constants::provider_names;
use unify_health::models::HealthRecordType;
use unify_health::providers::health_connect::record_kind_for;
use unify_health::providers::healthkit::classify;
use unify_health::providers::samsung::data_type_for;
use unify_health::providers::{
    descriptor_for, HealthConnectDescriptor, HealthKitDescriptor, ProviderCapabilities,
    ProviderDescriptor, SamsungDescriptor,
};

// ============================================================================
// Descriptor lookup
// ============================================================================

#[test]
fn test_descriptor_for_known_providers() {
    for name in [
        provider_names::HEALTH_CONNECT,
        provider_names::HEALTHKIT,
        provider_names::SAMSUNG,
    ] {
        let descriptor = descriptor_for(name).unwrap();
        assert_eq!(descriptor.name(), name);
        assert!(!descriptor.display_name().is_empty());
    }
    assert!(descriptor_for("strava").is_none());
}

#[test]
fn test_display_names() {
    assert_eq!(HealthConnectDescriptor.display_name(), "Health Connect");
    assert_eq!(HealthKitDescriptor.display_name(), "Apple Health");
    assert_eq!(SamsungDescriptor.display_name(), "Samsung Health");
}

// ============================================================================
// Supported types agree with the adapters
// ============================================================================

#[test]
fn test_health_connect_supports_every_type_but_bmi() {
    let descriptor = HealthConnectDescriptor;
    for record_type in HealthRecordType::ALL {
        assert_eq!(
            descriptor.supports(record_type),
            record_kind_for(record_type).is_some(),
            "{record_type}"
        );
    }
    assert!(!descriptor.supports(HealthRecordType::BodyMassIndex));
    assert_eq!(
        descriptor.supported_types().len(),
        HealthRecordType::ALL.len() - 1
    );
}

#[test]
fn test_healthkit_supported_types_match_classification() {
    let descriptor = HealthKitDescriptor;
    for record_type in HealthRecordType::ALL {
        assert_eq!(
            descriptor.supports(record_type),
            classify(record_type).is_some(),
            "{record_type}"
        );
    }
}

#[test]
fn test_samsung_supported_types_match_data_types() {
    let descriptor = SamsungDescriptor;
    for record_type in HealthRecordType::ALL {
        assert_eq!(
            descriptor.supports(record_type),
            data_type_for(record_type).is_some(),
            "{record_type}"
        );
    }
    assert!(!descriptor.supports(HealthRecordType::Menstruation));
    assert!(descriptor.supports(HealthRecordType::Nutrition));
}

// ============================================================================
// Capabilities
// ============================================================================

#[test]
fn test_capability_presets() {
    let hc = ProviderCapabilities::health_connect();
    assert!(hc.uses_permission_sheet());
    assert!(hc.can_query_permissions());
    assert!(hc.supports_cycle_tracking());
    assert!(hc.supports_nutrition());
    assert!(!hc.requires_connect());

    let hk = ProviderCapabilities::healthkit();
    assert!(!hk.uses_permission_sheet());
    assert!(!hk.can_query_permissions());
    assert!(hk.supports_cycle_tracking());
    assert!(!hk.supports_nutrition());

    let samsung = ProviderCapabilities::samsung();
    assert!(samsung.requires_connect());
    assert!(samsung.can_query_permissions());
    assert!(!samsung.supports_cycle_tracking());
    assert!(samsung.supports_nutrition());
}

#[test]
fn test_descriptor_capabilities_match_presets() {
    assert_eq!(
        HealthConnectDescriptor.capabilities(),
        ProviderCapabilities::health_connect()
    );
    assert_eq!(
        HealthKitDescriptor.capabilities(),
        ProviderCapabilities::healthkit()
    );
    assert_eq!(
        SamsungDescriptor.capabilities(),
        ProviderCapabilities::samsung()
    );
}
