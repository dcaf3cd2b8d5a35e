// ABOUTME: Availability and record type listing commands for unify-health
// ABOUTME: Reports store availability and per-type support from the provider descriptor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

use unify_health::models::HealthRecordType;
use unify_health::providers::descriptor_for;
use unify_health::HealthService;

/// Print whether the provider's store is available
pub async fn available(service: &HealthService) {
    let available = service.is_available().await;
    println!(
        "{}: {}",
        service.provider_name(),
        if available { "available" } else { "unavailable" }
    );
}

/// Print every record type with its support on the provider
pub fn types(service: &HealthService) {
    let Some(descriptor) = descriptor_for(service.provider_name()) else {
        println!("No descriptor for provider {}", service.provider_name());
        return;
    };
    println!("{} ({})", descriptor.display_name(), descriptor.name());
    println!("{}", "=".repeat(48));
    for record_type in HealthRecordType::ALL {
        let marker = if descriptor.supports(record_type) {
            "yes"
        } else {
            "no"
        };
        println!("  {:<26} {marker}", record_type.as_str());
    }
    println!(
        "\n{} of {} types supported",
        descriptor.supported_types().len(),
        HealthRecordType::ALL.len()
    );
}
