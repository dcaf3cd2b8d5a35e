// ABOUTME: Android Health Connect adapter module
// ABOUTME: Native record schema, client binding, mapping tables and the adapter itself
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

/// Client binding and in-memory client
pub mod client;
/// Permission prefix and code tables
pub mod constants;
/// Native-to-unified mapping
pub mod mapping;
/// Adapter implementation
pub mod provider;
/// Native record schema
pub mod records;

pub use client::{
    HealthConnectClient, HealthConnectFixture, InMemoryHealthConnectClient, RecordKind, SdkStatus,
};
pub use mapping::{read_permission_for, record_kind_for, SUPPORTED_TYPES};
pub use provider::HealthConnectProvider;
pub use records::HealthConnectRecord;
