// ABOUTME: Samsung Health data SDK adapter module
// ABOUTME: Row schema, store binding, mapping tables and the adapter itself
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

/// Resolver rows
pub mod data;
/// Data types, columns and row mapping
pub mod mapping;
/// Adapter implementation
pub mod provider;
/// Store binding and in-memory store
pub mod store;

pub use data::{SamsungHealthData, SamsungValue};
pub use mapping::{data_type_for, permission_key_for, SUPPORTED_TYPES};
pub use provider::SamsungHealthProvider;
pub use store::{
    HealthDataStore, InMemorySamsungStore, PermissionKey, PermissionType, ReadRequest,
    ResultStatus, SamsungFixture,
};
