// ABOUTME: Apple HealthKit adapter module
// ABOUTME: Sample schema, store binding, mapping tables and the adapter itself
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

/// Type classification, code tables and aggregation
pub mod mapping;
/// Adapter implementation
pub mod provider;
/// Sample, unit and identifier schema
pub mod samples;
/// Store binding and in-memory store
pub mod store;

pub use mapping::{classify, read_object_types, HkTypeMapping, SUPPORTED_TYPES};
pub use provider::HealthKitProvider;
pub use samples::{
    HkCategorySample, HkCategoryTypeIdentifier, HkCorrelation, HkCorrelationTypeIdentifier,
    HkObjectType, HkQuantity, HkQuantitySample, HkQuantityTypeIdentifier, HkSample, HkUnit,
};
pub use store::{HealthKitFixture, HealthStore, InMemoryHealthStore, SamplePredicate};
