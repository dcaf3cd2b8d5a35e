// ABOUTME: Core types for the unify-health workspace
// ABOUTME: Foundation crate with the unified record model, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

#![deny(unsafe_code)]

//! # Unify Health Core
//!
//! Foundation crate shared by every health store adapter. It changes rarely,
//! so the adapters and the facade compile against a stable model.
//!
//! ## Modules
//!
//! - **models**: `HealthRecordType` and the `HealthRecord` tagged union
//! - **errors**: `ProviderError` for adapters, `AppError` for the service layer
//! - **constants**: unit conversion factors, provider names, defaults

/// Unified error handling for adapters and the service layer
pub mod errors;

/// Unit conversion factors, provider names and configuration defaults
pub mod constants;

/// Unified health record model
pub mod models;
