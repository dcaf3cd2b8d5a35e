// ABOUTME: Main library entry point for the unify-health reader
// ABOUTME: Unified read-only access to Health Connect, HealthKit and Samsung Health data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

#![deny(unsafe_code)]

//! # Unify Health
//!
//! Read-only access to the health data stored by the platform health stores,
//! exposed through one unified record model.
//!
//! ## Architecture
//!
//! - **Models**: [`models::HealthRecord`] and [`models::HealthRecordType`]
//!   shared by every platform
//! - **Providers**: one adapter per platform store behind the
//!   [`providers::HealthDataProvider`] trait, selected with cargo features
//! - **Service**: [`service::HealthService`], the facade the UI layer calls
//! - **Config**: environment-driven [`config::ServiceConfig`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::collections::BTreeSet;
//!
//! use unify_health::config::ServiceConfig;
//! use unify_health::errors::AppResult;
//! use unify_health::fixtures::build_provider;
//! use unify_health::models::HealthRecordType;
//! use unify_health::service::HealthService;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServiceConfig::from_env()?;
//!     let provider = build_provider(config.provider, None)?;
//!     let service = HealthService::with_config(provider, &config);
//!
//!     let types = BTreeSet::from([HealthRecordType::Steps]);
//!     if !service.has_permissions(&types).await {
//!         service.request_authorization(&types).await?;
//!     }
//!     let steps = service.read_recent(HealthRecordType::Steps).await;
//!     println!("{}", HealthService::describe_result(HealthRecordType::Steps, &steps));
//!     Ok(())
//! }
//! ```

pub use unify_health_core::{constants, errors, models};
pub use unify_health_providers as providers;

/// Environment-driven configuration
pub mod config;
/// Adapter construction from JSON fixtures
pub mod fixtures;
/// Structured logging setup
pub mod logging;
/// Health service facade
pub mod service;

pub use service::HealthService;
