// ABOUTME: Configuration management module for the health service
// ABOUTME: Re-exports environment-driven service configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors
//! Configuration module
//!
//! Configuration comes from environment variables only. Logging is configured
//! separately in [`crate::logging`].

/// Environment-driven service configuration
pub mod environment;

pub use environment::{ProviderKind, ServiceConfig};
