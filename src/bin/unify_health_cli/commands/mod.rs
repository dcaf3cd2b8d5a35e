// ABOUTME: Re-exports command modules for unify-health
// ABOUTME: Provides the availability, permission, read and type listing commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

pub mod permissions;
pub mod read;
pub mod status;
