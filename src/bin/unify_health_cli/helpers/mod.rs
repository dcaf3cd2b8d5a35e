// ABOUTME: Re-exports helper modules for unify-health
// ABOUTME: Provides record and permission display formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

pub mod display;
