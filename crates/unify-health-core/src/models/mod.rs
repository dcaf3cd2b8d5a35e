// ABOUTME: Unified health data model: record types, records, timing and nested samples
// ABOUTME: Platform-neutral representation produced by every adapter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

//! # Unified Record Model
//!
//! - [`HealthRecordType`]: the closed set of metrics a caller can ask for
//! - [`HealthRecord`]: one tagged variant per metric
//! - [`Interval`] / [`RecordTime`]: validated timing
//! - [`HeartRateSample`], [`SleepStage`], [`ExerciseSegment`]: nested sub-records

mod record;
mod record_type;
mod samples;
mod timing;

pub use record::{sort_chronologically, HealthRecord};
pub use record_type::{HealthRecordType, ParseRecordTypeError};
pub use samples::{ExerciseSegment, HeartRateSample, SleepStage};
pub use timing::{Interval, RecordTime};
