// ABOUTME: Nested sub-records carried by heart rate, sleep and exercise records
// ABOUTME: Heart rate samples, sleep stage segments and exercise segments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Interval;

/// Single heart rate reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateSample {
    /// Beats per minute
    pub bpm: u32,
    /// When the reading was taken
    pub time: DateTime<Utc>,
}

/// Contiguous segment of a sleep session in one stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepStage {
    /// Platform stage label (`Deep`, `Rem`, `Awake in bed`, ...)
    pub stage: String,
    /// Segment length in whole minutes
    pub duration_minutes: u64,
    /// Segment bounds
    pub interval: Interval,
}

impl SleepStage {
    /// Build a stage whose duration is derived from its interval
    #[must_use]
    pub fn new(stage: impl Into<String>, interval: Interval) -> Self {
        Self {
            stage: stage.into(),
            duration_minutes: interval.whole_minutes(),
            interval,
        }
    }
}

/// Segment of an exercise session (a set, a lap, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSegment {
    /// Platform segment label
    pub segment_type: String,
    /// Repetitions performed within the segment
    pub repetitions: u32,
    /// Segment bounds
    pub interval: Interval,
}
