// ABOUTME: Time representation for health records: an instant or a validated interval
// ABOUTME: Interval construction rejects an end that precedes the start
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;

/// Half-open time range `[start, end)` with `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<RawInterval> for Interval {
    type Error = ProviderError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl Interval {
    /// Create an interval
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidInterval`] when `end` precedes `start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ProviderError> {
        if end < start {
            return Err(ProviderError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Inclusive start
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Exclusive end
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Wall-clock length
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Length truncated to whole minutes
    #[must_use]
    pub fn whole_minutes(&self) -> u64 {
        u64::try_from(self.duration().num_minutes()).unwrap_or(0)
    }

    /// Whether the two ranges share any instant
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `instant` falls inside `[start, end)`
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Timing of a record that may be either instantaneous or span an interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordTime {
    /// Point-in-time measurement
    At(DateTime<Utc>),
    /// Measurement covering a range
    Between(Interval),
}

impl RecordTime {
    /// Instant for point-in-time records
    #[must_use]
    pub const fn time(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::At(time) => Some(*time),
            Self::Between(_) => None,
        }
    }

    /// Interval for ranged records
    #[must_use]
    pub const fn interval(&self) -> Option<Interval> {
        match self {
            Self::At(_) => None,
            Self::Between(interval) => Some(*interval),
        }
    }

    /// Instant used for chronological ordering
    #[must_use]
    pub const fn sort_key(&self) -> DateTime<Utc> {
        match self {
            Self::At(time) => *time,
            Self::Between(interval) => interval.start,
        }
    }
}

impl From<DateTime<Utc>> for RecordTime {
    fn from(time: DateTime<Utc>) -> Self {
        Self::At(time)
    }
}

impl From<Interval> for RecordTime {
    fn from(interval: Interval) -> Self {
        Self::Between(interval)
    }
}
