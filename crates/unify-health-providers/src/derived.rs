// ABOUTME: Metrics computed from other native records rather than read directly
// ABOUTME: Move minutes from exercise sessions and query range construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::models::{HealthRecord, Interval};

/// Build the `[start, end)` range for a read
///
/// An inverted range is logged and yields `None`, which callers turn into an
/// empty read.
pub fn query_range(provider: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Interval> {
    match Interval::new(start, end) {
        Ok(range) => Some(range),
        Err(e) => {
            warn!(provider, error = %e, "Rejecting read with inverted range");
            None
        }
    }
}

/// Sum whole-minute session durations overlapping `range` into one record
///
/// Each session is truncated to whole minutes before summing. A zero total
/// yields `None` so "no exercise" stays distinguishable from "zero minutes".
pub fn move_minutes<I>(sessions: I, range: Interval) -> Option<HealthRecord>
where
    I: IntoIterator<Item = Interval>,
{
    let minutes: u64 = sessions
        .into_iter()
        .filter(|session| session.overlaps(&range))
        .map(|session| session.whole_minutes())
        .sum();

    (minutes > 0).then_some(HealthRecord::MoveMinutes {
        minutes,
        interval: range,
    })
}
