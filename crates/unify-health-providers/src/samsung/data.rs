// ABOUTME: Samsung Health data rows as returned by the data SDK resolver
// ABOUTME: Field-name keyed values with typed getters and row timestamp resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Common row field names (`HealthConstants.Common` / `SessionMeasurement`)
pub mod fields {
    /// Session start, epoch milliseconds
    pub const START_TIME: &str = "start_time";
    /// Session end, epoch milliseconds
    pub const END_TIME: &str = "end_time";
    /// Row creation, epoch milliseconds
    pub const CREATE_TIME: &str = "create_time";
    /// Last row update, epoch milliseconds
    pub const UPDATE_TIME: &str = "update_time";
}

/// A single field value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SamsungValue {
    /// Integer column
    Long(i64),
    /// Floating point column
    Float(f64),
    /// Text column
    Text(String),
}

impl fmt::Display for SamsungValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for SamsungValue {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<f64> for SamsungValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for SamsungValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// One row of a `HealthDataResolver.ReadResult`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamsungHealthData {
    /// Data type name, e.g. `com.samsung.health.step_count`
    pub data_type: String,
    /// Column values keyed by field name
    #[serde(default)]
    pub fields: BTreeMap<String, SamsungValue>,
}

impl SamsungHealthData {
    /// Empty row of `data_type`
    #[must_use]
    pub fn new(data_type: impl Into<String>) -> Self {
        Self {
            data_type: data_type.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style column setter
    #[must_use]
    pub fn with(mut self, field: &str, value: impl Into<SamsungValue>) -> Self {
        self.fields.insert(field.to_owned(), value.into());
        self
    }

    /// Integer value of `field`; floats are truncated
    #[must_use]
    pub fn get_long(&self, field: &str) -> Option<i64> {
        match self.fields.get(field)? {
            SamsungValue::Long(value) => Some(*value),
            SamsungValue::Float(value) => Some(*value as i64),
            SamsungValue::Text(text) => text.parse().ok(),
        }
    }

    /// Floating point value of `field`
    #[must_use]
    pub fn get_float(&self, field: &str) -> Option<f64> {
        match self.fields.get(field)? {
            SamsungValue::Long(value) => Some(*value as f64),
            SamsungValue::Float(value) => Some(*value),
            SamsungValue::Text(text) => text.parse().ok(),
        }
    }

    /// Text value of `field`; numbers are rendered
    #[must_use]
    pub fn get_string(&self, field: &str) -> Option<String> {
        self.fields.get(field).map(ToString::to_string)
    }

    fn get_instant(&self, field: &str) -> Option<DateTime<Utc>> {
        self.get_long(field).and_then(DateTime::from_timestamp_millis)
    }

    /// Row start: `start_time`, else `create_time`
    #[must_use]
    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.get_instant(fields::START_TIME)
            .or_else(|| self.get_instant(fields::CREATE_TIME))
    }

    /// Row end: `end_time`, else `update_time`, else the row start
    #[must_use]
    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.get_instant(fields::END_TIME)
            .or_else(|| self.get_instant(fields::UPDATE_TIME))
            .or_else(|| self.start())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_getters_coerce_between_numeric_kinds() {
        let row = SamsungHealthData::new("com.samsung.health.weight")
            .with("weight", 72.5)
            .with("count", 1200_i64)
            .with("comment", "morning");
        assert_eq!(row.get_long("weight"), Some(72));
        assert_eq!(row.get_float("count"), Some(1200.0));
        assert_eq!(row.get_string("comment").as_deref(), Some("morning"));
        assert_eq!(row.get_float("missing"), None);
    }

    #[test]
    fn test_timestamps_fall_back_to_create_and_update() {
        let row = SamsungHealthData::new("com.samsung.health.water_intake")
            .with(fields::CREATE_TIME, 1_741_600_000_000_i64)
            .with(fields::UPDATE_TIME, 1_741_600_060_000_i64);
        assert_eq!(row.start(), DateTime::from_timestamp_millis(1_741_600_000_000));
        assert_eq!(row.end(), DateTime::from_timestamp_millis(1_741_600_060_000));
    }

    #[test]
    fn test_end_defaults_to_start() {
        let row = SamsungHealthData::new("com.samsung.health.weight")
            .with(fields::START_TIME, 1_741_600_000_000_i64);
        assert_eq!(row.end(), row.start());
    }

    #[test]
    fn test_untagged_values_deserialize() {
        let row: SamsungHealthData = serde_json::from_str(
            r#"{"data_type":"com.samsung.health.step_count","fields":{"count":42,"distance":1.5,"title":"x"}}"#,
        )
        .unwrap_or_else(|_| SamsungHealthData::new("invalid"));
        assert_eq!(row.fields.get("count"), Some(&SamsungValue::Long(42)));
        assert_eq!(row.fields.get("distance"), Some(&SamsungValue::Float(1.5)));
        assert_eq!(row.get_string("title").as_deref(), Some("x"));
    }
}
