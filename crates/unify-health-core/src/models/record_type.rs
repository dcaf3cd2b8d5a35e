// ABOUTME: Closed enumeration of every health metric the adapters can read
// ABOUTME: Wire names, display labels and case-insensitive parsing for config and CLI use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Health metric kinds shared by every platform adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthRecordType {
    /// Step count over an interval
    Steps,
    /// Distance travelled over an interval
    Distance,
    /// Floors climbed over an interval
    FloorsClimbed,
    /// Active energy burned over an interval
    ActiveEnergyBurned,
    /// Basal metabolic rate
    BasalEnergyBurned,
    /// Minutes of movement, derived from exercise sessions
    MoveMinutes,
    /// Exercise sessions
    Exercise,
    /// Body weight
    Weight,
    /// Body height
    Height,
    /// Body fat percentage
    BodyFatPercentage,
    /// Lean body mass
    LeanBodyMass,
    /// Body mass index (never stored by any platform)
    BodyMassIndex,
    /// Body temperature
    BodyTemperature,
    /// Heart rate samples
    HeartRate,
    /// Heart rate variability
    HeartRateVariability,
    /// Systolic and diastolic blood pressure
    BloodPressure,
    /// Blood glucose
    BloodGlucose,
    /// Blood oxygen saturation
    OxygenSaturation,
    /// Respiratory rate
    RespiratoryRate,
    /// Maximal oxygen uptake
    Vo2Max,
    /// Sleep sessions
    Sleep,
    /// Water intake
    Water,
    /// Nutrition intake
    Nutrition,
    /// Menstruation flow
    Menstruation,
    /// Ovulation test results
    OvulationTest,
    /// Cervical mucus observations
    CervicalMucus,
    /// Sexual activity
    SexualActivity,
    /// Intermenstrual bleeding
    IntermenstrualBleeding,
}

impl HealthRecordType {
    /// Every record type in declaration order
    pub const ALL: [Self; 28] = [
        Self::Steps,
        Self::Distance,
        Self::FloorsClimbed,
        Self::ActiveEnergyBurned,
        Self::BasalEnergyBurned,
        Self::MoveMinutes,
        Self::Exercise,
        Self::Weight,
        Self::Height,
        Self::BodyFatPercentage,
        Self::LeanBodyMass,
        Self::BodyMassIndex,
        Self::BodyTemperature,
        Self::HeartRate,
        Self::HeartRateVariability,
        Self::BloodPressure,
        Self::BloodGlucose,
        Self::OxygenSaturation,
        Self::RespiratoryRate,
        Self::Vo2Max,
        Self::Sleep,
        Self::Water,
        Self::Nutrition,
        Self::Menstruation,
        Self::OvulationTest,
        Self::CervicalMucus,
        Self::SexualActivity,
        Self::IntermenstrualBleeding,
    ];

    /// Wire name, e.g. `FLOORS_CLIMBED`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Steps => "STEPS",
            Self::Distance => "DISTANCE",
            Self::FloorsClimbed => "FLOORS_CLIMBED",
            Self::ActiveEnergyBurned => "ACTIVE_ENERGY_BURNED",
            Self::BasalEnergyBurned => "BASAL_ENERGY_BURNED",
            Self::MoveMinutes => "MOVE_MINUTES",
            Self::Exercise => "EXERCISE",
            Self::Weight => "WEIGHT",
            Self::Height => "HEIGHT",
            Self::BodyFatPercentage => "BODY_FAT_PERCENTAGE",
            Self::LeanBodyMass => "LEAN_BODY_MASS",
            Self::BodyMassIndex => "BODY_MASS_INDEX",
            Self::BodyTemperature => "BODY_TEMPERATURE",
            Self::HeartRate => "HEART_RATE",
            Self::HeartRateVariability => "HEART_RATE_VARIABILITY",
            Self::BloodPressure => "BLOOD_PRESSURE",
            Self::BloodGlucose => "BLOOD_GLUCOSE",
            Self::OxygenSaturation => "OXYGEN_SATURATION",
            Self::RespiratoryRate => "RESPIRATORY_RATE",
            Self::Vo2Max => "VO2_MAX",
            Self::Sleep => "SLEEP",
            Self::Water => "WATER",
            Self::Nutrition => "NUTRITION",
            Self::Menstruation => "MENSTRUATION",
            Self::OvulationTest => "OVULATION_TEST",
            Self::CervicalMucus => "CERVICAL_MUCUS",
            Self::SexualActivity => "SEXUAL_ACTIVITY",
            Self::IntermenstrualBleeding => "INTERMENSTRUAL_BLEEDING",
        }
    }

    /// Human-readable label, e.g. `Floors climbed`
    #[must_use]
    pub fn display_name(self) -> String {
        let lower = self.as_str().replace('_', " ").to_lowercase();
        let mut chars = lower.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }

    /// Whether reads of this type are computed rather than fetched from a store
    #[must_use]
    pub const fn is_derived(self) -> bool {
        matches!(self, Self::MoveMinutes | Self::BodyMassIndex)
    }
}

impl fmt::Display for HealthRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known record type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown health record type: {0}")]
pub struct ParseRecordTypeError(pub String);

impl FromStr for HealthRecordType {
    type Err = ParseRecordTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(['-', ' '], "_").to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ParseRecordTypeError(s.to_owned()))
    }
}
