// ABOUTME: Unified health record model shared by every platform adapter
// ABOUTME: One tagged variant per metric with unit-bearing fields and explicit timing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ExerciseSegment, HealthRecordType, HeartRateSample, Interval, RecordTime, SleepStage};

/// A single health measurement in platform-neutral form
///
/// Units are fixed by the field name and converted once by the adapter that
/// produced the record. Interval-based variants carry an [`Interval`];
/// point-in-time variants carry a `time`; the two variants that may be either
/// carry a [`RecordTime`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HealthRecord {
    /// Steps taken over an interval
    Steps {
        /// Step count
        count: u64,
        /// Measurement window
        interval: Interval,
    },
    /// Distance covered over an interval
    Distance {
        /// Distance in meters
        meters: f64,
        /// Measurement window
        interval: Interval,
    },
    /// Floors climbed over an interval
    FloorsClimbed {
        /// Number of floors
        floors: f64,
        /// Measurement window
        interval: Interval,
    },
    /// Active energy burned over an interval
    ActiveEnergyBurned {
        /// Energy in kilocalories
        kilocalories: f64,
        /// Measurement window
        interval: Interval,
    },
    /// Total exercise minutes across the queried range
    MoveMinutes {
        /// Whole minutes
        minutes: u64,
        /// Queried range
        interval: Interval,
    },
    /// A recorded workout
    ExerciseSession {
        /// Activity name
        name: String,
        /// Length in whole minutes
        duration_minutes: u64,
        /// Free-form notes entered by the user
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
        /// Sets, laps or other segments
        #[serde(default)]
        segments: Vec<ExerciseSegment>,
        /// Session bounds
        interval: Interval,
    },
    /// Body weight
    Weight {
        /// Mass in kilograms
        kilograms: f64,
        /// Measurement time
        time: DateTime<Utc>,
    },
    /// Body height
    Height {
        /// Height in meters
        meters: f64,
        /// Measurement time
        time: DateTime<Utc>,
    },
    /// Body fat percentage
    BodyFatPercentage {
        /// Percentage in 0-100
        percentage: f64,
        /// Measurement time
        time: DateTime<Utc>,
    },
    /// Lean body mass
    LeanBodyMass {
        /// Mass in kilograms
        kilograms: f64,
        /// Measurement time
        time: DateTime<Utc>,
    },
    /// Body mass index
    BodyMassIndex {
        /// BMI value in kg/m²
        value: f64,
        /// Measurement time
        time: DateTime<Utc>,
    },
    /// Body temperature
    BodyTemperature {
        /// Degrees Celsius
        celsius: f64,
        /// Measurement time
        time: DateTime<Utc>,
    },
    /// Basal metabolic rate
    BasalMetabolicRate {
        /// Kilocalories per day
        kcal_per_day: f64,
        /// Measurement time
        time: DateTime<Utc>,
    },
    /// Heart rate readings
    HeartRate {
        /// Individual readings
        samples: Vec<HeartRateSample>,
        /// Instant or series window
        timing: RecordTime,
    },
    /// Heart rate variability (RMSSD or SDNN depending on platform)
    HeartRateVariability {
        /// Milliseconds
        milliseconds: f64,
        /// Measurement time
        time: DateTime<Utc>,
    },
    /// Blood pressure reading
    BloodPressure {
        /// Systolic pressure in mmHg
        systolic_mmhg: f64,
        /// Diastolic pressure in mmHg
        diastolic_mmhg: f64,
        /// Body position label
        body_position: String,
        /// Measurement time
        time: DateTime<Utc>,
    },
    /// Blood glucose reading
    BloodGlucose {
        /// Concentration in mg/dL
        mg_per_dl: f64,
        /// Relation to meal label
        relation_to_meal: String,
        /// Measurement time
        time: DateTime<Utc>,
    },
    /// Blood oxygen saturation
    OxygenSaturation {
        /// Percentage in 0-100
        percentage: f64,
        /// Measurement time
        time: DateTime<Utc>,
    },
    /// Respiratory rate
    RespiratoryRate {
        /// Breaths per minute
        breaths_per_minute: f64,
        /// Measurement time
        time: DateTime<Utc>,
    },
    /// Maximal oxygen uptake
    Vo2Max {
        /// Milliliters per kilogram per minute
        ml_per_kg_per_min: f64,
        /// Measurement time
        time: DateTime<Utc>,
    },
    /// A sleep session and its stages
    SleepSession {
        /// Length in whole minutes
        duration_minutes: u64,
        /// Stage segments
        #[serde(default)]
        stages: Vec<SleepStage>,
        /// Session bounds
        interval: Interval,
    },
    /// Water intake
    Water {
        /// Volume in liters
        liters: f64,
        /// Intake window
        interval: Interval,
    },
    /// Nutrition intake
    Nutrition {
        /// Meal label
        meal_type: String,
        /// Energy in kilocalories
        #[serde(default, skip_serializing_if = "Option::is_none")]
        kilocalories: Option<f64>,
        /// Protein in grams
        #[serde(default, skip_serializing_if = "Option::is_none")]
        protein_grams: Option<f64>,
        /// Fat in grams
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fat_grams: Option<f64>,
        /// Carbohydrates in grams
        #[serde(default, skip_serializing_if = "Option::is_none")]
        carbs_grams: Option<f64>,
        /// Intake window
        interval: Interval,
    },
    /// Menstrual flow
    Menstruation {
        /// Flow label
        flow: String,
        /// Instant or period window
        timing: RecordTime,
    },
    /// Ovulation test result
    OvulationTest {
        /// Result label
        result: String,
        /// Test time
        time: DateTime<Utc>,
    },
    /// Cervical mucus observation
    CervicalMucus {
        /// Appearance label
        quality: String,
        /// Sensation label
        sensation: String,
        /// Observation time
        time: DateTime<Utc>,
    },
    /// Sexual activity
    SexualActivity {
        /// Protection label
        protection_used: String,
        /// Activity time
        time: DateTime<Utc>,
    },
    /// Intermenstrual bleeding
    IntermenstrualBleeding {
        /// Observation time
        time: DateTime<Utc>,
    },
}

impl HealthRecord {
    /// Record type this variant belongs to
    #[must_use]
    pub const fn record_type(&self) -> HealthRecordType {
        match self {
            Self::Steps { .. } => HealthRecordType::Steps,
            Self::Distance { .. } => HealthRecordType::Distance,
            Self::FloorsClimbed { .. } => HealthRecordType::FloorsClimbed,
            Self::ActiveEnergyBurned { .. } => HealthRecordType::ActiveEnergyBurned,
            Self::MoveMinutes { .. } => HealthRecordType::MoveMinutes,
            Self::ExerciseSession { .. } => HealthRecordType::Exercise,
            Self::Weight { .. } => HealthRecordType::Weight,
            Self::Height { .. } => HealthRecordType::Height,
            Self::BodyFatPercentage { .. } => HealthRecordType::BodyFatPercentage,
            Self::LeanBodyMass { .. } => HealthRecordType::LeanBodyMass,
            Self::BodyMassIndex { .. } => HealthRecordType::BodyMassIndex,
            Self::BodyTemperature { .. } => HealthRecordType::BodyTemperature,
            Self::BasalMetabolicRate { .. } => HealthRecordType::BasalEnergyBurned,
            Self::HeartRate { .. } => HealthRecordType::HeartRate,
            Self::HeartRateVariability { .. } => HealthRecordType::HeartRateVariability,
            Self::BloodPressure { .. } => HealthRecordType::BloodPressure,
            Self::BloodGlucose { .. } => HealthRecordType::BloodGlucose,
            Self::OxygenSaturation { .. } => HealthRecordType::OxygenSaturation,
            Self::RespiratoryRate { .. } => HealthRecordType::RespiratoryRate,
            Self::Vo2Max { .. } => HealthRecordType::Vo2Max,
            Self::SleepSession { .. } => HealthRecordType::Sleep,
            Self::Water { .. } => HealthRecordType::Water,
            Self::Nutrition { .. } => HealthRecordType::Nutrition,
            Self::Menstruation { .. } => HealthRecordType::Menstruation,
            Self::OvulationTest { .. } => HealthRecordType::OvulationTest,
            Self::CervicalMucus { .. } => HealthRecordType::CervicalMucus,
            Self::SexualActivity { .. } => HealthRecordType::SexualActivity,
            Self::IntermenstrualBleeding { .. } => HealthRecordType::IntermenstrualBleeding,
        }
    }

    /// Timing of this record
    #[must_use]
    pub const fn timing(&self) -> RecordTime {
        match self {
            Self::Steps { interval, .. }
            | Self::Distance { interval, .. }
            | Self::FloorsClimbed { interval, .. }
            | Self::ActiveEnergyBurned { interval, .. }
            | Self::MoveMinutes { interval, .. }
            | Self::ExerciseSession { interval, .. }
            | Self::SleepSession { interval, .. }
            | Self::Water { interval, .. }
            | Self::Nutrition { interval, .. } => RecordTime::Between(*interval),
            Self::HeartRate { timing, .. } | Self::Menstruation { timing, .. } => *timing,
            Self::Weight { time, .. }
            | Self::Height { time, .. }
            | Self::BodyFatPercentage { time, .. }
            | Self::LeanBodyMass { time, .. }
            | Self::BodyMassIndex { time, .. }
            | Self::BodyTemperature { time, .. }
            | Self::BasalMetabolicRate { time, .. }
            | Self::HeartRateVariability { time, .. }
            | Self::BloodPressure { time, .. }
            | Self::BloodGlucose { time, .. }
            | Self::OxygenSaturation { time, .. }
            | Self::RespiratoryRate { time, .. }
            | Self::Vo2Max { time, .. }
            | Self::OvulationTest { time, .. }
            | Self::CervicalMucus { time, .. }
            | Self::SexualActivity { time, .. }
            | Self::IntermenstrualBleeding { time } => RecordTime::At(*time),
        }
    }

    /// Instant of a point-in-time record
    #[must_use]
    pub const fn time(&self) -> Option<DateTime<Utc>> {
        self.timing().time()
    }

    /// Start of an interval record
    #[must_use]
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.timing().interval().map(|interval| interval.start())
    }

    /// End of an interval record
    #[must_use]
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.timing().interval().map(|interval| interval.end())
    }

    /// Instant used to order records chronologically
    #[must_use]
    pub const fn sort_key(&self) -> DateTime<Utc> {
        self.timing().sort_key()
    }

    /// One-line summary of the measurement, as shown on a record card
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Steps { count, .. } => format!("Count: {count}"),
            Self::Distance { meters, .. } => format!("Meters: {meters}"),
            Self::FloorsClimbed { floors, .. } => format!("Floors: {floors}"),
            Self::ActiveEnergyBurned { kilocalories, .. } => {
                format!("Active Calories: {kilocalories}")
            }
            Self::MoveMinutes { minutes, .. } => format!("Total Exercise Minutes: {minutes}"),
            Self::ExerciseSession {
                name,
                duration_minutes,
                ..
            } => format!("{name}: {duration_minutes} min"),
            Self::Weight { kilograms, .. } | Self::LeanBodyMass { kilograms, .. } => {
                format!("Kilograms: {kilograms}")
            }
            Self::Height { meters, .. } => format!("Meters: {meters}"),
            Self::BodyFatPercentage { percentage, .. } => format!("Percentage: {percentage}%"),
            Self::BodyMassIndex { value, .. } => format!("BMI: {value}"),
            Self::BodyTemperature { celsius, .. } => format!("Celsius: {celsius}"),
            Self::BasalMetabolicRate { kcal_per_day, .. } => {
                format!("Rate: {kcal_per_day} kcal/day")
            }
            Self::HeartRate { samples, .. } => match samples.as_slice() {
                [] => "BPM: N/A".to_owned(),
                [only] => format!("BPM: {}", only.bpm),
                [.., last] => format!("BPM: {} ({} samples)", last.bpm, samples.len()),
            },
            Self::HeartRateVariability { milliseconds, .. } => format!("HRV (ms): {milliseconds}"),
            Self::BloodPressure {
                systolic_mmhg,
                diastolic_mmhg,
                ..
            } => format!("Systolic: {systolic_mmhg}, Diastolic: {diastolic_mmhg}"),
            Self::BloodGlucose { mg_per_dl, .. } => format!("mg/dL: {mg_per_dl}"),
            Self::OxygenSaturation { percentage, .. } => format!("Saturation: {percentage}%"),
            Self::RespiratoryRate {
                breaths_per_minute, ..
            } => format!("Breaths/min: {breaths_per_minute}"),
            Self::Vo2Max {
                ml_per_kg_per_min, ..
            } => format!("ml/kg/min: {ml_per_kg_per_min}"),
            Self::SleepSession {
                duration_minutes, ..
            } => format!("Duration: {duration_minutes} min"),
            Self::Water { liters, .. } => format!("Liters: {liters}"),
            Self::Nutrition {
                kilocalories,
                protein_grams,
                ..
            } => format!(
                "Calories: {}, Protein: {}g",
                optional_amount(*kilocalories),
                optional_amount(*protein_grams)
            ),
            Self::Menstruation { flow, .. } => format!("Flow: {flow}"),
            Self::OvulationTest { result, .. } => format!("Result: {result}"),
            Self::CervicalMucus { quality, .. } => format!("Quality: {quality}"),
            Self::SexualActivity { .. } => "Recorded Sexual Activity".to_owned(),
            Self::IntermenstrualBleeding { .. } => "Recorded Intermenstrual Bleeding".to_owned(),
        }
    }
}

fn optional_amount(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_owned(), |amount| amount.to_string())
}

/// Sort records ascending by start instant, keeping native order for ties
pub fn sort_chronologically(records: &mut [HealthRecord]) {
    records.sort_by_key(HealthRecord::sort_key);
}
