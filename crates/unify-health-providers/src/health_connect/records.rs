// ABOUTME: Native Health Connect record schema as delivered by the platform client
// ABOUTME: One variant per record class, with Health Connect unit wrappers and integer codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

// Field names mirror the Health Connect SDK record classes
#![allow(missing_docs)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::units::{
    KILOGRAMS_PER_GRAM, KILOJOULES_PER_KILOCALORIE, MG_PER_DL_PER_MMOL_PER_L_GLUCOSE,
};

/// Mass, stored in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mass {
    grams: f64,
}

impl Mass {
    /// Mass from grams
    #[must_use]
    pub const fn grams(grams: f64) -> Self {
        Self { grams }
    }

    /// Mass from kilograms
    #[must_use]
    pub fn kilograms(kilograms: f64) -> Self {
        Self {
            grams: kilograms / KILOGRAMS_PER_GRAM,
        }
    }

    /// Value in grams
    #[must_use]
    pub const fn in_grams(&self) -> f64 {
        self.grams
    }

    /// Value in kilograms
    #[must_use]
    pub fn in_kilograms(&self) -> f64 {
        self.grams * KILOGRAMS_PER_GRAM
    }
}

/// Length, stored in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    meters: f64,
}

impl Length {
    /// Length from meters
    #[must_use]
    pub const fn meters(meters: f64) -> Self {
        Self { meters }
    }

    /// Value in meters
    #[must_use]
    pub const fn in_meters(&self) -> f64 {
        self.meters
    }
}

/// Energy, stored in kilocalories
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Energy {
    kilocalories: f64,
}

impl Energy {
    /// Energy from kilocalories
    #[must_use]
    pub const fn kilocalories(kilocalories: f64) -> Self {
        Self { kilocalories }
    }

    /// Energy from kilojoules
    #[must_use]
    pub fn kilojoules(kilojoules: f64) -> Self {
        Self {
            kilocalories: kilojoules / KILOJOULES_PER_KILOCALORIE,
        }
    }

    /// Value in kilocalories
    #[must_use]
    pub const fn in_kilocalories(&self) -> f64 {
        self.kilocalories
    }
}

/// Volume, stored in liters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    liters: f64,
}

impl Volume {
    /// Volume from liters
    #[must_use]
    pub const fn liters(liters: f64) -> Self {
        Self { liters }
    }

    /// Value in liters
    #[must_use]
    pub const fn in_liters(&self) -> f64 {
        self.liters
    }
}

/// Temperature, stored in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    celsius: f64,
}

impl Temperature {
    /// Temperature from degrees Celsius
    #[must_use]
    pub const fn celsius(celsius: f64) -> Self {
        Self { celsius }
    }

    /// Value in degrees Celsius
    #[must_use]
    pub const fn in_celsius(&self) -> f64 {
        self.celsius
    }
}

/// Pressure, stored in millimeters of mercury
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pressure {
    millimeters_of_mercury: f64,
}

impl Pressure {
    /// Pressure from mmHg
    #[must_use]
    pub const fn millimeters_of_mercury(value: f64) -> Self {
        Self {
            millimeters_of_mercury: value,
        }
    }

    /// Value in mmHg
    #[must_use]
    pub const fn in_millimeters_of_mercury(&self) -> f64 {
        self.millimeters_of_mercury
    }
}

/// Blood glucose concentration, stored in mg/dL
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloodGlucose {
    milligrams_per_deciliter: f64,
}

impl BloodGlucose {
    /// Concentration from mg/dL
    #[must_use]
    pub const fn milligrams_per_deciliter(value: f64) -> Self {
        Self {
            milligrams_per_deciliter: value,
        }
    }

    /// Concentration from mmol/L
    #[must_use]
    pub fn millimoles_per_liter(value: f64) -> Self {
        Self {
            milligrams_per_deciliter: value * MG_PER_DL_PER_MMOL_PER_L_GLUCOSE,
        }
    }

    /// Value in mg/dL
    #[must_use]
    pub const fn in_milligrams_per_deciliter(&self) -> f64 {
        self.milligrams_per_deciliter
    }
}

/// Power, stored in kilocalories per day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Power {
    kilocalories_per_day: f64,
}

impl Power {
    /// Power from kcal/day
    #[must_use]
    pub const fn kilocalories_per_day(value: f64) -> Self {
        Self {
            kilocalories_per_day: value,
        }
    }

    /// Value in kcal/day
    #[must_use]
    pub const fn in_kilocalories_per_day(&self) -> f64 {
        self.kilocalories_per_day
    }
}

/// Percentage in 0-100
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(pub f64);

impl Percentage {
    /// Raw value
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

/// Heart rate sample inside a [`HeartRateRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateRecordSample {
    /// Beats per minute
    pub beats_per_minute: i64,
    /// Sample time
    pub time: DateTime<Utc>,
}

/// Stage inside a [`SleepSessionRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepSessionStage {
    /// `STAGE_TYPE_*` code
    pub stage: i32,
    /// Stage start
    pub start_time: DateTime<Utc>,
    /// Stage end
    pub end_time: DateTime<Utc>,
}

/// Segment inside an [`ExerciseSessionRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSessionSegment {
    /// `EXERCISE_SEGMENT_TYPE_*` code
    pub segment_type: i32,
    /// Repetitions in the segment
    #[serde(default)]
    pub repetitions: i32,
    /// Segment start
    pub start_time: DateTime<Utc>,
    /// Segment end
    pub end_time: DateTime<Utc>,
}

/// Steps over an interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepsRecord {
    pub count: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Distance over an interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceRecord {
    pub distance: Length,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Floors climbed over an interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorsClimbedRecord {
    pub floors: f64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Active calories over an interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveCaloriesBurnedRecord {
    pub energy: Energy,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Exercise session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSessionRecord {
    /// `EXERCISE_TYPE_*` code
    pub exercise_type: i32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub segments: Vec<ExerciseSessionSegment>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Body weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    pub weight: Mass,
    pub time: DateTime<Utc>,
}

/// Body height
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightRecord {
    pub height: Length,
    pub time: DateTime<Utc>,
}

/// Body fat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyFatRecord {
    pub percentage: Percentage,
    pub time: DateTime<Utc>,
}

/// Lean body mass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeanBodyMassRecord {
    pub mass: Mass,
    pub time: DateTime<Utc>,
}

/// Body temperature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyTemperatureRecord {
    pub temperature: Temperature,
    pub time: DateTime<Utc>,
}

/// Basal metabolic rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasalMetabolicRateRecord {
    pub basal_metabolic_rate: Power,
    pub time: DateTime<Utc>,
}

/// Heart rate series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateRecord {
    pub samples: Vec<HeartRateRecordSample>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Heart rate variability (RMSSD)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateVariabilityRmssdRecord {
    pub heart_rate_variability_millis: f64,
    pub time: DateTime<Utc>,
}

/// Blood pressure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodPressureRecord {
    pub systolic: Pressure,
    pub diastolic: Pressure,
    /// `BODY_POSITION_*` code
    #[serde(default)]
    pub body_position: i32,
    pub time: DateTime<Utc>,
}

/// Blood glucose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodGlucoseRecord {
    pub level: BloodGlucose,
    /// `RELATION_TO_MEAL_*` code
    #[serde(default)]
    pub relation_to_meal: i32,
    pub time: DateTime<Utc>,
}

/// Oxygen saturation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OxygenSaturationRecord {
    pub percentage: Percentage,
    pub time: DateTime<Utc>,
}

/// Respiratory rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RespiratoryRateRecord {
    /// Breaths per minute
    pub rate: f64,
    pub time: DateTime<Utc>,
}

/// VO2 max
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vo2MaxRecord {
    pub vo2_milliliters_per_minute_kilogram: f64,
    pub time: DateTime<Utc>,
}

/// Sleep session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepSessionRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub stages: Vec<SleepSessionStage>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Hydration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationRecord {
    pub volume: Volume,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Nutrition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecord {
    /// `MEAL_TYPE_*` code
    #[serde(default)]
    pub meal_type: i32,
    #[serde(default)]
    pub energy: Option<Energy>,
    #[serde(default)]
    pub protein: Option<Mass>,
    #[serde(default)]
    pub total_fat: Option<Mass>,
    #[serde(default)]
    pub total_carbohydrate: Option<Mass>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Menstruation flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenstruationFlowRecord {
    /// `FLOW_*` code
    #[serde(default)]
    pub flow: i32,
    pub time: DateTime<Utc>,
}

/// Ovulation test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvulationTestRecord {
    /// `RESULT_*` code
    pub result: i32,
    pub time: DateTime<Utc>,
}

/// Cervical mucus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CervicalMucusRecord {
    /// `APPEARANCE_*` code
    #[serde(default)]
    pub appearance: i32,
    /// `SENSATION_*` code
    #[serde(default)]
    pub sensation: i32,
    pub time: DateTime<Utc>,
}

/// Sexual activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SexualActivityRecord {
    /// `PROTECTION_USED_*` code
    #[serde(default)]
    pub protection_used: i32,
    pub time: DateTime<Utc>,
}

/// Intermenstrual bleeding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntermenstrualBleedingRecord {
    pub time: DateTime<Utc>,
}

/// Any record the Health Connect client can return
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "record")]
pub enum HealthConnectRecord {
    Steps(StepsRecord),
    Distance(DistanceRecord),
    FloorsClimbed(FloorsClimbedRecord),
    ActiveCaloriesBurned(ActiveCaloriesBurnedRecord),
    ExerciseSession(ExerciseSessionRecord),
    Weight(WeightRecord),
    Height(HeightRecord),
    BodyFat(BodyFatRecord),
    LeanBodyMass(LeanBodyMassRecord),
    BodyTemperature(BodyTemperatureRecord),
    BasalMetabolicRate(BasalMetabolicRateRecord),
    HeartRate(HeartRateRecord),
    HeartRateVariabilityRmssd(HeartRateVariabilityRmssdRecord),
    BloodPressure(BloodPressureRecord),
    BloodGlucose(BloodGlucoseRecord),
    OxygenSaturation(OxygenSaturationRecord),
    RespiratoryRate(RespiratoryRateRecord),
    Vo2Max(Vo2MaxRecord),
    SleepSession(SleepSessionRecord),
    Hydration(HydrationRecord),
    Nutrition(NutritionRecord),
    MenstruationFlow(MenstruationFlowRecord),
    OvulationTest(OvulationTestRecord),
    CervicalMucus(CervicalMucusRecord),
    SexualActivity(SexualActivityRecord),
    IntermenstrualBleeding(IntermenstrualBleedingRecord),
}

impl HealthConnectRecord {
    /// Start instant (the sample time for instantaneous records)
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        match self {
            Self::Steps(r) => r.start_time,
            Self::Distance(r) => r.start_time,
            Self::FloorsClimbed(r) => r.start_time,
            Self::ActiveCaloriesBurned(r) => r.start_time,
            Self::ExerciseSession(r) => r.start_time,
            Self::HeartRate(r) => r.start_time,
            Self::SleepSession(r) => r.start_time,
            Self::Hydration(r) => r.start_time,
            Self::Nutrition(r) => r.start_time,
            Self::Weight(r) => r.time,
            Self::Height(r) => r.time,
            Self::BodyFat(r) => r.time,
            Self::LeanBodyMass(r) => r.time,
            Self::BodyTemperature(r) => r.time,
            Self::BasalMetabolicRate(r) => r.time,
            Self::HeartRateVariabilityRmssd(r) => r.time,
            Self::BloodPressure(r) => r.time,
            Self::BloodGlucose(r) => r.time,
            Self::OxygenSaturation(r) => r.time,
            Self::RespiratoryRate(r) => r.time,
            Self::Vo2Max(r) => r.time,
            Self::MenstruationFlow(r) => r.time,
            Self::OvulationTest(r) => r.time,
            Self::CervicalMucus(r) => r.time,
            Self::SexualActivity(r) => r.time,
            Self::IntermenstrualBleeding(r) => r.time,
        }
    }

    /// End instant for interval records
    #[must_use]
    pub const fn end(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Steps(r) => Some(r.end_time),
            Self::Distance(r) => Some(r.end_time),
            Self::FloorsClimbed(r) => Some(r.end_time),
            Self::ActiveCaloriesBurned(r) => Some(r.end_time),
            Self::ExerciseSession(r) => Some(r.end_time),
            Self::HeartRate(r) => Some(r.end_time),
            Self::SleepSession(r) => Some(r.end_time),
            Self::Hydration(r) => Some(r.end_time),
            Self::Nutrition(r) => Some(r.end_time),
            _ => None,
        }
    }
}
