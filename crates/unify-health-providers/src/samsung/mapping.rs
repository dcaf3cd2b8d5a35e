// ABOUTME: Conversion between Samsung Health rows and the unified health model
// ABOUTME: Data type names, field names, code tables and unit conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

use tracing::warn;

use crate::constants::provider_names::SAMSUNG;
use crate::constants::units::{
    LITERS_PER_MILLILITER, METERS_PER_CENTIMETER, MG_PER_DL_PER_MMOL_PER_L_GLUCOSE, MS_PER_MINUTE,
};
use crate::models::{HealthRecord, HealthRecordType, HeartRateSample, Interval, RecordTime};

use super::data::SamsungHealthData;
use super::store::PermissionKey;

/// `HealthConstants.*.HEALTH_DATA_TYPE` names
pub mod data_types {
    /// `HealthConstants.StepCount`
    pub const STEP_COUNT: &str = "com.samsung.health.step_count";
    /// `HealthConstants.Exercise`
    pub const EXERCISE: &str = "com.samsung.health.exercise";
    /// `HealthConstants.FloorsClimbed`
    pub const FLOORS_CLIMBED: &str = "com.samsung.health.floors_climbed";
    /// `HealthConstants.Weight`
    pub const WEIGHT: &str = "com.samsung.health.weight";
    /// `HealthConstants.Height`
    pub const HEIGHT: &str = "com.samsung.health.height";
    /// `HealthConstants.BodyFat`
    pub const BODY_FAT: &str = "com.samsung.health.body_fat";
    /// `HealthConstants.HeartRate`
    pub const HEART_RATE: &str = "com.samsung.shealth.tracker.heart_rate";
    /// `HealthConstants.BloodPressure`
    pub const BLOOD_PRESSURE: &str = "com.samsung.health.blood_pressure";
    /// `HealthConstants.BloodGlucose`
    pub const BLOOD_GLUCOSE: &str = "com.samsung.health.blood_glucose";
    /// `HealthConstants.OxygenSaturation`
    pub const OXYGEN_SATURATION: &str = "com.samsung.health.oxygen_saturation";
    /// `HealthConstants.Sleep`
    pub const SLEEP: &str = "com.samsung.health.sleep";
    /// `HealthConstants.WaterIntake`
    pub const WATER_INTAKE: &str = "com.samsung.health.water_intake";
    /// `HealthConstants.Nutrition`
    pub const NUTRITION: &str = "com.samsung.health.nutrition";
}

/// Column names read by the mapping
pub mod columns {
    /// Step count
    pub const COUNT: &str = "count";
    /// Exercise distance, meters
    pub const DISTANCE: &str = "distance";
    /// Energy, kilocalories
    pub const CALORIE: &str = "calorie";
    /// Exercise type code
    pub const EXERCISE_TYPE: &str = "exercise_type";
    /// Exercise duration, milliseconds
    pub const DURATION: &str = "duration";
    /// Free text comment
    pub const COMMENT: &str = "comment";
    /// Floors climbed
    pub const FLOOR: &str = "floor";
    /// Body weight, kilograms
    pub const WEIGHT: &str = "weight";
    /// Height, centimeters
    pub const HEIGHT: &str = "height";
    /// Body fat, percent
    pub const BODY_FAT: &str = "body_fat";
    /// Heart rate, beats per minute
    pub const HEART_RATE: &str = "heart_rate";
    /// Systolic pressure, mmHg
    pub const SYSTOLIC: &str = "systolic";
    /// Diastolic pressure, mmHg
    pub const DIASTOLIC: &str = "diastolic";
    /// Blood glucose, mmol/L
    pub const GLUCOSE: &str = "glucose";
    /// Oxygen saturation, percent
    pub const SPO2: &str = "spo2";
    /// Water intake, milliliters
    pub const AMOUNT: &str = "amount";
    /// Meal type code
    pub const MEAL_TYPE: &str = "meal_type";
    /// Protein, grams
    pub const PROTEIN: &str = "protein";
    /// Total fat, grams
    pub const TOTAL_FAT: &str = "total_fat";
    /// Carbohydrate, grams
    pub const CARBOHYDRATE: &str = "carbohydrate";
}

/// Record types with a Samsung Health mapping
pub const SUPPORTED_TYPES: &[HealthRecordType] = &[
    HealthRecordType::Steps,
    HealthRecordType::Distance,
    HealthRecordType::ActiveEnergyBurned,
    HealthRecordType::MoveMinutes,
    HealthRecordType::FloorsClimbed,
    HealthRecordType::Exercise,
    HealthRecordType::Weight,
    HealthRecordType::Height,
    HealthRecordType::BodyFatPercentage,
    HealthRecordType::HeartRate,
    HealthRecordType::BloodPressure,
    HealthRecordType::BloodGlucose,
    HealthRecordType::OxygenSaturation,
    HealthRecordType::Sleep,
    HealthRecordType::Water,
    HealthRecordType::Nutrition,
];

/// Samsung data type holding `record_type`
///
/// Distance, active energy and move minutes are all read from exercise rows.
#[must_use]
pub const fn data_type_for(record_type: HealthRecordType) -> Option<&'static str> {
    let data_type = match record_type {
        HealthRecordType::Steps => data_types::STEP_COUNT,
        HealthRecordType::Distance
        | HealthRecordType::ActiveEnergyBurned
        | HealthRecordType::MoveMinutes
        | HealthRecordType::Exercise => data_types::EXERCISE,
        HealthRecordType::FloorsClimbed => data_types::FLOORS_CLIMBED,
        HealthRecordType::Weight => data_types::WEIGHT,
        HealthRecordType::Height => data_types::HEIGHT,
        HealthRecordType::BodyFatPercentage => data_types::BODY_FAT,
        HealthRecordType::HeartRate => data_types::HEART_RATE,
        HealthRecordType::BloodPressure => data_types::BLOOD_PRESSURE,
        HealthRecordType::BloodGlucose => data_types::BLOOD_GLUCOSE,
        HealthRecordType::OxygenSaturation => data_types::OXYGEN_SATURATION,
        HealthRecordType::Sleep => data_types::SLEEP,
        HealthRecordType::Water => data_types::WATER_INTAKE,
        HealthRecordType::Nutrition => data_types::NUTRITION,
        _ => return None,
    };
    Some(data_type)
}

/// Read permission key for `record_type`
#[must_use]
pub fn permission_key_for(record_type: HealthRecordType) -> Option<PermissionKey> {
    data_type_for(record_type).map(PermissionKey::read)
}

/// Label for a `HealthConstants.Exercise.EXERCISE_TYPE` code
#[must_use]
pub fn exercise_type_label(code: i64) -> String {
    let label = match code {
        0 => "Custom exercise",
        1001 => "Walking",
        1002 => "Running",
        9002 => "Yoga",
        10007 => "Strength training",
        11007 => "Cycling",
        13001 => "Hiking",
        14001 => "Swimming",
        15003 => "Treadmill",
        15004 => "Elliptical trainer",
        15005 => "Exercise bike",
        other => return format!("Exercise type {other}"),
    };
    label.to_owned()
}

/// Label for a `HealthConstants.Nutrition.MEAL_TYPE` code
#[must_use]
pub const fn meal_type_label(code: i64) -> &'static str {
    match code {
        100_001 => "Breakfast",
        100_002 => "Lunch",
        100_003 => "Dinner",
        100_004 => "Morning snack",
        100_005 => "Afternoon snack",
        100_006 => "Evening snack",
        _ => "Unknown",
    }
}

/// Interval covered by a row, or `None` when it has no usable timestamps
#[must_use]
pub fn row_interval(row: &SamsungHealthData) -> Option<Interval> {
    let (Some(start), Some(end)) = (row.start(), row.end()) else {
        warn!(provider = SAMSUNG, data_type = %row.data_type, "Skipping row without timestamps");
        return None;
    };
    match Interval::new(start, end) {
        Ok(interval) => Some(interval),
        Err(e) => {
            warn!(provider = SAMSUNG, error = %e, "Skipping row with inverted interval");
            None
        }
    }
}

fn required_float(row: &SamsungHealthData, column: &str) -> Option<f64> {
    let value = row.get_float(column);
    if value.is_none() {
        warn!(provider = SAMSUNG, data_type = %row.data_type, column, "Skipping row missing column");
    }
    value
}

fn exercise_record(row: &SamsungHealthData, interval: Interval) -> HealthRecord {
    let name = row
        .get_long(columns::EXERCISE_TYPE)
        .map_or_else(|| "Exercise".to_owned(), exercise_type_label);
    let duration_minutes = row
        .get_long(columns::DURATION)
        .filter(|millis| *millis >= 0)
        .map_or_else(|| interval.whole_minutes(), |millis| (millis / MS_PER_MINUTE) as u64);
    HealthRecord::ExerciseSession {
        name,
        duration_minutes,
        notes: row.get_string(columns::COMMENT),
        segments: Vec::new(),
        interval,
    }
}

/// Convert a row read for `record_type`
///
/// Move minutes are derived from the whole result set and are not produced here.
#[must_use]
pub fn to_health_record(record_type: HealthRecordType, row: &SamsungHealthData) -> Option<HealthRecord> {
    let interval = row_interval(row)?;
    let time = interval.end();

    let record = match record_type {
        HealthRecordType::Steps => HealthRecord::Steps {
            count: row.get_long(columns::COUNT).map_or(0, |count| count.max(0) as u64),
            interval,
        },
        HealthRecordType::Distance => HealthRecord::Distance {
            meters: required_float(row, columns::DISTANCE)?,
            interval,
        },
        HealthRecordType::ActiveEnergyBurned => HealthRecord::ActiveEnergyBurned {
            kilocalories: required_float(row, columns::CALORIE)?,
            interval,
        },
        HealthRecordType::FloorsClimbed => HealthRecord::FloorsClimbed {
            floors: required_float(row, columns::FLOOR)?,
            interval,
        },
        HealthRecordType::Exercise => exercise_record(row, interval),
        HealthRecordType::Weight => HealthRecord::Weight {
            kilograms: required_float(row, columns::WEIGHT)?,
            time,
        },
        HealthRecordType::Height => HealthRecord::Height {
            meters: required_float(row, columns::HEIGHT)? * METERS_PER_CENTIMETER,
            time,
        },
        HealthRecordType::BodyFatPercentage => HealthRecord::BodyFatPercentage {
            percentage: required_float(row, columns::BODY_FAT)?,
            time,
        },
        HealthRecordType::HeartRate => {
            let bpm = required_float(row, columns::HEART_RATE)?;
            HealthRecord::HeartRate {
                samples: vec![HeartRateSample {
                    bpm: bpm as u32,
                    time: interval.start(),
                }],
                timing: if interval.start() == interval.end() {
                    RecordTime::At(interval.start())
                } else {
                    RecordTime::Between(interval)
                },
            }
        }
        HealthRecordType::BloodPressure => HealthRecord::BloodPressure {
            systolic_mmhg: required_float(row, columns::SYSTOLIC)?,
            diastolic_mmhg: required_float(row, columns::DIASTOLIC)?,
            body_position: "Unknown".to_owned(),
            time,
        },
        HealthRecordType::BloodGlucose => HealthRecord::BloodGlucose {
            mg_per_dl: required_float(row, columns::GLUCOSE)? * MG_PER_DL_PER_MMOL_PER_L_GLUCOSE,
            relation_to_meal: "Unknown".to_owned(),
            time,
        },
        HealthRecordType::OxygenSaturation => HealthRecord::OxygenSaturation {
            percentage: required_float(row, columns::SPO2)?,
            time,
        },
        HealthRecordType::Sleep => HealthRecord::SleepSession {
            duration_minutes: interval.whole_minutes(),
            stages: Vec::new(),
            interval,
        },
        HealthRecordType::Water => HealthRecord::Water {
            liters: required_float(row, columns::AMOUNT)? * LITERS_PER_MILLILITER,
            interval,
        },
        HealthRecordType::Nutrition => HealthRecord::Nutrition {
            meal_type: row
                .get_long(columns::MEAL_TYPE)
                .map_or("Unknown", meal_type_label)
                .to_owned(),
            kilocalories: row.get_float(columns::CALORIE),
            protein_grams: row.get_float(columns::PROTEIN),
            fat_grams: row.get_float(columns::TOTAL_FAT),
            carbs_grams: row.get_float(columns::CARBOHYDRATE),
            interval,
        },
        _ => return None,
    };
    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samsung::data::fields;

    const START_MS: i64 = 1_741_600_000_000;

    fn row(data_type: &str) -> SamsungHealthData {
        SamsungHealthData::new(data_type)
            .with(fields::START_TIME, START_MS)
            .with(fields::END_TIME, START_MS + 30 * MS_PER_MINUTE)
    }

    #[test]
    fn test_exercise_backed_types_share_data_type() {
        for record_type in [
            HealthRecordType::Distance,
            HealthRecordType::ActiveEnergyBurned,
            HealthRecordType::MoveMinutes,
            HealthRecordType::Exercise,
        ] {
            assert_eq!(data_type_for(record_type), Some(data_types::EXERCISE));
        }
        assert_eq!(data_type_for(HealthRecordType::Menstruation), None);
    }

    #[test]
    fn test_height_centimeters_to_meters() {
        let record = to_health_record(HealthRecordType::Height, &row(data_types::HEIGHT).with(columns::HEIGHT, 180.0));
        let Some(HealthRecord::Height { meters, .. }) = record else {
            unreachable!("height row must map");
        };
        assert!((meters - 1.8).abs() < 1e-9);
    }

    #[test]
    fn test_water_milliliters_to_liters() {
        let record = to_health_record(
            HealthRecordType::Water,
            &row(data_types::WATER_INTAKE).with(columns::AMOUNT, 250.0),
        );
        let Some(HealthRecord::Water { liters, .. }) = record else {
            unreachable!("water row must map");
        };
        assert!((liters - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_missing_column_skips_row() {
        assert_eq!(to_health_record(HealthRecordType::Weight, &row(data_types::WEIGHT)), None);
    }

    #[test]
    fn test_exercise_duration_prefers_duration_column() {
        let exercise = row(data_types::EXERCISE)
            .with(columns::EXERCISE_TYPE, 1002_i64)
            .with(columns::DURATION, 25 * MS_PER_MINUTE);
        let Some(HealthRecord::ExerciseSession {
            name,
            duration_minutes,
            ..
        }) = to_health_record(HealthRecordType::Exercise, &exercise)
        else {
            unreachable!("exercise row must map");
        };
        assert_eq!(name, "Running");
        assert_eq!(duration_minutes, 25);
    }
}
