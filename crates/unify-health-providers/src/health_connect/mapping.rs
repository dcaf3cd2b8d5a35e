// ABOUTME: Conversion between Health Connect records and the unified health model
// ABOUTME: Record type to record class mapping plus per-record unit conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::constants::provider_names::HEALTH_CONNECT;
use crate::models::{
    ExerciseSegment, HealthRecord, HealthRecordType, HeartRateSample, Interval, RecordTime,
    SleepStage,
};

use super::client::RecordKind;
use super::constants::{
    body_position_label, exercise_type_label, flow_label, meal_type_label, mucus_appearance_label,
    mucus_sensation_label, ovulation_result_label, protection_used_label, relation_to_meal_label,
    sleep_stage_label,
};
use super::records::{ExerciseSessionRecord, HealthConnectRecord, SleepSessionRecord};

/// Record types with a Health Connect mapping
pub const SUPPORTED_TYPES: &[HealthRecordType] = &[
    HealthRecordType::Steps,
    HealthRecordType::Distance,
    HealthRecordType::FloorsClimbed,
    HealthRecordType::ActiveEnergyBurned,
    HealthRecordType::BasalEnergyBurned,
    HealthRecordType::MoveMinutes,
    HealthRecordType::Exercise,
    HealthRecordType::Weight,
    HealthRecordType::Height,
    HealthRecordType::BodyFatPercentage,
    HealthRecordType::LeanBodyMass,
    HealthRecordType::BodyTemperature,
    HealthRecordType::HeartRate,
    HealthRecordType::HeartRateVariability,
    HealthRecordType::BloodPressure,
    HealthRecordType::BloodGlucose,
    HealthRecordType::OxygenSaturation,
    HealthRecordType::RespiratoryRate,
    HealthRecordType::Vo2Max,
    HealthRecordType::Sleep,
    HealthRecordType::Water,
    HealthRecordType::Nutrition,
    HealthRecordType::Menstruation,
    HealthRecordType::OvulationTest,
    HealthRecordType::CervicalMucus,
    HealthRecordType::SexualActivity,
    HealthRecordType::IntermenstrualBleeding,
];

/// Record class read for a record type
///
/// `MOVE_MINUTES` reads exercise sessions; `BODY_MASS_INDEX` has no stored class.
#[must_use]
pub const fn record_kind_for(record_type: HealthRecordType) -> Option<RecordKind> {
    let kind = match record_type {
        HealthRecordType::Steps => RecordKind::Steps,
        HealthRecordType::Distance => RecordKind::Distance,
        HealthRecordType::FloorsClimbed => RecordKind::FloorsClimbed,
        HealthRecordType::ActiveEnergyBurned => RecordKind::ActiveCaloriesBurned,
        HealthRecordType::BasalEnergyBurned => RecordKind::BasalMetabolicRate,
        HealthRecordType::MoveMinutes | HealthRecordType::Exercise => RecordKind::ExerciseSession,
        HealthRecordType::Weight => RecordKind::Weight,
        HealthRecordType::Height => RecordKind::Height,
        HealthRecordType::BodyFatPercentage => RecordKind::BodyFat,
        HealthRecordType::LeanBodyMass => RecordKind::LeanBodyMass,
        HealthRecordType::BodyMassIndex => return None,
        HealthRecordType::BodyTemperature => RecordKind::BodyTemperature,
        HealthRecordType::HeartRate => RecordKind::HeartRate,
        HealthRecordType::HeartRateVariability => RecordKind::HeartRateVariabilityRmssd,
        HealthRecordType::BloodPressure => RecordKind::BloodPressure,
        HealthRecordType::BloodGlucose => RecordKind::BloodGlucose,
        HealthRecordType::OxygenSaturation => RecordKind::OxygenSaturation,
        HealthRecordType::RespiratoryRate => RecordKind::RespiratoryRate,
        HealthRecordType::Vo2Max => RecordKind::Vo2Max,
        HealthRecordType::Sleep => RecordKind::SleepSession,
        HealthRecordType::Water => RecordKind::Hydration,
        HealthRecordType::Nutrition => RecordKind::Nutrition,
        HealthRecordType::Menstruation => RecordKind::MenstruationFlow,
        HealthRecordType::OvulationTest => RecordKind::OvulationTest,
        HealthRecordType::CervicalMucus => RecordKind::CervicalMucus,
        HealthRecordType::SexualActivity => RecordKind::SexualActivity,
        HealthRecordType::IntermenstrualBleeding => RecordKind::IntermenstrualBleeding,
    };
    Some(kind)
}

/// Read permission for a record type, if it has a record class
#[must_use]
pub fn read_permission_for(record_type: HealthRecordType) -> Option<String> {
    record_kind_for(record_type).map(RecordKind::read_permission)
}

fn interval(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Interval> {
    match Interval::new(start, end) {
        Ok(interval) => Some(interval),
        Err(e) => {
            warn!(provider = HEALTH_CONNECT, error = %e, "Skipping record with inverted interval");
            None
        }
    }
}

/// Bounds of an exercise session, used for move-minute aggregation
#[must_use]
pub fn exercise_interval(record: &HealthConnectRecord) -> Option<Interval> {
    match record {
        HealthConnectRecord::ExerciseSession(session) => {
            interval(session.start_time, session.end_time)
        }
        _ => None,
    }
}

fn exercise_session(record: ExerciseSessionRecord) -> Option<HealthRecord> {
    let bounds = interval(record.start_time, record.end_time)?;
    let segments = record
        .segments
        .iter()
        .filter_map(|segment| {
            Some(ExerciseSegment {
                segment_type: segment.segment_type.to_string(),
                repetitions: u32::try_from(segment.repetitions).unwrap_or(0),
                interval: interval(segment.start_time, segment.end_time)?,
            })
        })
        .collect();
    Some(HealthRecord::ExerciseSession {
        name: record
            .title
            .unwrap_or_else(|| exercise_type_label(record.exercise_type)),
        duration_minutes: bounds.whole_minutes(),
        notes: record.notes,
        segments,
        interval: bounds,
    })
}

fn sleep_session(record: &SleepSessionRecord) -> Option<HealthRecord> {
    let bounds = interval(record.start_time, record.end_time)?;
    let stages = record
        .stages
        .iter()
        .filter_map(|stage| {
            interval(stage.start_time, stage.end_time)
                .map(|span| SleepStage::new(sleep_stage_label(stage.stage), span))
        })
        .collect();
    Some(HealthRecord::SleepSession {
        duration_minutes: bounds.whole_minutes(),
        stages,
        interval: bounds,
    })
}

/// Convert one native record into the unified model
///
/// Returns `None` for records with an inverted interval.
#[must_use]
pub fn to_health_record(record: HealthConnectRecord) -> Option<HealthRecord> {
    let mapped = match record {
        HealthConnectRecord::Steps(r) => HealthRecord::Steps {
            count: u64::try_from(r.count).unwrap_or(0),
            interval: interval(r.start_time, r.end_time)?,
        },
        HealthConnectRecord::Distance(r) => HealthRecord::Distance {
            meters: r.distance.in_meters(),
            interval: interval(r.start_time, r.end_time)?,
        },
        HealthConnectRecord::FloorsClimbed(r) => HealthRecord::FloorsClimbed {
            floors: r.floors,
            interval: interval(r.start_time, r.end_time)?,
        },
        HealthConnectRecord::ActiveCaloriesBurned(r) => HealthRecord::ActiveEnergyBurned {
            kilocalories: r.energy.in_kilocalories(),
            interval: interval(r.start_time, r.end_time)?,
        },
        HealthConnectRecord::ExerciseSession(r) => return exercise_session(r),
        HealthConnectRecord::Weight(r) => HealthRecord::Weight {
            kilograms: r.weight.in_kilograms(),
            time: r.time,
        },
        HealthConnectRecord::Height(r) => HealthRecord::Height {
            meters: r.height.in_meters(),
            time: r.time,
        },
        HealthConnectRecord::BodyFat(r) => HealthRecord::BodyFatPercentage {
            percentage: r.percentage.value(),
            time: r.time,
        },
        HealthConnectRecord::LeanBodyMass(r) => HealthRecord::LeanBodyMass {
            kilograms: r.mass.in_kilograms(),
            time: r.time,
        },
        HealthConnectRecord::BodyTemperature(r) => HealthRecord::BodyTemperature {
            celsius: r.temperature.in_celsius(),
            time: r.time,
        },
        HealthConnectRecord::BasalMetabolicRate(r) => HealthRecord::BasalMetabolicRate {
            kcal_per_day: r.basal_metabolic_rate.in_kilocalories_per_day(),
            time: r.time,
        },
        HealthConnectRecord::HeartRate(r) => HealthRecord::HeartRate {
            samples: r
                .samples
                .iter()
                .map(|sample| HeartRateSample {
                    bpm: u32::try_from(sample.beats_per_minute).unwrap_or(0),
                    time: sample.time,
                })
                .collect(),
            timing: RecordTime::Between(interval(r.start_time, r.end_time)?),
        },
        HealthConnectRecord::HeartRateVariabilityRmssd(r) => HealthRecord::HeartRateVariability {
            milliseconds: r.heart_rate_variability_millis,
            time: r.time,
        },
        HealthConnectRecord::BloodPressure(r) => HealthRecord::BloodPressure {
            systolic_mmhg: r.systolic.in_millimeters_of_mercury(),
            diastolic_mmhg: r.diastolic.in_millimeters_of_mercury(),
            body_position: body_position_label(r.body_position).to_owned(),
            time: r.time,
        },
        HealthConnectRecord::BloodGlucose(r) => HealthRecord::BloodGlucose {
            mg_per_dl: r.level.in_milligrams_per_deciliter(),
            relation_to_meal: relation_to_meal_label(r.relation_to_meal).to_owned(),
            time: r.time,
        },
        HealthConnectRecord::OxygenSaturation(r) => HealthRecord::OxygenSaturation {
            percentage: r.percentage.value(),
            time: r.time,
        },
        HealthConnectRecord::RespiratoryRate(r) => HealthRecord::RespiratoryRate {
            breaths_per_minute: r.rate,
            time: r.time,
        },
        HealthConnectRecord::Vo2Max(r) => HealthRecord::Vo2Max {
            ml_per_kg_per_min: r.vo2_milliliters_per_minute_kilogram,
            time: r.time,
        },
        HealthConnectRecord::SleepSession(r) => return sleep_session(&r),
        HealthConnectRecord::Hydration(r) => HealthRecord::Water {
            liters: r.volume.in_liters(),
            interval: interval(r.start_time, r.end_time)?,
        },
        HealthConnectRecord::Nutrition(r) => HealthRecord::Nutrition {
            meal_type: meal_type_label(r.meal_type).to_owned(),
            kilocalories: r.energy.map(|energy| energy.in_kilocalories()),
            protein_grams: r.protein.map(|mass| mass.in_grams()),
            fat_grams: r.total_fat.map(|mass| mass.in_grams()),
            carbs_grams: r.total_carbohydrate.map(|mass| mass.in_grams()),
            interval: interval(r.start_time, r.end_time)?,
        },
        HealthConnectRecord::MenstruationFlow(r) => HealthRecord::Menstruation {
            flow: flow_label(r.flow).to_owned(),
            timing: RecordTime::At(r.time),
        },
        HealthConnectRecord::OvulationTest(r) => HealthRecord::OvulationTest {
            result: ovulation_result_label(r.result).to_owned(),
            time: r.time,
        },
        HealthConnectRecord::CervicalMucus(r) => HealthRecord::CervicalMucus {
            quality: mucus_appearance_label(r.appearance).to_owned(),
            sensation: mucus_sensation_label(r.sensation).to_owned(),
            time: r.time,
        },
        HealthConnectRecord::SexualActivity(r) => HealthRecord::SexualActivity {
            protection_used: protection_used_label(r.protection_used).to_owned(),
            time: r.time,
        },
        HealthConnectRecord::IntermenstrualBleeding(r) => {
            HealthRecord::IntermenstrualBleeding { time: r.time }
        }
    };
    Some(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::units::{KILOGRAMS_PER_GRAM, KILOJOULES_PER_KILOCALORIE};
    use crate::health_connect::records::{
        ActiveCaloriesBurnedRecord, BasalMetabolicRateRecord, BloodGlucose, BloodGlucoseRecord,
        BodyFatRecord, BodyTemperatureRecord, CervicalMucusRecord, DistanceRecord, Energy,
        FloorsClimbedRecord, HeartRateVariabilityRmssdRecord, HeightRecord, HydrationRecord,
        IntermenstrualBleedingRecord, LeanBodyMassRecord, Length, Mass, MenstruationFlowRecord,
        NutritionRecord, OvulationTestRecord, OxygenSaturationRecord, Percentage, Power,
        RespiratoryRateRecord, SexualActivityRecord, SleepSessionStage, Temperature, Volume,
        Vo2MaxRecord,
    };
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, hour, minute, 0)
            .single()
            .unwrap_or_default()
    }

    fn span(start: DateTime<Utc>, end: DateTime<Utc>) -> Interval {
        Interval::new(start, end).unwrap_or_else(|_| unreachable!())
    }

    #[test]
    fn test_interval_records_convert_to_base_units() {
        let (start, end) = (at(8, 0), at(9, 0));
        let cases = vec![
            (
                HealthConnectRecord::Distance(DistanceRecord {
                    distance: Length::meters(5_250.5),
                    start_time: start,
                    end_time: end,
                }),
                HealthRecord::Distance {
                    meters: 5_250.5,
                    interval: span(start, end),
                },
            ),
            (
                HealthConnectRecord::FloorsClimbed(FloorsClimbedRecord {
                    floors: 12.0,
                    start_time: start,
                    end_time: end,
                }),
                HealthRecord::FloorsClimbed {
                    floors: 12.0,
                    interval: span(start, end),
                },
            ),
            (
                HealthConnectRecord::ActiveCaloriesBurned(ActiveCaloriesBurnedRecord {
                    energy: Energy::kilojoules(2_092.0),
                    start_time: start,
                    end_time: end,
                }),
                HealthRecord::ActiveEnergyBurned {
                    kilocalories: 2_092.0 / KILOJOULES_PER_KILOCALORIE,
                    interval: span(start, end),
                },
            ),
            (
                HealthConnectRecord::Hydration(HydrationRecord {
                    volume: Volume::liters(0.75),
                    start_time: start,
                    end_time: end,
                }),
                HealthRecord::Water {
                    liters: 0.75,
                    interval: span(start, end),
                },
            ),
            (
                HealthConnectRecord::Nutrition(NutritionRecord {
                    meal_type: 3,
                    energy: Some(Energy::kilocalories(820.0)),
                    protein: Some(Mass::grams(42.0)),
                    total_fat: None,
                    total_carbohydrate: Some(Mass::grams(96.5)),
                    start_time: start,
                    end_time: end,
                }),
                HealthRecord::Nutrition {
                    meal_type: "Dinner".to_owned(),
                    kilocalories: Some(820.0),
                    protein_grams: Some(42.0),
                    fat_grams: None,
                    carbs_grams: Some(96.5),
                    interval: span(start, end),
                },
            ),
        ];

        for (native, expected) in cases {
            assert_eq!(to_health_record(native), Some(expected));
        }
    }

    #[test]
    fn test_instant_records_convert_to_base_units() {
        let time = at(7, 30);
        let cases = vec![
            (
                HealthConnectRecord::Height(HeightRecord {
                    height: Length::meters(1.82),
                    time,
                }),
                HealthRecord::Height { meters: 1.82, time },
            ),
            (
                HealthConnectRecord::LeanBodyMass(LeanBodyMassRecord {
                    mass: Mass::grams(58_400.0),
                    time,
                }),
                HealthRecord::LeanBodyMass {
                    kilograms: 58_400.0 * KILOGRAMS_PER_GRAM,
                    time,
                },
            ),
            (
                HealthConnectRecord::BodyFat(BodyFatRecord {
                    percentage: Percentage(18.5),
                    time,
                }),
                HealthRecord::BodyFatPercentage {
                    percentage: 18.5,
                    time,
                },
            ),
            (
                HealthConnectRecord::BodyTemperature(BodyTemperatureRecord {
                    temperature: Temperature::celsius(36.8),
                    time,
                }),
                HealthRecord::BodyTemperature {
                    celsius: 36.8,
                    time,
                },
            ),
            (
                HealthConnectRecord::BasalMetabolicRate(BasalMetabolicRateRecord {
                    basal_metabolic_rate: Power::kilocalories_per_day(1_650.0),
                    time,
                }),
                HealthRecord::BasalMetabolicRate {
                    kcal_per_day: 1_650.0,
                    time,
                },
            ),
            (
                HealthConnectRecord::HeartRateVariabilityRmssd(HeartRateVariabilityRmssdRecord {
                    heart_rate_variability_millis: 48.2,
                    time,
                }),
                HealthRecord::HeartRateVariability {
                    milliseconds: 48.2,
                    time,
                },
            ),
            (
                HealthConnectRecord::BloodGlucose(BloodGlucoseRecord {
                    level: BloodGlucose::millimoles_per_liter(5.5),
                    relation_to_meal: 2,
                    time,
                }),
                HealthRecord::BloodGlucose {
                    mg_per_dl: 99.0,
                    relation_to_meal: "Fasting".to_owned(),
                    time,
                },
            ),
            (
                HealthConnectRecord::OxygenSaturation(OxygenSaturationRecord {
                    percentage: Percentage(97.0),
                    time,
                }),
                HealthRecord::OxygenSaturation {
                    percentage: 97.0,
                    time,
                },
            ),
            (
                HealthConnectRecord::RespiratoryRate(RespiratoryRateRecord { rate: 14.5, time }),
                HealthRecord::RespiratoryRate {
                    breaths_per_minute: 14.5,
                    time,
                },
            ),
            (
                HealthConnectRecord::Vo2Max(Vo2MaxRecord {
                    vo2_milliliters_per_minute_kilogram: 44.0,
                    time,
                }),
                HealthRecord::Vo2Max {
                    ml_per_kg_per_min: 44.0,
                    time,
                },
            ),
        ];

        for (native, expected) in cases {
            assert_eq!(to_health_record(native), Some(expected));
        }
    }

    #[test]
    fn test_cycle_tracking_records_use_labels() {
        let time = at(6, 0);
        let cases = vec![
            (
                HealthConnectRecord::MenstruationFlow(MenstruationFlowRecord { flow: 2, time }),
                HealthRecord::Menstruation {
                    flow: "Medium".to_owned(),
                    timing: RecordTime::At(time),
                },
            ),
            (
                HealthConnectRecord::OvulationTest(OvulationTestRecord { result: 1, time }),
                HealthRecord::OvulationTest {
                    result: "Positive".to_owned(),
                    time,
                },
            ),
            (
                HealthConnectRecord::OvulationTest(OvulationTestRecord { result: 0, time }),
                HealthRecord::OvulationTest {
                    result: "Inconclusive".to_owned(),
                    time,
                },
            ),
            (
                HealthConnectRecord::CervicalMucus(CervicalMucusRecord {
                    appearance: 5,
                    sensation: 3,
                    time,
                }),
                HealthRecord::CervicalMucus {
                    quality: "Egg white".to_owned(),
                    sensation: "Heavy".to_owned(),
                    time,
                },
            ),
            (
                HealthConnectRecord::SexualActivity(SexualActivityRecord {
                    protection_used: 1,
                    time,
                }),
                HealthRecord::SexualActivity {
                    protection_used: "Protected".to_owned(),
                    time,
                },
            ),
            (
                HealthConnectRecord::IntermenstrualBleeding(IntermenstrualBleedingRecord { time }),
                HealthRecord::IntermenstrualBleeding { time },
            ),
        ];

        for (native, expected) in cases {
            assert_eq!(to_health_record(native), Some(expected));
        }
    }

    #[test]
    fn test_sleep_stages_are_labelled() {
        let codes = [
            (1, "Awake"),
            (2, "Sleeping"),
            (3, "Out of bed"),
            (4, "Light"),
            (5, "Deep"),
            (6, "Rem"),
            (7, "Awake in bed"),
            (0, "Unknown"),
        ];
        let stages: Vec<SleepSessionStage> = codes
            .iter()
            .zip(0u32..)
            .map(|(&(stage, _), slot)| SleepSessionStage {
                stage,
                start_time: at(slot, 0),
                end_time: at(slot, 30),
            })
            .collect();
        let record = HealthConnectRecord::SleepSession(SleepSessionRecord {
            title: None,
            notes: None,
            stages,
            start_time: at(0, 0),
            end_time: at(8, 0),
        });

        let Some(HealthRecord::SleepSession {
            duration_minutes,
            stages,
            ..
        }) = to_health_record(record)
        else {
            unreachable!("sleep session must map");
        };
        assert_eq!(duration_minutes, 480);
        let labels: Vec<&str> = stages.iter().map(|stage| stage.stage.as_str()).collect();
        let expected: Vec<&str> = codes.iter().map(|&(_, label)| label).collect();
        assert_eq!(labels, expected);
        assert!(stages.iter().all(|stage| stage.duration_minutes == 30));
    }

    #[test]
    fn test_inverted_records_are_skipped() {
        let record = HealthConnectRecord::Hydration(HydrationRecord {
            volume: Volume::liters(0.25),
            start_time: at(10, 0),
            end_time: at(9, 0),
        });
        assert_eq!(to_health_record(record), None);
    }
}
