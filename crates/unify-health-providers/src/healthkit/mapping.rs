// ABOUTME: Conversion between HealthKit samples and the unified health model
// ABOUTME: Type classification, authorization identifiers, category code tables and aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::warn;

use crate::constants::provider_names::HEALTHKIT;
use crate::constants::units::PERCENT_PER_FRACTION;
use crate::models::{HealthRecord, HealthRecordType, HeartRateSample, Interval, RecordTime, SleepStage};

use super::samples::{
    HkCategorySample, HkCategoryTypeIdentifier, HkCorrelation, HkCorrelationTypeIdentifier,
    HkMetadata, HkObjectType, HkQuantitySample, HkQuantityTypeIdentifier, HkUnit,
};

/// `HKMetadataKeyBloodGlucoseMealTime`
pub const METADATA_KEY_BLOOD_GLUCOSE_MEAL_TIME: &str = "HKBloodGlucoseMealTime";
/// `HKMetadataKeySexualActivityProtectionUsed`
pub const METADATA_KEY_SEXUAL_ACTIVITY_PROTECTION_USED: &str = "HKSexualActivityProtectionUsed";

/// Record types with a `HealthKit` mapping
pub const SUPPORTED_TYPES: &[HealthRecordType] = &[
    HealthRecordType::Steps,
    HealthRecordType::Distance,
    HealthRecordType::FloorsClimbed,
    HealthRecordType::ActiveEnergyBurned,
    HealthRecordType::BasalEnergyBurned,
    HealthRecordType::MoveMinutes,
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
    HealthRecordType::Menstruation,
    HealthRecordType::OvulationTest,
    HealthRecordType::CervicalMucus,
    HealthRecordType::SexualActivity,
    HealthRecordType::IntermenstrualBleeding,
];

/// How a record type is stored in `HealthKit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HkTypeMapping {
    /// Quantity samples read in `unit`
    Quantity(HkQuantityTypeIdentifier, HkUnit),
    /// Category samples
    Category(HkCategoryTypeIdentifier),
    /// Correlations of quantity samples
    Correlation(HkCorrelationTypeIdentifier),
}

/// Classify a record type, or `None` if `HealthKit` has no readable counterpart
#[must_use]
pub const fn classify(record_type: HealthRecordType) -> Option<HkTypeMapping> {
    use HkQuantityTypeIdentifier as Q;
    let mapping = match record_type {
        HealthRecordType::Steps => HkTypeMapping::Quantity(Q::StepCount, HkUnit::Count),
        HealthRecordType::Distance => HkTypeMapping::Quantity(Q::DistanceWalkingRunning, HkUnit::Meter),
        HealthRecordType::FloorsClimbed => HkTypeMapping::Quantity(Q::FlightsClimbed, HkUnit::Count),
        HealthRecordType::ActiveEnergyBurned => {
            HkTypeMapping::Quantity(Q::ActiveEnergyBurned, HkUnit::Kilocalorie)
        }
        HealthRecordType::BasalEnergyBurned => {
            HkTypeMapping::Quantity(Q::BasalEnergyBurned, HkUnit::Kilocalorie)
        }
        HealthRecordType::MoveMinutes => HkTypeMapping::Quantity(Q::AppleMoveTime, HkUnit::Minute),
        HealthRecordType::Weight => HkTypeMapping::Quantity(Q::BodyMass, HkUnit::Kilogram),
        HealthRecordType::Height => HkTypeMapping::Quantity(Q::Height, HkUnit::Meter),
        HealthRecordType::BodyFatPercentage => {
            HkTypeMapping::Quantity(Q::BodyFatPercentage, HkUnit::Percent)
        }
        HealthRecordType::LeanBodyMass => HkTypeMapping::Quantity(Q::LeanBodyMass, HkUnit::Kilogram),
        HealthRecordType::BodyTemperature => {
            HkTypeMapping::Quantity(Q::BodyTemperature, HkUnit::DegreeCelsius)
        }
        HealthRecordType::HeartRate => HkTypeMapping::Quantity(Q::HeartRate, HkUnit::CountPerMinute),
        HealthRecordType::HeartRateVariability => {
            HkTypeMapping::Quantity(Q::HeartRateVariabilitySdnn, HkUnit::Millisecond)
        }
        HealthRecordType::BloodGlucose => {
            HkTypeMapping::Quantity(Q::BloodGlucose, HkUnit::MilligramPerDeciliter)
        }
        HealthRecordType::OxygenSaturation => {
            HkTypeMapping::Quantity(Q::OxygenSaturation, HkUnit::Percent)
        }
        HealthRecordType::RespiratoryRate => {
            HkTypeMapping::Quantity(Q::RespiratoryRate, HkUnit::CountPerMinute)
        }
        HealthRecordType::Vo2Max => {
            HkTypeMapping::Quantity(Q::Vo2Max, HkUnit::MilliliterPerKilogramPerMinute)
        }
        HealthRecordType::Water => HkTypeMapping::Quantity(Q::DietaryWater, HkUnit::Liter),
        HealthRecordType::Sleep => HkTypeMapping::Category(HkCategoryTypeIdentifier::SleepAnalysis),
        HealthRecordType::Menstruation => {
            HkTypeMapping::Category(HkCategoryTypeIdentifier::MenstrualFlow)
        }
        HealthRecordType::OvulationTest => {
            HkTypeMapping::Category(HkCategoryTypeIdentifier::OvulationTestResult)
        }
        HealthRecordType::CervicalMucus => {
            HkTypeMapping::Category(HkCategoryTypeIdentifier::CervicalMucusQuality)
        }
        HealthRecordType::SexualActivity => {
            HkTypeMapping::Category(HkCategoryTypeIdentifier::SexualActivity)
        }
        HealthRecordType::IntermenstrualBleeding => {
            HkTypeMapping::Category(HkCategoryTypeIdentifier::IntermenstrualBleeding)
        }
        HealthRecordType::BloodPressure => {
            HkTypeMapping::Correlation(HkCorrelationTypeIdentifier::BloodPressure)
        }
        HealthRecordType::Exercise | HealthRecordType::Nutrition | HealthRecordType::BodyMassIndex => {
            return None
        }
    };
    Some(mapping)
}

/// Object types to include in an authorization request for `record_type`
///
/// Correlations cannot be authorized directly; their member quantity types are.
#[must_use]
pub fn read_object_types(record_type: HealthRecordType) -> Vec<HkObjectType> {
    match classify(record_type) {
        Some(HkTypeMapping::Quantity(identifier, _)) => vec![HkObjectType::Quantity(identifier)],
        Some(HkTypeMapping::Category(identifier)) => vec![HkObjectType::Category(identifier)],
        Some(HkTypeMapping::Correlation(HkCorrelationTypeIdentifier::BloodPressure)) => vec![
            HkObjectType::Quantity(HkQuantityTypeIdentifier::BloodPressureSystolic),
            HkObjectType::Quantity(HkQuantityTypeIdentifier::BloodPressureDiastolic),
        ],
        None => Vec::new(),
    }
}

/// Drop sub-second precision, as the native bridge reports epoch seconds
#[must_use]
pub fn truncate_to_seconds(instant: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp(instant.timestamp(), 0).unwrap_or(instant)
}

fn sample_interval(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Interval> {
    match Interval::new(truncate_to_seconds(start), truncate_to_seconds(end)) {
        Ok(interval) => Some(interval),
        Err(e) => {
            warn!(provider = HEALTHKIT, error = %e, "Skipping sample with inverted interval");
            None
        }
    }
}

fn quantity_value(sample: &HkQuantitySample, unit: HkUnit) -> Option<f64> {
    let value = sample.quantity.double_value_for_unit(unit);
    if value.is_none() {
        warn!(
            provider = HEALTHKIT,
            quantity_type = ?sample.quantity_type,
            unit = ?sample.quantity.unit,
            "Skipping sample with incompatible unit"
        );
    }
    value
}

/// Convert a quantity sample read for `record_type`
#[must_use]
pub fn quantity_to_record(
    record_type: HealthRecordType,
    sample: &HkQuantitySample,
) -> Option<HealthRecord> {
    let Some(HkTypeMapping::Quantity(_, unit)) = classify(record_type) else {
        return None;
    };
    let value = quantity_value(sample, unit)?;
    let time = truncate_to_seconds(sample.end_date);

    let record = match record_type {
        HealthRecordType::Steps => HealthRecord::Steps {
            count: value as u64,
            interval: sample_interval(sample.start_date, sample.end_date)?,
        },
        HealthRecordType::Distance => HealthRecord::Distance {
            meters: value,
            interval: sample_interval(sample.start_date, sample.end_date)?,
        },
        HealthRecordType::FloorsClimbed => HealthRecord::FloorsClimbed {
            floors: value,
            interval: sample_interval(sample.start_date, sample.end_date)?,
        },
        HealthRecordType::ActiveEnergyBurned => HealthRecord::ActiveEnergyBurned {
            kilocalories: value,
            interval: sample_interval(sample.start_date, sample.end_date)?,
        },
        HealthRecordType::Water => HealthRecord::Water {
            liters: value,
            interval: sample_interval(sample.start_date, sample.end_date)?,
        },
        HealthRecordType::BasalEnergyBurned => HealthRecord::BasalMetabolicRate {
            kcal_per_day: value,
            time,
        },
        HealthRecordType::Weight => HealthRecord::Weight {
            kilograms: value,
            time,
        },
        HealthRecordType::Height => HealthRecord::Height {
            meters: value,
            time,
        },
        HealthRecordType::BodyFatPercentage => HealthRecord::BodyFatPercentage {
            percentage: value * PERCENT_PER_FRACTION,
            time,
        },
        HealthRecordType::LeanBodyMass => HealthRecord::LeanBodyMass {
            kilograms: value,
            time,
        },
        HealthRecordType::BodyTemperature => HealthRecord::BodyTemperature {
            celsius: value,
            time,
        },
        HealthRecordType::HeartRateVariability => HealthRecord::HeartRateVariability {
            milliseconds: value,
            time,
        },
        HealthRecordType::BloodGlucose => HealthRecord::BloodGlucose {
            mg_per_dl: value,
            relation_to_meal: meal_time_label(&sample.metadata).to_owned(),
            time,
        },
        HealthRecordType::OxygenSaturation => HealthRecord::OxygenSaturation {
            percentage: value * PERCENT_PER_FRACTION,
            time,
        },
        HealthRecordType::RespiratoryRate => HealthRecord::RespiratoryRate {
            breaths_per_minute: value,
            time,
        },
        HealthRecordType::Vo2Max => HealthRecord::Vo2Max {
            ml_per_kg_per_min: value,
            time,
        },
        HealthRecordType::HeartRate => HealthRecord::HeartRate {
            samples: vec![HeartRateSample {
                bpm: value as u32,
                time,
            }],
            timing: RecordTime::At(time),
        },
        _ => return None,
    };
    Some(record)
}

fn meal_time_label(metadata: &HkMetadata) -> &'static str {
    match metadata
        .get(METADATA_KEY_BLOOD_GLUCOSE_MEAL_TIME)
        .and_then(Value::as_i64)
    {
        Some(1) => "Before meal",
        Some(2) => "After meal",
        _ => "Unknown",
    }
}

fn protection_label(metadata: &HkMetadata) -> &'static str {
    match metadata
        .get(METADATA_KEY_SEXUAL_ACTIVITY_PROTECTION_USED)
        .and_then(Value::as_bool)
    {
        Some(true) => "Protected",
        Some(false) => "Unprotected",
        None => "Unknown",
    }
}

/// Label for an `HKCategoryValueSleepAnalysis` code
#[must_use]
pub const fn sleep_stage_label(value: i32) -> &'static str {
    match value {
        0 => "InBed",
        1 => "Asleep",
        2 => "Awake",
        3 => "Core",
        4 => "Deep",
        5 => "REM",
        _ => "Unknown",
    }
}

/// Label for an `HKCategoryValueMenstrualFlow` code
#[must_use]
pub const fn menstrual_flow_label(value: i32) -> &'static str {
    match value {
        1 => "Unspecified",
        2 => "Light",
        3 => "Medium",
        4 => "Heavy",
        5 => "None",
        _ => "Unknown",
    }
}

/// Label for an `HKCategoryValueOvulationTestResult` code
#[must_use]
pub const fn ovulation_result_label(value: i32) -> &'static str {
    match value {
        1 => "Negative",
        2 => "Positive",
        3 => "Indeterminate",
        4 => "Estrogen surge",
        _ => "Unknown",
    }
}

/// Label for an `HKCategoryValueCervicalMucusQuality` code
#[must_use]
pub const fn mucus_quality_label(value: i32) -> &'static str {
    match value {
        1 => "Dry",
        2 => "Sticky",
        3 => "Creamy",
        4 => "Watery",
        5 => "Egg white",
        _ => "Unknown",
    }
}

/// Convert a category sample read for `record_type`
///
/// Sleep analysis samples are aggregated by [`aggregate_sleep`] instead.
#[must_use]
pub fn category_to_record(
    record_type: HealthRecordType,
    sample: &HkCategorySample,
) -> Option<HealthRecord> {
    let time = truncate_to_seconds(sample.end_date);
    let record = match record_type {
        HealthRecordType::Menstruation => {
            let span = sample_interval(sample.start_date, sample.end_date)?;
            HealthRecord::Menstruation {
                flow: menstrual_flow_label(sample.value).to_owned(),
                timing: if span.start() == span.end() {
                    RecordTime::At(span.start())
                } else {
                    RecordTime::Between(span)
                },
            }
        }
        HealthRecordType::OvulationTest => HealthRecord::OvulationTest {
            result: ovulation_result_label(sample.value).to_owned(),
            time,
        },
        HealthRecordType::CervicalMucus => HealthRecord::CervicalMucus {
            quality: mucus_quality_label(sample.value).to_owned(),
            sensation: "Unknown".to_owned(),
            time,
        },
        HealthRecordType::SexualActivity => HealthRecord::SexualActivity {
            protection_used: protection_label(&sample.metadata).to_owned(),
            time,
        },
        HealthRecordType::IntermenstrualBleeding => HealthRecord::IntermenstrualBleeding { time },
        _ => return None,
    };
    Some(record)
}

/// Convert a blood pressure correlation
///
/// Correlations missing either member sample are skipped.
#[must_use]
pub fn correlation_to_record(correlation: &HkCorrelation) -> Option<HealthRecord> {
    let systolic = correlation
        .object_for_type(HkQuantityTypeIdentifier::BloodPressureSystolic)?
        .quantity
        .double_value_for_unit(HkUnit::MillimeterOfMercury)?;
    let diastolic = correlation
        .object_for_type(HkQuantityTypeIdentifier::BloodPressureDiastolic)?
        .quantity
        .double_value_for_unit(HkUnit::MillimeterOfMercury)?;
    Some(HealthRecord::BloodPressure {
        systolic_mmhg: systolic,
        diastolic_mmhg: diastolic,
        body_position: "Unknown".to_owned(),
        time: truncate_to_seconds(correlation.end_date),
    })
}

/// Collapse every heart rate sample into one record timed at the latest sample
#[must_use]
pub fn aggregate_heart_rate(samples: &[HkQuantitySample]) -> Option<HealthRecord> {
    let mut readings: Vec<HeartRateSample> = samples
        .iter()
        .filter_map(|sample| {
            quantity_value(sample, HkUnit::CountPerMinute).map(|bpm| HeartRateSample {
                bpm: bpm as u32,
                time: truncate_to_seconds(sample.end_date),
            })
        })
        .collect();
    readings.sort_by_key(|reading| reading.time);
    let last = readings.last()?.time;
    Some(HealthRecord::HeartRate {
        samples: readings,
        timing: RecordTime::At(last),
    })
}

/// Collapse sleep analysis samples into one session spanning all of them
#[must_use]
pub fn aggregate_sleep(samples: &[HkCategorySample]) -> Option<HealthRecord> {
    let mut stages: Vec<SleepStage> = samples
        .iter()
        .filter_map(|sample| {
            sample_interval(sample.start_date, sample.end_date)
                .map(|span| SleepStage::new(sleep_stage_label(sample.value), span))
        })
        .collect();
    stages.sort_by_key(|stage| stage.interval.start());

    let start = stages.iter().map(|stage| stage.interval.start()).min()?;
    let end = stages.iter().map(|stage| stage.interval.end()).max()?;
    let session = Interval::new(start, end).ok()?;
    Some(HealthRecord::SleepSession {
        duration_minutes: session.whole_minutes(),
        stages,
        interval: session,
    })
}

/// Total Apple move time over `range` as one record, or `None` when zero
#[must_use]
pub fn sum_move_minutes(samples: &[HkQuantitySample], range: Interval) -> Option<HealthRecord> {
    let total: f64 = samples
        .iter()
        .filter_map(|sample| quantity_value(sample, HkUnit::Minute))
        .sum();
    let minutes = total as u64;
    (minutes > 0).then_some(HealthRecord::MoveMinutes {
        minutes,
        interval: range,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::healthkit::samples::HkQuantity;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, hour, minute, 0)
            .single()
            .unwrap_or_default()
    }

    fn quantity(
        quantity_type: HkQuantityTypeIdentifier,
        value: f64,
        unit: HkUnit,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> HkQuantitySample {
        HkQuantitySample {
            uuid: Uuid::new_v4(),
            quantity_type,
            quantity: HkQuantity::new(value, unit),
            start_date: start,
            end_date: end,
            metadata: HkMetadata::new(),
        }
    }

    #[test]
    fn test_unsupported_types_have_no_mapping() {
        for record_type in [
            HealthRecordType::Exercise,
            HealthRecordType::Nutrition,
            HealthRecordType::BodyMassIndex,
        ] {
            assert_eq!(classify(record_type), None);
            assert!(!SUPPORTED_TYPES.contains(&record_type));
        }
    }

    #[test]
    fn test_blood_pressure_authorizes_both_members() {
        let types = read_object_types(HealthRecordType::BloodPressure);
        assert_eq!(
            types,
            vec![
                HkObjectType::Quantity(HkQuantityTypeIdentifier::BloodPressureSystolic),
                HkObjectType::Quantity(HkQuantityTypeIdentifier::BloodPressureDiastolic),
            ]
        );
    }

    #[test]
    fn test_fraction_becomes_percentage() {
        let sample = quantity(
            HkQuantityTypeIdentifier::OxygenSaturation,
            0.97,
            HkUnit::Percent,
            at(8, 0),
            at(8, 0),
        );
        let Some(HealthRecord::OxygenSaturation { percentage, .. }) =
            quantity_to_record(HealthRecordType::OxygenSaturation, &sample)
        else {
            unreachable!("oxygen saturation sample must map");
        };
        assert!((percentage - 97.0).abs() < 1e-9);
    }

    #[test]
    fn test_heart_rate_aggregates_into_one_record() {
        let samples = vec![
            quantity(HkQuantityTypeIdentifier::HeartRate, 80.0, HkUnit::CountPerMinute, at(9, 5), at(9, 5)),
            quantity(HkQuantityTypeIdentifier::HeartRate, 72.4, HkUnit::CountPerMinute, at(9, 0), at(9, 0)),
        ];
        let record = aggregate_heart_rate(&samples);
        let Some(HealthRecord::HeartRate { samples, timing }) = record else {
            unreachable!("heart rate samples must aggregate");
        };
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].bpm, 72);
        assert_eq!(timing, RecordTime::At(at(9, 5)));
        assert_eq!(aggregate_heart_rate(&[]), None);
    }

    #[test]
    fn test_move_minutes_sum_and_zero() {
        let range = Interval::new(at(0, 0), at(23, 0)).unwrap_or_else(|_| unreachable!());
        let samples = vec![
            quantity(HkQuantityTypeIdentifier::AppleMoveTime, 300.0, HkUnit::Second, at(7, 0), at(7, 5)),
            quantity(HkQuantityTypeIdentifier::AppleMoveTime, 7.0, HkUnit::Minute, at(12, 0), at(12, 7)),
        ];
        assert_eq!(
            sum_move_minutes(&samples, range),
            Some(HealthRecord::MoveMinutes {
                minutes: 12,
                interval: range,
            })
        );
        assert_eq!(sum_move_minutes(&[], range), None);
    }

    #[test]
    fn test_truncate_to_seconds() {
        let precise = at(10, 0) + chrono::Duration::milliseconds(750);
        assert_eq!(truncate_to_seconds(precise), at(10, 0));
    }
}
