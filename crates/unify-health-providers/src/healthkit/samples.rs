// ABOUTME: Native HealthKit object model: type identifiers, units, quantities and samples
// ABOUTME: Quantity, category and correlation samples as returned by HKHealthStore queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::units::{
    GRAMS_PER_KILOGRAM, KILOGRAMS_PER_POUND, KILOJOULES_PER_KILOCALORIE, LITERS_PER_MILLILITER,
    LITERS_PER_US_FLUID_OUNCE, METERS_PER_CENTIMETER, METERS_PER_FOOT, METERS_PER_KM,
    METERS_PER_MILE, MG_PER_DL_PER_MMOL_PER_L_GLUCOSE, MS_PER_SECOND, SECONDS_PER_MINUTE,
};

/// `HKQuantityTypeIdentifier` values the adapter reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HkQuantityTypeIdentifier {
    /// `HKQuantityTypeIdentifierStepCount`
    StepCount,
    /// `HKQuantityTypeIdentifierDistanceWalkingRunning`
    DistanceWalkingRunning,
    /// `HKQuantityTypeIdentifierFlightsClimbed`
    FlightsClimbed,
    /// `HKQuantityTypeIdentifierActiveEnergyBurned`
    ActiveEnergyBurned,
    /// `HKQuantityTypeIdentifierBasalEnergyBurned`
    BasalEnergyBurned,
    /// `HKQuantityTypeIdentifierAppleMoveTime`
    AppleMoveTime,
    /// `HKQuantityTypeIdentifierBodyMass`
    BodyMass,
    /// `HKQuantityTypeIdentifierHeight`
    Height,
    /// `HKQuantityTypeIdentifierBodyFatPercentage`
    BodyFatPercentage,
    /// `HKQuantityTypeIdentifierLeanBodyMass`
    LeanBodyMass,
    /// `HKQuantityTypeIdentifierBodyTemperature`
    BodyTemperature,
    /// `HKQuantityTypeIdentifierHeartRate`
    HeartRate,
    /// `HKQuantityTypeIdentifierHeartRateVariabilitySDNN`
    #[serde(rename = "HeartRateVariabilitySDNN")]
    HeartRateVariabilitySdnn,
    /// `HKQuantityTypeIdentifierBloodPressureSystolic`
    BloodPressureSystolic,
    /// `HKQuantityTypeIdentifierBloodPressureDiastolic`
    BloodPressureDiastolic,
    /// `HKQuantityTypeIdentifierBloodGlucose`
    BloodGlucose,
    /// `HKQuantityTypeIdentifierOxygenSaturation`
    OxygenSaturation,
    /// `HKQuantityTypeIdentifierRespiratoryRate`
    RespiratoryRate,
    /// `HKQuantityTypeIdentifierVO2Max`
    #[serde(rename = "VO2Max")]
    Vo2Max,
    /// `HKQuantityTypeIdentifierDietaryWater`
    DietaryWater,
}

/// `HKCategoryTypeIdentifier` values the adapter reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HkCategoryTypeIdentifier {
    /// `HKCategoryTypeIdentifierSleepAnalysis`
    SleepAnalysis,
    /// `HKCategoryTypeIdentifierMenstrualFlow`
    MenstrualFlow,
    /// `HKCategoryTypeIdentifierOvulationTestResult`
    OvulationTestResult,
    /// `HKCategoryTypeIdentifierCervicalMucusQuality`
    CervicalMucusQuality,
    /// `HKCategoryTypeIdentifierSexualActivity`
    SexualActivity,
    /// `HKCategoryTypeIdentifierIntermenstrualBleeding`
    IntermenstrualBleeding,
}

/// `HKCorrelationTypeIdentifier` values the adapter reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HkCorrelationTypeIdentifier {
    /// `HKCorrelationTypeIdentifierBloodPressure`
    BloodPressure,
}

/// Object type that can appear in an authorization request or a sample query
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HkObjectType {
    /// Quantity type
    Quantity(HkQuantityTypeIdentifier),
    /// Category type
    Category(HkCategoryTypeIdentifier),
}

/// Physical dimension of an [`HkUnit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dimension {
    Scalar,
    Length,
    Energy,
    Mass,
    Fraction,
    Temperature,
    Time,
    Frequency,
    Pressure,
    Concentration,
    Volume,
    OxygenUptake,
}

/// Units used by the quantity types above
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HkUnit {
    /// `count`
    Count,
    /// `m`
    Meter,
    /// `km`
    Kilometer,
    /// `cm`
    Centimeter,
    /// `ft`
    Foot,
    /// `mi`
    Mile,
    /// `kcal`
    Kilocalorie,
    /// `kJ`
    Kilojoule,
    /// `g`
    Gram,
    /// `kg`
    Kilogram,
    /// `lb`
    Pound,
    /// `%` expressed as a 0.0-1.0 fraction
    Percent,
    /// `degC`
    DegreeCelsius,
    /// `degF`
    DegreeFahrenheit,
    /// `ms`
    Millisecond,
    /// `s`
    Second,
    /// `min`
    Minute,
    /// `count/min`
    CountPerMinute,
    /// `mmHg`
    MillimeterOfMercury,
    /// `mg/dL`
    MilligramPerDeciliter,
    /// `mmol<180.15588000005408>/L`
    MillimolePerLiter,
    /// `L`
    Liter,
    /// `mL`
    Milliliter,
    /// `fl_oz_us`
    FluidOunceUs,
    /// `ml/(kg*min)`
    MilliliterPerKilogramPerMinute,
}

impl HkUnit {
    const fn dimension(self) -> Dimension {
        match self {
            Self::Count => Dimension::Scalar,
            Self::Meter | Self::Kilometer | Self::Centimeter | Self::Foot | Self::Mile => {
                Dimension::Length
            }
            Self::Kilocalorie | Self::Kilojoule => Dimension::Energy,
            Self::Gram | Self::Kilogram | Self::Pound => Dimension::Mass,
            Self::Percent => Dimension::Fraction,
            Self::DegreeCelsius | Self::DegreeFahrenheit => Dimension::Temperature,
            Self::Millisecond | Self::Second | Self::Minute => Dimension::Time,
            Self::CountPerMinute => Dimension::Frequency,
            Self::MillimeterOfMercury => Dimension::Pressure,
            Self::MilligramPerDeciliter | Self::MillimolePerLiter => Dimension::Concentration,
            Self::Liter | Self::Milliliter | Self::FluidOunceUs => Dimension::Volume,
            Self::MilliliterPerKilogramPerMinute => Dimension::OxygenUptake,
        }
    }

    /// Convert `value` in this unit to the dimension's base unit
    ///
    /// Bases: count, meter, kilocalorie, gram, fraction, Celsius, second,
    /// count/min, mmHg, mg/dL, liter, ml/(kg*min).
    fn to_base(self, value: f64) -> f64 {
        match self {
            Self::Kilometer => value * METERS_PER_KM,
            Self::Centimeter => value * METERS_PER_CENTIMETER,
            Self::Foot => value * METERS_PER_FOOT,
            Self::Mile => value * METERS_PER_MILE,
            Self::Kilojoule => value / KILOJOULES_PER_KILOCALORIE,
            Self::Kilogram => value * GRAMS_PER_KILOGRAM,
            Self::Pound => value * KILOGRAMS_PER_POUND * GRAMS_PER_KILOGRAM,
            Self::DegreeFahrenheit => (value - 32.0) * 5.0 / 9.0,
            Self::Millisecond => value / MS_PER_SECOND,
            Self::Minute => value * SECONDS_PER_MINUTE,
            Self::MillimolePerLiter => value * MG_PER_DL_PER_MMOL_PER_L_GLUCOSE,
            Self::Milliliter => value * LITERS_PER_MILLILITER,
            Self::FluidOunceUs => value * LITERS_PER_US_FLUID_OUNCE,
            _ => value,
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            Self::Kilometer => value / METERS_PER_KM,
            Self::Centimeter => value / METERS_PER_CENTIMETER,
            Self::Foot => value / METERS_PER_FOOT,
            Self::Mile => value / METERS_PER_MILE,
            Self::Kilojoule => value * KILOJOULES_PER_KILOCALORIE,
            Self::Kilogram => value / GRAMS_PER_KILOGRAM,
            Self::Pound => value / (KILOGRAMS_PER_POUND * GRAMS_PER_KILOGRAM),
            Self::DegreeFahrenheit => value * 9.0 / 5.0 + 32.0,
            Self::Millisecond => value * MS_PER_SECOND,
            Self::Minute => value / SECONDS_PER_MINUTE,
            Self::MillimolePerLiter => value / MG_PER_DL_PER_MMOL_PER_L_GLUCOSE,
            Self::Milliliter => value / LITERS_PER_MILLILITER,
            Self::FluidOunceUs => value / LITERS_PER_US_FLUID_OUNCE,
            _ => value,
        }
    }
}

/// A value with its unit, as stored by `HKQuantity`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HkQuantity {
    /// Magnitude
    pub value: f64,
    /// Unit of `value`
    pub unit: HkUnit,
}

impl HkQuantity {
    /// Create a quantity
    #[must_use]
    pub const fn new(value: f64, unit: HkUnit) -> Self {
        Self { value, unit }
    }

    /// Value expressed in `unit`, or `None` if the dimensions differ
    #[must_use]
    pub fn double_value_for_unit(&self, unit: HkUnit) -> Option<f64> {
        (self.unit.dimension() == unit.dimension())
            .then(|| unit.from_base(self.unit.to_base(self.value)))
    }
}

/// Free-form sample metadata keyed by `HKMetadataKey*` names
pub type HkMetadata = BTreeMap<String, serde_json::Value>;

/// `HKQuantitySample`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HkQuantitySample {
    /// Sample identifier
    #[serde(default = "Uuid::new_v4")]
    pub uuid: Uuid,
    /// Quantity type
    pub quantity_type: HkQuantityTypeIdentifier,
    /// Measured value
    pub quantity: HkQuantity,
    /// Sample start
    pub start_date: DateTime<Utc>,
    /// Sample end
    pub end_date: DateTime<Utc>,
    /// Sample metadata
    #[serde(default)]
    pub metadata: HkMetadata,
}

/// `HKCategorySample`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HkCategorySample {
    /// Sample identifier
    #[serde(default = "Uuid::new_v4")]
    pub uuid: Uuid,
    /// Category type
    pub category_type: HkCategoryTypeIdentifier,
    /// `HKCategoryValue*` code
    #[serde(default)]
    pub value: i32,
    /// Sample start
    pub start_date: DateTime<Utc>,
    /// Sample end
    pub end_date: DateTime<Utc>,
    /// Sample metadata
    #[serde(default)]
    pub metadata: HkMetadata,
}

/// `HKCorrelation` grouping related quantity samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HkCorrelation {
    /// Correlation identifier
    #[serde(default = "Uuid::new_v4")]
    pub uuid: Uuid,
    /// Correlation type
    pub correlation_type: HkCorrelationTypeIdentifier,
    /// Member samples
    pub objects: Vec<HkQuantitySample>,
    /// Correlation start
    pub start_date: DateTime<Utc>,
    /// Correlation end
    pub end_date: DateTime<Utc>,
    /// Correlation metadata
    #[serde(default)]
    pub metadata: HkMetadata,
}

impl HkCorrelation {
    /// First member sample of the given quantity type
    #[must_use]
    pub fn object_for_type(&self, quantity_type: HkQuantityTypeIdentifier) -> Option<&HkQuantitySample> {
        self.objects
            .iter()
            .find(|sample| sample.quantity_type == quantity_type)
    }
}

/// Result row of a sample query
#[derive(Debug, Clone, PartialEq)]
pub enum HkSample {
    /// Quantity sample
    Quantity(HkQuantitySample),
    /// Category sample
    Category(HkCategorySample),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mass_conversion() {
        let pounds = HkQuantity::new(150.0, HkUnit::Pound);
        let kg = pounds.double_value_for_unit(HkUnit::Kilogram).unwrap_or_default();
        assert!((kg - 68.038_855_5).abs() < 1e-6);
    }

    #[test]
    fn test_temperature_is_affine() {
        let body = HkQuantity::new(98.6, HkUnit::DegreeFahrenheit);
        let celsius = body
            .double_value_for_unit(HkUnit::DegreeCelsius)
            .unwrap_or_default();
        assert!((celsius - 37.0).abs() < 1e-9);
    }

    #[test]
    fn test_incompatible_dimension() {
        let steps = HkQuantity::new(1200.0, HkUnit::Count);
        assert_eq!(steps.double_value_for_unit(HkUnit::Meter), None);
    }

    #[test]
    fn test_move_time_seconds_to_minutes() {
        let move_time = HkQuantity::new(330.0, HkUnit::Second);
        assert_eq!(move_time.double_value_for_unit(HkUnit::Minute), Some(5.5));
    }
}
