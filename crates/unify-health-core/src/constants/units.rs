// ABOUTME: Unit conversion constants for mass, length, volume, energy and time
// ABOUTME: Provides named constants to eliminate magic numbers in adapter mappings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

/// Kilograms per gram
pub const KILOGRAMS_PER_GRAM: f64 = 0.001;

/// Grams per kilogram
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;

/// Kilograms per pound
pub const KILOGRAMS_PER_POUND: f64 = 0.453_592_37;

/// Meters per centimeter
pub const METERS_PER_CENTIMETER: f64 = 0.01;

/// Meters per kilometer
pub const METERS_PER_KM: f64 = 1000.0;

/// Liters per milliliter
pub const LITERS_PER_MILLILITER: f64 = 0.001;

/// Kilojoules per kilocalorie
pub const KILOJOULES_PER_KILOCALORIE: f64 = 4.184;

/// Percent per unit fraction (`HealthKit` stores percentages as 0.0-1.0)
pub const PERCENT_PER_FRACTION: f64 = 100.0;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Milliseconds per second
pub const MS_PER_SECOND: f64 = 1000.0;

/// Milliseconds per minute, for whole-minute durations from epoch-millisecond timestamps
pub const MS_PER_MINUTE: i64 = 60_000;

/// Milligrams per deciliter for one millimole per liter of glucose
pub const MG_PER_DL_PER_MMOL_PER_L_GLUCOSE: f64 = 18.0;

/// Meters per foot
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Meters per statute mile
pub const METERS_PER_MILE: f64 = 1609.344;

/// Liters per US fluid ounce
pub const LITERS_PER_US_FLUID_OUNCE: f64 = 0.029_573_529_562_5;
