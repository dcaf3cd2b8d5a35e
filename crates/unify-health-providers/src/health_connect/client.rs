// ABOUTME: Health Connect client binding and an in-memory implementation
// ABOUTME: Record kinds, SDK status, permission lookup and time-ranged record reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::constants::provider_names::HEALTH_CONNECT;
use crate::errors::{ProviderError, ProviderResult};
use crate::models::Interval;

use super::constants::READ_PERMISSION_PREFIX;
use super::records::HealthConnectRecord;

/// Availability of the Health Connect SDK on the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SdkStatus {
    /// SDK installed and usable
    #[default]
    Available,
    /// SDK not present on the device
    Unavailable,
    /// SDK present but the provider app must be updated first
    ProviderUpdateRequired,
}

/// Health Connect record classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    /// `StepsRecord`
    Steps,
    /// `DistanceRecord`
    Distance,
    /// `FloorsClimbedRecord`
    FloorsClimbed,
    /// `ActiveCaloriesBurnedRecord`
    ActiveCaloriesBurned,
    /// `ExerciseSessionRecord`
    ExerciseSession,
    /// `WeightRecord`
    Weight,
    /// `HeightRecord`
    Height,
    /// `BodyFatRecord`
    BodyFat,
    /// `LeanBodyMassRecord`
    LeanBodyMass,
    /// `BodyTemperatureRecord`
    BodyTemperature,
    /// `BasalMetabolicRateRecord`
    BasalMetabolicRate,
    /// `HeartRateRecord`
    HeartRate,
    /// `HeartRateVariabilityRmssdRecord`
    HeartRateVariabilityRmssd,
    /// `BloodPressureRecord`
    BloodPressure,
    /// `BloodGlucoseRecord`
    BloodGlucose,
    /// `OxygenSaturationRecord`
    OxygenSaturation,
    /// `RespiratoryRateRecord`
    RespiratoryRate,
    /// `Vo2MaxRecord`
    Vo2Max,
    /// `SleepSessionRecord`
    SleepSession,
    /// `HydrationRecord`
    Hydration,
    /// `NutritionRecord`
    Nutrition,
    /// `MenstruationFlowRecord`
    MenstruationFlow,
    /// `OvulationTestRecord`
    OvulationTest,
    /// `CervicalMucusRecord`
    CervicalMucus,
    /// `SexualActivityRecord`
    SexualActivity,
    /// `IntermenstrualBleedingRecord`
    IntermenstrualBleeding,
}

impl RecordKind {
    /// Suffix of the read permission for this record class
    #[must_use]
    pub const fn permission_suffix(self) -> &'static str {
        match self {
            Self::Steps => "STEPS",
            Self::Distance => "DISTANCE",
            Self::FloorsClimbed => "FLOORS_CLIMBED",
            Self::ActiveCaloriesBurned => "ACTIVE_CALORIES_BURNED",
            Self::ExerciseSession => "EXERCISE",
            Self::Weight => "WEIGHT",
            Self::Height => "HEIGHT",
            Self::BodyFat => "BODY_FAT",
            Self::LeanBodyMass => "LEAN_BODY_MASS",
            Self::BodyTemperature => "BODY_TEMPERATURE",
            Self::BasalMetabolicRate => "BASAL_METABOLIC_RATE",
            Self::HeartRate => "HEART_RATE",
            Self::HeartRateVariabilityRmssd => "HEART_RATE_VARIABILITY",
            Self::BloodPressure => "BLOOD_PRESSURE",
            Self::BloodGlucose => "BLOOD_GLUCOSE",
            Self::OxygenSaturation => "OXYGEN_SATURATION",
            Self::RespiratoryRate => "RESPIRATORY_RATE",
            Self::Vo2Max => "VO2_MAX",
            Self::SleepSession => "SLEEP",
            Self::Hydration => "HYDRATION",
            Self::Nutrition => "NUTRITION",
            Self::MenstruationFlow => "MENSTRUATION",
            Self::OvulationTest => "OVULATION_TEST",
            Self::CervicalMucus => "CERVICAL_MUCUS",
            Self::SexualActivity => "SEXUAL_ACTIVITY",
            Self::IntermenstrualBleeding => "INTERMENSTRUAL_BLEEDING",
        }
    }

    /// Full read permission string, e.g. `android.permission.health.READ_STEPS`
    #[must_use]
    pub fn read_permission(self) -> String {
        format!("{READ_PERMISSION_PREFIX}{}", self.permission_suffix())
    }

    /// Record class of a native record
    #[must_use]
    pub const fn of(record: &HealthConnectRecord) -> Self {
        match record {
            HealthConnectRecord::Steps(_) => Self::Steps,
            HealthConnectRecord::Distance(_) => Self::Distance,
            HealthConnectRecord::FloorsClimbed(_) => Self::FloorsClimbed,
            HealthConnectRecord::ActiveCaloriesBurned(_) => Self::ActiveCaloriesBurned,
            HealthConnectRecord::ExerciseSession(_) => Self::ExerciseSession,
            HealthConnectRecord::Weight(_) => Self::Weight,
            HealthConnectRecord::Height(_) => Self::Height,
            HealthConnectRecord::BodyFat(_) => Self::BodyFat,
            HealthConnectRecord::LeanBodyMass(_) => Self::LeanBodyMass,
            HealthConnectRecord::BodyTemperature(_) => Self::BodyTemperature,
            HealthConnectRecord::BasalMetabolicRate(_) => Self::BasalMetabolicRate,
            HealthConnectRecord::HeartRate(_) => Self::HeartRate,
            HealthConnectRecord::HeartRateVariabilityRmssd(_) => Self::HeartRateVariabilityRmssd,
            HealthConnectRecord::BloodPressure(_) => Self::BloodPressure,
            HealthConnectRecord::BloodGlucose(_) => Self::BloodGlucose,
            HealthConnectRecord::OxygenSaturation(_) => Self::OxygenSaturation,
            HealthConnectRecord::RespiratoryRate(_) => Self::RespiratoryRate,
            HealthConnectRecord::Vo2Max(_) => Self::Vo2Max,
            HealthConnectRecord::SleepSession(_) => Self::SleepSession,
            HealthConnectRecord::Hydration(_) => Self::Hydration,
            HealthConnectRecord::Nutrition(_) => Self::Nutrition,
            HealthConnectRecord::MenstruationFlow(_) => Self::MenstruationFlow,
            HealthConnectRecord::OvulationTest(_) => Self::OvulationTest,
            HealthConnectRecord::CervicalMucus(_) => Self::CervicalMucus,
            HealthConnectRecord::SexualActivity(_) => Self::SexualActivity,
            HealthConnectRecord::IntermenstrualBleeding(_) => Self::IntermenstrualBleeding,
        }
    }
}

/// Narrow view of the Health Connect client used by the adapter
#[async_trait]
pub trait HealthConnectClient: Send + Sync {
    /// SDK availability on this device
    async fn sdk_status(&self) -> SdkStatus;

    /// Read permissions the user has granted
    async fn granted_permissions(&self) -> ProviderResult<BTreeSet<String>>;

    /// Records of `kind` overlapping `range`
    async fn read_records(
        &self,
        kind: RecordKind,
        range: Interval,
    ) -> ProviderResult<Vec<HealthConnectRecord>>;
}

/// Serialized form of an [`InMemoryHealthConnectClient`]
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HealthConnectFixture {
    /// SDK status to report
    #[serde(default)]
    pub sdk_status: SdkStatus,
    /// Permissions already granted
    #[serde(default)]
    pub granted_permissions: BTreeSet<String>,
    /// Stored records
    #[serde(default)]
    pub records: Vec<HealthConnectRecord>,
}

/// Health Connect client backed by process memory
///
/// Stands in for the platform client in tests and the developer CLI.
#[derive(Debug, Default)]
pub struct InMemoryHealthConnectClient {
    status: RwLock<SdkStatus>,
    granted: RwLock<BTreeSet<String>>,
    records: RwLock<Vec<HealthConnectRecord>>,
    fail_reads: AtomicBool,
}

impl InMemoryHealthConnectClient {
    /// Empty, available store with no permissions granted
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a JSON [`HealthConnectFixture`]
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidFixture`] if the JSON does not parse.
    pub fn from_fixture_json(json: &str) -> ProviderResult<Self> {
        let fixture: HealthConnectFixture =
            serde_json::from_str(json).map_err(|e| ProviderError::InvalidFixture {
                provider: HEALTH_CONNECT.to_owned(),
                details: e.to_string(),
            })?;
        Ok(Self {
            status: RwLock::new(fixture.sdk_status),
            granted: RwLock::new(fixture.granted_permissions),
            records: RwLock::new(fixture.records),
            fail_reads: AtomicBool::new(false),
        })
    }

    /// Change the reported SDK status
    pub fn set_status(&self, status: SdkStatus) {
        *self.status.write().unwrap_or_else(PoisonError::into_inner) = status;
    }

    /// Store a record
    pub fn insert(&self, record: HealthConnectRecord) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }

    /// Grant permissions, as the OS dialog would
    pub fn grant<I, S>(&self, permissions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.granted
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(permissions.into_iter().map(Into::into));
    }

    /// Make every subsequent read fail with a native error
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl HealthConnectClient for InMemoryHealthConnectClient {
    async fn sdk_status(&self) -> SdkStatus {
        *self.status.read().unwrap_or_else(PoisonError::into_inner)
    }

    async fn granted_permissions(&self) -> ProviderResult<BTreeSet<String>> {
        Ok(self
            .granted
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    async fn read_records(
        &self,
        kind: RecordKind,
        range: Interval,
    ) -> ProviderResult<Vec<HealthConnectRecord>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(ProviderError::native(
                HEALTH_CONNECT,
                "RemoteException: read failed",
            ));
        }
        let permission = kind.read_permission();
        if !self
            .granted
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&permission)
        {
            return Err(ProviderError::native(
                HEALTH_CONNECT,
                format!("SecurityException: caller lacks {permission}"),
            ));
        }

        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        Ok(records
            .iter()
            .filter(|record| RecordKind::of(record) == kind)
            .filter(|record| match record.end() {
                Some(end) => record.start() < range.end() && range.start() < end,
                None => range.contains(record.start()),
            })
            .cloned()
            .collect())
    }
}
