// ABOUTME: Health Connect constants: permission prefix and integer code tables
// ABOUTME: Translates SDK enum codes (exercise types, sleep stages, meal types, ...) into labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

/// Prefix of every Health Connect read permission
pub const READ_PERMISSION_PREFIX: &str = "android.permission.health.READ_";

/// Label for an `ExerciseSessionRecord.EXERCISE_TYPE_*` code
#[must_use]
pub fn exercise_type_label(code: i32) -> String {
    let label = match code {
        0 => "Other workout",
        2 => "Badminton",
        4 => "Baseball",
        5 => "Basketball",
        8 => "Biking",
        9 => "Stationary biking",
        10 => "Boot camp",
        11 => "Boxing",
        13 => "Calisthenics",
        14 => "Cricket",
        16 => "Dancing",
        25 => "Elliptical",
        26 => "Exercise class",
        27 => "Fencing",
        28 => "American football",
        29 => "Australian football",
        31 => "Frisbee disc",
        32 => "Golf",
        33 => "Guided breathing",
        34 => "Gymnastics",
        35 => "Handball",
        36 => "High intensity interval training",
        37 => "Hiking",
        38 => "Ice hockey",
        39 => "Ice skating",
        44 => "Martial arts",
        46 => "Paddling",
        47 => "Paragliding",
        48 => "Pilates",
        50 => "Racquetball",
        51 => "Rock climbing",
        52 => "Roller hockey",
        53 => "Rowing",
        54 => "Rowing machine",
        55 => "Rugby",
        56 => "Running",
        57 => "Treadmill running",
        58 => "Sailing",
        59 => "Scuba diving",
        60 => "Skating",
        61 => "Skiing",
        62 => "Snowboarding",
        63 => "Snowshoeing",
        64 => "Soccer",
        65 => "Softball",
        66 => "Squash",
        68 => "Stair climbing",
        69 => "Stair climbing machine",
        70 => "Strength training",
        71 => "Stretching",
        72 => "Surfing",
        73 => "Open water swimming",
        74 => "Pool swimming",
        75 => "Table tennis",
        76 => "Tennis",
        78 => "Volleyball",
        79 => "Walking",
        80 => "Water polo",
        81 => "Weightlifting",
        82 => "Wheelchair",
        83 => "Yoga",
        other => return format!("Exercise type {other}"),
    };
    label.to_owned()
}

/// Label for a `SleepSessionRecord.STAGE_TYPE_*` code
#[must_use]
pub const fn sleep_stage_label(code: i32) -> &'static str {
    match code {
        1 => "Awake",
        2 => "Sleeping",
        3 => "Out of bed",
        4 => "Light",
        5 => "Deep",
        6 => "Rem",
        7 => "Awake in bed",
        _ => "Unknown",
    }
}

/// Label for a `BloodPressureRecord.BODY_POSITION_*` code
#[must_use]
pub const fn body_position_label(code: i32) -> &'static str {
    match code {
        1 => "Standing up",
        2 => "Sitting down",
        3 => "Lying down",
        4 => "Reclining",
        _ => "Unknown",
    }
}

/// Label for a `BloodGlucoseRecord.RELATION_TO_MEAL_*` code
#[must_use]
pub const fn relation_to_meal_label(code: i32) -> &'static str {
    match code {
        1 => "General",
        2 => "Fasting",
        3 => "Before meal",
        4 => "After meal",
        _ => "Unknown",
    }
}

/// Label for a `MealType.MEAL_TYPE_*` code
#[must_use]
pub const fn meal_type_label(code: i32) -> &'static str {
    match code {
        1 => "Breakfast",
        2 => "Lunch",
        3 => "Dinner",
        4 => "Snack",
        _ => "Unknown",
    }
}

/// Label for a `MenstruationFlowRecord.FLOW_*` code
#[must_use]
pub const fn flow_label(code: i32) -> &'static str {
    match code {
        1 => "Light",
        2 => "Medium",
        3 => "Heavy",
        _ => "Unknown",
    }
}

/// Label for an `OvulationTestRecord.RESULT_*` code
#[must_use]
pub const fn ovulation_result_label(code: i32) -> &'static str {
    match code {
        1 => "Positive",
        2 => "High",
        3 => "Negative",
        _ => "Inconclusive",
    }
}

/// Label for a `CervicalMucusRecord.APPEARANCE_*` code
#[must_use]
pub const fn mucus_appearance_label(code: i32) -> &'static str {
    match code {
        1 => "Dry",
        2 => "Sticky",
        3 => "Creamy",
        4 => "Watery",
        5 => "Egg white",
        6 => "Unusual",
        _ => "Unknown",
    }
}

/// Label for a `CervicalMucusRecord.SENSATION_*` code
#[must_use]
pub const fn mucus_sensation_label(code: i32) -> &'static str {
    match code {
        1 => "Light",
        2 => "Medium",
        3 => "Heavy",
        _ => "Unknown",
    }
}

/// Label for a `SexualActivityRecord.PROTECTION_USED_*` code
#[must_use]
pub const fn protection_used_label(code: i32) -> &'static str {
    match code {
        1 => "Protected",
        2 => "Unprotected",
        _ => "Unknown",
    }
}
