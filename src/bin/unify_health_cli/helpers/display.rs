// ABOUTME: Output formatting helpers for unify-health
// ABOUTME: Renders records as one summary line each and the permission sheet state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

use std::collections::BTreeSet;

use unify_health::models::{HealthRecord, RecordTime};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Print one record as `<when>  <type>  <summary>`
pub fn display_record(record: &HealthRecord) {
    let when = match record.timing() {
        RecordTime::At(time) => time.format(TIME_FORMAT).to_string(),
        RecordTime::Between(interval) => format!(
            "{} -> {}",
            interval.start().format(TIME_FORMAT),
            interval.end().format(TIME_FORMAT)
        ),
    };
    println!(
        "{when}  {}  {}",
        record.record_type().display_name(),
        record.summary()
    );
}

/// Print the permission sheet flag and the permissions the host UI should request
pub fn display_permission_sheet(visible: bool, permissions: &BTreeSet<String>) {
    println!("Permission sheet visible: {visible}");
    if permissions.is_empty() {
        println!("No permissions queued for the host UI");
        return;
    }
    println!("Permissions to request:");
    for permission in permissions {
        println!("   {permission}");
    }
}
