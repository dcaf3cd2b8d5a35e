// ABOUTME: Ranged read command for unify-health
// ABOUTME: Reads the last N days of one record type and prints summaries or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

use chrono::Duration;
use unify_health::errors::AppResult;
use unify_health::models::HealthRecordType;
use unify_health::HealthService;

use crate::helpers::display::display_record;

/// Read `record_type` over the last `days` (or the service lookback)
pub async fn run(
    service: &HealthService,
    record_type: HealthRecordType,
    days: Option<u32>,
    json: bool,
) -> AppResult<()> {
    if !service.is_available().await {
        println!("{} is not available on this device", service.provider_name());
        return Ok(());
    }

    let window = days.map_or_else(|| service.lookback(), |d| Duration::days(i64::from(d)));
    let records = service.read_window(window, record_type).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    for record in &records {
        display_record(record);
    }
    println!("{}", HealthService::describe_result(record_type, &records));
    Ok(())
}
