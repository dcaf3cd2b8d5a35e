// ABOUTME: Permission flow command for unify-health
// ABOUTME: Requests authorization, shows the permission sheet state, then acknowledges it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors

use std::collections::BTreeSet;

use tracing::info;
use unify_health::config::ServiceConfig;
use unify_health::errors::{AppError, AppResult};
use unify_health::models::HealthRecordType;
use unify_health::HealthService;

use crate::helpers::display::display_permission_sheet;

/// Run the permission flow for `types`, or every type when none are given
pub async fn run(
    service: &HealthService,
    config: &ServiceConfig,
    types: Vec<HealthRecordType>,
) -> AppResult<()> {
    let types: BTreeSet<HealthRecordType> = if types.is_empty() {
        if !config.request_all_types {
            return Err(AppError::invalid_input(
                "no --types given and UNIFY_HEALTH_REQUEST_ALL_TYPES is disabled",
            ));
        }
        HealthRecordType::ALL.into_iter().collect()
    } else {
        types.into_iter().collect()
    };

    if !service.is_available().await {
        println!("{} is not available on this device", service.provider_name());
        return Ok(());
    }

    let granted = service.has_permissions(&types).await;
    println!("Permissions granted before request: {granted}");

    info!(types = types.len(), "Requesting authorization");
    service.request_authorization(&types).await?;
    display_permission_sheet(
        service.is_permission_sheet_visible(),
        &service.permissions_to_request(),
    );

    if service.is_permission_sheet_visible() {
        service.hide_permission_sheet();
        println!("Permission sheet acknowledged");
    }

    let granted = service.has_permissions(&types).await;
    println!("Permissions granted after request: {granted}");
    Ok(())
}
