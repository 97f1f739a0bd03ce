// ABOUTME: Storage health monitoring for operational visibility
// ABOUTME: Provides connectivity and schema probes for the service health endpoint
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Health check utilities
//!
//! The routing façade exposes these as its health endpoint. Checks run
//! synchronously per request; no background monitoring tasks exist.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::constants::defaults;
use crate::database::Database;
use crate::errors::TrackerResult;

/// Overall health status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// All checks passed
    Healthy,
    /// At least one check failed
    Unhealthy,
}

/// Individual component health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// Component name
    pub name: String,
    /// Component status
    pub status: HealthStatus,
    /// Status description
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: HealthStatus,
    /// Service name
    pub service: String,
    /// Service version
    pub version: String,
    /// Individual component checks
    pub checks: Vec<ComponentHealth>,
}

/// Verify that the database connection is active and functioning
///
/// # Errors
///
/// Returns an error if the probe query fails
pub async fn check_connection(database: &Database) -> TrackerResult<()> {
    sqlx::query("SELECT 1").execute(database.pool()).await?;
    Ok(())
}

/// Verify that a table exists in the database schema
///
/// # Errors
///
/// Returns an error if the table is absent or the query fails
pub async fn check_table_exists(database: &Database, table: &str) -> TrackerResult<()> {
    sqlx::query("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1")
        .bind(table)
        .fetch_one(database.pool())
        .await?;
    Ok(())
}

/// Run all storage health checks and aggregate the result
pub async fn health_check(database: &Database) -> HealthResponse {
    let mut checks = Vec::new();

    let connection = check_connection(database).await;
    checks.push(component("database_connection", &connection));

    for table in ["users", "goals", "workouts"] {
        let result = check_table_exists(database, table).await;
        checks.push(component(&format!("table_{table}"), &result));
    }

    let status = if checks
        .iter()
        .all(|check| check.status == HealthStatus::Healthy)
    {
        HealthStatus::Healthy
    } else {
        HealthStatus::Unhealthy
    };

    HealthResponse {
        status,
        service: defaults::SERVICE_NAME.to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        checks,
    }
}

fn component(name: &str, result: &TrackerResult<()>) -> ComponentHealth {
    match result {
        Ok(()) => ComponentHealth {
            name: name.to_owned(),
            status: HealthStatus::Healthy,
            message: "ok".to_owned(),
        },
        Err(err) => {
            error!("health check '{name}' failed: {err}");
            ComponentHealth {
                name: name.to_owned(),
                status: HealthStatus::Unhealthy,
                message: err.to_string(),
            }
        }
    }
}
