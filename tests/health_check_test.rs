// ABOUTME: Integration tests for storage health checks
// ABOUTME: Validates connectivity probes, schema checks, and file-backed creation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitness Tracker contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitness_tracker::database::Database;
use fitness_tracker::health::{check_table_exists, health_check, HealthStatus};

#[tokio::test]
async fn test_health_check_on_fresh_database() {
    let db = Database::new("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    let response = health_check(&db).await;
    assert_eq!(response.status, HealthStatus::Healthy);
    assert_eq!(response.checks.len(), 4);
    assert!(response
        .checks
        .iter()
        .all(|check| check.status == HealthStatus::Healthy));

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"status\":\"healthy\""));
    assert!(json.contains("database_connection"));
}

#[tokio::test]
async fn test_missing_table_fails_the_probe() {
    let db = Database::new("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    assert!(check_table_exists(&db, "users").await.is_ok());
    assert!(check_table_exists(&db, "no_such_table").await.is_err());
}

#[tokio::test]
async fn test_file_backed_database_is_created() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("tracker.db");
    let url = format!("sqlite:{}", path.display());

    let db = Database::new(&url).await.expect("Failed to create database");
    assert!(path.exists());

    // The schema is usable immediately
    db.create_user("alice", "s3cret").await.unwrap();
    assert!(db.authenticate("alice", "s3cret").await.unwrap());
}
