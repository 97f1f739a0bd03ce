// ABOUTME: Test utilities for database operations and in-memory test database creation
// ABOUTME: Provides helper functions for creating isolated test database instances
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright (c) 2026 Fitness Tracker contributors

use super::Database;
use crate::errors::TrackerResult;

/// Create a test database instance
///
/// # Errors
///
/// Returns an error if database initialization fails
pub async fn create_test_db() -> TrackerResult<Database> {
    // Use a simple in-memory database - each connection gets its own isolated instance
    let database_url = "sqlite::memory:";
    Database::new(database_url).await
}
