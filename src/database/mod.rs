// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Database Management
//!
//! This module provides storage for the fitness tracker core. It handles
//! credential records, goal records, and the workout log over a shared
//! `SQLite` connection pool. Each operation acquires a pooled connection for
//! its own scope, so connections are released on every exit path.

mod goals;
mod users;
mod workouts;

/// Helpers for constructing isolated test database instances
pub mod test_utils;

use sqlx::{Pool, Sqlite, SqlitePool};
use tracing::info;

use crate::errors::TrackerResult;

/// Database manager for credential, goal, and workout storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or the
    /// schema migration fails
    pub async fn new(database_url: &str) -> TrackerResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        let db = Self { pool };
        db.migrate().await?;

        info!("database ready at {database_url}");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// Migrations are idempotent `CREATE TABLE IF NOT EXISTS` statements.
    ///
    /// # Errors
    ///
    /// Returns an error if any table or index creation fails
    pub async fn migrate(&self) -> TrackerResult<()> {
        self.migrate_users().await?;
        self.migrate_goals().await?;
        self.migrate_workouts().await?;
        Ok(())
    }
}
