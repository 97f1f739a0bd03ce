// ABOUTME: Workout log database operations
// ABOUTME: Handles per-user workout entries and history retrieval

use chrono::{NaiveDate, Utc};
use sqlx::Row;
use tracing::{debug, info};

use super::Database;
use crate::errors::{TrackerError, TrackerResult};
use crate::models::Workout;

impl Database {
    /// Create the workouts table and indexes
    pub(super) async fn migrate_workouts(&self) -> TrackerResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                workout_type TEXT NOT NULL,
                duration_minutes INTEGER NOT NULL,
                calories_burned REAL NOT NULL,
                date TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_workouts_user_id ON workouts(user_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Log a workout for a user
    ///
    /// The date defaults to today when the caller omits it.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidWorkout`] if the duration or calories
    /// are not positive; nothing is persisted in that case
    pub async fn log_workout(
        &self,
        user_id: i64,
        workout_type: &str,
        duration_minutes: i64,
        calories_burned: f64,
        date: Option<NaiveDate>,
    ) -> TrackerResult<i64> {
        if duration_minutes <= 0 || !calories_burned.is_finite() || calories_burned <= 0.0 {
            return Err(TrackerError::InvalidWorkout);
        }

        let date = date.unwrap_or_else(|| Utc::now().date_naive());
        let result = sqlx::query(
            r"
            INSERT INTO workouts (user_id, workout_type, duration_minutes, calories_burned, date)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(user_id)
        .bind(workout_type)
        .bind(duration_minutes)
        .bind(calories_burned)
        .bind(date)
        .execute(&self.pool)
        .await?;

        let workout_id = result.last_insert_rowid();
        info!("workout {workout_id} ({workout_type}) logged for user {user_id}");
        Ok(workout_id)
    }

    /// Retrieve all workouts for a user, in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_workouts(&self, user_id: i64) -> TrackerResult<Vec<Workout>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, workout_type, duration_minutes, calories_burned, date
            FROM workouts WHERE user_id = ?1 ORDER BY id ASC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let workouts: Vec<Workout> = rows
            .iter()
            .map(|row| Workout {
                id: row.get("id"),
                user_id: row.get("user_id"),
                workout_type: row.get("workout_type"),
                duration_minutes: row.get("duration_minutes"),
                calories_burned: row.get("calories_burned"),
                date: row.get("date"),
            })
            .collect();

        debug!("retrieved {} workouts for user {user_id}", workouts.len());
        Ok(workouts)
    }
}
