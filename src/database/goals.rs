// ABOUTME: Goal repository database operations
// ABOUTME: Handles goal creation, lookup, progress updates, and deletion

use chrono::{NaiveDate, Utc};
use sqlx::Row;
use tracing::{debug, info, warn};

use super::Database;
use crate::errors::{TrackerError, TrackerResult};
use crate::models::Goal;

impl Database {
    /// Create the goals table and indexes
    pub(super) async fn migrate_goals(&self) -> TrackerResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS goals (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                goal_type TEXT NOT NULL,
                target_value REAL NOT NULL,
                progress REAL NOT NULL DEFAULT 0,
                start_date TEXT NOT NULL,
                end_date TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_goals_user_id ON goals(user_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Create a new goal with zero progress, starting today
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidTarget`] if the target value is not a
    /// positive finite number; nothing is persisted in that case
    pub async fn create_goal(
        &self,
        user_id: i64,
        goal_type: &str,
        target_value: f64,
        end_date: NaiveDate,
    ) -> TrackerResult<i64> {
        if !target_value.is_finite() || target_value <= 0.0 {
            return Err(TrackerError::InvalidTarget(target_value));
        }

        let start_date = Utc::now().date_naive();
        let result = sqlx::query(
            r"
            INSERT INTO goals (user_id, goal_type, target_value, progress, start_date, end_date)
            VALUES (?1, ?2, ?3, 0, ?4, ?5)
            ",
        )
        .bind(user_id)
        .bind(goal_type)
        .bind(target_value)
        .bind(start_date)
        .bind(end_date)
        .execute(&self.pool)
        .await?;

        let goal_id = result.last_insert_rowid();
        info!("goal {goal_id} ({goal_type}) created for user {user_id}");
        Ok(goal_id)
    }

    /// Retrieve a goal by its identifier
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::GoalNotFound`] if no record matches
    pub async fn get_goal(&self, goal_id: i64) -> TrackerResult<Goal> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, goal_type, target_value, progress, start_date, end_date
            FROM goals WHERE id = ?1
            ",
        )
        .bind(goal_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| Self::row_to_goal(&row)).ok_or_else(|| {
            warn!("goal {goal_id} not found");
            TrackerError::GoalNotFound(goal_id)
        })
    }

    /// Overwrite the stored progress of a goal with an absolute value
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidProgress`] if the value is negative or
    /// not finite (the stored value is left unchanged), or
    /// [`TrackerError::GoalNotFound`] if the goal does not exist
    pub async fn update_progress(&self, goal_id: i64, progress: f64) -> TrackerResult<()> {
        if !progress.is_finite() || progress < 0.0 {
            return Err(TrackerError::InvalidProgress(progress));
        }

        let result = sqlx::query("UPDATE goals SET progress = ?1 WHERE id = ?2")
            .bind(progress)
            .bind(goal_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            warn!("progress update for nonexistent goal {goal_id}");
            return Err(TrackerError::GoalNotFound(goal_id));
        }

        info!("progress for goal {goal_id} set to {progress:.2}");
        Ok(())
    }

    /// Hard-delete a goal
    ///
    /// Deleting a nonexistent id is not an error at the storage level.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn delete_goal(&self, goal_id: i64) -> TrackerResult<()> {
        let result = sqlx::query("DELETE FROM goals WHERE id = ?1")
            .bind(goal_id)
            .execute(&self.pool)
            .await?;

        debug!(
            "delete of goal {goal_id} removed {} row(s)",
            result.rows_affected()
        );
        Ok(())
    }

    /// Retrieve all goals for a user, in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_goals(&self, user_id: i64) -> TrackerResult<Vec<Goal>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, goal_type, target_value, progress, start_date, end_date
            FROM goals WHERE user_id = ?1 ORDER BY id ASC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let goals: Vec<Goal> = rows.iter().map(Self::row_to_goal).collect();
        debug!("retrieved {} goals for user {user_id}", goals.len());
        Ok(goals)
    }

    fn row_to_goal(row: &sqlx::sqlite::SqliteRow) -> Goal {
        Goal {
            id: row.get("id"),
            user_id: row.get("user_id"),
            goal_type: row.get("goal_type"),
            target_value: row.get("target_value"),
            progress: row.get("progress"),
            start_date: row.get("start_date"),
            end_date: row.get("end_date"),
        }
    }
}
