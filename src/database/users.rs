// ABOUTME: Credential store database operations
// ABOUTME: Handles account creation, authentication, and password changes

use sqlx::Row;
use tracing::{debug, info, warn};

use super::Database;
use crate::crypto::{generate_salt, hash_password, verify_password};
use crate::errors::{TrackerError, TrackerResult};
use crate::models::User;

impl Database {
    /// Create the users table
    pub(super) async fn migrate_users(&self) -> TrackerResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE,
                salt TEXT NOT NULL,
                hashed_password TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Create a new user and store their credentials
    ///
    /// A fresh random salt is generated per call; only the salted digest is
    /// persisted. Uniqueness is enforced by the storage layer's UNIQUE
    /// constraint so two concurrent creations cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::DuplicateUsername`] if the username is
    /// already taken, or [`TrackerError::Storage`] on query failure
    pub async fn create_user(&self, username: &str, password: &str) -> TrackerResult<()> {
        let salt = generate_salt();
        let hashed_password = hash_password(password, &salt);

        sqlx::query(
            r"
            INSERT INTO users (username, salt, hashed_password)
            VALUES (?1, ?2, ?3)
            ",
        )
        .bind(username)
        .bind(&salt)
        .bind(&hashed_password)
        .execute(&self.pool)
        .await
        .map_err(|err| {
            if err
                .as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation())
            {
                TrackerError::DuplicateUsername(username.to_owned())
            } else {
                TrackerError::Storage(err)
            }
        })?;

        info!("created account for user '{username}'");
        Ok(())
    }

    /// Authenticate a user by validating their credentials
    ///
    /// An unknown username returns `false` rather than an error, so the
    /// response does not reveal whether the account exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn authenticate(&self, username: &str, password: &str) -> TrackerResult<bool> {
        let row = sqlx::query("SELECT salt, hashed_password FROM users WHERE username = ?1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            debug!("authentication attempt for unknown username");
            return Ok(false);
        };

        let salt: String = row.get("salt");
        let hashed_password: String = row.get("hashed_password");
        Ok(verify_password(password, &salt, &hashed_password))
    }

    /// Change a user's password
    ///
    /// Generates a new salt and digest and replaces both fields in a single
    /// update, so the record is never observable with a stale salt.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::UserNotFound`] if no record matched the
    /// username, or [`TrackerError::Storage`] on query failure
    pub async fn change_password(&self, username: &str, new_password: &str) -> TrackerResult<()> {
        let salt = generate_salt();
        let hashed_password = hash_password(new_password, &salt);

        let result =
            sqlx::query("UPDATE users SET salt = ?1, hashed_password = ?2 WHERE username = ?3")
                .bind(&salt)
                .bind(&hashed_password)
                .bind(username)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            warn!("password change for nonexistent user '{username}'");
            return Err(TrackerError::UserNotFound(username.to_owned()));
        }

        info!("password changed for user '{username}'");
        Ok(())
    }

    /// Get a user record by username
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user(&self, username: &str) -> TrackerResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, username, salt, hashed_password FROM users WHERE username = ?1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| User {
            id: row.get("id"),
            username: row.get("username"),
            salt: row.get("salt"),
            hashed_password: row.get("hashed_password"),
        }))
    }
}
