// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Unified Error Handling
//!
//! Error taxonomy for the tracker core. Validation failures are detected
//! before any persistence attempt; not-found conditions are distinguished
//! from validation failures so the routing layer can map them to different
//! status codes; storage failures preserve the underlying `sqlx` cause.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by the credential store, goal repository, and tracker
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The username is already claimed by an existing credential record
    #[error("username '{0}' is already taken")]
    DuplicateUsername(String),

    /// No credential record matches the username
    #[error("user '{0}' does not exist")]
    UserNotFound(String),

    /// Goal target value failed validation before persistence
    #[error("target value must be a positive number, got {0}")]
    InvalidTarget(f64),

    /// Goal progress value failed validation before persistence
    #[error("progress cannot be negative, got {0}")]
    InvalidProgress(f64),

    /// No goal record matches the identifier
    #[error("goal with id {0} not found")]
    GoalNotFound(i64),

    /// A stored goal carries a non-positive target, so its completion
    /// percentage is undefined
    #[error("goal {0} has a non-positive target value")]
    InvalidGoalState(i64),

    /// Workout duration or calories failed validation before persistence
    #[error("workout duration and calories burned must be greater than zero")]
    InvalidWorkout,

    /// Underlying storage failure, cause preserved for diagnostics
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl TrackerError {
    /// Get the HTTP status code for this error
    ///
    /// The routing façade maps core errors to responses with this.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidTarget(_) | Self::InvalidProgress(_) | Self::InvalidWorkout => 400,
            Self::UserNotFound(_) | Self::GoalNotFound(_) => 404,
            Self::DuplicateUsername(_) => 409,
            Self::InvalidGoalState(_) | Self::Storage(_) => 500,
        }
    }

    /// Stable machine-readable code for this error
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateUsername(_) => "DUPLICATE_USERNAME",
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::InvalidTarget(_) => "INVALID_TARGET",
            Self::InvalidProgress(_) => "INVALID_PROGRESS",
            Self::GoalNotFound(_) => "GOAL_NOT_FOUND",
            Self::InvalidGoalState(_) => "INVALID_GOAL_STATE",
            Self::InvalidWorkout => "INVALID_WORKOUT",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }
}

/// Result type alias for convenience
pub type TrackerResult<T> = Result<T, TrackerError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl From<&TrackerError> for ErrorResponse {
    fn from(error: &TrackerError) -> Self {
        Self {
            code: error.code().to_owned(),
            message: error.to_string(),
        }
    }
}
