// ABOUTME: Core data models for the fitness tracker
// ABOUTME: Defines User, Goal, Workout and related fundamental data structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitness Tracker contributors

//! # Data Models
//!
//! Core data structures shared by the storage layer and the tracker.
//!
//! ## Design Principles
//!
//! - **Serializable**: All models support JSON serialization for the
//!   routing façade
//! - **Type Safe**: Strong typing at the API boundary replaces the runtime
//!   shape checks a dynamic implementation would need

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stored credential record
///
/// The plaintext password is never persisted; `hashed_password` is the
/// salted digest computed by [`crate::crypto::hash_password`]. Both `salt`
/// and `hashed_password` are replaced together on password change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier
    pub id: i64,
    /// Unique username, the primary lookup key
    pub username: String,
    /// Per-account random salt, hex encoded
    pub salt: String,
    /// Salted SHA-256 digest of the password, hex encoded
    pub hashed_password: String,
}

/// A user's target for a measurable quantity with a deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Store-assigned identifier
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// Free-form category, e.g. "weight_loss"
    pub goal_type: String,
    /// Target value, always positive
    pub target_value: f64,
    /// Current progress, never negative
    pub progress: f64,
    /// Date the goal was created
    pub start_date: NaiveDate,
    /// Caller-supplied deadline
    pub end_date: NaiveDate,
}

/// A logged workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Store-assigned identifier
    pub id: i64,
    /// User who performed the workout
    pub user_id: i64,
    /// Type of workout, e.g. "running"
    pub workout_type: String,
    /// Duration in minutes
    pub duration_minutes: i64,
    /// Estimated calories burned
    pub calories_burned: f64,
    /// Date the workout took place
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_serialization_round_trip() {
        let goal = Goal {
            id: 1,
            user_id: 1,
            goal_type: "weight_loss".into(),
            target_value: 20.0,
            progress: 12.0,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 31).expect("valid date"),
        };

        let json = serde_json::to_string(&goal).expect("serialize goal");
        assert!(json.contains("weight_loss"));
        assert!(json.contains("2025-12-31"));

        let back: Goal = serde_json::from_str(&json).expect("deserialize goal");
        assert_eq!(back, goal);
    }
}
