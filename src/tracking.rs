// ABOUTME: Goal progress tracking and status classification
// ABOUTME: Maintains a request-scoped working set and persists accumulated progress

//! Goal progress tracking over a request-scoped working set.
//!
//! A [`ProgressTracker`] is constructed per tracking session and owns its
//! working set; it is never shared across concurrent callers. Hydrate it
//! from a fresh repository read so accumulation starts from current stored
//! values. Accumulation reads the in-memory value, adds the delta, and
//! persists the absolute result, so it races with concurrent direct
//! progress writes to the same goal (a lost-update hazard the caller
//! accepts for a single session).

use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::constants::goal_progress::{ACHIEVED_PERCENTAGE, ON_TRACK_PERCENTAGE};
use crate::database::Database;
use crate::errors::{TrackerError, TrackerResult};
use crate::models::Goal;

/// Classification of a goal's completion state
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Completion percentage has reached 100
    Achieved,
    /// Completion percentage is at least 50 but below 100
    OnTrack,
    /// Completion percentage is below 50
    NeedsAttention,
}

impl GoalStatus {
    /// Encouragement line for user-facing summaries
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::Achieved => "Goal achieved! Congratulations!",
            Self::OnTrack => "Goal is on track. Keep going!",
            Self::NeedsAttention => "Goal needs attention. Stay focused!",
        }
    }
}

impl Display for GoalStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Achieved => write!(f, "achieved"),
            Self::OnTrack => write!(f, "on_track"),
            Self::NeedsAttention => write!(f, "needs_attention"),
        }
    }
}

/// Result of evaluating a whole working set
///
/// An empty working set yields the `NoGoals` sentinel rather than an empty
/// mapping, so "nothing to report" is distinguishable from "every goal
/// needs attention".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackSummary {
    /// The working set was empty
    NoGoals,
    /// Status per goal type
    Statuses(HashMap<String, GoalStatus>),
}

/// Evaluate a single goal's completion status
///
/// # Errors
///
/// Returns [`TrackerError::InvalidGoalState`] if the stored target value is
/// not a positive number, since the completion percentage would be
/// undefined. Goal creation validates targets, so this only occurs if the
/// record was corrupted outside the repository.
pub fn evaluate_goal(goal: &Goal) -> TrackerResult<GoalStatus> {
    if !goal.target_value.is_finite() || goal.target_value <= 0.0 {
        warn!("goal {} has unusable target {}", goal.id, goal.target_value);
        return Err(TrackerError::InvalidGoalState(goal.id));
    }

    let percentage = (goal.progress / goal.target_value) * 100.0;
    debug!("goal '{}' is at {percentage:.2}%", goal.goal_type);

    let status = if percentage >= ACHIEVED_PERCENTAGE {
        GoalStatus::Achieved
    } else if percentage >= ON_TRACK_PERCENTAGE {
        GoalStatus::OnTrack
    } else {
        GoalStatus::NeedsAttention
    };
    Ok(status)
}

/// Request-scoped progress tracker over an in-memory goal working set
pub struct ProgressTracker {
    database: Database,
    goals: Vec<Goal>,
}

impl ProgressTracker {
    /// Create a tracker with an empty working set
    #[must_use]
    pub fn new(database: Database) -> Self {
        Self {
            database,
            goals: Vec::new(),
        }
    }

    /// Create a tracker hydrated from a fresh read of the user's goals
    ///
    /// # Errors
    ///
    /// Returns an error if the repository read fails
    pub async fn hydrate(database: Database, user_id: i64) -> TrackerResult<Self> {
        let goals = database.list_goals(user_id).await?;
        Ok(Self { database, goals })
    }

    /// Add a goal to the working set
    pub fn add_goal(&mut self, goal: Goal) {
        info!("tracking goal '{}' ({})", goal.goal_type, goal.id);
        self.goals.push(goal);
    }

    /// The current working set
    #[must_use]
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Add a delta to a goal's progress and persist the absolute result
    ///
    /// The in-memory value only changes once the store accepts the update,
    /// so a rejected value (e.g. a delta driving progress negative) leaves
    /// both the working set and the record untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::GoalNotFound`] if the goal is not in the
    /// working set, or any error from the underlying progress update
    pub async fn accumulate_progress(&mut self, goal_id: i64, delta: f64) -> TrackerResult<()> {
        let goal = self
            .goals
            .iter_mut()
            .find(|goal| goal.id == goal_id)
            .ok_or(TrackerError::GoalNotFound(goal_id))?;

        let updated = goal.progress + delta;
        self.database.update_progress(goal_id, updated).await?;
        goal.progress = updated;

        info!("goal '{}' progress now {updated:.2}", goal.goal_type);
        Ok(())
    }

    /// Evaluate every goal in the working set
    ///
    /// # Errors
    ///
    /// Returns an error if any goal in the set fails evaluation
    pub fn track_all(&self) -> TrackerResult<TrackSummary> {
        if self.goals.is_empty() {
            warn!("no goals to track progress for");
            return Ok(TrackSummary::NoGoals);
        }

        let mut statuses = HashMap::new();
        for goal in &self.goals {
            let status = evaluate_goal(goal)?;
            statuses.insert(goal.goal_type.clone(), status);
        }
        Ok(TrackSummary::Statuses(statuses))
    }

    /// Remove a goal from the working set
    ///
    /// The persisted record is untouched; use
    /// [`Database::delete_goal`] to delete it from storage.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::GoalNotFound`] if the goal is not in the
    /// working set
    pub fn remove_goal(&mut self, goal_id: i64) -> TrackerResult<()> {
        let index = self
            .goals
            .iter()
            .position(|goal| goal.id == goal_id)
            .ok_or(TrackerError::GoalNotFound(goal_id))?;

        let removed = self.goals.remove(index);
        info!("goal '{}' removed from working set", removed.goal_type);
        Ok(())
    }
}
