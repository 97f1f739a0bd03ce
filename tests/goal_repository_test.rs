// ABOUTME: Integration tests for the goal repository
// ABOUTME: Validates goal creation, lookup, progress updates, deletion, and listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitness Tracker contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{NaiveDate, Utc};
use fitness_tracker::database::{test_utils, Database};
use fitness_tracker::errors::TrackerError;

async fn create_test_db() -> Database {
    test_utils::create_test_db()
        .await
        .expect("Failed to create test database")
}

fn end_of_year() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 31).expect("valid date")
}

#[tokio::test]
async fn test_create_and_get_goal() {
    let db = create_test_db().await;

    let goal_id = db
        .create_goal(1, "weight_loss", 20.0, end_of_year())
        .await
        .expect("Failed to create goal");

    let goal = db.get_goal(goal_id).await.expect("Failed to get goal");
    assert_eq!(goal.id, goal_id);
    assert_eq!(goal.user_id, 1);
    assert_eq!(goal.goal_type, "weight_loss");
    assert!((goal.target_value - 20.0).abs() < f64::EPSILON);
    assert!(goal.progress.abs() < f64::EPSILON);
    assert_eq!(goal.start_date, Utc::now().date_naive());
    assert_eq!(goal.end_date, end_of_year());
}

#[tokio::test]
async fn test_invalid_target_persists_nothing() {
    let db = create_test_db().await;

    let zero = db.create_goal(1, "weight_loss", 0.0, end_of_year()).await;
    assert!(matches!(zero, Err(TrackerError::InvalidTarget(_))));

    let negative = db.create_goal(1, "weight_loss", -5.0, end_of_year()).await;
    assert!(matches!(negative, Err(TrackerError::InvalidTarget(_))));

    assert!(db.list_goals(1).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_nonexistent_goal() {
    let db = create_test_db().await;

    let result = db.get_goal(999).await;
    assert!(matches!(result, Err(TrackerError::GoalNotFound(999))));
}

#[tokio::test]
async fn test_update_progress_is_absolute() {
    let db = create_test_db().await;

    let goal_id = db
        .create_goal(1, "running_hours", 100.0, end_of_year())
        .await
        .unwrap();

    db.update_progress(goal_id, 40.0).await.unwrap();
    db.update_progress(goal_id, 25.0).await.unwrap();

    let goal = db.get_goal(goal_id).await.unwrap();
    assert!((goal.progress - 25.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_negative_progress_leaves_stored_value_unchanged() {
    let db = create_test_db().await;

    let goal_id = db
        .create_goal(1, "running_hours", 100.0, end_of_year())
        .await
        .unwrap();
    db.update_progress(goal_id, 40.0).await.unwrap();

    let result = db.update_progress(goal_id, -1.0).await;
    assert!(matches!(result, Err(TrackerError::InvalidProgress(_))));

    let goal = db.get_goal(goal_id).await.unwrap();
    assert!((goal.progress - 40.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_update_progress_nonexistent_goal() {
    let db = create_test_db().await;

    let result = db.update_progress(999, 10.0).await;
    assert!(matches!(result, Err(TrackerError::GoalNotFound(999))));
}

#[tokio::test]
async fn test_delete_goal_is_idempotent() {
    let db = create_test_db().await;

    let goal_id = db
        .create_goal(1, "weight_loss", 20.0, end_of_year())
        .await
        .unwrap();

    db.delete_goal(goal_id).await.expect("First delete");
    db.delete_goal(goal_id).await.expect("Second delete");

    let result = db.get_goal(goal_id).await;
    assert!(matches!(result, Err(TrackerError::GoalNotFound(_))));
}

#[tokio::test]
async fn test_list_goals_insertion_order_and_scoping() {
    let db = create_test_db().await;

    let first = db
        .create_goal(1, "weight_loss", 20.0, end_of_year())
        .await
        .unwrap();
    let second = db
        .create_goal(1, "running_hours", 50.0, end_of_year())
        .await
        .unwrap();
    db.create_goal(2, "cycling_km", 300.0, end_of_year())
        .await
        .unwrap();

    let goals = db.list_goals(1).await.unwrap();
    assert_eq!(goals.len(), 2);
    assert_eq!(goals[0].id, first);
    assert_eq!(goals[1].id, second);
    assert!(goals.iter().all(|goal| goal.user_id == 1));
}
