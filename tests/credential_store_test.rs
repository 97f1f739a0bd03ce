// ABOUTME: Integration tests for the credential store
// ABOUTME: Validates account creation, authentication, and password changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitness Tracker contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitness_tracker::database::Database;
use fitness_tracker::errors::TrackerError;

async fn create_test_db() -> Database {
    Database::new("sqlite::memory:")
        .await
        .expect("Failed to create test database")
}

#[tokio::test]
async fn test_authenticate_after_create() {
    let db = create_test_db().await;

    db.create_user("alice", "s3cret")
        .await
        .expect("Failed to create user");

    assert!(db.authenticate("alice", "s3cret").await.unwrap());
}

#[tokio::test]
async fn test_wrong_password_rejected() {
    let db = create_test_db().await;

    db.create_user("alice", "s3cret")
        .await
        .expect("Failed to create user");

    assert!(!db.authenticate("alice", "not-the-password").await.unwrap());
}

#[tokio::test]
async fn test_unknown_username_is_false_not_error() {
    let db = create_test_db().await;

    // Unknown username and wrong password are indistinguishable
    assert!(!db.authenticate("nobody", "whatever").await.unwrap());
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let db = create_test_db().await;

    db.create_user("alice", "first")
        .await
        .expect("Failed to create user");

    let result = db.create_user("alice", "completely-different").await;
    assert!(matches!(
        result,
        Err(TrackerError::DuplicateUsername(name)) if name == "alice"
    ));

    // The original credentials still work
    assert!(db.authenticate("alice", "first").await.unwrap());
}

#[tokio::test]
async fn test_change_password_rotates_salt_and_hash() {
    let db = create_test_db().await;

    db.create_user("alice", "old-password")
        .await
        .expect("Failed to create user");
    let before = db.get_user("alice").await.unwrap().expect("User exists");

    db.change_password("alice", "new-password")
        .await
        .expect("Failed to change password");
    let after = db.get_user("alice").await.unwrap().expect("User exists");

    assert!(!db.authenticate("alice", "old-password").await.unwrap());
    assert!(db.authenticate("alice", "new-password").await.unwrap());

    // Both fields were replaced together
    assert_ne!(before.salt, after.salt);
    assert_ne!(before.hashed_password, after.hashed_password);
}

#[tokio::test]
async fn test_change_password_unknown_user() {
    let db = create_test_db().await;

    let result = db.change_password("nobody", "irrelevant").await;
    assert!(matches!(
        result,
        Err(TrackerError::UserNotFound(name)) if name == "nobody"
    ));
    assert!(db.get_user("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_plaintext_never_persisted() {
    let db = create_test_db().await;

    db.create_user("alice", "s3cret")
        .await
        .expect("Failed to create user");
    let user = db.get_user("alice").await.unwrap().expect("User exists");

    assert_eq!(user.salt.len(), 32);
    assert_eq!(user.hashed_password.len(), 64);
    assert_ne!(user.hashed_password, "s3cret");
}

#[tokio::test]
async fn test_same_password_gets_distinct_salts() {
    let db = create_test_db().await;

    db.create_user("alice", "shared-password").await.unwrap();
    db.create_user("bob", "shared-password").await.unwrap();

    let alice = db.get_user("alice").await.unwrap().expect("User exists");
    let bob = db.get_user("bob").await.unwrap().expect("User exists");

    assert_ne!(alice.salt, bob.salt);
    assert_ne!(alice.hashed_password, bob.hashed_password);
}
