// ABOUTME: Main library entry point for the fitness tracker core
// ABOUTME: Provides credential authentication, goal storage, and progress tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitness Tracker contributors

#![deny(unsafe_code)]

//! # Fitness Tracker Core
//!
//! Credential and goal tracking core for a personal fitness tracking service.
//! The crate owns the invariants of the system: salted credential storage,
//! validated goal persistence, and progress classification. The HTTP routing
//! layer and the external exercise catalog are consumers of this crate, not
//! part of it.
//!
//! ## Architecture
//!
//! - **Models**: Common data structures (`User`, `Goal`, `Workout`)
//! - **Database**: `SQLite`-backed stores for credentials, goals, and workouts
//! - **Tracking**: Request-scoped progress evaluation over a goal working set
//! - **Health**: Storage connectivity probes for liveness reporting
//! - **Config**: Environment-based runtime configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitness_tracker::database::Database;
//! use fitness_tracker::errors::TrackerResult;
//!
//! #[tokio::main]
//! async fn main() -> TrackerResult<()> {
//!     let db = Database::new("sqlite:fitness_tracker.db").await?;
//!     db.create_user("alice", "s3cret").await?;
//!     assert!(db.authenticate("alice", "s3cret").await?);
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the HTTP façade and integration tests (tests/).

/// Environment-based configuration management
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Salt generation and password digest utilities
pub mod crypto;

/// Credential, goal, and workout storage over `SQLite`
pub mod database;

/// Unified error handling with storage-error preservation and HTTP mapping
pub mod errors;

/// Health checks for storage connectivity and schema presence
pub mod health;

/// Logging configuration and structured output
pub mod logging;

/// Core data models
pub mod models;

/// Request-scoped goal progress tracking and status classification
pub mod tracking;
