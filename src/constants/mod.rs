// ABOUTME: Application constants and configuration values
// ABOUTME: Centralizes defaults, limits, and classification thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitness Tracker contributors

//! Application-wide constants.
//!
//! Values that multiple modules share live here so they are named once.

/// Default values applied when the environment provides nothing
pub mod defaults {
    /// Service name used in structured log output
    pub const SERVICE_NAME: &str = "fitness-tracker";

    /// Database URL used when `DATABASE_URL` is unset
    pub const DATABASE_URL: &str = "sqlite:data/fitness_tracker.db";

    /// Default log level
    pub const LOG_LEVEL: &str = "info";
}

/// Fixed sizes for credential material
pub mod limits {
    /// Salt length in raw bytes (128 bits before hex encoding)
    pub const SALT_LENGTH_BYTES: usize = 16;

    /// Hex-encoded salt length
    pub const SALT_LENGTH_HEX: usize = 32;

    /// Hex-encoded SHA-256 digest length
    pub const HASH_LENGTH_HEX: usize = 64;
}

/// Thresholds for goal status classification
pub mod goal_progress {
    /// Completion percentage at or above which a goal is achieved
    pub const ACHIEVED_PERCENTAGE: f64 = 100.0;

    /// Completion percentage at or above which a goal is on track
    pub const ON_TRACK_PERCENTAGE: f64 = 50.0;
}
