// ABOUTME: Configuration management module for runtime settings
// ABOUTME: Environment-only configuration, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitness Tracker contributors

//! Configuration module for the fitness tracker core

pub mod environment;

pub use environment::{Environment, TrackerConfig};
