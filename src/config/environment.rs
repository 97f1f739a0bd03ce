// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables and runtime configuration parsing
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment-based configuration management

use std::env;

use serde::{Deserialize, Serialize};

use crate::constants::defaults;
use crate::logging::LoggingConfig;

/// Environment type for defaults and diagnostics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test harness
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Runtime configuration for the tracker core
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Database connection URL
    pub database_url: String,
    /// Deployment environment
    pub environment: Environment,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl TrackerConfig {
    /// Load configuration from environment variables
    ///
    /// `DATABASE_URL` and `ENVIRONMENT` fall back to development defaults
    /// when unset.
    #[must_use]
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| defaults::DATABASE_URL.into());

        let environment = Environment::from_str_or_default(
            &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        );

        Self {
            database_url,
            environment,
            logging: LoggingConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("production"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("prod"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("test"),
            Environment::Testing
        );
        assert_eq!(
            Environment::from_str_or_default("anything-else"),
            Environment::Development
        );
    }

    #[test]
    fn test_environment_display() {
        assert_eq!(Environment::Production.to_string(), "production");
        assert!(Environment::Production.is_production());
        assert!(!Environment::Development.is_production());
    }

    #[test]
    fn test_from_env_always_yields_a_database_url() {
        let config = TrackerConfig::from_env();
        assert!(!config.database_url.is_empty());
        assert!(!config.logging.level.is_empty());
    }
}
