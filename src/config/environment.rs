// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration management

use crate::constants::{defaults, env_config};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Environment type for deployment-specific behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated testing
    Testing,
}

impl Environment {
    /// Parse from string with fallback to development
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
    pub const fn is_production(&self) -> bool {
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

/// Configuration for the upstream data source the report engine reads from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSourceConfig {
    /// Provider kind (`rest` or `synthetic`)
    pub provider: String,
    /// Base URL of the tracker API
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DATA_SOURCE_PROVIDER.to_owned(),
            base_url: defaults::DATA_SOURCE_BASE_URL.to_owned(),
            timeout_secs: defaults::DATA_SOURCE_TIMEOUT_SECS,
        }
    }
}

/// Top-level runtime configuration for the insights engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsightsConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Upstream data source settings
    pub data_source: DataSourceConfig,
}

impl InsightsConfig {
    /// Load configuration from environment variables, applying defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but invalid (malformed
    /// base URL, non-numeric or zero timeout)
    pub fn from_env() -> AppResult<Self> {
        let environment = Environment::from_str_or_default(
            &env::var(env_config::ENVIRONMENT).unwrap_or_default(),
        );

        let provider = env::var(env_config::DATA_SOURCE_PROVIDER)
            .unwrap_or_else(|_| defaults::DATA_SOURCE_PROVIDER.to_owned());

        let base_url = env::var(env_config::DATA_SOURCE_BASE_URL)
            .unwrap_or_else(|_| defaults::DATA_SOURCE_BASE_URL.to_owned());

        let timeout_secs = match env::var(env_config::DATA_SOURCE_TIMEOUT_SECS) {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                AppError::config(format!(
                    "{} must be a positive integer, got {raw:?}",
                    env_config::DATA_SOURCE_TIMEOUT_SECS
                ))
            })?,
            Err(_) => defaults::DATA_SOURCE_TIMEOUT_SECS,
        };

        let config = Self {
            environment,
            data_source: DataSourceConfig {
                provider,
                base_url,
                timeout_secs,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not a valid absolute URL or the
    /// timeout is zero
    pub fn validate(&self) -> AppResult<()> {
        Url::parse(&self.data_source.base_url).map_err(|err| {
            AppError::config(format!(
                "invalid data source base URL {:?}: {err}",
                self.data_source.base_url
            ))
        })?;
        if self.data_source.timeout_secs == 0 {
            return Err(AppError::config("data source timeout must be non-zero"));
        }
        Ok(())
    }
}
