// ABOUTME: Unit tests for environment-driven configuration loading
// ABOUTME: Validates env var parsing, defaults, and validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use tummy_insights::config::{Environment, InsightsConfig};

fn clear_env() {
    std::env::remove_var("ENVIRONMENT");
    std::env::remove_var("DATA_SOURCE_PROVIDER");
    std::env::remove_var("DATA_SOURCE_BASE_URL");
    std::env::remove_var("DATA_SOURCE_TIMEOUT_SECS");
}

#[test]
#[serial]
fn test_defaults_applied_when_env_absent() {
    clear_env();

    let config = InsightsConfig::from_env().unwrap();

    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.data_source.provider, "rest");
    assert_eq!(config.data_source.base_url, "http://localhost:8000");
    assert_eq!(config.data_source.timeout_secs, 30);
}

#[test]
#[serial]
fn test_environment_variable_overrides() {
    clear_env();
    std::env::set_var("ENVIRONMENT", "production");
    std::env::set_var("DATA_SOURCE_PROVIDER", "synthetic");
    std::env::set_var("DATA_SOURCE_BASE_URL", "https://tracker.example.com");
    std::env::set_var("DATA_SOURCE_TIMEOUT_SECS", "5");

    let config = InsightsConfig::from_env().unwrap();

    assert!(config.environment.is_production());
    assert_eq!(config.data_source.provider, "synthetic");
    assert_eq!(config.data_source.base_url, "https://tracker.example.com");
    assert_eq!(config.data_source.timeout_secs, 5);

    clear_env();
}

#[test]
#[serial]
fn test_non_numeric_timeout_rejected() {
    clear_env();
    std::env::set_var("DATA_SOURCE_TIMEOUT_SECS", "soon");

    assert!(InsightsConfig::from_env().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_malformed_base_url_rejected() {
    clear_env();
    std::env::set_var("DATA_SOURCE_BASE_URL", "tracker.example.com");

    assert!(InsightsConfig::from_env().is_err());

    clear_env();
}
