// ABOUTME: Configuration management for environment-driven runtime settings
// ABOUTME: Re-exports the environment configuration types used across the crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration management and environment parsing

/// Environment-based configuration loading and validation
pub mod environment;

pub use environment::{DataSourceConfig, Environment, InsightsConfig};
