// ABOUTME: Health data provider abstractions for the meal tracker's upstream collaborators
// ABOUTME: Unifies REST and synthetic sources behind one async trait with a factory constructor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Data provider integrations for the insights engine.
//!
//! The engine treats its two inputs as opaque data sources: an
//! association-record batch and a meal-log batch, both keyed by user id.
//! Providers return raw wire rows; normalization happens in the
//! intelligence pipeline so one provider's quirks never leak into the
//! aggregation logic.

use crate::config::DataSourceConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{RawAssociationRow, RawMealRow};
use async_trait::async_trait;

/// Provider error types
pub mod errors;
/// REST provider against the tracker API
pub mod rest;
/// In-memory provider for development and testing
pub mod synthetic;

pub use errors::ProviderError;
pub use rest::RestProvider;
pub use synthetic::SyntheticProvider;

/// Unified interface over the tracker's upstream data collaborators.
///
/// The two fetches are independent; callers may issue them concurrently.
/// Implementations perform no retries — a failed fetch is reported as-is
/// and the report engine decides the fallback.
#[async_trait]
pub trait HealthDataProvider: Send + Sync {
    /// Fetch the per-ingredient association rows computed upstream
    async fn association_records(&self, user_id: &str) -> AppResult<Vec<RawAssociationRow>>;

    /// Fetch the chronological meal log
    async fn meal_history(&self, user_id: &str) -> AppResult<Vec<RawMealRow>>;

    /// Short provider name used in logs
    fn name(&self) -> &'static str;
}

/// Create a data provider instance based on the provider kind
///
/// # Errors
///
/// Returns an error if the provider kind is not supported or the provider
/// cannot be constructed from the given configuration
pub fn create_provider(
    kind: &str,
    config: &DataSourceConfig,
) -> AppResult<Box<dyn HealthDataProvider>> {
    match kind.to_lowercase().as_str() {
        "rest" => Ok(Box::new(RestProvider::new(config)?)),
        "synthetic" => Ok(Box::new(SyntheticProvider::new())),
        other => Err(AppError::invalid_input(format!(
            "Unknown provider: {other}. Currently supported: rest, synthetic"
        ))),
    }
}
