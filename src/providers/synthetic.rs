// ABOUTME: In-memory synthetic data provider for development, demos, and testing
// ABOUTME: Serves injectable association and meal rows without network or credentials
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Synthetic Provider
//!
//! A provider backed by in-memory rows for development, CI, and
//! demonstrations. Unlike the REST provider it requires no running tracker
//! API, supports dynamic row injection, and returns deterministic data.
//!
//! All data access is protected by `RwLock` so one instance can safely
//! serve concurrent report generations.

use crate::errors::AppResult;
use crate::models::{RawAssociationRow, RawMealRow};
use crate::providers::errors::ProviderError;
use crate::providers::HealthDataProvider;
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Provider name used in logs and error messages
const PROVIDER_NAME: &str = "synthetic";

/// Synthetic health data provider for development and testing
#[derive(Default)]
pub struct SyntheticProvider {
    /// Pre-loaded association rows, served to every user id
    associations: Arc<RwLock<Vec<RawAssociationRow>>>,
    /// Pre-loaded meal-log rows, served to every user id
    meals: Arc<RwLock<Vec<RawMealRow>>>,
}

impl SyntheticProvider {
    /// Create an empty synthetic provider
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider pre-loaded with the given rows
    #[must_use]
    pub fn with_data(associations: Vec<RawAssociationRow>, meals: Vec<RawMealRow>) -> Self {
        Self {
            associations: Arc::new(RwLock::new(associations)),
            meals: Arc::new(RwLock::new(meals)),
        }
    }

    /// Inject an association row
    ///
    /// # Errors
    ///
    /// Returns an error if the internal lock is poisoned
    pub fn push_association(&self, row: RawAssociationRow) -> AppResult<()> {
        self.associations
            .write()
            .map_err(|_| poisoned_lock("associations"))?
            .push(row);
        Ok(())
    }

    /// Inject a meal-log row
    ///
    /// # Errors
    ///
    /// Returns an error if the internal lock is poisoned
    pub fn push_meal(&self, row: RawMealRow) -> AppResult<()> {
        self.meals
            .write()
            .map_err(|_| poisoned_lock("meals"))?
            .push(row);
        Ok(())
    }
}

/// Lock poisoning is converted to a configuration error rather than a panic
fn poisoned_lock(store: &str) -> crate::errors::AppError {
    ProviderError::Configuration {
        provider: PROVIDER_NAME,
        detail: format!("{store} store lock poisoned"),
    }
    .into()
}

#[async_trait]
impl HealthDataProvider for SyntheticProvider {
    async fn association_records(&self, _user_id: &str) -> AppResult<Vec<RawAssociationRow>> {
        Ok(self
            .associations
            .read()
            .map_err(|_| poisoned_lock("associations"))?
            .clone())
    }

    async fn meal_history(&self, _user_id: &str) -> AppResult<Vec<RawMealRow>> {
        Ok(self.meals.read().map_err(|_| poisoned_lock("meals"))?.clone())
    }

    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }
}
