// ABOUTME: REST data provider fetching association and meal-log rows from the tracker API
// ABOUTME: Wraps a reqwest client with per-request timeout and uniform error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # REST Provider
//!
//! Fetches raw rows from the tracker API over HTTP:
//!
//! - `GET {base_url}/health-report/{user_id}` — association rows
//! - `GET {base_url}/meal-history/{user_id}` — meal-log rows
//!
//! Both endpoints return JSON arrays. Timeouts and the base URL come from
//! [`DataSourceConfig`]; there is no retry at this layer.

use crate::config::DataSourceConfig;
use crate::errors::AppResult;
use crate::models::{RawAssociationRow, RawMealRow};
use crate::providers::errors::ProviderError;
use crate::providers::HealthDataProvider;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Provider name used in logs and error messages
const PROVIDER_NAME: &str = "rest";

/// REST provider against the tracker API
pub struct RestProvider {
    client: reqwest::Client,
    base_url: String,
}

impl RestProvider {
    /// Create a provider from data source configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed
    pub fn new(config: &DataSourceConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| ProviderError::Configuration {
                provider: PROVIDER_NAME,
                detail: err.to_string(),
            })?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Fetch a JSON array of rows from `{base_url}/{path}/{user_id}`
    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        path: &str,
        user_id: &str,
    ) -> Result<Vec<T>, ProviderError> {
        let url = format!("{}/{path}/{user_id}", self.base_url);
        debug!(%url, "fetching upstream rows");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ProviderError::Http {
                provider: PROVIDER_NAME,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                provider: PROVIDER_NAME,
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|err| ProviderError::InvalidPayload {
                provider: PROVIDER_NAME,
                detail: err.to_string(),
            })
    }
}

#[async_trait]
impl HealthDataProvider for RestProvider {
    async fn association_records(&self, user_id: &str) -> AppResult<Vec<RawAssociationRow>> {
        self.fetch_rows("health-report", user_id)
            .await
            .map_err(Into::into)
    }

    async fn meal_history(&self, user_id: &str) -> AppResult<Vec<RawMealRow>> {
        self.fetch_rows("meal-history", user_id)
            .await
            .map_err(Into::into)
    }

    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }
}
