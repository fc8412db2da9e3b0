// ABOUTME: Structured error types for health data provider operations
// ABOUTME: Maps transport, status, payload, and configuration failures into one domain enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Provider error types.
//!
//! Everything a data provider can fail with collapses into
//! [`ProviderError`]; the report engine only distinguishes "this half of
//! the report has no data" from configuration mistakes, which is what the
//! [`AppError`] conversion encodes.

use crate::errors::AppError;
use thiserror::Error;

/// Errors raised by health data providers
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The HTTP request could not be completed
    #[error("{provider}: request failed: {source}")]
    Http {
        /// Provider that raised the error
        provider: &'static str,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The upstream responded with a non-success status
    #[error("{provider}: unexpected status {status}")]
    Status {
        /// Provider that raised the error
        provider: &'static str,
        /// HTTP status code received
        status: u16,
    },

    /// The response body could not be decoded as the expected row shape
    #[error("{provider}: invalid response payload: {detail}")]
    InvalidPayload {
        /// Provider that raised the error
        provider: &'static str,
        /// Decoder failure detail
        detail: String,
    },

    /// The provider was misconfigured or its internal state is unusable
    #[error("{provider}: configuration error: {detail}")]
    Configuration {
        /// Provider that raised the error
        provider: &'static str,
        /// Configuration failure detail
        detail: String,
    },
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        match &error {
            ProviderError::Http { provider, .. }
            | ProviderError::Status { provider, .. }
            | ProviderError::InvalidPayload { provider, .. } => {
                Self::upstream_unavailable(*provider, error.to_string())
            }
            ProviderError::Configuration { .. } => Self::config(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_status_maps_to_upstream_unavailable() {
        let app_error: AppError = ProviderError::Status {
            provider: "rest",
            status: 502,
        }
        .into();
        assert_eq!(app_error.code, ErrorCode::UpstreamUnavailable);
        assert!(app_error.message.contains("502"));
    }

    #[test]
    fn test_configuration_maps_to_config_error() {
        let app_error: AppError = ProviderError::Configuration {
            provider: "synthetic",
            detail: "lock poisoned".into(),
        }
        .into();
        assert_eq!(app_error.code, ErrorCode::ConfigError);
    }
}
