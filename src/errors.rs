// ABOUTME: Unified error handling with stable error codes for all insight engine modules
// ABOUTME: Defines AppError, ErrorCode, and the AppResult alias used across the crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Unified Error Handling System
//!
//! Centralized error types for the Tummy Insights engine. Every fallible
//! public API returns [`AppResult`]; error codes are stable identifiers the
//! presentation layer can match on without parsing messages.
//!
//! Note that report generation itself never surfaces these errors: a failed
//! upstream fetch degrades to an empty half-report (see
//! [`crate::intelligence::report_engine`]), and a malformed row is skipped
//! during normalization. `AppError` covers the remaining surfaces:
//! configuration, provider construction, and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// An upstream data collaborator failed or timed out
    #[serde(rename = "UPSTREAM_UNAVAILABLE")]
    UpstreamUnavailable,
    /// The provided input is invalid
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Configuration is missing or invalid
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    /// An unexpected internal error occurred
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    pub const fn description(self) -> &'static str {
        match self {
            Self::UpstreamUnavailable => "An upstream data source is currently unavailable",
            Self::InvalidInput => "The provided input is invalid",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Upstream data source failure
    pub fn upstream_unavailable(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::UpstreamUnavailable,
            format!("{}: {}", source_name.into(), message.into()),
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
