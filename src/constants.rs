// ABOUTME: Application constants for significance thresholds, trend windows, and symptom vocabulary
// ABOUTME: Centralizes the classification boundaries so they are never repeated as magic numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Application constants and classification boundaries.
//!
//! The significance thresholds mirror the ones used by the upstream
//! statistics job (Fisher's exact test with Benjamini-Hochberg correction);
//! changing them changes which foods surface in reports, so they live here
//! rather than in runtime configuration.

/// Significance filtering and risk tier boundaries for association records
pub mod significance {
    /// Records with `p_value` at or above this value are never significant
    pub const MAX_SIGNIFICANT_P_VALUE: f64 = 0.2;

    /// Adjusted p-values strictly below this value classify a food as high risk
    pub const HIGH_RISK_ADJUSTED_P_VALUE: f64 = 0.05;

    /// Lower bound (inclusive) of the medium risk p-value band
    pub const MEDIUM_RISK_P_VALUE: f64 = 0.05;

    /// Lower bound (inclusive) of the low risk p-value band
    pub const LOW_RISK_P_VALUE: f64 = 0.1;

    /// Odds ratios must exceed this value to indicate a positive association
    pub const MIN_POSITIVE_ODDS_RATIO: f64 = 1.0;
}

/// Time window parameters for symptom trend bucketing
pub mod trend_windows {
    /// Length of each comparison window in days
    pub const WINDOW_DAYS: i64 = 7;

    /// Total lookback covered by the two comparison windows in days
    pub const LOOKBACK_DAYS: i64 = 2 * WINDOW_DAYS;
}

/// Symptom vocabulary shared by the trend calculator and the presentation layer
pub mod symptoms {
    /// Canonical symptom ordering used for trend output and the default view.
    ///
    /// This is the questionnaire order the tracker presents symptoms in, so
    /// reports line up with what the user tapped.
    pub const CANONICAL_ORDER: [&str; 6] = [
        "cramps",
        "bloating",
        "diarrhea",
        "constipation",
        "fullness",
        "mucus",
    ];
}

/// Service identifiers for logging and diagnostics
pub mod service_names {
    /// Primary service name used in structured log output
    pub const TUMMY_INSIGHTS: &str = "tummy-insights";
}

/// Environment variable names recognized by configuration loading
pub mod env_config {
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";

    /// Data provider backing the report engine (`rest` or `synthetic`)
    pub const DATA_SOURCE_PROVIDER: &str = "DATA_SOURCE_PROVIDER";

    /// Base URL of the tracker API the REST provider fetches from
    pub const DATA_SOURCE_BASE_URL: &str = "DATA_SOURCE_BASE_URL";

    /// Per-request timeout for upstream fetches, in seconds
    pub const DATA_SOURCE_TIMEOUT_SECS: &str = "DATA_SOURCE_TIMEOUT_SECS";
}

/// Default values applied when environment variables are absent
pub mod defaults {
    /// Default tracker API base URL for local development
    pub const DATA_SOURCE_BASE_URL: &str = "http://localhost:8000";

    /// Default upstream fetch timeout in seconds
    pub const DATA_SOURCE_TIMEOUT_SECS: u64 = 30;

    /// Default provider kind when none is configured
    pub const DATA_SOURCE_PROVIDER: &str = "rest";
}
