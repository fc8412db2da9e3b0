// ABOUTME: Main library entry point for the Tummy Insights health report engine
// ABOUTME: Derives food-risk and symptom-trend views from meal tracking data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Tummy Insights Engine
//!
//! The insights engine behind a personal meal/symptom tracker. It consumes
//! per-ingredient statistical association records computed upstream and a
//! chronological meal log with free-text symptom tags, and produces two
//! derived views: a ranked "foods to watch" list with a risk
//! classification, and a week-over-week symptom-trend summary.
//!
//! ## Features
//!
//! - **Pure aggregation core**: the report is a pure function of
//!   `(associations, meals, now)`, directly unit-testable
//! - **Pluggable data sources**: REST and synthetic providers behind one
//!   async trait, fetched concurrently
//! - **Degrading fallback**: a failed upstream fetch yields an
//!   empty-but-well-formed half-report, never an error
//! - **Tolerant ingestion**: one malformed row never aborts a batch
//!
//! ## Architecture
//!
//! - **Providers**: opaque data sources for association and meal batches
//! - **Models**: raw wire rows and typed domain records
//! - **Intelligence**: normalize -> group+filter -> classify+sort pipeline
//! - **Config**: environment-driven runtime configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tummy_insights::intelligence::InsightsEngine;
//! use tummy_insights::providers::SyntheticProvider;
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = Arc::new(SyntheticProvider::new());
//!     let engine = InsightsEngine::new(provider);
//!
//!     // Always structurally valid, even with no upstream data
//!     let report = engine.generate_report("default_user").await;
//!     println!("{} foods to watch", report.foods_to_watch.len());
//! }
//! ```

/// Configuration management and environment parsing
pub mod config;

/// Application constants and classification boundaries
pub mod constants;

/// Unified error handling system
pub mod errors;

/// Health insights aggregation pipeline
pub mod intelligence;

/// Structured logging configuration
pub mod logging;

/// Common data structures for tracker data
pub mod models;

/// Data provider integrations
pub mod providers;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::InsightsReport;
