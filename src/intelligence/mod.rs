// ABOUTME: Health insights engine turning meal-tracking data into food-risk and trend reports
// ABOUTME: Hosts the normalization, aggregation, and orchestration pipeline stages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Intelligence Module
//!
//! The health insights pipeline: normalize raw upstream rows, aggregate
//! significant food/symptom associations into a ranked watch list, bucket
//! meal-log symptoms into week-over-week trends, and orchestrate the whole
//! report. All aggregation is pure; only the report engine touches I/O.

/// Foods-to-watch aggregation and risk classification
pub mod food_risk;
/// Tolerant parsing of raw provider rows into typed records
pub mod normalizer;
/// Report orchestration over the data providers
pub mod report_engine;
/// Week-over-week symptom trend calculation
pub mod symptom_trends;

pub use food_risk::{aggregate_food_risks, is_significant};
pub use normalizer::{normalize_associations, normalize_meals, split_tags};
pub use report_engine::{build_insights, InsightsEngine};
pub use symptom_trends::{calculate_symptom_trends, display_label};
