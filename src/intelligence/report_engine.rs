// ABOUTME: Report orchestration fetching association and meal batches concurrently with fallback
// ABOUTME: Exposes the pure build_insights transform plus the provider-backed InsightsEngine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Insights report orchestration.
//!
//! [`build_insights`] is the pure core: a referentially transparent
//! function of `(associations, meals, now)`. [`InsightsEngine`] wraps it
//! with concurrent upstream fetches and per-half fallback — a failed fetch
//! degrades that half of the report to its empty/default form instead of
//! propagating. No error ever escapes the public entry points; callers
//! always receive a structurally valid report.

use crate::intelligence::food_risk::aggregate_food_risks;
use crate::intelligence::normalizer::{normalize_associations, normalize_meals};
use crate::intelligence::symptom_trends::calculate_symptom_trends;
use crate::models::{AssociationRecord, InsightsReport, MealEntry};
use crate::providers::HealthDataProvider;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Build an insights report from already-normalized inputs.
///
/// Pure and synchronous: the two aggregations are independent and share no
/// state. Running it twice on the same input yields identical output.
#[must_use]
pub fn build_insights(
    associations: &[AssociationRecord],
    meals: &[MealEntry],
    now: DateTime<Utc>,
) -> InsightsReport {
    InsightsReport {
        foods_to_watch: aggregate_food_risks(associations),
        symptom_trends: calculate_symptom_trends(meals, now),
    }
}

/// Provider-backed report engine.
///
/// One logical request per report: both upstream batches are fetched
/// concurrently, then aggregation runs as a one-shot pure transform. No
/// state crosses report computations.
pub struct InsightsEngine {
    provider: Arc<dyn HealthDataProvider>,
}

impl InsightsEngine {
    /// Create an engine backed by the given data provider
    #[must_use]
    pub fn new(provider: Arc<dyn HealthDataProvider>) -> Self {
        Self { provider }
    }

    /// Generate a report for a user against the current instant
    pub async fn generate_report(&self, user_id: &str) -> InsightsReport {
        self.generate_report_at(user_id, Utc::now()).await
    }

    /// Generate a report against an injected reference instant.
    ///
    /// A failed fetch falls back to an empty input for that half: no foods
    /// to watch, and the canonical default view for trends. The report is
    /// always structurally valid.
    pub async fn generate_report_at(&self, user_id: &str, now: DateTime<Utc>) -> InsightsReport {
        let (association_rows, meal_rows) = tokio::join!(
            self.provider.association_records(user_id),
            self.provider.meal_history(user_id),
        );

        let associations = match association_rows {
            Ok(rows) => normalize_associations(&rows),
            Err(err) => {
                warn!(
                    provider = self.provider.name(),
                    user_id,
                    error = %err,
                    "association fetch failed, reporting without foods to watch"
                );
                Vec::new()
            }
        };
        let meals = match meal_rows {
            Ok(rows) => normalize_meals(&rows),
            Err(err) => {
                warn!(
                    provider = self.provider.name(),
                    user_id,
                    error = %err,
                    "meal history fetch failed, reporting default symptom view"
                );
                Vec::new()
            }
        };
        debug!(
            associations = associations.len(),
            meals = meals.len(),
            "normalized upstream batches"
        );

        let report = build_insights(&associations, &meals, now);
        info!(
            user_id,
            foods = report.foods_to_watch.len(),
            trends = report.symptom_trends.len(),
            "insights report generated"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::models::RiskLevel;
    use chrono::Duration;
    use std::collections::BTreeSet;

    #[test]
    fn test_build_insights_is_idempotent() {
        let now = Utc::now();
        let associations = vec![AssociationRecord {
            ingredient: "Dairy".into(),
            symptom: "bloating".into(),
            odds_ratio: Some(2.5),
            p_value: Some(0.03),
            p_value_adj: Some(0.04),
        }];
        let meals = vec![MealEntry {
            timestamp: now - Duration::days(2),
            symptoms: BTreeSet::from(["bloating".to_owned()]),
        }];

        let first = build_insights(&associations, &meals, now);
        let second = build_insights(&associations, &meals, now);
        assert_eq!(first, second);
        assert_eq!(first.foods_to_watch[0].risk_level, RiskLevel::High);
    }
}
