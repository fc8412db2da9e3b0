// ABOUTME: Domain models for association records, meal entries, and derived insight views
// ABOUTME: Defines the raw provider wire rows alongside the typed records the engine consumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Common data structures for the insights engine.
//!
//! Two layers live here: the raw wire rows the data providers return
//! ([`RawAssociationRow`], [`RawMealRow`]), which tolerate any field being
//! absent, and the typed records the aggregation pipeline consumes
//! ([`AssociationRecord`], [`MealEntry`]) plus the derived output views.
//! Output types serialize in camelCase because that is the shape the
//! tracker's presentation layer renders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Raw per-ingredient association row as returned by the association source.
///
/// One row per ingredient x symptom pair observed upstream. Every field may
/// be absent or null; the upstream serializer also converts NaN/Inf values
/// to null before they reach us.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAssociationRow {
    /// Ingredient name as recorded in the meal log
    pub ingredient: Option<String>,
    /// Symptom name the ingredient was tested against
    pub symptom: Option<String>,
    /// Odds ratio from Fisher's exact test
    pub odds_ratio: Option<f64>,
    /// Raw p-value from Fisher's exact test
    pub p_value: Option<f64>,
    /// Benjamini-Hochberg adjusted p-value
    pub p_value_adj: Option<f64>,
    /// Upstream significance flag; informational only, the engine applies
    /// its own filter
    pub significant: Option<bool>,
}

/// Raw meal-log row as returned by the meal history source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMealRow {
    /// Meal timestamp string, RFC 3339 or local-naive
    pub date_time: Option<String>,
    /// Comma-joined ingredient names; not used by the insights engine
    pub ingredients: Option<String>,
    /// Comma-joined symptom tags reported for this meal
    pub symptoms: Option<String>,
}

/// A validated ingredient x symptom association record.
///
/// Immutable once fetched; the statistics behind it are computed upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationRecord {
    /// Ingredient name, case-preserved as received
    pub ingredient: String,
    /// Symptom name the association refers to
    pub symptom: String,
    /// Odds ratio; `None` when upstream could not compute one
    pub odds_ratio: Option<f64>,
    /// Raw p-value; `None` when upstream could not compute one
    pub p_value: Option<f64>,
    /// Adjusted p-value; `None` when upstream could not compute one
    pub p_value_adj: Option<f64>,
}

/// A single meal with the symptom tags reported alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealEntry {
    /// When the meal was logged
    pub timestamp: DateTime<Utc>,
    /// Deduplicated symptom tags; order within the set is irrelevant
    pub symptoms: BTreeSet<String>,
}

/// Risk tier assigned to a food in the "foods to watch" list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Adjusted p-value below the high-risk threshold
    High,
    /// Raw p-value within the medium band
    Medium,
    /// Raw p-value within the low band
    Low,
}

impl RiskLevel {
    /// Numeric rank for ordering; higher rank sorts first
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Direction of week-over-week change for a symptom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// More occurrences this week than last week
    Increasing,
    /// Fewer occurrences this week than last week
    Decreasing,
    /// Equal occurrence counts in both windows
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increasing => write!(f, "increasing"),
            Self::Decreasing => write!(f, "decreasing"),
            Self::Stable => write!(f, "stable"),
        }
    }
}

/// A food that passed the significance filter, ranked for the report.
///
/// Computed fresh on every report request and never persisted; existence of
/// an entry implies at least one contributing record passed the filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRiskEntry {
    /// Display name, lowercased
    pub name: String,
    /// Count of significant contributing records (not distinct symptoms)
    pub occurrences: u32,
    /// Symptom names referenced by the contributing records
    pub symptoms_triggered: BTreeSet<String>,
    /// Assigned risk tier
    pub risk_level: RiskLevel,
}

/// Week-over-week trend summary for one symptom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomTrendEntry {
    /// Raw symptom key as tagged in the meal log
    pub symptom_key: String,
    /// Questionnaire display label for the symptom
    pub label: String,
    /// Direction of change between the two windows
    pub trend: TrendDirection,
    /// Occurrences in the `[now-7d, now)` window
    pub this_week_count: u32,
    /// Occurrences in the `[now-14d, now-7d)` window
    pub last_week_count: u32,
    /// Absolute magnitude of the change between windows
    pub change: u32,
}

/// The merged insights report delivered to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsReport {
    /// Ranked foods-to-watch list; empty when no association is significant
    pub foods_to_watch: Vec<FoodRiskEntry>,
    /// Per-symptom trend entries, canonical questionnaire order first
    pub symptom_trends: Vec<SymptomTrendEntry>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_risk_level_rank_ordering() {
        assert!(RiskLevel::High.rank() > RiskLevel::Medium.rank());
        assert!(RiskLevel::Medium.rank() > RiskLevel::Low.rank());
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = InsightsReport {
            foods_to_watch: vec![FoodRiskEntry {
                name: "dairy".into(),
                occurrences: 1,
                symptoms_triggered: BTreeSet::from(["bloating".to_owned()]),
                risk_level: RiskLevel::High,
            }],
            symptom_trends: Vec::new(),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"foodsToWatch\""));
        assert!(json.contains("\"symptomTrends\""));
        assert!(json.contains("\"symptomsTriggered\""));
        assert!(json.contains("\"riskLevel\":\"high\""));
    }

    #[test]
    fn test_raw_rows_tolerate_missing_fields() {
        let row: RawAssociationRow = serde_json::from_str("{}").unwrap();
        assert!(row.ingredient.is_none());
        assert!(row.p_value.is_none());

        let meal: RawMealRow =
            serde_json::from_str(r#"{"date_time": "2025-06-01 12:00:00"}"#).unwrap();
        assert!(meal.symptoms.is_none());
    }
}
