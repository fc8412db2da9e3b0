// ABOUTME: Food risk aggregation grouping significant association records into a ranked watch list
// ABOUTME: Applies the significance filter, tracks per-ingredient extremes, and classifies risk tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Foods-to-watch aggregation.
//!
//! Three-stage pipeline over association records: filter significant
//! records, group them by ingredient while tracking per-group extremes,
//! then classify and sort. Classification boundaries are half-open
//! intervals; see [`crate::constants::significance`].

use crate::constants::significance::{
    HIGH_RISK_ADJUSTED_P_VALUE, LOW_RISK_P_VALUE, MAX_SIGNIFICANT_P_VALUE, MEDIUM_RISK_P_VALUE,
    MIN_POSITIVE_ODDS_RATIO,
};
use crate::models::{AssociationRecord, FoodRiskEntry, RiskLevel};
use std::collections::{BTreeSet, HashMap};

/// Per-ingredient accumulator over significant records
#[derive(Debug, Default)]
struct IngredientGroup {
    /// Symptom names referenced by contributing records
    symptoms: BTreeSet<String>,
    /// Count of significant contributing records
    occurrences: u32,
    /// Minimum raw p-value seen
    min_p_value: Option<f64>,
    /// Minimum adjusted p-value seen; missing values do not update it
    min_p_value_adj: Option<f64>,
    /// Maximum odds ratio seen; missing values do not update it
    max_odds_ratio: Option<f64>,
}

impl IngredientGroup {
    fn absorb(&mut self, record: &AssociationRecord) {
        self.occurrences += 1;
        self.symptoms.insert(record.symptom.clone());
        self.min_p_value = fold_min(self.min_p_value, record.p_value);
        self.min_p_value_adj = fold_min(self.min_p_value_adj, record.p_value_adj);
        self.max_odds_ratio = fold_max(self.max_odds_ratio, record.odds_ratio);
    }

    /// Risk tier for this group, first match wins.
    ///
    /// `None` means the group is dropped: its records were individually
    /// significant but no tier rule applies (raw p-value below the medium
    /// band with no adjusted p-value under the high threshold).
    fn classify(&self) -> Option<RiskLevel> {
        if self
            .min_p_value_adj
            .is_some_and(|p| p < HIGH_RISK_ADJUSTED_P_VALUE)
        {
            return Some(RiskLevel::High);
        }
        match self.min_p_value {
            Some(p) if (MEDIUM_RISK_P_VALUE..LOW_RISK_P_VALUE).contains(&p) => {
                Some(RiskLevel::Medium)
            }
            Some(p) if (LOW_RISK_P_VALUE..MAX_SIGNIFICANT_P_VALUE).contains(&p) => {
                Some(RiskLevel::Low)
            }
            _ => None,
        }
    }
}

/// Whether a single record passes the significance filter.
///
/// A missing odds ratio is permissive (upstream could not compute one); a
/// missing p-value is disqualifying regardless of the odds ratio.
#[must_use]
pub fn is_significant(record: &AssociationRecord) -> bool {
    let odds_positive = record
        .odds_ratio
        .is_none_or(|ratio| ratio > MIN_POSITIVE_ODDS_RATIO);
    let p_value_in_range = record
        .p_value
        .is_some_and(|p| p < MAX_SIGNIFICANT_P_VALUE);
    odds_positive && p_value_in_range
}

/// Aggregate association records into the ranked foods-to-watch list.
///
/// Output is ordered by risk tier descending, then by occurrence count
/// descending; ties preserve the order ingredients were first encountered.
/// Records missing an ingredient or symptom are skipped. The result does
/// not depend on input order beyond that documented tie-break.
#[must_use]
pub fn aggregate_food_risks(records: &[AssociationRecord]) -> Vec<FoodRiskEntry> {
    let mut first_seen: Vec<String> = Vec::new();
    let mut groups: HashMap<String, IngredientGroup> = HashMap::new();

    for record in records {
        // Normalization already drops nameless rows; guarded again so the
        // aggregator is safe on records built by other callers
        if record.ingredient.is_empty() || record.symptom.is_empty() {
            continue;
        }
        if !is_significant(record) {
            continue;
        }
        groups
            .entry(record.ingredient.clone())
            .or_insert_with(|| {
                first_seen.push(record.ingredient.clone());
                IngredientGroup::default()
            })
            .absorb(record);
    }

    let mut entries: Vec<FoodRiskEntry> = first_seen
        .iter()
        .filter_map(|ingredient| {
            let group = groups.get(ingredient)?;
            let risk_level = group.classify()?;
            Some(FoodRiskEntry {
                name: ingredient.to_lowercase(),
                occurrences: group.occurrences,
                symptoms_triggered: group.symptoms.clone(),
                risk_level,
            })
        })
        .collect();

    // Stable sort keeps first-encounter order for equal (tier, occurrences)
    entries.sort_by(|a, b| {
        b.risk_level
            .rank()
            .cmp(&a.risk_level.rank())
            .then_with(|| b.occurrences.cmp(&a.occurrences))
    });
    entries
}

fn fold_min(current: Option<f64>, candidate: Option<f64>) -> Option<f64> {
    match (current, candidate) {
        (Some(cur), Some(new)) => Some(cur.min(new)),
        (None, Some(new)) => Some(new),
        (cur, None) => cur,
    }
}

fn fold_max(current: Option<f64>, candidate: Option<f64>) -> Option<f64> {
    match (current, candidate) {
        (Some(cur), Some(new)) => Some(cur.max(new)),
        (None, Some(new)) => Some(new),
        (cur, None) => cur,
    }
}
