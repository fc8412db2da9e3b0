// ABOUTME: Tolerant parsing layer turning raw provider rows into typed association and meal records
// ABOUTME: Isolates one malformed row's failure from the rest of the batch, never raising
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Record normalization for raw upstream rows.
//!
//! Pure parsing and validation: no I/O, no failure mode. A row that cannot
//! be normalized is dropped with a debug log; the batch always survives.
//! Absent numeric fields become `None`, never `0` or NaN.

use crate::models::{AssociationRecord, MealEntry, RawAssociationRow, RawMealRow};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::collections::BTreeSet;
use tracing::debug;

/// Timestamp layouts accepted for local-naive meal timestamps, tried in order
const NAIVE_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Normalize raw association rows into typed records.
///
/// Rows missing an ingredient or symptom (or carrying only whitespace) are
/// skipped. Non-finite numeric values are coerced to `None`.
#[must_use]
pub fn normalize_associations(rows: &[RawAssociationRow]) -> Vec<AssociationRecord> {
    rows.iter()
        .filter_map(|row| {
            let ingredient = non_empty(row.ingredient.as_deref())?;
            let symptom = non_empty(row.symptom.as_deref())?;
            Some(AssociationRecord {
                ingredient,
                symptom,
                odds_ratio: finite_or_none(row.odds_ratio),
                p_value: finite_or_none(row.p_value),
                p_value_adj: finite_or_none(row.p_value_adj),
            })
        })
        .collect()
}

/// Normalize raw meal-log rows into typed entries.
///
/// Rows without a parseable timestamp are skipped. The comma-joined symptom
/// field is split into a set; empty fragments produced by the split are
/// discarded. A row whose symptom field is absent yields an entry with an
/// empty set, which downstream consumers ignore.
#[must_use]
pub fn normalize_meals(rows: &[RawMealRow]) -> Vec<MealEntry> {
    rows.iter()
        .filter_map(|row| {
            let raw_ts = non_empty(row.date_time.as_deref())?;
            let Some(timestamp) = parse_timestamp(&raw_ts) else {
                debug!(date_time = %raw_ts, "skipping meal row with unparseable timestamp");
                return None;
            };
            Some(MealEntry {
                timestamp,
                symptoms: split_tags(row.symptoms.as_deref().unwrap_or_default()),
            })
        })
        .collect()
}

/// Split a delimiter-joined tag field into a deduplicated set.
///
/// Fragments are trimmed and empty fragments are dropped, so `"a, , b,"`
/// yields `{a, b}`.
#[must_use]
pub fn split_tags(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Parse a timestamp that may be RFC 3339 or a local-naive layout.
///
/// Local-naive timestamps are interpreted as UTC; the tracker records both
/// forms depending on client version.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    // Date-only rows come from the oldest client versions
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    None
}

/// Trim a string field, treating absent and whitespace-only as missing
fn non_empty(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Coerce non-finite floats to `None`; upstream serializers already null
/// NaN/Inf, this guards against sources that do not
fn finite_or_none(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
