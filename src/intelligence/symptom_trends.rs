// ABOUTME: Week-over-week symptom trend bucketing with canonical ordering and default-view fallback
// ABOUTME: Counts symptom occurrences in two half-open windows and derives direction and magnitude
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Symptom trend calculation.
//!
//! Buckets meal-log symptom occurrences into `[now-7d, now)` and
//! `[now-14d, now-7d)` windows against an injectable reference instant,
//! then derives a direction and an absolute change per symptom. With no
//! activity in either window the canonical six-symptom default view is
//! emitted instead of an empty list.

use crate::constants::symptoms::CANONICAL_ORDER;
use crate::constants::trend_windows::{LOOKBACK_DAYS, WINDOW_DAYS};
use crate::models::{MealEntry, SymptomTrendEntry, TrendDirection};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// Occurrence counts for one symptom across the two comparison windows
#[derive(Debug, Default, Clone, Copy)]
struct WindowCounts {
    this_week: u32,
    last_week: u32,
}

/// Calculate week-over-week symptom trends from a meal log.
///
/// `now` is the reference instant defining the two half-open windows; a
/// meal timestamped exactly at `now` falls outside both. Meals with an
/// empty symptom set contribute nothing. Output is ordered by the
/// canonical questionnaire order first; symptom keys outside it follow in
/// first-encounter order.
#[must_use]
pub fn calculate_symptom_trends(meals: &[MealEntry], now: DateTime<Utc>) -> Vec<SymptomTrendEntry> {
    let this_week_start = now - Duration::days(WINDOW_DAYS);
    let last_week_start = now - Duration::days(LOOKBACK_DAYS);

    let mut first_seen: Vec<String> = Vec::new();
    let mut counts: HashMap<String, WindowCounts> = HashMap::new();

    for meal in meals {
        let in_this_week = meal.timestamp >= this_week_start && meal.timestamp < now;
        let in_last_week = meal.timestamp >= last_week_start && meal.timestamp < this_week_start;
        if !in_this_week && !in_last_week {
            continue;
        }
        for symptom in &meal.symptoms {
            let entry = counts.entry(symptom.clone()).or_insert_with(|| {
                first_seen.push(symptom.clone());
                WindowCounts::default()
            });
            if in_this_week {
                entry.this_week += 1;
            } else {
                entry.last_week += 1;
            }
        }
    }

    let mut entries: Vec<SymptomTrendEntry> = first_seen
        .iter()
        .filter_map(|key| {
            let window = counts.get(key).copied()?;
            (window.this_week > 0 || window.last_week > 0)
                .then(|| trend_entry(key, window.this_week, window.last_week))
        })
        .collect();

    // Stable sort: canonical symptoms by questionnaire index, everything
    // else after them in first-encounter order
    entries.sort_by_key(|entry| canonical_rank(&entry.symptom_key));

    if entries.is_empty() {
        return default_view();
    }
    entries
}

/// Questionnaire display label for a symptom key.
///
/// Unknown keys fall back to their lowercased form so free-text tags still
/// render reasonably.
#[must_use]
pub fn display_label(symptom_key: &str) -> String {
    match symptom_key {
        "cramps" | "cramping" => "abdominal pain or cramps".to_owned(),
        "bloating" => "excess gas and bloating".to_owned(),
        "diarrhea" => "diarrhea".to_owned(),
        "constipation" => "constipation".to_owned(),
        "fullness" | "unfinished" => "sensation of incomplete evacuation".to_owned(),
        "mucus" => "mucus in stool".to_owned(),
        "nausea" => "nausea".to_owned(),
        other => other.to_lowercase(),
    }
}

fn trend_entry(symptom_key: &str, this_week: u32, last_week: u32) -> SymptomTrendEntry {
    let (trend, change) = if last_week == 0 && this_week > 0 {
        (TrendDirection::Increasing, this_week)
    } else if this_week > last_week {
        (TrendDirection::Increasing, this_week - last_week)
    } else if this_week < last_week {
        (TrendDirection::Decreasing, last_week - this_week)
    } else {
        (TrendDirection::Stable, 0)
    };

    SymptomTrendEntry {
        symptom_key: symptom_key.to_owned(),
        label: display_label(symptom_key),
        trend,
        this_week_count: this_week,
        last_week_count: last_week,
        change,
    }
}

fn canonical_rank(symptom_key: &str) -> usize {
    CANONICAL_ORDER
        .iter()
        .position(|canonical| *canonical == symptom_key)
        .unwrap_or(usize::MAX)
}

/// Default view emitted when neither window saw any symptom activity
fn default_view() -> Vec<SymptomTrendEntry> {
    CANONICAL_ORDER
        .iter()
        .map(|key| SymptomTrendEntry {
            symptom_key: (*key).to_owned(),
            label: display_label(key),
            trend: TrendDirection::Stable,
            this_week_count: 0,
            last_week_count: 0,
            change: 0,
        })
        .collect()
}
