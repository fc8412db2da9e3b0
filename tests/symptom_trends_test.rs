// ABOUTME: Integration tests for week-over-week symptom trend calculation
// ABOUTME: Validates window edges, trend direction rules, ordering, and the default view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeSet;
use tummy_insights::intelligence::calculate_symptom_trends;
use tummy_insights::models::{MealEntry, TrendDirection};

fn reference_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-06-15T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn meal(now: DateTime<Utc>, days_ago: i64, symptoms: &[&str]) -> MealEntry {
    MealEntry {
        timestamp: now - Duration::days(days_ago),
        symptoms: symptoms
            .iter()
            .map(|s| (*s).to_owned())
            .collect::<BTreeSet<_>>(),
    }
}

#[test]
fn test_equal_counts_are_stable() {
    let now = reference_now();
    let meals = vec![
        meal(now, 2, &["bloating"]),
        meal(now, 10, &["bloating"]),
    ];
    let trends = calculate_symptom_trends(&meals, now);

    let bloating = trends.iter().find(|t| t.symptom_key == "bloating").unwrap();
    assert_eq!(bloating.this_week_count, 1);
    assert_eq!(bloating.last_week_count, 1);
    assert_eq!(bloating.trend, TrendDirection::Stable);
    assert_eq!(bloating.change, 0);
}

#[test]
fn test_no_meals_yields_canonical_default_view() {
    let now = reference_now();
    let trends = calculate_symptom_trends(&[], now);

    let keys: Vec<&str> = trends.iter().map(|t| t.symptom_key.as_str()).collect();
    assert_eq!(
        keys,
        ["cramps", "bloating", "diarrhea", "constipation", "fullness", "mucus"]
    );
    for trend in &trends {
        assert_eq!(trend.this_week_count, 0);
        assert_eq!(trend.last_week_count, 0);
        assert_eq!(trend.trend, TrendDirection::Stable);
        assert_eq!(trend.change, 0);
    }
}

#[test]
fn test_activity_outside_windows_yields_default_view() {
    let now = reference_now();
    // Plenty of symptoms, all older than two weeks
    let meals = vec![
        meal(now, 20, &["bloating", "cramps"]),
        meal(now, 30, &["diarrhea"]),
    ];
    let trends = calculate_symptom_trends(&meals, now);
    assert_eq!(trends.len(), 6);
    assert!(trends.iter().all(|t| t.trend == TrendDirection::Stable));
}

#[test]
fn test_increasing_from_zero_last_week() {
    let now = reference_now();
    let meals = vec![meal(now, 1, &["cramps"]), meal(now, 3, &["cramps"])];
    let trends = calculate_symptom_trends(&meals, now);

    let cramps = trends.iter().find(|t| t.symptom_key == "cramps").unwrap();
    assert_eq!(cramps.trend, TrendDirection::Increasing);
    assert_eq!(cramps.change, 2);
    assert_eq!(cramps.last_week_count, 0);
}

#[test]
fn test_increasing_and_decreasing_changes() {
    let now = reference_now();
    let meals = vec![
        // diarrhea: 2 this week vs 1 last week -> increasing by 1
        meal(now, 1, &["diarrhea"]),
        meal(now, 2, &["diarrhea"]),
        meal(now, 9, &["diarrhea"]),
        // bloating: 1 this week vs 3 last week -> decreasing by 2
        meal(now, 3, &["bloating"]),
        meal(now, 8, &["bloating"]),
        meal(now, 10, &["bloating"]),
        meal(now, 12, &["bloating"]),
    ];
    let trends = calculate_symptom_trends(&meals, now);

    let diarrhea = trends.iter().find(|t| t.symptom_key == "diarrhea").unwrap();
    assert_eq!(diarrhea.trend, TrendDirection::Increasing);
    assert_eq!(diarrhea.change, 1);

    let bloating = trends.iter().find(|t| t.symptom_key == "bloating").unwrap();
    assert_eq!(bloating.trend, TrendDirection::Decreasing);
    assert_eq!(bloating.change, 2);
    assert_eq!(bloating.this_week_count, 1);
    assert_eq!(bloating.last_week_count, 3);
}

#[test]
fn test_one_trend_entry_per_symptom_key() {
    let now = reference_now();
    let meals = vec![
        meal(now, 1, &["bloating", "cramps"]),
        meal(now, 2, &["bloating"]),
        meal(now, 9, &["bloating", "cramps"]),
    ];
    let trends = calculate_symptom_trends(&meals, now);
    let bloating_entries = trends.iter().filter(|t| t.symptom_key == "bloating").count();
    assert_eq!(bloating_entries, 1);
}

#[test]
fn test_canonical_keys_first_then_unknown_in_encounter_order() {
    let now = reference_now();
    let meals = vec![
        meal(now, 1, &["headache"]),
        meal(now, 2, &["fullness"]),
        meal(now, 3, &["nausea"]),
        meal(now, 4, &["bloating"]),
    ];
    let keys: Vec<String> = calculate_symptom_trends(&meals, now)
        .into_iter()
        .map(|t| t.symptom_key)
        .collect();
    assert_eq!(keys, ["bloating", "fullness", "headache", "nausea"]);
}

#[test]
fn test_labels_use_questionnaire_wording() {
    let now = reference_now();
    let meals = vec![meal(now, 1, &["fullness", "mucus"])];
    let trends = calculate_symptom_trends(&meals, now);

    let fullness = trends.iter().find(|t| t.symptom_key == "fullness").unwrap();
    assert_eq!(fullness.label, "sensation of incomplete evacuation");
    let mucus = trends.iter().find(|t| t.symptom_key == "mucus").unwrap();
    assert_eq!(mucus.label, "mucus in stool");
}

#[test]
fn test_injected_now_makes_result_deterministic() {
    let now = reference_now();
    let meals = vec![meal(now, 5, &["cramps"]), meal(now, 13, &["cramps"])];
    let first = calculate_symptom_trends(&meals, now);
    let second = calculate_symptom_trends(&meals, now);
    assert_eq!(first, second);
}
