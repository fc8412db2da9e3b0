// ABOUTME: Command-line report generator for the Tummy Insights engine
// ABOUTME: Builds a provider from configuration and prints a user's insights report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Insights report CLI.
//!
//! Generates a health insights report for a user and prints it as JSON or
//! a readable summary.
//!
//! Usage:
//! ```bash
//! # Against a running tracker API
//! cargo run --bin insights-cli -- --user-id default_user --base-url http://localhost:8000
//!
//! # Against seeded synthetic data (no tracker API needed)
//! cargo run --bin insights-cli -- --synthetic
//!
//! # Machine-readable output
//! cargo run --bin insights-cli -- --synthetic --json
//! ```

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use clap::Parser;
use std::sync::Arc;
use tummy_insights::config::InsightsConfig;
use tummy_insights::intelligence::InsightsEngine;
use tummy_insights::logging::LoggingConfig;
use tummy_insights::models::{InsightsReport, RawAssociationRow, RawMealRow};
use tummy_insights::providers::{create_provider, HealthDataProvider, SyntheticProvider};

#[derive(Parser)]
#[command(
    name = "insights-cli",
    about = "Tummy Insights report generator",
    long_about = "Generate a food-risk and symptom-trend report for a tracker user"
)]
struct Cli {
    /// User id to generate the report for
    #[arg(long, default_value = "default_user")]
    user_id: String,

    /// Tracker API base URL override
    #[arg(long)]
    base_url: Option<String>,

    /// Use seeded synthetic data instead of the tracker API
    #[arg(long)]
    synthetic: bool,

    /// Print the report as pretty JSON instead of a summary
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env()
        .init()
        .context("failed to initialize logging")?;

    let provider: Arc<dyn HealthDataProvider> = if cli.synthetic {
        Arc::new(seeded_synthetic_provider())
    } else {
        let mut config = InsightsConfig::from_env().context("failed to load configuration")?;
        if let Some(base_url) = cli.base_url {
            config.data_source.base_url = base_url;
            config.validate().context("invalid base URL override")?;
        }
        Arc::from(create_provider(&config.data_source.provider, &config.data_source)?)
    };

    let engine = InsightsEngine::new(provider);
    let report = engine.generate_report(&cli.user_id).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&cli.user_id, &report);
    }
    Ok(())
}

/// Render the report as a terminal summary
fn print_summary(user_id: &str, report: &InsightsReport) {
    println!("Health report for {user_id}");
    println!();

    println!("Foods to watch:");
    if report.foods_to_watch.is_empty() {
        println!("  (not enough data yet)");
    }
    for food in &report.foods_to_watch {
        let symptoms: Vec<&str> = food
            .symptoms_triggered
            .iter()
            .map(String::as_str)
            .collect();
        println!(
            "  {:<16} {:>6} risk  x{:<3} [{}]",
            food.name,
            food.risk_level.to_string(),
            food.occurrences,
            symptoms.join(", ")
        );
    }
    println!();

    println!("Symptom trends (this week / last week):");
    for trend in &report.symptom_trends {
        println!(
            "  {:<40} {:>2} / {:<2} {} ({})",
            trend.label, trend.this_week_count, trend.last_week_count, trend.trend, trend.change
        );
    }
}

/// Build a synthetic provider with two weeks of plausible demo data
fn seeded_synthetic_provider() -> SyntheticProvider {
    let now = Utc::now();
    let meal_time = |days_ago: i64, symptoms: &str| RawMealRow {
        date_time: Some((now - Duration::days(days_ago)).format("%Y-%m-%d %H:%M:%S").to_string()),
        ingredients: None,
        symptoms: Some(symptoms.to_owned()),
    };
    let association = |ingredient: &str,
                       symptom: &str,
                       odds_ratio: f64,
                       p_value: f64,
                       p_value_adj: Option<f64>| RawAssociationRow {
        ingredient: Some(ingredient.to_owned()),
        symptom: Some(symptom.to_owned()),
        odds_ratio: Some(odds_ratio),
        p_value: Some(p_value),
        p_value_adj,
        significant: None,
    };

    SyntheticProvider::with_data(
        vec![
            association("Dairy", "bloating", 2.5, 0.03, Some(0.04)),
            association("Dairy", "cramps", 1.8, 0.08, None),
            association("Gluten", "bloating", 1.6, 0.12, None),
            association("Onion", "cramps", 0.7, 0.01, Some(0.02)),
        ],
        vec![
            meal_time(1, "bloating, cramps"),
            meal_time(2, "bloating"),
            meal_time(4, "diarrhea"),
            meal_time(9, "bloating"),
            meal_time(10, "constipation, fullness"),
            meal_time(12, "bloating, mucus"),
        ],
    )
}
