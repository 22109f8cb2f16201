// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `wave report` command implementation.

use std::sync::Arc;

use colored::Colorize;
use wave_config::WaveConfig;
use wave_core::{SubjectId, WaveError};
use wave_insights::{Catalog, Priority, ProgressReport, ProgressTracker, RiskLevel};

use crate::store::JsonFileStore;
use crate::{HistoryArgs, Output};

/// Build the report for the exports named in `history`.
pub async fn generate_for(history: &HistoryArgs, catalog: Arc<Catalog>, config: &WaveConfig) -> ProgressReport {
    let store = JsonFileStore::new(history.moods.clone(), history.journal.clone());
    let tracker = ProgressTracker::from_config(Arc::new(store), catalog, config);
    tracker.generate_report(&SubjectId::new(history.subject.as_str())).await
}

pub async fn run_report(
    history: &HistoryArgs,
    catalog: Arc<Catalog>,
    config: &WaveConfig,
    output: Output,
) -> Result<(), WaveError> {
    let report = generate_for(history, catalog, config).await;
    if output.json {
        return output.print_json(&report);
    }
    print_report(&report, output.color);
    Ok(())
}

fn print_report(report: &ProgressReport, use_color: bool) {
    let mood = &report.mood_insights;

    println!();
    println!("  wave report");
    println!("  {}", "-".repeat(35));
    if mood.has_average() {
        println!("    Average mood: {:.2} ({} samples)", mood.average_mood, mood.sample_count);
    }
    println!("    Trend:        {} ({:.2})", mood.trend, mood.trend_strength);
    println!("    Risk:         {}", risk_label(report.risk_level, use_color));
    for pattern in &mood.patterns {
        println!("    - {pattern}");
    }

    if !report.journal_insights.emotional_categories.is_empty() {
        let names: Vec<String> = report
            .journal_insights
            .emotional_categories
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("    Themes:       {}", names.join(", "));
    }

    if !report.recommendations.is_empty() {
        println!();
        println!("  Recommendations");
        for recommendation in &report.recommendations {
            let marker = match (recommendation.priority, use_color) {
                (Priority::High, true) => "!".red().bold().to_string(),
                (Priority::High, false) => "!".to_string(),
                _ => "-".to_string(),
            };
            println!("    {marker} {}: {}", recommendation.title, recommendation.description);
        }
    }

    if !report.suggested_coping_strategies.is_empty() {
        println!();
        println!("  Strategies to try");
        for strategy in &report.suggested_coping_strategies {
            println!("    - {} ({})", strategy.name, strategy.duration);
        }
    }
    println!();
    println!("  Risk levels are a heuristic, not a clinical assessment.");
    println!();
}

fn risk_label(level: RiskLevel, use_color: bool) -> String {
    if !use_color {
        return level.to_string();
    }
    match level {
        RiskLevel::Low => level.to_string().green().to_string(),
        RiskLevel::Moderate => level.to_string().yellow().to_string(),
        RiskLevel::High => level.to_string().red().bold().to_string(),
    }
}
