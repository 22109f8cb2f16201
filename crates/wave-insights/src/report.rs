// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The composite progress report.

use serde::{Deserialize, Serialize};
use tracing::debug;
use wave_config::{AnalysisConfig, RiskConfig};
use wave_core::{JournalEntry, MoodSample};

use crate::catalog::{Catalog, CopingStrategy};
use crate::journal::{JournalAnalyzer, JournalInsight};
use crate::mood::{MoodAnalyzer, MoodInsight};
use crate::recommend::{generate_recommendations, suggest_coping_strategies, Recommendation};
use crate::risk::{assess_risk, RiskLevel};

/// Mood and journal insights with everything derived from them.
///
/// Recomputed on every request and never persisted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub mood_insights: MoodInsight,
    pub journal_insights: JournalInsight,
    pub recommendations: Vec<Recommendation>,
    pub suggested_coping_strategies: Vec<CopingStrategy>,
    pub risk_level: RiskLevel,
}

/// Derive a report from already computed insights.
pub fn report_from_insights(
    mood: MoodInsight,
    journal: JournalInsight,
    catalog: &Catalog,
    analysis: &AnalysisConfig,
    risk: &RiskConfig,
) -> ProgressReport {
    let recommendations = generate_recommendations(&mood, &journal);
    let suggested_coping_strategies = suggest_coping_strategies(&journal.emotional_categories, catalog, analysis);
    let assessment = assess_risk(&mood, &journal, risk);

    debug!(
        recommendations = recommendations.len(),
        strategies = suggested_coping_strategies.len(),
        risk = %assessment.level,
        "progress report built"
    );

    ProgressReport {
        mood_insights: mood,
        journal_insights: journal,
        recommendations,
        suggested_coping_strategies,
        risk_level: assessment.level,
    }
}

/// Analyze `samples` and `entries` and build the full report.
pub fn build_report(
    samples: &[MoodSample],
    entries: &[JournalEntry],
    catalog: &Catalog,
    analysis: &AnalysisConfig,
    risk: &RiskConfig,
) -> ProgressReport {
    let mood = MoodAnalyzer::from_config(analysis).analyze(samples);
    let journal = JournalAnalyzer::from_config(analysis).analyze(entries);
    report_from_insights(mood, journal, catalog, analysis, risk)
}

/// [`build_report`] with the built-in catalog and default settings.
pub fn generate_report(samples: &[MoodSample], entries: &[JournalEntry]) -> ProgressReport {
    build_report(
        samples,
        entries,
        &Catalog::builtin(),
        &AnalysisConfig::default(),
        &RiskConfig::default(),
    )
}
