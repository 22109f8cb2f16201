// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recommendation rules and coping-strategy suggestion.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use strum::Display;
use wave_config::AnalysisConfig;
use wave_core::EmotionalCategory;

use crate::catalog::{Catalog, CopingStrategy};
use crate::journal::{Concern, JournalInsight};
use crate::mood::{MoodInsight, MoodTrend};

/// Decline strength above which a behavioural-activation flow is suggested.
const DECLINE_FOR_FLOW: f64 = 0.3;

/// Average mood below which professional support is suggested.
const LOW_AVERAGE_FOR_SUPPORT: f64 = 2.5;

const DEPRESSION_FLOW_ID: &str = "depression-behavioral-activation";
const ANXIETY_FLOW_ID: &str = "anxiety-cbt-basic";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationKind {
    Flow,
    Strategy,
    ProfessionalHelp,
    Lifestyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub reason: String,
    pub actionable: bool,
    /// Catalog flow this recommendation points at, for flow recommendations.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub flow_id: Option<String>,
}

impl Recommendation {
    fn new(kind: RecommendationKind, priority: Priority, title: &str, description: &str, reason: &str) -> Self {
        Self {
            kind,
            priority,
            title: title.to_string(),
            description: description.to_string(),
            reason: reason.to_string(),
            actionable: true,
            flow_id: None,
        }
    }

    fn with_flow(mut self, flow_id: &str) -> Self {
        self.flow_id = Some(flow_id.to_string());
        self
    }
}

/// Apply the recommendation rules in order. Several may fire at once.
pub fn generate_recommendations(mood: &MoodInsight, journal: &JournalInsight) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if mood.trend == MoodTrend::Declining && mood.trend_strength > DECLINE_FOR_FLOW {
        recommendations.push(
            Recommendation::new(
                RecommendationKind::Flow,
                Priority::High,
                "Try a Guided Depression Support Flow",
                "Your mood has been declining. A structured conversation about behavioral activation could help.",
                "Declining mood trend detected",
            )
            .with_flow(DEPRESSION_FLOW_ID),
        );
    }

    if mood.average_mood < LOW_AVERAGE_FOR_SUPPORT {
        recommendations.push(Recommendation::new(
            RecommendationKind::ProfessionalHelp,
            Priority::High,
            "Consider Professional Support",
            "Your mood has been consistently low. A mental health professional could provide additional support.",
            "Low average mood score",
        ));
    }

    if journal.emotional_categories.contains(&EmotionalCategory::Anxiety) {
        recommendations.push(
            Recommendation::new(
                RecommendationKind::Flow,
                Priority::Medium,
                "Practice Anxiety Management Techniques",
                "Try our guided CBT flow for anxiety to learn coping strategies.",
                "Anxiety themes detected in journal entries",
            )
            .with_flow(ANXIETY_FLOW_ID),
        );
    }

    if journal.concerning_patterns.contains(&Concern::Isolation) {
        recommendations.push(Recommendation::new(
            RecommendationKind::Lifestyle,
            Priority::Medium,
            "Focus on Social Connection",
            "Consider reaching out to friends, family, or joining social activities.",
            "Isolation patterns detected",
        ));
    }

    if journal.coping_strategies_used.is_empty() {
        recommendations.push(Recommendation::new(
            RecommendationKind::Strategy,
            Priority::Medium,
            "Build Your Coping Toolkit",
            "Start with simple breathing exercises and gradually add more coping strategies.",
            "Limited coping strategies being used",
        ));
    }

    recommendations
}

/// Pick catalog strategies matching `categories`.
///
/// Categories are visited in their declared order and strategies in catalog
/// order, so the result is deterministic. With no categories, the first
/// anxiety or stress strategies are offered as a general starting point.
pub fn suggest_coping_strategies(
    categories: &BTreeSet<EmotionalCategory>,
    catalog: &Catalog,
    config: &AnalysisConfig,
) -> Vec<CopingStrategy> {
    if categories.is_empty() {
        return catalog
            .strategies
            .iter()
            .filter(|s| matches!(s.category, EmotionalCategory::Anxiety | EmotionalCategory::Stress))
            .take(config.fallback_strategies)
            .cloned()
            .collect();
    }

    let mut seen = HashSet::new();
    categories
        .iter()
        .flat_map(|&category| catalog.strategies_by_category(category))
        .filter(|s| seen.insert(s.id.as_str()))
        .take(config.max_suggested_strategies)
        .cloned()
        .collect()
}
