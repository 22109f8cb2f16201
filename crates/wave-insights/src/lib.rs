// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic text analytics for the Wave wellness companion.
//!
//! This crate provides:
//! - [`moderate`]: crisis-language filter gating the crisis-redirection UI
//! - [`detect_categories`]: emotional category detection over free text
//! - [`MoodAnalyzer`] / [`JournalAnalyzer`]: windowed mood trend and journal theme extraction
//! - [`assess_risk`], [`generate_recommendations`], [`suggest_coping_strategies`]
//! - [`ProgressTracker`]: report generation over a [`wave_core::WellnessStore`]
//! - [`Catalog`] and [`FlowSession`]: coping strategies and guided therapeutic flows
//!
//! Every analysis function is pure and infallible. Risk levels are a coarse
//! heuristic for UI behaviour, not a clinical assessment.

pub mod catalog;
pub mod categories;
pub mod flow;
pub mod journal;
pub mod moderation;
pub mod mood;
pub mod patterns;
pub mod prompt;
pub mod recommend;
pub mod report;
pub mod risk;
pub mod tracker;

pub use catalog::{
    BranchRule, Catalog, CopingStrategy, Difficulty, FlowCategory, ResponseKind, StepKind, StepTransition,
    TherapeuticFlow, TherapeuticStep,
};
pub use categories::detect_categories;
pub use flow::{classify_response, FlowProgress, FlowSession, FlowStatus, ResponseClass, StepOutcome};
pub use journal::{
    analyze_journal, Concern, CopingPractice, JournalAnalyzer, JournalInsight, ProgressSignal, Topic,
};
pub use moderation::moderate;
pub use mood::{analyze_mood, MoodAnalyzer, MoodInsight, MoodTrend};
pub use patterns::PatternTable;
pub use prompt::{build_chat_prompt, FALLBACK_REPLY};
pub use recommend::{
    generate_recommendations, suggest_coping_strategies, Priority, Recommendation, RecommendationKind,
};
pub use report::{build_report, generate_report, report_from_insights, ProgressReport};
pub use risk::{assess_risk, RiskAssessment, RiskLevel};
pub use tracker::ProgressTracker;
