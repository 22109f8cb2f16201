// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Journal insight extraction.
//!
//! The window's entries are joined into one corpus and run through four
//! keyword tables plus the category detector. Each table carries its own
//! match floor: topics need more than two mentions, concerns more than one,
//! coping practices and progress signals a single mention.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use tracing::{debug, trace, Level};
use wave_config::AnalysisConfig;
use wave_core::{EmotionalCategory, JournalEntry};

use crate::categories::detect_categories;
use crate::patterns::PatternTable;

/// Recurring journal subject.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    WorkStress,
    Relationships,
    Health,
    SelfCare,
    Goals,
    Social,
}

/// Coping practice the writer mentions using.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum CopingPractice {
    BreathingExercises,
    Exercise,
    Meditation,
    SocialSupport,
    Journaling,
    SelfCare,
}

/// Positive signal of progress.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ProgressSignal {
    ImprovedMood,
    IncreasedActivity,
    BetterSleep,
    SocialConnection,
    CopingSkills,
    SelfAwareness,
}

/// Recurring risk theme.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Concern {
    Isolation,
    SleepIssues,
    Hopelessness,
    AnxietyEscalation,
    SelfCriticism,
}

const TOPIC_FLOOR: usize = 3;
const PRACTICE_FLOOR: usize = 1;
const PROGRESS_FLOOR: usize = 1;
const CONCERN_FLOOR: usize = 2;

static TOPIC_TABLE: LazyLock<PatternTable<Topic>> = LazyLock::new(|| {
    PatternTable::new(&[
        (Topic::WorkStress, r"work|job|boss|deadline|meeting|career|office", TOPIC_FLOOR),
        (Topic::Relationships, r"friend|family|partner|relationship|love|conflict", TOPIC_FLOOR),
        (Topic::Health, r"sleep|tired|energy|sick|health|doctor|medical", TOPIC_FLOOR),
        (Topic::SelfCare, r"exercise|meditation|therapy|self-care|relax|rest", TOPIC_FLOOR),
        (Topic::Goals, r"goal|plan|future|dream|hope|ambition|aspiration", TOPIC_FLOOR),
        (Topic::Social, r"social|people|lonely|isolated|connection|community", TOPIC_FLOOR),
    ])
    .unwrap()
});

static PRACTICE_TABLE: LazyLock<PatternTable<CopingPractice>> = LazyLock::new(|| {
    PatternTable::new(&[
        (CopingPractice::BreathingExercises, r"breath|breathing|inhale|exhale", PRACTICE_FLOOR),
        (CopingPractice::Exercise, r"exercise|walk|run|gym|workout|physical activity", PRACTICE_FLOOR),
        (CopingPractice::Meditation, r"meditat|mindful|present moment|awareness", PRACTICE_FLOOR),
        (CopingPractice::SocialSupport, r"talk|friend|family|support|help|therapist", PRACTICE_FLOOR),
        (CopingPractice::Journaling, r"journal|write|writing|reflect", PRACTICE_FLOOR),
        (CopingPractice::SelfCare, r"self-care|bath|rest|relax|treat myself", PRACTICE_FLOOR),
    ])
    .unwrap()
});

static PROGRESS_TABLE: LazyLock<PatternTable<ProgressSignal>> = LazyLock::new(|| {
    PatternTable::new(&[
        (ProgressSignal::ImprovedMood, r"feel better|feeling good|mood improved|happier", PROGRESS_FLOOR),
        (ProgressSignal::IncreasedActivity, r"did something|accomplished|productive|active", PROGRESS_FLOOR),
        (ProgressSignal::BetterSleep, r"slept well|good sleep|rested|tired but good", PROGRESS_FLOOR),
        (ProgressSignal::SocialConnection, r"spent time|talked to|connected|reached out", PROGRESS_FLOOR),
        (ProgressSignal::CopingSkills, r"used breathing|tried meditation|practiced|coping", PROGRESS_FLOOR),
        (ProgressSignal::SelfAwareness, r"realized|noticed|understand|aware|insight", PROGRESS_FLOOR),
    ])
    .unwrap()
});

static CONCERN_TABLE: LazyLock<PatternTable<Concern>> = LazyLock::new(|| {
    PatternTable::new(&[
        (Concern::Isolation, r"alone|lonely|isolated|no one|by myself", CONCERN_FLOOR),
        (Concern::SleepIssues, r"can['’]t sleep|insomnia|tired|exhausted|no energy", CONCERN_FLOOR),
        (Concern::Hopelessness, r"hopeless|pointless|give up|no point|worthless", CONCERN_FLOOR),
        (Concern::AnxietyEscalation, r"panic|can['’]t breathe|overwhelming|too much", CONCERN_FLOOR),
        (Concern::SelfCriticism, r"hate myself|stupid|failure|not good enough", CONCERN_FLOOR),
    ])
    .unwrap()
});

/// Themes extracted from the journal window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalInsight {
    pub emotional_categories: BTreeSet<EmotionalCategory>,
    pub frequent_topics: BTreeSet<Topic>,
    pub coping_strategies_used: BTreeSet<CopingPractice>,
    pub progress_indicators: BTreeSet<ProgressSignal>,
    pub concerning_patterns: BTreeSet<Concern>,
}

impl JournalInsight {
    /// Insight extracted from an already-joined corpus.
    pub fn from_corpus(corpus: &str) -> Self {
        Self {
            emotional_categories: detect_categories(corpus),
            frequent_topics: TOPIC_TABLE.evaluate(corpus),
            coping_strategies_used: PRACTICE_TABLE.evaluate(corpus),
            progress_indicators: PROGRESS_TABLE.evaluate(corpus),
            concerning_patterns: CONCERN_TABLE.evaluate(corpus),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.emotional_categories.is_empty()
            && self.frequent_topics.is_empty()
            && self.coping_strategies_used.is_empty()
            && self.progress_indicators.is_empty()
            && self.concerning_patterns.is_empty()
    }
}

/// Journal analyzer with a configurable window.
#[derive(Debug, Clone)]
pub struct JournalAnalyzer {
    window_days: u32,
}

impl Default for JournalAnalyzer {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}

impl JournalAnalyzer {
    pub fn new(window_days: u32) -> Self {
        Self { window_days }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.journal_window_days)
    }

    pub fn analyze(&self, entries: &[JournalEntry]) -> JournalInsight {
        let corpus = self.corpus(entries);
        if corpus.is_empty() {
            return JournalInsight::default();
        }
        let insight = JournalInsight::from_corpus(&corpus);
        debug!(
            entries = entries.len(),
            categories = insight.emotional_categories.len(),
            concerns = insight.concerning_patterns.len(),
            "journal insight computed"
        );
        if tracing::enabled!(Level::TRACE) {
            trace!(counts = ?CONCERN_TABLE.counts(&corpus), "concern match counts");
        }
        insight
    }

    /// Window text joined newest-first with single spaces.
    fn corpus(&self, entries: &[JournalEntry]) -> String {
        let mut window: Vec<&JournalEntry> = entries.iter().collect();
        window.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        // A window reaching past the representable range keeps everything.
        if let Some(newest) = window.first().map(|e| e.timestamp)
            && let Some(cutoff) = Duration::try_days(i64::from(self.window_days))
                .and_then(|span| newest.checked_sub_signed(span))
        {
            window.retain(|e| e.timestamp >= cutoff);
        }
        window
            .iter()
            .map(|e| e.content.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Analyze `entries` over the last `window_days`.
pub fn analyze_journal(entries: &[JournalEntry], window_days: u32) -> JournalInsight {
    JournalAnalyzer::new(window_days).analyze(entries)
}
