// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Report generation over a storage collaborator.
//!
//! Fetch failures never abort a report: the affected insight degrades to its
//! empty form and the failure is logged.

use std::sync::Arc;

use tracing::{debug, warn};
use wave_config::{AnalysisConfig, RiskConfig, WaveConfig};
use wave_core::{JournalEntry, MoodSample, SubjectId, WaveError, WellnessStore};

use crate::catalog::Catalog;
use crate::journal::{JournalAnalyzer, JournalInsight};
use crate::mood::{MoodAnalyzer, MoodInsight};
use crate::report::{report_from_insights, ProgressReport};

pub struct ProgressTracker {
    store: Arc<dyn WellnessStore>,
    catalog: Arc<Catalog>,
    analysis: AnalysisConfig,
    risk: RiskConfig,
}

impl ProgressTracker {
    pub fn new(
        store: Arc<dyn WellnessStore>,
        catalog: Arc<Catalog>,
        analysis: AnalysisConfig,
        risk: RiskConfig,
    ) -> Self {
        Self {
            store,
            catalog,
            analysis,
            risk,
        }
    }

    pub fn from_config(store: Arc<dyn WellnessStore>, catalog: Arc<Catalog>, config: &WaveConfig) -> Self {
        Self::new(store, catalog, config.analysis.clone(), config.risk.clone())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub async fn mood_insights(&self, subject: &SubjectId) -> MoodInsight {
        let samples = self.store.list_mood_samples(subject).await;
        self.analyze_mood(subject, samples)
    }

    pub async fn journal_insights(&self, subject: &SubjectId) -> JournalInsight {
        let entries = self.store.list_journal_entries(subject).await;
        self.analyze_journal(subject, entries)
    }

    /// Fetch both histories concurrently and build the report.
    pub async fn generate_report(&self, subject: &SubjectId) -> ProgressReport {
        debug!(%subject, store = self.store.name(), "generating progress report");
        let (samples, entries) = tokio::join!(
            self.store.list_mood_samples(subject),
            self.store.list_journal_entries(subject),
        );

        let mood = self.analyze_mood(subject, samples);
        let journal = self.analyze_journal(subject, entries);
        report_from_insights(mood, journal, &self.catalog, &self.analysis, &self.risk)
    }

    fn analyze_mood(&self, subject: &SubjectId, samples: Result<Vec<MoodSample>, WaveError>) -> MoodInsight {
        match samples {
            Ok(samples) => MoodAnalyzer::from_config(&self.analysis).analyze(&samples),
            Err(e) => {
                warn!(%subject, error = %e, "failed to load mood samples");
                MoodInsight::unavailable()
            }
        }
    }

    fn analyze_journal(
        &self,
        subject: &SubjectId,
        entries: Result<Vec<JournalEntry>, WaveError>,
    ) -> JournalInsight {
        match entries {
            Ok(entries) => JournalAnalyzer::from_config(&self.analysis).analyze(&entries),
            Err(e) => {
                warn!(%subject, error = %e, "failed to load journal entries");
                JournalInsight::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;
    use wave_test_utils::{journal, mood_series, FailingStore, MemoryStore};

    use super::*;
    use crate::mood::MoodTrend;
    use crate::risk::RiskLevel;

    fn tracker(store: Arc<dyn WellnessStore>) -> ProgressTracker {
        ProgressTracker::from_config(store, Arc::new(Catalog::builtin()), &WaveConfig::default())
    }

    #[tokio::test]
    #[traced_test]
    async fn store_failure_degrades_and_warns() {
        let tracker = tracker(Arc::new(FailingStore::new("database offline")));
        let report = tracker.generate_report(&SubjectId::from("ana")).await;

        assert_eq!(report.mood_insights, MoodInsight::unavailable());
        assert!(report.journal_insights.is_empty());
        assert_eq!(report.risk_level, RiskLevel::Moderate);
        assert!(logs_contain("failed to load mood samples"));
        assert!(logs_contain("failed to load journal entries"));
    }

    #[tokio::test]
    async fn reads_subject_history_from_store() {
        let subject = SubjectId::from("ana");
        let store = MemoryStore::new()
            .with_moods(&subject, mood_series(&[5, 5, 5, 5, 5, 1]))
            .with_journal(&subject, journal(&["I feel anxious about the meeting"]));
        let tracker = tracker(Arc::new(store));

        let mood = tracker.mood_insights(&subject).await;
        assert_eq!(mood.trend, MoodTrend::Improving);

        let report = tracker.generate_report(&subject).await;
        assert_eq!(report.mood_insights, mood);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.flow_id.as_deref() == Some("anxiety-cbt-basic")));
    }

    #[tokio::test]
    async fn unknown_subject_has_no_data() {
        let tracker = tracker(Arc::new(MemoryStore::new()));
        let journal = tracker.journal_insights(&SubjectId::from("nobody")).await;
        assert!(journal.is_empty());
        let mood = tracker.mood_insights(&SubjectId::from("nobody")).await;
        assert_eq!(mood.trend, MoodTrend::InsufficientData);
        assert!(!mood.has_average());
    }
}
