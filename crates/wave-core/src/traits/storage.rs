// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage collaborator trait for mood and journal records.

use async_trait::async_trait;

use crate::error::WaveError;
use crate::types::{JournalEntry, MoodSample, SubjectId};

/// Source of a subject's recorded mood samples and journal entries.
///
/// Implementations return records most-recent-first and return an empty
/// list (not an error) for a subject with no data. Errors are reserved for
/// genuine fetch failures; the analytics engine degrades them to an
/// insufficient-data insight instead of failing the report.
#[async_trait]
pub trait WellnessStore: Send + Sync + 'static {
    /// Returns the human-readable name of this store, used in log output.
    fn name(&self) -> &str;

    /// Lists all mood samples recorded for `subject`.
    async fn list_mood_samples(&self, subject: &SubjectId) -> Result<Vec<MoodSample>, WaveError>;

    /// Lists all journal entries recorded for `subject`.
    async fn list_journal_entries(
        &self,
        subject: &SubjectId,
    ) -> Result<Vec<JournalEntry>, WaveError>;
}
