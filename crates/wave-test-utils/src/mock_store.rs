// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock storage collaborators for deterministic testing.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use wave_core::{JournalEntry, MoodSample, SubjectId, WaveError, WellnessStore};

/// In-memory store keyed by subject.
///
/// Lists come back most recent first. Unknown subjects get empty lists,
/// as a new user would.
#[derive(Default)]
pub struct MemoryStore {
    moods: Mutex<HashMap<SubjectId, Vec<MoodSample>>>,
    entries: Mutex<HashMap<SubjectId, Vec<JournalEntry>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed mood samples for `subject`.
    pub fn with_moods(mut self, subject: &SubjectId, samples: Vec<MoodSample>) -> Self {
        self.moods
            .get_mut()
            .entry(subject.clone())
            .or_default()
            .extend(samples);
        self
    }

    /// Seed journal entries for `subject`.
    pub fn with_journal(mut self, subject: &SubjectId, entries: Vec<JournalEntry>) -> Self {
        self.entries
            .get_mut()
            .entry(subject.clone())
            .or_default()
            .extend(entries);
        self
    }

    pub async fn add_mood(&self, subject: &SubjectId, sample: MoodSample) {
        self.moods
            .lock()
            .await
            .entry(subject.clone())
            .or_default()
            .push(sample);
    }

    pub async fn add_journal_entry(&self, subject: &SubjectId, entry: JournalEntry) {
        self.entries
            .lock()
            .await
            .entry(subject.clone())
            .or_default()
            .push(entry);
    }
}

#[async_trait]
impl WellnessStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn list_mood_samples(&self, subject: &SubjectId) -> Result<Vec<MoodSample>, WaveError> {
        let mut samples = self.moods.lock().await.get(subject).cloned().unwrap_or_default();
        samples.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(samples)
    }

    async fn list_journal_entries(&self, subject: &SubjectId) -> Result<Vec<JournalEntry>, WaveError> {
        let mut entries = self.entries.lock().await.get(subject).cloned().unwrap_or_default();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }
}

/// Store whose every fetch fails with a storage error.
pub struct FailingStore {
    message: String,
}

impl FailingStore {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn error(&self) -> WaveError {
        WaveError::Storage {
            source: Box::new(std::io::Error::other(self.message.clone())),
        }
    }
}

#[async_trait]
impl WellnessStore for FailingStore {
    fn name(&self) -> &str {
        "failing"
    }

    async fn list_mood_samples(&self, _subject: &SubjectId) -> Result<Vec<MoodSample>, WaveError> {
        Err(self.error())
    }

    async fn list_journal_entries(&self, _subject: &SubjectId) -> Result<Vec<JournalEntry>, WaveError> {
        Err(self.error())
    }
}
