// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed storage collaborator over JSON exports.
//!
//! Each file holds one subject's records, either as a bare array or wrapped
//! as `{ "items": [...] }` the way the hosted mood API returns them.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use wave_core::{JournalEntry, MoodSample, SubjectId, WaveError, WellnessStore};

#[derive(Deserialize)]
#[serde(untagged)]
enum Export<T> {
    Items { items: Vec<T> },
    Bare(Vec<T>),
}

impl<T> Export<T> {
    fn into_records(self) -> Vec<T> {
        match self {
            Export::Items { items } => items,
            Export::Bare(records) => records,
        }
    }
}

/// Reads mood and journal exports from disk. A path that is not configured
/// reads as an empty history.
#[derive(Debug, Clone, Default)]
pub struct JsonFileStore {
    moods: Option<PathBuf>,
    journal: Option<PathBuf>,
}

impl JsonFileStore {
    pub fn new(moods: Option<PathBuf>, journal: Option<PathBuf>) -> Self {
        Self { moods, journal }
    }
}

async fn read_export<T: DeserializeOwned>(path: Option<&Path>) -> Result<Vec<T>, WaveError> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| WaveError::Storage { source: Box::new(e) })?;
    let export: Export<T> =
        serde_json::from_str(&content).map_err(|e| WaveError::Storage { source: Box::new(e) })?;
    let records = export.into_records();
    debug!(path = %path.display(), records = records.len(), "export loaded");
    Ok(records)
}

#[async_trait]
impl WellnessStore for JsonFileStore {
    fn name(&self) -> &str {
        "json-file"
    }

    async fn list_mood_samples(&self, _subject: &SubjectId) -> Result<Vec<MoodSample>, WaveError> {
        let mut samples: Vec<MoodSample> = read_export(self.moods.as_deref()).await?;
        samples.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(samples)
    }

    async fn list_journal_entries(&self, _subject: &SubjectId) -> Result<Vec<JournalEntry>, WaveError> {
        let mut entries: Vec<JournalEntry> = read_export(self.journal.as_deref()).await?;
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }
}
