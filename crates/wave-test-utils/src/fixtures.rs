// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixture builders with fixed timestamps, so tests never depend on the clock.

use chrono::{DateTime, Duration, TimeZone, Utc};
use wave_core::{JournalEntry, MoodSample};

/// Timestamp of the newest fixture record.
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 31, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Daily mood samples, most recent first: `values[0]` is today,
/// `values[1]` yesterday and so on.
pub fn mood_series(values: &[u8]) -> Vec<MoodSample> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| MoodSample::new(value, days_ago(i)))
        .collect()
}

/// Daily journal entries, most recent first.
pub fn journal(contents: &[&str]) -> Vec<JournalEntry> {
    contents
        .iter()
        .enumerate()
        .map(|(i, &content)| JournalEntry::new(content, days_ago(i)))
        .collect()
}

fn days_ago(days: usize) -> DateTime<Utc> {
    fixture_now() - Duration::days(days as i64)
}
