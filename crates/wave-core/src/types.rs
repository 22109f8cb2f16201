// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain records shared by the storage collaborator and the analytics engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Lowest valid self-reported mood rating.
pub const MOOD_MIN: u8 = 1;

/// Highest valid self-reported mood rating.
pub const MOOD_MAX: u8 = 5;

/// Identifies whose records are being analyzed (a user id or a device id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectId(pub String);

impl SubjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SubjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for SubjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single 1-5 self-reported wellbeing rating.
///
/// The JSON aliases accept the record shape served by the hosted mood log
/// (`{ "mood": 3, "created_at": "..." }`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodSample {
    /// Rating in `MOOD_MIN..=MOOD_MAX`.
    #[serde(alias = "mood")]
    pub value: u8,
    /// When the rating was recorded.
    #[serde(alias = "created_at")]
    pub timestamp: DateTime<Utc>,
}

impl MoodSample {
    pub fn new(value: u8, timestamp: DateTime<Utc>) -> Self {
        Self { value, timestamp }
    }

    /// Whether the rating lies inside the 1-5 scale.
    pub fn is_valid(&self) -> bool {
        (MOOD_MIN..=MOOD_MAX).contains(&self.value)
    }
}

/// A free-text journal reflection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub content: String,
    #[serde(alias = "created_at")]
    pub timestamp: DateTime<Utc>,
}

impl JournalEntry {
    pub fn new(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            content: content.into(),
            timestamp,
        }
    }
}

/// Heuristically detected emotional theme.
///
/// Declaration order is the order categories are reported and the order
/// coping strategies are gathered in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum EmotionalCategory {
    Anxiety,
    Depression,
    Stress,
    Relationships,
    SelfEsteem,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::TimeZone;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn emotional_category_round_trips_through_display() {
        for category in EmotionalCategory::iter() {
            let parsed = EmotionalCategory::from_str(&category.to_string()).unwrap();
            assert_eq!(category, parsed);
        }
        assert_eq!(EmotionalCategory::SelfEsteem.to_string(), "self-esteem");
    }

    #[test]
    fn emotional_category_serializes_kebab_case() {
        let json = serde_json::to_string(&EmotionalCategory::SelfEsteem).unwrap();
        assert_eq!(json, "\"self-esteem\"");
    }

    #[test]
    fn mood_sample_validity_bounds() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap();
        assert!(MoodSample::new(1, ts).is_valid());
        assert!(MoodSample::new(5, ts).is_valid());
        assert!(!MoodSample::new(0, ts).is_valid());
        assert!(!MoodSample::new(6, ts).is_valid());
    }

    #[test]
    fn mood_sample_accepts_hosted_record_shape() {
        let json = r#"{"mood": 4, "created_at": "2026-03-01T10:00:00Z"}"#;
        let sample: MoodSample = serde_json::from_str(json).unwrap();
        assert_eq!(sample.value, 4);
        assert_eq!(
            sample.timestamp,
            Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn journal_entry_accepts_hosted_record_shape() {
        let json = r#"{"content": "Tried a short walk", "created_at": "2026-03-01T10:00:00Z"}"#;
        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.content, "Tried a short walk");
    }
}
