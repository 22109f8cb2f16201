// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Emotional category detection.
//!
//! Categories are independent: anxiety and stress share "stress" and
//! "overwhelm" and routinely match together.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use wave_core::EmotionalCategory;

use crate::patterns::PatternTable;

static CATEGORY_TABLE: LazyLock<PatternTable<EmotionalCategory>> = LazyLock::new(|| {
    PatternTable::new(&[
        (
            EmotionalCategory::Anxiety,
            r"anxious|worried|nervous|panic|overwhelm|stress",
            1,
        ),
        (
            EmotionalCategory::Depression,
            r"sad|down|depressed|hopeless|empty|worthless",
            1,
        ),
        (
            EmotionalCategory::Stress,
            r"stress|pressure|overwhelm|busy|deadline",
            1,
        ),
        (
            EmotionalCategory::Relationships,
            r"relationship|friend|family|partner|conflict",
            1,
        ),
        (
            EmotionalCategory::SelfEsteem,
            r"self|worth|confidence|doubt|failure|inadequate",
            1,
        ),
    ])
    .unwrap()
});

/// Detect every emotional category whose keywords appear in `text`.
///
/// Returns an empty set when nothing matches.
pub fn detect_categories(text: &str) -> BTreeSet<EmotionalCategory> {
    CATEGORY_TABLE.evaluate(text)
}
