// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::WaveConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Longest accepted analysis window (about a century).
pub const MAX_WINDOW_DAYS: u32 = 36_500;

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &WaveConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let level = config.logging.level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        fail(format!(
            "logging.level `{}` is not one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }

    let analysis = &config.analysis;
    for (key, days) in [
        ("analysis.mood_window_days", analysis.mood_window_days),
        ("analysis.journal_window_days", analysis.journal_window_days),
    ] {
        if !(1..=MAX_WINDOW_DAYS).contains(&days) {
            fail(format!("{key} must be between 1 and {MAX_WINDOW_DAYS}, got {days}"));
        }
    }
    if analysis.recent_window == 0 {
        fail("analysis.recent_window must be at least 1".to_string());
    }
    if analysis.max_suggested_strategies == 0 {
        fail("analysis.max_suggested_strategies must be at least 1".to_string());
    }

    let risk = &config.risk;
    if risk.very_low_mood_below >= risk.low_mood_below {
        fail(format!(
            "risk.very_low_mood_below ({}) must be below risk.low_mood_below ({})",
            risk.very_low_mood_below, risk.low_mood_below
        ));
    }
    if risk.steep_decline_strength < 0.0 {
        fail(format!(
            "risk.steep_decline_strength must be non-negative, got {}",
            risk.steep_decline_strength
        ));
    }
    if risk.moderate_at > risk.high_at {
        fail(format!(
            "risk.moderate_at ({}) must not exceed risk.high_at ({})",
            risk.moderate_at, risk.high_at
        ));
    }

    if let Some(path) = &config.catalog.path
        && path.trim().is_empty()
    {
        fail("catalog.path must not be empty when set".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
