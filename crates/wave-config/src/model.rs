// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a mistyped key fails at
//! startup instead of silently falling back to a default.

use serde::{Deserialize, Serialize};

/// Top-level Wave configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WaveConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Analysis windows and suggestion caps.
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Risk-scoring weights and thresholds.
    #[serde(default)]
    pub risk: RiskConfig,

    /// Coping-strategy and therapeutic-flow catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Windows and caps used by the mood and journal analyzers.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Days of mood history, counted back from the newest sample.
    #[serde(default = "default_window_days")]
    pub mood_window_days: u32,

    /// Days of journal history, counted back from the newest entry.
    #[serde(default = "default_window_days")]
    pub journal_window_days: u32,

    /// Number of most recent samples used for recent high/low and the
    /// recent-versus-usual comparison.
    #[serde(default = "default_recent_window")]
    pub recent_window: usize,

    /// Maximum coping strategies suggested when categories were detected.
    #[serde(default = "default_max_suggested_strategies")]
    pub max_suggested_strategies: usize,

    /// Number of general anxiety/stress strategies suggested when no
    /// category was detected.
    #[serde(default = "default_fallback_strategies")]
    pub fallback_strategies: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            mood_window_days: default_window_days(),
            journal_window_days: default_window_days(),
            recent_window: default_recent_window(),
            max_suggested_strategies: default_max_suggested_strategies(),
            fallback_strategies: default_fallback_strategies(),
        }
    }
}

fn default_window_days() -> u32 {
    30
}

fn default_recent_window() -> usize {
    7
}

fn default_max_suggested_strategies() -> usize {
    4
}

fn default_fallback_strategies() -> usize {
    3
}

/// Additive risk-scoring weights and level thresholds.
///
/// These are unvalidated heuristics that gate UI behavior. They carry no
/// clinical meaning and are tunable here without touching extraction logic.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RiskConfig {
    /// Average mood strictly below this adds `very_low_mood_weight`.
    #[serde(default = "default_very_low_mood_below")]
    pub very_low_mood_below: f64,

    #[serde(default = "default_very_low_mood_weight")]
    pub very_low_mood_weight: u32,

    /// Average mood strictly below this (and not very low) adds `low_mood_weight`.
    #[serde(default = "default_low_mood_below")]
    pub low_mood_below: f64,

    #[serde(default = "default_low_mood_weight")]
    pub low_mood_weight: u32,

    /// A declining trend with strength strictly above this adds `steep_decline_weight`.
    #[serde(default = "default_steep_decline_strength")]
    pub steep_decline_strength: f64,

    #[serde(default = "default_steep_decline_weight")]
    pub steep_decline_weight: u32,

    #[serde(default = "default_hopelessness_weight")]
    pub hopelessness_weight: u32,

    #[serde(default = "default_isolation_weight")]
    pub isolation_weight: u32,

    /// More concerning patterns than this adds `many_concerns_weight`.
    #[serde(default = "default_many_concerns_above")]
    pub many_concerns_above: usize,

    #[serde(default = "default_many_concerns_weight")]
    pub many_concerns_weight: u32,

    /// Score at or above which risk is high.
    #[serde(default = "default_high_at")]
    pub high_at: u32,

    /// Score at or above which risk is moderate.
    #[serde(default = "default_moderate_at")]
    pub moderate_at: u32,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            very_low_mood_below: default_very_low_mood_below(),
            very_low_mood_weight: default_very_low_mood_weight(),
            low_mood_below: default_low_mood_below(),
            low_mood_weight: default_low_mood_weight(),
            steep_decline_strength: default_steep_decline_strength(),
            steep_decline_weight: default_steep_decline_weight(),
            hopelessness_weight: default_hopelessness_weight(),
            isolation_weight: default_isolation_weight(),
            many_concerns_above: default_many_concerns_above(),
            many_concerns_weight: default_many_concerns_weight(),
            high_at: default_high_at(),
            moderate_at: default_moderate_at(),
        }
    }
}

fn default_very_low_mood_below() -> f64 {
    2.0
}

fn default_very_low_mood_weight() -> u32 {
    3
}

fn default_low_mood_below() -> f64 {
    3.0
}

fn default_low_mood_weight() -> u32 {
    2
}

fn default_steep_decline_strength() -> f64 {
    0.5
}

fn default_steep_decline_weight() -> u32 {
    2
}

fn default_hopelessness_weight() -> u32 {
    3
}

fn default_isolation_weight() -> u32 {
    2
}

fn default_many_concerns_above() -> usize {
    2
}

fn default_many_concerns_weight() -> u32 {
    1
}

fn default_high_at() -> u32 {
    5
}

fn default_moderate_at() -> u32 {
    3
}

/// Where the coping-strategy and flow catalog comes from.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// TOML catalog file replacing the built-in catalog. `None` uses the built-in one.
    #[serde(default)]
    pub path: Option<String>,
}
