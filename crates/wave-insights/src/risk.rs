// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Risk scoring.
//!
//! The score is an additive heuristic that gates UI behaviour (how prominently
//! support resources are shown). It has no clinical validation and must not
//! be presented as a diagnosis. All thresholds and weights come from
//! [`RiskConfig`] so they can be tuned without touching extraction logic.

use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::debug;
use wave_config::RiskConfig;

use crate::journal::{Concern, JournalInsight};
use crate::mood::{MoodInsight, MoodTrend};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

/// Score and the level it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskAssessment {
    pub score: u32,
    pub level: RiskLevel,
}

/// Score `mood` and `journal` against `config`.
///
/// A degraded mood insight reports an average of zero and therefore lands in
/// the lowest bracket: missing data errs towards more support, not less.
pub fn assess_risk(mood: &MoodInsight, journal: &JournalInsight, config: &RiskConfig) -> RiskAssessment {
    let mut score = 0;

    if mood.average_mood < config.very_low_mood_below {
        score += config.very_low_mood_weight;
    } else if mood.average_mood < config.low_mood_below {
        score += config.low_mood_weight;
    }

    if mood.trend == MoodTrend::Declining && mood.trend_strength > config.steep_decline_strength {
        score += config.steep_decline_weight;
    }

    let concerns = &journal.concerning_patterns;
    if concerns.contains(&Concern::Hopelessness) {
        score += config.hopelessness_weight;
    }
    if concerns.contains(&Concern::Isolation) {
        score += config.isolation_weight;
    }
    if concerns.len() > config.many_concerns_above {
        score += config.many_concerns_weight;
    }

    let level = if score >= config.high_at {
        RiskLevel::High
    } else if score >= config.moderate_at {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    };

    debug!(score, %level, "risk assessed");
    RiskAssessment { score, level }
}
