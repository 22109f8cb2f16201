// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt construction for the supportive chat collaborator.

use crate::moderation::moderate;
use crate::mood::MoodTrend;
use crate::report::ProgressReport;
use crate::risk::RiskLevel;

/// Reply to show when no language model is reachable.
pub const FALLBACK_REPLY: &str =
    "I hear you, thanks for sharing. Try a 4-4-6 breath. What would help a little right now?";

const STYLE: &str = "Be brief (<=120 words), empathetic, culturally sensitive, non-judgmental. \
Start with validation, offer one small action, ask a gentle follow-up.";

const CRISIS_INSTRUCTION: &str = "The user may be in crisis. Do not suggest exercises. \
Acknowledge their pain, say they deserve immediate support, and encourage them to contact \
local emergency services or a crisis line right now.";

const HIGH_RISK_INSTRUCTION: &str =
    "Gently mention that talking with a mental health professional could help.";

/// Strategies named in the prompt context.
const MAX_PROMPT_STRATEGIES: usize = 2;

/// Build the chat prompt for `user_text`, optionally conditioned on the
/// subject's latest report.
///
/// Crisis language in `user_text` always adds the crisis instruction,
/// whatever the report says.
pub fn build_chat_prompt(user_text: &str, report: Option<&ProgressReport>) -> String {
    let mut lines = vec![STYLE.to_string()];

    if moderate(user_text) {
        lines.push(CRISIS_INSTRUCTION.to_string());
    } else if let Some(report) = report {
        lines.extend(context_lines(report));
    }

    lines.push(format!("User: {}", user_text.trim()));
    lines.push("Reply:".to_string());
    lines.join("\n")
}

fn context_lines(report: &ProgressReport) -> Vec<String> {
    let mut context = Vec::new();

    let trend = report.mood_insights.trend;
    if trend != MoodTrend::InsufficientData {
        context.push(format!("- Mood trend: {trend}"));
    }

    let categories = &report.journal_insights.emotional_categories;
    if !categories.is_empty() {
        let names: Vec<String> = categories.iter().map(ToString::to_string).collect();
        context.push(format!("- Recent themes: {}", names.join(", ")));
    }

    let strategies: Vec<&str> = report
        .suggested_coping_strategies
        .iter()
        .take(MAX_PROMPT_STRATEGIES)
        .map(|s| s.name.as_str())
        .collect();
    if !strategies.is_empty() {
        context.push(format!("- Strategies that may fit: {}", strategies.join(", ")));
    }

    if context.is_empty() && report.risk_level != RiskLevel::High {
        return context;
    }

    context.insert(0, "Context (use for tone, do not quote):".to_string());
    if report.risk_level == RiskLevel::High {
        context.push(HIGH_RISK_INSTRUCTION.to_string());
    }
    context
}
