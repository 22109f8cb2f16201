// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Guided therapeutic flow sessions.
//!
//! A [`FlowSession`] walks one catalog flow step by step. Progress lives in a
//! plain serializable [`FlowProgress`] so the caller decides where it is kept;
//! [`FlowSession::resume`] picks it up again against the same catalog.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, info, warn};
use wave_core::WaveError;

use crate::catalog::{Catalog, ResponseKind, StepTransition, TherapeuticFlow, TherapeuticStep};
use crate::categories::detect_categories;
use crate::moderation::moderate;

/// Word count at which a free-text answer counts as detailed.
const DETAILED_WORDS: usize = 20;

static AFFIRMATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(yes|yeah|yep|yup|sure|ok|okay|definitely|absolutely|of course|i will|i can)\b")
        .unwrap()
});

static NEGATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(no|nope|nah|not|never|can['’]t|cannot|won['’]t|i can['’]t|i won['’]t)\b")
        .unwrap()
});

static SCALE_VALUE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{1,2})\b").unwrap());

/// Coarse class of a step response, used to pick branch transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ResponseClass {
    Affirmative,
    Negative,
    ScaleLow,
    ScaleMid,
    ScaleHigh,
    Detailed,
    Brief,
}

/// Classify `response` given the answer shape the step expects.
///
/// Yes/no and scale answers that cannot be read as such fall back to the
/// free-text classes.
pub fn classify_response(expected: Option<ResponseKind>, response: &str) -> ResponseClass {
    match expected {
        Some(ResponseKind::YesNo) => {
            // Negatives first: "i can't" would otherwise match "i can".
            if NEGATIVE.is_match(response) {
                return ResponseClass::Negative;
            }
            if AFFIRMATIVE.is_match(response) {
                return ResponseClass::Affirmative;
            }
        }
        Some(ResponseKind::Scale) => {
            let value = SCALE_VALUE
                .captures_iter(response)
                .filter_map(|c| c[1].parse::<u8>().ok())
                .find(|v| (1..=10).contains(v));
            match value {
                Some(v) if v <= 3 => return ResponseClass::ScaleLow,
                Some(v) if v >= 7 => return ResponseClass::ScaleHigh,
                Some(_) => return ResponseClass::ScaleMid,
                None => {}
            }
        }
        _ => {}
    }

    if response.split_whitespace().count() >= DETAILED_WORDS {
        ResponseClass::Detailed
    } else {
        ResponseClass::Brief
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FlowStatus {
    InProgress,
    Completed,
    /// A response contained crisis language; the flow stops here.
    Escalated,
}

/// Resumable state of one walk through a flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowProgress {
    pub flow_id: String,
    /// `None` once the flow has completed.
    pub current_step_id: Option<String>,
    pub completed_steps: Vec<String>,
    /// Latest response per step id.
    pub responses: BTreeMap<String, String>,
    pub started_at: DateTime<Utc>,
    pub last_active_at: DateTime<Utc>,
    pub insights: Vec<String>,
    pub status: FlowStatus,
}

/// What happened after a response was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced { next_step_id: String },
    Completed,
    Escalated,
}

/// An active walk through one flow of a borrowed catalog.
#[derive(Debug)]
pub struct FlowSession<'a> {
    flow: &'a TherapeuticFlow,
    progress: FlowProgress,
}

impl<'a> FlowSession<'a> {
    /// Start `flow_id` at its first step.
    pub fn start(catalog: &'a Catalog, flow_id: &str, now: DateTime<Utc>) -> Result<Self, WaveError> {
        let flow = lookup_flow(catalog, flow_id)?;
        let first = flow
            .steps
            .first()
            .ok_or_else(|| WaveError::InvalidInput(format!("flow `{flow_id}` has no steps")))?;

        debug!(flow_id, "therapeutic flow started");
        Ok(Self {
            flow,
            progress: FlowProgress {
                flow_id: flow.id.clone(),
                current_step_id: Some(first.id.clone()),
                completed_steps: Vec::new(),
                responses: BTreeMap::new(),
                started_at: now,
                last_active_at: now,
                insights: Vec::new(),
                status: FlowStatus::InProgress,
            },
        })
    }

    /// Continue from previously saved progress.
    pub fn resume(catalog: &'a Catalog, progress: FlowProgress) -> Result<Self, WaveError> {
        let flow = lookup_flow(catalog, &progress.flow_id)?;
        if let Some(step_id) = &progress.current_step_id
            && flow.step(step_id).is_none()
        {
            return Err(WaveError::InvalidInput(format!(
                "flow `{}` has no step `{step_id}`",
                flow.id
            )));
        }
        Ok(Self { flow, progress })
    }

    pub fn flow(&self) -> &'a TherapeuticFlow {
        self.flow
    }

    /// The step awaiting a response, if the flow is still running.
    pub fn current_step(&self) -> Option<&'a TherapeuticStep> {
        if self.progress.status != FlowStatus::InProgress {
            return None;
        }
        let flow = self.flow;
        self.progress
            .current_step_id
            .as_deref()
            .and_then(|id| flow.step(id))
    }

    pub fn progress(&self) -> &FlowProgress {
        &self.progress
    }

    pub fn into_progress(self) -> FlowProgress {
        self.progress
    }

    /// Record `response` for the current step and move on.
    pub fn respond(&mut self, response: &str, now: DateTime<Utc>) -> Result<StepOutcome, WaveError> {
        let step = self.current_step().ok_or_else(|| {
            WaveError::InvalidInput(format!("flow `{}` is not awaiting a response", self.flow.id))
        })?;
        let response = response.trim();
        if response.is_empty() {
            return Err(WaveError::InvalidInput("response is empty".to_string()));
        }

        self.progress
            .responses
            .insert(step.id.clone(), response.to_string());
        if !self.progress.completed_steps.contains(&step.id) {
            self.progress.completed_steps.push(step.id.clone());
        }
        self.progress.last_active_at = now;

        if moderate(response) {
            warn!(flow_id = %self.flow.id, step_id = %step.id, "crisis language in flow response");
            self.progress.status = FlowStatus::Escalated;
            self.progress
                .insights
                .push("Crisis language detected; crisis resources should be offered before continuing".to_string());
            return Ok(StepOutcome::Escalated);
        }

        let class = classify_response(step.expected_response, response);
        match self.next_step(step, class) {
            Some(next) => {
                debug!(flow_id = %self.flow.id, from = %step.id, to = %next.id, %class, "flow advanced");
                self.progress.current_step_id = Some(next.id.clone());
                Ok(StepOutcome::Advanced {
                    next_step_id: next.id.clone(),
                })
            }
            None => {
                self.complete();
                Ok(StepOutcome::Completed)
            }
        }
    }

    fn next_step(&self, step: &TherapeuticStep, class: ResponseClass) -> Option<&'a TherapeuticStep> {
        let flow = self.flow;
        if let StepTransition::Branch { rules, otherwise } = &step.transition {
            let target = rules
                .iter()
                .find(|rule| rule.when == class)
                .map(|rule| &rule.goto)
                .or(otherwise.as_ref());
            if let Some(target) = target {
                return flow.step(target);
            }
        }
        flow.step_after(&step.id)
    }

    fn complete(&mut self) {
        self.progress.status = FlowStatus::Completed;
        self.progress.current_step_id = None;

        let all_responses: Vec<&str> = self.progress.responses.values().map(String::as_str).collect();
        let themes = detect_categories(&all_responses.join(" "));
        if !themes.is_empty() {
            let names: Vec<String> = themes.iter().map(ToString::to_string).collect();
            self.progress
                .insights
                .push(format!("Themes noticed in your responses: {}", names.join(", ")));
        }
        self.progress
            .insights
            .push(format!("Completed {} ({} steps)", self.flow.name, self.progress.completed_steps.len()));

        info!(flow_id = %self.flow.id, steps = self.progress.completed_steps.len(), "therapeutic flow completed");
    }
}

fn lookup_flow<'a>(catalog: &'a Catalog, flow_id: &str) -> Result<&'a TherapeuticFlow, WaveError> {
    catalog
        .flow(flow_id)
        .ok_or_else(|| WaveError::InvalidInput(format!("unknown flow `{flow_id}`")))
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn yes_no_classification() {
        let yes_no = Some(ResponseKind::YesNo);
        assert_eq!(classify_response(yes_no, "Yes, tomorrow morning"), ResponseClass::Affirmative);
        assert_eq!(classify_response(yes_no, "  okay"), ResponseClass::Affirmative);
        assert_eq!(classify_response(yes_no, "No, not really"), ResponseClass::Negative);
        assert_eq!(classify_response(yes_no, "I can't commit to that"), ResponseClass::Negative);
        assert_eq!(classify_response(yes_no, "maybe"), ResponseClass::Brief);
    }

    #[test]
    fn scale_classification() {
        let scale = Some(ResponseKind::Scale);
        assert_eq!(classify_response(scale, "2"), ResponseClass::ScaleLow);
        assert_eq!(classify_response(scale, "about a 5 today"), ResponseClass::ScaleMid);
        assert_eq!(classify_response(scale, "10, it is a lot"), ResponseClass::ScaleHigh);
        assert_eq!(classify_response(scale, "0 then 8"), ResponseClass::ScaleHigh);
        assert_eq!(classify_response(scale, "hard to say"), ResponseClass::Brief);
    }

    #[test]
    fn free_text_classification_by_length() {
        let long = "word ".repeat(DETAILED_WORDS);
        assert_eq!(classify_response(None, &long), ResponseClass::Detailed);
        assert_eq!(
            classify_response(Some(ResponseKind::Detailed), "work deadline"),
            ResponseClass::Brief
        );
    }

    #[test]
    fn walks_a_flow_to_completion() {
        let catalog = Catalog::builtin();
        let mut session = FlowSession::start(&catalog, "stress-mindfulness", t0()).unwrap();
        assert_eq!(session.current_step().unwrap().id, "stress-assessment");

        let answers = [
            "7",
            "tight shoulders",
            "done",
            "birds outside",
            "the deadline pressure is not in my control",
        ];
        let mut now = t0();
        for (i, answer) in answers.iter().enumerate() {
            now += Duration::minutes(2);
            let outcome = session.respond(answer, now).unwrap();
            if i + 1 < answers.len() {
                assert!(matches!(outcome, StepOutcome::Advanced { .. }));
            } else {
                assert_eq!(outcome, StepOutcome::Completed);
            }
        }

        let progress = session.into_progress();
        assert_eq!(progress.status, FlowStatus::Completed);
        assert_eq!(progress.current_step_id, None);
        assert_eq!(progress.completed_steps.len(), 5);
        assert_eq!(progress.last_active_at, now);
        assert!(progress.insights.iter().any(|i| i.contains("stress")));
        assert!(progress.insights.last().unwrap().starts_with("Completed"));
    }

    #[test]
    fn negative_commitment_branches_back_to_planning() {
        let catalog = Catalog::builtin();
        let mut session = FlowSession::start(&catalog, "depression-behavioral-activation", t0()).unwrap();
        for answer in ["low", "stayed in", "friendship", "text one friend"] {
            session.respond(answer, t0()).unwrap();
        }
        assert_eq!(session.current_step().unwrap().id, "commitment");

        let outcome = session.respond("No, not this week", t0()).unwrap();
        assert_eq!(
            outcome,
            StepOutcome::Advanced {
                next_step_id: "small-step-planning".to_string()
            }
        );

        session.respond("just open the chat app", t0()).unwrap();
        assert_eq!(session.respond("yes", t0()).unwrap(), StepOutcome::Completed);
        assert_eq!(session.progress().responses["small-step-planning"], "just open the chat app");
        assert_eq!(session.progress().completed_steps.len(), 5);
    }

    #[test]
    fn crisis_response_escalates_and_stops() {
        let catalog = Catalog::builtin();
        let mut session = FlowSession::start(&catalog, "anxiety-cbt-basic", t0()).unwrap();
        let outcome = session.respond("I feel hopeless about everything", t0()).unwrap();
        assert_eq!(outcome, StepOutcome::Escalated);
        assert_eq!(session.progress().status, FlowStatus::Escalated);
        assert!(session.current_step().is_none());
        assert!(session.respond("anything", t0()).is_err());
    }

    #[test]
    fn empty_response_is_rejected() {
        let catalog = Catalog::builtin();
        let mut session = FlowSession::start(&catalog, "anxiety-cbt-basic", t0()).unwrap();
        assert!(matches!(session.respond("   ", t0()), Err(WaveError::InvalidInput(_))));
        assert!(session.progress().completed_steps.is_empty());
    }

    #[test]
    fn unknown_flow_is_rejected() {
        let catalog = Catalog::builtin();
        assert!(FlowSession::start(&catalog, "no-such-flow", t0()).is_err());
    }

    #[test]
    fn progress_resumes_after_serialization() {
        let catalog = Catalog::builtin();
        let mut session = FlowSession::start(&catalog, "anxiety-cbt-basic", t0()).unwrap();
        session.respond("a presentation at work", t0()).unwrap();

        let json = serde_json::to_string(session.progress()).unwrap();
        assert!(json.contains("\"currentStepId\":\"anxiety-physical\""));
        let restored: FlowProgress = serde_json::from_str(&json).unwrap();

        let resumed = FlowSession::resume(&catalog, restored).unwrap();
        assert_eq!(resumed.current_step().unwrap().id, "anxiety-physical");
    }

    #[test]
    fn resume_rejects_unknown_step() {
        let catalog = Catalog::builtin();
        let mut progress = FlowSession::start(&catalog, "anxiety-cbt-basic", t0())
            .unwrap()
            .into_progress();
        progress.current_step_id = Some("gone".to_string());
        assert!(FlowSession::resume(&catalog, progress).is_err());
    }
}
