// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Coping-strategy and therapeutic-flow catalog.
//!
//! The catalog is read-only reference data loaded once and shared behind an
//! `Arc`. The built-in catalog ships as an embedded TOML asset; deployments
//! and tests can load an alternative with [`Catalog::from_toml_str`] or
//! [`Catalog::from_path`] instead of touching process globals.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use wave_core::{EmotionalCategory, WaveError};

use crate::flow::ResponseClass;

const BUILTIN_CATALOG: &str = include_str!("../catalog/builtin.toml");

static BUILTIN: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::from_toml_str(BUILTIN_CATALOG).expect("built-in catalog is valid"));

/// A catalog-defined coping technique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CopingStrategy {
    pub id: String,
    pub name: String,
    pub category: EmotionalCategory,
    pub technique: String,
    pub description: String,
    pub instructions: Vec<String>,
    pub duration: String,
    pub effectiveness: Vec<String>,
    pub evidence_based: bool,
}

/// Theme a therapeutic flow addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FlowCategory {
    Anxiety,
    Depression,
    Stress,
    Relationships,
    SelfEsteem,
    Mindfulness,
}

impl From<EmotionalCategory> for FlowCategory {
    fn from(category: EmotionalCategory) -> Self {
        match category {
            EmotionalCategory::Anxiety => FlowCategory::Anxiety,
            EmotionalCategory::Depression => FlowCategory::Depression,
            EmotionalCategory::Stress => FlowCategory::Stress,
            EmotionalCategory::Relationships => FlowCategory::Relationships,
            EmotionalCategory::SelfEsteem => FlowCategory::SelfEsteem,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    Question,
    Exercise,
    Reflection,
    CopingStrategy,
    Mindfulness,
}

/// Shape of answer a step asks for; drives response classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ResponseKind {
    Short,
    Detailed,
    Scale,
    YesNo,
}

/// One branch of a [`StepTransition::Branch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BranchRule {
    pub when: ResponseClass,
    pub goto: String,
}

/// How a flow moves on after a step is answered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum StepTransition {
    /// Continue with the next step in sequence.
    #[default]
    Next,
    /// Jump to the first rule matching the classified response; otherwise go
    /// to `otherwise`, or the next step in sequence when that is unset.
    Branch {
        rules: Vec<BranchRule>,
        #[serde(default)]
        otherwise: Option<String>,
    },
}

/// A single guided step of a flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TherapeuticStep {
    pub id: String,
    pub title: String,
    pub kind: StepKind,
    pub content: String,
    pub prompt: String,
    #[serde(default)]
    pub expected_response: Option<ResponseKind>,
    /// Optional follow-up prompts the UI may offer after this step.
    #[serde(default)]
    pub follow_up: Vec<String>,
    #[serde(default)]
    pub transition: StepTransition,
}

/// A catalog-defined ordered sequence of guided steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TherapeuticFlow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: FlowCategory,
    pub steps: Vec<TherapeuticStep>,
    pub estimated_time: String,
    pub difficulty: Difficulty,
}

impl TherapeuticFlow {
    pub fn step(&self, id: &str) -> Option<&TherapeuticStep> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// The step following `id` in sequence.
    pub fn step_after(&self, id: &str) -> Option<&TherapeuticStep> {
        let index = self.steps.iter().position(|s| s.id == id)?;
        self.steps.get(index + 1)
    }
}

/// Read-only collection of coping strategies and therapeutic flows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    #[serde(default)]
    pub strategies: Vec<CopingStrategy>,
    #[serde(default)]
    pub flows: Vec<TherapeuticFlow>,
}

impl Catalog {
    /// The catalog shipped with the engine.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Parse and validate a TOML catalog.
    pub fn from_toml_str(content: &str) -> Result<Self, WaveError> {
        let catalog: Catalog = toml::from_str(content).map_err(|e| WaveError::Catalog {
            message: "failed to parse catalog TOML".to_string(),
            source: Some(Box::new(e)),
        })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read, parse and validate a TOML catalog file.
    pub fn from_path(path: &Path) -> Result<Self, WaveError> {
        let content = std::fs::read_to_string(path).map_err(|e| WaveError::Catalog {
            message: format!("failed to read catalog {}", path.display()),
            source: Some(Box::new(e)),
        })?;
        Self::from_toml_str(&content)
    }

    /// Check id uniqueness and that every flow can be walked.
    pub fn validate(&self) -> Result<(), WaveError> {
        let invalid = |message: String| WaveError::Catalog {
            message,
            source: None,
        };

        let mut strategy_ids = HashSet::new();
        for strategy in &self.strategies {
            if !strategy_ids.insert(strategy.id.as_str()) {
                return Err(invalid(format!("duplicate strategy id `{}`", strategy.id)));
            }
        }

        let mut flow_ids = HashSet::new();
        for flow in &self.flows {
            if !flow_ids.insert(flow.id.as_str()) {
                return Err(invalid(format!("duplicate flow id `{}`", flow.id)));
            }
            if flow.steps.is_empty() {
                return Err(invalid(format!("flow `{}` has no steps", flow.id)));
            }

            let mut step_ids = HashSet::new();
            for step in &flow.steps {
                if !step_ids.insert(step.id.as_str()) {
                    return Err(invalid(format!(
                        "duplicate step id `{}` in flow `{}`",
                        step.id, flow.id
                    )));
                }
            }

            for step in &flow.steps {
                if let StepTransition::Branch { rules, otherwise } = &step.transition {
                    let targets = rules.iter().map(|r| &r.goto).chain(otherwise.iter());
                    for target in targets {
                        if !step_ids.contains(target.as_str()) {
                            return Err(invalid(format!(
                                "step `{}` in flow `{}` branches to unknown step `{target}`",
                                step.id, flow.id
                            )));
                        }
                    }
                }
            }
        }

        Ok(())
    }

    pub fn strategy(&self, id: &str) -> Option<&CopingStrategy> {
        self.strategies.iter().find(|s| s.id == id)
    }

    pub fn flow(&self, id: &str) -> Option<&TherapeuticFlow> {
        self.flows.iter().find(|f| f.id == id)
    }

    /// Strategies for `category`, in catalog order.
    pub fn strategies_by_category(&self, category: EmotionalCategory) -> Vec<&CopingStrategy> {
        self.strategies
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }

    /// Flows for `category`, in catalog order.
    pub fn flows_by_category(&self, category: FlowCategory) -> Vec<&TherapeuticFlow> {
        self.flows.iter().filter(|f| f.category == category).collect()
    }

    /// A randomly chosen strategy, optionally restricted to `category`.
    ///
    /// Returns `None` when no strategy qualifies.
    pub fn random_strategy<R: Rng + ?Sized>(
        &self,
        category: Option<EmotionalCategory>,
        rng: &mut R,
    ) -> Option<&CopingStrategy> {
        let pool: Vec<&CopingStrategy> = match category {
            Some(category) => self.strategies_by_category(category),
            None => self.strategies.iter().collect(),
        };
        pool.choose(rng).copied()
    }
}
