// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `wave flows` and `wave strategies` command implementations.

use colored::Colorize;
use wave_core::{EmotionalCategory, WaveError};
use wave_insights::{Catalog, CopingStrategy, FlowCategory, TherapeuticFlow};

use crate::Output;

pub fn run_flows(catalog: &Catalog, category: Option<FlowCategory>, output: Output) -> Result<(), WaveError> {
    let flows: Vec<&TherapeuticFlow> = match category {
        Some(category) => catalog.flows_by_category(category),
        None => catalog.flows.iter().collect(),
    };
    if output.json {
        return output.print_json(&flows);
    }

    if flows.is_empty() {
        println!("no flows found");
    }
    for flow in flows {
        let title = if output.color {
            flow.name.bold().to_string()
        } else {
            flow.name.clone()
        };
        println!("{title} [{}]", flow.id);
        println!(
            "  {} | {} | {} | {} steps",
            flow.category,
            flow.difficulty,
            flow.estimated_time,
            flow.steps.len()
        );
        println!("  {}", flow.description);
    }
    Ok(())
}

pub fn run_strategies(
    catalog: &Catalog,
    category: Option<EmotionalCategory>,
    random: bool,
    output: Output,
) -> Result<(), WaveError> {
    let strategies: Vec<&CopingStrategy> = if random {
        catalog
            .random_strategy(category, &mut rand::thread_rng())
            .into_iter()
            .collect()
    } else {
        match category {
            Some(category) => catalog.strategies_by_category(category),
            None => catalog.strategies.iter().collect(),
        }
    };
    if output.json {
        return output.print_json(&strategies);
    }

    if strategies.is_empty() {
        println!("no strategies found");
    }
    for strategy in strategies {
        print_strategy(strategy, output.color);
    }
    Ok(())
}

fn print_strategy(strategy: &CopingStrategy, use_color: bool) {
    let title = if use_color {
        strategy.name.bold().to_string()
    } else {
        strategy.name.clone()
    };
    let evidence = if strategy.evidence_based { ", evidence-based" } else { "" };
    println!("{title} [{}]", strategy.id);
    println!("  {} | {}{evidence}", strategy.category, strategy.duration);
    println!("  {}", strategy.description);
    for (i, step) in strategy.instructions.iter().enumerate() {
        println!("    {}. {step}", i + 1);
    }
}
