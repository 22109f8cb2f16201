// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `wave walk` command implementation.
//!
//! Walks one therapeutic flow in a readline loop. A response with crisis
//! language stops the flow and prints crisis guidance instead.

use chrono::Utc;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use wave_core::WaveError;
use wave_insights::{Catalog, FlowSession, StepOutcome, TherapeuticStep};

use crate::Output;

const CRISIS_MESSAGE: &str = "It sounds like you are going through something really painful. \
You deserve support right now: please contact your local emergency number or a crisis line.";

pub fn run_walk(catalog: &Catalog, flow_id: &str, output: Output) -> Result<(), WaveError> {
    let mut session = FlowSession::start(catalog, flow_id, Utc::now())?;
    let mut rl = DefaultEditor::new()
        .map_err(|e| WaveError::Internal(format!("failed to initialize readline: {e}")))?;

    let name = &session.flow().name;
    if output.color {
        println!("{}", name.bold().green());
    } else {
        println!("{name}");
    }
    println!("Type /quit to stop.\n");

    while let Some(step) = session.current_step() {
        print_step(step, output.color);

        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(WaveError::Internal(format!("readline failed: {e}"))),
        };
        let trimmed = line.trim();
        if trimmed == "/quit" {
            break;
        }
        if trimmed.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(trimmed);

        match session.respond(trimmed, Utc::now())? {
            StepOutcome::Advanced { .. } => println!(),
            StepOutcome::Completed => {
                println!("\nFlow complete.");
                for insight in &session.progress().insights {
                    println!("  - {insight}");
                }
            }
            StepOutcome::Escalated => {
                if output.color {
                    eprintln!("\n{}", CRISIS_MESSAGE.red().bold());
                } else {
                    eprintln!("\n{CRISIS_MESSAGE}");
                }
            }
        }
    }

    if output.json {
        output.print_json(session.progress())?;
    }
    Ok(())
}

fn print_step(step: &TherapeuticStep, use_color: bool) {
    println!("{}", render_step(step, use_color));
}

/// Title, content and prompt, followed by any follow-up prompts.
fn render_step(step: &TherapeuticStep, use_color: bool) -> String {
    let title = if use_color {
        step.title.bold().to_string()
    } else {
        step.title.clone()
    };
    let mut lines = vec![title, step.content.clone(), step.prompt.clone()];
    lines.extend(step.follow_up.iter().map(|f| format!("  - {f}")));
    lines.join("\n")
}
