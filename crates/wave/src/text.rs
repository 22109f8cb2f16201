// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `wave moderate`, `wave categories` and `wave prompt`.

use std::collections::BTreeSet;
use std::sync::Arc;

use colored::Colorize;
use serde::Serialize;
use wave_config::WaveConfig;
use wave_core::{EmotionalCategory, WaveError};
use wave_insights::{build_chat_prompt, detect_categories, moderate, Catalog};

use crate::report::generate_for;
use crate::{HistoryArgs, Output};

#[derive(Debug, Serialize)]
struct ModerationResult {
    flagged: bool,
}

#[derive(Debug, Serialize)]
struct CategoryResult {
    categories: BTreeSet<EmotionalCategory>,
}

pub fn run_moderate(text: &str, output: Output) -> Result<(), WaveError> {
    let flagged = moderate(text);
    if output.json {
        return output.print_json(&ModerationResult { flagged });
    }

    match (flagged, output.color) {
        (true, true) => println!("{}", "flagged: crisis language detected".red().bold()),
        (true, false) => println!("flagged: crisis language detected"),
        (false, true) => println!("{}", "clear".green()),
        (false, false) => println!("clear"),
    }
    Ok(())
}

pub fn run_categories(text: &str, output: Output) -> Result<(), WaveError> {
    let categories = detect_categories(text);
    if output.json {
        return output.print_json(&CategoryResult { categories });
    }

    if categories.is_empty() {
        println!("no categories detected");
    }
    for category in &categories {
        println!("{category}");
    }
    Ok(())
}

/// Print the chat prompt; the report is only built when history was given.
pub async fn run_prompt(
    text: &str,
    history: &HistoryArgs,
    catalog: Arc<Catalog>,
    config: &WaveConfig,
) -> Result<(), WaveError> {
    let report = if history.moods.is_some() || history.journal.is_some() {
        Some(generate_for(history, catalog, config).await)
    } else {
        None
    };
    println!("{}", build_chat_prompt(text, report.as_ref()));
    Ok(())
}
