// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wave - command-line driver for the wellness insights engine.
//!
//! Runs the crisis filter, category detection, progress reports and guided
//! flows over local JSON exports.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod catalog;
mod report;
mod store;
mod text;
mod walk;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use wave_config::WaveConfig;
use wave_core::{EmotionalCategory, WaveError};
use wave_insights::{Catalog, FlowCategory};

/// Wave - heuristic mood and journal insights.
#[derive(Parser, Debug)]
#[command(name = "wave", version, about, long_about = None)]
struct Cli {
    /// Configuration file to load instead of the default search path.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Mood and journal exports to analyze.
#[derive(Args, Debug, Clone, Default)]
struct HistoryArgs {
    /// JSON export of mood samples.
    #[arg(long)]
    moods: Option<PathBuf>,

    /// JSON export of journal entries.
    #[arg(long)]
    journal: Option<PathBuf>,

    /// Subject the exports belong to.
    #[arg(long, default_value = "local")]
    subject: String,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Check text for crisis language.
    Moderate { text: String },
    /// Detect emotional categories in text.
    Categories { text: String },
    /// Build a progress report from mood and journal exports.
    Report(HistoryArgs),
    /// Print the chat prompt for a message, conditioned on a report.
    Prompt {
        text: String,
        #[command(flatten)]
        history: HistoryArgs,
    },
    /// List therapeutic flows.
    Flows {
        #[arg(long)]
        category: Option<FlowCategory>,
    },
    /// List coping strategies.
    Strategies {
        #[arg(long)]
        category: Option<EmotionalCategory>,
        /// Pick one strategy at random.
        #[arg(long)]
        random: bool,
    },
    /// Walk a therapeutic flow interactively.
    Walk { flow_id: String },
}

/// Output settings shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
    pub color: bool,
}

impl Output {
    fn new(json: bool, plain: bool) -> Self {
        Self {
            json,
            color: !plain && std::io::stdout().is_terminal(),
        }
    }

    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<(), WaveError> {
        let rendered = serde_json::to_string_pretty(value)
            .map_err(|e| WaveError::Internal(format!("failed to serialize output: {e}")))?;
        println!("{rendered}");
        Ok(())
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = check_config_path(cli.config.as_deref()) {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            wave_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging.level);

    if let Err(e) = run(cli, config).await {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: WaveConfig) -> Result<(), WaveError> {
    let output = Output::new(cli.json, cli.plain);

    match cli.command {
        Commands::Moderate { text } => text::run_moderate(&text, output),
        Commands::Categories { text } => text::run_categories(&text, output),
        Commands::Report(history) => {
            let catalog = load_catalog(&config)?;
            report::run_report(&history, catalog, &config, output).await
        }
        Commands::Prompt { text, history } => {
            let catalog = load_catalog(&config)?;
            text::run_prompt(&text, &history, catalog, &config).await
        }
        Commands::Flows { category } => catalog::run_flows(&*load_catalog(&config)?, category, output),
        Commands::Strategies { category, random } => {
            catalog::run_strategies(&*load_catalog(&config)?, category, random, output)
        }
        Commands::Walk { flow_id } => walk::run_walk(&*load_catalog(&config)?, &flow_id, output),
    }
}

/// An explicit `--config` must name an existing file; figment would
/// otherwise treat it as empty and fall back to defaults.
fn check_config_path(path: Option<&Path>) -> Result<(), WaveError> {
    match path {
        Some(path) if !path.is_file() => Err(WaveError::Config(format!(
            "config file not found: {}",
            path.display()
        ))),
        _ => Ok(()),
    }
}

fn load_config(path: Option<&Path>) -> Result<WaveConfig, Vec<wave_config::ConfigError>> {
    match path {
        Some(path) => wave_config::load_and_validate_path(path),
        None => wave_config::load_and_validate(),
    }
}

/// The catalog named in `[catalog]`, or the built-in one.
fn load_catalog(config: &WaveConfig) -> Result<Arc<Catalog>, WaveError> {
    let catalog = match &config.catalog.path {
        Some(path) => {
            tracing::info!(path = %path, "loading catalog");
            Catalog::from_path(Path::new(path))?
        }
        None => Catalog::builtin(),
    };
    Ok(Arc::new(catalog))
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("wave={log_level},wave_insights={log_level},warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn parses_report_command() {
        let cli = Cli::try_parse_from([
            "wave", "--json", "report", "--moods", "moods.json", "--journal", "journal.json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Report(history) => {
                assert_eq!(history.moods, Some(PathBuf::from("moods.json")));
                assert_eq!(history.subject, "local");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_category_filters() {
        let cli = Cli::try_parse_from(["wave", "strategies", "--category", "self-esteem"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Strategies {
                category: Some(EmotionalCategory::SelfEsteem),
                random: false
            }
        ));

        let cli = Cli::try_parse_from(["wave", "flows", "--category", "mindfulness"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Flows {
                category: Some(FlowCategory::Mindfulness)
            }
        ));
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(Cli::try_parse_from(["wave", "strategies", "--category", "joy"]).is_err());
    }

    #[test]
    fn default_config_uses_builtin_catalog() {
        let catalog = load_catalog(&WaveConfig::default()).unwrap();
        assert_eq!(catalog.flows.len(), 3);
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let mut config = WaveConfig::default();
        config.catalog.path = Some("/nonexistent/catalog.toml".to_string());
        assert!(load_catalog(&config).is_err());
    }

    #[test]
    fn explicit_config_must_exist() {
        let err = check_config_path(Some(Path::new("/nonexistent/wave.toml"))).unwrap_err();
        assert!(matches!(err, WaveError::Config(_)));
        assert!(err.to_string().contains("/nonexistent/wave.toml"));
        assert!(check_config_path(None).is_ok());
    }
}
