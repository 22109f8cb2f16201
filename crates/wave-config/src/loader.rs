// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-based layered loading.
//!
//! Lookup order: `./wave.toml` > `~/.config/wave/wave.toml` > `/etc/wave/wave.toml`,
//! with `WAVE_` environment variables overriding all files.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use tracing::debug;

use crate::model::WaveConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/wave/wave.toml";

/// Config sections, used to turn `WAVE_SECTION_KEY` into `section.key`.
const SECTIONS: &[&str] = &["logging", "analysis", "risk", "catalog"];

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/wave/wave.toml`
/// 3. `~/.config/wave/wave.toml`
/// 4. `./wave.toml`
/// 5. `WAVE_*` environment variables
pub fn load_config() -> Result<WaveConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<WaveConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(WaveConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<WaveConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(WaveConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The full layered Figment, before extraction.
pub fn build_figment() -> Figment {
    let user_config = dirs::config_dir()
        .map(|d| d.join("wave/wave.toml"))
        .unwrap_or_default();
    let files = [Path::new(SYSTEM_CONFIG_PATH), user_config.as_path(), Path::new("wave.toml")];

    let mut figment = Figment::new().merge(Serialized::defaults(WaveConfig::default()));
    for file in files {
        if file.is_file() {
            debug!(path = %file.display(), "merging config file");
        }
        figment = figment.merge(Toml::file(file));
    }
    figment.merge(env_provider())
}

/// Env provider mapping only the section prefix to a dot.
///
/// `Env::split("_")` would turn `WAVE_ANALYSIS_MOOD_WINDOW_DAYS` into
/// `analysis.mood.window.days`; keys keep their underscores.
fn env_provider() -> Env {
    Env::prefixed("WAVE_").map(|key| map_env_key(key.as_str()).into())
}

fn map_env_key(key: &str) -> String {
    for section in SECTIONS {
        if let Some(rest) = key.strip_prefix(section).and_then(|r| r.strip_prefix('_')) {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}
