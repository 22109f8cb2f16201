// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Wave configuration system.

use wave_config::diagnostic::ConfigError;
use wave_config::model::WaveConfig;
use wave_config::{load_and_validate_str, load_config_from_str};

#[test]
fn valid_toml_deserializes_into_wave_config() {
    let toml = r#"
[logging]
level = "debug"

[analysis]
mood_window_days = 14
journal_window_days = 21
recent_window = 5
max_suggested_strategies = 3
fallback_strategies = 2

[risk]
very_low_mood_below = 1.5
low_mood_below = 2.5
high_at = 6
moderate_at = 4

[catalog]
path = "/srv/wave/catalog.toml"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.analysis.mood_window_days, 14);
    assert_eq!(config.analysis.journal_window_days, 21);
    assert_eq!(config.analysis.recent_window, 5);
    assert_eq!(config.analysis.max_suggested_strategies, 3);
    assert_eq!(config.analysis.fallback_strategies, 2);
    assert_eq!(config.risk.very_low_mood_below, 1.5);
    assert_eq!(config.risk.low_mood_below, 2.5);
    assert_eq!(config.risk.high_at, 6);
    assert_eq!(config.risk.moderate_at, 4);
    assert_eq!(config.catalog.path.as_deref(), Some("/srv/wave/catalog.toml"));
}

#[test]
fn missing_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.analysis.mood_window_days, 30);
    assert_eq!(config.analysis.journal_window_days, 30);
    assert_eq!(config.analysis.recent_window, 7);
    assert_eq!(config.analysis.max_suggested_strategies, 4);
    assert_eq!(config.analysis.fallback_strategies, 3);
    assert!(config.catalog.path.is_none());
}

/// The default risk weights reproduce the documented additive scoring.
#[test]
fn default_risk_weights_match_documented_heuristic() {
    let risk = WaveConfig::default().risk;
    assert_eq!(risk.very_low_mood_below, 2.0);
    assert_eq!(risk.very_low_mood_weight, 3);
    assert_eq!(risk.low_mood_below, 3.0);
    assert_eq!(risk.low_mood_weight, 2);
    assert_eq!(risk.steep_decline_strength, 0.5);
    assert_eq!(risk.steep_decline_weight, 2);
    assert_eq!(risk.hopelessness_weight, 3);
    assert_eq!(risk.isolation_weight, 2);
    assert_eq!(risk.many_concerns_above, 2);
    assert_eq!(risk.many_concerns_weight, 1);
    assert_eq!(risk.high_at, 5);
    assert_eq!(risk.moderate_at, 3);
}

#[test]
fn unknown_field_in_analysis_produces_error() {
    let toml = r#"
[analysis]
mood_windw_days = 10
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("mood_windw_days"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

#[test]
fn unknown_top_level_section_is_rejected() {
    let toml = r#"
[metrics]
enabled = true
"#;

    assert!(load_config_from_str(toml).is_err());
}

#[test]
fn diagnostic_error_suggests_closest_key() {
    let toml = r#"
[analysis]
mood_windw_days = 10
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    let has_suggestion = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. } if {
            key == "mood_windw_days"
                && suggestion.as_deref() == Some("mood_window_days")
                && valid_keys.contains("journal_window_days")
        })
    });
    assert!(
        has_suggestion,
        "should suggest mood_window_days, got: {errors:?}"
    );
}

#[test]
fn invalid_type_is_reported() {
    let toml = r#"
[risk]
high_at = "five"
"#;

    let err = load_config_from_str(toml).expect_err("should reject invalid type");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("invalid type") || err_str.contains("high_at"),
        "error should mention type mismatch, got: {err_str}"
    );
}

#[test]
fn semantic_validation_runs_after_parsing() {
    let toml = r#"
[risk]
moderate_at = 8
high_at = 5
"#;

    let errors = load_and_validate_str(toml).expect_err("inverted thresholds should fail");
    assert!(errors.iter().any(
        |e| matches!(e, ConfigError::Validation { message } if message.contains("moderate_at"))
    ));
}

#[test]
fn config_error_renders_with_miette() {
    use miette::{Diagnostic, GraphicalReportHandler};

    let error = ConfigError::UnknownKey {
        key: "hihg_at".to_string(),
        suggestion: Some("high_at".to_string()),
        valid_keys: "high_at, moderate_at".to_string(),
        span: None,
        src: None,
    };

    assert!(error.code().is_some());
    let help = error.help().expect("unknown key has help").to_string();
    assert!(help.contains("did you mean `high_at`"), "got: {help}");

    let mut buf = String::new();
    GraphicalReportHandler::new()
        .render_report(&mut buf, &error)
        .expect("should render without error");
    assert!(buf.contains("hihg_at"));
}
