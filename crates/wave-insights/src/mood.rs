// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mood trend analysis.
//!
//! Samples are sorted newest-first internally, so caller order never affects
//! the result. The analysis window is anchored at the newest sample rather
//! than the wall clock, which keeps the analyzer a pure function.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, warn};
use wave_config::AnalysisConfig;
use wave_core::MoodSample;

/// Fewer in-window samples than this yields no statistics at all.
pub const MIN_SAMPLES_FOR_AVERAGE: usize = 3;

/// Fewer in-window samples than this yields no trend classification.
pub const MIN_SAMPLES_FOR_TREND: usize = 5;

/// Slopes with a smaller magnitude are classified as stable.
pub const STABLE_SLOPE: f64 = 0.05;

const LOW_VARIANCE: f64 = 0.5;
const HIGH_VARIANCE: f64 = 2.0;
const RECENT_SHIFT: f64 = 0.5;

const NEED_MORE_DATA: &str = "Need more mood entries for meaningful insights";
const UNABLE_TO_LOAD: &str = "Unable to load mood data";

/// Direction of mood over the analysis window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum MoodTrend {
    Improving,
    Stable,
    Declining,
    InsufficientData,
}

/// Mood statistics over the analysis window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodInsight {
    /// Mean rating rounded to two decimals; `0.0` when there is too little data.
    pub average_mood: f64,
    pub trend: MoodTrend,
    /// Magnitude of the regression slope (rating points per sample).
    pub trend_strength: f64,
    pub recent_low: Option<DateTime<Utc>>,
    pub recent_high: Option<DateTime<Utc>>,
    /// Human-readable observations for display.
    pub patterns: Vec<String>,
    /// Valid samples inside the window.
    pub sample_count: usize,
}

impl MoodInsight {
    /// The degraded insight used when there is too little data.
    pub fn insufficient(sample_count: usize) -> Self {
        Self::degraded(NEED_MORE_DATA, sample_count)
    }

    /// The degraded insight used when the storage collaborator failed.
    pub fn unavailable() -> Self {
        Self::degraded(UNABLE_TO_LOAD, 0)
    }

    fn degraded(note: &str, sample_count: usize) -> Self {
        Self {
            average_mood: 0.0,
            trend: MoodTrend::InsufficientData,
            trend_strength: 0.0,
            recent_low: None,
            recent_high: None,
            patterns: vec![note.to_string()],
            sample_count,
        }
    }

    /// Whether `average_mood` was computed from real data rather than being
    /// the zero placeholder of a degraded insight.
    pub fn has_average(&self) -> bool {
        self.sample_count >= MIN_SAMPLES_FOR_AVERAGE
    }
}

/// Mood analyzer with a configurable window.
#[derive(Debug, Clone)]
pub struct MoodAnalyzer {
    window_days: u32,
    recent_window: usize,
}

impl Default for MoodAnalyzer {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}

impl MoodAnalyzer {
    pub fn new(window_days: u32, recent_window: usize) -> Self {
        Self {
            window_days,
            recent_window: recent_window.max(1),
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.mood_window_days, config.recent_window)
    }

    /// Analyze `samples` in any order.
    pub fn analyze(&self, samples: &[MoodSample]) -> MoodInsight {
        let window = self.select_window(samples);
        if window.len() < MIN_SAMPLES_FOR_AVERAGE {
            debug!(samples = window.len(), "too few mood samples for insights");
            return MoodInsight::insufficient(window.len());
        }

        let values: Vec<f64> = window.iter().map(|s| f64::from(s.value)).collect();
        let overall = mean(&values);
        let (trend, trend_strength) = classify_trend(&values);

        let recent = &window[..window.len().min(self.recent_window)];
        let recent_values = &values[..recent.len()];

        let mut patterns = Vec::new();
        let variance = variance(&values, overall);
        if variance < LOW_VARIANCE {
            patterns.push("Mood has been relatively stable".to_string());
        } else if variance > HIGH_VARIANCE {
            patterns.push("Mood shows high variability - consider tracking triggers".to_string());
        }

        let recent_mean = mean(recent_values);
        if recent_mean < overall - RECENT_SHIFT {
            patterns.push("Recent mood has been lower than usual".to_string());
        } else if recent_mean > overall + RECENT_SHIFT {
            patterns.push("Recent mood has been better than usual".to_string());
        }

        debug!(
            samples = window.len(),
            average = overall,
            %trend,
            strength = trend_strength,
            "mood insight computed"
        );

        MoodInsight {
            average_mood: round2(overall),
            trend,
            trend_strength,
            recent_low: extreme(recent, |candidate, best| candidate < best),
            recent_high: extreme(recent, |candidate, best| candidate > best),
            patterns,
            sample_count: window.len(),
        }
    }

    /// Valid samples inside the window, newest first.
    fn select_window(&self, samples: &[MoodSample]) -> Vec<MoodSample> {
        let mut window: Vec<MoodSample> = samples.iter().filter(|s| s.is_valid()).copied().collect();
        let skipped = samples.len() - window.len();
        if skipped > 0 {
            warn!("skipped {skipped} mood sample(s) outside the 1-5 scale");
        }

        // Stable sort keeps equal timestamps in caller order.
        window.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        // A window reaching past the representable range keeps everything.
        if let Some(newest) = window.first().map(|s| s.timestamp)
            && let Some(cutoff) = Duration::try_days(i64::from(self.window_days))
                .and_then(|span| newest.checked_sub_signed(span))
        {
            window.retain(|s| s.timestamp >= cutoff);
        }
        window
    }
}

/// Analyze `samples` over the last `window_days`, with default settings otherwise.
pub fn analyze_mood(samples: &[MoodSample], window_days: u32) -> MoodInsight {
    let defaults = AnalysisConfig::default();
    MoodAnalyzer::new(window_days, defaults.recent_window).analyze(samples)
}

/// Trend over newest-first `values`.
///
/// The series is regressed in chronological order (oldest at x = 0), so a
/// positive slope means mood rose over time.
fn classify_trend(values: &[f64]) -> (MoodTrend, f64) {
    if values.len() < MIN_SAMPLES_FOR_TREND {
        return (MoodTrend::InsufficientData, 0.0);
    }

    let chronological: Vec<f64> = values.iter().rev().copied().collect();
    let slope = ols_slope(&chronological);
    let trend = if slope.abs() < STABLE_SLOPE {
        MoodTrend::Stable
    } else if slope > 0.0 {
        MoodTrend::Improving
    } else {
        MoodTrend::Declining
    };
    (trend, slope.abs())
}

/// Ordinary least-squares slope of `ys` against their index.
fn ols_slope(ys: &[f64]) -> f64 {
    let n = ys.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
    for (i, &y) in ys.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }
    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return 0.0;
    }
    (n * sum_xy - sum_x * sum_y) / denominator
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance around `mean`.
fn variance(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Timestamp of the first sample that beats every later one under `better`.
///
/// Ties keep the earlier (more recent) sample.
fn extreme(recent: &[MoodSample], better: impl Fn(u8, u8) -> bool) -> Option<DateTime<Utc>> {
    let mut iter = recent.iter();
    let mut best = iter.next()?;
    for sample in iter {
        if better(sample.value, best.value) {
            best = sample;
        }
    }
    Some(best.timestamp)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn day(n: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap() + Duration::days(n)
    }

    /// Newest-first values, one per day, the newest on day 100.
    fn newest_first(values: &[u8]) -> Vec<MoodSample> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| MoodSample::new(v, day(100 - i as i64)))
            .collect()
    }

    #[test]
    fn fewer_than_three_samples_is_insufficient() {
        for values in [&[][..], &[5][..], &[1, 5][..]] {
            let insight = analyze_mood(&newest_first(values), 30);
            assert_eq!(insight.trend, MoodTrend::InsufficientData);
            assert_eq!(insight.trend_strength, 0.0);
            assert_eq!(insight.average_mood, 0.0);
            assert_eq!(insight.patterns, vec![NEED_MORE_DATA.to_string()]);
            assert!(!insight.has_average());
        }
    }

    #[test]
    fn rising_mood_is_improving() {
        let insight = analyze_mood(&newest_first(&[5, 5, 5, 5, 5, 1]), 30);
        assert_eq!(insight.trend, MoodTrend::Improving);
        assert!(insight.trend_strength > STABLE_SLOPE);
    }

    #[test]
    fn falling_mood_is_declining() {
        let insight = analyze_mood(&newest_first(&[1, 2, 3, 4, 5]), 30);
        assert_eq!(insight.trend, MoodTrend::Declining);
        assert!((insight.trend_strength - 1.0).abs() < 1e-9);
    }

    #[test]
    fn flat_mood_is_stable() {
        let insight = analyze_mood(&newest_first(&[3, 3, 3, 3, 3, 3]), 30);
        assert_eq!(insight.trend, MoodTrend::Stable);
        assert_eq!(insight.trend_strength, 0.0);
        assert!(insight
            .patterns
            .contains(&"Mood has been relatively stable".to_string()));
    }

    #[test]
    fn input_order_does_not_change_the_result() {
        let mut samples = newest_first(&[5, 4, 4, 3, 2, 2, 1]);
        let expected = analyze_mood(&samples, 30);
        samples.reverse();
        assert_eq!(analyze_mood(&samples, 30), expected);
        samples.swap(1, 5);
        assert_eq!(analyze_mood(&samples, 30), expected);
    }

    #[test]
    fn three_or_four_samples_have_an_average_but_no_trend() {
        let insight = analyze_mood(&newest_first(&[4, 3, 2, 3]), 30);
        assert_eq!(insight.trend, MoodTrend::InsufficientData);
        assert_eq!(insight.average_mood, 3.0);
        assert!(insight.has_average());
        assert_eq!(insight.recent_high, Some(day(100)));
        assert_eq!(insight.recent_low, Some(day(98)));
    }

    #[test]
    fn average_is_rounded_to_two_decimals() {
        let insight = analyze_mood(&newest_first(&[1, 2, 2]), 30);
        assert_eq!(insight.average_mood, 1.67);
    }

    #[test]
    fn samples_outside_window_are_ignored() {
        let mut samples = newest_first(&[4, 4, 4]);
        samples.push(MoodSample::new(1, day(100 - 45)));
        let insight = analyze_mood(&samples, 30);
        assert_eq!(insight.sample_count, 3);
        assert_eq!(insight.average_mood, 4.0);
    }

    #[test]
    fn unbounded_window_keeps_every_sample() {
        let mut samples = newest_first(&[4, 4, 4]);
        samples.push(MoodSample::new(1, day(100 - 4000)));
        let insight = analyze_mood(&samples, u32::MAX);
        assert_eq!(insight.sample_count, 4);
        assert_eq!(insight.average_mood, 3.25);
    }

    #[test]
    fn out_of_scale_values_are_skipped() {
        let mut samples = newest_first(&[3, 3]);
        samples.push(MoodSample::new(9, day(90)));
        samples.push(MoodSample::new(0, day(89)));
        let insight = analyze_mood(&samples, 30);
        assert_eq!(insight.trend, MoodTrend::InsufficientData);
        assert_eq!(insight.sample_count, 2);
    }

    #[test]
    fn recent_extremes_come_from_most_recent_seven() {
        // Oldest sample holds the global minimum but lies outside the recent seven.
        let insight = analyze_mood(&newest_first(&[3, 5, 4, 2, 4, 3, 3, 1]), 30);
        assert_eq!(insight.recent_high, Some(day(99)));
        assert_eq!(insight.recent_low, Some(day(97)));
    }

    #[test]
    fn extreme_ties_resolve_to_most_recent() {
        let insight = analyze_mood(&newest_first(&[2, 2, 4, 4]), 30);
        assert_eq!(insight.recent_low, Some(day(100)));
        assert_eq!(insight.recent_high, Some(day(98)));
    }

    #[test]
    fn high_variability_is_noted() {
        let insight = analyze_mood(&newest_first(&[1, 5, 1, 5, 1, 5]), 30);
        assert!(insight
            .patterns
            .contains(&"Mood shows high variability - consider tracking triggers".to_string()));
    }

    #[test]
    fn recent_dip_is_noted() {
        let mut values = vec![2; 7];
        values.extend([5; 10]);
        let insight = analyze_mood(&newest_first(&values), 30);
        assert!(insight
            .patterns
            .contains(&"Recent mood has been lower than usual".to_string()));
    }

    #[test]
    fn recent_lift_is_noted() {
        let mut values = vec![5; 7];
        values.extend([2; 10]);
        let insight = analyze_mood(&newest_first(&values), 30);
        assert!(insight
            .patterns
            .contains(&"Recent mood has been better than usual".to_string()));
    }

    #[test]
    fn unavailable_insight_is_degraded() {
        let insight = MoodInsight::unavailable();
        assert_eq!(insight.trend, MoodTrend::InsufficientData);
        assert_eq!(insight.patterns, vec![UNABLE_TO_LOAD.to_string()]);
        assert!(!insight.has_average());
    }

    #[test]
    fn trend_serializes_kebab_case() {
        assert_eq!(MoodTrend::InsufficientData.to_string(), "insufficient-data");
    }
}
