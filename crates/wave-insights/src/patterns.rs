// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declarative keyword tables.
//!
//! Every keyword classifier in the engine is a [`PatternTable`]: rows of
//! `(label, pattern, min_matches)` evaluated the same way. A label is
//! reported when its pattern matches at least `min_matches` times
//! (non-overlapping, case-insensitive) in the text.

use std::collections::BTreeSet;

use regex::{Regex, RegexBuilder};

/// One row of a keyword table.
#[derive(Debug, Clone)]
struct PatternRule<L> {
    label: L,
    pattern: Regex,
    /// Minimum number of matches before `label` is reported.
    min_matches: usize,
}

/// A uniformly evaluated set of keyword rules.
#[derive(Debug, Clone)]
pub struct PatternTable<L> {
    rules: Vec<PatternRule<L>>,
}

impl<L: Copy + Ord> PatternTable<L> {
    /// Compile a table from `(label, pattern, min_matches)` rows.
    ///
    /// Patterns are compiled case-insensitive. A `min_matches` of zero is
    /// treated as one so a label never appears without any match.
    pub fn new(rows: &[(L, &str, usize)]) -> Result<Self, regex::Error> {
        let rules = rows
            .iter()
            .map(|&(label, pattern, min_matches)| {
                Ok(PatternRule {
                    label,
                    pattern: RegexBuilder::new(pattern).case_insensitive(true).build()?,
                    min_matches: min_matches.max(1),
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { rules })
    }

    /// Labels whose pattern meets its match floor in `text`.
    pub fn evaluate(&self, text: &str) -> BTreeSet<L> {
        self.rules
            .iter()
            .filter(|rule| meets_floor(&rule.pattern, text, rule.min_matches))
            .map(|rule| rule.label)
            .collect()
    }

    /// Raw match count per label, in table order.
    pub fn counts(&self, text: &str) -> Vec<(L, usize)> {
        self.rules
            .iter()
            .map(|rule| (rule.label, rule.pattern.find_iter(text).count()))
            .collect()
    }
}

/// Stops counting as soon as the floor is reached.
fn meets_floor(pattern: &Regex, text: &str, floor: usize) -> bool {
    pattern.find_iter(text).take(floor).count() >= floor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Label {
        Once,
        Twice,
        Thrice,
    }

    fn table() -> PatternTable<Label> {
        PatternTable::new(&[
            (Label::Once, r"walk", 1),
            (Label::Twice, r"alone|lonely", 2),
            (Label::Thrice, r"work|job", 3),
        ])
        .unwrap()
    }

    #[test]
    fn floors_are_applied_per_row() {
        let text = "walk to work, alone at the job, lonely";
        let labels = table().evaluate(text);
        assert!(labels.contains(&Label::Once));
        assert!(labels.contains(&Label::Twice));
        assert!(!labels.contains(&Label::Thrice), "two work mentions is below a floor of 3");
    }

    #[test]
    fn matching_is_case_insensitive_and_substring_based() {
        let labels = table().evaluate("WALKING");
        assert_eq!(labels, BTreeSet::from([Label::Once]));
    }

    #[test]
    fn counts_report_every_row() {
        let counts = table().counts("work work job");
        assert_eq!(
            counts,
            vec![(Label::Once, 0), (Label::Twice, 0), (Label::Thrice, 3)]
        );
    }

    #[test]
    fn zero_floor_is_raised_to_one() {
        let table = PatternTable::new(&[(Label::Once, "x", 0)]).unwrap();
        assert!(table.evaluate("nothing here").is_empty());
        assert!(table.evaluate("x").contains(&Label::Once));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        assert!(PatternTable::new(&[(Label::Once, "(unclosed", 1)]).is_err());
    }
}
