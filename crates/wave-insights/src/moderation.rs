// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Crisis-language filter.
//!
//! The filter gates the crisis-redirection branch of the UI, so it stays
//! deliberately broad: a false negative costs more than a false positive.
//! "panic" alone flags a message, and phrases match inside longer words.

use std::sync::LazyLock;

use regex::Regex;

/// Crisis indicator phrases. Both straight and typographic apostrophes count.
static CRISIS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)suicide|kill myself|self[- ]?harm|hopeless|panic|can['’]t breathe|hurt myself")
        .unwrap()
});

/// Returns `true` if `text` contains any crisis indicator phrase.
///
/// Pure and total: empty input is simply not flagged.
pub fn moderate(text: &str) -> bool {
    CRISIS_PATTERN.is_match(text)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn empty_text_is_not_flagged() {
        assert!(!moderate(""));
    }

    #[test]
    fn hopeless_is_flagged() {
        assert!(moderate("I feel hopeless today"));
    }

    #[test]
    fn neutral_text_is_not_flagged() {
        assert!(!moderate("I love swimming"));
    }

    #[test]
    fn matching_ignores_case() {
        assert!(moderate("I keep thinking about SUICIDE"));
        assert!(moderate("Kill Myself"));
    }

    #[test]
    fn self_harm_spelling_variants_are_flagged() {
        assert!(moderate("thoughts of self-harm"));
        assert!(moderate("thoughts of self harm"));
        assert!(moderate("thoughts of selfharm"));
    }

    #[test]
    fn phrases_inside_longer_words_match() {
        assert!(moderate("a panicky feeling"));
        assert!(moderate("hopelessness"));
    }

    #[test]
    fn panic_alone_is_flagged_outside_crisis_context() {
        assert!(moderate("don't panic, the bus is just late"));
    }

    #[test]
    fn typographic_apostrophe_is_flagged() {
        assert!(moderate("I can’t breathe"));
        assert!(moderate("I can't breathe"));
    }

    #[test]
    fn hurt_myself_is_flagged() {
        assert!(moderate("I want to hurt myself"));
    }

    proptest! {
        #[test]
        fn moderation_is_deterministic(text in ".{0,200}") {
            prop_assert_eq!(moderate(&text), moderate(&text));
        }

        #[test]
        fn appending_a_crisis_phrase_always_flags(prefix in "[a-z ]{0,80}") {
            let text = format!("{prefix} hopeless");
            prop_assert!(moderate(&text));
        }
    }
}
