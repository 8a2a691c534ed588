// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Style inference from the last automation commit and recent history.

use super::vocabulary::{
    ANGULAR_ONLY_PATTERN, ANGULAR_PATTERN, ESLINT_ONLY_PATTERN, ESLINT_START_PATTERN,
    GENERIC_PREFIX_PATTERN, GITMOJI_PATTERN, LOWERCASE_SUBJECT_PATTERN,
    PRIOR_CAPITALIZED_PATTERN, PRIOR_CONVENTIONAL_PATTERN, PRIOR_SCOPED_PATTERN,
    SEMANTIC_PATTERN, UPGRADE_EMOJI, UPPERCASE_SUBJECT_PATTERN,
};
use super::{CommitStyle, StyleDecision};

/// Share of recent messages a convention needs before it is considered in use.
pub const LIKELIHOOD_THRESHOLD: f64 = 0.3;

/// Token used when ESLint-style tags are detected.
const ESLINT_TOKEN: &str = "Upgrade";

/// A named statistical rule. Rules are evaluated in table order and the
/// first one that detects its convention decides the style.
struct StyleRule {
    name: &'static str,
    detect: fn(&[String]) -> bool,
    decide: fn(&[String]) -> StyleDecision,
}

const STATISTICAL_RULES: &[StyleRule] = &[
    StyleRule {
        name: "angular",
        detect: using_angular_commit_messages,
        decide: angular_decision,
    },
    StyleRule {
        name: "eslint",
        detect: using_eslint_commit_messages,
        decide: eslint_decision,
    },
    StyleRule {
        name: "gitmoji",
        detect: using_gitmoji_commit_messages,
        decide: gitmoji_decision,
    },
    StyleRule {
        name: "generic-prefixed",
        detect: using_prefixed_commit_messages,
        decide: generic_decision,
    },
];

fn angular_decision(history: &[String]) -> StyleDecision {
    StyleDecision::inferred(
        CommitStyle::ConventionalPrefixWithScope,
        Some(angular_commit_prefix(history)),
    )
}

fn eslint_decision(_history: &[String]) -> StyleDecision {
    StyleDecision::inferred(CommitStyle::ConventionalPrefix, Some(ESLINT_TOKEN.to_string()))
}

fn gitmoji_decision(_history: &[String]) -> StyleDecision {
    StyleDecision::inferred(CommitStyle::Gitmoji, None)
}

fn generic_decision(_history: &[String]) -> StyleDecision {
    StyleDecision::inferred(CommitStyle::GenericPrefixed, None)
}

/// Choose exactly one style: the last automation commit's style when it is
/// recognised, otherwise the first statistical rule that matches `history`.
pub fn infer_style(history: &[String], last_automation_message: Option<&str>) -> StyleDecision {
    if let Some(decision) = last_automation_message.and_then(prior_style) {
        tracing::debug!("Reusing style of last automation commit: {}", decision);
        return decision;
    }

    statistical_style(history)
}

/// Style of a previous automation commit, if it is one we recognise.
pub fn prior_style(message: &str) -> Option<StyleDecision> {
    if message.starts_with(UPGRADE_EMOJI) {
        return Some(StyleDecision::prior(CommitStyle::Gitmoji, None));
    }

    let style = if PRIOR_CONVENTIONAL_PATTERN.is_match(message) {
        CommitStyle::ConventionalPrefix
    } else if PRIOR_SCOPED_PATTERN.is_match(message) {
        CommitStyle::ConventionalPrefixWithScope
    } else {
        return None;
    };

    let token = message
        .split(|c: char| c == ':' || c == '(')
        .next()
        .map(str::to_string);
    Some(StyleDecision::prior(style, token))
}

/// Style inferred from recent human commit messages alone.
pub fn statistical_style(history: &[String]) -> StyleDecision {
    for rule in STATISTICAL_RULES {
        if (rule.detect)(history) {
            let decision = (rule.decide)(history);
            tracing::debug!("Rule '{}' matched: {}", rule.name, decision);
            return decision;
        }
        tracing::trace!("Rule '{}' did not match", rule.name);
    }

    tracing::debug!("No commit convention detected in {} messages", history.len());
    StyleDecision::none()
}

fn ratio(matching: usize, total: usize) -> f64 {
    matching as f64 / total as f64
}

/// Whether the history uses angular commit types.
///
/// Angular and ESLint share several words (`build`, `chore`, `docs`,
/// `fix`), so once enough messages look angular, words unique to either
/// vocabulary decide between the two.
pub fn using_angular_commit_messages(history: &[String]) -> bool {
    if history.is_empty() {
        return false;
    }

    let angular = history.iter().filter(|m| ANGULAR_PATTERN.is_match(m)).count();
    let share = ratio(angular, history.len());
    tracing::trace!("Angular share: {:.2}", share);
    if share < LIKELIHOOD_THRESHOLD {
        return false;
    }

    if history.iter().any(|m| ANGULAR_ONLY_PATTERN.is_match(m)) {
        return true;
    }

    !history.iter().any(|m| ESLINT_ONLY_PATTERN.is_match(m))
}

/// Whether the history uses ESLint commit tags.
pub fn using_eslint_commit_messages(history: &[String]) -> bool {
    if history.is_empty() {
        return false;
    }

    let eslint = history
        .iter()
        .filter(|m| ESLINT_START_PATTERN.is_match(m))
        .count();
    let share = ratio(eslint, history.len());
    tracing::trace!("ESLint share: {:.2}", share);
    share > LIKELIHOOD_THRESHOLD
}

/// Whether the history uses gitmoji short-codes.
pub fn using_gitmoji_commit_messages(history: &[String]) -> bool {
    if history.is_empty() {
        return false;
    }

    let gitmoji = history.iter().filter(|m| GITMOJI_PATTERN.is_match(m)).count();
    let share = ratio(gitmoji, history.len());
    tracing::trace!("Gitmoji share: {:.2}", share);
    share > LIKELIHOOD_THRESHOLD
}

/// Whether the history uses some other `word:` prefix. Never true when
/// gitmoji short-codes are in use.
pub fn using_prefixed_commit_messages(history: &[String]) -> bool {
    if history.is_empty() || using_gitmoji_commit_messages(history) {
        return false;
    }

    let prefixed = history
        .iter()
        .filter(|m| GENERIC_PREFIX_PATTERN.is_match(m))
        .count();
    let share = ratio(prefixed, history.len());
    tracing::trace!("Prefixed share: {:.2}", share);
    share > LIKELIHOOD_THRESHOLD
}

/// Type token for angular-style prefixes: `chore` when the history uses
/// `chore` and never `build`, `build` otherwise. Capitalised when most
/// angular messages start with an uppercase letter.
pub fn angular_commit_prefix(history: &[String]) -> String {
    let uses_chore = history
        .iter()
        .any(|m| m.starts_with("chore") || m.starts_with("Chore"));
    let uses_build = history
        .iter()
        .any(|m| m.starts_with("build") || m.starts_with("Build"));

    let prefix = if uses_chore && !uses_build {
        "chore"
    } else {
        "build"
    };

    if capitalize_angular_commit_prefix(history) {
        capitalize(prefix)
    } else {
        prefix.to_string()
    }
}

fn capitalize_angular_commit_prefix(history: &[String]) -> bool {
    let angular: Vec<&String> = history
        .iter()
        .filter(|m| ANGULAR_PATTERN.is_match(m))
        .collect();
    if angular.is_empty() {
        return false;
    }

    let capitalized = angular
        .iter()
        .filter(|m| m.starts_with(|c: char| c.is_ascii_uppercase()))
        .count();
    ratio(capitalized, angular.len()) > 0.5
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Casing of the word after the colon in conventional history messages.
///
/// `Some(true)` when every angular or ESLint message continues with an
/// uppercase letter, `Some(false)` when every one continues lowercase, and
/// `None` when casing is mixed or neither convention is in use.
pub fn history_capitalization(history: &[String]) -> Option<bool> {
    if !using_angular_commit_messages(history) && !using_eslint_commit_messages(history) {
        return None;
    }

    let semantic: Vec<&String> = history
        .iter()
        .filter(|m| SEMANTIC_PATTERN.is_match(m))
        .collect();

    if semantic.iter().all(|m| UPPERCASE_SUBJECT_PATTERN.is_match(m)) {
        Some(true)
    } else if semantic.iter().all(|m| LOWERCASE_SUBJECT_PATTERN.is_match(m)) {
        Some(false)
    } else {
        None
    }
}

/// Whether the first word of a title (and the security tag) should be
/// capitalised.
///
/// `base_prefix` is the prefix built from `decision`, without any security
/// marker.
pub fn capitalize_first_word(
    decision: &StyleDecision,
    last_automation_message: Option<&str>,
    history: &[String],
    base_prefix: &str,
) -> bool {
    if decision.is_prior() {
        match decision.style {
            CommitStyle::Gitmoji => return true,
            style if style.is_conventional() => {
                return last_automation_message
                    .map(|m| PRIOR_CAPITALIZED_PATTERN.is_match(m))
                    .unwrap_or(false);
            }
            _ => {}
        }
    }

    if let Some(capitalized) = history_capitalization(history) {
        return capitalized;
    }

    !base_prefix.starts_with(|c: char| c.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleOrigin;

    fn history(messages: &[&str]) -> Vec<String> {
        messages.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_prior_gitmoji_wins_over_history() {
        let h = history(&["fix: a", "feat: b", "docs: c"]);
        let decision = infer_style(&h, Some("⬆️ Bump foo from 1.0 to 2.0"));
        assert_eq!(decision.style, CommitStyle::Gitmoji);
        assert_eq!(decision.origin, StyleOrigin::PriorCommit);
        assert!(decision.token.is_none());
    }

    #[test]
    fn test_prior_conventional_keeps_token_case() {
        let decision = prior_style("Upgrade: Bump foo").unwrap();
        assert_eq!(decision.style, CommitStyle::ConventionalPrefix);
        assert_eq!(decision.token.as_deref(), Some("Upgrade"));

        let decision = prior_style("CHORE: bump foo").unwrap();
        assert_eq!(decision.token.as_deref(), Some("CHORE"));
    }

    #[test]
    fn test_prior_scoped() {
        let decision = prior_style("chore(deps): bump foo").unwrap();
        assert_eq!(decision.style, CommitStyle::ConventionalPrefixWithScope);
        assert_eq!(decision.token.as_deref(), Some("chore"));
    }

    #[test]
    fn test_unrecognised_prior_falls_back_to_history() {
        assert!(prior_style("Bump foo from 1.0 to 2.0").is_none());
        assert!(prior_style("feat(deps): bump foo").is_none());

        let h = history(&["fix: a", "feat: b"]);
        let decision = infer_style(&h, Some("Bump foo from 1.0 to 2.0"));
        assert_eq!(decision.origin, StyleOrigin::History);
        assert_eq!(decision.style, CommitStyle::ConventionalPrefixWithScope);
    }

    #[test]
    fn test_angular_history_uses_chore_token() {
        let h = history(&["fix: x", "feat: y", "docs: z", "chore: w"]);
        let decision = infer_style(&h, None);
        assert_eq!(decision.style, CommitStyle::ConventionalPrefixWithScope);
        assert_eq!(decision.token.as_deref(), Some("chore"));
    }

    #[test]
    fn test_angular_token_defaults_to_build() {
        let h = history(&["fix: x", "feat: y", "docs: z"]);
        assert_eq!(angular_commit_prefix(&h), "build");

        let h = history(&["chore: a", "build: b", "feat: c"]);
        assert_eq!(angular_commit_prefix(&h), "build");
    }

    #[test]
    fn test_angular_token_capitalized_by_majority() {
        let h = history(&["Fix: x", "Feat: y", "chore: z"]);
        assert_eq!(angular_commit_prefix(&h), "Chore");

        let h = history(&["Fix: x", "feat: y"]);
        assert_eq!(angular_commit_prefix(&h), "build");
    }

    #[test]
    fn test_angular_threshold_is_inclusive() {
        // 3 of 10 messages is exactly the threshold and is not rejected.
        let mut messages = vec!["feat: a", "fix: b", "docs: c"];
        messages.extend(std::iter::repeat("Update readme").take(7));
        assert!(using_angular_commit_messages(&history(&messages)));

        // 2 of 10 is below it.
        let mut messages = vec!["feat: a", "fix: b"];
        messages.extend(std::iter::repeat("Update readme").take(8));
        assert!(!using_angular_commit_messages(&history(&messages)));
    }

    #[test]
    fn test_angular_rejected_by_eslint_only_words() {
        let h = history(&["Fix: a", "Update: b", "Docs: c"]);
        assert!(!using_angular_commit_messages(&h));
        assert!(using_eslint_commit_messages(&h));

        let decision = statistical_style(&h);
        assert_eq!(decision.style, CommitStyle::ConventionalPrefix);
        assert_eq!(decision.token.as_deref(), Some("Upgrade"));
    }

    #[test]
    fn test_angular_only_word_beats_eslint_signal() {
        let h = history(&["Fix: a", "Update: b", "feat: c"]);
        assert!(using_angular_commit_messages(&h));
    }

    #[test]
    fn test_shared_words_default_to_angular() {
        let h = history(&["fix: a", "docs: b", "Initial import"]);
        assert!(using_angular_commit_messages(&h));
    }

    #[test]
    fn test_eslint_threshold_is_exclusive() {
        // None of these are angular types, so only the ESLint share counts.
        let mut messages = vec!["New: a", "Upgrade: b", "Breaking: c"];
        messages.extend(std::iter::repeat("misc").take(7));
        assert!(!using_eslint_commit_messages(&history(&messages)));

        let mut messages = vec!["New: a", "Upgrade: b", "Breaking: c", "New: d"];
        messages.extend(std::iter::repeat("misc").take(6));
        assert!(using_eslint_commit_messages(&history(&messages)));
    }

    #[test]
    fn test_gitmoji_threshold_is_exclusive() {
        let mut messages = vec![":bug: a", ":art: b", ":memo: c"];
        messages.extend(std::iter::repeat("misc").take(7));
        assert!(!using_gitmoji_commit_messages(&history(&messages)));
        assert_eq!(statistical_style(&history(&messages)).style, CommitStyle::None);

        let mut messages = vec![":bug: a", ":art: b", ":memo: c", ":zap: d"];
        messages.extend(std::iter::repeat("misc").take(6));
        assert!(using_gitmoji_commit_messages(&history(&messages)));
    }

    #[test]
    fn test_generic_prefixed_threshold_is_exclusive() {
        let mut messages = vec!["parser: a", "lexer: b", "codegen: c"];
        messages.extend(std::iter::repeat("misc").take(7));
        assert!(!using_prefixed_commit_messages(&history(&messages)));
        assert_eq!(statistical_style(&history(&messages)).style, CommitStyle::None);

        let mut messages = vec!["parser: a", "lexer: b", "codegen: c", "parser: d"];
        messages.extend(std::iter::repeat("misc").take(6));
        assert!(using_prefixed_commit_messages(&history(&messages)));
    }

    #[test]
    fn test_gitmoji_history() {
        let h = history(&[":bug: fix crash", ":sparkles: add flag", "Update readme"]);
        let decision = statistical_style(&h);
        assert_eq!(decision.style, CommitStyle::Gitmoji);
    }

    #[test]
    fn test_generic_prefixed_history() {
        let h = history(&["parser: handle eof", "lexer: track spans", "Release 1.0"]);
        assert!(using_prefixed_commit_messages(&h));
        assert_eq!(statistical_style(&h).style, CommitStyle::GenericPrefixed);
    }

    #[test]
    fn test_generic_prefixed_skipped_when_gitmoji() {
        let h = history(&[":bug: x", ":art: y", "parser: z"]);
        assert!(!using_prefixed_commit_messages(&h));
    }

    #[test]
    fn test_empty_history_is_none() {
        assert_eq!(infer_style(&[], None), StyleDecision::none());
        assert!(!using_angular_commit_messages(&[]));
        assert!(!using_eslint_commit_messages(&[]));
        assert!(!using_gitmoji_commit_messages(&[]));
        assert!(!using_prefixed_commit_messages(&[]));
    }

    #[test]
    fn test_plain_history_is_none() {
        let h = history(&["Add feature", "Fix bug", "Update readme"]);
        assert_eq!(statistical_style(&h).style, CommitStyle::None);
    }

    #[test]
    fn test_history_capitalization() {
        assert_eq!(
            history_capitalization(&history(&["fix: Add a", "feat: Remove b"])),
            Some(true)
        );
        assert_eq!(
            history_capitalization(&history(&["fix: add a", "feat(x): [wip] b"])),
            Some(false)
        );
        assert_eq!(
            history_capitalization(&history(&["fix: add a", "feat: Remove b"])),
            None
        );
        assert_eq!(history_capitalization(&history(&["Add a", "Remove b"])), None);
    }

    #[test]
    fn test_capitalize_first_word_for_prior_styles() {
        let gitmoji = StyleDecision::prior(CommitStyle::Gitmoji, None);
        assert!(capitalize_first_word(&gitmoji, Some("⬆️ bump"), &[], "⬆️ "));

        let scoped =
            StyleDecision::prior(CommitStyle::ConventionalPrefixWithScope, Some("chore".into()));
        assert!(!capitalize_first_word(
            &scoped,
            Some("chore(deps): bump foo"),
            &[],
            "chore(deps): "
        ));
        assert!(capitalize_first_word(
            &scoped,
            Some("chore(deps): [Security] Bump foo"),
            &[],
            "chore(deps): "
        ));
    }

    #[test]
    fn test_capitalize_first_word_fallback() {
        let h = history(&["Add a", "Remove b"]);
        let none = StyleDecision::none();
        assert!(capitalize_first_word(&none, None, &h, ""));

        let generic = StyleDecision::inferred(CommitStyle::GenericPrefixed, None);
        assert!(!capitalize_first_word(&generic, None, &h, "build(deps): "));
    }

    #[test]
    fn test_capitalize_first_word_from_history() {
        let h = history(&["feat: Add a", "fix: Remove b"]);
        let decision = statistical_style(&h);
        assert!(capitalize_first_word(&decision, None, &h, "build(deps): "));
    }
}
