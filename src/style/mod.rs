// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit style classification.
//!
//! A repository's convention is taken from the last automation commit when
//! that commit uses a recognised style, and otherwise inferred from the
//! frequency of known prefixes in recent human commits.

mod classifier;
pub mod vocabulary;

pub use classifier::{
    angular_commit_prefix, capitalize_first_word, history_capitalization, infer_style,
    prior_style, statistical_style, using_angular_commit_messages, using_eslint_commit_messages,
    using_gitmoji_commit_messages, using_prefixed_commit_messages, LIKELIHOOD_THRESHOLD,
};

use serde::{Deserialize, Serialize};

/// Naming conventions a repository can use for commit titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitStyle {
    /// Leading emoji, for example `⬆️ Bump serde`.
    Gitmoji,
    /// Type token and colon, for example `Upgrade: serde`.
    ConventionalPrefix,
    /// Type token, parenthesised scope and colon, for example `chore(deps): ...`.
    ConventionalPrefixWithScope,
    /// Any lowercase word followed by a colon, for example `parser: ...`.
    GenericPrefixed,
    /// No recognisable convention.
    None,
}

impl CommitStyle {
    /// Get the string representation of the style.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitStyle::Gitmoji => "gitmoji",
            CommitStyle::ConventionalPrefix => "conventional_prefix",
            CommitStyle::ConventionalPrefixWithScope => "conventional_prefix_with_scope",
            CommitStyle::GenericPrefixed => "generic_prefixed",
            CommitStyle::None => "none",
        }
    }

    /// Whether the style is one of the conventional prefix styles.
    pub fn is_conventional(&self) -> bool {
        matches!(
            self,
            CommitStyle::ConventionalPrefix | CommitStyle::ConventionalPrefixWithScope
        )
    }
}

impl std::fmt::Display for CommitStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a style decision came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleOrigin {
    /// The most recent automation commit.
    PriorCommit,
    /// Statistics over recent human commits.
    History,
}

/// The convention chosen for one inference run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDecision {
    /// The detected style.
    pub style: CommitStyle,
    /// Literal prefix token, for example `chore` or `Upgrade`.
    pub token: Option<String>,
    /// Where the decision came from.
    pub origin: StyleOrigin,
}

impl StyleDecision {
    /// A decision taken from the last automation commit.
    pub fn prior(style: CommitStyle, token: Option<String>) -> Self {
        Self {
            style,
            token,
            origin: StyleOrigin::PriorCommit,
        }
    }

    /// A decision inferred from recent history.
    pub fn inferred(style: CommitStyle, token: Option<String>) -> Self {
        Self {
            style,
            token,
            origin: StyleOrigin::History,
        }
    }

    /// No convention detected.
    pub fn none() -> Self {
        Self::inferred(CommitStyle::None, None)
    }

    /// Whether the decision reuses the last automation commit's style.
    pub fn is_prior(&self) -> bool {
        self.origin == StyleOrigin::PriorCommit
    }
}

impl std::fmt::Display for StyleDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.style)?;
        if let Some(ref token) = self.token {
            write!(f, " ({})", token)?;
        }
        Ok(())
    }
}
