// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from prefixer.toml.

use serde::{Deserialize, Serialize};

/// Default author name marker of automation commits on GitHub.
pub const DEFAULT_AUTHOR_MARKER: &str = "dependabot";

/// Default author email of automation commits on GitLab.
pub const DEFAULT_SERVICE_EMAIL: &str = "support@dependabot.com";

/// Default number of commits fetched from GitHub.
pub const DEFAULT_HISTORY_WINDOW: usize = 100;

/// The main configuration structure for prefixer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PrefixerConfig {
    /// How automation commits are recognised.
    pub automation: AutomationConfig,

    /// History fetch settings.
    pub history: HistoryConfig,

    /// Explicit prefix overrides.
    pub commit_message: CommitMessageOptions,
}

impl PrefixerConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Identity of the automation agent whose previous commits are used as a
/// style model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AutomationConfig {
    /// Substring of the commit author name (GitHub).
    pub author_marker: String,

    /// Exact commit author email (GitLab).
    pub service_email: String,
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            author_marker: DEFAULT_AUTHOR_MARKER.to_string(),
            service_email: DEFAULT_SERVICE_EMAIL.to_string(),
        }
    }
}

/// History fetch configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HistoryConfig {
    /// Number of recent commits requested from GitHub.
    pub window: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_HISTORY_WINDOW,
        }
    }
}

/// Explicitly provided prefix details. When `prefix` is set, inference is
/// skipped entirely.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CommitMessageOptions {
    /// Prefix for production dependency updates (and the fallback for
    /// development ones).
    pub prefix: Option<String>,

    /// Prefix for development-only dependency updates.
    pub prefix_development: Option<String>,

    /// Whether to append the `(deps)` / `(deps-dev)` scope.
    pub include_scope: bool,
}

impl CommitMessageOptions {
    /// Whether an explicit prefix has been provided.
    pub fn is_explicit(&self) -> bool {
        self.prefix.is_some()
    }
}
