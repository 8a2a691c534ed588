// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Provider-specific filtering of a raw commit list.

use crate::config::PrefixerConfig;
use crate::error::Result;
use crate::source::{ProviderKind, Source};

use super::client::{AuthorKind, CommitRecord};

/// Filtering rules applied to a provider's commit list.
pub trait HistoryFilter {
    /// Number of commits to request from the lister.
    fn fetch_limit(&self) -> Option<usize>;

    /// Trimmed messages of recent human commits.
    fn recent_messages(&self, commits: &[CommitRecord]) -> Vec<String>;

    /// Trimmed message of the most recent automation commit.
    fn last_automation_message(&self, commits: &[CommitRecord]) -> Option<String>;
}

/// GitHub-style history: bot accounts are flagged by the provider and the
/// automation agent is recognised by its author name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubHistory {
    pub window: usize,
    pub author_marker: String,
}

impl HistoryFilter for GithubHistory {
    fn fetch_limit(&self) -> Option<usize> {
        Some(self.window)
    }

    fn recent_messages(&self, commits: &[CommitRecord]) -> Vec<String> {
        commits
            .iter()
            .filter(|c| c.author_kind != AuthorKind::Bot)
            .filter(|c| !c.message_starts_with("Merge"))
            .filter_map(CommitRecord::trimmed_message)
            .collect()
    }

    fn last_automation_message(&self, commits: &[CommitRecord]) -> Option<String> {
        commits
            .iter()
            .filter(|c| !c.message_starts_with("Merge"))
            .find(|c| {
                c.author_name
                    .as_deref()
                    .map(|name| name.contains(&self.author_marker))
                    .unwrap_or(false)
            })
            .and_then(CommitRecord::trimmed_message)
    }
}

/// GitLab-style history: the automation agent is recognised by its service
/// email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitlabHistory {
    pub service_email: String,
}

impl GitlabHistory {
    fn is_automation(&self, commit: &CommitRecord) -> bool {
        commit.author_email.as_deref() == Some(self.service_email.as_str())
    }
}

impl HistoryFilter for GitlabHistory {
    fn fetch_limit(&self) -> Option<usize> {
        None
    }

    fn recent_messages(&self, commits: &[CommitRecord]) -> Vec<String> {
        commits
            .iter()
            .filter(|c| !self.is_automation(c))
            .filter(|c| !c.message_starts_with("merge !"))
            .filter_map(CommitRecord::trimmed_message)
            .collect()
    }

    fn last_automation_message(&self, commits: &[CommitRecord]) -> Option<String> {
        commits
            .iter()
            .find(|c| self.is_automation(c))
            .and_then(CommitRecord::trimmed_message)
    }
}

/// The supported history backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryBackend {
    Github(GithubHistory),
    Gitlab(GitlabHistory),
}

impl HistoryBackend {
    /// Select the backend for a source. Fails for unsupported providers.
    pub fn for_source(source: &Source, config: &PrefixerConfig) -> Result<Self> {
        let backend = match source.provider_kind()? {
            ProviderKind::Github => HistoryBackend::Github(GithubHistory {
                window: config.history.window,
                author_marker: config.automation.author_marker.clone(),
            }),
            ProviderKind::Gitlab => HistoryBackend::Gitlab(GitlabHistory {
                service_email: config.automation.service_email.clone(),
            }),
        };
        Ok(backend)
    }

    fn filter(&self) -> &dyn HistoryFilter {
        match self {
            HistoryBackend::Github(github) => github,
            HistoryBackend::Gitlab(gitlab) => gitlab,
        }
    }
}

impl HistoryFilter for HistoryBackend {
    fn fetch_limit(&self) -> Option<usize> {
        self.filter().fetch_limit()
    }

    fn recent_messages(&self, commits: &[CommitRecord]) -> Vec<String> {
        self.filter().recent_messages(commits)
    }

    fn last_automation_message(&self, commits: &[CommitRecord]) -> Option<String> {
        self.filter().last_automation_message(commits)
    }
}
