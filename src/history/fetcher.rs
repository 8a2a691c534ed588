// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Memoized history access for one prefix inference run.

use crate::config::PrefixerConfig;
use crate::error::Result;
use crate::source::Source;
use std::cell::OnceCell;

use super::backend::{HistoryBackend, HistoryFilter};
use super::client::{CommitLister, CommitRecord};

/// Fetches a repository's commit list once and derives the human history
/// and the last automation commit from that same list.
pub struct HistoryFetcher<'a, L: CommitLister + ?Sized> {
    lister: &'a L,
    repo: String,
    backend: HistoryBackend,
    commits: OnceCell<Vec<CommitRecord>>,
    recent_messages: OnceCell<Vec<String>>,
    last_automation_message: OnceCell<Option<String>>,
}

impl<'a, L: CommitLister + ?Sized> HistoryFetcher<'a, L> {
    /// Create a fetcher for a source. Fails immediately for unsupported
    /// providers.
    pub fn new(lister: &'a L, source: &Source, config: &PrefixerConfig) -> Result<Self> {
        let backend = HistoryBackend::for_source(source, config)?;
        Ok(Self::with_backend(lister, &source.repo, backend))
    }

    /// Create a fetcher with an explicit backend.
    pub fn with_backend(lister: &'a L, repo: impl Into<String>, backend: HistoryBackend) -> Self {
        Self {
            lister,
            repo: repo.into(),
            backend,
            commits: OnceCell::new(),
            recent_messages: OnceCell::new(),
            last_automation_message: OnceCell::new(),
        }
    }

    /// Raw commit list, fetched on first access.
    pub fn commits(&self) -> Result<&[CommitRecord]> {
        if let Some(commits) = self.commits.get() {
            return Ok(commits.as_slice());
        }

        let limit = self.backend.fetch_limit();
        let fetched = match self.lister.list_recent_commits(&self.repo, limit) {
            Ok(commits) => commits,
            Err(e) if e.is_empty_history() => {
                tracing::warn!("No usable history for {}: {}", self.repo, e);
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };
        tracing::debug!("Fetched {} commits for {}", fetched.len(), self.repo);

        Ok(self.commits.get_or_init(|| fetched).as_slice())
    }

    /// Trimmed messages of recent commits by humans, merges excluded.
    pub fn recent_commit_messages(&self) -> Result<&[String]> {
        if let Some(messages) = self.recent_messages.get() {
            return Ok(messages.as_slice());
        }

        let messages = self.backend.recent_messages(self.commits()?);
        tracing::debug!("{} recent commit messages to analyze", messages.len());
        Ok(self.recent_messages.get_or_init(|| messages).as_slice())
    }

    /// Trimmed message of the most recent commit by the automation agent.
    pub fn last_automation_commit_message(&self) -> Result<Option<&str>> {
        if let Some(message) = self.last_automation_message.get() {
            return Ok(message.as_deref());
        }

        let message = self.backend.last_automation_message(self.commits()?);
        tracing::debug!("Last automation commit: {:?}", message);
        Ok(self.last_automation_message.get_or_init(|| message).as_deref())
    }
}
