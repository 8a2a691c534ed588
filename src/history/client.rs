// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The commit listing capability consumed by the history fetcher.

use crate::error::ProviderError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of account that authored a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorKind {
    #[serde(alias = "User")]
    User,
    #[serde(alias = "Bot")]
    Bot,
    #[default]
    Unknown,
}

/// One entry of a provider's commit list, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitRecord {
    /// Git author name.
    pub author_name: Option<String>,
    /// Git author email.
    pub author_email: Option<String>,
    /// Account type of the author on the provider.
    #[serde(alias = "author_type")]
    pub author_kind: AuthorKind,
    /// Full commit message.
    pub message: Option<String>,
    /// Author timestamp, when known.
    pub authored_at: Option<DateTime<Utc>>,
}

impl CommitRecord {
    /// Create a record with a message and an author name.
    pub fn new(author_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            author_name: Some(author_name.into()),
            author_kind: AuthorKind::User,
            message: Some(message.into()),
            ..Default::default()
        }
    }

    /// Set the author email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.author_email = Some(email.into());
        self
    }

    /// Set the author account kind.
    pub fn with_kind(mut self, kind: AuthorKind) -> Self {
        self.author_kind = kind;
        self
    }

    /// Whether the message starts with the given prefix.
    pub fn message_starts_with(&self, prefix: &str) -> bool {
        self.message
            .as_deref()
            .map(|m| m.starts_with(prefix))
            .unwrap_or(false)
    }

    /// The trimmed message, if present.
    pub fn trimmed_message(&self) -> Option<String> {
        self.message.as_deref().map(|m| m.trim().to_string())
    }
}

/// Lists recent commits of a repository on a hosting provider.
///
/// `limit` is the number of most recent commits requested; `None` leaves
/// the page size to the implementation.
pub trait CommitLister {
    fn list_recent_commits(
        &self,
        repo: &str,
        limit: Option<usize>,
    ) -> Result<Vec<CommitRecord>, ProviderError>;
}

impl<L: CommitLister + ?Sized> CommitLister for &L {
    fn list_recent_commits(
        &self,
        repo: &str,
        limit: Option<usize>,
    ) -> Result<Vec<CommitRecord>, ProviderError> {
        (**self).list_recent_commits(repo, limit)
    }
}

impl<L: CommitLister + ?Sized> CommitLister for Box<L> {
    fn list_recent_commits(
        &self,
        repo: &str,
        limit: Option<usize>,
    ) -> Result<Vec<CommitRecord>, ProviderError> {
        (**self).list_recent_commits(repo, limit)
    }
}
