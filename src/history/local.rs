// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit lister backed by a local git checkout.

use crate::error::ProviderError;
use chrono::{DateTime, Utc};
use git2::{Repository, Sort};
use std::path::{Path, PathBuf};

use super::client::{AuthorKind, CommitLister, CommitRecord};

/// Suffix used by hosting providers for bot account names.
const BOT_SUFFIX: &str = "[bot]";

/// Lists commits reachable from HEAD of a local clone, newest first.
#[derive(Debug, Clone)]
pub struct LocalRepositoryLister {
    path: PathBuf,
}

impl LocalRepositoryLister {
    /// Create a lister for the repository containing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path the repository is discovered from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<Repository, ProviderError> {
        Repository::discover(&self.path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                ProviderError::NotFound {
                    repo: self.path.display().to_string(),
                }
            } else {
                e.into()
            }
        })
    }
}

impl CommitLister for LocalRepositoryLister {
    fn list_recent_commits(
        &self,
        repo: &str,
        limit: Option<usize>,
    ) -> Result<Vec<CommitRecord>, ProviderError> {
        tracing::debug!("Listing commits of {} from {:?}", repo, self.path);

        let repository = self.open()?;
        if repository.is_empty()? {
            return Err(ProviderError::NoHistory);
        }

        let mut revwalk = repository.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push_head()?;

        let mut commits = Vec::new();
        for oid in revwalk {
            if limit.is_some_and(|max| commits.len() >= max) {
                break;
            }
            let commit = repository.find_commit(oid?)?;
            let author = commit.author();
            let author_name = author.name().map(str::to_string);
            let author_kind = match author_name.as_deref() {
                Some(name) if name.ends_with(BOT_SUFFIX) => AuthorKind::Bot,
                _ => AuthorKind::User,
            };

            commits.push(CommitRecord {
                author_name,
                author_email: author.email().map(str::to_string),
                author_kind,
                message: commit.message().map(str::to_string),
                authored_at: DateTime::<Utc>::from_timestamp(author.when().seconds(), 0),
            });
        }

        Ok(commits)
    }
}
