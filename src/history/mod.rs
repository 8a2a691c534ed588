// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit history retrieval.
//!
//! A [`CommitLister`] provides the raw commit list of a repository; the
//! [`HistoryFetcher`] fetches it once and applies the provider's filtering
//! rules to derive recent human messages and the last automation commit.

mod backend;
mod client;
pub mod export;
mod fetcher;
pub mod local;

pub use backend::{GithubHistory, GitlabHistory, HistoryBackend, HistoryFilter};
pub use client::{AuthorKind, CommitLister, CommitRecord};
pub use export::JsonFileLister;
pub use fetcher::HistoryFetcher;
pub use local::LocalRepositoryLister;
