// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit lister backed by a JSON export of commit records.
//!
//! The file holds an array of records, newest first, exactly as the
//! provider listed them.

use crate::error::ProviderError;
use std::path::PathBuf;

use super::client::{CommitLister, CommitRecord};

/// Reads commit records from a JSON file on every call.
#[derive(Debug, Clone)]
pub struct JsonFileLister {
    path: PathBuf,
}

impl JsonFileLister {
    /// Create a lister for the given export file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Parse an export, keeping the first `limit` records in file order.
pub fn parse_export(content: &str, limit: Option<usize>) -> Result<Vec<CommitRecord>, ProviderError> {
    let mut records: Vec<CommitRecord> =
        serde_json::from_str(content).map_err(|e| ProviderError::Decode {
            message: e.to_string(),
        })?;

    if let Some(limit) = limit {
        records.truncate(limit);
    }
    Ok(records)
}

impl CommitLister for JsonFileLister {
    fn list_recent_commits(
        &self,
        repo: &str,
        limit: Option<usize>,
    ) -> Result<Vec<CommitRecord>, ProviderError> {
        tracing::debug!("Reading commits of {} from {:?}", repo, self.path);

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ProviderError::NotFound {
                    repo: repo.to_string(),
                }
            } else {
                ProviderError::RequestFailed {
                    message: format!("Failed to read {}: {}", self.path.display(), e),
                }
            }
        })?;

        parse_export(&content, limit)
    }
}
