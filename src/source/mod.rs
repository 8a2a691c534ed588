// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository sources and their hosting providers.

use crate::error::{ConfigError, PrefixerError, Result};

/// A repository on a hosting provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Raw provider tag, for example `github` or `gitlab`.
    pub provider: String,
    /// Repository identifier on the provider, for example `owner/name`.
    pub repo: String,
}

impl Source {
    /// Create a new source.
    pub fn new(provider: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            repo: repo.into(),
        }
    }

    /// Resolve the provider tag to a supported provider kind.
    pub fn provider_kind(&self) -> Result<ProviderKind> {
        self.provider.parse()
    }
}

/// Supported hosting providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Github,
    Gitlab,
}

impl ProviderKind {
    /// Get the string representation of the provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Github => "github",
            ProviderKind::Gitlab => "gitlab",
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = PrefixerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "github" => Ok(ProviderKind::Github),
            "gitlab" => Ok(ProviderKind::Gitlab),
            other => Err(PrefixerError::Config(ConfigError::UnsupportedProvider {
                provider: other.to_string(),
            })),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
