// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Pull request title prefixes for a batch of dependency updates.

use crate::config::{CommitMessageOptions, PrefixerConfig};
use crate::dependency::{Dependency, Scope};
use crate::error::{ConfigError, PrefixerError, Result};
use crate::history::{CommitLister, HistoryFetcher};
use crate::source::Source;
use crate::style::{self, StyleDecision};
use std::cell::OnceCell;

use super::builder;

/// Builds the title prefix of one pull request.
///
/// The repository history is fetched at most once per prefixer, so
/// [`pr_name_prefix`](Self::pr_name_prefix) and
/// [`capitalize_first_word`](Self::capitalize_first_word) always agree.
pub struct PrNamePrefixer<'a, L: CommitLister + ?Sized> {
    fetcher: HistoryFetcher<'a, L>,
    dependencies: Vec<Dependency>,
    security_fix: bool,
    options: CommitMessageOptions,
    decision: OnceCell<StyleDecision>,
}

impl<'a, L: CommitLister + ?Sized> PrNamePrefixer<'a, L> {
    /// Create a prefixer for a source and a non-empty dependency batch.
    ///
    /// Explicit prefix options are taken from `config.commit_message`.
    pub fn new(
        lister: &'a L,
        source: &Source,
        dependencies: Vec<Dependency>,
        config: &PrefixerConfig,
    ) -> Result<Self> {
        if dependencies.is_empty() {
            return Err(PrefixerError::Config(ConfigError::EmptyDependencies));
        }

        Ok(Self {
            fetcher: HistoryFetcher::new(lister, source, config)?,
            dependencies,
            security_fix: false,
            options: config.commit_message.clone(),
            decision: OnceCell::new(),
        })
    }

    /// Mark the pull request as a security fix.
    pub fn with_security_fix(mut self, security_fix: bool) -> Self {
        self.security_fix = security_fix;
        self
    }

    /// Replace the explicit prefix options.
    pub fn with_options(mut self, options: CommitMessageOptions) -> Self {
        self.options = options;
        self
    }

    /// Scope of the dependency batch.
    pub fn scope(&self) -> Scope {
        Scope::for_dependencies(&self.dependencies)
    }

    /// The inferred commit style, computed once.
    pub fn style_decision(&self) -> Result<&StyleDecision> {
        if let Some(decision) = self.decision.get() {
            return Ok(decision);
        }

        let last_automation = self.fetcher.last_automation_commit_message()?;
        let history = self.fetcher.recent_commit_messages()?;
        let decision = style::infer_style(history, last_automation);
        tracing::debug!("Style decision: {}", decision);

        Ok(self.decision.get_or_init(|| decision))
    }

    /// The title prefix for the pull request.
    pub fn pr_name_prefix(&self) -> Result<String> {
        let base = self.commit_prefix()?;
        let capitalize = if self.security_fix {
            self.capitalize_first_word()?
        } else {
            false
        };

        let prefix = builder::with_security_marker(base, self.security_fix, capitalize);
        tracing::debug!("Pull request prefix: {:?}", prefix);
        Ok(prefix)
    }

    /// Whether the first word of the title should be capitalised.
    pub fn capitalize_first_word(&self) -> Result<bool> {
        if self.options.is_explicit() {
            return Ok(builder::explicit_capitalization(&self.options));
        }

        let decision = self.style_decision()?;
        let base = builder::base_prefix(decision, self.scope());
        let last_automation = self.fetcher.last_automation_commit_message()?;
        let history = self.fetcher.recent_commit_messages()?;

        Ok(style::capitalize_first_word(
            decision,
            last_automation,
            history,
            &base,
        ))
    }

    /// Prefix without the security marker.
    fn commit_prefix(&self) -> Result<String> {
        if self.options.is_explicit() {
            return builder::explicit_prefix(&self.options, &self.dependencies);
        }

        let decision = self.style_decision()?;
        Ok(builder::base_prefix(decision, self.scope()))
    }
}
