// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Prefixer - commit convention inference for automated pull requests.
//!
//! Given a repository's recent commit history, prefixer works out which
//! naming convention its contributors (or a previous automation run) use for
//! commit titles and builds a matching prefix for a new pull request title.
//!
//! # Features
//!
//! - **Prior style reuse**: the last automation commit's style wins when it is recognised
//! - **Style inference**: angular, ESLint, gitmoji and generic `word:` prefixes
//! - **Security fixes**: `[Security]` or 🔒 markers in the repository's casing
//! - **Providers**: GitHub and GitLab filtering rules over one memoized fetch
//! - **Commit listers**: local git checkouts and JSON exports
//!
//! # Example
//!
//! ```no_run
//! use prefixer::config::PrefixerConfig;
//! use prefixer::dependency::Dependency;
//! use prefixer::history::LocalRepositoryLister;
//! use prefixer::prefix::PrNamePrefixer;
//! use prefixer::source::Source;
//!
//! let config = PrefixerConfig::load().unwrap();
//! let lister = LocalRepositoryLister::new(".");
//! let source = Source::new("github", "octo/repo");
//! let dependencies = vec![Dependency::production("serde", "cargo")];
//!
//! let prefixer = PrNamePrefixer::new(&lister, &source, dependencies, &config)
//!     .unwrap()
//!     .with_security_fix(true);
//! println!("{}Bump serde from 1.0.0 to 1.0.1", prefixer.pr_name_prefix().unwrap());
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod dependency;
pub mod error;
pub mod history;
pub mod prefix;
pub mod source;
pub mod style;

// Re-exports for convenience
pub use config::PrefixerConfig;
pub use error::{PrefixerError, Result};
pub use prefix::PrNamePrefixer;

/// Version information embedded at compile time.
pub mod version {
    /// The current version of prefixer.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
