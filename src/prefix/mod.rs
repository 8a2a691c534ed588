// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Pull request title prefixes.
//!
//! [`PrNamePrefixer`] is the entry point: it combines explicit prefix
//! options, the inferred commit style and the dependency scope into the
//! literal prefix of a pull request title.

pub mod builder;
mod prefixer;

pub use builder::{base_prefix, build_prefix, explicit_prefix, GITMOJI_PREFIX};
pub use prefixer::PrNamePrefixer;
