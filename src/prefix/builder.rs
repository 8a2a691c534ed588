// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Literal title prefixes for style decisions and explicit options.

use crate::config::CommitMessageOptions;
use crate::dependency::{has_production, Dependency, Scope};
use crate::error::{ConfigError, PrefixerError, Result};
use crate::style::{CommitStyle, StyleDecision};

/// Prefix of gitmoji-style titles.
pub const GITMOJI_PREFIX: &str = "\u{2B06}\u{FE0F} ";

/// Security marker appended after a gitmoji prefix.
pub const GITMOJI_SECURITY_MARKER: &str = "\u{1F512} ";

/// Maximum length of an explicitly provided prefix.
pub const MAX_PREFIX_LENGTH: usize = 50;

/// Type token used for generic-prefixed repositories.
const GENERIC_TOKEN: &str = "build";

/// Prefix for a style decision, without any security marker.
pub fn base_prefix(decision: &StyleDecision, scope: Scope) -> String {
    let token = decision.token.as_deref().unwrap_or(GENERIC_TOKEN);

    match decision.style {
        CommitStyle::Gitmoji => GITMOJI_PREFIX.to_string(),
        CommitStyle::ConventionalPrefix => format!("{}: ", token),
        CommitStyle::ConventionalPrefixWithScope => format!("{}({}): ", token, scope),
        CommitStyle::GenericPrefixed => format!("{}({}): ", GENERIC_TOKEN, scope),
        CommitStyle::None => String::new(),
    }
}

/// Marker appended to the prefix of a security fix.
pub fn security_marker(base_prefix: &str, capitalize: bool) -> &'static str {
    if base_prefix == GITMOJI_PREFIX {
        GITMOJI_SECURITY_MARKER
    } else if capitalize {
        "[Security] "
    } else {
        "[security] "
    }
}

/// Append the security marker when needed and join adjacent gitmoji and
/// lock emoji.
pub fn with_security_marker(base_prefix: String, security_fix: bool, capitalize: bool) -> String {
    let mut prefix = base_prefix;
    if security_fix {
        let marker = security_marker(&prefix, capitalize);
        prefix.push_str(marker);
    }

    let separated = format!("{}{}", GITMOJI_PREFIX, GITMOJI_SECURITY_MARKER.trim_end());
    let joined = format!("{}{}", GITMOJI_PREFIX.trim_end(), GITMOJI_SECURITY_MARKER.trim_end());
    prefix.replace(&separated, &joined)
}

/// Full prefix for a style decision.
pub fn build_prefix(
    decision: &StyleDecision,
    scope: Scope,
    security_fix: bool,
    capitalize: bool,
) -> String {
    with_security_marker(base_prefix(decision, scope), security_fix, capitalize)
}

/// Prefix string chosen from explicit options for a dependency batch, before
/// scope and separators are added.
fn explicit_prefix_string<'a>(
    options: &'a CommitMessageOptions,
    dependencies: &[Dependency],
) -> &'a str {
    let prefix = options.prefix.as_deref().unwrap_or_default();
    if has_production(dependencies) {
        prefix
    } else {
        options.prefix_development.as_deref().unwrap_or(prefix)
    }
}

/// Prefix built from explicitly provided options.
///
/// Returns an empty string when the chosen prefix is blank.
pub fn explicit_prefix(
    options: &CommitMessageOptions,
    dependencies: &[Dependency],
) -> Result<String> {
    let chosen = explicit_prefix_string(options, dependencies).trim();
    if chosen.chars().count() > MAX_PREFIX_LENGTH {
        return Err(PrefixerError::Config(ConfigError::PrefixTooLong {
            length: chosen.chars().count(),
            max: MAX_PREFIX_LENGTH,
        }));
    }
    if chosen.is_empty() {
        return Ok(String::new());
    }

    let mut prefix = chosen.to_string();
    if options.include_scope {
        prefix.push_str(&format!("({})", Scope::for_dependencies(dependencies)));
    }
    if prefix.ends_with(|c: char| c.is_ascii_alphanumeric() || c == ')' || c == ']') {
        prefix.push(':');
    }
    if !prefix.ends_with(' ') {
        prefix.push(' ');
    }

    Ok(prefix)
}

/// Capitalisation implied by an explicit prefix.
pub fn explicit_capitalization(options: &CommitMessageOptions) -> bool {
    !options
        .prefix
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .starts_with(|c: char| c.is_ascii_lowercase())
}
