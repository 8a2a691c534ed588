// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::PrefixerConfig;

/// Get the default configuration.
pub fn default_config() -> PrefixerConfig {
    PrefixerConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# Prefixer Configuration File
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# How previous automation commits are recognised
[automation]
author_marker = "dependabot"
service_email = "support@dependabot.com"

# Number of recent commits requested from GitHub
[history]
window = 100

# Explicit prefix (uncomment to skip style inference)
[commit_message]
# prefix = "chore"
# prefix_development = "chore"
include_scope = false
"#
}
