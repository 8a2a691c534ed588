// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Dependencies updated by a pull request and the scope they map to.

use serde::{Deserialize, Serialize};

/// A dependency being updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Package name.
    pub name: String,
    /// Package manager identifier, for example `cargo` or `npm_and_yarn`.
    pub package_manager: String,
    /// Whether this is a production (runtime) dependency.
    pub production: bool,
}

impl Dependency {
    /// Create a production dependency.
    pub fn production(name: impl Into<String>, package_manager: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package_manager: package_manager.into(),
            production: true,
        }
    }

    /// Create a development dependency.
    pub fn development(name: impl Into<String>, package_manager: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package_manager: package_manager.into(),
            production: false,
        }
    }
}

/// Scope token of a conventional prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    #[serde(rename = "deps")]
    Deps,
    #[serde(rename = "deps-dev")]
    DepsDev,
}

impl Scope {
    /// `deps` when any dependency is a production dependency, `deps-dev`
    /// otherwise.
    pub fn for_dependencies(dependencies: &[Dependency]) -> Self {
        if has_production(dependencies) {
            Scope::Deps
        } else {
            Scope::DepsDev
        }
    }

    /// Get the string representation of the scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Deps => "deps",
            Scope::DepsDev => "deps-dev",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether any dependency in the batch is a production dependency.
pub fn has_production(dependencies: &[Dependency]) -> bool {
    dependencies.iter().any(|d| d.production)
}
