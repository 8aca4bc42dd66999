// SPDX-License-Identifier: MIT

//! Ruff version specifier resolution.
//!
//! The version to install comes from the `version` input or, when
//! `use_pyproject` is set, from the pyproject.toml in the working
//! directory. Manifest parsing is split from file I/O so the lookup
//! logic tests against in-memory fixtures.

use std::io::ErrorKind;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Matches a `ruff` dependency entry with a trailing version constraint.
/// The character after the name must be an operator character, not a
/// letter, digit, `.`, `_`, or `-`, so packages like `ruff-lsp` never match.
#[allow(clippy::expect_used)]
static RUFF_DEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^ruff([^a-z0-9._-]+.*)$").expect("valid regex"));

/// The subset of pyproject.toml the action reads.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Pyproject {
    tool: ToolTable,
    project: ProjectTable,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ToolTable {
    ruff: RuffTable,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RuffTable {
    #[serde(rename = "required-version")]
    required_version: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProjectTable {
    /// Kept as a raw value: a malformed `dependencies` key is skipped
    /// during the scan rather than rejected at parse time.
    dependencies: Option<toml::Value>,

    #[serde(rename = "optional-dependencies")]
    optional_dependencies: toml::value::Table,
}

/// Resolve the version specifier to install.
///
/// An explicit version and `use_pyproject` are mutually exclusive. With
/// neither, the empty specifier installs the latest release.
pub fn resolve(version: &str, use_pyproject: bool, manifest_dir: &Path) -> Result<String> {
    if use_pyproject && !version.is_empty() {
        return Err(Error::VersionConflict);
    }

    if use_pyproject {
        return from_manifest(&manifest_dir.join("pyproject.toml"));
    }

    Ok(normalize(version))
}

/// A bare version like `0.4.9` becomes the pin `==0.4.9`; anything else
/// already is a specifier (`>=0.4`, or empty for latest) and passes
/// through unchanged.
pub fn normalize(version: &str) -> String {
    if version.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        format!("=={version}")
    } else {
        version.to_string()
    }
}

/// Read and parse the manifest, then delegate to the pure lookup.
fn from_manifest(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            Error::ManifestMissing {
                path: path.to_path_buf(),
            }
        } else {
            Error::Manifest {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        }
    })?;

    let pyproject: Pyproject = toml::from_str(&content).map_err(|e| Error::Manifest {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    specifier_from_pyproject(&pyproject)
}

/// Extract the ruff version specifier from parsed manifest data.
///
/// `tool.ruff.required-version` takes precedence; otherwise the project
/// dependency arrays are scanned, `project.dependencies` first, then each
/// optional-dependency group.
pub fn specifier_from_pyproject(pyproject: &Pyproject) -> Result<String> {
    if let Some(required) = &pyproject.tool.ruff.required_version {
        return Ok(format!("=={required}"));
    }

    if let Some(specifier) = find_specifier(pyproject.project.dependencies.as_ref())? {
        return Ok(specifier);
    }
    for array in pyproject.project.optional_dependencies.values() {
        if let Some(specifier) = find_specifier(Some(array))? {
            return Ok(specifier);
        }
    }

    Err(Error::DependencyMissing)
}

/// Scan one dependency array for a ruff entry.
///
/// Environment markers after `;` are ignored. A bare `ruff` entry is a
/// hard error. Non-array values and non-string entries are skipped.
fn find_specifier(array: Option<&toml::Value>) -> Result<Option<String>> {
    let Some(items) = array.and_then(|v| v.as_array()) else {
        return Ok(None);
    };

    for item in items {
        let Some(entry) = item.as_str() else { continue };
        let requirement = entry.split(';').next().unwrap_or(entry);

        if requirement == "ruff" {
            return Err(Error::SpecifierMissing);
        }
        if let Some(m) = RUFF_DEP_RE.captures(requirement).and_then(|c| c.get(1)) {
            return Ok(Some(m.as_str().trim().to_string()));
        }
    }

    Ok(None)
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
