//! Feature workspace identity and naming.

use crate::error::{WorkspaceError, WorkspaceResult};
use regex::Regex;
use std::cmp::Ordering;
use std::path::PathBuf;
use std::sync::OnceLock;

fn feature_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([0-9]+)-").expect("feature pattern is valid"))
}

/// Leading digits of a workspace name, compared numerically at any length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeatureNumber(String);

impl FeatureNumber {
    fn from_digits(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            Self("0".to_string())
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Canonical digits without leading zeros
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ord for FeatureNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        // No leading zeros, so more digits means a larger number
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for FeatureNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Parsed name of a feature workspace directory.
/// Format: "{number}-{short-name}" (e.g., "7-robot-arm")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeatureId {
    number: FeatureNumber,
    name: String,
}

impl FeatureId {
    /// Parse a directory name.
    ///
    /// The name must start with ASCII digits followed by a hyphen; anything
    /// else is not a feature directory.
    pub fn parse(name: &str) -> WorkspaceResult<Self> {
        let caps = feature_pattern()
            .captures(name)
            .ok_or_else(|| WorkspaceError::NotAFeatureDirectory(name.to_string()))?;

        Ok(Self {
            number: FeatureNumber::from_digits(&caps[1]),
            name: name.to_string(),
        })
    }

    /// Numeric prefix; higher means more recent
    pub fn number(&self) -> &FeatureNumber {
        &self.number
    }

    /// The full directory name
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for FeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Branch (and directory) name for a workspace about to be created.
///
/// The number is kept as given; only path safety is checked.
pub fn branch_name(number: &str, short_name: &str) -> WorkspaceResult<String> {
    validate_component("number", number)?;
    validate_component("short name", short_name)?;
    Ok(format!("{}-{}", number, short_name))
}

/// Reject values that cannot be used as a single path component
fn validate_component(field: &'static str, value: &str) -> WorkspaceResult<()> {
    let invalid = value.is_empty()
        || value == "."
        || value == ".."
        || value.contains(['/', '\\', '\0']);

    if invalid {
        return Err(WorkspaceError::InvalidComponent {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// A discovered feature workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureWorkspace {
    pub id: FeatureId,
    /// Path as reported to callers (under the configured specs directory)
    pub path: PathBuf,
}

impl FeatureWorkspace {
    pub fn new(id: FeatureId, path: PathBuf) -> Self {
        Self { id, path }
    }

    /// Path of a file inside the workspace
    pub fn file(&self, filename: &str) -> PathBuf {
        self.path.join(filename)
    }
}
