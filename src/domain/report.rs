//! JSON descriptors printed by the helpers.
//!
//! Keys are upper snake case and appear in field order.

use serde::Serialize;
use std::path::PathBuf;

/// Output of `check-prerequisites`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PrerequisiteReport {
    pub feature_dir: PathBuf,
    pub available_docs: Vec<PathBuf>,
}

/// Output of `create-new-feature`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ScaffoldReport {
    pub branch_name: String,
    pub spec_file: PathBuf,
}

/// Output of `setup-plan`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PlanReport {
    pub feature_spec: PathBuf,
    pub impl_plan: PathBuf,
    pub specs_dir: PathBuf,
    pub branch: String,
}
