//! Domain entities for spec-scaffold.
//!
//! This module contains:
//! - Feature workspaces and their directory names
//! - The documentation set of a workspace
//! - Project: the invocation context
//! - The JSON reports printed by the binaries

mod docs;
mod project;
mod report;
mod workspace;

pub use docs::{DocKind, DocumentationSet, CHECKLISTS_DIR};
pub use project::Project;
pub use report::{PlanReport, PrerequisiteReport, ScaffoldReport};
pub use workspace::{branch_name, FeatureId, FeatureNumber, FeatureWorkspace};
