//! Workspace services for spec-scaffold.
//!
//! This module contains:
//! - WorkspaceLocator: latest workspace and its documentation
//! - FeatureScaffolder: new workspace creation
//! - PlanInitializer: spec and plan paths for planning

mod locator;
mod plan;
mod scaffold;

pub use locator::WorkspaceLocator;
pub use plan::PlanInitializer;
pub use scaffold::{FeatureScaffolder, ScaffoldRequest};
