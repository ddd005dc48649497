//! Plan setup: where the latest workspace's spec and plan live.

use super::WorkspaceLocator;
use crate::domain::{DocKind, PlanReport, Project};
use crate::error::WorkspaceResult;

/// Read-only lookup of spec.md and plan.md for the planning step
pub struct PlanInitializer<'a> {
    project: &'a Project,
}

impl<'a> PlanInitializer<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    /// Reports to print, one per line.
    ///
    /// A discovered workspace yields one report. With
    /// `plan.always_emit_fallback` the fallback report follows it; without a
    /// workspace only the fallback report is returned.
    pub fn run(&self) -> WorkspaceResult<Vec<PlanReport>> {
        let mut reports = Vec::with_capacity(2);

        if let Some(workspace) = WorkspaceLocator::new(self.project).latest_workspace()? {
            reports.push(PlanReport {
                feature_spec: workspace.file(DocKind::Spec.filename()),
                impl_plan: workspace.file(DocKind::Plan.filename()),
                specs_dir: self.project.specs_directory.clone(),
                branch: workspace.id.to_string(),
            });

            if !self.project.config.plan.always_emit_fallback {
                return Ok(reports);
            }
        }

        reports.push(self.fallback());
        Ok(reports)
    }

    /// Fallback report; paths are not checked
    pub fn fallback(&self) -> PlanReport {
        let branch = self.project.config.fallback.branch.clone();
        let feature_dir = self.project.workspace_path(&branch);

        PlanReport {
            feature_spec: feature_dir.join(DocKind::Spec.filename()),
            impl_plan: feature_dir.join(DocKind::Plan.filename()),
            specs_dir: self.project.specs_directory.clone(),
            branch,
        }
    }
}
