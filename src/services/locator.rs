//! Discovery of the most recent feature workspace.

use crate::domain::{DocumentationSet, FeatureId, FeatureWorkspace, PrerequisiteReport, Project};
use crate::error::WorkspaceResult;
use std::fs;

/// Finds the latest numbered workspace under the specs directory
pub struct WorkspaceLocator<'a> {
    project: &'a Project,
}

impl<'a> WorkspaceLocator<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    /// The workspace with the highest number, if any.
    ///
    /// Ties on the number go to the lexicographically smallest directory name.
    pub fn latest_workspace(&self) -> WorkspaceResult<Option<FeatureWorkspace>> {
        let specs_path = self.project.specs_path();
        if !specs_path.try_exists()? {
            tracing::debug!("Specs directory {:?} does not exist", specs_path);
            return Ok(None);
        }

        let mut candidates = Vec::new();
        for entry in fs::read_dir(&specs_path)? {
            let entry = entry?;
            let path = entry.path();

            // Follows symlinks
            if !fs::metadata(&path)?.is_dir() {
                continue;
            }

            let Some(dir_name) = path.file_name().and_then(|n| n.to_str()) else {
                tracing::debug!("Skipping non UTF-8 entry {:?}", path);
                continue;
            };

            match FeatureId::parse(dir_name) {
                Ok(id) => candidates.push(id),
                Err(e) => tracing::debug!("Skipping {}: {}", dir_name, e),
            }
        }

        candidates.sort_by(|a, b| {
            b.number()
                .cmp(a.number())
                .then_with(|| a.as_str().cmp(b.as_str()))
        });

        Ok(candidates.into_iter().next().map(|id| {
            let path = self.project.workspace_path(id.as_str());
            tracing::debug!(
                "Latest feature workspace is {} (number {})",
                id,
                id.number().as_str()
            );
            FeatureWorkspace::new(id, path)
        }))
    }

    /// Latest workspace plus the documentation files it contains, or the
    /// configured fallback descriptor when there is none.
    pub fn check_prerequisites(&self) -> WorkspaceResult<PrerequisiteReport> {
        match self.latest_workspace()? {
            Some(workspace) => {
                let docs = DocumentationSet::scan(
                    &self.project.resolve(&workspace.path),
                    &workspace.path,
                )?;
                Ok(PrerequisiteReport {
                    feature_dir: workspace.path,
                    available_docs: docs.into_paths(),
                })
            }
            None => Ok(self.fallback()),
        }
    }

    /// Fallback descriptor; the listed docs are not checked for existence
    pub fn fallback(&self) -> PrerequisiteReport {
        let fallback = &self.project.config.fallback;
        tracing::info!("No feature workspace found, using {}", fallback.branch);

        let feature_dir = self.project.workspace_path(&fallback.branch);
        let available_docs = fallback
            .docs
            .iter()
            .map(|doc| feature_dir.join(doc))
            .collect();

        PrerequisiteReport {
            feature_dir,
            available_docs,
        }
    }
}
