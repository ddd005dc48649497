//! Project entity representing the invocation context.

use crate::config::ProjectConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Where the helpers run and how they are configured
#[derive(Debug, Clone)]
pub struct Project {
    /// Directory all filesystem access is resolved against
    pub root_path: PathBuf,
    /// Specs directory as configured; reported paths start with it
    pub specs_directory: PathBuf,
    /// Loaded configuration
    pub config: ProjectConfig,
}

impl Project {
    /// Create a new Project from a root path and configuration
    pub fn new(root_path: PathBuf, config: ProjectConfig) -> Self {
        let specs_directory = config.workspace.specs_directory.clone();

        Self {
            root_path,
            specs_directory,
            config,
        }
    }

    /// Project rooted at the current directory with layered configuration
    pub fn current() -> Result<Self> {
        let root = std::env::current_dir()?;
        let config = ProjectConfig::load(Some(&root))?;
        Ok(Self::new(root, config))
    }

    /// Filesystem location of the specs directory
    pub fn specs_path(&self) -> PathBuf {
        self.resolve(&self.specs_directory)
    }

    /// Map a reported path onto the filesystem
    pub fn resolve(&self, reported: &Path) -> PathBuf {
        self.root_path.join(reported)
    }

    /// Reported path of a workspace directory
    pub fn workspace_path(&self, dir_name: &str) -> PathBuf {
        self.specs_directory.join(dir_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_new() {
        let config = ProjectConfig::default();
        let project = Project::new(PathBuf::from("/tmp/test-project"), config);

        assert_eq!(project.root_path, PathBuf::from("/tmp/test-project"));
        assert_eq!(project.specs_directory, PathBuf::from("specs"));
        assert_eq!(
            project.specs_path(),
            PathBuf::from("/tmp/test-project/specs")
        );
    }

    #[test]
    fn test_workspace_path_is_relative() {
        let project = Project::new(PathBuf::from("/tmp/test-project"), ProjectConfig::default());

        let reported = project.workspace_path("7-robot-arm");
        assert_eq!(reported, PathBuf::from("specs/7-robot-arm"));
        assert_eq!(
            project.resolve(&reported),
            PathBuf::from("/tmp/test-project/specs/7-robot-arm")
        );
    }

    #[test]
    fn test_custom_specs_directory() {
        let mut config = ProjectConfig::default();
        config.workspace.specs_directory = PathBuf::from("docs/specs");
        let project = Project::new(PathBuf::from("/repo"), config);

        assert_eq!(project.workspace_path("1-a"), PathBuf::from("docs/specs/1-a"));
        assert_eq!(project.specs_path(), PathBuf::from("/repo/docs/specs"));
    }
}
