//! Creation of new feature workspaces.

use crate::domain::{branch_name, DocKind, Project, ScaffoldReport, CHECKLISTS_DIR};
use crate::error::WorkspaceResult;
use std::fs;

/// Arguments for a new workspace; unset values fall back to configuration
#[derive(Debug, Clone, Default)]
pub struct ScaffoldRequest {
    /// Free text written under the spec heading
    pub description: String,
    /// Workspace number, used verbatim
    pub number: Option<String>,
    pub short_name: Option<String>,
}

impl ScaffoldRequest {
    /// Build a request from description words joined by single spaces
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let description = words
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            description,
            ..Default::default()
        }
    }
}

/// Creates workspace directories and their initial spec.md
pub struct FeatureScaffolder<'a> {
    project: &'a Project,
}

impl<'a> FeatureScaffolder<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    /// Create (or refresh) a workspace.
    ///
    /// spec.md is always overwritten. A failure after the directory is
    /// created leaves the directory behind.
    pub fn create(&self, request: ScaffoldRequest) -> WorkspaceResult<ScaffoldReport> {
        let defaults = &self.project.config.scaffold;
        let number = request.number.as_deref().unwrap_or(defaults.default_number.as_str());
        let short_name = request
            .short_name
            .as_deref()
            .unwrap_or(defaults.default_short_name.as_str());

        let branch = branch_name(number, short_name)?;
        let workspace = self.project.workspace_path(&branch);
        let workspace_dir = self.project.resolve(&workspace);

        fs::create_dir_all(&workspace_dir)?;

        let spec_file = workspace.join(DocKind::Spec.filename());
        let content = spec_template(short_name, &request.description);
        fs::write(self.project.resolve(&spec_file), content)?;
        tracing::info!("Wrote {:?}", spec_file);

        fs::create_dir_all(workspace_dir.join(CHECKLISTS_DIR))?;

        Ok(ScaffoldReport {
            branch_name: branch,
            spec_file,
        })
    }
}

fn spec_template(short_name: &str, description: &str) -> String {
    format!("# Specification: {}\n\n{}", short_name, description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;
    use crate::error::WorkspaceError;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn robot_arm_request() -> ScaffoldRequest {
        ScaffoldRequest {
            number: Some("7".to_string()),
            short_name: Some("robot-arm".to_string()),
            ..ScaffoldRequest::from_words(&["build", "a", "robot", "arm"])
        }
    }

    #[test]
    fn test_from_words_joins_with_spaces() {
        let request = ScaffoldRequest::from_words(&["build a robot arm", "now"]);
        assert_eq!(request.description, "build a robot arm now");

        let empty = ScaffoldRequest::from_words::<&str>(&[]);
        assert_eq!(empty.description, "");
    }

    #[test]
    fn test_create_workspace() {
        let temp = TempDir::new().unwrap();
        let project = Project::new(temp.path().to_path_buf(), ProjectConfig::default());

        let report = FeatureScaffolder::new(&project)
            .create(robot_arm_request())
            .unwrap();

        assert_eq!(report.branch_name, "7-robot-arm");
        assert_eq!(report.spec_file, PathBuf::from("specs/7-robot-arm/spec.md"));

        let spec = fs::read_to_string(temp.path().join("specs/7-robot-arm/spec.md")).unwrap();
        assert_eq!(spec, "# Specification: robot-arm\n\nbuild a robot arm");

        let checklists = temp.path().join("specs/7-robot-arm/checklists");
        assert!(checklists.is_dir());
        assert_eq!(fs::read_dir(&checklists).unwrap().count(), 0);
    }

    #[test]
    fn test_create_twice_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let project = Project::new(temp.path().to_path_buf(), ProjectConfig::default());
        let scaffolder = FeatureScaffolder::new(&project);

        let first = scaffolder.create(robot_arm_request()).unwrap();
        let second = scaffolder.create(robot_arm_request()).unwrap();

        assert_eq!(first, second);
        let spec = fs::read_to_string(temp.path().join("specs/7-robot-arm/spec.md")).unwrap();
        assert_eq!(spec, "# Specification: robot-arm\n\nbuild a robot arm");
    }

    #[test]
    fn test_create_overwrites_existing_spec() {
        let temp = TempDir::new().unwrap();
        let project = Project::new(temp.path().to_path_buf(), ProjectConfig::default());
        let spec_path = temp.path().join("specs/7-robot-arm/spec.md");
        fs::create_dir_all(spec_path.parent().unwrap()).unwrap();
        fs::write(&spec_path, "hand edited").unwrap();

        FeatureScaffolder::new(&project)
            .create(robot_arm_request())
            .unwrap();

        assert_eq!(
            fs::read_to_string(&spec_path).unwrap(),
            "# Specification: robot-arm\n\nbuild a robot arm"
        );
    }

    #[test]
    fn test_create_with_defaults() {
        let temp = TempDir::new().unwrap();
        let project = Project::new(temp.path().to_path_buf(), ProjectConfig::default());

        let report = FeatureScaffolder::new(&project)
            .create(ScaffoldRequest::default())
            .unwrap();

        assert_eq!(report.branch_name, "1-feature");
        assert_eq!(
            fs::read_to_string(temp.path().join("specs/1-feature/spec.md")).unwrap(),
            "# Specification: feature\n\n"
        );
    }

    #[test]
    fn test_non_numeric_number_is_accepted() {
        let temp = TempDir::new().unwrap();
        let project = Project::new(temp.path().to_path_buf(), ProjectConfig::default());

        let report = FeatureScaffolder::new(&project)
            .create(ScaffoldRequest {
                number: Some("draft".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(report.branch_name, "draft-feature");
        assert!(temp.path().join("specs/draft-feature/checklists").is_dir());
    }

    #[test]
    fn test_unsafe_short_name_touches_nothing() {
        let temp = TempDir::new().unwrap();
        let project = Project::new(temp.path().to_path_buf(), ProjectConfig::default());

        let err = FeatureScaffolder::new(&project)
            .create(ScaffoldRequest {
                short_name: Some("../../outside".to_string()),
                ..Default::default()
            })
            .unwrap_err();

        assert!(matches!(err, WorkspaceError::InvalidComponent { .. }));
        assert!(!temp.path().join("specs").exists());
    }

    #[test]
    fn test_empty_short_name_is_rejected() {
        let temp = TempDir::new().unwrap();
        let project = Project::new(temp.path().to_path_buf(), ProjectConfig::default());

        let err = FeatureScaffolder::new(&project)
            .create(ScaffoldRequest {
                short_name: Some(String::new()),
                ..Default::default()
            })
            .unwrap_err();

        assert!(matches!(
            err,
            WorkspaceError::InvalidComponent { field: "short name", .. }
        ));
    }
}
