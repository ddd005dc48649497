//! Configuration management for spec-scaffold.
//!
//! Supports layered configuration: defaults → project → user → env

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the per-project configuration
pub const PROJECT_CONFIG_FILE: &str = ".spec-scaffold.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    #[serde(default)]
    pub fallback: FallbackConfig,
    #[serde(default)]
    pub scaffold: ScaffoldConfig,
    #[serde(default)]
    pub plan: PlanConfig,
}

impl ProjectConfig {
    /// Load configuration with hierarchy: defaults → project → user → env
    pub fn load(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        let user_config = directories::ProjectDirs::from("com", "spec-scaffold", "spec-scaffold")
            .map(|dirs| dirs.config_dir().join("config.toml"));
        Self::load_layers(project_root, user_config.as_deref(), environment())
    }

    fn load_layers(
        project_root: Option<&Path>,
        user_config: Option<&Path>,
        env: config::Environment,
    ) -> Result<Self, ConfigError> {
        use config::{Config, File, FileFormat};

        // 1. Start with defaults
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../default_config.toml"),
            FileFormat::Toml,
        ));

        // 2. Project-specific config (.spec-scaffold.toml in project root)
        if let Some(root) = project_root {
            let project_config = root.join(PROJECT_CONFIG_FILE);
            if project_config.try_exists()? {
                tracing::debug!("Loading project config from {:?}", project_config);
                builder = builder.add_source(File::from(project_config).required(false));
            }
        }

        // 3. User config (~/.config/spec-scaffold/config.toml)
        if let Some(user_config) = user_config {
            if user_config.try_exists()? {
                tracing::debug!("Loading user config from {:?}", user_config);
                builder = builder.add_source(File::from(user_config).required(false));
            }
        }

        // 4. Environment variables (SPEC_SCAFFOLD_*)
        builder = builder.add_source(env);

        let config = builder
            .build()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Environment layer: `SPEC_SCAFFOLD_<SECTION>__<KEY>`, lists comma separated
fn environment() -> config::Environment {
    config::Environment::with_prefix("SPEC_SCAFFOLD")
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("fallback.docs")
        .try_parsing(true)
}

/// Location of the feature workspaces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Directory containing feature workspaces (relative to the working directory)
    #[serde(default = "default_specs_directory")]
    pub specs_directory: PathBuf,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            specs_directory: default_specs_directory(),
        }
    }
}

fn default_specs_directory() -> PathBuf {
    PathBuf::from("specs")
}

/// Descriptor reported when no feature workspace can be discovered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Workspace directory name, also used as the branch name
    #[serde(default = "default_fallback_branch")]
    pub branch: String,
    /// Documentation files listed without checking they exist
    #[serde(default = "default_fallback_docs")]
    pub docs: Vec<String>,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            branch: default_fallback_branch(),
            docs: default_fallback_docs(),
        }
    }
}

fn default_fallback_branch() -> String {
    "1-physical-ai-chapter-spec".to_string()
}

fn default_fallback_docs() -> Vec<String> {
    vec![
        "tasks.md".to_string(),
        "plan.md".to_string(),
        "spec.md".to_string(),
    ]
}

/// Defaults for `create-new-feature`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    #[serde(default = "default_number")]
    pub default_number: String,
    #[serde(default = "default_short_name")]
    pub default_short_name: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            default_number: default_number(),
            default_short_name: default_short_name(),
        }
    }
}

fn default_number() -> String {
    "1".to_string()
}

fn default_short_name() -> String {
    "feature".to_string()
}

/// `setup-plan` behaviour
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Also print the fallback descriptor after a discovered workspace
    #[serde(default)]
    pub always_emit_fallback: bool,
}
