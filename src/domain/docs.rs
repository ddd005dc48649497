//! Well-known documentation files of a feature workspace.

use crate::error::WorkspaceResult;
use std::path::{Path, PathBuf};

/// Subdirectory created next to a new workspace's spec.md
pub const CHECKLISTS_DIR: &str = "checklists";

/// Type of documentation file in a workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    Tasks,
    Plan,
    Spec,
    Research,
    DataModel,
    Quickstart,
}

impl DocKind {
    /// Reporting order. Callers rely on position, so never reorder.
    pub const ALL: [DocKind; 6] = [
        Self::Tasks,
        Self::Plan,
        Self::Spec,
        Self::Research,
        Self::DataModel,
        Self::Quickstart,
    ];

    /// Get the filename for this doc kind
    pub fn filename(&self) -> &'static str {
        match self {
            Self::Tasks => "tasks.md",
            Self::Plan => "plan.md",
            Self::Spec => "spec.md",
            Self::Research => "research.md",
            Self::DataModel => "data-model.md",
            Self::Quickstart => "quickstart.md",
        }
    }
}

/// Documentation files present in a workspace, in `DocKind::ALL` order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentationSet {
    paths: Vec<PathBuf>,
}

impl DocumentationSet {
    /// Scan `fs_dir` for each well-known file.
    ///
    /// Reported paths are built under `reported_dir`, which names the same
    /// directory as callers see it.
    pub fn scan(fs_dir: &Path, reported_dir: &Path) -> WorkspaceResult<Self> {
        let mut paths = Vec::new();
        for kind in DocKind::ALL {
            if fs_dir.join(kind.filename()).try_exists()? {
                paths.push(reported_dir.join(kind.filename()));
            }
        }
        Ok(Self { paths })
    }

    pub fn into_paths(self) -> Vec<PathBuf> {
        self.paths
    }
}
