//! CLI argument definitions using clap derive macros.
//!
//! Each binary parses one of these and calls `run` with the current project
//! and stdout.

use std::io::Write;

use clap::Parser;

use crate::domain::Project;
use crate::error::Result;
use crate::output;
use crate::services::{FeatureScaffolder, PlanInitializer, ScaffoldRequest, WorkspaceLocator};

/// Print the latest feature workspace and the documentation files it holds
#[derive(Debug, Parser)]
#[command(name = "check-prerequisites", version)]
pub struct CheckPrerequisitesCli {}

impl CheckPrerequisitesCli {
    pub fn run<W: Write>(&self, project: &Project, out: &mut W) -> Result<()> {
        let report = WorkspaceLocator::new(project).check_prerequisites()?;
        output::emit(out, &report)
    }
}

/// Create specs/<number>-<short-name>/ with spec.md and checklists/
#[derive(Debug, Parser)]
#[command(
    name = "create-new-feature",
    version,
    override_usage = "create-new-feature [WORDS]... [--number <N>] [--short-name <NAME>]",
    after_help = "\
Flags may appear anywhere among the words and their values may start with '-'.
--number and --short-name without a value use the configured defaults (\"1\", \"feature\")."
)]
pub struct CreateNewFeatureCli {
    /// Description words, written below the spec heading
    #[arg(value_name = "WORDS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Named parameters recognised among the words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    Number,
    ShortName,
}

impl Flag {
    /// `--number`, `--number=7`, `--short-name`, `--short-name=arm`
    fn parse(arg: &str) -> Option<(Self, Option<&str>)> {
        let (name, inline) = match arg.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (arg, None),
        };
        let flag = match name {
            "--number" => Self::Number,
            "--short-name" => Self::ShortName,
            _ => return None,
        };
        Some((flag, inline))
    }
}

impl CreateNewFeatureCli {
    /// Split the raw arguments into description words and named parameters.
    ///
    /// A flag takes the next argument as its value unless that argument is
    /// itself a flag. A flag with no value leaves the parameter unset. The
    /// last occurrence of a flag wins.
    pub fn request(&self) -> ScaffoldRequest {
        let mut words = Vec::new();
        let mut number = None;
        let mut short_name = None;

        let mut args = self.args.iter().peekable();
        while let Some(arg) = args.next() {
            let Some((flag, inline)) = Flag::parse(arg) else {
                words.push(arg.as_str());
                continue;
            };

            let value = match inline {
                Some("") => None,
                Some(value) => Some(value.to_string()),
                None => args.next_if(|next| Flag::parse(next).is_none()).cloned(),
            };

            match flag {
                Flag::Number => number = value,
                Flag::ShortName => short_name = value,
            }
        }

        ScaffoldRequest {
            number,
            short_name,
            ..ScaffoldRequest::from_words(&words)
        }
    }

    pub fn run<W: Write>(&self, project: &Project, out: &mut W) -> Result<()> {
        let report = FeatureScaffolder::new(project).create(self.request())?;
        output::emit(out, &report)
    }
}

/// Print spec.md and plan.md locations for the latest feature workspace
#[derive(Debug, Parser)]
#[command(name = "setup-plan", version)]
pub struct SetupPlanCli {}

impl SetupPlanCli {
    /// One line per report
    pub fn run<W: Write>(&self, project: &Project, out: &mut W) -> Result<()> {
        for report in PlanInitializer::new(project).run()? {
            output::emit(out, &report)?;
        }
        Ok(())
    }
}
