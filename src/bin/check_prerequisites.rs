//! check-prerequisites: report the latest feature workspace and its docs.

use anyhow::Result;
use clap::Parser;
use std::io;

use spec_scaffold::cli::CheckPrerequisitesCli;
use spec_scaffold::domain::Project;

fn main() -> Result<()> {
    let cli = CheckPrerequisitesCli::parse();
    spec_scaffold::logging::init();

    let project = Project::current()?;
    tracing::debug!("Checking prerequisites in {:?}", project.root_path);

    cli.run(&project, &mut io::stdout().lock())?;
    Ok(())
}
