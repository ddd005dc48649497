//! setup-plan: report the spec and plan paths of the latest feature workspace.

use anyhow::Result;
use clap::Parser;
use std::io;

use spec_scaffold::cli::SetupPlanCli;
use spec_scaffold::domain::Project;

fn main() -> Result<()> {
    let cli = SetupPlanCli::parse();
    spec_scaffold::logging::init();

    let project = Project::current()?;
    cli.run(&project, &mut io::stdout().lock())?;
    Ok(())
}
