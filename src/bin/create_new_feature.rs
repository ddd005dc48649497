//! create-new-feature: scaffold a numbered feature workspace.

use anyhow::Result;
use clap::Parser;
use std::io;

use spec_scaffold::cli::CreateNewFeatureCli;
use spec_scaffold::domain::Project;

fn main() -> Result<()> {
    let cli = CreateNewFeatureCli::parse();
    spec_scaffold::logging::init();

    let project = Project::current()?;
    cli.run(&project, &mut io::stdout().lock())?;
    Ok(())
}
