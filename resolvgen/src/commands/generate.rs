use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Module directory containing a `resolvers` folder
    pub module_root: PathBuf,

    /// Output folder, relative to the module directory
    #[arg(default_value = "generated")]
    pub output: PathBuf,

    /// Preview the generated file without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::generate(ops::generate::GenerateOptions {
            module_root: &self.module_root,
            output_folder: &self.output,
            dry_run: self.dry_run,
        })?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
