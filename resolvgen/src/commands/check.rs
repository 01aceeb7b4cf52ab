use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Module directory containing a `resolvers` folder
    pub module_root: PathBuf,
}

impl CheckCommand {
    /// Run the check command, exiting with status 1 on collisions
    pub fn run(&self) -> Result<()> {
        let report = ops::check(&self.module_root)?;
        report.render(&mut TerminalOutput::new());

        let code = report.exit_code();
        if code != 0 {
            std::process::exit(code);
        }
        Ok(())
    }
}
