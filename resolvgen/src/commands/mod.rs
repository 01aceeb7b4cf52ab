mod check;
mod completions;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;

#[derive(Parser)]
#[command(name = "resolvgen")]
#[command(version)]
#[command(about = "Generate resolver aggregator files for TypeScript modules")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate <module>/<output>/resolvers.ts from <module>/resolvers
    Generate(GenerateCommand),

    /// Report resolver files whose derived identifiers collide
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_defaults_output_folder() {
        let cli = Cli::try_parse_from(["resolvgen", "generate", "src/modules/user"]).unwrap();
        match cli.command {
            Commands::Generate(cmd) => {
                assert_eq!(cmd.module_root, std::path::Path::new("src/modules/user"));
                assert_eq!(cmd.output, std::path::Path::new("generated"));
                assert!(!cmd.dry_run);
            }
            _ => panic!("Expected generate command"),
        }
    }

    #[test]
    fn test_generate_with_output_and_dry_run() {
        let cli = Cli::try_parse_from(["resolvgen", "generate", "mod", "out/gen", "--dry-run"])
            .unwrap();
        match cli.command {
            Commands::Generate(cmd) => {
                assert_eq!(cmd.output, std::path::Path::new("out/gen"));
                assert!(cmd.dry_run);
            }
            _ => panic!("Expected generate command"),
        }
    }

    #[test]
    fn test_generate_requires_module_root() {
        assert!(Cli::try_parse_from(["resolvgen", "generate"]).is_err());
    }
}
