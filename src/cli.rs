//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for phone-forward using clap's derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// phone-forward - A prefix redirection interpreter for phone numbers
#[derive(Parser, Debug)]
#[command(name = "phone-forward")]
#[command(version)]
#[command(about = "Interpret phone number forwarding commands", long_about = None)]
pub struct Cli {
    /// Configuration file (default: phone-forward.toml, optional)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Command file to execute (default: stdin)
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: phone-forward.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_file_positional() {
        let cli = Cli::try_parse_from(["phone-forward", "cmds.txt"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("cmds.txt")));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_config_generate() {
        let cli = Cli::try_parse_from([
            "phone-forward",
            "-c",
            "custom.toml",
            "config",
            "generate",
            "out.toml",
            "--force",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
        match cli.command {
            Some(Commands::Config {
                action: ConfigCommands::Generate { output_path, force },
            }) => {
                assert_eq!(output_path.as_deref(), Some("out.toml"));
                assert!(force);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_arguments_reads_stdin() {
        let cli = Cli::try_parse_from(["phone-forward"]).unwrap();
        assert!(cli.input.is_none());
        assert!(cli.config.is_none());
    }
}
