use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use tracing::{debug, info};

use phone_forward::cli::{Cli, Commands, ConfigCommands};
use phone_forward::config::{StaticConfig, init_config};
use phone_forward::interpreter::Interpreter;
use phone_forward::system::logging::init_logging;

const DEFAULT_SAMPLE_PATH: &str = "phone-forward.example.toml";

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    if let Some(Commands::Config { action }) = cli.command {
        return match action {
            ConfigCommands::Generate { output_path, force } => {
                generate_config(output_path.as_deref(), force)?;
                Ok(ExitCode::SUCCESS)
            }
        };
    }

    let config = init_config(cli.config.as_deref()).context("Failed to load configuration")?;
    let _guard = init_logging(&config.logging).context("Failed to initialize logging")?;
    debug!(?config, "configuration loaded");

    let mut interpreter = Interpreter::from_config(&config.engine);
    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());

    let outcome = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            info!(input = %path.display(), "running command file");
            interpreter.run(BufReader::new(file), &mut output)
        }
        None => interpreter.run(io::stdin().lock(), &mut output),
    };

    // Results printed before a failure still belong on stdout.
    output.flush().context("Failed to flush output")?;

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            debug!(error = %e.format_simple(), "interpreter stopped");
            eprintln!("{}", e.diagnostic());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn generate_config(output_path: Option<&str>, force: bool) -> Result<()> {
    let path = output_path.unwrap_or(DEFAULT_SAMPLE_PATH);

    if Path::new(path).exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path);
    }

    StaticConfig::default()
        .save_to_file(path)
        .with_context(|| format!("Failed to write {}", path))?;
    println!("{} {}", "Configuration written to".green(), path);
    Ok(())
}
