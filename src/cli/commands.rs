//! Command execution: wires settings to services and runs the requested mode

use std::io;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::repl::Repl;
use crate::cli::{CliError, CliResult};
use crate::config::{self, Settings};
use crate::infrastructure::{InfraError, ServiceContainer};

/// Execute the parsed command line.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?
        .with_overrides(cli.file.clone(), cli.no_autosave);
    debug!("settings: {:?}", settings);

    match &cli.command {
        None => cmd_interactive(settings),
        Some(Commands::Config { command }) => execute_config(command, &settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "contactbook", &mut io::stdout());
            Ok(())
        }
    }
}

#[instrument(skip(settings))]
fn cmd_interactive(settings: Settings) -> CliResult<()> {
    let prompt = settings.prompt.clone();
    let container = ServiceContainer::new(settings);
    let dispatcher = container.dispatcher()?;

    let stdin = io::stdin();
    let mut repl = Repl::new(dispatcher, prompt);
    repl.run(stdin.lock(), io::stdout())?;
    Ok(())
}

fn execute_config(cmd: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show => {
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            match config::global_config_path() {
                Some(path) => output::action("global", &path.display()),
                None => output::action("global", "(no home directory)"),
            }
            output::action("book", &settings.book_path.display());
            Ok(())
        }
        ConfigCommands::Init { force } => {
            let path = config::global_config_path()
                .ok_or_else(|| CliError::Usage("cannot determine config directory".into()))?;
            if path.exists() && !force {
                return Err(CliError::Usage(format!(
                    "config already exists: {} (use --force to overwrite)",
                    path.display()
                )));
            }
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)
                    .map_err(|e| InfraError::io(format!("create {}", dir.display()), e))?;
            }
            std::fs::write(&path, Settings::template())
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::success(&format!("created {}", path.display()));
            Ok(())
        }
    }
}
