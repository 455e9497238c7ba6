use std::path::Path;

use clap::{Parser, Subcommand};
use nomos_cli::{
    backend::Backend,
    commands::{
        configs_cmd::{self, ConfigsCommands},
        generate_cmd::{self, GenerateArgs},
        init_cmd,
        names_cmd::{self, NamesCommands},
        rules_cmd::{self, RulesCommands},
        validate_cmd::{self, ValidateArgs},
    },
    config::{get_config_path, AppConfig},
    errors::Error,
};
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// Nomos CLI: generate and validate cloud resource names
#[derive(Parser)]
#[command(name = "nomos")]
#[command(about = "Generate and validate cloud resource names", long_about = None)]
struct Cli {
    /// Path to the configuration file (defaults to ./nomos.toml)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate candidate names
    Generate(GenerateArgs),

    /// Validate a name against provider rules and issued names
    Validate(ValidateArgs),

    #[command(subcommand)]
    Names(NamesCommands),

    #[command(subcommand)]
    Rules(RulesCommands),

    #[command(subcommand)]
    Configs(ConfigsCommands),

    /// Write a configuration file holding the built-in rules
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Commands {
    fn is_mutating(&self) -> bool {
        match self {
            Commands::Names(cmd) => cmd.is_mutating(),
            Commands::Configs(cmd) => cmd.is_mutating(),
            _ => false,
        }
    }
}

async fn run(command: &Commands, config_path: &Path) -> Result<String, Error> {
    if let Commands::Init { force } = command {
        return init_cmd::execute(config_path, *force);
    }

    let mut config = AppConfig::load_or_default(config_path)?;
    let backend = Backend::open(&config).await?;

    let output = match command {
        Commands::Generate(args) => generate_cmd::execute(args, &backend).await?,
        Commands::Validate(args) => validate_cmd::execute(args, &backend).await?,
        Commands::Names(cmd) => names_cmd::execute(cmd, &backend).await?,
        Commands::Rules(cmd) => rules_cmd::execute(cmd, &backend).await?,
        Commands::Configs(cmd) => configs_cmd::execute(cmd, &backend).await?,
        Commands::Init { .. } => unreachable!("init runs before the backend is opened"),
    };

    if command.is_mutating() {
        debug!("Writing changes back to {:?}", config_path);
        backend.snapshot(&mut config).await?;
        config.save(config_path)?;
    }

    Ok(output)
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout carries only command output.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_env("NOMOS_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config_path = get_config_path(cli.config.as_deref());

    match run(&cli.command, &config_path).await {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!("Error: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
