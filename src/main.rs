//! ucitool - command line entry point
//!
//! Read-style subcommands print the engine's response on stdout; logs go to
//! stderr so the output can be captured by shell scripts.

use anyhow::{Context, Result};
use std::fs;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use ucitool::cli::{Cli, Commands};
use ucitool::commands::options::{AddListArgs, DelListArgs, GetArgs, SetArgs, ShowArgs};
use ucitool::commands::sections::{AddArgs, DeleteArgs, RenameArgs, ReorderArgs};
use ucitool::commands::staging::{
    BatchArgs, ChangesArgs, CommitArgs, ExportArgs, ImportArgs, RevertArgs,
};
use ucitool::invoker::{Invoker, ProcessRunner, SystemRunner};
use ucitool::privilege::{PrivilegeProbe, StaticProbe};
use ucitool::sanity::verify_environment;
use ucitool::{Uci, UciArgs, UciConfig};

/// Initialize the tracing subscriber; RUST_LOG wins over `-v`
fn init_logger(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Config file (or defaults) with command line overrides applied
fn load_config(cli: &Cli) -> Result<UciConfig> {
    let mut config = match &cli.config_file {
        Some(path) => UciConfig::load_from_file(path)
            .with_context(|| format!("Failed to load configuration file {:?}", path))?,
        None => UciConfig::default(),
    };

    if let Some(engine) = &cli.engine {
        config.engine = engine.clone();
    }
    if cli.dry_run {
        config.dry_run = true;
    }

    config.validate().context("Invalid invoker configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logger(cli.verbose);
    debug!("CLI arguments parsed: {:?}", cli);

    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Doctor => {
            let result = verify_environment(&config);
            println!("{}", result.report());
            if !result.is_ok() {
                error!("Engine `{}` not found", config.engine);
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::InitConfig { path } => {
            config
                .save_to_file(path)
                .with_context(|| format!("Failed to write configuration to {:?}", path))?;
            info!("Wrote configuration to {:?}", path);
            Ok(())
        }
        command if cli.no_elevation => {
            let invoker = Invoker::with_parts(config, StaticProbe(false), SystemRunner);
            run_command(&Uci::with_invoker(invoker), command)
        }
        command => run_command(&Uci::new(config), command),
    }
}

/// Typed engine arguments for one subcommand; file operands are read here
fn engine_args(command: &Commands) -> Result<Box<dyn UciArgs>> {
    let args: Box<dyn UciArgs> = match command.clone() {
        Commands::Batch { file } => {
            let script = file
                .map(|path| {
                    fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read batch script {:?}", path))
                })
                .transpose()?;
            Box::new(BatchArgs { script })
        }
        Commands::Export { config } => Box::new(ExportArgs { config }),
        Commands::Import { config, file } => {
            let data = file
                .map(|path| {
                    fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read import data {:?}", path))
                })
                .transpose()?;
            Box::new(ImportArgs { config, data })
        }
        Commands::Changes { config } => Box::new(ChangesArgs { config }),
        Commands::Commit { config } => Box::new(CommitArgs { config }),
        Commands::Add {
            config,
            section_type,
        } => Box::new(AddArgs {
            config,
            section_type,
        }),
        Commands::AddList {
            config,
            section,
            option,
            value,
        } => Box::new(AddListArgs {
            config,
            section,
            option,
            value,
        }),
        Commands::DelList {
            config,
            section,
            option,
            value,
        } => Box::new(DelListArgs {
            config,
            section,
            option,
            value,
        }),
        Commands::Show {
            config,
            section,
            option,
        } => Box::new(ShowArgs {
            config,
            section,
            option,
        }),
        Commands::Get {
            config,
            section,
            option,
        } => Box::new(GetArgs {
            config,
            section,
            option,
        }),
        Commands::Set {
            config,
            section,
            value,
            option,
        } => Box::new(SetArgs {
            config,
            section,
            option,
            value,
        }),
        Commands::Delete {
            config,
            section,
            option,
            id,
        } => Box::new(DeleteArgs {
            config,
            section,
            option,
            id,
        }),
        Commands::Rename {
            config,
            section,
            name,
            option,
        } => Box::new(RenameArgs {
            config,
            section,
            option,
            name,
        }),
        Commands::Revert {
            config,
            section,
            option,
        } => Box::new(RevertArgs {
            config,
            section,
            option,
        }),
        Commands::Reorder {
            config,
            section,
            position,
        } => Box::new(ReorderArgs {
            config,
            section,
            position,
        }),
        Commands::Doctor | Commands::InitConfig { .. } => {
            anyhow::bail!("`{:?}` does not run the engine", command)
        }
    };
    Ok(args)
}

/// Dispatch one engine subcommand and print the response of read-style actions
fn run_command<P, R>(uci: &Uci<P, R>, command: &Commands) -> Result<()>
where
    P: PrivilegeProbe,
    R: ProcessRunner,
{
    let args = engine_args(command)?;
    debug!("Dispatching `{}`", args.action());
    if let Some(line) = uci.respond(args.as_ref())? {
        println!("{}", line);
    }
    Ok(())
}
