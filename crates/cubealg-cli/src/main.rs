mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod ui;
mod utils;

use crate::cli::{Cli, Commands};
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use clap::Parser;
use cubealg::core::io::json::JsonFile;
use cubealg::workflows::manager::AlgorithmManager;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("cubealg v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let app_config = config::build_config(&cli)?;
    debug!("Effective configuration: {:?}", app_config);

    let command_result = match cli.command {
        Commands::Config(args) => {
            debug!("Dispatching to 'config' command.");
            commands::config::run(args, &app_config)
        }
        Commands::List(args) => {
            debug!("Dispatching to 'list' command.");
            commands::list::run(&mut open_manager(&app_config), args)
        }
        Commands::Show { id } => {
            debug!("Dispatching to 'show' command.");
            commands::show::run(&open_manager(&app_config), id)
        }
        Commands::Add(args) => {
            debug!("Dispatching to 'add' command.");
            commands::add::run(&mut open_manager(&app_config), args).map(|_| ())
        }
        Commands::Edit(args) => {
            debug!("Dispatching to 'edit' command.");
            commands::edit::run(&mut open_manager(&app_config), args)
        }
        Commands::Delete(args) => {
            debug!("Dispatching to 'delete' command.");
            commands::delete::run(&mut open_manager(&app_config), args)
        }
    };

    match &command_result {
        Ok(_) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }
    command_result
}

fn open_manager(app_config: &AppConfig) -> AlgorithmManager {
    let repository = JsonFile::new(app_config.data_file.clone());
    let manager = AlgorithmManager::open(Box::new(repository), app_config.store_config);
    ui::print_load_warnings(manager.load_warnings());
    manager
}
