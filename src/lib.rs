//! rattendance library root.
//! Exposes the CLI parser, the high-level run() function and the flows
//! behind each screen: class selection, capture, records, export, profile.

pub mod capture;
pub mod cli;
pub mod config;
pub mod confirmation;
pub mod errors;
pub mod hierarchy;
pub mod logging;
pub mod models;
pub mod nav;
pub mod profile;
pub mod recognition;
pub mod records;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Home => cli::commands::home::handle(),
        Commands::Classes { .. } => cli::commands::classes::handle(&cli.command),
        Commands::Take { .. } => cli::commands::take::handle(&cli.command, cfg),
        Commands::Records { .. } => cli::commands::records::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Profile { .. } => cli::commands::profile::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // 2️⃣ load config once (file → environment → flags)
    let mut cfg = Config::load(cli.config.as_deref())?;
    if let Some(server) = &cli.server {
        cfg.recognition_url = server.clone();
    }
    if let Some(store_url) = &cli.store_url {
        cfg.firestore_url = store_url.clone();
    }
    log::debug!(
        "recognition={} firestore={}",
        cfg.recognition_url,
        cfg.firestore_url
    );

    // 3️⃣ hand over to the dispatcher
    dispatch(&cli, &cfg)
}
