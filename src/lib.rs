//! rFortnight library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod narrative;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::{Backend, Config};
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Settings { .. } => cli::commands::settings::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Expense { .. } => cli::commands::expense::handle(&cli.command, cfg),
        Commands::Advance { .. } => cli::commands::advance::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Periods => cli::commands::periods::handle(cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::User { .. } => cli::commands::user::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Apply the global command-line overrides on top of the loaded configuration.
pub fn apply_overrides(cli: &Cli, cfg: &mut Config) {
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
        cfg.backend = Backend::Sqlite;
    }
    if let Some(local) = &cli.local {
        cfg.local_store = local.clone();
        cfg.backend = Backend::Local;
    }
    if let Some(user) = &cli.user {
        cfg.user = user.clone();
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Test mode never reads the user's configuration file.
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    apply_overrides(&cli, &mut cfg);

    dispatch(&cli, &cfg)
}
