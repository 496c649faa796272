//! zenplan library root.
//! Exposes the CLI parser, the high-level run() function and the planner
//! core (event store, day layout, edit session, app state).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use flexi_logger::Logger;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let cmd = &cli.command;
    match cmd {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(cmd, cfg),
        Commands::Add { .. } => commands::event::add(cmd, cfg),
        Commands::Edit { .. } => commands::event::edit(cmd, cfg),
        Commands::Del { .. } => commands::event::del(cmd, cfg),
        Commands::List { .. } => commands::event::list(cmd, cfg),
        Commands::Day { .. } => commands::day::day(cmd, cfg),
        Commands::Week { .. } => commands::day::week(cmd, cfg),
        Commands::Watch { .. } => commands::day::watch(cmd, cfg),
        Commands::Task { .. } => commands::task::handle(cmd, cfg),
        Commands::Habit { .. } => commands::habit::handle(cmd, cfg),
        Commands::Plan { .. } => commands::plan::handle(cmd, cfg),
        Commands::Export { .. } => commands::export::handle(cmd, cfg),
        Commands::Reset => commands::reset::handle(cfg),
        Commands::Log { .. } => commands::log::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db_path(custom_db)
            .to_string_lossy()
            .to_string();
    }

    // RUST_LOG wins over the configured level; the handle must outlive dispatch.
    let _logger = Logger::try_with_env_or_str(&cfg.log_level)?
        .log_to_stderr()
        .start()?;
    log::debug!("zenplan {} using {}", env!("CARGO_PKG_VERSION"), cfg.database);

    dispatch(&cli, &cfg)
}
