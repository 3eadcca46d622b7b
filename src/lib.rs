//! Kitledger library root.
//! Exposes the CLI parser, the high-level run() function and the
//! internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command),
        Commands::Register { .. } => cli::commands::register::handle(&cli.command, cfg),
        Commands::Login { .. } => cli::commands::login::handle(&cli.command, cfg),
        Commands::Logout => cli::commands::logout::handle(cfg),
        Commands::Status => cli::commands::status::handle(cfg),
        Commands::Kit { .. } => cli::commands::kit::handle(&cli.command, cfg),
        Commands::Phone { .. } => cli::commands::phone::handle(&cli.command, cfg),
        Commands::History { .. } => cli::commands::history::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Clear { .. } => cli::commands::clear::handle(&cli.command, cfg),
        Commands::Reset { .. } => cli::commands::reset::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs: parse the CLI, resolve the
/// configuration (honoring the global --data-dir override) and
/// dispatch.
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let cfg = match &cli.data_dir {
        Some(dir) => Config::for_data_dir(Path::new(dir)),
        None => Config::load(),
    };

    dispatch(&cli, &cfg)
}
