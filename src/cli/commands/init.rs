use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use std::path::Path;

pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data_dir.as_deref())?;

    let dir = Path::new(&cfg.baseline)
        .parent()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    messages::success(format!("Initialized data directory: {dir}"));
    messages::info(format!("Baseline document: {}", cfg.baseline));
    Ok(())
}
