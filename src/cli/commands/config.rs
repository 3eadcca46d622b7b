use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::fs;
use std::process::Command;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            println!("{}", content);
        } else if *edit_config {
            let ed = editor
                .clone()
                .or_else(|| std::env::var("EDITOR").ok())
                .unwrap_or_else(|| "nano".into());

            Command::new(ed)
                .arg(&path)
                .status()
                .map_err(|e| AppError::Config(e.to_string()))?;
        } else {
            messages::info(format!("Configuration file: {}", path.display()));
        }
    }
    Ok(())
}
