use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::App;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, force } = cmd {
        let app = App::load(cfg);
        app.current_user()?;

        ExportLogic::export(&app.users, file, *force)?;
        messages::success(format!("Full XML database exported: {file}"));
        messages::info("Replace the baseline document with this file to persist across sessions");
    }
    Ok(())
}
