use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::App;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if !yes {
            messages::warning(
                "This will reset all demo data and log you out; re-run with --yes to confirm",
            );
            return Ok(());
        }

        let app = App::load(cfg);
        app.reset()?;
        messages::success("Demo state reset; all local data removed");
    }
    Ok(())
}
