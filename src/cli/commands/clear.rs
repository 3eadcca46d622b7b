use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{App, ClearScope};
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear {
        kit,
        phone,
        all,
        yes,
    } = cmd
    {
        let scope = match (*kit, *phone, *all) {
            (true, false, false) => ClearScope::Kit,
            (false, true, false) => ClearScope::Phone,
            (false, false, true) => ClearScope::All,
            _ => {
                return Err(AppError::Other(
                    "choose exactly one of --kit, --phone or --all".into(),
                ));
            }
        };

        if !yes {
            messages::warning("This cannot be undone; re-run with --yes to confirm");
            return Ok(());
        }

        let mut app = App::load(cfg);
        app.clear_history(scope)?;

        match scope {
            ClearScope::Kit => messages::success("Kit calculation history cleared"),
            ClearScope::Phone => messages::success("Phone generation history cleared"),
            ClearScope::All => messages::success("History cleared successfully"),
        }
    }
    Ok(())
}
