use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::App;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { username, password } = cmd {
        let mut app = App::load(cfg);
        app.login(username, password)?;
        messages::success(format!("Welcome back, {username}!"));
    }
    Ok(())
}
