use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::App;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Register {
        username,
        password,
        confirm,
    } = cmd
    {
        let mut app = App::load(cfg);
        app.register(username, password, confirm)?;
        messages::success(format!(
            "Welcome, {username}! Account created successfully."
        ));
    }
    Ok(())
}
