use crate::config::Config;
use crate::core::App;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut app = App::load(cfg);
    app.logout()?;
    messages::success("Logged out successfully");
    Ok(())
}
