use crate::config::Config;
use crate::core::App;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::formatting;

const RECENT_LIMIT: usize = 5;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let app = App::load(cfg);
    let username = app.current_user()?.to_string();
    let record = app.current_record()?;

    messages::info(format!("Logged in as {}", formatting::bold(&username)));
    println!("Kit calculations:  {}", record.history.kit_calculations.len());
    println!("Phone generations: {}", record.history.phone_generations.len());

    let recent = app.recent_activity(RECENT_LIMIT)?;
    println!();
    if recent.is_empty() {
        println!("No recent activity");
    } else {
        println!("Recent activity:");
        for activity in recent {
            println!("  {}  {}", activity.timestamp, activity.description);
        }
    }
    Ok(())
}
