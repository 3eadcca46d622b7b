use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::App;
use crate::errors::AppResult;
use crate::ui::messages;

const MAX_BATCH: u32 = 100;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Phone {
        allow_duplicates,
        count,
    } = cmd
    {
        let count = (*count).clamp(1, MAX_BATCH);
        let mut app = App::load(cfg);

        for _ in 0..count {
            let generation = app.generate_phone(*allow_duplicates)?;
            println!("{}  (prefix {})", generation.number, generation.prefix);
        }

        if count == 1 {
            messages::success("Phone number generated!");
        } else {
            messages::success(format!("{count} phone numbers generated!"));
        }
    }
    Ok(())
}
