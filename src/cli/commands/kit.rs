use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::App;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::formatting;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Kit { number } = cmd {
        let mut app = App::load(cfg);
        let calculation = app.calculate(*number)?;

        messages::success("Calculation completed!");
        println!(
            "Raw result:    {}",
            formatting::group_thousands(&calculation.raw_result)
        );
        println!("Padded result: {}", calculation.padded_result);
    }
    Ok(())
}
