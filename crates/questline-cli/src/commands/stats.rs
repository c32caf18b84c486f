//! Stored stats commands.

use clap::Subcommand;
use questline_core::{StatsDb, UserGameStats};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Show the stored stats
    Show,
    /// Reset the stored stats to a fresh state
    Reset,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut db = StatsDb::open()?;

    match action {
        StatsAction::Show => {
            let stats = db.load()?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        StatsAction::Reset => {
            db.save(&UserGameStats::new())?;
            println!("ok");
        }
    }
    Ok(())
}
