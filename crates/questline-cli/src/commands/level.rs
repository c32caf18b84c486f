//! Level progress command.

use clap::Args;
use questline_core::{LevelCurve, StatsDb};

#[derive(Args)]
pub struct LevelArgs {
    /// Show progress for an explicit XP total instead of the stored stats
    #[arg(long)]
    pub xp: Option<u64>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: LevelArgs) -> Result<(), Box<dyn std::error::Error>> {
    let total_xp = match args.xp {
        Some(xp) => xp,
        None => StatsDb::open()?.load()?.total_xp,
    };

    let progress = LevelCurve::default().progress(total_xp);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&progress)?);
    } else {
        println!(
            "Level {} ({} / {} XP into the next level)",
            progress.level, progress.xp_in_level, progress.xp_for_next_level
        );
    }
    Ok(())
}
