//! Achievement catalog and progress commands.

use clap::Subcommand;
use questline_core::{AchievementCatalog, StatsDb, UnlockRule};

#[derive(Subcommand)]
pub enum AchievementsAction {
    /// List the catalog with unlock state
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show progress toward one achievement
    Progress {
        /// Achievement id (e.g. "first-steps")
        id: String,
    },
}

pub fn run(action: AchievementsAction) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = AchievementCatalog::default();
    let stats = StatsDb::open()?.load()?;

    match action {
        AchievementsAction::List { json } => {
            if json {
                let payload: Vec<_> = catalog
                    .entries()
                    .iter()
                    .map(|a| {
                        serde_json::json!({
                            "id": a.id,
                            "name": a.name,
                            "description": a.description,
                            "points": a.points,
                            "rarity": a.rarity,
                            "unlocked": stats.has_unlocked(&a.id),
                            "progress": catalog.progress(&a.id, &stats),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                for achievement in catalog.entries() {
                    let marker = if stats.has_unlocked(&achievement.id) {
                        "[x]"
                    } else if achievement.rule == UnlockRule::Unimplemented {
                        "[-]"
                    } else {
                        "[ ]"
                    };
                    println!(
                        "{} {} ({} pts) - {}",
                        marker, achievement.name, achievement.points, achievement.description
                    );
                }
            }
        }
        AchievementsAction::Progress { id } => match catalog.progress(&id, &stats) {
            Some(progress) => println!(
                "{}: {} / {} ({}%)",
                id, progress.current, progress.target, progress.percent
            ),
            None => {
                eprintln!("no progress tracking for: {id}");
                std::process::exit(1);
            }
        },
    }
    Ok(())
}
