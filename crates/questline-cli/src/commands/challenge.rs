//! Daily challenge commands.

use chrono::{Datelike, Utc};
use clap::Subcommand;
use questline_core::{ChallengeGenerator, Config};

#[derive(Subcommand)]
pub enum ChallengeAction {
    /// Show today's challenge
    Today {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ChallengeAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    match action {
        ChallengeAction::Today { json } => {
            if !config.challenge.enabled {
                println!("daily challenges are disabled");
                return Ok(());
            }

            let now = Utc::now();
            // Seed from the calendar date so every run today agrees.
            let seed = now.date_naive().num_days_from_ce() as u64;
            let mut challenge = ChallengeGenerator::with_seed(seed).generate(now);
            challenge.reward_xp =
                (challenge.reward_xp as f64 * config.challenge.reward_scale).round() as u32;

            if json {
                println!("{}", serde_json::to_string_pretty(&challenge)?);
            } else {
                println!("{}: {}", challenge.name, challenge.description);
                println!(
                    "Reward: {} XP | expires {}",
                    challenge.reward_xp,
                    challenge.expires_at.format("%Y-%m-%d %H:%M UTC")
                );
            }
        }
    }
    Ok(())
}
