//! Task completion command: score, apply, persist.

use chrono::{Duration, Utc};
use clap::Args;
use questline_core::{
    Achievement, AchievementCatalog, Config, GamificationEngine, LevelCurve, StatsDb,
    UserGameStats, XpCalculator, XpTuning,
};
use serde::Serialize;

use super::score::{build_context, ScoreArgs};

#[derive(Args)]
pub struct CompleteArgs {
    #[command(flatten)]
    pub score: ScoreArgs,
}

/// JSON payload for `complete --json`.
#[derive(Serialize)]
struct CompletionReport {
    xp_earned: u32,
    bonus_xp: u32,
    level: u32,
    leveled_up: bool,
    new_achievements: Vec<Achievement>,
    notifications: Vec<String>,
    stats: UserGameStats,
}

pub fn run(args: CompleteArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let mut db = StatsDb::open()?;
    let stats = db.load()?;
    let now = Utc::now();

    let combo_window = Duration::minutes(i64::from(config.tuning.combo_window_minutes));

    // Fill session context from the stored stats rather than flags.
    let mut ctx = build_context(&args.score)?;
    ctx.current_streak = stats.current_streak;
    ctx.consecutive_days = stats.consecutive_days;
    ctx.tasks_completed_today = stats.tasks_completed_today;
    ctx.user_level = stats.level.max(1);
    ctx.active_achievements = stats.unlocked.len() as u32;
    if let Some(last) = stats.last_completion_at {
        if now - last < combo_window {
            ctx.recent_completion = true;
            ctx.combo_count = stats.combo_count + 1;
        }
    }

    let calculator = XpCalculator::new(XpTuning {
        xp_floor: config.tuning.xp_floor,
        ..XpTuning::default()
    });
    let calculation = calculator.calculate(&ctx);
    let engine = GamificationEngine::new(
        LevelCurve::default(),
        AchievementCatalog::default(),
        combo_window,
    );
    let outcome = engine.process_completion(stats, &ctx, calculation.final_xp, now);
    db.save(&outcome.stats)?;

    if args.score.json {
        let report = CompletionReport {
            xp_earned: calculation.final_xp,
            bonus_xp: outcome.bonus_xp,
            level: outcome.new_level,
            leveled_up: outcome.leveled_up,
            new_achievements: outcome.new_achievements,
            notifications: outcome.notifications,
            stats: outcome.stats,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in &outcome.notifications {
            println!("{line}");
        }
        println!(
            "Level {} | {} XP total | combo x{}",
            outcome.stats.level, outcome.stats.total_xp, outcome.stats.combo_count
        );
    }
    Ok(())
}
