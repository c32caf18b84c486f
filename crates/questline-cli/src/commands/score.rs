//! XP scoring command.

use chrono::{Datelike, Timelike, Utc};
use clap::Args;
use questline_core::{Config, ImportanceDetector, TaskXpContext, TimeOfDay, XpCalculator, XpTuning};

use super::{parse_difficulty, parse_priority, parse_work_type};

#[derive(Args)]
pub struct ScoreArgs {
    /// Task title
    pub title: String,
    /// Task description
    #[arg(long)]
    pub description: Option<String>,
    /// Priority: low, medium, high, urgent, critical (default: medium)
    #[arg(long, default_value = "medium")]
    pub priority: String,
    /// Work type: deep, light, morning (default: light)
    #[arg(long, default_value = "light")]
    pub work: String,
    /// Difficulty: trivial, easy, medium, hard, expert (default: medium)
    #[arg(long, default_value = "medium")]
    pub difficulty: String,
    /// Estimated duration in minutes
    #[arg(long)]
    pub minutes: Option<u32>,
    /// Complexity score (0-10)
    #[arg(long)]
    pub complexity: Option<u8>,
    /// Learning value score (0-10)
    #[arg(long)]
    pub learning: Option<u8>,
    /// Strategic importance score (0-10)
    #[arg(long)]
    pub strategic: Option<u8>,
    /// Current streak in days
    #[arg(long, default_value = "0")]
    pub streak: u32,
    /// Tasks already completed today
    #[arg(long, default_value = "0")]
    pub completed_today: u32,
    /// User level
    #[arg(long, default_value = "1")]
    pub level: u32,
    /// Derive missing dimension scores from the title and description
    #[arg(long)]
    pub auto: bool,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Build a scoring context from command-line arguments and the wall clock.
pub fn build_context(args: &ScoreArgs) -> Result<TaskXpContext, Box<dyn std::error::Error>> {
    let now = Utc::now();
    let mut ctx = TaskXpContext::new(&args.title)
        .with_priority(parse_priority(&args.priority)?)
        .with_work_type(parse_work_type(&args.work)?)
        .with_difficulty(parse_difficulty(&args.difficulty)?)
        .with_user_level(args.level)
        .with_streaks(args.streak, args.streak)
        .with_time_of_day(TimeOfDay::from_hour(now.hour()));
    ctx.description = args.description.clone();
    ctx.estimated_minutes = args.minutes;
    ctx.complexity = args.complexity.map(|s| s.min(10));
    ctx.learning_value = args.learning.map(|s| s.min(10));
    ctx.strategic_importance = args.strategic.map(|s| s.min(10));
    ctx.tasks_completed_today = args.completed_today;
    ctx.is_weekend = matches!(
        now.weekday(),
        chrono::Weekday::Sat | chrono::Weekday::Sun
    );

    if args.auto {
        let signals = ImportanceDetector::default().analyze(&args.title, args.description.as_deref());
        ctx.complexity.get_or_insert(signals.complexity);
        ctx.learning_value.get_or_insert(signals.learning_value);
        ctx.strategic_importance
            .get_or_insert(signals.strategic_importance);
    }

    Ok(ctx)
}

pub fn run(args: ScoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let ctx = build_context(&args)?;
    let calculator = XpCalculator::new(XpTuning {
        xp_floor: config.tuning.xp_floor,
        ..XpTuning::default()
    });
    let calculation = calculator.calculate(&ctx);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&calculation)?);
    } else {
        for line in &calculation.breakdown {
            println!("{line}");
        }
        println!("Confidence: {}%", calculation.confidence);
    }
    Ok(())
}
