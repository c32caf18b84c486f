use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "questline-cli", version, about = "Questline CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a task and print the XP breakdown
    Score(commands::score::ScoreArgs),
    /// Analyze task importance from its title and description
    Analyze(commands::analyze::AnalyzeArgs),
    /// Record a task completion against the stored stats
    Complete(commands::complete::CompleteArgs),
    /// Show level progress
    Level(commands::level::LevelArgs),
    /// Achievement catalog and progress
    Achievements {
        #[command(subcommand)]
        action: commands::achievements::AchievementsAction,
    },
    /// Daily challenge
    Challenge {
        #[command(subcommand)]
        action: commands::challenge::ChallengeAction,
    },
    /// Stored gamification stats
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Score(args) => commands::score::run(args),
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Complete(args) => commands::complete::run(args),
        Commands::Level(args) => commands::level::run(args),
        Commands::Achievements { action } => commands::achievements::run(action),
        Commands::Challenge { action } => commands::challenge::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
