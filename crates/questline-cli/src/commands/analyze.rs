//! Task importance analysis command.

use clap::Args;
use questline_core::ImportanceDetector;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Task title
    pub title: String,
    /// Task description
    #[arg(long)]
    pub description: Option<String>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let signals = ImportanceDetector::default().analyze(&args.title, args.description.as_deref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&signals)?);
    } else {
        println!("Priority: {:?} ({}/10)", signals.priority, signals.priority_score);
        println!("Complexity: {}/10", signals.complexity);
        println!("Learning value: {}/10", signals.learning_value);
        println!("Strategic importance: {}/10", signals.strategic_importance);
        for line in &signals.reasoning {
            println!("  - {line}");
        }
    }
    Ok(())
}
