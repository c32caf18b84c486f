pub mod achievements;
pub mod analyze;
pub mod challenge;
pub mod complete;
pub mod config;
pub mod level;
pub mod score;
pub mod stats;

use questline_core::{Difficulty, Priority, WorkType};

/// Parse a priority name as entered on the command line.
pub fn parse_priority(raw: &str) -> Result<Priority, Box<dyn std::error::Error>> {
    match raw.to_lowercase().as_str() {
        "low" => Ok(Priority::Low),
        "medium" => Ok(Priority::Medium),
        "high" => Ok(Priority::High),
        "urgent" => Ok(Priority::Urgent),
        "critical" => Ok(Priority::Critical),
        other => Err(format!("unknown priority: {other}").into()),
    }
}

/// Parse a work type name.
pub fn parse_work_type(raw: &str) -> Result<WorkType, Box<dyn std::error::Error>> {
    match raw.to_lowercase().as_str() {
        "deep" => Ok(WorkType::Deep),
        "light" => Ok(WorkType::Light),
        "morning" => Ok(WorkType::Morning),
        other => Err(format!("unknown work type: {other}").into()),
    }
}

/// Parse a difficulty name.
pub fn parse_difficulty(raw: &str) -> Result<Difficulty, Box<dyn std::error::Error>> {
    match raw.to_lowercase().as_str() {
        "trivial" => Ok(Difficulty::Trivial),
        "easy" => Ok(Difficulty::Easy),
        "medium" => Ok(Difficulty::Medium),
        "hard" => Ok(Difficulty::Hard),
        "expert" => Ok(Difficulty::Expert),
        other => Err(format!("unknown difficulty: {other}").into()),
    }
}
