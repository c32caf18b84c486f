//! Keyword-based task importance heuristics.
//!
//! The detector scans a task's title and description for substring matches
//! against five fixed keyword sets and derives 1-10 scores for priority,
//! complexity, learning value, and strategic importance. It is a total pure
//! function: every input yields a result.

use serde::{Deserialize, Serialize};

use crate::task::Priority;

const SCORE_MIN: i32 = 1;
const SCORE_MAX: i32 = 10;
const SCORE_BASE: i32 = 5;
const SCORE_DELTA: i32 = 3;

/// The keyword sets driving the detector.
///
/// Injectable so tests can run against small synthetic catalogs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordCatalog {
    /// Terms marking a task as explicitly low priority
    pub low_priority: Vec<String>,
    /// Urgency terms raising priority
    pub high_priority: Vec<String>,
    /// Terms hinting at high complexity
    pub complexity: Vec<String>,
    /// Terms hinting at learning value
    pub learning: Vec<String>,
    /// Terms hinting at strategic importance
    pub strategic: Vec<String>,
}

impl Default for KeywordCatalog {
    fn default() -> Self {
        fn words(list: &[&str]) -> Vec<String> {
            list.iter().map(|w| w.to_string()).collect()
        }
        Self {
            low_priority: words(&[
                "low priority",
                "whenever",
                "someday",
                "eventually",
                "nice to have",
                "optional",
                "backlog",
            ]),
            high_priority: words(&[
                "urgent",
                "asap",
                "critical",
                "deadline",
                "emergency",
                "blocker",
                "due today",
                "overdue",
            ]),
            complexity: words(&[
                "architecture",
                "refactor",
                "migration",
                "design",
                "algorithm",
                "integration",
                "debug",
                "investigate",
            ]),
            learning: words(&[
                "learn",
                "study",
                "research",
                "tutorial",
                "course",
                "read",
                "practice",
                "explore",
            ]),
            strategic: words(&[
                "launch",
                "roadmap",
                "milestone",
                "strategy",
                "planning",
                "review",
                "goal",
                "quarterly",
            ]),
        }
    }
}

impl KeywordCatalog {
    fn first_match<'a>(&'a self, set: &'a [String], text: &str) -> Option<&'a str> {
        set.iter().find(|kw| text.contains(kw.as_str())).map(|s| s.as_str())
    }
}

/// Result of an importance analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportanceSignals {
    /// Derived priority bucket
    pub priority: Priority,
    /// Raw priority score (1-10)
    pub priority_score: u8,
    /// Complexity score (1-10)
    pub complexity: u8,
    /// Learning value score (1-10)
    pub learning_value: u8,
    /// Strategic importance score (1-10)
    pub strategic_importance: u8,
    /// Human-readable reasoning, one line per signal that fired
    pub reasoning: Vec<String>,
}

/// Keyword-driven importance detector.
#[derive(Debug, Clone, Default)]
pub struct ImportanceDetector {
    catalog: KeywordCatalog,
}

impl ImportanceDetector {
    /// Create a detector over a custom keyword catalog.
    pub fn new(catalog: KeywordCatalog) -> Self {
        Self { catalog }
    }

    /// Analyze a task's title and optional description.
    ///
    /// Low-priority terms are checked first and suppress the urgency set so
    /// that "low priority" is never shadowed by an urgency word appearing in
    /// the same text.
    pub fn analyze(&self, title: &str, description: Option<&str>) -> ImportanceSignals {
        let text = format!("{} {}", title, description.unwrap_or("")).to_lowercase();
        let mut reasoning = Vec::new();

        let mut priority_score = SCORE_BASE;
        if let Some(kw) = self.catalog.first_match(&self.catalog.low_priority, &text) {
            priority_score -= SCORE_DELTA;
            reasoning.push(format!("'{kw}' marks this as low priority"));
        } else if let Some(kw) = self.catalog.first_match(&self.catalog.high_priority, &text) {
            priority_score += SCORE_DELTA;
            reasoning.push(format!("'{kw}' signals urgency"));
        }

        let mut complexity = SCORE_BASE;
        if let Some(kw) = self.catalog.first_match(&self.catalog.complexity, &text) {
            complexity += SCORE_DELTA;
            reasoning.push(format!("'{kw}' suggests complex work"));
        }

        let mut learning_value = SCORE_BASE;
        if let Some(kw) = self.catalog.first_match(&self.catalog.learning, &text) {
            learning_value += SCORE_DELTA;
            reasoning.push(format!("'{kw}' suggests learning value"));
        }

        let mut strategic_importance = SCORE_BASE;
        if let Some(kw) = self.catalog.first_match(&self.catalog.strategic, &text) {
            strategic_importance += SCORE_DELTA;
            reasoning.push(format!("'{kw}' suggests strategic importance"));
        }

        priority_score = priority_score.clamp(SCORE_MIN, SCORE_MAX);
        complexity = complexity.clamp(SCORE_MIN, SCORE_MAX);
        learning_value = learning_value.clamp(SCORE_MIN, SCORE_MAX);
        strategic_importance = strategic_importance.clamp(SCORE_MIN, SCORE_MAX);

        ImportanceSignals {
            priority: Self::priority_from_score(priority_score as u8),
            priority_score: priority_score as u8,
            complexity: complexity as u8,
            learning_value: learning_value as u8,
            strategic_importance: strategic_importance as u8,
            reasoning,
        }
    }

    /// Map a 1-10 priority score into a [`Priority`] bucket.
    pub fn priority_from_score(score: u8) -> Priority {
        match score {
            0..=3 => Priority::Low,
            4..=6 => Priority::Medium,
            7 => Priority::High,
            8..=9 => Priority::Urgent,
            _ => Priority::Critical,
        }
    }
}
