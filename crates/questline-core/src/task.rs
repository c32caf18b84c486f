//! Task context types for XP scoring.
//!
//! A [`TaskXpContext`] is an ephemeral, caller-constructed snapshot of a
//! completed task plus the session context around it. It has no identity and
//! is never persisted by this crate; callers build one fresh per scoring call.

use serde::{Deserialize, Serialize};

/// Task priority, from least to most pressing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
    Critical,
}

impl Priority {
    /// Human-readable label for breakdown lines.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
            Priority::Critical => "critical",
        }
    }
}

/// Work type driving base XP and duration heuristics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum WorkType {
    /// Focused, cognitively demanding work
    Deep,
    /// Quick administrative or shallow work
    Light,
    /// Morning-routine tasks
    Morning,
}

/// Task difficulty as estimated by the user or an upstream classifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Trivial,
    Easy,
    Medium,
    Hard,
    Expert,
}

/// Coarse time-of-day bucket for contextual bonuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Bucket an hour-of-day (0-23) into a [`TimeOfDay`].
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=21 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }
}

/// Full input for one XP calculation.
///
/// All fields have sensible defaults; missing optional data degrades the
/// confidence score rather than failing the calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskXpContext {
    /// Task title
    pub title: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Task priority
    pub priority: Priority,
    /// Work type category
    pub work_type: WorkType,
    /// Difficulty estimate
    pub difficulty: Difficulty,
    /// Estimated duration in minutes, if known
    pub estimated_minutes: Option<u32>,
    /// AI-scored complexity (0-10)
    pub complexity: Option<u8>,
    /// AI-scored learning value (0-10)
    pub learning_value: Option<u8>,
    /// AI-scored strategic importance (0-10)
    pub strategic_importance: Option<u8>,
    /// Current daily activity streak
    pub current_streak: u32,
    /// Tasks already completed today (before this one)
    pub tasks_completed_today: u32,
    /// Consecutive active days
    pub consecutive_days: u32,
    /// User's current level
    pub user_level: u32,
    /// Number of achievements currently unlocked
    pub active_achievements: u32,
    /// Whether another task was completed within the combo window
    pub recent_completion: bool,
    /// Current combo count (used only when `recent_completion` is set)
    pub combo_count: u32,
    /// Time-of-day bucket at completion
    pub time_of_day: TimeOfDay,
    /// Whether the completion happened on a weekend
    pub is_weekend: bool,
    /// Whether the task was completed inside an active focus session
    pub in_focus_session: bool,
}

impl Default for TaskXpContext {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            priority: Priority::Medium,
            work_type: WorkType::Light,
            difficulty: Difficulty::Medium,
            estimated_minutes: None,
            complexity: None,
            learning_value: None,
            strategic_importance: None,
            current_streak: 0,
            tasks_completed_today: 0,
            consecutive_days: 0,
            user_level: 1,
            active_achievements: 0,
            recent_completion: false,
            combo_count: 0,
            time_of_day: TimeOfDay::Afternoon,
            is_weekend: false,
            in_focus_session: false,
        }
    }
}

impl TaskXpContext {
    /// Create a context for a titled task with everything else defaulted.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the work type.
    pub fn with_work_type(mut self, work_type: WorkType) -> Self {
        self.work_type = work_type;
        self
    }

    /// Set the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the estimated duration in minutes.
    pub fn with_estimated_minutes(mut self, minutes: u32) -> Self {
        self.estimated_minutes = Some(minutes);
        self
    }

    /// Set the AI dimension scores, each clamped to 0-10.
    pub fn with_ai_scores(mut self, complexity: u8, learning: u8, strategic: u8) -> Self {
        self.complexity = Some(complexity.min(10));
        self.learning_value = Some(learning.min(10));
        self.strategic_importance = Some(strategic.min(10));
        self
    }

    /// Set streak/session context.
    pub fn with_streaks(mut self, current_streak: u32, consecutive_days: u32) -> Self {
        self.current_streak = current_streak;
        self.consecutive_days = consecutive_days;
        self
    }

    /// Set the user level.
    pub fn with_user_level(mut self, level: u32) -> Self {
        self.user_level = level.max(1);
        self
    }

    /// Mark a recent completion with the given combo count.
    pub fn with_combo(mut self, combo_count: u32) -> Self {
        self.recent_completion = true;
        self.combo_count = combo_count;
        self
    }

    /// Set the time-of-day bucket.
    pub fn with_time_of_day(mut self, time_of_day: TimeOfDay) -> Self {
        self.time_of_day = time_of_day;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_buckets() {
        assert_eq!(TimeOfDay::from_hour(6), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(18), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(23), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(3), TimeOfDay::Night);
    }

    #[test]
    fn test_context_builder() {
        let ctx = TaskXpContext::new("Write report")
            .with_priority(Priority::High)
            .with_work_type(WorkType::Deep)
            .with_estimated_minutes(45)
            .with_ai_scores(8, 12, 3);

        assert_eq!(ctx.priority, Priority::High);
        assert_eq!(ctx.estimated_minutes, Some(45));
        // scores clamp to 10
        assert_eq!(ctx.learning_value, Some(10));
        assert_eq!(ctx.strategic_importance, Some(3));
    }

    #[test]
    fn test_user_level_floor() {
        let ctx = TaskXpContext::new("x").with_user_level(0);
        assert_eq!(ctx.user_level, 1);
    }
}
