//! User gamification state.
//!
//! [`UserGameStats`] is the mutable aggregate a caller loads from storage,
//! hands to the engine for one update, and persists again. This crate never
//! owns the durable copy.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// An achievement the user has earned, with its unlock time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnlockedAchievement {
    /// Catalog id of the achievement
    pub id: String,
    /// When it was unlocked
    pub unlocked_at: DateTime<Utc>,
}

/// Cumulative gamification state for one user.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserGameStats {
    /// Lifetime XP total
    pub total_xp: u64,
    /// Current level (derived from total_xp; cached here for display)
    pub level: u32,
    /// Consecutive days with at least one completion
    pub current_streak: u32,
    /// Longest streak ever reached
    pub longest_streak: u32,
    /// Consecutive active days (alias counter kept for bonus thresholds)
    pub consecutive_days: u32,
    /// Lifetime completed-task count
    pub total_tasks_completed: u64,
    /// Tasks completed today
    pub tasks_completed_today: u32,
    /// Completions inside the current combo window
    pub combo_count: u32,
    /// Timestamp of the most recent completion
    pub last_completion_at: Option<DateTime<Utc>>,
    /// Achievements earned so far
    pub unlocked: Vec<UnlockedAchievement>,
}

impl UserGameStats {
    /// Fresh stats for a new user.
    pub fn new() -> Self {
        Self {
            level: 1,
            ..Self::default()
        }
    }

    /// Whether the achievement with `id` has already been unlocked.
    pub fn has_unlocked(&self, id: &str) -> bool {
        self.unlocked.iter().any(|a| a.id == id)
    }

    /// Record an unlock. No-op when the id is already present.
    pub fn record_unlock(&mut self, id: impl Into<String>, now: DateTime<Utc>) {
        let id = id.into();
        if !self.has_unlocked(&id) {
            self.unlocked.push(UnlockedAchievement {
                id,
                unlocked_at: now,
            });
        }
    }

    /// Roll daily counters forward to `now`.
    ///
    /// Same-day calls are no-ops. The first completion of a new day resets
    /// `tasks_completed_today`; an adjacent day extends the streak counters,
    /// a gap of more than one day resets them.
    pub fn roll_day(&mut self, now: DateTime<Utc>) {
        let Some(last) = self.last_completion_at else {
            return;
        };
        let last_day = last.date_naive();
        let today = now.date_naive();
        if today == last_day {
            return;
        }

        self.tasks_completed_today = 0;
        if today == last_day + Duration::days(1) {
            self.current_streak += 1;
            self.consecutive_days += 1;
        } else {
            self.current_streak = 0;
            self.consecutive_days = 0;
        }
        self.longest_streak = self.longest_streak.max(self.current_streak);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_new_stats_start_at_level_one() {
        let stats = UserGameStats::new();
        assert_eq!(stats.level, 1);
        assert_eq!(stats.total_xp, 0);
    }

    #[test]
    fn test_record_unlock_idempotent() {
        let mut stats = UserGameStats::new();
        let now = at(1, 9);
        stats.record_unlock("first-steps", now);
        stats.record_unlock("first-steps", now);
        assert_eq!(stats.unlocked.len(), 1);
        assert!(stats.has_unlocked("first-steps"));
    }

    #[test]
    fn test_roll_day_same_day_noop() {
        let mut stats = UserGameStats::new();
        stats.last_completion_at = Some(at(1, 9));
        stats.tasks_completed_today = 4;
        stats.roll_day(at(1, 18));
        assert_eq!(stats.tasks_completed_today, 4);
    }

    #[test]
    fn test_roll_day_adjacent_extends_streak() {
        let mut stats = UserGameStats::new();
        stats.last_completion_at = Some(at(1, 9));
        stats.current_streak = 3;
        stats.consecutive_days = 3;
        stats.tasks_completed_today = 6;

        stats.roll_day(at(2, 8));
        assert_eq!(stats.tasks_completed_today, 0);
        assert_eq!(stats.current_streak, 4);
        assert_eq!(stats.consecutive_days, 4);
        assert_eq!(stats.longest_streak, 4);
    }

    #[test]
    fn test_roll_day_gap_resets_streak() {
        let mut stats = UserGameStats::new();
        stats.last_completion_at = Some(at(1, 9));
        stats.current_streak = 5;
        stats.longest_streak = 5;

        stats.roll_day(at(4, 8));
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.consecutive_days, 0);
        assert_eq!(stats.longest_streak, 5);
    }
}
