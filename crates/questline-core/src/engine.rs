//! Task-completion orchestration.
//!
//! [`GamificationEngine`] ties the scoring pieces together for a single
//! completion: XP award, level recomputation, achievement checks, and combo
//! bookkeeping. It owns no storage; the caller loads a [`UserGameStats`],
//! hands it in, and persists the returned copy.

use chrono::{DateTime, Duration, Utc};

use crate::achievements::{Achievement, AchievementCatalog};
use crate::levels::LevelCurve;
use crate::stats::UserGameStats;
use crate::task::TaskXpContext;

/// Bonus XP per new level on level-up.
const LEVEL_UP_BONUS_PER_LEVEL: u32 = 10;
/// Bonus XP per combo step once the combo threshold is reached.
const COMBO_BONUS_PER_STEP: u32 = 5;
/// Combo count at which combo bonuses start.
const COMBO_BONUS_THRESHOLD: u32 = 3;

/// Result of processing one task completion.
#[derive(Debug, Clone)]
pub struct CompletionOutcome {
    /// Updated stats for the caller to persist
    pub stats: UserGameStats,
    /// Achievements unlocked by this completion
    pub new_achievements: Vec<Achievement>,
    /// Whether the completion crossed a level threshold
    pub leveled_up: bool,
    /// Level after the completion
    pub new_level: u32,
    /// Total bonus XP awarded on top of the task's XP
    pub bonus_xp: u32,
    /// Display notifications, in award order
    pub notifications: Vec<String>,
}

/// Orchestrates XP award, levels, achievements and combos.
///
/// The curve, catalog, and combo window are injectable; `Default` wires the
/// production values.
#[derive(Debug, Clone)]
pub struct GamificationEngine {
    curve: LevelCurve,
    catalog: AchievementCatalog,
    combo_window: Duration,
}

impl Default for GamificationEngine {
    fn default() -> Self {
        Self {
            curve: LevelCurve::default(),
            catalog: AchievementCatalog::default(),
            combo_window: Duration::hours(1),
        }
    }
}

impl GamificationEngine {
    /// Engine with a custom curve, catalog, and combo window.
    pub fn new(curve: LevelCurve, catalog: AchievementCatalog, combo_window: Duration) -> Self {
        Self {
            curve,
            catalog,
            combo_window,
        }
    }

    /// Apply one task completion to the given stats.
    ///
    /// `xp_earned` is the award from the XP calculator. The returned stats
    /// include the task XP plus any level-up, achievement, and combo bonuses;
    /// `total_xp` and `total_tasks_completed` never decrease.
    pub fn process_completion(
        &self,
        mut stats: UserGameStats,
        ctx: &TaskXpContext,
        xp_earned: u32,
        now: DateTime<Utc>,
    ) -> CompletionOutcome {
        let mut notifications = Vec::new();
        let mut bonus_xp = 0u32;

        stats.roll_day(now);
        stats.total_xp += u64::from(xp_earned);
        stats.total_tasks_completed += 1;
        stats.tasks_completed_today += 1;
        notifications.push(format!("+{} XP: {}", xp_earned, ctx.title));

        let old_level = stats.level.max(1);
        let progress = self.curve.progress(stats.total_xp);
        stats.level = progress.level;
        let leveled_up = progress.level > old_level;
        if leveled_up {
            let level_bonus = progress.level * LEVEL_UP_BONUS_PER_LEVEL;
            bonus_xp += level_bonus;
            notifications.push(format!(
                "Level up! Reached level {} (+{} XP)",
                progress.level, level_bonus
            ));
        }

        let new_achievements: Vec<Achievement> = self
            .catalog
            .check(&stats)
            .into_iter()
            .cloned()
            .collect();
        for achievement in &new_achievements {
            stats.record_unlock(achievement.id.clone(), now);
            bonus_xp += achievement.points;
            notifications.push(format!(
                "Achievement unlocked: {} (+{} XP)",
                achievement.name, achievement.points
            ));
        }

        let within_window = stats
            .last_completion_at
            .map(|last| now - last < self.combo_window)
            .unwrap_or(false);
        stats.combo_count = if within_window {
            stats.combo_count + 1
        } else {
            1
        };
        if stats.combo_count >= COMBO_BONUS_THRESHOLD {
            let combo_bonus = stats.combo_count * COMBO_BONUS_PER_STEP;
            bonus_xp += combo_bonus;
            notifications.push(format!(
                "Combo x{}! (+{} XP)",
                stats.combo_count, combo_bonus
            ));
        }
        stats.last_completion_at = Some(now);

        stats.total_xp += u64::from(bonus_xp);
        // Bonus XP may cross another threshold; refresh the cached level
        // without awarding a cascading level-up bonus.
        stats.level = self.curve.progress(stats.total_xp).level;

        CompletionOutcome {
            new_level: stats.level,
            stats,
            new_achievements,
            leveled_up,
            bonus_xp,
            notifications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_first_completion_unlocks_first_steps() {
        let engine = GamificationEngine::default();
        let outcome = engine.process_completion(
            UserGameStats::new(),
            &TaskXpContext::new("Inbox zero"),
            40,
            at(2, 9, 0),
        );

        assert_eq!(outcome.stats.total_tasks_completed, 1);
        assert!(outcome.new_achievements.iter().any(|a| a.id == "first-steps"));
        assert!(outcome.stats.has_unlocked("first-steps"));
        // 40 task XP + 10 achievement points
        assert_eq!(outcome.stats.total_xp, 50);
    }

    #[test]
    fn test_first_steps_never_unlocks_twice() {
        let engine = GamificationEngine::default();
        let ctx = TaskXpContext::new("x");
        let outcome = engine.process_completion(UserGameStats::new(), &ctx, 10, at(2, 9, 0));
        let outcome = engine.process_completion(outcome.stats, &ctx, 10, at(2, 10, 30));

        assert!(!outcome.new_achievements.iter().any(|a| a.id == "first-steps"));
        assert_eq!(
            outcome
                .stats
                .unlocked
                .iter()
                .filter(|a| a.id == "first-steps")
                .count(),
            1
        );
    }

    #[test]
    fn test_level_up_awards_bonus() {
        let engine = GamificationEngine::default();
        // 95 XP banked, 20 more crosses the level-2 threshold of 100
        let mut stats = UserGameStats::new();
        stats.total_xp = 95;
        stats.level = 1;
        stats.total_tasks_completed = 5;
        stats.record_unlock("first-steps", at(1, 9, 0));
        stats.record_unlock("productive-day", at(1, 9, 0));

        let outcome =
            engine.process_completion(stats, &TaskXpContext::new("x"), 20, at(2, 9, 0));

        assert!(outcome.leveled_up);
        assert_eq!(outcome.new_level, 2);
        assert!(outcome.bonus_xp >= 20); // level 2 x 10
        assert!(outcome
            .notifications
            .iter()
            .any(|n| n.contains("Level up")));
    }

    #[test]
    fn test_combo_increments_within_window() {
        let engine = GamificationEngine::default();
        let ctx = TaskXpContext::new("x");

        let outcome = engine.process_completion(UserGameStats::new(), &ctx, 10, at(2, 9, 0));
        assert_eq!(outcome.stats.combo_count, 1);

        let outcome = engine.process_completion(outcome.stats, &ctx, 10, at(2, 9, 30));
        assert_eq!(outcome.stats.combo_count, 2);

        let outcome = engine.process_completion(outcome.stats, &ctx, 10, at(2, 9, 45));
        assert_eq!(outcome.stats.combo_count, 3);
        assert!(outcome.notifications.iter().any(|n| n.contains("Combo x3")));
    }

    #[test]
    fn test_combo_resets_after_one_hour_gap() {
        let engine = GamificationEngine::default();
        let ctx = TaskXpContext::new("x");

        let outcome = engine.process_completion(UserGameStats::new(), &ctx, 10, at(2, 9, 0));
        let outcome = engine.process_completion(outcome.stats, &ctx, 10, at(2, 9, 30));
        assert_eq!(outcome.stats.combo_count, 2);

        // Gap exceeds the one-hour window
        let outcome = engine.process_completion(outcome.stats, &ctx, 10, at(2, 11, 0));
        assert_eq!(outcome.stats.combo_count, 1);
    }

    #[test]
    fn test_totals_never_decrease() {
        let engine = GamificationEngine::default();
        let ctx = TaskXpContext::new("x");
        let mut stats = UserGameStats::new();

        for i in 0..50i64 {
            let before_xp = stats.total_xp;
            let before_tasks = stats.total_tasks_completed;
            let outcome = engine.process_completion(stats, &ctx, 5, at(2, 9, 0) + Duration::minutes(i * 7));
            stats = outcome.stats;
            assert!(stats.total_xp >= before_xp);
            assert!(stats.total_tasks_completed > before_tasks);
        }
    }

    #[test]
    fn test_bonus_xp_lands_in_totals() {
        let engine = GamificationEngine::default();
        let outcome = engine.process_completion(
            UserGameStats::new(),
            &TaskXpContext::new("x"),
            30,
            at(2, 9, 0),
        );
        // 30 task XP + first-steps (10)
        assert_eq!(outcome.bonus_xp, 10);
        assert_eq!(outcome.stats.total_xp, 40);
    }

    #[test]
    fn test_custom_curve_and_catalog() {
        let curve = LevelCurve {
            base: 10,
            linear: 0,
            quadratic: 0,
        };
        let catalog = AchievementCatalog::new(vec![]);
        let engine = GamificationEngine::new(curve, catalog, Duration::minutes(5));

        let outcome = engine.process_completion(
            UserGameStats::new(),
            &TaskXpContext::new("x"),
            10,
            at(2, 9, 0),
        );
        assert!(outcome.leveled_up);
        assert!(outcome.new_achievements.is_empty());
    }
}
