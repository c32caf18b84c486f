//! Achievement catalog and unlock rules.
//!
//! Achievements are immutable definitions joined at runtime with an unlock
//! timestamp on the user's stats. Unlock logic is tagged-variant dispatch:
//! each catalog entry carries an [`UnlockRule`] describing its own predicate,
//! so adding an achievement never touches a match on id strings.
//!
//! Some catalog entries have no working unlock logic yet; they carry
//! [`UnlockRule::Unimplemented`] and can never fire.

use serde::{Deserialize, Serialize};

use crate::stats::UserGameStats;

/// Achievement rarity tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Achievement grouping for display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Productivity,
    Consistency,
    Mastery,
    Special,
}

/// Unlock predicate for one achievement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnlockRule {
    /// Lifetime completed tasks reaches the target
    TasksCompleted { target: u64 },
    /// Lifetime XP reaches the target
    TotalXp { target: u64 },
    /// Level reaches the target
    LevelReached { target: u32 },
    /// Daily streak reaches the target
    StreakDays { target: u32 },
    /// Combo count reaches the target
    ComboReached { target: u32 },
    /// Tasks completed in a single day reaches the target
    TasksInOneDay { target: u32 },
    /// Defined in the catalog but with no unlock logic; never fires
    Unimplemented,
}

impl UnlockRule {
    /// Evaluate the rule against a stats snapshot.
    pub fn is_met(&self, stats: &UserGameStats) -> bool {
        match *self {
            UnlockRule::TasksCompleted { target } => stats.total_tasks_completed >= target,
            UnlockRule::TotalXp { target } => stats.total_xp >= target,
            UnlockRule::LevelReached { target } => stats.level >= target,
            UnlockRule::StreakDays { target } => stats.current_streak >= target,
            UnlockRule::ComboReached { target } => stats.combo_count >= target,
            UnlockRule::TasksInOneDay { target } => stats.tasks_completed_today >= target,
            UnlockRule::Unimplemented => false,
        }
    }

    /// Current progress toward the rule, as (current, target).
    ///
    /// Returns `None` for unimplemented rules.
    pub fn progress(&self, stats: &UserGameStats) -> Option<(u64, u64)> {
        match *self {
            UnlockRule::TasksCompleted { target } => {
                Some((stats.total_tasks_completed.min(target), target))
            }
            UnlockRule::TotalXp { target } => Some((stats.total_xp.min(target), target)),
            UnlockRule::LevelReached { target } => {
                Some((u64::from(stats.level.min(target)), u64::from(target)))
            }
            UnlockRule::StreakDays { target } => {
                Some((u64::from(stats.current_streak.min(target)), u64::from(target)))
            }
            UnlockRule::ComboReached { target } => {
                Some((u64::from(stats.combo_count.min(target)), u64::from(target)))
            }
            UnlockRule::TasksInOneDay { target } => Some((
                u64::from(stats.tasks_completed_today.min(target)),
                u64::from(target),
            )),
            UnlockRule::Unimplemented => None,
        }
    }
}

/// Immutable achievement definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    /// Stable catalog id
    pub id: String,
    /// Display name
    pub name: String,
    /// Display description
    pub description: String,
    /// XP awarded on unlock
    pub points: u32,
    /// Rarity tier
    pub rarity: Rarity,
    /// Display category
    pub category: Category,
    /// Unlock predicate
    pub rule: UnlockRule,
}

/// Progress toward one achievement, for UI progress bars.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AchievementProgress {
    /// Current value of the tracked counter
    pub current: u64,
    /// Target value
    pub target: u64,
    /// Completion percentage (0-100)
    pub percent: u8,
}

/// The achievement catalog.
///
/// Injectable so tests can run against small synthetic catalogs; `Default`
/// carries the built-in table.
#[derive(Debug, Clone)]
pub struct AchievementCatalog {
    entries: Vec<Achievement>,
}

impl Default for AchievementCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AchievementCatalog {
    /// Build a catalog from explicit entries.
    pub fn new(entries: Vec<Achievement>) -> Self {
        Self { entries }
    }

    /// The built-in production catalog.
    pub fn builtin() -> Self {
        fn entry(
            id: &str,
            name: &str,
            description: &str,
            points: u32,
            rarity: Rarity,
            category: Category,
            rule: UnlockRule,
        ) -> Achievement {
            Achievement {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                points,
                rarity,
                category,
                rule,
            }
        }

        use Category::*;
        use Rarity::*;

        Self::new(vec![
            entry(
                "first-steps",
                "First Steps",
                "Complete your first task",
                10,
                Common,
                Productivity,
                UnlockRule::TasksCompleted { target: 1 },
            ),
            entry(
                "task-novice",
                "Task Novice",
                "Complete 10 tasks",
                25,
                Common,
                Productivity,
                UnlockRule::TasksCompleted { target: 10 },
            ),
            entry(
                "task-adept",
                "Task Adept",
                "Complete 50 tasks",
                50,
                Rare,
                Productivity,
                UnlockRule::TasksCompleted { target: 50 },
            ),
            entry(
                "centurion",
                "Centurion",
                "Complete 100 tasks",
                100,
                Epic,
                Productivity,
                UnlockRule::TasksCompleted { target: 100 },
            ),
            entry(
                "task-legend",
                "Task Legend",
                "Complete 1000 tasks",
                500,
                Legendary,
                Productivity,
                UnlockRule::TasksCompleted { target: 1000 },
            ),
            entry(
                "xp-collector",
                "XP Collector",
                "Earn 1,000 XP",
                25,
                Common,
                Mastery,
                UnlockRule::TotalXp { target: 1_000 },
            ),
            entry(
                "xp-hoarder",
                "XP Hoarder",
                "Earn 10,000 XP",
                100,
                Epic,
                Mastery,
                UnlockRule::TotalXp { target: 10_000 },
            ),
            entry(
                "rising-star",
                "Rising Star",
                "Reach level 5",
                50,
                Rare,
                Mastery,
                UnlockRule::LevelReached { target: 5 },
            ),
            entry(
                "veteran",
                "Veteran",
                "Reach level 10",
                150,
                Epic,
                Mastery,
                UnlockRule::LevelReached { target: 10 },
            ),
            entry(
                "week-warrior",
                "Week Warrior",
                "Keep a 7-day streak",
                50,
                Rare,
                Consistency,
                UnlockRule::StreakDays { target: 7 },
            ),
            entry(
                "month-master",
                "Month Master",
                "Keep a 30-day streak",
                200,
                Legendary,
                Consistency,
                UnlockRule::StreakDays { target: 30 },
            ),
            entry(
                "combo-starter",
                "Combo Starter",
                "Reach a 3x combo",
                15,
                Common,
                Special,
                UnlockRule::ComboReached { target: 3 },
            ),
            entry(
                "on-fire",
                "On Fire",
                "Reach a 5x combo",
                40,
                Rare,
                Special,
                UnlockRule::ComboReached { target: 5 },
            ),
            entry(
                "productive-day",
                "Productive Day",
                "Complete 5 tasks in one day",
                20,
                Common,
                Productivity,
                UnlockRule::TasksInOneDay { target: 5 },
            ),
            entry(
                "perfect-day",
                "Perfect Day",
                "Complete 10 tasks in one day",
                60,
                Epic,
                Productivity,
                UnlockRule::TasksInOneDay { target: 10 },
            ),
            // Entries below have no unlock logic yet; kept visible in
            // listings but they never fire.
            entry(
                "early-bird",
                "Early Bird",
                "Finish a morning routine before 7am",
                20,
                Rare,
                Special,
                UnlockRule::Unimplemented,
            ),
            entry(
                "night-owl",
                "Night Owl",
                "Complete deep work after midnight",
                20,
                Rare,
                Special,
                UnlockRule::Unimplemented,
            ),
            entry(
                "weekend-warrior",
                "Weekend Warrior",
                "Complete 5 tasks on a weekend",
                30,
                Rare,
                Special,
                UnlockRule::Unimplemented,
            ),
            entry(
                "deep-diver",
                "Deep Diver",
                "Complete 20 deep work sessions",
                75,
                Epic,
                Mastery,
                UnlockRule::Unimplemented,
            ),
            entry(
                "comeback-kid",
                "Comeback Kid",
                "Return after a broken 14-day streak",
                50,
                Epic,
                Consistency,
                UnlockRule::Unimplemented,
            ),
        ])
    }

    /// All catalog entries, in display order.
    pub fn entries(&self) -> &[Achievement] {
        &self.entries
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &str) -> Option<&Achievement> {
        self.entries.iter().find(|a| a.id == id)
    }

    /// Achievements whose rule is newly met and not yet unlocked.
    ///
    /// Idempotent for a given stats snapshot: ids already present in
    /// `stats.unlocked` are never returned again.
    pub fn check(&self, stats: &UserGameStats) -> Vec<&Achievement> {
        self.entries
            .iter()
            .filter(|a| !stats.has_unlocked(&a.id) && a.rule.is_met(stats))
            .collect()
    }

    /// Progress toward one achievement, `None` for unknown ids or
    /// unimplemented rules.
    pub fn progress(&self, id: &str, stats: &UserGameStats) -> Option<AchievementProgress> {
        let achievement = self.get(id)?;
        let (current, target) = achievement.rule.progress(stats)?;
        let percent = if target == 0 {
            100
        } else {
            ((current * 100) / target) as u8
        };
        Some(AchievementProgress {
            current,
            target,
            percent,
        })
    }
}
