//! Intelligent XP scoring engine.
//!
//! Turns a [`TaskXpContext`] into an XP award with a full, explainable
//! breakdown. The calculation is a pure function: deterministic for identical
//! input, total over the whole input domain, and free of I/O.
//!
//! The award combines a multiplicative core with additive bonuses:
//!
//! ```text
//! core_xp  = round(base * priority * duration * level * combo)
//! final_xp = max(floor, core_xp + sum(additive bonuses))
//! ```

use serde::{Deserialize, Serialize};

use crate::levels::combo_multiplier;
use crate::task::{Difficulty, Priority, TaskXpContext, TimeOfDay, WorkType};

/// Tuning constants for the XP calculator.
///
/// Injectable at construction time; `Default` carries the production values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XpTuning {
    /// Base XP for deep work
    pub deep_base: u32,
    /// Base XP for light work
    pub light_base: u32,
    /// Base XP for morning-routine work
    pub morning_base: u32,
    /// Cap for the complexity bonus
    pub complexity_cap: f64,
    /// Cap for the learning-value bonus
    pub learning_cap: f64,
    /// Cap for the strategic-importance bonus
    pub strategic_cap: f64,
    /// AI dimension score assumed when the caller supplies none (0-10)
    pub default_ai_score: u8,
    /// Cap for the logarithmic streak bonus
    pub streak_cap: u32,
    /// Scale factor for the logarithmic streak bonus
    pub streak_scale: f64,
    /// Flat bonus for morning work completed in the morning
    pub morning_alignment_bonus: u32,
    /// Flat bonus for weekend completions
    pub weekend_bonus: u32,
    /// Flat bonus for completions inside a focus session
    pub focus_session_bonus: u32,
    /// Per-level increment of the level multiplier
    pub level_step: f64,
    /// Flat bonus per active achievement
    pub achievement_bonus_per: u32,
    /// Minimum XP awarded for any completion
    pub xp_floor: u32,
}

impl Default for XpTuning {
    fn default() -> Self {
        Self {
            deep_base: 50,
            light_base: 25,
            morning_base: 35,
            complexity_cap: 25.0,
            learning_cap: 30.0,
            strategic_cap: 35.0,
            default_ai_score: 5,
            streak_cap: 25,
            streak_scale: 8.0,
            morning_alignment_bonus: 10,
            weekend_bonus: 5,
            focus_session_bonus: 5,
            level_step: 0.02,
            achievement_bonus_per: 5,
            xp_floor: 5,
        }
    }
}

impl XpTuning {
    /// Base XP for a work type.
    pub fn base_for(&self, work_type: WorkType) -> u32 {
        match work_type {
            WorkType::Deep => self.deep_base,
            WorkType::Light => self.light_base,
            WorkType::Morning => self.morning_base,
        }
    }

    /// Difficulty multiplier applied to the base XP.
    pub fn difficulty_multiplier(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Trivial => 0.7,
            Difficulty::Easy => 0.85,
            Difficulty::Medium => 1.0,
            Difficulty::Hard => 1.3,
            Difficulty::Expert => 1.6,
        }
    }

    /// Priority multiplier.
    pub fn priority_multiplier(&self, priority: Priority) -> f64 {
        match priority {
            Priority::Critical => 2.0,
            Priority::Urgent => 1.6,
            Priority::High => 1.3,
            Priority::Medium => 1.0,
            Priority::Low => 0.8,
        }
    }

    /// Step-function duration multiplier over minute buckets.
    ///
    /// Very long tasks drop back to 1.2 so padding an estimate past two hours
    /// never pays better than a focused 60-120 minute block.
    pub fn duration_multiplier(&self, estimated_minutes: Option<u32>) -> f64 {
        match estimated_minutes {
            None => 1.0,
            Some(m) if m <= 15 => 0.8,
            Some(m) if m <= 30 => 1.0,
            Some(m) if m <= 60 => 1.2,
            Some(m) if m <= 120 => 1.3,
            Some(_) => 1.2,
        }
    }

    /// Logarithmic streak bonus, capped.
    pub fn streak_bonus(&self, streak: u32) -> u32 {
        if streak == 0 {
            return 0;
        }
        let raw = (self.streak_scale * ((streak + 1) as f64).ln()).round() as u32;
        raw.min(self.streak_cap)
    }

    /// Stepped perfect-day bonus over tasks completed today.
    pub fn perfect_day_bonus(&self, tasks_completed_today: u32) -> u32 {
        match tasks_completed_today {
            t if t >= 10 => 25,
            t if t >= 7 => 15,
            t if t >= 5 => 10,
            _ => 0,
        }
    }

    /// Stepped consecutive-day bonus.
    pub fn consecutive_day_bonus(&self, consecutive_days: u32) -> u32 {
        match consecutive_days {
            d if d >= 7 => 20,
            d if d >= 3 => 10,
            _ => 0,
        }
    }

    /// Level multiplier: `1 + (level-1) * level_step`.
    pub fn level_multiplier(&self, level: u32) -> f64 {
        1.0 + (level.max(1) - 1) as f64 * self.level_step
    }

    fn ai_bonus(&self, score: Option<u8>, cap: f64) -> u32 {
        let score = score.unwrap_or(self.default_ai_score).min(10);
        ((score as f64 / 10.0) * cap).round() as u32
    }
}

/// Decomposed result of one XP calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XpCalculation {
    /// Base XP (work type base x difficulty multiplier, rounded)
    pub base_xp: u32,
    /// Priority multiplier applied to the core
    pub priority_multiplier: f64,
    /// Duration multiplier applied to the core
    pub duration_multiplier: f64,
    /// Level multiplier applied to the core
    pub level_multiplier: f64,
    /// Combo multiplier applied to the core
    pub combo_multiplier: f64,
    /// Additive bonus from AI-scored complexity
    pub complexity_bonus: u32,
    /// Additive bonus from AI-scored learning value
    pub learning_bonus: u32,
    /// Additive bonus from AI-scored strategic importance
    pub strategic_bonus: u32,
    /// Additive logarithmic streak bonus
    pub streak_bonus: u32,
    /// Additive perfect-day bonus
    pub perfect_day_bonus: u32,
    /// Additive consecutive-day bonus
    pub consecutive_day_bonus: u32,
    /// Flat morning-alignment bonus
    pub time_of_day_bonus: u32,
    /// Flat weekend bonus
    pub weekend_bonus: u32,
    /// Flat focus-session bonus
    pub focus_bonus: u32,
    /// Flat bonus from active achievements
    pub achievement_bonus: u32,
    /// Multiplicative core before additive bonuses
    pub core_xp: u32,
    /// Final XP award (floored)
    pub final_xp: u32,
    /// Ordered human-readable breakdown lines
    pub breakdown: Vec<String>,
    /// Confidence in the inputs (0-100)
    pub confidence: u8,
}

impl XpCalculation {
    /// Sum of all additive bonuses.
    pub fn additive_total(&self) -> u32 {
        self.complexity_bonus
            + self.learning_bonus
            + self.strategic_bonus
            + self.streak_bonus
            + self.perfect_day_bonus
            + self.consecutive_day_bonus
            + self.time_of_day_bonus
            + self.weekend_bonus
            + self.focus_bonus
            + self.achievement_bonus
    }
}

/// XP calculator over a fixed tuning.
#[derive(Debug, Clone, Default)]
pub struct XpCalculator {
    tuning: XpTuning,
}

impl XpCalculator {
    /// Create a calculator with custom tuning.
    pub fn new(tuning: XpTuning) -> Self {
        Self { tuning }
    }

    /// Access the tuning constants.
    pub fn tuning(&self) -> &XpTuning {
        &self.tuning
    }

    /// Calculate the XP award for one task completion.
    pub fn calculate(&self, ctx: &TaskXpContext) -> XpCalculation {
        let t = &self.tuning;
        let mut breakdown = Vec::new();

        let base_raw = t.base_for(ctx.work_type) as f64;
        let difficulty_mult = t.difficulty_multiplier(ctx.difficulty);
        let base_xp = (base_raw * difficulty_mult).round() as u32;
        breakdown.push(format!(
            "Base XP: {} ({:?} x {:?} {:.2})",
            base_xp, ctx.work_type, ctx.difficulty, difficulty_mult
        ));

        let priority_multiplier = t.priority_multiplier(ctx.priority);
        breakdown.push(format!(
            "Priority multiplier ({}): x{:.2}",
            ctx.priority.label(),
            priority_multiplier
        ));

        let duration_multiplier = t.duration_multiplier(ctx.estimated_minutes);
        if let Some(minutes) = ctx.estimated_minutes {
            breakdown.push(format!(
                "Duration multiplier ({} min): x{:.2}",
                minutes, duration_multiplier
            ));
        }

        let level_multiplier = t.level_multiplier(ctx.user_level);
        if ctx.user_level > 1 {
            breakdown.push(format!(
                "Level {} multiplier: x{:.2}",
                ctx.user_level, level_multiplier
            ));
        }

        let combo = if ctx.recent_completion {
            combo_multiplier(ctx.combo_count)
        } else {
            1.0
        };
        if combo > 1.0 {
            breakdown.push(format!(
                "Combo x{} multiplier: x{:.2}",
                ctx.combo_count, combo
            ));
        }

        let complexity_bonus = t.ai_bonus(ctx.complexity, t.complexity_cap);
        let learning_bonus = t.ai_bonus(ctx.learning_value, t.learning_cap);
        let strategic_bonus = t.ai_bonus(ctx.strategic_importance, t.strategic_cap);
        if complexity_bonus > 0 {
            breakdown.push(format!("Complexity bonus: +{}", complexity_bonus));
        }
        if learning_bonus > 0 {
            breakdown.push(format!("Learning bonus: +{}", learning_bonus));
        }
        if strategic_bonus > 0 {
            breakdown.push(format!("Strategic bonus: +{}", strategic_bonus));
        }

        let streak_bonus = t.streak_bonus(ctx.current_streak);
        if streak_bonus > 0 {
            breakdown.push(format!(
                "Streak bonus ({} days): +{}",
                ctx.current_streak, streak_bonus
            ));
        }

        let perfect_day_bonus = t.perfect_day_bonus(ctx.tasks_completed_today);
        if perfect_day_bonus > 0 {
            breakdown.push(format!(
                "Perfect-day bonus ({} tasks): +{}",
                ctx.tasks_completed_today, perfect_day_bonus
            ));
        }

        let consecutive_day_bonus = t.consecutive_day_bonus(ctx.consecutive_days);
        if consecutive_day_bonus > 0 {
            breakdown.push(format!(
                "Consecutive-day bonus ({} days): +{}",
                ctx.consecutive_days, consecutive_day_bonus
            ));
        }

        let time_of_day_bonus = if ctx.work_type == WorkType::Morning
            && ctx.time_of_day == TimeOfDay::Morning
        {
            t.morning_alignment_bonus
        } else {
            0
        };
        if time_of_day_bonus > 0 {
            breakdown.push(format!("Morning alignment bonus: +{}", time_of_day_bonus));
        }

        let weekend_bonus = if ctx.is_weekend { t.weekend_bonus } else { 0 };
        if weekend_bonus > 0 {
            breakdown.push(format!("Weekend bonus: +{}", weekend_bonus));
        }

        let focus_bonus = if ctx.in_focus_session {
            t.focus_session_bonus
        } else {
            0
        };
        if focus_bonus > 0 {
            breakdown.push(format!("Focus-session bonus: +{}", focus_bonus));
        }

        let achievement_bonus = t.achievement_bonus_per * ctx.active_achievements;
        if achievement_bonus > 0 {
            breakdown.push(format!(
                "Achievement bonus ({} active): +{}",
                ctx.active_achievements, achievement_bonus
            ));
        }

        let core_xp = (base_xp as f64
            * priority_multiplier
            * duration_multiplier
            * level_multiplier
            * combo)
            .round() as u32;

        let mut calculation = XpCalculation {
            base_xp,
            priority_multiplier,
            duration_multiplier,
            level_multiplier,
            combo_multiplier: combo,
            complexity_bonus,
            learning_bonus,
            strategic_bonus,
            streak_bonus,
            perfect_day_bonus,
            consecutive_day_bonus,
            time_of_day_bonus,
            weekend_bonus,
            focus_bonus,
            achievement_bonus,
            core_xp,
            final_xp: 0,
            breakdown,
            confidence: self.confidence(ctx),
        };
        calculation.final_xp = (core_xp + calculation.additive_total()).max(t.xp_floor);
        calculation
            .breakdown
            .push(format!("Final XP: {}", calculation.final_xp));
        calculation
    }

    /// Confidence score for a context: richer input yields higher confidence.
    fn confidence(&self, ctx: &TaskXpContext) -> u8 {
        let mut score = 50u32;
        if ctx.complexity.is_some() {
            score += 15;
        }
        if ctx.learning_value.is_some() {
            score += 15;
        }
        if ctx.strategic_importance.is_some() {
            score += 15;
        }
        if ctx.estimated_minutes.is_some() {
            score += 10;
        }
        if ctx.description.is_some() {
            score += 5;
        }
        score.min(100) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_snapshot_critical_deep_expert() {
        // Documented reference case: Critical priority, deep work, expert
        // difficulty, 90 minutes, no AI scores, no streaks, level 1.
        let ctx = TaskXpContext::new("Ship the release")
            .with_priority(Priority::Critical)
            .with_work_type(WorkType::Deep)
            .with_difficulty(Difficulty::Expert)
            .with_estimated_minutes(90);

        let calc = XpCalculator::default().calculate(&ctx);

        assert_eq!(calc.base_xp, 80);
        assert_eq!(calc.priority_multiplier, 2.0);
        assert_eq!(calc.duration_multiplier, 1.3);
        assert_eq!(calc.level_multiplier, 1.0);
        assert_eq!(calc.combo_multiplier, 1.0);
        assert_eq!(calc.core_xp, 208);
        assert_eq!(calc.complexity_bonus, 13);
        assert_eq!(calc.learning_bonus, 15);
        assert_eq!(calc.strategic_bonus, 18);
        assert_eq!(calc.final_xp, 254);
    }

    #[test]
    fn test_custom_floor_applies() {
        let calculator = XpCalculator::new(XpTuning {
            xp_floor: 500,
            ..XpTuning::default()
        });
        assert_eq!(calculator.tuning().xp_floor, 500);

        let ctx = TaskXpContext::new("Tiny chore")
            .with_priority(Priority::Low)
            .with_difficulty(Difficulty::Trivial)
            .with_estimated_minutes(10);
        let calc = calculator.calculate(&ctx);
        assert!(calc.core_xp + calc.additive_total() < 500);
        assert_eq!(calc.final_xp, 500);
    }

    #[test]
    fn test_duration_buckets() {
        let t = XpTuning::default();
        assert_eq!(t.duration_multiplier(Some(10)), 0.8);
        assert_eq!(t.duration_multiplier(Some(15)), 0.8);
        assert_eq!(t.duration_multiplier(Some(30)), 1.0);
        assert_eq!(t.duration_multiplier(Some(60)), 1.2);
        assert_eq!(t.duration_multiplier(Some(120)), 1.3);
        assert_eq!(t.duration_multiplier(Some(180)), 1.2);
        assert_eq!(t.duration_multiplier(None), 1.0);
    }

    #[test]
    fn test_streak_bonus_zero_and_cap() {
        let t = XpTuning::default();
        assert_eq!(t.streak_bonus(0), 0);
        assert!(t.streak_bonus(1) > 0);
        assert!(t.streak_bonus(7) > t.streak_bonus(1));
        assert_eq!(t.streak_bonus(100), 25);
        assert_eq!(t.streak_bonus(10_000), 25);
    }

    #[test]
    fn test_perfect_day_steps() {
        let t = XpTuning::default();
        assert_eq!(t.perfect_day_bonus(4), 0);
        assert_eq!(t.perfect_day_bonus(5), 10);
        assert_eq!(t.perfect_day_bonus(7), 15);
        assert_eq!(t.perfect_day_bonus(10), 25);
    }

    #[test]
    fn test_morning_alignment_bonus() {
        let ctx = TaskXpContext::new("Stretch")
            .with_work_type(WorkType::Morning)
            .with_time_of_day(TimeOfDay::Morning);
        let calc = XpCalculator::default().calculate(&ctx);
        assert_eq!(calc.time_of_day_bonus, 10);

        let ctx = ctx.with_time_of_day(TimeOfDay::Evening);
        let calc = XpCalculator::default().calculate(&ctx);
        assert_eq!(calc.time_of_day_bonus, 0);
    }

    #[test]
    fn test_combo_applies_only_on_recent_completion() {
        let base = TaskXpContext::new("x");
        let calc = XpCalculator::default().calculate(&base);
        assert_eq!(calc.combo_multiplier, 1.0);

        let combod = TaskXpContext::new("x").with_combo(3);
        let calc = XpCalculator::default().calculate(&combod);
        assert_eq!(calc.combo_multiplier, 1.25);
    }

    #[test]
    fn test_confidence_scoring() {
        let bare = TaskXpContext::new("x");
        assert_eq!(XpCalculator::default().calculate(&bare).confidence, 50);

        let rich = TaskXpContext::new("x")
            .with_description("details")
            .with_estimated_minutes(30)
            .with_ai_scores(5, 5, 5);
        assert_eq!(XpCalculator::default().calculate(&rich).confidence, 100);

        let partial = TaskXpContext::new("x").with_estimated_minutes(30);
        assert_eq!(XpCalculator::default().calculate(&partial).confidence, 60);
    }

    #[test]
    fn test_breakdown_ends_with_final() {
        let calc = XpCalculator::default().calculate(&TaskXpContext::new("x"));
        let last = calc.breakdown.last().unwrap();
        assert!(last.contains(&calc.final_xp.to_string()));
    }

    fn arb_context() -> impl Strategy<Value = TaskXpContext> {
        (
            prop_oneof![
                Just(Priority::Low),
                Just(Priority::Medium),
                Just(Priority::High),
                Just(Priority::Urgent),
                Just(Priority::Critical),
            ],
            prop_oneof![
                Just(WorkType::Deep),
                Just(WorkType::Light),
                Just(WorkType::Morning),
            ],
            prop_oneof![
                Just(Difficulty::Trivial),
                Just(Difficulty::Easy),
                Just(Difficulty::Medium),
                Just(Difficulty::Hard),
                Just(Difficulty::Expert),
            ],
            proptest::option::of(0u32..600),
            proptest::option::of(0u8..=10),
            0u32..400,
            0u32..30,
            1u32..100,
            0u32..20,
        )
            .prop_map(
                |(priority, work, difficulty, minutes, ai, streak, today, level, combo)| {
                    let mut ctx = TaskXpContext::new("prop task")
                        .with_priority(priority)
                        .with_work_type(work)
                        .with_difficulty(difficulty)
                        .with_user_level(level)
                        .with_streaks(streak, streak);
                    ctx.estimated_minutes = minutes;
                    ctx.complexity = ai;
                    ctx.tasks_completed_today = today;
                    if combo > 0 {
                        ctx = ctx.with_combo(combo);
                    }
                    ctx
                },
            )
    }

    proptest! {
        #[test]
        fn prop_final_xp_floor(ctx in arb_context()) {
            let calc = XpCalculator::default().calculate(&ctx);
            prop_assert!(calc.final_xp >= 5);
        }

        #[test]
        fn prop_final_is_core_plus_bonuses(ctx in arb_context()) {
            let calc = XpCalculator::default().calculate(&ctx);
            prop_assert_eq!(
                calc.final_xp,
                (calc.core_xp + calc.additive_total()).max(5)
            );
        }
    }
}
