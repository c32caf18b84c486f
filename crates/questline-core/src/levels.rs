//! Level curve and combo multiplier tables.
//!
//! Levels follow a quadratic requirement curve: advancing out of level `n`
//! costs `base + (n-1)*linear + (n-1)^2*quadratic` XP. Combo multipliers are
//! a small lookup table with a capped linear tail.

use serde::{Deserialize, Serialize};

/// Combo multiplier table for combos 1 through 4.
const COMBO_TABLE: [f64; 4] = [1.0, 1.1, 1.25, 1.4];
/// Per-combo increment above the table, up to [`COMBO_CAP`].
const COMBO_STEP: f64 = 0.05;
/// Hard cap on the combo multiplier.
const COMBO_CAP: f64 = 1.5;

/// Level progress for a given XP total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    /// Current level (1-based)
    pub level: u32,
    /// XP earned within the current level
    pub xp_in_level: u64,
    /// XP required to reach the next level
    pub xp_for_next_level: u64,
}

/// Quadratic level-requirement curve.
///
/// Injectable so tests can run against tiny synthetic curves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LevelCurve {
    /// Flat XP cost of every level
    pub base: u64,
    /// Linear growth per level
    pub linear: u64,
    /// Quadratic growth per level
    pub quadratic: u64,
}

impl Default for LevelCurve {
    fn default() -> Self {
        Self {
            base: 100,
            linear: 200,
            quadratic: 50,
        }
    }
}

impl LevelCurve {
    /// XP required to advance out of `level` (1-based).
    pub fn requirement(&self, level: u32) -> u64 {
        let n = (level.max(1) - 1) as u64;
        self.base + n * self.linear + n * n * self.quadratic
    }

    /// Cumulative XP required to reach `level` from zero.
    pub fn cumulative(&self, level: u32) -> u64 {
        (1..level.max(1)).map(|l| self.requirement(l)).sum()
    }

    /// Compute level progress for an XP total.
    ///
    /// Iterates thresholds upward until `total_xp` falls short of the
    /// cumulative requirement. Landing exactly on a threshold yields that
    /// level with `xp_in_level = 0`.
    pub fn progress(&self, total_xp: u64) -> LevelProgress {
        let mut level = 1u32;
        let mut cumulative = 0u64;
        loop {
            let required = self.requirement(level);
            if total_xp >= cumulative + required {
                cumulative += required;
                level += 1;
            } else {
                return LevelProgress {
                    level,
                    xp_in_level: total_xp - cumulative,
                    xp_for_next_level: required,
                };
            }
        }
    }
}

/// Combo multiplier for the n-th completion inside the combo window.
///
/// Exact table values for 1-4, then a capped linear tail: the multiplier is
/// non-decreasing in `n` and never exceeds 1.5.
pub fn combo_multiplier(combo_count: u32) -> f64 {
    match combo_count {
        0 | 1 => COMBO_TABLE[0],
        2..=4 => COMBO_TABLE[(combo_count - 1) as usize],
        n => (COMBO_TABLE[3] + (n - 4) as f64 * COMBO_STEP).min(COMBO_CAP),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_requirement_curve() {
        let curve = LevelCurve::default();
        assert_eq!(curve.requirement(1), 100);
        assert_eq!(curve.requirement(2), 100 + 200 + 50);
        assert_eq!(curve.requirement(3), 100 + 400 + 200);
    }

    #[test]
    fn test_progress_at_zero() {
        let curve = LevelCurve::default();
        let p = curve.progress(0);
        assert_eq!(p.level, 1);
        assert_eq!(p.xp_in_level, 0);
        assert_eq!(p.xp_for_next_level, 100);
    }

    #[test]
    fn test_progress_exact_threshold() {
        let curve = LevelCurve::default();
        // Exactly enough for level 2
        let p = curve.progress(100);
        assert_eq!(p.level, 2);
        assert_eq!(p.xp_in_level, 0);
        assert_eq!(p.xp_for_next_level, 350);

        // Exactly enough for level 3
        let p = curve.progress(100 + 350);
        assert_eq!(p.level, 3);
        assert_eq!(p.xp_in_level, 0);
    }

    #[test]
    fn test_progress_mid_level() {
        let curve = LevelCurve::default();
        let p = curve.progress(150);
        assert_eq!(p.level, 2);
        assert_eq!(p.xp_in_level, 50);
    }

    #[test]
    fn test_cumulative_matches_progress() {
        let curve = LevelCurve::default();
        for level in 1..20 {
            let p = curve.progress(curve.cumulative(level));
            assert_eq!(p.level, level.max(1));
            assert_eq!(p.xp_in_level, 0);
        }
    }

    #[test]
    fn test_combo_multiplier_table() {
        assert_eq!(combo_multiplier(1), 1.0);
        assert_eq!(combo_multiplier(2), 1.1);
        assert_eq!(combo_multiplier(3), 1.25);
        assert_eq!(combo_multiplier(4), 1.4);
        assert!((combo_multiplier(5) - 1.45).abs() < 1e-9);
        assert_eq!(combo_multiplier(6), 1.5);
        assert_eq!(combo_multiplier(10), 1.5);
    }

    #[test]
    fn test_combo_multiplier_zero() {
        assert_eq!(combo_multiplier(0), 1.0);
    }

    proptest! {
        #[test]
        fn prop_level_monotone(a in 0u64..5_000_000, b in 0u64..5_000_000) {
            let curve = LevelCurve::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(curve.progress(lo).level <= curve.progress(hi).level);
        }

        #[test]
        fn prop_combo_non_decreasing_and_capped(n in 1u32..64) {
            prop_assert!(combo_multiplier(n) <= combo_multiplier(n + 1));
            prop_assert!(combo_multiplier(n) <= 1.5);
        }
    }
}
