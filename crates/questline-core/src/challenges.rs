//! Daily challenge generation and progress tracking.
//!
//! One challenge is generated per day from a fixed template list. Progress
//! updates dispatch on [`ChallengeKind`] rather than challenge names, so
//! adding a template means adding a variant, not editing a string match.

use chrono::{DateTime, Duration, Utc};
use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

use crate::task::{TaskXpContext, TimeOfDay, WorkType};

/// How long a challenge stays active.
const CHALLENGE_LIFETIME_HOURS: i64 = 24;

/// The kind of activity a challenge counts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChallengeKind {
    /// Complete any tasks
    CompleteTasks,
    /// Complete deep work tasks
    DeepWorkSessions,
    /// Complete morning-routine tasks in the morning
    MorningTasks,
    /// Reach a combo count
    ReachCombo,
}

impl ChallengeKind {
    /// Whether a completed task counts toward this kind, and by how much.
    fn increment_for(&self, ctx: &TaskXpContext) -> u32 {
        match self {
            ChallengeKind::CompleteTasks => 1,
            ChallengeKind::DeepWorkSessions => u32::from(ctx.work_type == WorkType::Deep),
            ChallengeKind::MorningTasks => u32::from(
                ctx.work_type == WorkType::Morning && ctx.time_of_day == TimeOfDay::Morning,
            ),
            // Combo challenges track the running combo, not a count
            ChallengeKind::ReachCombo => 0,
        }
    }
}

/// A generated daily challenge.
///
/// Ephemeral by design: generated fresh each day and discarded at expiry,
/// never persisted by this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyChallenge {
    /// What the challenge counts
    pub kind: ChallengeKind,
    /// Display name
    pub name: String,
    /// Display description
    pub description: String,
    /// Target count
    pub target: u32,
    /// Current progress
    pub progress: u32,
    /// XP awarded on completion
    pub reward_xp: u32,
    /// When the challenge was issued
    pub issued_at: DateTime<Utc>,
    /// When the challenge expires
    pub expires_at: DateTime<Utc>,
    /// Whether the target has been reached
    pub completed: bool,
}

impl DailyChallenge {
    /// Whether the challenge is expired at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Completion percentage (0-100).
    pub fn percent(&self) -> u8 {
        if self.target == 0 {
            return 100;
        }
        ((self.progress.min(self.target) as u64 * 100) / self.target as u64) as u8
    }
}

struct ChallengeTemplate {
    kind: ChallengeKind,
    name: &'static str,
    description: &'static str,
    target: u32,
    reward_xp: u32,
}

const TEMPLATES: [ChallengeTemplate; 4] = [
    ChallengeTemplate {
        kind: ChallengeKind::CompleteTasks,
        name: "Task Crusher",
        description: "Complete 5 tasks today",
        target: 5,
        reward_xp: 50,
    },
    ChallengeTemplate {
        kind: ChallengeKind::DeepWorkSessions,
        name: "Deep Focus",
        description: "Complete 3 deep work tasks today",
        target: 3,
        reward_xp: 60,
    },
    ChallengeTemplate {
        kind: ChallengeKind::MorningTasks,
        name: "Morning Momentum",
        description: "Complete 2 morning tasks before noon",
        target: 2,
        reward_xp: 40,
    },
    ChallengeTemplate {
        kind: ChallengeKind::ReachCombo,
        name: "Chain Reaction",
        description: "Reach a 3x combo today",
        target: 3,
        reward_xp: 45,
    },
];

/// Daily challenge generator with an injectable random source.
pub struct ChallengeGenerator {
    rng: Mcg128Xsl64,
}

impl ChallengeGenerator {
    /// Generator seeded from entropy.
    pub fn new() -> Self {
        Self::with_seed(rand::thread_rng().gen())
    }

    /// Generator with a fixed seed, for deterministic selection.
    ///
    /// Seeding with a value derived from the calendar date gives every run
    /// on the same day the same challenge.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mcg128Xsl64::seed_from_u64(seed),
        }
    }

    /// Pick today's challenge uniformly from the template list.
    pub fn generate(&mut self, now: DateTime<Utc>) -> DailyChallenge {
        let template = &TEMPLATES[self.rng.gen_range(0..TEMPLATES.len())];
        DailyChallenge {
            kind: template.kind,
            name: template.name.to_string(),
            description: template.description.to_string(),
            target: template.target,
            progress: 0,
            reward_xp: template.reward_xp,
            issued_at: now,
            expires_at: now + Duration::hours(CHALLENGE_LIFETIME_HOURS),
            completed: false,
        }
    }
}

impl Default for ChallengeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Advance a challenge's progress for one completed task.
///
/// Expired or already-completed challenges never progress. Combo challenges
/// track the context's running combo count instead of incrementing.
pub fn update_progress(challenge: &mut DailyChallenge, ctx: &TaskXpContext, now: DateTime<Utc>) {
    if challenge.completed || challenge.is_expired(now) {
        return;
    }
    match challenge.kind {
        ChallengeKind::ReachCombo => {
            challenge.progress = challenge.progress.max(ctx.combo_count);
        }
        kind => {
            challenge.progress += kind.increment_for(ctx);
        }
    }
    if challenge.progress >= challenge.target {
        challenge.progress = challenge.target;
        challenge.completed = true;
    }
}
