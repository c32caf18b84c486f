//! # Questline Core Library
//!
//! This library provides the core business logic for Questline, a gamified
//! task-completion tracker. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary over this library.
//!
//! ## Architecture
//!
//! - **XP Calculator**: A pure, deterministic scoring function that turns a
//!   task-completion context into an XP award with a full breakdown
//! - **Level Curve**: Quadratic level thresholds and combo multipliers
//! - **Achievements**: A fixed catalog of unlock rules evaluated against a
//!   stats snapshot
//! - **Engine**: Orchestrates XP award, level-up, achievement and combo
//!   bonuses for a single task completion
//! - **Storage**: SQLite-based stats persistence and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`XpCalculator`]: XP scoring with explainable breakdowns
//! - [`GamificationEngine`]: Task-completion orchestration
//! - [`ImportanceDetector`]: Keyword-based task importance heuristics
//! - [`StatsDb`]: Stats persistence
//! - [`Config`]: Application configuration management

pub mod achievements;
pub mod challenges;
pub mod engine;
pub mod error;
pub mod importance;
pub mod levels;
pub mod stats;
pub mod storage;
pub mod task;
pub mod xp;

pub use achievements::{Achievement, AchievementCatalog, AchievementProgress, Rarity, UnlockRule};
pub use challenges::{ChallengeGenerator, ChallengeKind, DailyChallenge};
pub use engine::{CompletionOutcome, GamificationEngine};
pub use error::{ConfigError, CoreError, StorageError};
pub use importance::{ImportanceDetector, ImportanceSignals, KeywordCatalog};
pub use levels::{LevelCurve, LevelProgress};
pub use stats::{UnlockedAchievement, UserGameStats};
pub use storage::{Config, StatsDb};
pub use task::{Difficulty, Priority, TaskXpContext, TimeOfDay, WorkType};
pub use xp::{XpCalculation, XpCalculator, XpTuning};
