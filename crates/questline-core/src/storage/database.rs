//! SQLite-based stats persistence.
//!
//! The scoring engine itself never touches storage; this store is the
//! persistence layer the CLI uses around each [`GamificationEngine`] call:
//! load, process, save.
//!
//! [`GamificationEngine`]: crate::engine::GamificationEngine

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::data_dir;
use crate::error::{Result, StorageError};
use crate::stats::{UnlockedAchievement, UserGameStats};

/// SQLite store for one user's gamification state.
pub struct StatsDb {
    conn: Connection,
}

impl StatsDb {
    /// Open the database at `~/.config/questline/questline.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("questline.db");
        let conn = Connection::open(&path).map_err(|source| StorageError::OpenFailed {
            path,
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(StorageError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<()> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS stats (
                    id                    INTEGER PRIMARY KEY CHECK (id = 1),
                    total_xp              INTEGER NOT NULL DEFAULT 0,
                    level                 INTEGER NOT NULL DEFAULT 1,
                    current_streak        INTEGER NOT NULL DEFAULT 0,
                    longest_streak        INTEGER NOT NULL DEFAULT 0,
                    consecutive_days      INTEGER NOT NULL DEFAULT 0,
                    total_tasks_completed INTEGER NOT NULL DEFAULT 0,
                    tasks_completed_today INTEGER NOT NULL DEFAULT 0,
                    combo_count           INTEGER NOT NULL DEFAULT 0,
                    last_completion_at    TEXT
                );
                CREATE TABLE IF NOT EXISTS unlocked_achievements (
                    id          TEXT PRIMARY KEY,
                    unlocked_at TEXT NOT NULL
                );",
            )
            .map_err(|e| StorageError::MigrationFailed(e.to_string()))?;
        Ok(())
    }

    /// Load the stored stats, or fresh defaults when nothing is stored yet.
    pub fn load(&self) -> Result<UserGameStats> {
        let row = self
            .conn
            .query_row(
                "SELECT total_xp, level, current_streak, longest_streak,
                        consecutive_days, total_tasks_completed,
                        tasks_completed_today, combo_count, last_completion_at
                 FROM stats WHERE id = 1",
                [],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, i64>(1)?,
                        row.get::<_, i64>(2)?,
                        row.get::<_, i64>(3)?,
                        row.get::<_, i64>(4)?,
                        row.get::<_, i64>(5)?,
                        row.get::<_, i64>(6)?,
                        row.get::<_, i64>(7)?,
                        row.get::<_, Option<String>>(8)?,
                    ))
                },
            )
            .optional()
            .map_err(StorageError::from)?;

        let Some((
            total_xp,
            level,
            current_streak,
            longest_streak,
            consecutive_days,
            total_tasks_completed,
            tasks_completed_today,
            combo_count,
            last_completion_at,
        )) = row
        else {
            return Ok(UserGameStats::new());
        };

        let mut stats = UserGameStats {
            total_xp: total_xp as u64,
            level: level as u32,
            current_streak: current_streak as u32,
            longest_streak: longest_streak as u32,
            consecutive_days: consecutive_days as u32,
            total_tasks_completed: total_tasks_completed as u64,
            tasks_completed_today: tasks_completed_today as u32,
            combo_count: combo_count as u32,
            last_completion_at: last_completion_at.and_then(parse_timestamp),
            unlocked: Vec::new(),
        };

        let mut stmt = self
            .conn
            .prepare("SELECT id, unlocked_at FROM unlocked_achievements ORDER BY unlocked_at")
            .map_err(StorageError::from)?;
        let rows = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })
            .map_err(StorageError::from)?;
        for row in rows {
            let (id, unlocked_at) = row.map_err(StorageError::from)?;
            if let Some(unlocked_at) = parse_timestamp(unlocked_at) {
                stats.unlocked.push(UnlockedAchievement { id, unlocked_at });
            }
        }

        Ok(stats)
    }

    /// Persist the given stats, replacing whatever was stored before.
    pub fn save(&mut self, stats: &UserGameStats) -> Result<()> {
        let tx = self.conn.transaction().map_err(StorageError::from)?;
        tx.execute(
            "INSERT OR REPLACE INTO stats (
                id, total_xp, level, current_streak, longest_streak,
                consecutive_days, total_tasks_completed, tasks_completed_today,
                combo_count, last_completion_at
            ) VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                stats.total_xp as i64,
                stats.level as i64,
                stats.current_streak as i64,
                stats.longest_streak as i64,
                stats.consecutive_days as i64,
                stats.total_tasks_completed as i64,
                stats.tasks_completed_today as i64,
                stats.combo_count as i64,
                stats.last_completion_at.map(|t| t.to_rfc3339()),
            ],
        )
        .map_err(StorageError::from)?;

        tx.execute("DELETE FROM unlocked_achievements", [])
            .map_err(StorageError::from)?;
        for unlocked in &stats.unlocked {
            tx.execute(
                "INSERT INTO unlocked_achievements (id, unlocked_at) VALUES (?1, ?2)",
                params![unlocked.id, unlocked.unlocked_at.to_rfc3339()],
            )
            .map_err(StorageError::from)?;
        }

        tx.commit().map_err(StorageError::from)?;
        Ok(())
    }
}

fn parse_timestamp(raw: String) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}
