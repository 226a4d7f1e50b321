use crate::config::TranscriptConfig;
use crate::engine::{Intent, Resolution};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One recorded turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub id: i64,
    pub utterance: String,
    pub reply: String,
    pub intent: Intent,
    pub timestamp: DateTime<Utc>,
}

// ── SQLite store ────────────────────────────────────────────────

pub struct TranscriptStore {
    conn: Mutex<Connection>,
    max_entries: usize,
}

impl TranscriptStore {
    /// Open (or create) the transcript database configured in `config`.
    pub fn open(config: &TranscriptConfig) -> Result<Self> {
        Self::open_at(&config.db_path, config.max_entries)
    }

    pub fn open_at(db_path: &Path, max_entries: usize) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create transcript dir: {}", parent.display()))?;
        }

        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open transcript DB: {}", db_path.display()))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;",
        )?;

        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
            max_entries,
        })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS transcript (
                id        INTEGER PRIMARY KEY AUTOINCREMENT,
                utterance TEXT NOT NULL,
                reply     TEXT NOT NULL,
                intent    TEXT NOT NULL,
                timestamp TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Record one turn.
    pub fn append(&self, utterance: &str, resolution: &Resolution) -> Result<i64> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO transcript (utterance, reply, intent, timestamp)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                utterance,
                resolution.reply,
                resolution.intent.as_str(),
                Utc::now().to_rfc3339(),
            ],
        )
        .context("Failed to append transcript entry")?;
        let id = conn.last_insert_rowid();

        self.prune_if_needed(&conn)?;
        Ok(id)
    }

    /// Up to `limit` entries, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<TranscriptEntry>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT id, utterance, reply, intent, timestamp
             FROM transcript ORDER BY id DESC LIMIT ?1",
        )?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = stmt.query_map(params![limit], |row| {
            Ok(TranscriptEntry {
                id: row.get(0)?,
                utterance: row.get(1)?,
                reply: row.get(2)?,
                intent: Intent::from_str_lossy(&row.get::<_, String>(3)?),
                timestamp: row
                    .get::<_, String>(4)
                    .ok()
                    .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
                    .map(|dt| dt.with_timezone(&Utc))
                    .unwrap_or_else(Utc::now),
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    pub fn count(&self) -> Result<usize> {
        let conn = self.conn.lock();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM transcript", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// Delete every entry. Returns how many were removed.
    pub fn clear(&self) -> Result<usize> {
        let conn = self.conn.lock();
        let removed = conn.execute("DELETE FROM transcript", [])?;
        Ok(removed)
    }

    fn prune_if_needed(&self, conn: &Connection) -> Result<()> {
        if self.max_entries == 0 {
            return Ok(());
        }

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM transcript", [], |row| row.get(0))?;
        let max_entries = i64::try_from(self.max_entries).unwrap_or(i64::MAX);
        if count > max_entries {
            let excess = count - max_entries;
            conn.execute(
                "DELETE FROM transcript WHERE id IN (
                    SELECT id FROM transcript ORDER BY id ASC LIMIT ?1
                )",
                params![excess],
            )?;
            tracing::debug!(excess, "Pruned transcript");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store(tmp: &TempDir, max_entries: usize) -> TranscriptStore {
        TranscriptStore::open_at(&tmp.path().join("transcript.db"), max_entries).unwrap()
    }

    fn resolution(intent: Intent, reply: &str) -> Resolution {
        Resolution {
            intent,
            reply: reply.into(),
        }
    }

    #[test]
    fn append_and_read_back_newest_first() {
        let tmp = TempDir::new().unwrap();
        let store = test_store(&tmp, 0);

        store
            .append("hello", &resolution(Intent::Greeting, "Hello!"))
            .unwrap();
        store
            .append("I love my dog", &resolution(Intent::NounTopic, "dog?"))
            .unwrap();

        let entries = store.recent(10).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].utterance, "I love my dog");
        assert_eq!(entries[0].intent, Intent::NounTopic);
        assert_eq!(entries[1].utterance, "hello");
        assert_eq!(entries[1].reply, "Hello!");
        assert!(entries[0].id > entries[1].id);
    }

    #[test]
    fn recent_respects_limit() {
        let tmp = TempDir::new().unwrap();
        let store = test_store(&tmp, 0);
        for i in 0..5 {
            store
                .append(&format!("turn {i}"), &resolution(Intent::Unknown, "?"))
                .unwrap();
        }

        let entries = store.recent(2).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].utterance, "turn 4");
        assert_eq!(store.count().unwrap(), 5);
    }

    #[test]
    fn prune_keeps_newest() {
        let tmp = TempDir::new().unwrap();
        let store = test_store(&tmp, 3);
        for i in 0..5 {
            store
                .append(&format!("turn {i}"), &resolution(Intent::Unknown, "?"))
                .unwrap();
        }

        assert_eq!(store.count().unwrap(), 3);
        let oldest = store.recent(10).unwrap().pop().unwrap();
        assert_eq!(oldest.utterance, "turn 2");
    }

    #[test]
    fn clear_removes_everything() {
        let tmp = TempDir::new().unwrap();
        let store = test_store(&tmp, 0);
        store
            .append("bye", &resolution(Intent::Farewell, "Goodbye!"))
            .unwrap();

        assert_eq!(store.clear().unwrap(), 1);
        assert_eq!(store.count().unwrap(), 0);
        assert!(store.recent(10).unwrap().is_empty());
    }

    #[test]
    fn entries_survive_reopen() {
        let tmp = TempDir::new().unwrap();
        {
            let store = test_store(&tmp, 0);
            store
                .append("hi", &resolution(Intent::Greeting, "Hello!"))
                .unwrap();
        }
        let store = test_store(&tmp, 0);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn open_creates_missing_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let config = TranscriptConfig {
            enabled: true,
            db_path: tmp.path().join("nested/dir/transcript.db"),
            max_entries: 10,
        };
        let store = TranscriptStore::open(&config).unwrap();
        assert_eq!(store.count().unwrap(), 0);
        assert!(config.db_path.exists());
    }
}
