//! Session store backed by the redb embedded database.
//!
//! Plain CRUD over caller-supplied session identifiers plus TTL-based
//! expiry housekeeping. No protocol or trust decisions happen here.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use redb::{Database, ReadableTable, ReadableTableMetadata, TableDefinition};
use std::path::PathBuf;
use tracing::warn;

use super::types::SessionRecord;

/// redb table for sessions (key: session id, value: MessagePack bytes).
const SESSIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("sessions");

/// Persistent session store with rolling expiry.
pub struct SessionStore {
    db: Database,
    default_expiry_secs: u64,
}

impl SessionStore {
    /// Open or create a session store at the given path.
    pub fn open(path: PathBuf, default_expiry_secs: u64) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {:?}", parent))?;
        }

        let db = Database::create(&path)
            .with_context(|| format!("failed to open session database: {:?}", path))?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SESSIONS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db,
            default_expiry_secs,
        })
    }

    /// Default expiry in seconds applied when the caller supplies none.
    pub fn default_expiry_secs(&self) -> u64 {
        self.default_expiry_secs
    }

    /// Create or update a session. `expires_at` rolls the expiry; the
    /// default TTL applies when absent.
    pub fn set(
        &self,
        id: &str,
        session: serde_json::Value,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<()> {
        let now = Utc::now();
        let record = SessionRecord {
            session,
            expires_at: expires_at.unwrap_or_else(|| now + self.default_expiry()),
            last_accessed: now,
        };
        self.persist(id, &record)
    }

    /// Get a live session's payload. An expired record is destroyed on
    /// read and reported as absent.
    pub fn get(&self, id: &str) -> Result<Option<serde_json::Value>> {
        match self.load(id)? {
            Some(mut record) => {
                if record.is_expired() {
                    self.destroy(id)?;
                    return Ok(None);
                }
                record.last_accessed = Utc::now();
                self.persist(id, &record)?;
                Ok(Some(record.session))
            }
            None => Ok(None),
        }
    }

    /// Roll a session's expiry without rewriting its payload. Returns
    /// whether the session existed.
    pub fn touch(&self, id: &str, expires_at: Option<DateTime<Utc>>) -> Result<bool> {
        match self.load(id)? {
            Some(mut record) => {
                let now = Utc::now();
                record.expires_at = expires_at.unwrap_or_else(|| now + self.default_expiry());
                record.last_accessed = now;
                self.persist(id, &record)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a single session. Returns whether it existed.
    pub fn destroy(&self, id: &str) -> Result<bool> {
        let write_txn = self.db.begin_write()?;
        let removed = {
            let mut table = write_txn.open_table(SESSIONS_TABLE)?;
            let existed = table.remove(id)?.is_some();
            existed
        };
        write_txn.commit()?;
        Ok(removed)
    }

    /// All live session payloads. Expired records found along the way are
    /// destroyed.
    pub fn all(&self) -> Result<Vec<serde_json::Value>> {
        let mut live = Vec::new();
        let mut stale = Vec::new();

        {
            let read_txn = self.db.begin_read()?;
            let table = read_txn.open_table(SESSIONS_TABLE)?;
            for entry in table.iter()? {
                let (key, value) = entry?;
                match rmp_serde::from_slice::<SessionRecord>(value.value()) {
                    Ok(record) if !record.is_expired() => live.push(record.session),
                    Ok(_) => stale.push(key.value().to_string()),
                    Err(e) => {
                        warn!(key = key.value(), error = %e, "undecodable session record, destroying");
                        stale.push(key.value().to_string());
                    }
                }
            }
        }

        for id in stale {
            self.destroy(&id)?;
        }

        Ok(live)
    }

    /// Number of live sessions.
    pub fn len(&self) -> Result<usize> {
        Ok(self.all()?.len())
    }

    /// Whether no live sessions remain.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Remove all sessions, live or expired.
    pub fn clear(&self) -> Result<()> {
        let ids: Vec<String> = {
            let read_txn = self.db.begin_read()?;
            let table = read_txn.open_table(SESSIONS_TABLE)?;
            table
                .iter()?
                .map(|entry| entry.map(|(key, _)| key.value().to_string()))
                .collect::<Result<_, redb::StorageError>>()?
        };

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSIONS_TABLE)?;
            for id in ids {
                table.remove(id.as_str())?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Evict expired and undecodable records. Returns the number evicted.
    pub fn evict_expired(&self) -> Result<usize> {
        let stale: Vec<String> = {
            let read_txn = self.db.begin_read()?;
            let table = read_txn.open_table(SESSIONS_TABLE)?;

            let mut ids = Vec::new();
            for entry in table.iter()? {
                let (key, value) = entry?;
                match rmp_serde::from_slice::<SessionRecord>(value.value()) {
                    Ok(record) if record.is_expired() => ids.push(key.value().to_string()),
                    Err(e) => {
                        warn!(key = key.value(), error = %e, "undecodable session record, destroying");
                        ids.push(key.value().to_string());
                    }
                    _ => {}
                }
            }
            ids
        };

        let evicted = stale.len();
        if evicted > 0 {
            let write_txn = self.db.begin_write()?;
            {
                let mut table = write_txn.open_table(SESSIONS_TABLE)?;
                for id in &stale {
                    table.remove(id.as_str())?;
                }
            }
            write_txn.commit()?;
        }

        Ok(evicted)
    }

    /// Total stored records including expired ones, for housekeeping
    /// logs.
    pub fn session_count(&self) -> Result<usize> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SESSIONS_TABLE)?;
        Ok(table.len()? as usize)
    }

    fn default_expiry(&self) -> Duration {
        Duration::seconds(self.default_expiry_secs as i64)
    }

    fn load(&self, id: &str) -> Result<Option<SessionRecord>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SESSIONS_TABLE)?;
        match table.get(id)? {
            Some(value) => {
                let record = rmp_serde::from_slice(value.value())
                    .context("failed to deserialize session record")?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    fn persist(&self, id: &str, record: &SessionRecord) -> Result<()> {
        let data = rmp_serde::to_vec(record).context("failed to serialize session record")?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSIONS_TABLE)?;
            table.insert(id, data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
