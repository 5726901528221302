//! Session record types.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default session expiry: two weeks.
pub const DEFAULT_EXPIRY_SECS: u64 = 14 * 86_400;

/// Generate a random session identifier (16 random bytes, hex-encoded).
pub fn generate_session_id() -> String {
    hex::encode(rand::random::<[u8; 16]>())
}

/// A stored session document with its expiry bookkeeping.
///
/// The payload is an opaque JSON value owned by the hosting application;
/// this store only tracks when it lapses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Session payload.
    pub session: serde_json::Value,
    /// When the session lapses. Rolls forward on set/touch.
    pub expires_at: DateTime<Utc>,
    /// Last time the record was written, read, or touched.
    pub last_accessed: DateTime<Utc>,
}

impl SessionRecord {
    /// Create a record expiring `ttl_secs` from now.
    pub fn new(session: serde_json::Value, ttl_secs: u64) -> Self {
        let now = Utc::now();
        Self {
            session,
            expires_at: now + Duration::seconds(ttl_secs as i64),
            last_accessed: now,
        }
    }

    /// Whether the record has lapsed.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}
