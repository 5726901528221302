//! Background session expiry housekeeping.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, info, warn};

use super::store::SessionStore;

/// Default housekeeping interval in seconds.
pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 300;

/// Spawn a background task that periodically evicts expired sessions.
///
/// Returns the `JoinHandle`; aborting it stops the housekeeping.
pub fn spawn_cleanup_task(
    store: Arc<SessionStore>,
    cleanup_interval_secs: u64,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(cleanup_interval_secs));

        // skip the immediate first tick
        ticker.tick().await;

        loop {
            ticker.tick().await;

            match store.evict_expired() {
                Ok(0) => debug!("session housekeeping: nothing to evict"),
                Ok(count) => info!(evicted = count, "session housekeeping completed"),
                Err(e) => warn!(error = %e, "session housekeeping failed"),
            }

            match store.session_count() {
                Ok(count) => debug!(stored_sessions = count, "session store status"),
                Err(e) => debug!(error = %e, "failed to count stored sessions"),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_cleanup_task_evicts_expired_only() {
        let dir = tempdir().unwrap();
        let store = Arc::new(SessionStore::open(dir.path().join("sessions.redb"), 3600).unwrap());

        store.set("sid-live", json!({"v": 1}), None).unwrap();
        let past = Utc::now() - chrono::Duration::seconds(10);
        store.set("sid-old", json!({"v": 2}), Some(past)).unwrap();
        assert_eq!(store.session_count().unwrap(), 2);

        let handle = spawn_cleanup_task(Arc::clone(&store), 1);
        tokio::time::sleep(Duration::from_secs(2)).await;
        handle.abort();

        assert_eq!(store.session_count().unwrap(), 1);
        assert!(store.get("sid-live").unwrap().is_some());
    }
}
