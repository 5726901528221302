//! Persistent session storage for the hosting middleware.
//!
//! CRUD over caller-supplied session identifiers with TTL-based expiry,
//! backed by an embedded redb database, plus a background housekeeping
//! task.

pub mod cleanup;
pub mod store;
pub mod types;

pub use cleanup::{spawn_cleanup_task, DEFAULT_CLEANUP_INTERVAL_SECS};
pub use store::SessionStore;
pub use types::{generate_session_id, SessionRecord, DEFAULT_EXPIRY_SECS};
