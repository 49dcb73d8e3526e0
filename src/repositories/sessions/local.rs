use super::{SESSION_TTL_SECS, SessionStore, make_session_id};
use crate::common::error::ServiceResult;
use crate::entities::sessions::{SessionLookup, StoredSession};
use crate::models::sessions::ComparisonPayload;
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use hashbrown::HashMap;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::info;

const SWEEP_INTERVAL: Duration = Duration::from_secs(5 * 60);

type SessionMap = RwLock<HashMap<String, StoredSession>>;

/// In-process session store for single-instance deployments. State lives for
/// the lifetime of the process only. Records expire lazily: a periodic sweep
/// drops them in bulk, and reads self-check the window between sweeps so a
/// stale-but-unswept record still reports `Expired`.
pub struct LocalSessionStore {
    entries: Arc<SessionMap>,
}

impl LocalSessionStore {
    /// Creates the store and starts its sweep task. The task holds a weak
    /// handle and ends once the store is dropped; the store is built once at
    /// startup, so no further single-init guard is needed.
    pub fn new() -> Self {
        let entries = Arc::new(RwLock::new(HashMap::new()));
        tokio::spawn(run_sweeper(Arc::downgrade(&entries)));
        Self { entries }
    }
}

impl Default for LocalSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl LocalSessionStore {
    /// Seeds a record with a chosen creation time, for expiry tests.
    pub(crate) async fn insert_at(
        &self,
        id: &str,
        payload: ComparisonPayload,
        created_at: DateTime<Utc>,
    ) {
        let record = StoredSession {
            payload,
            created_at,
        };
        self.entries.write().await.insert(id.to_owned(), record);
    }
}

fn is_expired(record: &StoredSession, now: DateTime<Utc>) -> bool {
    now - record.created_at >= TimeDelta::seconds(SESSION_TTL_SECS as i64)
}

#[async_trait]
impl SessionStore for LocalSessionStore {
    async fn put(&self, payload: ComparisonPayload) -> ServiceResult<String> {
        let id = make_session_id();
        let record = StoredSession {
            payload,
            created_at: Utc::now(),
        };
        self.entries.write().await.insert(id.clone(), record);
        Ok(id)
    }

    async fn get(&self, id: &str) -> ServiceResult<SessionLookup> {
        let record = match self.entries.read().await.get(id) {
            Some(record) => record.clone(),
            None => return Ok(SessionLookup::NotFound),
        };
        if is_expired(&record, Utc::now()) {
            self.entries.write().await.remove(id);
            return Ok(SessionLookup::Expired);
        }
        Ok(SessionLookup::Hit(record.payload))
    }
}

async fn run_sweeper(entries: Weak<SessionMap>) {
    let mut ticker = tokio::time::interval(SWEEP_INTERVAL);
    ticker.tick().await;
    loop {
        ticker.tick().await;
        let Some(entries) = entries.upgrade() else {
            return;
        };
        let now = Utc::now();
        let mut entries = entries.write().await;
        let before = entries.len();
        entries.retain(|_, record| !is_expired(record, now));
        let swept = before - entries.len();
        if swept > 0 {
            info!(swept, remaining = entries.len(), "swept expired sessions");
        }
    }
}
