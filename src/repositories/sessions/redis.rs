use super::{SESSION_TTL_SECS, SessionStore, make_session_id};
use crate::common::error::ServiceResult;
use crate::common::redis_pool::RedisPool;
use crate::entities::sessions::SessionLookup;
use crate::models::sessions::ComparisonPayload;
use async_trait::async_trait;
use redis::AsyncCommands;

fn make_key(id: &str) -> String {
    format!("maipk:sessions:{id}")
}

/// Session store on a shared redis instance, for multi-instance deployments.
/// Expiry is delegated to redis via `SET .. EX`; once a key is gone it cannot
/// be told apart from one that never existed, so stale lookups report
/// `NotFound` rather than `Expired`.
pub struct RedisSessionStore {
    pool: RedisPool,
}

impl RedisSessionStore {
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn put(&self, payload: ComparisonPayload) -> ServiceResult<String> {
        let mut redis = self.pool.get().await?;
        let id = make_session_id();
        let serialized = serde_json::to_string(&payload)?;
        let _: () = redis
            .set_ex(make_key(&id), serialized, SESSION_TTL_SECS)
            .await?;
        Ok(id)
    }

    async fn get(&self, id: &str) -> ServiceResult<SessionLookup> {
        let mut redis = self.pool.get().await?;
        let stored: Option<String> = redis.get(make_key(id)).await?;
        match stored {
            Some(serialized) => Ok(SessionLookup::Hit(serde_json::from_str(&serialized)?)),
            None => Ok(SessionLookup::NotFound),
        }
    }
}
