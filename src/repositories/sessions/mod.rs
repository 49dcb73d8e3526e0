mod local;
mod redis;

pub use local::LocalSessionStore;
pub use redis::RedisSessionStore;

use crate::common::error::ServiceResult;
use crate::entities::sessions::SessionLookup;
use crate::models::sessions::ComparisonPayload;
use async_trait::async_trait;
use rand::Rng;
use rand::distr::Alphanumeric;

/// Sessions are gone 30 minutes after creation, on either backend.
pub const SESSION_TTL_SECS: u64 = 30 * 60;

const ID_RANDOM_LEN: usize = 12;

/// Transient storage bridging the producer POST and the consumer page load.
/// Each id is written exactly once; records expire, they are never updated.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores a validated payload under a fresh id and returns the id.
    /// A backing-store outage surfaces as an error, not a retry.
    async fn put(&self, payload: ComparisonPayload) -> ServiceResult<String>;

    /// Looks up a stored payload. See [`SessionLookup`] for how the two
    /// backends report records that are gone.
    async fn get(&self, id: &str) -> ServiceResult<SessionLookup>;
}

/// Random fragment plus a unix-millis fragment. Unguessable enough for a
/// short-lived share link; not an authorization token.
pub fn make_session_id() -> String {
    let random: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(ID_RANDOM_LEN)
        .map(char::from)
        .collect();
    let millis = chrono::Utc::now().timestamp_millis();
    format!("{}{millis:x}", random.to_lowercase())
}
