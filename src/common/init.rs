use crate::common::redis_pool::{RedisPool, RedisPoolManager};
use crate::common::state::AppState;
use crate::repositories::sessions::{LocalSessionStore, RedisSessionStore, SessionStore};
use crate::settings::AppSettings;
use deadpool::Runtime;
use redis::{AsyncConnectionConfig, Commands};
use std::sync::Arc;
use tracing::info;

pub fn initialize_logging(settings: &AppSettings) {
    tracing_subscriber::fmt()
        .with_max_level(settings.level)
        .with_timer(tracing_subscriber::fmt::time())
        .with_level(true)
        .compact()
        .init();
}

pub fn initialize_state(settings: &AppSettings) -> anyhow::Result<AppState> {
    let sessions: Arc<dyn SessionStore> = match settings.redis_url.as_deref() {
        Some(redis_url) => {
            let redis = initialize_redis(settings, redis_url)?;
            info!("using shared redis session store");
            Arc::new(RedisSessionStore::new(redis))
        }
        None => {
            info!("REDIS_URL not set, using in-process session store");
            Arc::new(LocalSessionStore::new())
        }
    };
    Ok(AppState { sessions })
}

pub fn initialize_redis(settings: &AppSettings, redis_url: &str) -> anyhow::Result<RedisPool> {
    let redis_client = redis::Client::open(redis_url)?;
    let mut conn = redis_client.get_connection_with_timeout(settings.redis_wait_timeout)?;
    let _: () = conn.ping()?;
    let redis_cfg = AsyncConnectionConfig::new()
        .set_connection_timeout(settings.redis_connection_timeout)
        .set_response_timeout(settings.redis_response_timeout);

    let redis_manager = RedisPoolManager::new(redis_client, redis_cfg);
    let redis = RedisPool::builder(redis_manager)
        .max_size(settings.redis_max_connections)
        .wait_timeout(Some(settings.redis_wait_timeout))
        .runtime(Runtime::Tokio1)
        .build()?;
    Ok(redis)
}
