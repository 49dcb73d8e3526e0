use crate::common::env::{FromEnv, from_env_or};
use std::env;
use std::net::IpAddr;
use std::ops::Deref;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::Level;

const DEFAULT_SONG_SERVICE_BASE_URL: &str = "https://maimai.lxns.net";
const DEFAULT_ASSETS_BASE_URL: &str = "https://assets2.lxns.net/maimai";

pub struct AppSettings {
    pub level: Level,
    pub app_host: IpAddr,
    pub app_port: u16,

    /// Presence selects the shared redis session store; absence selects the
    /// in-process store (single-instance deployments only).
    pub redis_url: Option<String>,
    pub redis_max_connections: usize,
    pub redis_connection_timeout: Duration,
    pub redis_response_timeout: Duration,
    pub redis_wait_timeout: Duration,

    pub song_service_base_url: String,
    pub assets_base_url: String,
}

impl AppSettings {
    pub fn load_from_env() -> anyhow::Result<Self> {
        let _ = dotenv::dotenv();

        let level = Level::from_env("LOG_LEVEL")?;
        let app_host = IpAddr::from_env("APP_HOST")?;
        let app_port = u16::from_env("APP_PORT")?;

        let redis_url = env::var("REDIS_URL").ok();
        let redis_max_connections = from_env_or("REDIS_MAX_CONNECTIONS", 8)?;
        let redis_connection_timeout_secs = from_env_or("REDIS_CONNECTION_TIMEOUT_SECS", 5)?;
        let redis_connection_timeout = Duration::from_secs(redis_connection_timeout_secs);
        let redis_response_timeout_secs = from_env_or("REDIS_RESPONSE_TIMEOUT_SECS", 5)?;
        let redis_response_timeout = Duration::from_secs(redis_response_timeout_secs);
        let redis_wait_timeout_secs = from_env_or("REDIS_WAIT_TIMEOUT_SECS", 5)?;
        let redis_wait_timeout = Duration::from_secs(redis_wait_timeout_secs);

        let song_service_base_url =
            from_env_or("SONG_SERVICE_BASE_URL", DEFAULT_SONG_SERVICE_BASE_URL.to_owned())?;
        let assets_base_url = from_env_or("ASSETS_BASE_URL", DEFAULT_ASSETS_BASE_URL.to_owned())?;

        Ok(AppSettings {
            level,
            app_host,
            app_port,

            redis_url,
            redis_max_connections,
            redis_connection_timeout,
            redis_response_timeout,
            redis_wait_timeout,

            song_service_base_url,
            assets_base_url,
        })
    }

    pub fn get() -> &'static AppSettings {
        settings()
    }
}

pub fn settings() -> &'static AppSettings {
    static SETTINGS: LazyLock<AppSettings> =
        LazyLock::new(|| AppSettings::load_from_env().expect("Failed to load settings"));
    SETTINGS.deref()
}
