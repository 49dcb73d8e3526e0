use crate::common::error::{AppError, ServiceResult};
use crate::models::songs::Song;
use crate::settings::AppSettings;
use reqwest::StatusCode;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::warn;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Failed to build http client")
});

fn make_url(music_id: i64) -> String {
    let settings = AppSettings::get();
    format!(
        "{}/api/v0/maimai/song/{music_id}",
        settings.song_service_base_url
    )
}

/// Fetches song metadata from the lxns API. Only called when the payload did
/// not carry a `musicData` snapshot; no caching, no retry.
pub async fn fetch_by_id(music_id: i64) -> ServiceResult<Song> {
    let url = make_url(music_id);
    let response = match CLIENT.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!(music_id, "song metadata fetch failed: {e}");
            return Err(AppError::SongsFetchFailed);
        }
    };
    match response.status() {
        StatusCode::NOT_FOUND => Err(AppError::SongsNotFound),
        _ => response.json().await.map_err(|e| {
            warn!(music_id, "song metadata decode failed: {e}");
            AppError::SongsFetchFailed
        }),
    }
}
