use crate::adapters::song_service;
use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult};
use crate::models::comparison::ComparisonView;
use crate::settings::AppSettings;
use crate::usecases::sessions;

/// Resolves a stored session into the render model for the comparison card.
/// The snapshot in the payload wins over an upstream fetch when present.
pub async fn fetch_view<C: Context>(ctx: &C, id: &str) -> ServiceResult<ComparisonView> {
    let payload = sessions::fetch_one(ctx, id).await?;
    let song = match &payload.music_data {
        Some(song) => song.clone(),
        None => song_service::fetch_by_id(payload.music_id).await?,
    };
    let chart = song
        .difficulty_for(payload.music_level, payload.is_dx)
        .ok_or(AppError::SongsDifficultyNotFound)?;
    let settings = AppSettings::get();
    Ok(ComparisonView::build(
        &payload,
        &song,
        chart,
        &settings.assets_base_url,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sessions::ComparisonPayload;
    use crate::repositories::sessions::{LocalSessionStore, SessionStore};
    use serde_json::{Value, json};
    use std::sync::{Arc, Once};

    struct TestContext {
        sessions: Arc<LocalSessionStore>,
    }

    impl TestContext {
        fn new() -> Self {
            Self {
                sessions: Arc::new(LocalSessionStore::new()),
            }
        }
    }

    impl Context for TestContext {
        fn sessions(&self) -> &dyn SessionStore {
            self.sessions.as_ref()
        }
    }

    // Settings load once per process. The song service target points at a
    // closed port so an unexpected upstream fetch fails instead of silently
    // reaching the real API.
    fn init_settings() {
        static INIT: Once = Once::new();
        INIT.call_once(|| unsafe {
            std::env::set_var("LOG_LEVEL", "info");
            std::env::set_var("APP_HOST", "127.0.0.1");
            std::env::set_var("APP_PORT", "0");
            std::env::set_var("SONG_SERVICE_BASE_URL", "http://127.0.0.1:9");
        });
    }

    fn snapshot_body(dx_tiers: &[u8]) -> Value {
        let charts: Vec<Value> = dx_tiers
            .iter()
            .map(|tier| {
                json!({
                    "type": "dx",
                    "difficulty": tier,
                    "level": "13",
                    "level_value": 13.2,
                    "note_designer": "someone",
                    "version": 21000,
                    "note": {
                        "total": 600, "tap": 400, "hold": 80,
                        "slide": 60, "touch": 40, "break": 20
                    }
                })
            })
            .collect();
        json!({
            "musicId": 834,
            "musicLevel": 3,
            "isDX": true,
            "userId1Data": {
                "userName": "ALICE",
                "iconId": 101,
                "userMusicDetail": {
                    "achievement": 1007500,
                    "scoreRank": 12,
                    "level": 3,
                    "playCount": 42,
                    "syncStatus": 2,
                    "comboStatus": 1,
                    "deluxscoreMax": 2880
                }
            },
            "userId2Data": {
                "userName": "BOB",
                "iconId": 202,
                "userMusicDetail": {
                    "achievement": 995000,
                    "scoreRank": 8,
                    "level": 3,
                    "playCount": 7,
                    "syncStatus": 0,
                    "comboStatus": 0,
                    "deluxscoreMax": 2500
                }
            },
            "musicData": {
                "id": 834,
                "title": "Valsqotch",
                "artist": "some artist",
                "genre": "genre",
                "bpm": 190,
                "map": "map",
                "version": 21000,
                "right": "right",
                "disabled": false,
                "difficulties": {
                    "standard": [],
                    "dx": charts
                }
            }
        })
    }

    async fn seed(ctx: &TestContext, body: Value) -> String {
        let payload: ComparisonPayload = serde_json::from_value(body).unwrap();
        ctx.sessions().put(payload).await.unwrap()
    }

    #[tokio::test]
    async fn snapshot_payload_resolves_without_upstream_fetch() {
        init_settings();
        let ctx = TestContext::new();
        let id = seed(&ctx, snapshot_body(&[0, 1, 2, 3, 4])).await;

        let view = fetch_view(&ctx, &id).await.unwrap();
        assert_eq!(view.title, "Valsqotch");
        assert_eq!(view.level_name, "Master");
        assert_eq!(view.border_color, "#9447D3");
        assert_eq!(view.level_value, 13.2);
        assert!(view.jacket_url.ends_with("/jacket/834.png"));
        assert_eq!(view.players[0].user_name, "ALICE");
        assert_eq!(view.players[1].user_name, "BOB");
    }

    #[tokio::test]
    async fn snapshot_missing_requested_tier_is_not_found_not_a_fault() {
        init_settings();
        let ctx = TestContext::new();
        // dx list stops at tier 2, the payload asks for tier 3
        let id = seed(&ctx, snapshot_body(&[0, 1, 2])).await;
        assert_eq!(
            fetch_view(&ctx, &id).await.unwrap_err(),
            AppError::SongsDifficultyNotFound
        );
    }

    #[tokio::test]
    async fn unknown_id_is_not_found_before_any_resolution() {
        init_settings();
        let ctx = TestContext::new();
        assert_eq!(
            fetch_view(&ctx, "neverissued").await.unwrap_err(),
            AppError::SessionsNotFound
        );
    }
}
