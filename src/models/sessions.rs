use crate::models::songs::Song;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The shareable comparison between two players on one chart. Created once by
/// the producer page, stored until the TTL elapses, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonPayload {
    pub music_id: i64,
    /// Difficulty tier (0 = Basic .. 4 = ReMaster).
    pub music_level: u8,
    #[serde(rename = "isDX")]
    pub is_dx: bool,
    pub user_id1_data: PlayerData,
    pub user_id2_data: PlayerData,
    /// Optional metadata snapshot supplied by the producer, saving the
    /// consumer an upstream fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub music_data: Option<Song>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerData {
    pub user_name: String,
    pub icon_id: i64,
    pub user_music_detail: PlayerMusicDetail,
}

/// Per-chart record of one player. The named fields are required; anything
/// else the producer sends along is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMusicDetail {
    /// Scaled integer achievement, e.g. 1009981 for 100.9981%.
    pub achievement: i64,
    /// Index into the rank image table (D .. SSS+).
    pub score_rank: u8,
    pub level: u8,
    pub play_count: i64,
    pub sync_status: u8,
    pub combo_status: u8,
    pub deluxscore_max: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct SessionActionArgs {
    pub action: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RetrieveSessionArgs {
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub code: u8,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct InvalidPayloadResponse {
    pub code: u8,
    pub message: &'static str,
    pub errors: Vec<FieldError>,
}

impl InvalidPayloadResponse {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self {
            code: 1,
            message: "invalid input",
            errors,
        }
    }
}
