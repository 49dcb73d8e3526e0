use crate::models::sessions::{ComparisonPayload, PlayerData};
use crate::models::songs::{NoteCounts, Song, SongDifficulty};
use serde::{Deserialize, Serialize};

/// Jacket border colors per difficulty tier (Basic .. ReMaster). Out-of-range
/// tiers fall back to the Basic color, matching the page.
pub const BORDER_COLORS: [&str; 5] = ["#36A31C", "#E7C960", "#F36470", "#9447D3", "#E7C6FD"];

pub const LEVEL_NAMES: [&str; 5] = ["Basic", "Advanced", "Expert", "Master", "ReMaster"];

/// Rank badge assets indexed by `scoreRank` (D .. SSS+).
pub const SCORE_RANK_IMAGES: [&str; 14] = [
    "/sdgb/UI/UI_TTR_Rank_D.png",
    "/sdgb/UI/UI_TTR_Rank_C.png",
    "/sdgb/UI/UI_TTR_Rank_B.png",
    "/sdgb/UI/UI_TTR_Rank_BB.png",
    "/sdgb/UI/UI_TTR_Rank_BBB.png",
    "/sdgb/UI/UI_TTR_Rank_A.png",
    "/sdgb/UI/UI_TTR_Rank_AA.png",
    "/sdgb/UI/UI_TTR_Rank_AAA.png",
    "/sdgb/UI/UI_TTR_Rank_S.png",
    "/sdgb/UI/UI_TTR_Rank_Sp.png",
    "/sdgb/UI/UI_TTR_Rank_SS.png",
    "/sdgb/UI/UI_TTR_Rank_SSp.png",
    "/sdgb/UI/UI_TTR_Rank_SSS.png",
    "/sdgb/UI/UI_TTR_Rank_SSSp.png",
];

pub fn border_color(tier: u8) -> &'static str {
    BORDER_COLORS
        .get(tier as usize)
        .copied()
        .unwrap_or(BORDER_COLORS[0])
}

pub fn level_name(tier: u8) -> &'static str {
    LEVEL_NAMES.get(tier as usize).copied().unwrap_or("Unknown")
}

#[derive(Debug, Deserialize)]
pub struct ComparisonViewArgs {
    pub id: String,
}

/// Everything the comparison card needs, resolved server-side: song block in
/// the middle, one player block per side.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonView {
    pub music_id: i64,
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub bpm: i64,
    pub version: i64,
    pub jacket_url: String,
    pub border_color: &'static str,
    pub level_name: &'static str,
    pub level: String,
    pub level_value: f64,
    pub note_designer: String,
    pub notes: NoteCounts,
    pub players: [PlayerView; 2],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub user_name: String,
    pub icon_url: String,
    /// None when `scoreRank` falls outside the badge table.
    pub rank_image: Option<&'static str>,
    pub achievement: i64,
    pub level: u8,
    pub play_count: i64,
    pub sync_status: u8,
    pub combo_status: u8,
    pub deluxscore_max: i64,
}

impl ComparisonView {
    pub fn build(
        payload: &ComparisonPayload,
        song: &Song,
        chart: &SongDifficulty,
        assets_base_url: &str,
    ) -> Self {
        Self {
            music_id: payload.music_id,
            title: song.title.clone(),
            artist: song.artist.clone(),
            genre: song.genre.clone(),
            bpm: song.bpm,
            version: song.version,
            jacket_url: format!("{assets_base_url}/jacket/{}.png", payload.music_id),
            border_color: border_color(payload.music_level),
            level_name: level_name(payload.music_level),
            level: chart.level.clone(),
            level_value: chart.level_value,
            note_designer: chart.note_designer.clone(),
            notes: chart.note.clone(),
            players: [
                PlayerView::from_player(&payload.user_id1_data, assets_base_url),
                PlayerView::from_player(&payload.user_id2_data, assets_base_url),
            ],
        }
    }
}

impl PlayerView {
    fn from_player(player: &PlayerData, assets_base_url: &str) -> Self {
        let detail = &player.user_music_detail;
        Self {
            user_name: player.user_name.clone(),
            icon_url: format!("{assets_base_url}/icon/{}.png", player.icon_id),
            rank_image: SCORE_RANK_IMAGES.get(detail.score_rank as usize).copied(),
            achievement: detail.achievement,
            level: detail.level,
            play_count: detail.play_count,
            sync_status: detail.sync_status,
            combo_status: detail.combo_status,
            deluxscore_max: detail.deluxscore_max,
        }
    }
}
