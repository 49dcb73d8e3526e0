use serde::{Deserialize, Serialize};

/// Song metadata as served by the lxns API (and as snapshotted into payloads).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub bpm: i64,
    pub map: String,
    pub version: i64,
    pub right: String,
    pub disabled: bool,
    pub difficulties: SongDifficulties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongDifficulties {
    pub standard: Vec<SongDifficulty>,
    pub dx: Vec<SongDifficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utage: Option<Vec<SongDifficulty>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongDifficulty {
    #[serde(rename = "type")]
    pub kind: String,
    /// Difficulty tier this chart occupies within its list.
    pub difficulty: u8,
    /// Display label, e.g. "13+".
    pub level: String,
    /// Chart constant, e.g. 13.7.
    pub level_value: f64,
    pub note_designer: String,
    pub version: i64,
    pub note: NoteCounts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteCounts {
    pub total: i64,
    pub tap: i64,
    pub hold: i64,
    pub slide: i64,
    pub touch: i64,
    #[serde(rename = "break")]
    pub break_count: i64,
}

impl Song {
    /// First chart in the dx or standard list matching the requested tier.
    /// Tiers are expected unique within a list; a missing tier is a normal
    /// not-found outcome.
    pub fn difficulty_for(&self, music_level: u8, is_dx: bool) -> Option<&SongDifficulty> {
        let charts = match is_dx {
            true => &self.difficulties.dx,
            false => &self.difficulties.standard,
        };
        charts.iter().find(|chart| chart.difficulty == music_level)
    }
}
