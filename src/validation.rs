use crate::models::sessions::{ComparisonPayload, FieldError};
use serde_json::{Map, Value};

const REQUIRED: &str = "Required";

const DETAIL_FIELDS: [&str; 7] = [
    "achievement",
    "scoreRank",
    "level",
    "playCount",
    "syncStatus",
    "comboStatus",
    "deluxscoreMax",
];

/// Validates a raw request body against the comparison-payload schema,
/// collecting every violation instead of stopping at the first. Unknown
/// fields inside `userMusicDetail` are accepted and carried through; the
/// named fields are required. Pure function of its input.
pub fn validate(raw: Value) -> Result<ComparisonPayload, Vec<FieldError>> {
    let mut errors = Vec::new();
    match raw.as_object() {
        Some(body) => check_body(body, &mut errors),
        None => push(&mut errors, String::new(), "Expected object"),
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    // Shape already checked, integer-ness included; this only fails on an
    // out-of-range ordinal, reported as one more violation.
    serde_json::from_value(raw).map_err(|e| {
        vec![FieldError {
            path: String::new(),
            message: e.to_string(),
        }]
    })
}

#[derive(Clone, Copy)]
enum Kind {
    /// Any JSON number; only the fractional chart constant uses this.
    Number,
    /// Whole JSON number. Scores, ordinals and counts are all integral, and
    /// checking here keeps the violation report pointed at the exact field.
    Integer,
    String,
    Bool,
    Object,
    Array,
}

impl Kind {
    const fn name(self) -> &'static str {
        match self {
            Kind::Number => "number",
            Kind::Integer => "integer",
            Kind::String => "string",
            Kind::Bool => "boolean",
            Kind::Object => "object",
            Kind::Array => "array",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            Kind::Number => value.is_number(),
            Kind::Integer => value.is_i64() || value.is_u64(),
            Kind::String => value.is_string(),
            Kind::Bool => value.is_boolean(),
            Kind::Object => value.is_object(),
            Kind::Array => value.is_array(),
        }
    }
}

fn push(errors: &mut Vec<FieldError>, path: String, message: impl Into<String>) {
    errors.push(FieldError {
        path,
        message: message.into(),
    });
}

fn join(prefix: &str, field: &str) -> String {
    match prefix.is_empty() {
        true => field.to_owned(),
        false => format!("{prefix}.{field}"),
    }
}

fn check_kind<'a>(
    value: &'a Value,
    path: &str,
    kind: Kind,
    errors: &mut Vec<FieldError>,
) -> Option<&'a Value> {
    match kind.matches(value) {
        true => Some(value),
        false => {
            push(errors, path.to_owned(), format!("Expected {}", kind.name()));
            None
        }
    }
}

fn require<'a>(
    obj: &'a Map<String, Value>,
    prefix: &str,
    field: &str,
    kind: Kind,
    errors: &mut Vec<FieldError>,
) -> Option<&'a Value> {
    let path = join(prefix, field);
    match obj.get(field) {
        Some(value) => check_kind(value, &path, kind, errors),
        None => {
            push(errors, path, REQUIRED);
            None
        }
    }
}

fn check_body(body: &Map<String, Value>, errors: &mut Vec<FieldError>) {
    require(body, "", "musicId", Kind::Integer, errors);
    require(body, "", "musicLevel", Kind::Integer, errors);
    require(body, "", "isDX", Kind::Bool, errors);
    for field in ["userId1Data", "userId2Data"] {
        if let Some(Value::Object(player)) = require(body, "", field, Kind::Object, errors) {
            check_player(player, field, errors);
        }
    }
    // musicData snapshot is optional, but fully checked when supplied
    if let Some(value) = body.get("musicData")
        && let Some(Value::Object(song)) = check_kind(value, "musicData", Kind::Object, errors)
    {
        check_song(song, "musicData", errors);
    }
}

fn check_player(player: &Map<String, Value>, prefix: &str, errors: &mut Vec<FieldError>) {
    require(player, prefix, "userName", Kind::String, errors);
    require(player, prefix, "iconId", Kind::Integer, errors);
    if let Some(Value::Object(detail)) =
        require(player, prefix, "userMusicDetail", Kind::Object, errors)
    {
        let detail_prefix = join(prefix, "userMusicDetail");
        for field in DETAIL_FIELDS {
            require(detail, &detail_prefix, field, Kind::Integer, errors);
        }
    }
}

fn check_song(song: &Map<String, Value>, prefix: &str, errors: &mut Vec<FieldError>) {
    require(song, prefix, "id", Kind::Integer, errors);
    for field in ["title", "artist", "genre", "map", "right"] {
        require(song, prefix, field, Kind::String, errors);
    }
    for field in ["bpm", "version"] {
        require(song, prefix, field, Kind::Integer, errors);
    }
    require(song, prefix, "disabled", Kind::Bool, errors);
    if let Some(Value::Object(difficulties)) =
        require(song, prefix, "difficulties", Kind::Object, errors)
    {
        let diff_prefix = join(prefix, "difficulties");
        for list in ["standard", "dx"] {
            if let Some(Value::Array(charts)) =
                require(difficulties, &diff_prefix, list, Kind::Array, errors)
            {
                check_charts(charts, &join(&diff_prefix, list), errors);
            }
        }
        if let Some(value) = difficulties.get("utage") {
            let path = join(&diff_prefix, "utage");
            if let Some(Value::Array(charts)) = check_kind(value, &path, Kind::Array, errors) {
                check_charts(charts, &path, errors);
            }
        }
    }
}

fn check_charts(charts: &[Value], prefix: &str, errors: &mut Vec<FieldError>) {
    for (index, chart) in charts.iter().enumerate() {
        let path = format!("{prefix}.{index}");
        if let Some(Value::Object(chart)) = check_kind(chart, &path, Kind::Object, errors) {
            check_chart(chart, &path, errors);
        }
    }
}

fn check_chart(chart: &Map<String, Value>, prefix: &str, errors: &mut Vec<FieldError>) {
    for field in ["type", "level", "note_designer"] {
        require(chart, prefix, field, Kind::String, errors);
    }
    for field in ["difficulty", "version"] {
        require(chart, prefix, field, Kind::Integer, errors);
    }
    require(chart, prefix, "level_value", Kind::Number, errors);
    if let Some(Value::Object(note)) = require(chart, prefix, "note", Kind::Object, errors) {
        let note_prefix = join(prefix, "note");
        for field in ["total", "tap", "hold", "slide", "touch", "break"] {
            require(note, &note_prefix, field, Kind::Integer, errors);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_body() -> Value {
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
            }
        })
    }

    #[test]
    fn accepts_valid_payload_without_snapshot() {
        let payload = validate(sample_body()).unwrap();
        assert_eq!(payload.music_id, 834);
        assert_eq!(payload.music_level, 3);
        assert!(payload.is_dx);
        assert!(payload.music_data.is_none());
        assert_eq!(payload.user_id1_data.user_name, "ALICE");
        assert_eq!(payload.user_id2_data.user_music_detail.deluxscore_max, 2500);
    }

    #[test]
    fn preserves_unknown_detail_fields() {
        let mut body = sample_body();
        body["userId1Data"]["userMusicDetail"]["dxRating"] = json!(12345);
        let payload = validate(body).unwrap();
        assert_eq!(
            payload.user_id1_data.user_music_detail.extra["dxRating"],
            json!(12345)
        );
        // and they survive re-serialization
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value["userId1Data"]["userMusicDetail"]["dxRating"],
            json!(12345)
        );
    }

    #[test]
    fn missing_achievement_is_reported_by_exact_path() {
        let mut body = sample_body();
        body["userId1Data"]["userMusicDetail"]
            .as_object_mut()
            .unwrap()
            .remove("achievement");
        let errors = validate(body).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "userId1Data.userMusicDetail.achievement");
        assert_eq!(errors[0].message, "Required");
    }

    #[test]
    fn collects_every_violation() {
        let mut body = sample_body();
        body["musicId"] = json!("834");
        body.as_object_mut().unwrap().remove("isDX");
        body["userId2Data"]["userName"] = json!(false);
        let errors = validate(body).unwrap_err();
        let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["musicId", "isDX", "userId2Data.userName"]);
        assert_eq!(errors[0].message, "Expected integer");
    }

    #[test]
    fn fractional_values_in_integral_fields_name_the_field() {
        let mut body = sample_body();
        body["musicId"] = json!(834.5);
        body["userId1Data"]["userMusicDetail"]["achievement"] = json!(100.75);
        let errors = validate(body).unwrap_err();
        let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["musicId", "userId1Data.userMusicDetail.achievement"]);
        assert!(errors.iter().all(|e| e.message == "Expected integer"));
    }

    #[test]
    fn checks_snapshot_charts_when_supplied() {
        let mut body = sample_body();
        body["musicData"] = json!({
            "id": 834,
            "title": "t",
            "artist": "a",
            "genre": "g",
            "bpm": 190,
            "map": "m",
            "version": 21000,
            "right": "r",
            "disabled": false,
            "difficulties": {
                "standard": [],
                "dx": [{
                    "type": "dx",
                    "difficulty": 3,
                    "level": "13",
                    "level_value": 13.2,
                    "note_designer": "someone",
                    "version": 21000,
                    "note": {
                        "total": 600, "tap": 400, "hold": 80,
                        "slide": 60, "touch": 40
                    }
                }]
            }
        });
        let errors = validate(body.clone()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "musicData.difficulties.dx.0.note.break");

        body["musicData"]["difficulties"]["dx"][0]["note"]["break"] = json!(20);
        let payload = validate(body).unwrap();
        let song = payload.music_data.unwrap();
        assert_eq!(song.difficulties.dx[0].note.break_count, 20);
        assert!(song.difficulties.utage.is_none());
    }

    #[test]
    fn non_object_body_is_rejected() {
        let errors = validate(json!([1, 2, 3])).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Expected object");
    }
}
