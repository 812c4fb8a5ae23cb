use std::sync::Arc;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::player::artwork::ArtImage;

/// Playback state as reported by `/api/state`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    #[serde(default, deserialize_with = "truthy")]
    pub is_playing: bool,
    #[serde(default, deserialize_with = "song_record")]
    pub current_song: Option<CurrentSong>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrentSong {
    pub picture: Option<Value>,
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| is_truthy(&value))
}

/// Anything but an object is a song without a picture.
fn song_record<'de, D>(deserializer: D) -> Result<Option<CurrentSong>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(fields) => Some(CurrentSong {
            picture: fields.get("picture").filter(|v| !v.is_null()).cloned(),
        }),
        _ => None,
    })
}

impl PlaybackState {
    pub fn has_album_art(&self) -> bool {
        self.current_song
            .as_ref()
            .and_then(|song| song.picture.as_ref())
            .is_some_and(is_truthy)
    }
}

/// JSON truthiness: null, false, zero and the empty string are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlayLabel {
    #[default]
    Play,
    Pause,
}

impl PlayLabel {
    pub fn for_playing(is_playing: bool) -> Self {
        if is_playing { Self::Pause } else { Self::Play }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Play => "▶",
            Self::Pause => "⏸",
        }
    }
}

/// Art for the current song. `image` stays empty until the first fetch of
/// `url` lands.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumArt {
    pub url: String,
    pub image: Option<Arc<ArtImage>>,
}

/// Snapshot of what the UI shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerView {
    pub album_art: Option<AlbumArt>,
    pub label: PlayLabel,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> PlaybackState {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn decodes_camel_case_and_ignores_unknown_fields() {
        let state = parse(
            r#"{"isPlaying":true,"volume":40,"currentSong":{"title":"x","picture":true}}"#,
        );
        assert!(state.is_playing);
        assert!(state.has_album_art());
    }

    #[test]
    fn missing_fields_default() {
        let state = parse("{}");
        assert!(!state.is_playing);
        assert!(state.current_song.is_none());
        assert!(!state.has_album_art());
    }

    #[test]
    fn picture_presence_follows_truthiness() {
        for falsy in ["null", "false", "0", "\"\""] {
            let body = format!(r#"{{"isPlaying":false,"currentSong":{{"picture":{falsy}}}}}"#);
            assert!(!parse(&body).has_album_art(), "{falsy} should be falsy");
        }
        for truthy in ["true", "1", "\"cover.jpg\"", "[]", "{}"] {
            let body = format!(r#"{{"isPlaying":false,"currentSong":{{"picture":{truthy}}}}}"#);
            assert!(parse(&body).has_album_art(), "{truthy} should be truthy");
        }
    }

    #[test]
    fn song_without_picture_has_no_art() {
        assert!(!parse(r#"{"currentSong":{}}"#).has_album_art());
        assert!(!parse(r#"{"currentSong":null}"#).has_album_art());
    }

    #[test]
    fn null_is_playing_decodes_as_not_playing() {
        let state = parse(r#"{"isPlaying":null,"currentSong":{"picture":true}}"#);
        assert!(!state.is_playing);
        assert!(state.has_album_art());
    }

    #[test]
    fn is_playing_follows_truthiness() {
        assert!(parse(r#"{"isPlaying":1}"#).is_playing);
        assert!(parse(r#"{"isPlaying":"yes"}"#).is_playing);
        assert!(!parse(r#"{"isPlaying":0}"#).is_playing);
        assert!(!parse(r#"{"isPlaying":""}"#).is_playing);
    }

    #[test]
    fn non_object_song_has_no_picture() {
        let state = parse(r#"{"isPlaying":true,"currentSong":"none"}"#);
        assert!(state.is_playing);
        assert!(state.current_song.is_none());
        assert!(!state.has_album_art());

        assert!(!parse(r#"{"currentSong":[{"picture":true}]}"#).has_album_art());
        assert!(!parse(r#"{"currentSong":7}"#).has_album_art());
    }

    #[test]
    fn label_glyphs() {
        assert_eq!(PlayLabel::for_playing(false).glyph(), "▶");
        assert_eq!(PlayLabel::for_playing(true).glyph(), "⏸");
        assert_eq!(PlayerView::default().label, PlayLabel::Play);
    }
}
