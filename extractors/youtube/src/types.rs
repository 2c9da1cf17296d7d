use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_aux::prelude::*;
use serde_json::Value;

/// Number given either as a JSON number or a string. Anything that does not
/// parse is `None` and leaves the field to the catalog.
fn deserialize_option_number_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s.trim().parse().ok(),
        Some(Value::Number(n)) => n.to_string().parse().ok(),
        _ => None,
    })
}

/// Format as observed in the player response, before any catalog defaults apply.
#[derive(Deserialize, PartialEq, Eq, Hash, Default, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Format {
    /// innertube format id
    pub itag: u16,
    /// url to download - not present when only a signature cipher is given
    pub url: Option<String>,
    /// mime type, contains the type (audio/video), container and used codecs
    pub mime_type: Option<String>,
    #[serde(deserialize_with = "deserialize_option_number_lenient")]
    #[serde(default)]
    pub bitrate: Option<u64>,
    /// kbps, only given by the legacy player config
    #[serde(deserialize_with = "deserialize_option_number_lenient")]
    #[serde(default)]
    pub audio_bitrate: Option<u32>,
    pub quality_label: Option<String>,
    /// file size in bytes
    #[serde(deserialize_with = "deserialize_option_number_lenient")]
    #[serde(default)]
    pub content_length: Option<u64>,
    /// video width
    pub width: Option<u32>,
    /// video height
    pub height: Option<u32>,
    /// frames per second
    pub fps: Option<u16>,
    pub quality: Option<String>,
    pub audio_quality: Option<String>,
    /// audio sample rate
    #[serde(deserialize_with = "deserialize_option_number_from_string")]
    #[serde(default)]
    pub audio_sample_rate: Option<u32>,
    pub audio_channels: Option<u8>,
}

#[derive(Deserialize, PartialEq, Eq, Hash, Default, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StreamingData {
    pub formats: Option<Vec<Format>>,
    pub adaptive_formats: Option<Vec<Format>>,
    pub hls_manifest_url: Option<String>,
    pub dash_manifest_url: Option<String>,
}

#[derive(Deserialize, PartialEq, Eq, Hash, Default, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlayabilityStatus {
    pub status: String,
    pub reason: Option<String>,
}

#[derive(Deserialize, PartialEq, Eq, Hash, Default, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    pub video_id: String,
    pub title: String,
    pub author: Option<String>,
    pub channel_id: Option<String>,
    #[serde(deserialize_with = "deserialize_option_number_from_string")]
    #[serde(default)]
    pub length_seconds: Option<u64>,
    #[serde(default)]
    pub is_live_content: bool,
}

#[derive(Deserialize, PartialEq, Eq, Hash, Default, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub playability_status: Option<PlayabilityStatus>,
    pub streaming_data: Option<StreamingData>,
    pub video_details: Option<VideoDetails>,
}

/// `ytplayer.config`, as embedded by the old watch pages.
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct LegacyPlayerConfig {
    pub args: LegacyPlayerArgs,
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct LegacyPlayerArgs {
    /// the player response, JSON-encoded once more
    pub player_response: Option<String>,
}
