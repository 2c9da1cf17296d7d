mod catalog;

pub use catalog::{CatalogEntry, FormatCatalog, StaticCatalog};

use serde::Serialize;

/// One renditable media stream, after being merged with the catalog defaults.
///
/// Built once per observed format and never changed afterwards,
/// pickers only reorder and borrow these.
#[derive(Serialize, Default, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MediaFormat {
    /// innertube format id
    pub itag: u16,
    /// mime type, contains the type (audio/video), container and used codecs
    pub mime_type: Option<String>,
    /// subtype of the mime type, like "mp4" or "webm"
    pub container: Option<String>,
    /// contents of the `codecs` mime parameter, empty if not given
    pub codecs: String,
    /// bits per second, 0 if unknown
    pub bitrate: u64,
    /// kbps, only present on formats carrying audio
    pub audio_bitrate: Option<u32>,
    /// "720p", "1080p60" etc., only present on formats carrying video
    pub quality_label: Option<String>,
    /// url to download, empty if the service only gave a signature cipher
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fps: Option<u16>,
    /// file size in bytes
    pub content_length: Option<u64>,
    pub audio_channels: Option<u8>,
    pub audio_sample_rate: Option<u32>,
    /// service-specific quality name ("hd720", "tiny")
    pub quality: Option<String>,
    /// service-specific audio quality name ("AUDIO_QUALITY_MEDIUM")
    pub audio_quality: Option<String>,
    pub is_live: bool,
    pub is_hls: bool,
    pub is_dash_mpd: bool,
}

impl MediaFormat {
    pub fn has_video(&self) -> bool {
        self.quality_label
            .as_deref()
            .map_or(false, |label| !label.is_empty())
    }

    pub fn has_audio(&self) -> bool {
        self.audio_bitrate.is_some()
    }

    /// Vertical resolution, as the leading number of the quality label.
    /// 0 if there is no label or it does not start with a number.
    pub fn resolution(&self) -> u32 {
        self.quality_label
            .as_deref()
            .map(|label| {
                let digits = label
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(label.len());
                label[..digits].parse().unwrap_or(0)
            })
            .unwrap_or(0)
    }
}
