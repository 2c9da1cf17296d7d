use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;
use ytfmt_extractor_api::{FormatCatalog, MediaFormat};

use super::common::between;
use super::types::Format;

static LIVE_URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/source/yt_live_broadcast/").unwrap());
static HLS_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/manifest/hls_(variant|playlist)/").unwrap());
static DASH_URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/manifest/dash/").unwrap());

/// `video/webm; codecs="vp9"` -> `webm`
fn container_of(mime_type: &str) -> Option<String> {
    mime_type
        .split(';')
        .next()
        .and_then(|essence| essence.split('/').nth(1))
        .map(|subtype| subtype.trim().to_string())
}

/// Merges the observed format with what the catalog knows about its itag.
/// Whatever the observation carries wins over the catalog.
pub fn enrich<C>(observed: &Format, catalog: &C) -> MediaFormat
where
    C: FormatCatalog + ?Sized,
{
    let known = catalog.lookup(observed.itag);
    if known.is_none() {
        trace!(itag = observed.itag, "itag not in catalog");
    }

    let mime_type = observed
        .mime_type
        .clone()
        .or_else(|| known.and_then(|k| k.mime_type.clone()));
    let url = observed.url.clone().unwrap_or_default();

    MediaFormat {
        itag: observed.itag,
        container: mime_type.as_deref().and_then(container_of),
        codecs: mime_type
            .as_deref()
            .map(|m| between(m, r#"codecs=""#, r#"""#).to_string())
            .unwrap_or_default(),
        mime_type,
        bitrate: observed
            .bitrate
            .or_else(|| known.and_then(|k| k.bitrate))
            .unwrap_or(0),
        audio_bitrate: observed
            .audio_bitrate
            .or_else(|| known.and_then(|k| k.audio_bitrate)),
        quality_label: observed
            .quality_label
            .clone()
            .or_else(|| known.and_then(|k| k.quality_label.clone())),
        width: observed.width,
        height: observed.height,
        fps: observed.fps,
        content_length: observed.content_length,
        audio_channels: observed.audio_channels,
        audio_sample_rate: observed.audio_sample_rate,
        quality: observed.quality.clone(),
        audio_quality: observed.audio_quality.clone(),
        is_live: LIVE_URL_RE.is_match(&url),
        is_hls: HLS_URL_RE.is_match(&url),
        is_dash_mpd: DASH_URL_RE.is_match(&url),
        url,
    }
}

#[cfg(test)]
mod tests {
    use super::enrich;
    use crate::types::Format;
    use ytfmt_extractor_api::{CatalogEntry, StaticCatalog};

    fn catalog() -> StaticCatalog {
        [
            (
                18,
                CatalogEntry {
                    mime_type: Some(r#"video/mp4; codecs="H.264, aac""#.to_string()),
                    quality_label: Some("360p".to_string()),
                    bitrate: Some(500_000),
                    audio_bitrate: Some(96),
                },
            ),
            (
                251,
                CatalogEntry {
                    mime_type: Some(r#"audio/webm; codecs="opus""#.to_string()),
                    audio_bitrate: Some(160),
                    ..Default::default()
                },
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn observed_fields_win() {
        let observed = Format {
            itag: 18,
            url: Some("https://rr1---sn-x.googlevideo.com/videoplayback?itag=18".to_string()),
            mime_type: Some(r#"video/mp4; codecs="avc1.42001E, mp4a.40.2""#.to_string()),
            bitrate: Some(512_345),
            width: Some(640),
            height: Some(360),
            ..Default::default()
        };
        let f = enrich(&observed, &catalog());
        assert_eq!(f.itag, 18);
        assert_eq!(f.container.as_deref(), Some("mp4"));
        assert_eq!(f.codecs, "avc1.42001E, mp4a.40.2");
        assert_eq!(f.bitrate, 512_345);
        // not observed, filled in by the catalog
        assert_eq!(f.audio_bitrate, Some(96));
        assert_eq!(f.quality_label.as_deref(), Some("360p"));
        assert_eq!(f.width, Some(640));
        assert!(!f.is_live && !f.is_hls && !f.is_dash_mpd);
    }

    #[test]
    fn catalog_only_mime_type() {
        let f = enrich(
            &Format {
                itag: 251,
                ..Default::default()
            },
            &catalog(),
        );
        assert_eq!(f.mime_type.as_deref(), Some(r#"audio/webm; codecs="opus""#));
        assert_eq!(f.container.as_deref(), Some("webm"));
        assert_eq!(f.codecs, "opus");
        assert_eq!(f.audio_bitrate, Some(160));
        assert_eq!(f.quality_label, None);
        assert_eq!(f.bitrate, 0);
        assert_eq!(f.url, "");
    }

    #[test]
    fn unknown_itag_passes_through() {
        let observed = Format {
            itag: 9999,
            mime_type: Some("video/mp4".to_string()),
            quality_label: Some("480p".to_string()),
            ..Default::default()
        };
        let f = enrich(&observed, &catalog());
        assert_eq!(f.container.as_deref(), Some("mp4"));
        assert_eq!(f.codecs, "");
        assert_eq!(f.quality_label.as_deref(), Some("480p"));
        assert_eq!(f.audio_bitrate, None);
    }

    #[test]
    fn no_mime_type_at_all() {
        let f = enrich(
            &Format {
                itag: 9999,
                ..Default::default()
            },
            &StaticCatalog::default(),
        );
        assert_eq!(f.container, None);
        assert_eq!(f.codecs, "");
    }

    #[test]
    fn delivery_flags() {
        let flags = |url: &str| {
            let f = enrich(
                &Format {
                    itag: 95,
                    url: Some(url.to_string()),
                    ..Default::default()
                },
                &StaticCatalog::default(),
            );
            (f.is_live, f.is_hls, f.is_dash_mpd)
        };
        assert_eq!(
            flags("https://manifest.googlevideo.com/api/manifest/hls_variant/expire/1/source/yt_live_broadcast/id/x"),
            (true, true, false)
        );
        assert_eq!(
            flags("https://manifest.googlevideo.com/api/manifest/hls_playlist/id/x"),
            (false, true, false)
        );
        assert_eq!(
            flags("https://manifest.googlevideo.com/api/manifest/dash/id/x"),
            (false, false, true)
        );
        assert_eq!(
            flags("https://manifest.googlevideo.com/api/manifest/hls_other/id/x"),
            (false, false, false)
        );
    }

    #[test]
    fn observation_is_untouched() {
        let observed = Format {
            itag: 18,
            ..Default::default()
        };
        let copy = observed.clone();
        let _ = enrich(&observed, &catalog());
        assert_eq!(observed, copy);
    }
}
