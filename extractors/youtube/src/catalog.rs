use once_cell::sync::Lazy;
use ytfmt_extractor_api::{CatalogEntry, StaticCatalog};

type KnownFormat = (
    u16,
    &'static str,
    Option<&'static str>,
    Option<u64>,
    Option<u32>,
);

// itag, mime type, quality label, bitrate, audio bitrate (kbps)
#[rustfmt::skip]
const KNOWN_FORMATS: &[KnownFormat] = &[
    (5, r#"video/flv; codecs="Sorenson H.283, mp3""#, Some("240p"), Some(250_000), Some(64)),
    (6, r#"video/flv; codecs="Sorenson H.263, mp3""#, Some("270p"), Some(800_000), Some(64)),
    (13, r#"video/3gp; codecs="MPEG-4 Visual, aac""#, None, Some(500_000), None),
    (17, r#"video/3gp; codecs="MPEG-4 Visual, aac""#, Some("144p"), Some(50_000), Some(24)),
    (18, r#"video/mp4; codecs="H.264, aac""#, Some("360p"), Some(500_000), Some(96)),
    (22, r#"video/mp4; codecs="H.264, aac""#, Some("720p"), Some(2_000_000), Some(192)),
    (34, r#"video/flv; codecs="H.264, aac""#, Some("360p"), Some(500_000), Some(128)),
    (35, r#"video/flv; codecs="H.264, aac""#, Some("480p"), Some(800_000), Some(128)),
    (36, r#"video/3gp; codecs="MPEG-4 Visual, aac""#, Some("240p"), Some(175_000), Some(32)),
    (37, r#"video/mp4; codecs="H.264, aac""#, Some("1080p"), Some(3_000_000), Some(192)),
    (38, r#"video/mp4; codecs="H.264, aac""#, Some("3072p"), Some(3_500_000), Some(192)),
    (43, r#"video/webm; codecs="VP8, vorbis""#, Some("360p"), Some(500_000), Some(128)),
    (44, r#"video/webm; codecs="VP8, vorbis""#, Some("480p"), Some(1_000_000), Some(128)),
    (45, r#"video/webm; codecs="VP8, vorbis""#, Some("720p"), Some(2_000_000), Some(192)),
    (46, r#"audio/webm; codecs="vp8, vorbis""#, Some("1080p"), None, Some(192)),
    (82, r#"video/mp4; codecs="H.264, aac""#, Some("360p"), Some(500_000), Some(96)),
    (83, r#"video/mp4; codecs="H.264, aac""#, Some("240p"), Some(500_000), Some(96)),
    (84, r#"video/mp4; codecs="H.264, aac""#, Some("720p"), Some(2_000_000), Some(192)),
    (85, r#"video/mp4; codecs="H.264, aac""#, Some("1080p"), Some(3_000_000), Some(192)),
    (91, r#"video/ts; codecs="H.264, aac""#, Some("144p"), Some(100_000), Some(48)),
    (92, r#"video/ts; codecs="H.264, aac""#, Some("240p"), Some(150_000), Some(48)),
    (93, r#"video/ts; codecs="H.264, aac""#, Some("360p"), Some(500_000), Some(128)),
    (94, r#"video/ts; codecs="H.264, aac""#, Some("480p"), Some(800_000), Some(128)),
    (95, r#"video/ts; codecs="H.264, aac""#, Some("720p"), Some(1_500_000), Some(256)),
    (96, r#"video/ts; codecs="H.264, aac""#, Some("1080p"), Some(2_500_000), Some(256)),
    (100, r#"audio/webm; codecs="VP8, vorbis""#, Some("360p"), None, Some(128)),
    (101, r#"audio/webm; codecs="VP8, vorbis""#, Some("360p"), None, Some(192)),
    (102, r#"audio/webm; codecs="VP8, vorbis""#, Some("720p"), None, Some(192)),
    (120, r#"video/flv; codecs="H.264, aac""#, Some("720p"), Some(2_000_000), Some(128)),
    (127, r#"audio/ts; codecs="aac""#, None, None, Some(96)),
    (128, r#"audio/ts; codecs="aac""#, None, None, Some(96)),
    (132, r#"video/ts; codecs="H.264, aac""#, Some("240p"), Some(150_000), Some(48)),
    (133, r#"video/mp4; codecs="H.264""#, Some("240p"), Some(200_000), None),
    (134, r#"video/mp4; codecs="H.264""#, Some("360p"), Some(300_000), None),
    (135, r#"video/mp4; codecs="H.264""#, Some("480p"), Some(500_000), None),
    (136, r#"video/mp4; codecs="H.264""#, Some("720p"), Some(1_000_000), None),
    (137, r#"video/mp4; codecs="H.264""#, Some("1080p"), Some(2_500_000), None),
    (138, r#"video/mp4; codecs="H.264""#, Some("4320p"), Some(13_500_000), None),
    (139, r#"audio/mp4; codecs="aac""#, None, None, Some(48)),
    (140, r#"audio/m4a; codecs="aac""#, None, None, Some(128)),
    (141, r#"audio/mp4; codecs="aac""#, None, None, Some(256)),
    (151, r#"video/ts; codecs="H.264, aac""#, Some("720p"), Some(50_000), Some(24)),
    (160, r#"video/mp4; codecs="H.264""#, Some("144p"), Some(100_000), None),
    (171, r#"audio/webm; codecs="vorbis""#, None, None, Some(128)),
    (172, r#"audio/webm; codecs="vorbis""#, None, None, Some(192)),
    (242, r#"video/webm; codecs="VP9""#, Some("240p"), Some(100_000), None),
    (243, r#"video/webm; codecs="VP9""#, Some("360p"), Some(250_000), None),
    (244, r#"video/webm; codecs="VP9""#, Some("480p"), Some(500_000), None),
    (247, r#"video/webm; codecs="VP9""#, Some("720p"), Some(700_000), None),
    (248, r#"video/webm; codecs="VP9""#, Some("1080p"), Some(1_500_000), None),
    (249, r#"audio/webm; codecs="opus""#, None, None, Some(48)),
    (250, r#"audio/webm; codecs="opus""#, None, None, Some(64)),
    (251, r#"audio/webm; codecs="opus""#, None, None, Some(160)),
    (264, r#"video/mp4; codecs="H.264""#, Some("1440p"), Some(4_000_000), None),
    (266, r#"video/mp4; codecs="H.264""#, Some("2160p"), Some(12_500_000), None),
    (271, r#"video/webm; codecs="VP9""#, Some("1440p"), Some(9_000_000), None),
    (272, r#"video/webm; codecs="VP9""#, Some("4320p"), Some(20_000_000), None),
    (278, r#"video/webm; codecs="VP9""#, Some("144p 30fps"), Some(80_000), None),
    (298, r#"video/mp4; codecs="H.264""#, Some("720p"), Some(3_000_000), None),
    (299, r#"video/mp4; codecs="H.264""#, Some("1080p"), Some(5_500_000), None),
    (300, r#"video/ts; codecs="H.264, aac""#, Some("720p"), Some(1_318_000), Some(48)),
    (302, r#"video/webm; codecs="VP9""#, Some("720p HFR"), Some(2_500_000), None),
    (303, r#"video/webm; codecs="VP9""#, Some("1080p HFR"), Some(5_000_000), None),
    (308, r#"video/webm; codecs="VP9""#, Some("1440p HFR"), Some(10_000_000), None),
    (313, r#"video/webm; codecs="VP9""#, Some("2160p"), Some(13_000_000), None),
    (315, r#"video/webm; codecs="VP9""#, Some("2160p HFR"), Some(20_000_000), None),
    (330, r#"video/webm; codecs="VP9""#, Some("144p HDR, HFR"), Some(80_000), None),
    (331, r#"video/webm; codecs="VP9""#, Some("240p HDR, HFR"), Some(100_000), None),
    (332, r#"video/webm; codecs="VP9""#, Some("360p HDR, HFR"), Some(250_000), None),
    (333, r#"video/webm; codecs="VP9""#, Some("240p HDR, HFR"), Some(500_000), None),
    (334, r#"video/webm; codecs="VP9""#, Some("720p HDR, HFR"), Some(1_000_000), None),
    (335, r#"video/webm; codecs="VP9""#, Some("1080p HDR, HFR"), Some(1_500_000), None),
    (336, r#"video/webm; codecs="VP9""#, Some("1440p HDR, HFR"), Some(5_000_000), None),
    (337, r#"video/webm; codecs="VP9""#, Some("2160p HDR, HFR"), Some(12_000_000), None),
];

static BUILTIN: Lazy<StaticCatalog> = Lazy::new(|| {
    KNOWN_FORMATS
        .iter()
        .map(|&(itag, mime_type, quality_label, bitrate, audio_bitrate)| {
            (
                itag,
                CatalogEntry {
                    mime_type: Some(mime_type.to_string()),
                    quality_label: quality_label.map(str::to_string),
                    bitrate,
                    audio_bitrate,
                },
            )
        })
        .collect()
});

/// Reference data for the itags YouTube has been known to serve.
pub fn builtin_catalog() -> &'static StaticCatalog {
    &BUILTIN
}
