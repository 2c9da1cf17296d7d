use std::fmt;

use tracing::trace;
use ytfmt_extractor_api::MediaFormat;

use super::PickError;

type Predicate = Box<dyn Fn(&MediaFormat) -> bool + Send + Sync>;

/// What kind of formats to keep.
pub enum FormatFilter {
    /// both video and audio
    AudioAndVideo,
    /// with video, audio or not
    Video,
    /// video without audio
    VideoOnly,
    /// with audio, video or not
    Audio,
    /// audio without video
    AudioOnly,
    Custom(Predicate),
}

impl FormatFilter {
    pub const NAMES: [&'static str; 5] = ["audioandvideo", "video", "videoonly", "audio", "audioonly"];

    /// # Panics
    ///
    /// If `name` is not one of [`FormatFilter::NAMES`]. Asking for a filter
    /// that does not exist is a bug in the caller, not a property of the video.
    pub fn named(name: &str) -> FormatFilter {
        match name {
            "audioandvideo" => FormatFilter::AudioAndVideo,
            "video" => FormatFilter::Video,
            "videoonly" => FormatFilter::VideoOnly,
            "audio" => FormatFilter::Audio,
            "audioonly" => FormatFilter::AudioOnly,
            _ => panic!(
                "{}",
                PickError::InvalidFilterSpecification(name.to_string())
            ),
        }
    }

    pub fn custom<F>(predicate: F) -> FormatFilter
    where
        F: Fn(&MediaFormat) -> bool + Send + Sync + 'static,
    {
        FormatFilter::Custom(Box::new(predicate))
    }

    pub fn name(&self) -> &'static str {
        match self {
            FormatFilter::AudioAndVideo => "audioandvideo",
            FormatFilter::Video => "video",
            FormatFilter::VideoOnly => "videoonly",
            FormatFilter::Audio => "audio",
            FormatFilter::AudioOnly => "audioonly",
            FormatFilter::Custom(_) => "custom",
        }
    }

    pub fn matches(&self, format: &MediaFormat) -> bool {
        match self {
            FormatFilter::AudioAndVideo => format.has_video() && format.has_audio(),
            FormatFilter::Video => format.has_video(),
            FormatFilter::VideoOnly => format.has_video() && !format.has_audio(),
            FormatFilter::Audio => format.has_audio(),
            FormatFilter::AudioOnly => !format.has_video() && format.has_audio(),
            FormatFilter::Custom(predicate) => predicate(format),
        }
    }
}

impl fmt::Display for FormatFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for FormatFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FormatFilter({})", self.name())
    }
}

/// Keeps the formats matching `filter`, in their original order.
pub fn filter_formats<'a>(formats: &'a [MediaFormat], filter: &FormatFilter) -> Vec<&'a MediaFormat> {
    let kept: Vec<&MediaFormat> = formats.iter().filter(|f| filter.matches(f)).collect();
    trace!(%filter, total = formats.len(), kept = kept.len(), "filtered formats");
    kept
}
