use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use tracing::debug;
use ytfmt_extractor_api::MediaFormat;

use super::filter::{filter_formats, FormatFilter};
use super::policy::RankingPolicy;
use super::PickError;

#[derive(SmartDefault, PartialEq, Eq, Clone, Debug)]
pub enum Quality {
    /// first format of the ranking
    #[default]
    Highest,
    /// last format of the ranking
    Lowest,
    /// format with audio having the best audio score
    HighestAudio,
    LowestAudio,
    /// format with video having the highest bitrate
    HighestVideo,
    LowestVideo,
    /// exact itag
    Itag(String),
    /// itags to try, in order
    Itags(Vec<String>),
}

impl FromStr for Quality {
    type Err = Infallible;

    /// Anything that is not a tier name is taken as an itag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "highest" => Quality::Highest,
            "lowest" => Quality::Lowest,
            "highestaudio" => Quality::HighestAudio,
            "lowestaudio" => Quality::LowestAudio,
            "highestvideo" => Quality::HighestVideo,
            "lowestvideo" => Quality::LowestVideo,
            itag => Quality::Itag(itag.to_string()),
        })
    }
}

impl From<u16> for Quality {
    fn from(itag: u16) -> Self {
        Quality::Itag(itag.to_string())
    }
}

impl<T: ToString> FromIterator<T> for Quality {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Quality::Itags(iter.into_iter().map(|i| i.to_string()).collect())
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quality::Highest => f.write_str("highest"),
            Quality::Lowest => f.write_str("lowest"),
            Quality::HighestAudio => f.write_str("highestaudio"),
            Quality::LowestAudio => f.write_str("lowestaudio"),
            Quality::HighestVideo => f.write_str("highestvideo"),
            Quality::LowestVideo => f.write_str("lowestvideo"),
            Quality::Itag(itag) => f.write_str(itag),
            Quality::Itags(itags) => f.write_str(&itags.join(",")),
        }
    }
}

/// What the caller wants out of the format list.
#[derive(Default, Debug)]
pub struct FormatRequest<'a> {
    /// Taken as-is when given, nothing else is looked at.
    pub format: Option<&'a MediaFormat>,
    pub filter: Option<FormatFilter>,
    pub quality: Quality,
}

impl FormatRequest<'_> {
    pub fn quality<Q: Into<Quality>>(quality: Q) -> Self {
        FormatRequest {
            quality: quality.into(),
            ..Default::default()
        }
    }

    pub fn with_filter(mut self, filter: FormatFilter) -> Self {
        self.filter = Some(filter);
        self
    }
}

/// The format whose key compares as `wanted` against all the others.
/// The first one wins on ties.
fn pick_by<'a, K, F>(
    candidates: impl IntoIterator<Item = &'a MediaFormat>,
    key: F,
    wanted: Ordering,
) -> Option<&'a MediaFormat>
where
    K: PartialOrd,
    F: Fn(&MediaFormat) -> K,
{
    let mut best: Option<(&'a MediaFormat, K)> = None;
    for format in candidates {
        let k = key(format);
        let better = match &best {
            Some((_, best_k)) => k.partial_cmp(best_k) == Some(wanted),
            None => true,
        };
        if better {
            best = Some((format, k));
        }
    }
    best.map(|(format, _)| format)
}

fn with_audio<'a, 'c>(
    candidates: &'c [&'a MediaFormat],
) -> impl Iterator<Item = &'a MediaFormat> + 'c {
    candidates.iter().copied().filter(|f| f.has_audio())
}

fn with_video<'a, 'c>(
    candidates: &'c [&'a MediaFormat],
) -> impl Iterator<Item = &'a MediaFormat> + 'c {
    candidates.iter().copied().filter(|f| f.has_video())
}

fn find_itag<'a>(candidates: &[&'a MediaFormat], itag: &str) -> Option<&'a MediaFormat> {
    candidates
        .iter()
        .copied()
        .find(|f| f.itag.to_string() == itag)
}

#[derive(Default, Clone, Debug)]
pub struct FormatPicker {
    pub policy: RankingPolicy,
}

impl FormatPicker {
    pub fn new(policy: RankingPolicy) -> Self {
        FormatPicker { policy }
    }

    /// All formats, from the highest quality to the lowest.
    pub fn sort<'a>(&self, formats: &'a [MediaFormat]) -> Vec<&'a MediaFormat> {
        let mut sorted: Vec<&MediaFormat> = formats.iter().collect();
        self.policy.sort(&mut sorted);
        sorted
    }

    /// Resolves the request against the formats of one video.
    ///
    /// Not finding anything is an expected outcome and is returned as an error value.
    pub fn choose<'a>(
        &self,
        formats: &'a [MediaFormat],
        request: &FormatRequest<'a>,
    ) -> Result<&'a MediaFormat, PickError> {
        if let Some(format) = request.format {
            return Ok(format);
        }

        let mut candidates: Vec<&'a MediaFormat> = match &request.filter {
            Some(filter) => {
                let kept = filter_formats(formats, filter);
                if kept.is_empty() {
                    return Err(PickError::NoFormatsMatchFilter {
                        filter: filter.to_string(),
                    });
                }
                kept
            }
            None => formats.iter().collect(),
        };
        debug!(quality = %request.quality, candidates = candidates.len(), "choosing format");

        let chosen = match &request.quality {
            Quality::Highest => {
                self.policy.sort(&mut candidates);
                candidates.first().copied()
            }
            Quality::Lowest => {
                self.policy.sort(&mut candidates);
                candidates.last().copied()
            }
            Quality::HighestAudio => pick_by(
                with_audio(&candidates),
                |f| self.policy.audio_score(f),
                Ordering::Greater,
            ),
            Quality::LowestAudio => pick_by(
                with_audio(&candidates),
                |f| self.policy.audio_score(f),
                Ordering::Less,
            ),
            Quality::HighestVideo => {
                pick_by(with_video(&candidates), |f| f.bitrate, Ordering::Greater)
            }
            Quality::LowestVideo => pick_by(with_video(&candidates), |f| f.bitrate, Ordering::Less),
            Quality::Itag(itag) => find_itag(&candidates, itag),
            Quality::Itags(itags) => itags
                .iter()
                .find_map(|itag| find_itag(&candidates, itag)),
        };

        chosen.ok_or_else(|| PickError::NoMatchingFormat {
            quality: request.quality.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{FormatPicker, FormatRequest, Quality};
    use crate::{FormatFilter, PickError, RankingPolicy};
    use ytfmt_extractor_api::MediaFormat;

    fn format(
        itag: u16,
        label: Option<&str>,
        bitrate: u64,
        audio: Option<u32>,
        codecs: &str,
    ) -> MediaFormat {
        MediaFormat {
            itag,
            quality_label: label.map(str::to_string),
            bitrate,
            audio_bitrate: audio,
            codecs: codecs.to_string(),
            ..Default::default()
        }
    }

    fn formats() -> Vec<MediaFormat> {
        vec![
            format(18, Some("360p"), 500_000, Some(96), "avc1.42001E, mp4a.40.2"),
            format(137, Some("1080p"), 4_000_000, None, "avc1.640028"),
            format(251, None, 150_000, Some(160), "opus"),
            format(22, Some("720p"), 2_000_000, Some(192), "avc1.64001F, mp4a.40.2"),
            format(248, Some("1080p"), 2_600_000, None, "vp9"),
            format(140, None, 130_000, Some(128), "mp4a.40.2"),
            format(250, None, 80_000, Some(64), "opus"),
            format(160, Some("144p"), 100_000, None, "avc1.4d400c"),
        ]
    }

    fn choose(formats: &[MediaFormat], request: FormatRequest) -> Result<u16, PickError> {
        FormatPicker::default()
            .choose(formats, &request)
            .map(|f| f.itag)
    }

    #[test]
    fn highest_is_first_ranked() {
        let all = formats();
        let first = FormatPicker::default().sort(&all)[0].itag;
        assert_eq!(first, 22);
        assert_eq!(choose(&all, FormatRequest::default()), Ok(22));
        assert_eq!(choose(&all, FormatRequest::quality(Quality::Highest)), Ok(22));
    }

    #[test]
    fn lowest_is_last_ranked() {
        assert_eq!(choose(&formats(), FormatRequest::quality(Quality::Lowest)), Ok(250));
    }

    #[test]
    fn empty_list() {
        assert_eq!(
            choose(&[], FormatRequest::quality(Quality::Highest)),
            Err(PickError::NoMatchingFormat {
                quality: "highest".to_string()
            })
        );
        assert_eq!(
            choose(&[], FormatRequest::quality(Quality::LowestAudio)),
            Err(PickError::NoMatchingFormat {
                quality: "lowestaudio".to_string()
            })
        );
    }

    #[test]
    fn audio_tiers() {
        let all = formats();
        assert_eq!(choose(&all, FormatRequest::quality(Quality::HighestAudio)), Ok(22));
        assert_eq!(choose(&all, FormatRequest::quality(Quality::LowestAudio)), Ok(250));
        assert_eq!(
            choose(
                &all,
                FormatRequest::quality(Quality::HighestAudio).with_filter(FormatFilter::AudioOnly)
            ),
            Ok(251)
        );
    }

    #[test]
    fn audio_tier_ties_keep_first() {
        let all = vec![
            format(1, None, 0, Some(128), "opus"),
            format(2, None, 0, Some(128), "opus"),
        ];
        assert_eq!(choose(&all, FormatRequest::quality(Quality::HighestAudio)), Ok(1));
        assert_eq!(choose(&all, FormatRequest::quality(Quality::LowestAudio)), Ok(1));
    }

    #[test]
    fn video_tiers() {
        let all = formats();
        assert_eq!(choose(&all, FormatRequest::quality(Quality::HighestVideo)), Ok(137));
        assert_eq!(choose(&all, FormatRequest::quality(Quality::LowestVideo)), Ok(160));
    }

    #[test]
    fn tiers_skip_formats_without_media() {
        let all = vec![format(1, None, 9_000_000, None, "")];
        for quality in [
            Quality::HighestAudio,
            Quality::LowestAudio,
            Quality::HighestVideo,
            Quality::LowestVideo,
        ] {
            assert!(matches!(
                choose(&all, FormatRequest::quality(quality)),
                Err(PickError::NoMatchingFormat { .. })
            ));
        }
    }

    #[test]
    fn exact_itag() {
        let all = formats();
        assert_eq!(choose(&all, FormatRequest::quality(140u16)), Ok(140));
        assert_eq!(choose(&all, FormatRequest::quality("248".parse::<Quality>().unwrap())), Ok(248));
        assert_eq!(
            choose(&all, FormatRequest::quality(Quality::Itag("9999".to_string()))),
            Err(PickError::NoMatchingFormat {
                quality: "9999".to_string()
            })
        );
        // compared as strings
        assert!(choose(&all, FormatRequest::quality(Quality::Itag("018".to_string()))).is_err());
    }

    #[test]
    fn itag_fallback_in_order() {
        let mut all = formats();
        all.push(format(42, Some("240p"), 1, None, ""));
        let quality: Quality = [999, 42].into_iter().collect();
        assert_eq!(choose(&all, FormatRequest::quality(quality)), Ok(42));

        let quality: Quality = [251, 18].into_iter().collect();
        assert_eq!(choose(&all, FormatRequest::quality(quality)), Ok(251));

        let quality: Quality = ["1", "2"].into_iter().collect();
        assert_eq!(
            choose(&all, FormatRequest::quality(quality)),
            Err(PickError::NoMatchingFormat {
                quality: "1,2".to_string()
            })
        );
    }

    #[test]
    fn filter_applies_first() {
        let all = formats();
        assert_eq!(
            choose(&all, FormatRequest::default().with_filter(FormatFilter::VideoOnly)),
            Ok(137)
        );
        assert_eq!(
            choose(
                &all,
                FormatRequest::quality(251u16).with_filter(FormatFilter::VideoOnly)
            ),
            Err(PickError::NoMatchingFormat {
                quality: "251".to_string()
            })
        );
        assert_eq!(
            choose(
                &all,
                FormatRequest::default().with_filter(FormatFilter::custom(|f| f.codecs.contains("vp9")))
            ),
            Ok(248)
        );
    }

    #[test]
    fn filter_without_matches() {
        let all = vec![format(140, None, 130_000, Some(128), "mp4a.40.2")];
        assert_eq!(
            choose(&all, FormatRequest::default().with_filter(FormatFilter::Video)),
            Err(PickError::NoFormatsMatchFilter {
                filter: "video".to_string()
            })
        );
    }

    #[test]
    fn explicit_format_bypasses_everything() {
        let outsider = format(7, None, 0, None, "");
        let request = FormatRequest {
            format: Some(&outsider),
            filter: Some(FormatFilter::Audio),
            quality: Quality::Itag("18".to_string()),
        };
        assert_eq!(FormatPicker::default().choose(&[], &request), Ok(&outsider));
    }

    #[test]
    fn picker_uses_its_policy() {
        let all = vec![
            format(1, Some("720p"), 1000, None, "avc1.4d401f"),
            format(2, Some("720p"), 1000, None, "VP9"),
        ];
        let request = FormatRequest::default();
        assert_eq!(FormatPicker::default().choose(&all, &request).unwrap().itag, 2);
        let picker = FormatPicker::new(RankingPolicy {
            video_encoding_ranks: vec!["VP9".to_string(), "avc1".to_string()],
            ..Default::default()
        });
        assert_eq!(picker.choose(&all, &request).unwrap().itag, 1);
    }

    #[test]
    fn quality_names_round_trip_through_display() {
        for name in [
            "highest",
            "lowest",
            "highestaudio",
            "lowestaudio",
            "highestvideo",
            "lowestvideo",
            "137",
        ] {
            assert_eq!(name.parse::<Quality>().unwrap().to_string(), name);
        }
        assert_eq!("HIGHEST".parse::<Quality>().unwrap(), Quality::Itag("HIGHEST".to_string()));
    }
}
