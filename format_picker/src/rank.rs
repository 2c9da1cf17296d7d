use std::borrow::Borrow;
use std::cmp::Ordering;

use ytfmt_extractor_api::MediaFormat;

use super::policy::RankingPolicy;

/// 2 for a usable resolution, 1 more for audio.
fn feature_score(format: &MediaFormat) -> u8 {
    let video = if format.resolution() > 0 { 2 } else { 0 };
    video + u8::from(format.has_audio())
}

impl RankingPolicy {
    /// Audio bitrate, with the codec rank folded in as a fraction.
    pub fn audio_score(&self, format: &MediaFormat) -> f64 {
        f64::from(format.audio_bitrate.unwrap_or(0))
            + f64::from(self.audio_encoding_rank(&format.codecs)) / 10.0
    }

    /// Orders formats from the highest quality to the lowest.
    ///
    /// By what the format carries, resolution, video bitrate, audio score,
    /// and finally the video codec.
    pub fn compare(&self, a: &MediaFormat, b: &MediaFormat) -> Ordering {
        feature_score(b)
            .cmp(&feature_score(a))
            .then_with(|| b.resolution().cmp(&a.resolution()))
            .then_with(|| b.bitrate.cmp(&a.bitrate))
            .then_with(|| self.audio_score(b).total_cmp(&self.audio_score(a)))
            .then_with(|| {
                self.video_encoding_rank(&b.codecs)
                    .cmp(&self.video_encoding_rank(&a.codecs))
            })
    }

    /// Stable, so formats ranked equal keep their relative order.
    pub fn sort<F: Borrow<MediaFormat>>(&self, formats: &mut [F]) {
        formats.sort_by(|a, b| {
            self.compare(
                Borrow::<MediaFormat>::borrow(a),
                Borrow::<MediaFormat>::borrow(b),
            )
        });
    }
}
