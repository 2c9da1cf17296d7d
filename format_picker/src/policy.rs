use serde::{Deserialize, Serialize};

fn default_audio_encoding_ranks() -> Vec<String> {
    ["mp4a", "mp3", "vorbis", "aac", "opus", "flac"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_video_encoding_ranks() -> Vec<String> {
    [
        "mp4v",
        "avc1",
        "Sorenson H.283",
        "MPEG-4 Visual",
        "VP8",
        "VP9",
        "H.264",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Codec preferences, used as the last tie-breaks when ranking formats.
/// Both lists go from worst to best, and are matched as substrings of the codecs string.
#[derive(SmartDefault, Deserialize, Serialize, PartialEq, Eq, Clone, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct RankingPolicy {
    #[default(_code = "default_audio_encoding_ranks()")]
    pub audio_encoding_ranks: Vec<String>,
    #[default(_code = "default_video_encoding_ranks()")]
    pub video_encoding_ranks: Vec<String>,
}

fn rank_of(ranks: &[String], codecs: &str) -> i32 {
    if codecs.is_empty() {
        return -1;
    }
    ranks
        .iter()
        .position(|enc| codecs.contains(enc.as_str()))
        .map_or(-1, |i| i as i32)
}

impl RankingPolicy {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Index of the first audio encoding found in `codecs`, -1 if none is.
    pub fn audio_encoding_rank(&self, codecs: &str) -> i32 {
        rank_of(&self.audio_encoding_ranks, codecs)
    }

    /// Index of the first video encoding found in `codecs`, -1 if none is.
    pub fn video_encoding_rank(&self, codecs: &str) -> i32 {
        rank_of(&self.video_encoding_ranks, codecs)
    }
}

#[cfg(test)]
mod tests {
    use super::RankingPolicy;

    #[test]
    fn default_ranks() {
        let policy = RankingPolicy::default();
        assert_eq!(policy.audio_encoding_rank("opus"), 4);
        assert_eq!(policy.audio_encoding_rank("avc1.4d401f, mp4a.40.2"), 0);
        assert_eq!(policy.audio_encoding_rank("H.264, aac"), 3);
        assert_eq!(policy.audio_encoding_rank("vp9"), -1);
        assert_eq!(policy.audio_encoding_rank(""), -1);
        assert_eq!(policy.video_encoding_rank("VP9"), 5);
        assert_eq!(policy.video_encoding_rank("H.264, aac"), 6);
        assert_eq!(policy.video_encoding_rank("avc1.640028"), 1);
        // matching is case-sensitive, as the lists are
        assert_eq!(policy.video_encoding_rank("vp9"), -1);
    }

    #[test]
    fn first_listed_match_wins() {
        let policy = RankingPolicy::default();
        // both "mp4a" and "opus" appear, the earlier entry of the list is taken
        assert_eq!(policy.audio_encoding_rank("opus, mp4a.40.2"), 0);
    }

    #[test]
    fn partial_policy_from_json() {
        let policy =
            RankingPolicy::from_json(r#"{"videoEncodingRanks": ["VP9", "avc1", "av01"]}"#)
                .unwrap();
        assert_eq!(policy.video_encoding_rank("av01.0.08M.08"), 2);
        assert_eq!(policy.video_encoding_rank("vp09.00.40.08"), -1);
        assert_eq!(
            policy.audio_encoding_ranks,
            RankingPolicy::default().audio_encoding_ranks
        );
    }
}
