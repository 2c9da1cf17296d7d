use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use url::{form_urlencoded, Url};

use super::common::YOUTUBE_HOSTS_QUERY;

const ID_PATTERN: &str = r"^[a-zA-Z0-9_-]{11}$";
const ID_LENGTH: usize = 11;

static ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(ID_PATTERN).unwrap());

/// youtu.be/<id>, youtube.com/embed/<id>, youtube.com/v/<id>, matched against the link as given
static PATH_STYLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(youtu\.be/|(www\.)?youtube\.com/(embed|v)/)").unwrap()
});

static WATCH_URL: Lazy<Url> =
    Lazy::new(|| Url::parse("https://www.youtube.com/watch").unwrap());

#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum VideoIdError {
    #[error("not a YouTube domain: {host}")]
    NotSupportedDomain { host: String },
    #[error("no video id found: {link}")]
    NoIdentifierFound { link: String },
    #[error("video id ({id}) does not match expected format ({})", ID_PATTERN)]
    InvalidIdentifierShape { id: String },
}

/// Canonical 11-character YouTube video id.
#[derive(Serialize, PartialEq, Eq, Hash, Clone, Debug)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn watch_url(&self) -> Url {
        let mut url = WATCH_URL.clone();
        url.query_pairs_mut().append_pair("v", &self.0);
        url
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for VideoId {
    type Err = VideoIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        get_video_id(s)
    }
}

/// Whether `id` has the shape of a video id.
pub fn validate_id(id: &str) -> bool {
    ID_RE.is_match(id)
}

/// Whether a video id can be read out of `link`.
pub fn validate_url(link: &str) -> bool {
    get_url_video_id(link).is_ok()
}

/// Takes `s` as the id if it already looks like one, reads it from the url otherwise.
pub fn get_video_id(s: &str) -> Result<VideoId, VideoIdError> {
    if validate_id(s) {
        Ok(VideoId(s.to_string()))
    } else {
        get_url_video_id(s)
    }
}

struct Link {
    host: Option<String>,
    last_segment: Option<String>,
    v: Option<String>,
}

impl Link {
    fn parse(link: &str) -> Link {
        match Url::parse(link) {
            Ok(url) => {
                let segments: Vec<&str> = url
                    .path_segments()
                    .map(|s| s.collect())
                    .unwrap_or_default();
                Link {
                    host: url.host_str().map(str::to_string),
                    last_segment: segments.last().map(|s| s.to_string()),
                    v: url
                        .query_pairs()
                        .find(|(k, _)| k == "v")
                        .map(|(_, v)| v.into_owned()),
                }
            }
            // no scheme, like "youtube.com/watch?v=..."; there is no host to check
            // and it can't be path-style
            Err(_) => {
                let query = link.split_once('?').map_or("", |(_, query)| query);
                Link {
                    host: None,
                    last_segment: None,
                    v: form_urlencoded::parse(query.as_bytes())
                        .find(|(k, _)| k == "v")
                        .map(|(_, v)| v.into_owned()),
                }
            }
        }
    }
}

/// Reads the video id out of any of the url shapes YouTube has used.
///
/// * `https://www.youtube.com/watch?v=VIDEO_ID` (also `m.`, `music.`, `gaming.`)
/// * `https://youtu.be/VIDEO_ID`
/// * `https://www.youtube.com/embed/VIDEO_ID`
/// * `https://www.youtube.com/v/VIDEO_ID`
pub fn get_url_video_id(link: &str) -> Result<VideoId, VideoIdError> {
    let parsed = Link::parse(link);
    let mut candidate = parsed.v.clone();

    if PATH_STYLE_RE.is_match(link) {
        if candidate.is_none() {
            candidate = parsed.last_segment.clone();
        }
    } else if let Some(host) = &parsed.host {
        if !YOUTUBE_HOSTS_QUERY.contains(&host.as_str()) {
            return Err(VideoIdError::NotSupportedDomain { host: host.clone() });
        }
    }

    let candidate = candidate
        .filter(|c| !c.is_empty())
        .ok_or_else(|| VideoIdError::NoIdentifierFound {
            link: link.to_string(),
        })?;
    let id: String = candidate.chars().take(ID_LENGTH).collect();
    if !validate_id(&id) {
        return Err(VideoIdError::InvalidIdentifierShape { id });
    }
    Ok(VideoId(id))
}
