use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};
use ytfmt_extractor_api::{FormatCatalog, MediaFormat};

use super::enrich::enrich;
use super::json::{cut_after_json, JsonCutError};
use super::types::{Format, LegacyPlayerConfig, PlayerResponse};

static WEB_PLAYER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"ytInitialPlayerResponse\s*=\s*").unwrap());
static LEGACY_PLAYER_CONFIG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"ytplayer\.config\s*=\s*").unwrap());

#[derive(Error, Debug)]
pub enum PlayerPageError {
    #[error("no player response found in the page")]
    MissingPlayerResponse,
    #[error(transparent)]
    Cut(#[from] JsonCutError),
    #[error("player response is not valid: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything after the first match of `re`, if any.
fn after<'a>(re: &Regex, page: &'a str) -> Option<&'a str> {
    re.find(page).map(|m| &page[m.end()..])
}

/// Finds the player response embedded in a watch page.
pub fn extract_player_response(page: &str) -> Result<PlayerResponse, PlayerPageError> {
    if let Some(rest) = after(&WEB_PLAYER_RE, page) {
        debug!("found ytInitialPlayerResponse");
        return Ok(serde_json::from_str(cut_after_json(rest)?)?);
    }
    if let Some(rest) = after(&LEGACY_PLAYER_CONFIG_RE, page) {
        debug!("found legacy ytplayer.config");
        let config: LegacyPlayerConfig = serde_json::from_str(cut_after_json(rest)?)?;
        let response = config
            .args
            .player_response
            .ok_or(PlayerPageError::MissingPlayerResponse)?;
        return Ok(serde_json::from_str(&response)?);
    }
    Err(PlayerPageError::MissingPlayerResponse)
}

impl PlayerResponse {
    /// Muxed formats first, then the adaptive ones, as the service lists them.
    pub fn raw_formats(&self) -> impl Iterator<Item = &Format> {
        self.streaming_data
            .iter()
            .flat_map(|strm| {
                strm.formats
                    .iter()
                    .flatten()
                    .chain(strm.adaptive_formats.iter().flatten())
            })
    }

    pub fn formats<C>(&self, catalog: &C) -> Vec<MediaFormat>
    where
        C: FormatCatalog + ?Sized,
    {
        let formats: Vec<MediaFormat> = self
            .raw_formats()
            .map(|fmt| enrich(fmt, catalog))
            .collect();
        if !formats.is_empty() && formats.iter().all(|f| f.url.is_empty()) {
            warn!("formats only carry signature ciphers, none has a plain url");
        }
        debug!(count = formats.len(), "enriched formats");
        formats
    }
}
