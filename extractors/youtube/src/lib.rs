#[cfg(feature = "builtin_catalog")]
mod catalog;
mod common;
pub mod enrich;
pub mod json;
pub mod player;
pub mod types;
pub mod video_id;

#[cfg(feature = "builtin_catalog")]
pub use catalog::builtin_catalog;
pub use common::between;
pub use enrich::enrich;
pub use json::{cut_after_json, JsonCutError};
pub use player::{extract_player_response, PlayerPageError};
pub use video_id::{get_url_video_id, get_video_id, validate_id, validate_url, VideoId, VideoIdError};
