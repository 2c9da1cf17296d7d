#[macro_use]
extern crate smart_default;

pub mod filter;
pub mod policy;
pub mod rank;
pub mod select;

pub use filter::{filter_formats, FormatFilter};
pub use policy::RankingPolicy;
pub use select::{FormatPicker, FormatRequest, Quality};
pub use ytfmt_extractor_api::MediaFormat;

use thiserror::Error;

#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum PickError {
    #[error("no formats found with {filter} filter")]
    NoFormatsMatchFilter { filter: String },
    #[error("no such format found: {quality}")]
    NoMatchingFormat { quality: String },
    /// Never returned, a filter that does not exist is a bug on the caller side.
    /// See [`FormatFilter::named`].
    #[error("given filter ({0}) is not supported")]
    InvalidFilterSpecification(String),
}
